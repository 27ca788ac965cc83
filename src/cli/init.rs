//! Init command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::fs;
use std::path::PathBuf;

use crate::domain::SettingsLayout;
use crate::render::{render_layout, OutputFormat};

#[derive(Args)]
pub struct InitArgs {
    /// Directory to write the settings file into
    #[arg(short = 'd', long, value_name = "DIR", default_value = ".")]
    pub dir: PathBuf,

    /// File format: toml, yaml or json
    #[arg(short = 'f', long, value_name = "FORMAT", default_value = "toml")]
    pub format: String,

    /// Overwrite an existing settings file
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: InitArgs) -> Result<()> {
    let format: OutputFormat = args.format.parse()?;
    let Some(file_format) = format.file_format() else {
        anyhow::bail!("init cannot write '{}' output; use toml, yaml or json", format);
    };

    let path = args.dir.join(format!("frontconf.{}", file_format.extension()));
    if path.exists() && !args.force {
        anyhow::bail!("{} already exists (use --force to overwrite)", path.display());
    }

    let rendered = render_layout(&SettingsLayout::builtin(), file_format)?;
    fs::create_dir_all(&args.dir)
        .with_context(|| format!("Failed creating directory: {}", args.dir.display()))?;
    fs::write(&path, rendered).with_context(|| format!("Failed writing {}", path.display()))?;

    tracing::info!("Wrote default settings to {}", path.display());
    println!("Wrote {}", path.display());
    Ok(())
}
