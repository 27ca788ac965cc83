//! Resolve command implementation

use anyhow::{Context, Result};
use clap::Args;

use super::utils::ResolutionArgs;
use crate::render::{render_settings, OutputFormat};

#[derive(Args)]
pub struct ResolveArgs {
    #[command(flatten)]
    pub resolution: ResolutionArgs,

    /// Output format: json, toml, yaml or env
    #[arg(short = 'f', long, value_name = "FORMAT", default_value = "json")]
    pub format: String,
}

pub fn run(args: ResolveArgs) -> Result<()> {
    let format: OutputFormat = args.format.parse()?;
    let resolver = args.resolution.resolver();
    let settings = resolver.resolve().context("Failed to resolve settings")?;

    let rendered = render_settings(&settings, format, resolver.prefix())?;
    print!("{}", rendered);
    Ok(())
}
