//! Check command implementation

use anyhow::{Context, Result};
use clap::Args;
use console::style;

use super::utils::ResolutionArgs;
use crate::config::global;

#[derive(Args)]
pub struct CheckArgs {
    #[command(flatten)]
    pub resolution: ResolutionArgs,
}

pub fn run(args: CheckArgs) -> Result<()> {
    let resolver = args.resolution.resolver();
    let settings = global::init(&resolver).context("Settings are invalid")?;

    let modules: Vec<&str> = settings.modules().iter().map(|m| m.as_str()).collect();
    println!("{} settings are valid", style("OK").green().bold());
    println!("  Compatibility date: {}", settings.compatibility_date());
    println!("  SSR: {}", on_off(settings.ssr_enabled()));
    println!("  Devtools: {}", on_off(settings.devtools_enabled()));
    let modules_line =
        if modules.is_empty() { "(none)".to_string() } else { modules.join(", ") };
    println!("  Modules: {}", modules_line);
    println!("  Fingerprint: {}", settings.fingerprint());
    Ok(())
}

fn on_off(flag: bool) -> &'static str {
    if flag {
        "enabled"
    } else {
        "disabled"
    }
}
