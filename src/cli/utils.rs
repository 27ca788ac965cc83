//! Shared CLI utilities.

use clap::Args;
use std::path::PathBuf;

use crate::config::{ConfigResolver, Overrides, DEFAULT_ENV_PREFIX};

/// Flags shared by every command that resolves settings.
#[derive(Args, Debug, Clone)]
pub struct ResolutionArgs {
    /// Project directory searched for the settings file and `.env`
    #[arg(short = 'd', long, value_name = "DIR", default_value = ".")]
    pub dir: PathBuf,

    /// Explicit settings file (toml, yaml or json)
    #[arg(short = 'c', long, value_name = "FILE", env = "FRONTCONF_CONFIG")]
    pub config: Option<PathBuf>,

    /// Prefix of the environment override variables
    #[arg(long, value_name = "PREFIX", default_value = DEFAULT_ENV_PREFIX)]
    pub env_prefix: String,

    /// Ignore environment variables and `.env`
    #[arg(long)]
    pub no_env: bool,

    /// Require the settings file to declare every field
    #[arg(long)]
    pub strict: bool,

    /// Override the public API URL
    #[arg(long, value_name = "URL")]
    pub api_url: Option<String>,

    /// Override the public WebSocket URL
    #[arg(long, value_name = "URL")]
    pub ws_url: Option<String>,

    /// Override the module list (comma-separated identifiers)
    #[arg(short = 'm', long, value_name = "IDS")]
    pub modules: Option<String>,

    /// Override server-side rendering
    #[arg(long, value_name = "BOOL")]
    pub ssr: Option<bool>,

    /// Override devtools
    #[arg(long, value_name = "BOOL")]
    pub devtools: Option<bool>,
}

impl ResolutionArgs {
    pub fn resolver(&self) -> ConfigResolver {
        let mut resolver = ConfigResolver::new(self.dir.clone())
            .env_prefix(self.env_prefix.clone())
            .use_env(!self.no_env)
            .builtin_defaults(!self.strict)
            .overrides(Overrides {
                api_url: self.api_url.clone(),
                ws_url: self.ws_url.clone(),
                ssr: self.ssr,
                devtools: self.devtools,
                modules: parse_csv(&self.modules),
            });
        if let Some(config) = &self.config {
            resolver = resolver.config_path(config.clone());
        }
        resolver
    }
}

/// Parse a comma-separated string into a `Vec<String>`, trimming whitespace and
/// discarding empty segments.  Returns `None` when `value` is `None`.
pub fn parse_csv(value: &Option<String>) -> Option<Vec<String>> {
    value.as_ref().map(|s| {
        s.split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(|part| part.to_string())
            .collect::<Vec<_>>()
    })
}
