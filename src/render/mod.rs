//! Output rendering (persisted layout as JSON/TOML/YAML, dotenv lines)

use crate::config::env::{api_url_var, ws_url_var};
use crate::config::FileFormat;
use crate::domain::{Settings, SettingsLayout};
use anyhow::{Context, Result};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Toml,
    Yaml,
    Env,
}

impl OutputFormat {
    /// The settings-file format this output corresponds to, if any.
    pub fn file_format(self) -> Option<FileFormat> {
        match self {
            OutputFormat::Json => Some(FileFormat::Json),
            OutputFormat::Toml => Some(FileFormat::Toml),
            OutputFormat::Yaml => Some(FileFormat::Yaml),
            OutputFormat::Env => None,
        }
    }
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "toml" => Ok(OutputFormat::Toml),
            "yaml" | "yml" => Ok(OutputFormat::Yaml),
            "env" | "dotenv" => Ok(OutputFormat::Env),
            other => anyhow::bail!(
                "Invalid output format '{}': expected one of json, toml, yaml, env",
                other
            ),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Json => "json",
            OutputFormat::Toml => "toml",
            OutputFormat::Yaml => "yaml",
            OutputFormat::Env => "env",
        };
        f.write_str(name)
    }
}

/// Render resolved settings. `env_prefix` is only used by [`OutputFormat::Env`].
pub fn render_settings(settings: &Settings, format: OutputFormat, env_prefix: &str) -> Result<String> {
    match format.file_format() {
        Some(file_format) => render_layout(&settings.to_layout(), file_format),
        None => Ok(render_env(settings, env_prefix)),
    }
}

/// Serialise a layout in the persisted file shape.
pub fn render_layout(layout: &SettingsLayout, format: FileFormat) -> Result<String> {
    let rendered = match format {
        FileFormat::Json => serde_json::to_string_pretty(layout).context("Failed rendering JSON")?,
        FileFormat::Toml => toml::to_string_pretty(layout).context("Failed rendering TOML")?,
        FileFormat::Yaml => serde_yaml::to_string(layout).context("Failed rendering YAML")?,
    };
    Ok(with_trailing_newline(rendered))
}

fn render_env(settings: &Settings, prefix: &str) -> String {
    let public = settings.public_config();
    format!(
        "{}={}\n{}={}\n",
        api_url_var(prefix),
        quote_env_value(public.api_url()),
        ws_url_var(prefix),
        quote_env_value(public.ws_url())
    )
}

fn quote_env_value(value: &str) -> String {
    let escaped = value.replace('\\', "\\\\").replace('"', "\\\"");
    format!("\"{}\"", escaped)
}

fn with_trailing_newline(mut s: String) -> String {
    if !s.ends_with('\n') {
        s.push('\n');
    }
    s
}
