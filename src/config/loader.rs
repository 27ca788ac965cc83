//! Settings file discovery and parsing

use super::ValidationError;
use crate::domain::SettingsLayout;
use std::fs;
use std::path::{Path, PathBuf};

/// Candidates tried, in order, when no explicit path is given.
pub const DISCOVERY_CANDIDATES: [&str; 5] =
    ["frontconf.toml", ".frontconf.toml", "frontconf.yaml", "frontconf.yml", "frontconf.json"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Toml,
    Yaml,
    Json,
}

impl FileFormat {
    pub fn from_path(path: &Path) -> Result<Self, ValidationError> {
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("").to_ascii_lowercase();
        match ext.as_str() {
            "toml" => Ok(FileFormat::Toml),
            "yaml" | "yml" => Ok(FileFormat::Yaml),
            "json" => Ok(FileFormat::Json),
            other => Err(ValidationError::UnsupportedFormat {
                path: path.to_path_buf(),
                extension: other.to_string(),
            }),
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            FileFormat::Toml => "toml",
            FileFormat::Yaml => "yaml",
            FileFormat::Json => "json",
        }
    }
}

/// A parsed settings file and where it came from.
#[derive(Debug, Clone)]
pub struct LoadedFile {
    pub path: PathBuf,
    pub layout: SettingsLayout,
}

/// Load the explicit settings file, or the first discovered one in `project_dir`.
///
/// Returns `Ok(None)` when nothing was given and nothing was found. An explicit
/// path must exist. Parse failures are errors whether the file was explicit or
/// discovered.
pub fn load_settings_file(
    project_dir: &Path,
    config_path: Option<&Path>,
) -> Result<Option<LoadedFile>, ValidationError> {
    let discovered = match config_path {
        Some(path) => Some(path.to_path_buf()),
        None => discover_settings_file(project_dir),
    };

    let Some(path) = discovered else {
        tracing::debug!("No settings file found in {}", project_dir.display());
        return Ok(None);
    };

    let format = FileFormat::from_path(&path)?;
    let content = fs::read_to_string(&path)
        .map_err(|source| ValidationError::Io { path: path.clone(), source })?;
    let layout = parse_layout(&content, format, &path)?;

    Ok(Some(LoadedFile { path, layout }))
}

pub fn parse_layout(
    content: &str,
    format: FileFormat,
    origin: &Path,
) -> Result<SettingsLayout, ValidationError> {
    let malformed = |message: String| ValidationError::Malformed {
        origin: origin.display().to_string(),
        message,
    };

    // An empty document declares nothing; YAML and JSON would otherwise reject it.
    if content.trim().is_empty() {
        return Ok(SettingsLayout::default());
    }

    match format {
        FileFormat::Toml => toml::from_str(content).map_err(|e| malformed(e.to_string())),
        FileFormat::Yaml => serde_yaml::from_str(content).map_err(|e| malformed(e.to_string())),
        FileFormat::Json => serde_json::from_str(content).map_err(|e| malformed(e.to_string())),
    }
}

fn discover_settings_file(project_dir: &Path) -> Option<PathBuf> {
    DISCOVERY_CANDIDATES.iter().map(|candidate| project_dir.join(candidate)).find(|p| p.is_file())
}
