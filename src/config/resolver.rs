//! Layered settings resolution
//!
//! Precedence, lowest to highest:
//! 1. Built-in literal defaults
//! 2. The settings file (explicit or discovered)
//! 3. Environment overrides (`<prefix>API_URL`, `<prefix>WS_URL`, process env over `.env`)
//! 4. Explicit overrides supplied by the caller (CLI flags)

use super::env::{DotenvLayered, EnvSource, ProcessEnv, PublicOverrides, DEFAULT_ENV_PREFIX};
use super::loader::load_settings_file;
use super::ValidationError;
use crate::domain::{Settings, SettingsLayout};
use figment::providers::Serialized;
use figment::Figment;
use std::path::PathBuf;

/// Values that beat every other layer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub api_url: Option<String>,
    pub ws_url: Option<String>,
    pub ssr: Option<bool>,
    pub devtools: Option<bool>,
    pub modules: Option<Vec<String>>,
}

impl Overrides {
    fn to_layer(&self) -> SettingsLayout {
        let mut layer = SettingsLayout::public_only(self.api_url.clone(), self.ws_url.clone());
        layer.ssr = self.ssr;
        layer.modules = self.modules.clone();
        if let Some(enabled) = self.devtools {
            layer.devtools = Some(crate::domain::layout::DevtoolsSection { enabled: Some(enabled) });
        }
        layer
    }
}

/// Single-shot resolver. Build it, call [`resolve`](Self::resolve), keep the result.
pub struct ConfigResolver {
    project_dir: PathBuf,
    config_path: Option<PathBuf>,
    env_prefix: String,
    use_env: bool,
    builtin_defaults: bool,
    overrides: Overrides,
    env_source: Option<Box<dyn EnvSource>>,
}

impl ConfigResolver {
    pub fn new(project_dir: impl Into<PathBuf>) -> Self {
        Self {
            project_dir: project_dir.into(),
            config_path: None,
            env_prefix: DEFAULT_ENV_PREFIX.to_string(),
            use_env: true,
            builtin_defaults: true,
            overrides: Overrides::default(),
            env_source: None,
        }
    }

    pub fn config_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_path = Some(path.into());
        self
    }

    pub fn env_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    pub fn use_env(mut self, use_env: bool) -> Self {
        self.use_env = use_env;
        self
    }

    /// With defaults disabled the file must declare every required field.
    pub fn builtin_defaults(mut self, enabled: bool) -> Self {
        self.builtin_defaults = enabled;
        self
    }

    pub fn overrides(mut self, overrides: Overrides) -> Self {
        self.overrides = overrides;
        self
    }

    /// Read overrides from `source` instead of the process environment and `.env`.
    pub fn env_source(mut self, source: impl EnvSource + 'static) -> Self {
        self.env_source = Some(Box::new(source));
        self
    }

    pub fn prefix(&self) -> &str {
        &self.env_prefix
    }

    pub fn resolve(&self) -> Result<Settings, ValidationError> {
        let mut figment = Figment::new();

        if self.builtin_defaults {
            figment = figment.merge(Serialized::defaults(SettingsLayout::builtin()));
        } else {
            tracing::debug!("Built-in defaults disabled");
        }

        if let Some(loaded) =
            load_settings_file(&self.project_dir, self.config_path.as_deref())?
        {
            tracing::debug!("Applying settings file {}", loaded.path.display());
            figment = figment.merge(Serialized::defaults(loaded.layout));
        }

        if self.use_env {
            let env_overrides = self.env_overrides();
            if env_overrides != PublicOverrides::default() {
                tracing::debug!(
                    api_url = env_overrides.api_url.is_some(),
                    ws_url = env_overrides.ws_url.is_some(),
                    "Applying environment overrides"
                );
            }
            figment = figment.merge(Serialized::defaults(SettingsLayout::public_only(
                env_overrides.api_url,
                env_overrides.ws_url,
            )));
        }

        let explicit = self.overrides.to_layer();
        if !explicit.is_empty() {
            tracing::debug!("Applying explicit overrides");
            figment = figment.merge(Serialized::defaults(explicit));
        }

        let merged: SettingsLayout =
            figment.extract().map_err(|e| ValidationError::Malformed {
                origin: "merged settings".to_string(),
                message: e.to_string(),
            })?;

        let settings = Settings::from_layout(merged)?;
        tracing::info!(
            fingerprint = %settings.fingerprint(),
            modules = settings.modules().len(),
            "Settings resolved"
        );
        Ok(settings)
    }

    fn env_overrides(&self) -> PublicOverrides {
        match &self.env_source {
            Some(source) => PublicOverrides::from_env(source.as_ref(), &self.env_prefix),
            None => {
                let layered = DotenvLayered::load(ProcessEnv, &self.project_dir);
                PublicOverrides::from_env(&layered, &self.env_prefix)
            }
        }
    }
}
