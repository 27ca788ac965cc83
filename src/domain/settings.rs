//! The resolved, immutable settings record

use super::layout::{DevtoolsSection, PublicSection, RuntimeConfigSection, SettingsLayout};
use super::ModuleId;
use crate::config::ValidationError;
use crate::utils::stable_hash;
use chrono::NaiveDate;
use serde_json::json;
use std::collections::HashSet;

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicConfig {
    api_url: String,
    ws_url: String,
}

impl PublicConfig {
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    pub fn ws_url(&self) -> &str {
        &self.ws_url
    }
}

/// Fully populated settings. Only the resolver constructs these, and nothing
/// mutates one afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    compatibility_date: NaiveDate,
    devtools_enabled: bool,
    ssr_enabled: bool,
    public_config: PublicConfig,
    modules: Vec<ModuleId>,
}

impl Settings {
    /// Validate a merged layout and turn it into settings.
    pub(crate) fn from_layout(layout: SettingsLayout) -> Result<Self, ValidationError> {
        let public = layout.public().cloned().unwrap_or_default();
        let raw_date = layout
            .compatibility_date
            .filter(|d| !d.trim().is_empty())
            .ok_or(ValidationError::MissingField("compatibilityDate"))?;
        let compatibility_date = parse_date_stamp(raw_date.trim())
            .ok_or_else(|| ValidationError::InvalidDate(raw_date.clone()))?;

        let devtools_enabled = layout
            .devtools
            .and_then(|d| d.enabled)
            .ok_or(ValidationError::MissingField("devtools.enabled"))?;
        let ssr_enabled = layout.ssr.ok_or(ValidationError::MissingField("ssr"))?;
        let declared_modules = layout.modules.ok_or(ValidationError::MissingField("modules"))?;

        let mut seen = HashSet::new();
        let mut modules = Vec::with_capacity(declared_modules.len());
        for identifier in &declared_modules {
            let module: ModuleId = identifier.parse()?;
            if !seen.insert(module) {
                return Err(ValidationError::DuplicateModule(identifier.clone()));
            }
            modules.push(module);
        }

        let api_url = public.api_url.unwrap_or_default();
        let ws_url = public.ws_url.unwrap_or_default();
        check_url("runtimeConfig.public.apiUrl", &api_url, &["http://", "https://"])?;
        check_url("runtimeConfig.public.wsUrl", &ws_url, &["ws://", "wss://"])?;

        Ok(Self {
            compatibility_date,
            devtools_enabled,
            ssr_enabled,
            public_config: PublicConfig { api_url, ws_url },
            modules,
        })
    }

    pub fn compatibility_date(&self) -> NaiveDate {
        self.compatibility_date
    }

    pub fn devtools_enabled(&self) -> bool {
        self.devtools_enabled
    }

    pub fn ssr_enabled(&self) -> bool {
        self.ssr_enabled
    }

    pub fn public_config(&self) -> &PublicConfig {
        &self.public_config
    }

    /// Modules in registration order.
    pub fn modules(&self) -> &[ModuleId] {
        &self.modules
    }

    /// Back to the persisted layout, every key populated.
    pub fn to_layout(&self) -> SettingsLayout {
        SettingsLayout {
            compatibility_date: Some(self.compatibility_date.format(DATE_FORMAT).to_string()),
            ssr: Some(self.ssr_enabled),
            modules: Some(self.modules.iter().map(|m| m.as_str().to_string()).collect()),
            devtools: Some(DevtoolsSection { enabled: Some(self.devtools_enabled) }),
            runtime_config: Some(RuntimeConfigSection {
                public: Some(PublicSection {
                    api_url: Some(self.public_config.api_url.clone()),
                    ws_url: Some(self.public_config.ws_url.clone()),
                }),
            }),
        }
    }

    /// Stable 16-hex-digit digest; equal settings always share one.
    pub fn fingerprint(&self) -> String {
        let canonical = json!({
            "compatibilityDate": self.compatibility_date.format(DATE_FORMAT).to_string(),
            "devtools": self.devtools_enabled,
            "modules": self.modules.iter().map(|m| m.as_str()).collect::<Vec<_>>(),
            "apiUrl": self.public_config.api_url,
            "ssr": self.ssr_enabled,
            "wsUrl": self.public_config.ws_url,
        });
        stable_hash(&canonical.to_string())
    }
}

/// Strict `YYYY-MM-DD`; chrono alone would also take unpadded fields.
fn parse_date_stamp(raw: &str) -> Option<NaiveDate> {
    let date = NaiveDate::parse_from_str(raw, DATE_FORMAT).ok()?;
    (date.format(DATE_FORMAT).to_string() == raw).then_some(date)
}

/// Empty and root-relative values are accepted alongside the allowed schemes.
fn check_url(field: &'static str, value: &str, schemes: &[&str]) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Ok(());
    }
    if value.chars().any(char::is_whitespace) {
        return Err(ValidationError::InvalidUrl {
            field,
            value: value.to_string(),
            reason: "must not contain whitespace",
        });
    }
    if value.starts_with('/') && !value.starts_with("//") {
        return Ok(());
    }
    let lower = value.to_ascii_lowercase();
    match schemes.iter().find(|scheme| lower.starts_with(*scheme)) {
        Some(scheme) if value.len() > scheme.len() => Ok(()),
        Some(_) => Err(ValidationError::InvalidUrl {
            field,
            value: value.to_string(),
            reason: "missing host",
        }),
        None => Err(ValidationError::InvalidUrl {
            field,
            value: value.to_string(),
            reason: if field.ends_with("wsUrl") {
                "expected ws://, wss:// or a root-relative path"
            } else {
                "expected http://, https:// or a root-relative path"
            },
        }),
    }
}
