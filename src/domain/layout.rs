//! Persisted settings layout
//!
//! Mirrors the declarative file shape:
//! `{compatibilityDate, devtools: {enabled}, ssr, runtimeConfig: {public: {apiUrl, wsUrl}}, modules}`.
//! Every key is optional so that a layout can describe one precedence layer;
//! the resolver merges layers before turning the result into `Settings`.

use serde::{Deserialize, Serialize};

/// Compatibility date pinned by the declared settings.
pub const DEFAULT_COMPATIBILITY_DATE: &str = "2024-04-03";

// Field order matters for TOML output: plain values before tables.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SettingsLayout {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compatibility_date: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ssr: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modules: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub devtools: Option<DevtoolsSection>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub runtime_config: Option<RuntimeConfigSection>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DevtoolsSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuntimeConfigSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public: Option<PublicSection>,
}

/// The closed set of public runtime keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PublicSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ws_url: Option<String>,
}

impl SettingsLayout {
    /// The literal declaration every resolution starts from.
    pub fn builtin() -> Self {
        Self {
            compatibility_date: Some(DEFAULT_COMPATIBILITY_DATE.to_string()),
            ssr: Some(false),
            modules: Some(
                crate::domain::ModuleId::ALL.iter().map(|m| m.as_str().to_string()).collect(),
            ),
            devtools: Some(DevtoolsSection { enabled: Some(true) }),
            runtime_config: Some(RuntimeConfigSection {
                public: Some(PublicSection {
                    api_url: Some(String::new()),
                    ws_url: Some(String::new()),
                }),
            }),
        }
    }

    /// A layer that only touches the public runtime values.
    pub fn public_only(api_url: Option<String>, ws_url: Option<String>) -> Self {
        if api_url.is_none() && ws_url.is_none() {
            return Self::default();
        }
        Self {
            runtime_config: Some(RuntimeConfigSection {
                public: Some(PublicSection { api_url, ws_url }),
            }),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    pub fn public(&self) -> Option<&PublicSection> {
        self.runtime_config.as_ref().and_then(|rc| rc.public.as_ref())
    }
}
