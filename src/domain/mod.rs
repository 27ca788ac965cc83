//! Core data types: the settings record, its persisted layout and the module registry

pub mod layout;
pub mod module_id;
pub mod settings;

pub use layout::{SettingsLayout, DEFAULT_COMPATIBILITY_DATE};
pub use module_id::ModuleId;
pub use settings::{PublicConfig, Settings};
