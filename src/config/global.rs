//! Process-wide settings handle
//!
//! Settings are installed once at startup and then shared read-only for the
//! lifetime of the process.

use super::{ConfigResolver, ValidationError};
use crate::domain::Settings;
use once_cell::sync::OnceCell;
use thiserror::Error;

static SETTINGS: OnceCell<Settings> = OnceCell::new();

#[derive(Error, Debug)]
#[error("settings have already been installed for this process")]
pub struct AlreadyInstalled;

/// Install `settings` as the process-wide value. Fails if one is already set;
/// the existing value is left untouched.
pub fn install(settings: Settings) -> Result<&'static Settings, AlreadyInstalled> {
    SETTINGS.set(settings).map_err(|_| AlreadyInstalled)?;
    SETTINGS.get().ok_or(AlreadyInstalled)
}

pub fn get() -> Option<&'static Settings> {
    SETTINGS.get()
}

/// Resolve and install on first call; later calls return the installed value
/// without resolving again.
pub fn init(resolver: &ConfigResolver) -> Result<&'static Settings, ValidationError> {
    SETTINGS.get_or_try_init(|| resolver.resolve())
}
