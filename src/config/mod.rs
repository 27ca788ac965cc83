//! Settings resolution
//!
//! Loads the declarative settings file, layers environment and explicit
//! overrides on top of the built-in defaults (Explicit > Env > File > Defaults),
//! and validates the result into an immutable [`Settings`](crate::domain::Settings).

pub mod env;
pub mod error;
pub mod global;
pub mod loader;
pub mod resolver;

pub use env::{EnvSource, ProcessEnv, DEFAULT_ENV_PREFIX};
pub use error::ValidationError;
pub use loader::{load_settings_file, FileFormat};
pub use resolver::{ConfigResolver, Overrides};
