//! frontconf: resolve declarative front-end application settings
//!
//! Loads the settings file, layers environment and explicit overrides on top
//! of the built-in defaults, validates module identifiers against a closed
//! registry and produces an immutable [`domain::Settings`] value.

pub mod cli;
pub mod config;
pub mod domain;
pub mod render;
pub mod utils;

pub use config::{ConfigResolver, ValidationError};
pub use domain::{ModuleId, Settings};
