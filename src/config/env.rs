//! Environment-provided overrides for the public runtime values

use std::collections::HashMap;
use std::path::Path;

/// Prefix of the override variables unless configured otherwise.
pub const DEFAULT_ENV_PREFIX: &str = "NUXT_PUBLIC_";

/// Name of the dotenv file read from the project directory.
pub const DOTENV_FILE: &str = ".env";

/// Read-only view of environment variables.
pub trait EnvSource {
    fn var(&self, key: &str) -> Option<String>;
}

/// The real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

impl EnvSource for HashMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

/// Consults `primary` first and values read from a dotenv file second.
#[derive(Debug, Clone)]
pub struct DotenvLayered<P> {
    primary: P,
    dotenv: HashMap<String, String>,
}

impl<P: EnvSource> DotenvLayered<P> {
    pub fn new(primary: P, dotenv: HashMap<String, String>) -> Self {
        Self { primary, dotenv }
    }

    /// Layer `primary` over `<project_dir>/.env`.
    pub fn load(primary: P, project_dir: &Path) -> Self {
        Self::new(primary, read_dotenv(&project_dir.join(DOTENV_FILE)))
    }
}

impl<P: EnvSource> EnvSource for DotenvLayered<P> {
    fn var(&self, key: &str) -> Option<String> {
        self.primary.var(key).or_else(|| self.dotenv.var(key))
    }
}

/// Parse a dotenv file into a map without touching the process environment.
///
/// A missing file is an empty map; unreadable files and bad lines are skipped
/// with a warning.
pub fn read_dotenv(path: &Path) -> HashMap<String, String> {
    let mut vars = HashMap::new();
    let iter = match dotenvy::from_path_iter(path) {
        Ok(iter) => iter,
        Err(e) if e.not_found() => return vars,
        Err(e) => {
            tracing::warn!("Ignoring unreadable dotenv file {}: {}", path.display(), e);
            return vars;
        }
    };

    for item in iter {
        match item {
            Ok((key, value)) => {
                vars.insert(key, value);
            }
            Err(e) => {
                tracing::warn!("Skipping malformed line in {}: {}", path.display(), e);
            }
        }
    }
    vars
}

/// Override values found in the environment. `Some("")` is an explicit
/// override to the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PublicOverrides {
    pub api_url: Option<String>,
    pub ws_url: Option<String>,
}

impl PublicOverrides {
    pub fn from_env(env: &dyn EnvSource, prefix: &str) -> Self {
        Self {
            api_url: env.var(&api_url_var(prefix)),
            ws_url: env.var(&ws_url_var(prefix)),
        }
    }
}

pub fn api_url_var(prefix: &str) -> String {
    format!("{prefix}API_URL")
}

pub fn ws_url_var(prefix: &str) -> String {
    format!("{prefix}WS_URL")
}
