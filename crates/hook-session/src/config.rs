//! Store configuration from environment variables.

use std::path::PathBuf;
use std::time::Duration;

pub const ENV_BACKEND: &str = "MODLR_SESSION_BACKEND";
pub const ENV_DB_PATH: &str = "MODLR_DB_PATH";
pub const ENV_API_URL: &str = "MODLR_API_URL";
pub const ENV_API_TIMEOUT_MS: &str = "MODLR_API_TIMEOUT_MS";

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:3000";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(2000);

/// Which backend holds the sessions table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    /// Embedded database file
    Local,
    /// Session service over HTTP
    Remote,
}

impl Backend {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "local" | "sqlite" => Some(Self::Local),
            "remote" | "http" | "api" => Some(Self::Remote),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub backend: Backend,
    pub db_path: PathBuf,
    pub api_url: String,
    pub timeout: Duration,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: Backend::Local,
            db_path: default_db_path(),
            api_url: DEFAULT_API_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl StoreConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// Without an explicit backend, the remote backend is used whenever an
    /// API URL is configured. Unparseable values fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let api_url = get(ENV_API_URL);
        let backend = get(ENV_BACKEND)
            .and_then(|v| Backend::parse(&v))
            .unwrap_or(if api_url.is_some() {
                Backend::Remote
            } else {
                Backend::Local
            });

        let timeout = get(ENV_API_TIMEOUT_MS)
            .and_then(|v| v.trim().parse::<u64>().ok())
            .filter(|ms| *ms > 0)
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_TIMEOUT);

        Self {
            backend,
            db_path: get(ENV_DB_PATH)
                .map(PathBuf::from)
                .unwrap_or_else(default_db_path),
            api_url: api_url.unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            timeout,
        }
    }

    pub fn backend_name(&self) -> &'static str {
        match self.backend {
            Backend::Local => "local",
            Backend::Remote => "remote",
        }
    }
}

/// `~/.modlr/modlr.db`, or relative to the working directory without a home.
pub fn default_db_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_default()
        .join(".modlr")
        .join("modlr.db")
}
