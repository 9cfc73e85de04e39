//! Server configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Directory holding the `*.json` fixtures served under `/api/fixtures`.
    pub fixtures_dir: PathBuf,
}

impl ServerConfig {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `HIREBOARD_FIXTURES_DIR`: default `<client crate>/fixtures`
    ///
    /// # Errors
    ///
    /// [`ConfigError::Invalid`] when a variable is set but unusable.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`ServerConfig::from_env`], reading variables through `lookup`.
    ///
    /// # Errors
    ///
    /// See [`ServerConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("PORT") {
            None => DEFAULT_PORT,
            Some(raw) => {
                raw.trim().parse::<u16>().map_err(|_| ConfigError::Invalid { var: "PORT", value: raw.clone() })?
            }
        };
        let fixtures_dir = match lookup("HIREBOARD_FIXTURES_DIR") {
            None => default_fixtures_dir(),
            Some(raw) if raw.trim().is_empty() => {
                return Err(ConfigError::Invalid { var: "HIREBOARD_FIXTURES_DIR", value: raw });
            }
            Some(raw) => PathBuf::from(raw),
        };
        Ok(Self { port, fixtures_dir })
    }
}

fn default_fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../client/fixtures")
}
