//! Process configuration.

use thiserror::Error;

/// Environment variable holding the upstream API key.
pub const API_KEY_VAR: &str = "KEY";

/// Errors from reading configuration out of the environment.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required environment variable {0}")]
    MissingKey(&'static str),
}

/// Runtime configuration. The upstream API key is the only setting.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
}

impl Config {
    /// Reads configuration from the environment. An unset or empty `KEY`
    /// is an error rather than a silently blank credential.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = std::env::var(API_KEY_VAR)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::MissingKey(API_KEY_VAR))?;
        Ok(Self { api_key })
    }
}
