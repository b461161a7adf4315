// src/config.rs
use thiserror::Error;

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("GEMINI_API_KEY not found in environment variables")]
    MissingApiKey,
    #[error("invalid PORT value '{0}'")]
    InvalidPort(String),
}

/// Runtime configuration, built once in `main` and handed to the app state.
/// Startup is strict: a missing credential is a fatal error, the process
/// never starts in a degraded mode.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: String,
    pub model: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::resolve(
            std::env::var("GEMINI_API_KEY").ok(),
            std::env::var("GEMINI_MODEL").ok(),
            std::env::var("PORT").ok(),
        )
    }

    fn resolve(
        api_key: Option<String>,
        model: Option<String>,
        port: Option<String>,
    ) -> Result<Self, ConfigError> {
        let gemini_api_key = match api_key {
            Some(key) if !key.trim().is_empty() => key,
            _ => return Err(ConfigError::MissingApiKey),
        };

        let port = match port {
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            gemini_api_key,
            model: model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            port,
        })
    }
}
