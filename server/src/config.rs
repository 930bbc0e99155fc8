//! Server configuration parsed from environment variables.
//!
//! The board secrets are only ever read here and handed to the Trello
//! client; neither `Debug` impl prints them.

use std::fmt;
use std::time::Duration;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_TRELLO_BASE_URL: &str = "https://api.trello.com";
pub const DEFAULT_TRELLO_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_TRELLO_CONNECT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_IDEMPOTENCY_WINDOW_SECS: u64 = 600;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A required environment variable is unset or blank.
    #[error("missing required env var {0}")]
    Missing(&'static str),

    /// An environment variable is set but cannot be parsed.
    #[error("invalid {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrelloTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

#[derive(Clone, PartialEq, Eq)]
pub struct TrelloConfig {
    pub api_key: String,
    pub token: String,
    pub base_url: String,
    pub timeouts: TrelloTimeouts,
}

impl fmt::Debug for TrelloConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrelloConfig")
            .field("api_key", &"<redacted>")
            .field("token", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeouts", &self.timeouts)
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortalConfig {
    pub port: u16,
    pub trello: TrelloConfig,
    pub idempotency_window: Duration,
}

impl PortalConfig {
    /// Build typed server config from environment variables.
    ///
    /// Required:
    /// - `TRELLO_API_KEY`
    /// - `TRELLO_TOKEN`
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `TRELLO_API_BASE_URL`: default `https://api.trello.com`
    /// - `TRELLO_REQUEST_TIMEOUT_SECS`: default 30
    /// - `TRELLO_CONNECT_TIMEOUT_SECS`: default 10
    /// - `IDEMPOTENCY_WINDOW_SECS`: default 600
    ///
    /// # Errors
    ///
    /// Returns an error if a secret is missing or `PORT` is not a valid port.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = required("TRELLO_API_KEY")?;
        let token = required("TRELLO_TOKEN")?;

        let port = match std::env::var("PORT") {
            Ok(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::Invalid { key: "PORT", value: raw.clone() })?,
            Err(_) => DEFAULT_PORT,
        };

        let base_url = std::env::var("TRELLO_API_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_TRELLO_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        let timeouts = TrelloTimeouts {
            request_secs: env_parse_u64("TRELLO_REQUEST_TIMEOUT_SECS", DEFAULT_TRELLO_REQUEST_TIMEOUT_SECS),
            connect_secs: env_parse_u64("TRELLO_CONNECT_TIMEOUT_SECS", DEFAULT_TRELLO_CONNECT_TIMEOUT_SECS),
        };
        let idempotency_window =
            Duration::from_secs(env_parse_u64("IDEMPOTENCY_WINDOW_SECS", DEFAULT_IDEMPOTENCY_WINDOW_SECS));

        Ok(Self { port, trello: TrelloConfig { api_key, token, base_url, timeouts }, idempotency_window })
    }
}

fn required(key: &'static str) -> Result<String, ConfigError> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
        .ok_or(ConfigError::Missing(key))
}

fn env_parse_u64(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(default)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
