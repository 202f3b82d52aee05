use crate::network::HttpLogLevel;
use reqwest::Url;
use std::env;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8088/";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Settings fixed for the lifetime of the process
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Root of the rental API, always ending with `/`
    pub base_url: Url,
    pub http_log: HttpLogLevel,
    pub timeout: Duration,
    /// `tracing` filter used when `RUST_LOG` is not set
    pub log_filter: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid base URL '{value}': {reason}")]
    InvalidBaseUrl { value: String, reason: String },
    #[error("invalid {name} '{value}'")]
    InvalidValue { name: &'static str, value: String },
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid"),
            http_log: HttpLogLevel::default(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl AppConfig {
    /// Defaults overlaid with `RENTAL_*` variables from the environment or a
    /// `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup("RENTAL_BASE_URL") {
            config.base_url = parse_base_url(&value)?;
        }
        if let Some(value) = lookup("RENTAL_HTTP_LOG") {
            config.http_log = value.parse().map_err(|_| ConfigError::InvalidValue {
                name: "RENTAL_HTTP_LOG",
                value,
            })?;
        }
        if let Some(value) = lookup("RENTAL_TIMEOUT_SECS") {
            let secs = value
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or(ConfigError::InvalidValue {
                    name: "RENTAL_TIMEOUT_SECS",
                    value,
                })?;
            config.timeout = Duration::from_secs(secs);
        }
        if let Some(value) = lookup("RENTAL_LOG") {
            config.log_filter = value;
        }

        Ok(config)
    }
}

/// Parse an http(s) base URL and make sure it ends with `/`, so relative
/// endpoints are appended instead of replacing the last path segment.
pub fn parse_base_url(value: &str) -> Result<Url, ConfigError> {
    let trimmed = value.trim();
    let mut url = Url::parse(trimmed).map_err(|err| ConfigError::InvalidBaseUrl {
        value: trimmed.to_string(),
        reason: err.to_string(),
    })?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidBaseUrl {
            value: trimmed.to_string(),
            reason: format!("unsupported scheme '{}'", url.scheme()),
        });
    }

    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url.set_query(None);
    url.set_fragment(None);

    Ok(url)
}
