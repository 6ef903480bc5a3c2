//! Centralized configuration for DriveMatch.
//!
//! Constants for network behavior and search tuning, plus the API endpoint
//! configuration resolved from the environment.

use crate::error::{DriveMatchError, Result};
use std::time::Duration;
use url::Url;

/// Network-related configuration.
pub struct NetworkConfig;

impl NetworkConfig {
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);
    pub const USER_AGENT: &'static str = "DriveMatch/0.1";
}

/// Search tuning.
pub struct SearchConfig;

impl SearchConfig {
    /// Quiet period before a changed search input is sent to the API.
    pub const DEBOUNCE: Duration = Duration::from_millis(300);
    /// Upper end of the hourly-rate slider. A ceiling at this value means
    /// "no price constraint".
    pub const DEFAULT_MAX_HOURLY_RATE: f64 = 200.0;
}

/// Environment variable holding the API base URL.
pub const API_URL_ENV: &str = "VITE_API_URL";

/// Location of the marketplace REST API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// API base, without a trailing slash.
    pub base_url: String,
    /// Total timeout applied to each request.
    pub timeout: Duration,
}

impl ApiConfig {
    /// Build a config from a base URL string.
    ///
    /// Only `http` and `https` URLs are accepted. A trailing slash is
    /// dropped so endpoint paths can be appended directly.
    pub fn parse(base_url: &str) -> Result<Self> {
        let trimmed = base_url.trim();
        let parsed = Url::parse(trimmed)?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(DriveMatchError::Config {
                message: format!("Unsupported API URL scheme: {}", parsed.scheme()),
            });
        }

        Ok(Self {
            base_url: trimmed.trim_end_matches('/').to_string(),
            timeout: NetworkConfig::REQUEST_TIMEOUT,
        })
    }

    /// Resolve the API base from `VITE_API_URL`.
    pub fn from_env() -> Result<Self> {
        match std::env::var(API_URL_ENV) {
            Ok(value) if !value.trim().is_empty() => Self::parse(&value),
            _ => Err(DriveMatchError::Config {
                message: format!("{} is not set", API_URL_ENV),
            }),
        }
    }

    /// Override the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Full URL for an API path such as `/public/instructor`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}
