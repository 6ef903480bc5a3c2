//! Error types for DriveMatch.
//!
//! The search pipeline never surfaces these to its caller (failures collapse
//! to an empty result), but the HTTP source, configuration loader and CLI
//! report them directly.

use thiserror::Error;

/// Main error type for the DriveMatch library.
#[derive(Debug, Error)]
pub enum DriveMatchError {
    // Network errors
    #[error("Network error: {message}")]
    Network {
        message: String,
        /// Optional cause description
        cause: Option<String>,
    },

    #[error("Request timeout after {0:?}")]
    Timeout(std::time::Duration),

    #[error("API returned {status} for {url}")]
    Http { status: u16, url: String },

    // Serialization errors
    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: Option<serde_json::Error>,
    },

    // Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    // Validation errors
    #[error("Validation error for {field}: {message}")]
    Validation { field: String, message: String },
}

/// Result type alias for DriveMatch operations.
pub type Result<T> = std::result::Result<T, DriveMatchError>;

impl From<serde_json::Error> for DriveMatchError {
    fn from(err: serde_json::Error) -> Self {
        DriveMatchError::Json {
            message: err.to_string(),
            source: Some(err),
        }
    }
}

impl From<reqwest::Error> for DriveMatchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            DriveMatchError::Timeout(crate::config::NetworkConfig::REQUEST_TIMEOUT)
        } else if err.is_decode() {
            DriveMatchError::Json {
                message: err.to_string(),
                source: None,
            }
        } else {
            DriveMatchError::Network {
                message: err.to_string(),
                cause: std::error::Error::source(&err).map(|s| s.to_string()),
            }
        }
    }
}

impl From<url::ParseError> for DriveMatchError {
    fn from(err: url::ParseError) -> Self {
        DriveMatchError::Config {
            message: format!("Invalid API URL: {}", err),
        }
    }
}

impl DriveMatchError {
    /// Short machine-friendly label, used as a structured logging field.
    pub fn kind(&self) -> &'static str {
        match self {
            DriveMatchError::Network { .. } => "network",
            DriveMatchError::Timeout(_) => "timeout",
            DriveMatchError::Http { .. } => "http",
            DriveMatchError::Json { .. } => "json",
            DriveMatchError::Config { .. } => "config",
            DriveMatchError::Validation { .. } => "validation",
        }
    }
}
