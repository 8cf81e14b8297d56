use thiserror::Error;

use crate::domain::error::{DomainError, ValidationError};

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Failures reported by the host platform bridge.
#[derive(Error, Debug, Clone)]
pub enum BridgeError {
    #[error("platform bridge unavailable: {0}")]
    Unavailable(String),

    #[error("platform call '{call}' failed: {reason}")]
    CallFailed { call: &'static str, reason: String },
}

/// Failures reported by the exchange backend.
#[derive(Error, Debug, Clone)]
pub enum BackendError {
    #[error("backend request '{operation}' failed: {reason}")]
    RequestFailed {
        operation: &'static str,
        reason: String,
    },
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Bridge(#[from] BridgeError),

    #[error(transparent)]
    Backend(#[from] BackendError),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("parse error: {0}")]
    Parse(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        // dialoguer::Error wraps an IO error
        Error::Io(std::io::Error::other(err.to_string()))
    }
}
