//! Error types for ado-pat

use std::time::Duration;
use thiserror::Error;

use crate::client::models::PatAction;

/// Result type alias for ado-pat operations
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for the application
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Interactive prompt error: {0}")]
    Dialoguer(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        Error::Dialoguer(err.to_string())
    }
}

impl Error {
    /// Process exit code for this error.
    ///
    /// 2 = validation, 3 = authentication, 4 = operation, 5 = timeout, 1 = other.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Validation(_) => 2,
            Error::Api(ApiError::Authentication { .. }) => 3,
            Error::Api(ApiError::Operation { .. }) => 4,
            Error::Api(ApiError::Timeout { .. }) => 5,
            _ => 1,
        }
    }
}

/// API-related errors
#[derive(Debug, Error)]
pub enum ApiError {
    /// The identity provider rejected the credentials, or the token request
    /// never got a response. `status` is `None` for transport failures.
    #[error("{}", authentication_message(.status, .body))]
    Authentication { status: Option<u16>, body: String },

    /// A PAT endpoint answered with a non-success status.
    #[error("{}", operation_message(.operation, .token_id, .status, .body))]
    Operation {
        operation: PatAction,
        token_id: Option<String>,
        status: u16,
        body: String,
    },

    #[error("Request timed out after {}s", .timeout.as_secs())]
    Timeout { timeout: Duration },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid API response: {0}")]
    InvalidResponse(String),
}

fn authentication_message(status: &Option<u16>, body: &str) -> String {
    match status {
        Some(code) => format!("Authentication failed (HTTP {}): {}", code, body),
        None => format!("Authentication failed: {}", body),
    }
}

fn operation_message(
    operation: &PatAction,
    token_id: &Option<String>,
    status: &u16,
    body: &str,
) -> String {
    match token_id {
        Some(id) => format!(
            "Failed to {} PAT {} (HTTP {}): {}",
            operation, id, status, body
        ),
        None => format!("Failed to {} PAT (HTTP {}): {}", operation, status, body),
    }
}

impl ApiError {
    /// HTTP status carried by the error, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Authentication { status, .. } => *status,
            ApiError::Operation { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Classify a transport failure. Timeouts are kept apart from other
    /// network errors so callers can tell them from rejections.
    pub fn from_transport(err: reqwest::Error, timeout: Duration) -> Self {
        if err.is_timeout() {
            ApiError::Timeout { timeout }
        } else if err.is_connect() {
            ApiError::Network(format!("Failed to connect: {}", err))
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

/// Missing input detected before any network call
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("--token-name is required for the {0} operation")]
    MissingTokenName(PatAction),

    #[error("--token-id is required for the {0} operation")]
    MissingTokenId(PatAction),

    #[error("Missing required credential `{0}`. Pass it as a flag or set the matching ADO_PAT_* environment variable.")]
    MissingCredential(&'static str),
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}
