//! Error types for the JobLink admin CLI

use thiserror::Error;

/// Result type alias for joblink-admin operations
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for the application
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Interactive prompt error: {0}")]
    Dialoguer(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Operation failed: {0}")]
    Other(String),
}

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        Error::Dialoguer(err.to_string())
    }
}

impl Error {
    /// Whether the underlying failure is an expired or revoked admin session
    pub fn is_auth_expired(&self) -> bool {
        matches!(self, Error::Api(api) if api.kind() == ErrorKind::AuthExpired)
    }
}

/// Coarse classification of API failures.
///
/// Lets callers react to a failure (e.g. send the user back to `login`)
/// without matching on individual variants or message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The request never produced an HTTP response
    Network,
    /// The backend answered with a non-success status
    Rejected,
    /// The backend refused the session token that was sent
    AuthExpired,
}

/// API-related errors
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Admin session expired or was revoked. Run `joblink-admin login` to sign in again.")]
    AuthExpired,

    #[error("Authentication failed. Run `joblink-admin login` to sign in.")]
    Unauthorized,

    #[error("Access denied. This account is not allowed to perform that action.")]
    Forbidden,

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Request rejected ({status}): {body}")]
    Rejected { status: u16, body: String },

    #[error("Server error ({status}): {body}")]
    ServerError { status: u16, body: String },

    #[error("Network error: {0}")]
    Network(String),
}

impl ApiError {
    /// Classify this error as network, backend rejection, or expired session
    pub fn kind(&self) -> ErrorKind {
        match self {
            ApiError::Network(_) => ErrorKind::Network,
            ApiError::AuthExpired => ErrorKind::AuthExpired,
            _ => ErrorKind::Rejected,
        }
    }

    /// HTTP status reported by the backend, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::AuthExpired | ApiError::Unauthorized => Some(401),
            ApiError::Forbidden => Some(403),
            ApiError::NotFound(_) => Some(404),
            ApiError::Rejected { status, .. } | ApiError::ServerError { status, .. } => {
                Some(*status)
            }
            ApiError::Network(_) => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Network("Request timed out".to_string())
        } else if err.is_connect() {
            ApiError::Network("Failed to connect to the JobLink backend".to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found. Run `joblink-admin login` to set up.")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}
