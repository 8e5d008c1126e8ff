//! Error types for the Tray.ai connector.

use tessera_connector::error::ConnectorError;
use thiserror::Error;

/// Result type alias using `TrayError`.
pub type TrayResult<T> = Result<T, TrayError>;

/// Errors that can occur when interacting with the Tray.ai API.
#[derive(Debug, Error)]
pub enum TrayError {
    /// Configuration validation error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Tray.ai API error response.
    #[error("Tray API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// Entity not found.
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// HTTP request error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON parsing error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// URL parsing error.
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),
}

impl TrayError {
    /// Converts into the SDK error type, naming the operation that failed.
    ///
    /// Status 401/403 become authentication failures, 404 becomes a lookup
    /// failure, everything else keeps its API status for the host's
    /// transient/permanent classification.
    pub fn into_connector(self, operation: &str) -> ConnectorError {
        match self {
            TrayError::Config(message) => ConnectorError::invalid_configuration(message),
            TrayError::Api {
                status: status @ (401 | 403),
                message,
            } => ConnectorError::authentication_failed(format!("status {status}: {message}")),
            TrayError::Api { status, message } => ConnectorError::api(operation, status, message),
            TrayError::NotFound(identifier) => ConnectorError::object_not_found(identifier),
            TrayError::Http(e) if e.is_decode() => {
                ConnectorError::serialization(operation, e.to_string())
            }
            TrayError::Http(e) => ConnectorError::connection_failed_with_source(e.to_string(), e),
            TrayError::Json(e) => ConnectorError::serialization(operation, e.to_string()),
            TrayError::Url(e) => {
                ConnectorError::operation_failed_with_source(operation, "invalid URL", e)
            }
        }
    }
}
