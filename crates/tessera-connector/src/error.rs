//! Connector error types
//!
//! Error definitions with transient/permanent classification. The governance
//! host owns retry and backoff policy; nothing in this crate retries.

use thiserror::Error;

/// Error that can occur during connector operations.
#[derive(Debug, Error)]
pub enum ConnectorError {
    // Transport errors (usually transient)
    /// Failed to reach the target system.
    #[error("connection failed: {message}")]
    ConnectionFailed {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The target system answered with a non-success status.
    #[error("{operation} failed: API returned status {status}: {message}")]
    Api {
        operation: String,
        status: u16,
        message: String,
    },

    // Authentication errors (permanent)
    /// The supplied credentials were rejected.
    #[error("authentication failed: {message}")]
    AuthenticationFailed { message: String },

    // Configuration errors (permanent, fatal at startup)
    /// Connector configuration is invalid.
    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    // Lookup errors
    /// Object not found in the target system.
    #[error("object not found: {identifier}")]
    ObjectNotFound { identifier: String },

    // Provisioning errors (permanent)
    /// A mandatory account-creation field is missing or empty.
    ///
    /// Raised during request validation, before any network call is made.
    #[error("{field} is required")]
    MissingField { field: String },

    // Decode errors
    /// A response body could not be decoded.
    #[error("{operation} failed: cannot decode response: {message}")]
    Serialization { operation: String, message: String },

    // Operation errors
    /// Operation failed.
    #[error("{operation} failed: {message}")]
    OperationFailed {
        operation: String,
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl ConnectorError {
    /// Check if this error is transient and the operation may be retried.
    ///
    /// Transient errors are caused by temporary conditions such as network
    /// failures or remote overload. The host decides whether to retry;
    /// connectors never do.
    pub fn is_transient(&self) -> bool {
        match self {
            ConnectorError::ConnectionFailed { .. } => true,
            ConnectorError::Api { status, .. } => {
                matches!(status, 408 | 429) || *status >= 500
            }
            _ => false,
        }
    }

    /// Check if this error is permanent and retry won't help.
    ///
    /// Permanent errors require human intervention or configuration changes.
    pub fn is_permanent(&self) -> bool {
        !self.is_transient()
    }

    /// Get an error code for classification.
    pub fn error_code(&self) -> &'static str {
        match self {
            ConnectorError::ConnectionFailed { .. } => "CONNECTION_FAILED",
            ConnectorError::Api { .. } => "API_ERROR",
            ConnectorError::AuthenticationFailed { .. } => "AUTH_FAILED",
            ConnectorError::InvalidConfiguration { .. } => "INVALID_CONFIG",
            ConnectorError::ObjectNotFound { .. } => "OBJECT_NOT_FOUND",
            ConnectorError::MissingField { .. } => "MISSING_FIELD",
            ConnectorError::Serialization { .. } => "SERIALIZATION_ERROR",
            ConnectorError::OperationFailed { .. } => "OPERATION_FAILED",
        }
    }

    // Convenience constructors

    /// Create a connection failed error.
    pub fn connection_failed(message: impl Into<String>) -> Self {
        ConnectorError::ConnectionFailed {
            message: message.into(),
            source: None,
        }
    }

    /// Create a connection failed error with source.
    pub fn connection_failed_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        ConnectorError::ConnectionFailed {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an API error for a named operation.
    pub fn api(operation: impl Into<String>, status: u16, message: impl Into<String>) -> Self {
        ConnectorError::Api {
            operation: operation.into(),
            status,
            message: message.into(),
        }
    }

    /// Create an authentication failed error.
    pub fn authentication_failed(message: impl Into<String>) -> Self {
        ConnectorError::AuthenticationFailed {
            message: message.into(),
        }
    }

    /// Create an invalid configuration error.
    pub fn invalid_configuration(message: impl Into<String>) -> Self {
        ConnectorError::InvalidConfiguration {
            message: message.into(),
        }
    }

    /// Create an object not found error.
    pub fn object_not_found(identifier: impl Into<String>) -> Self {
        ConnectorError::ObjectNotFound {
            identifier: identifier.into(),
        }
    }

    /// Create a missing field error.
    pub fn missing_field(field: impl Into<String>) -> Self {
        ConnectorError::MissingField {
            field: field.into(),
        }
    }

    /// Create a serialization error for a named operation.
    pub fn serialization(operation: impl Into<String>, message: impl Into<String>) -> Self {
        ConnectorError::Serialization {
            operation: operation.into(),
            message: message.into(),
        }
    }

    /// Create an operation failed error.
    pub fn operation_failed(operation: impl Into<String>, message: impl Into<String>) -> Self {
        ConnectorError::OperationFailed {
            operation: operation.into(),
            message: message.into(),
            source: None,
        }
    }

    /// Create an operation failed error with source.
    pub fn operation_failed_with_source(
        operation: impl Into<String>,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        ConnectorError::OperationFailed {
            operation: operation.into(),
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

/// Result type for connector operations.
pub type ConnectorResult<T> = Result<T, ConnectorError>;
