//! Connector configuration trait
//!
//! Each connector defines its own configuration schema and implements this
//! trait for validation and safe display.

use serde::de::DeserializeOwned;

use crate::error::ConnectorResult;

/// Placeholder substituted for secret values in redacted output.
pub const REDACTED: &str = "***REDACTED***";

/// Trait for connector-specific configuration.
///
/// There is no `Serialize` bound: configurations hold secret material
/// (tokens, passwords) that must not round-trip through serialization.
/// Loggable output goes through [`ConnectorConfig::redacted`] instead.
pub trait ConnectorConfig: DeserializeOwned + Clone + Send + Sync {
    /// Get the connector type identifier this configuration is for.
    fn connector_type() -> &'static str;

    /// Validate the configuration.
    ///
    /// Returns an error if the configuration is invalid. Called before any
    /// sync attempt; a failure here is fatal at startup.
    fn validate(&self) -> ConnectorResult<()>;

    /// Create a redacted view of this config for logging/display.
    ///
    /// Secret fields are replaced with [`REDACTED`].
    fn redacted(&self) -> serde_json::Value;
}
