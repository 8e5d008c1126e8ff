//! Tray.ai connector configuration.

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use serde_json::json;
use tessera_connector::config::{ConnectorConfig, REDACTED};
use tessera_connector::error::{ConnectorError, ConnectorResult};

/// Default Tray.ai API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.tray.io";

/// Configuration for the Tray.ai connector.
#[derive(Debug, Clone, Deserialize)]
pub struct TrayConfig {
    /// Bearer token for authenticating with the Tray.ai API.
    pub auth_token: SecretString,

    /// Base URL for API requests.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Page size hint sent as `first` when a listing request carries none.
    /// When absent the API default applies.
    #[serde(default)]
    pub page_size: Option<u32>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl TrayConfig {
    /// Create a new config with the given auth token.
    pub fn new(auth_token: impl Into<String>) -> Self {
        Self {
            auth_token: auth_token.into().into(),
            base_url: default_base_url(),
            page_size: None,
        }
    }

    /// Override the API base URL.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the default page size hint.
    #[must_use]
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = Some(page_size);
        self
    }
}

impl ConnectorConfig for TrayConfig {
    fn connector_type() -> &'static str {
        "tray"
    }

    fn validate(&self) -> ConnectorResult<()> {
        if self.auth_token.expose_secret().is_empty() {
            return Err(ConnectorError::invalid_configuration(
                "required field 'auth_token' is missing",
            ));
        }

        url::Url::parse(&self.base_url).map_err(|e| {
            ConnectorError::invalid_configuration(format!("invalid base_url: {e}"))
        })?;

        Ok(())
    }

    fn redacted(&self) -> serde_json::Value {
        json!({
            "auth_token": REDACTED,
            "base_url": self.base_url,
            "page_size": self.page_size,
        })
    }
}
