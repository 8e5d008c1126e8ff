//! Common test utilities for tessera-connector-tray integration tests.

#![allow(dead_code)]

use serde_json::{Value, json};
use std::sync::Arc;
use tessera_connector_tray::{TrayClient, TrayConfig, TrayConnector};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Test data factory for a bare list element (users, workspace members,
/// roles).
pub fn element_json(id: &str, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
    })
}

/// Test data factory for a workspace list element with all fields set.
pub fn workspace_json(id: &str, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "type": "Organization",
        "description": format!("{name} workspace"),
        "monthlyTaskLimit": 5000,
    })
}

/// Test data factory for a full user record with an organization role.
pub fn user_json(id: &str, name: &str, role: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "email": format!("{}@example.com", name.to_lowercase()),
        "accountType": "member",
        "role": {"id": format!("{role}-id"), "name": role},
    })
}

/// Wraps elements in a list response with the given page boundary.
pub fn page_json(elements: Vec<Value>, end_cursor: &str, has_next_page: bool) -> Value {
    json!({
        "elements": elements,
        "pageInfo": {
            "startCursor": "start",
            "endCursor": end_cursor,
            "hasNextPage": has_next_page,
            "hasPreviousPage": false,
        }
    })
}

/// Generates a sequence of user elements.
pub fn generate_elements(count: usize, prefix: &str) -> Vec<Value> {
    (0..count)
        .map(|i| element_json(&format!("{prefix}-{i}"), &format!("User {i}")))
        .collect()
}

/// Mock server wrapper with ready-made config, client, and connector.
pub struct MockTrayServer {
    pub server: MockServer,
}

impl MockTrayServer {
    /// Creates a new mock Tray API server.
    pub async fn new() -> Self {
        let server = MockServer::start().await;
        Self { server }
    }

    /// Returns the mock server's base URL.
    pub fn url(&self) -> String {
        self.server.uri()
    }

    /// Returns a config pointing at the mock server.
    pub fn config(&self) -> TrayConfig {
        TrayConfig::new("test-token").with_base_url(self.server.uri())
    }

    /// Returns a shared client pointing at the mock server.
    pub fn client(&self) -> Arc<TrayClient> {
        Arc::new(TrayClient::new(self.config()).unwrap())
    }

    /// Returns a connector pointing at the mock server.
    pub fn connector(&self) -> TrayConnector {
        TrayConnector::new(self.config()).unwrap()
    }

    /// Mounts a 200 response for a GET endpoint.
    pub async fn mock_get(&self, endpoint: &str, response: Value) {
        Mock::given(method("GET"))
            .and(path(endpoint))
            .respond_with(ResponseTemplate::new(200).set_body_json(response))
            .mount(&self.server)
            .await;
    }

    /// Mounts an error response for a GET endpoint.
    pub async fn mock_get_error(&self, endpoint: &str, status: u16, message: &str) {
        Mock::given(method("GET"))
            .and(path(endpoint))
            .respond_with(
                ResponseTemplate::new(status).set_body_json(json!({"message": message})),
            )
            .mount(&self.server)
            .await;
    }

    /// Returns all requests the server has recorded.
    pub async fn received_requests(&self) -> Vec<wiremock::Request> {
        self.server.received_requests().await.unwrap_or_default()
    }
}
