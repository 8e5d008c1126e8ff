//! Tray.ai core API HTTP client.
//!
//! Thin transport layer: one request per call, bearer auth, JSON in and out.
//! Retry and backoff policy belongs to the governance host, so nothing here
//! retries. The client is cheap to share behind an `Arc` and safe to call
//! from one sync task at a time.

use reqwest::header;
use secrecy::ExposeSecret;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, instrument};

use crate::config::TrayConfig;
use crate::error::{TrayError, TrayResult};
use crate::models::{CreateUserParams, ListResponse, TrayUser, TrayWorkspace, WorkspaceType};

const USERS_PATH: &str = "/core/v1/users";
const WORKSPACES_PATH: &str = "/core/v1/workspaces";

fn user_path(id: &str) -> String {
    format!("{USERS_PATH}/{}", urlencoding::encode(id))
}

fn workspace_path(id: &str) -> String {
    format!("{WORKSPACES_PATH}/{}", urlencoding::encode(id))
}

fn workspace_roles_path(workspace_id: &str) -> String {
    format!("{WORKSPACES_PATH}/{}/roles", urlencoding::encode(workspace_id))
}

fn workspace_users_path(workspace_id: &str) -> String {
    format!("{WORKSPACES_PATH}/{}/users", urlencoding::encode(workspace_id))
}

/// Parameters accepted by the list endpoints.
///
/// Only set fields are sent; the wire names are `cursor`, `first`, `last`,
/// `email` and `type`.
#[derive(Debug, Clone, Default)]
pub struct ListParams {
    /// Continuation cursor from a previous page boundary.
    pub cursor: Option<String>,
    /// Page size, counted from the start of the remaining window.
    pub first: Option<u32>,
    /// Page size, counted from the end of the remaining window.
    pub last: Option<u32>,
    /// User listing only: filter by email address.
    pub email: Option<String>,
    /// Workspace listing only: filter by workspace type.
    pub workspace_type: Option<WorkspaceType>,
}

impl ListParams {
    fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut q = Vec::new();
        if let Some(cursor) = self.cursor.as_deref().filter(|c| !c.is_empty()) {
            q.push(("cursor", cursor.to_string()));
        }
        if let Some(first) = self.first.filter(|n| *n != 0) {
            q.push(("first", first.to_string()));
        }
        if let Some(last) = self.last.filter(|n| *n != 0) {
            q.push(("last", last.to_string()));
        }
        if let Some(email) = self.email.as_deref().filter(|e| !e.is_empty()) {
            q.push(("email", email.to_string()));
        }
        if let Some(ws_type) = self.workspace_type {
            q.push(("type", ws_type.as_str().to_string()));
        }
        q
    }
}

/// Client for the Tray.ai core API.
#[derive(Debug)]
pub struct TrayClient {
    http_client: reqwest::Client,
    config: TrayConfig,
}

impl TrayClient {
    /// Creates a new client from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: TrayConfig) -> TrayResult<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| TrayError::Config(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            http_client,
            config,
        })
    }

    /// The configured page size hint, if any.
    #[must_use]
    pub fn default_page_size(&self) -> Option<u32> {
        self.config.page_size
    }

    /// Builds the full URL for an endpoint path.
    fn url(&self, path: &str) -> String {
        let base = self.config.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{base}/{path}")
    }

    /// Lists organization users.
    #[instrument(skip(self))]
    pub async fn list_users(&self, params: &ListParams) -> TrayResult<ListResponse> {
        self.get_with_params(&self.url(USERS_PATH), params).await
    }

    /// Lists workspaces.
    #[instrument(skip(self))]
    pub async fn list_workspaces(&self, params: &ListParams) -> TrayResult<ListResponse> {
        self.get_with_params(&self.url(WORKSPACES_PATH), params)
            .await
    }

    /// Lists the roles defined in a workspace.
    #[instrument(skip(self))]
    pub async fn list_workspace_roles(
        &self,
        workspace_id: &str,
        params: &ListParams,
    ) -> TrayResult<ListResponse> {
        self.get_with_params(&self.url(&workspace_roles_path(workspace_id)), params)
            .await
    }

    /// Lists the members of a workspace.
    #[instrument(skip(self))]
    pub async fn list_workspace_members(
        &self,
        workspace_id: &str,
        params: &ListParams,
    ) -> TrayResult<ListResponse> {
        self.get_with_params(&self.url(&workspace_users_path(workspace_id)), params)
            .await
    }

    /// Fetches a single user by id.
    #[instrument(skip(self))]
    pub async fn get_user(&self, id: &str) -> TrayResult<TrayUser> {
        match self.get(&self.url(&user_path(id))).await {
            Err(TrayError::Api { status: 404, .. }) => {
                Err(TrayError::NotFound(format!("user {id}")))
            }
            other => other,
        }
    }

    /// Fetches a single workspace by id.
    #[instrument(skip(self))]
    pub async fn get_workspace(&self, id: &str) -> TrayResult<TrayWorkspace> {
        match self.get(&self.url(&workspace_path(id))).await {
            Err(TrayError::Api { status: 404, .. }) => {
                Err(TrayError::NotFound(format!("workspace {id}")))
            }
            other => other,
        }
    }

    /// Creates a new organization user.
    #[instrument(skip(self, params))]
    pub async fn create_user(&self, params: &CreateUserParams) -> TrayResult<TrayUser> {
        self.post(&self.url(USERS_PATH), params).await
    }

    async fn get<T: DeserializeOwned>(&self, url: &str) -> TrayResult<T> {
        debug!("GET {}", url);
        let response = self
            .http_client
            .get(url)
            .header(header::ACCEPT, "application/json")
            .bearer_auth(self.config.auth_token.expose_secret())
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn get_with_params<T: DeserializeOwned>(
        &self,
        url: &str,
        params: &ListParams,
    ) -> TrayResult<T> {
        debug!("GET {}", url);
        let response = self
            .http_client
            .get(url)
            .query(&params.to_query())
            .header(header::ACCEPT, "application/json")
            .bearer_auth(self.config.auth_token.expose_secret())
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        url: &str,
        body: &B,
    ) -> TrayResult<T> {
        debug!("POST {}", url);
        let response = self
            .http_client
            .post(url)
            .header(header::ACCEPT, "application/json")
            .bearer_auth(self.config.auth_token.expose_secret())
            .json(body)
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> TrayResult<T> {
        let status = response.status();
        if status.is_success() {
            return response.json().await.map_err(TrayError::from);
        }

        let body = response.text().await.unwrap_or_default();
        Err(TrayError::Api {
            status: status.as_u16(),
            message: api_message(&body),
        })
    }
}

/// Extracts a human-readable message from an API error body.
fn api_message(body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["message", "error"] {
            if let Some(message) = value.get(key).and_then(|v| v.as_str()) {
                return message.to_string();
            }
        }
    }
    body.to_string()
}
