//! Wire models for the Tray.ai core API.
//!
//! For API documentation, see: <https://developer.tray.ai/openapi/trayapi/tag/overview/>

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tessera_connector::pagination::PageToken;

/// An element returned by the Tray.ai list endpoints.
///
/// Users, workspaces, and workspace roles all share this shape; fields
/// beyond `id` and `name` are populated per endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct Element {
    /// Platform-issued identifier.
    pub id: String,
    /// Element name.
    pub name: String,
    /// Workspace type, on workspace listings.
    #[serde(rename = "type", default)]
    pub element_type: Option<String>,
    /// Description, on workspace listings.
    #[serde(default)]
    pub description: Option<String>,
    /// Monthly task limit, on workspace listings.
    #[serde(rename = "monthlyTaskLimit", default)]
    pub monthly_task_limit: Option<i64>,
}

/// Page boundary reported by the list endpoints.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PageInfo {
    /// Cursor of the first element in this page.
    pub start_cursor: String,
    /// Cursor of the last element in this page.
    pub end_cursor: String,
    /// Whether another page follows this one.
    pub has_next_page: bool,
    /// Whether a page precedes this one.
    pub has_previous_page: bool,
}

impl PageInfo {
    /// The continuation token for the next page, if the boundary reports one.
    ///
    /// Gated on `has_next_page`: an end cursor on the final page is not a
    /// continuation, whatever its raw value.
    pub fn continuation(&self) -> Option<PageToken> {
        if self.has_next_page {
            PageToken::new(self.end_cursor.as_str())
        } else {
            None
        }
    }
}

/// Response body of the list endpoints.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListResponse {
    /// The elements of this page.
    #[serde(default)]
    pub elements: Vec<Element>,
    /// The page boundary.
    #[serde(rename = "pageInfo", default)]
    pub page_info: PageInfo,
}

/// Workspace `type` filter accepted by the workspace list endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkspaceType {
    /// Embedded (white-label) workspace.
    Embedded,
    /// Shared organization workspace.
    Organization,
    /// Personal workspace of an organization user.
    Personal,
    /// Personal workspace of an external user.
    PersonalExternal,
    /// Legacy shared workspace.
    Shared,
}

impl WorkspaceType {
    /// Get all workspace types.
    #[must_use]
    pub fn all() -> &'static [WorkspaceType] {
        &[
            WorkspaceType::Embedded,
            WorkspaceType::Organization,
            WorkspaceType::Personal,
            WorkspaceType::PersonalExternal,
            WorkspaceType::Shared,
        ]
    }

    /// Get the string representation used on the wire.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkspaceType::Embedded => "Embedded",
            WorkspaceType::Organization => "Organization",
            WorkspaceType::Personal => "Personal",
            WorkspaceType::PersonalExternal => "PersonalExternal",
            WorkspaceType::Shared => "Shared",
        }
    }
}

impl fmt::Display for WorkspaceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for WorkspaceType {
    type Err = ParseWorkspaceTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Embedded" => Ok(WorkspaceType::Embedded),
            "Organization" => Ok(WorkspaceType::Organization),
            "Personal" => Ok(WorkspaceType::Personal),
            "PersonalExternal" => Ok(WorkspaceType::PersonalExternal),
            "Shared" => Ok(WorkspaceType::Shared),
            _ => Err(ParseWorkspaceTypeError(s.to_string())),
        }
    }
}

/// Error parsing a workspace type from string.
#[derive(Debug, Clone)]
pub struct ParseWorkspaceTypeError(String);

impl fmt::Display for ParseWorkspaceTypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid workspace type '{}', expected one of: Embedded, Organization, Personal, PersonalExternal, Shared",
            self.0
        )
    }
}

impl std::error::Error for ParseWorkspaceTypeError {}

/// Organization role attached to a user.
#[derive(Debug, Clone, Deserialize)]
pub struct OrganizationRole {
    /// Role identifier.
    #[serde(default)]
    pub id: Option<String>,
    /// Role name.
    pub name: String,
}

/// A Tray.ai user as returned by the single-entity and create endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct TrayUser {
    /// Platform-issued user id.
    pub id: String,
    /// User name.
    pub name: String,
    /// Login email.
    #[serde(default)]
    pub email: Option<String>,
    /// Platform account type.
    #[serde(rename = "accountType", default)]
    pub account_type: Option<String>,
    /// The user's organization role.
    #[serde(default)]
    pub role: Option<OrganizationRole>,
}

/// A Tray.ai workspace as returned by the single-entity endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct TrayWorkspace {
    /// Platform-issued workspace id.
    pub id: String,
    /// Workspace name.
    pub name: String,
    /// Workspace type.
    #[serde(rename = "type", default)]
    pub workspace_type: Option<String>,
    /// Workspace description.
    #[serde(default)]
    pub description: Option<String>,
    /// Monthly task limit.
    #[serde(rename = "monthlyTaskLimit", default)]
    pub monthly_task_limit: Option<i64>,
}

/// Request body for creating a user.
#[derive(Debug, Clone, Serialize)]
pub struct CreateUserParams {
    /// User name.
    pub name: String,
    /// Login email for the new user.
    pub email: String,
    /// Organization role to assign.
    #[serde(rename = "organizationRoleId")]
    pub organization_role_id: String,
}
