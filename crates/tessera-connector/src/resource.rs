//! Synchronized resource model
//!
//! Typed records for the entities a connector reports to the governance
//! host: resource kinds, identifiers, and per-kind profiles. Profiles are a
//! fixed set of named fields per kind rather than free-form maps; the wire
//! keys match what older connectors emitted, so downstream consumers see the
//! same shape with static checking on this side.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Resource Kinds
// ============================================================================

/// Kind of resource synchronized from the remote platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    /// A platform user account.
    User,
    /// A workspace (group-shaped container).
    Workspace,
    /// A role defined within a workspace.
    Role,
}

impl ResourceKind {
    /// Get all resource kinds.
    #[must_use]
    pub fn all() -> &'static [ResourceKind] {
        &[
            ResourceKind::User,
            ResourceKind::Workspace,
            ResourceKind::Role,
        ]
    }

    /// Get the string representation used on the wire.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::User => "user",
            ResourceKind::Workspace => "workspace",
            ResourceKind::Role => "role",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ResourceKind {
    type Err = ParseResourceKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "user" => Ok(ResourceKind::User),
            "workspace" => Ok(ResourceKind::Workspace),
            "role" => Ok(ResourceKind::Role),
            _ => Err(ParseResourceKindError(s.to_string())),
        }
    }
}

/// Error parsing a resource kind from string.
#[derive(Debug, Clone)]
pub struct ParseResourceKindError(String);

impl fmt::Display for ParseResourceKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid resource kind '{}', expected one of: user, workspace, role",
            self.0
        )
    }
}

impl std::error::Error for ParseResourceKindError {}

/// Account status reported for user resources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    /// The account is active.
    #[default]
    Enabled,
    /// The account is disabled.
    Disabled,
}

impl UserStatus {
    /// Get the string representation used on the wire.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            UserStatus::Enabled => "enabled",
            UserStatus::Disabled => "disabled",
        }
    }
}

impl fmt::Display for UserStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// Identifiers
// ============================================================================

/// Identifier of a resource: its kind plus the identifier the remote
/// platform issued for it.
///
/// The id is always taken verbatim from the source element; it is never
/// generated or rewritten on this side.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResourceId {
    /// The resource kind.
    pub kind: ResourceKind,
    /// The platform-issued identifier.
    pub id: String,
}

impl ResourceId {
    /// Create a resource identifier.
    pub fn new(kind: ResourceKind, id: impl Into<String>) -> Self {
        Self {
            kind,
            id: id.into(),
        }
    }

    /// Create a user resource identifier.
    pub fn user(id: impl Into<String>) -> Self {
        Self::new(ResourceKind::User, id)
    }

    /// Create a workspace resource identifier.
    pub fn workspace(id: impl Into<String>) -> Self {
        Self::new(ResourceKind::Workspace, id)
    }

    /// Create a role resource identifier.
    pub fn role(id: impl Into<String>) -> Self {
        Self::new(ResourceKind::Role, id)
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind, self.id)
    }
}

// ============================================================================
// Profiles
// ============================================================================

/// Profile attached to a user resource.
///
/// Listing fills only `id` and `username`; the remaining fields need a
/// single-entity fetch and stay absent until one happens. The create-account
/// path, which receives the full record back, fills all of them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Platform user id.
    pub id: String,
    /// Login/display username.
    pub username: String,
    /// Primary email, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Platform account type, when known.
    #[serde(rename = "accountType", skip_serializing_if = "Option::is_none")]
    pub account_type: Option<String>,
    /// Organization role name, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

impl UserProfile {
    /// Create a minimal profile with the fields a listing provides.
    pub fn new(id: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            username: username.into(),
            email: None,
            account_type: None,
            role: None,
        }
    }

    /// Set the email.
    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Set the account type.
    #[must_use]
    pub fn with_account_type(mut self, account_type: impl Into<String>) -> Self {
        self.account_type = Some(account_type.into());
        self
    }

    /// Set the organization role name.
    #[must_use]
    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }
}

/// Profile attached to a workspace resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkspaceProfile {
    /// Platform workspace id.
    #[serde(rename = "workspace_id")]
    pub id: String,
    /// Workspace name.
    #[serde(rename = "workspace_name")]
    pub name: String,
    /// Workspace type, when reported.
    #[serde(rename = "workspace_type", skip_serializing_if = "Option::is_none")]
    pub workspace_type: Option<String>,
    /// Workspace description, when reported.
    #[serde(
        rename = "workspace_description",
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<String>,
    /// Monthly task limit, when reported.
    #[serde(
        rename = "workspace_monthlyTaskLimit",
        skip_serializing_if = "Option::is_none"
    )]
    pub monthly_task_limit: Option<i64>,
}

impl WorkspaceProfile {
    /// Create a minimal profile.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            workspace_type: None,
            description: None,
            monthly_task_limit: None,
        }
    }

    /// Set the workspace type.
    #[must_use]
    pub fn with_workspace_type(mut self, workspace_type: impl Into<String>) -> Self {
        self.workspace_type = Some(workspace_type.into());
        self
    }

    /// Set the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the monthly task limit.
    #[must_use]
    pub fn with_monthly_task_limit(mut self, limit: i64) -> Self {
        self.monthly_task_limit = Some(limit);
        self
    }
}

/// Typed profile payload per resource kind.
///
/// Role resources carry no profile, so there is no variant for them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResourceProfile {
    /// User profile.
    User(UserProfile),
    /// Workspace profile.
    Workspace(WorkspaceProfile),
}

impl ResourceProfile {
    /// The resource kind this profile belongs to.
    pub fn kind(&self) -> ResourceKind {
        match self {
            ResourceProfile::User(_) => ResourceKind::User,
            ResourceProfile::Workspace(_) => ResourceKind::Workspace,
        }
    }

    /// Get the user profile, if this is one.
    pub fn as_user(&self) -> Option<&UserProfile> {
        match self {
            ResourceProfile::User(profile) => Some(profile),
            ResourceProfile::Workspace(_) => None,
        }
    }

    /// Get the workspace profile, if this is one.
    pub fn as_workspace(&self) -> Option<&WorkspaceProfile> {
        match self {
            ResourceProfile::Workspace(profile) => Some(profile),
            ResourceProfile::User(_) => None,
        }
    }
}

// ============================================================================
// Resources
// ============================================================================

/// A synchronized entity in the governance data model.
///
/// Resources are built fresh on every listing call; nothing is cached or
/// correlated across calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    /// Kind-qualified identifier.
    pub id: ResourceId,
    /// Human-readable name.
    pub display_name: String,
    /// Parent resource, for scoped kinds (a role's workspace).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<ResourceId>,
    /// Typed profile payload.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<ResourceProfile>,
    /// Account status; only meaningful for user resources.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<UserStatus>,
}

impl Resource {
    /// Create a user resource. Status defaults to enabled.
    pub fn user(id: impl Into<String>, display_name: impl Into<String>, profile: UserProfile) -> Self {
        Self {
            id: ResourceId::user(id),
            display_name: display_name.into(),
            parent: None,
            profile: Some(ResourceProfile::User(profile)),
            status: Some(UserStatus::Enabled),
        }
    }

    /// Create a workspace resource.
    pub fn workspace(
        id: impl Into<String>,
        display_name: impl Into<String>,
        profile: WorkspaceProfile,
    ) -> Self {
        Self {
            id: ResourceId::workspace(id),
            display_name: display_name.into(),
            parent: None,
            profile: Some(ResourceProfile::Workspace(profile)),
            status: None,
        }
    }

    /// Create a role resource scoped to its owning workspace.
    pub fn role(
        id: impl Into<String>,
        display_name: impl Into<String>,
        parent: ResourceId,
    ) -> Self {
        Self {
            id: ResourceId::role(id),
            display_name: display_name.into(),
            parent: Some(parent),
            profile: None,
            status: None,
        }
    }

    /// Set the parent resource.
    #[must_use]
    pub fn with_parent(mut self, parent: ResourceId) -> Self {
        self.parent = Some(parent);
        self
    }

    /// The kind of this resource.
    pub fn kind(&self) -> ResourceKind {
        self.id.kind
    }
}
