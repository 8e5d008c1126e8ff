//! Connector capability traits
//!
//! One generic syncer interface covers the list/entitlements/grants triad
//! for every resource kind; account provisioning is a separate capability
//! implemented only by kinds that support it.
//!
//! Every operation is an `async fn` and does all its work within the call:
//! no background tasks, no shared mutable state between syncers.
//! Cancellation is cooperative by dropping the future.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::access::{Entitlement, Grant};
use crate::error::{ConnectorError, ConnectorResult};
use crate::pagination::{ListPage, PageRequest};
use crate::resource::{Resource, ResourceId, ResourceKind};

/// A paged adapter for one resource kind.
///
/// Implementations translate one page of the remote listing into domain
/// records per call. Each call is stateless given its `(scope, cursor)`
/// input; the continuation token in the returned page is the only state
/// carried between calls, and it is owned by the caller.
#[async_trait]
pub trait ResourceSyncer: Send + Sync {
    /// The resource kind this syncer produces.
    fn resource_kind(&self) -> ResourceKind;

    /// List one page of resources.
    ///
    /// `parent` scopes the listing for kinds that require a parent (roles
    /// within a workspace). Scoped syncers must return an empty page, not an
    /// error, when the scope is absent, and must not issue a network call in
    /// that case.
    async fn list(
        &self,
        parent: Option<&ResourceId>,
        page: PageRequest,
    ) -> ConnectorResult<ListPage<Resource>>;

    /// List one page of entitlements scoped to `resource`.
    ///
    /// Kinds without entitlements inherit this empty default.
    async fn entitlements(
        &self,
        resource: &Resource,
        page: PageRequest,
    ) -> ConnectorResult<ListPage<Entitlement>> {
        let _ = (resource, page);
        Ok(ListPage::empty())
    }

    /// List one page of grants of `resource`'s entitlements.
    ///
    /// Kinds without grants inherit this empty default.
    async fn grants(
        &self,
        resource: &Resource,
        page: PageRequest,
    ) -> ConnectorResult<ListPage<Grant>> {
        let _ = (resource, page);
        Ok(ListPage::empty())
    }
}

/// Capability for creating accounts in the target system.
///
/// Only the user kind implements this.
#[async_trait]
pub trait AccountProvisioner: ResourceSyncer {
    /// Create an account from the requested profile fields.
    ///
    /// Implementations must validate the request before any network call and
    /// map the created entity into a resource whose identifier equals the
    /// identifier the target system assigned.
    async fn create_account(&self, request: AccountRequest) -> ConnectorResult<Resource>;
}

/// Profile fields requested for a new account.
///
/// All three fields are mandatory for creation; they are optional here
/// because the host forwards whatever the operator supplied, and validation
/// is this layer's job.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccountRequest {
    /// User name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Login email.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Organization role for the new user.
    #[serde(
        rename = "organizationRoleId",
        skip_serializing_if = "Option::is_none"
    )]
    pub organization_role_id: Option<String>,
}

impl AccountRequest {
    /// Create an empty request.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the email.
    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Set the organization role id.
    #[must_use]
    pub fn with_organization_role_id(mut self, role_id: impl Into<String>) -> Self {
        self.organization_role_id = Some(role_id.into());
        self
    }

    /// Validate the request, returning the mandatory field set.
    ///
    /// Every field must be present and non-empty; the first missing one is
    /// reported as a [`ConnectorError::MissingField`].
    pub fn validated(&self) -> ConnectorResult<NewAccount> {
        let email = required_field(self.email.as_deref(), "email")?;
        let name = required_field(self.name.as_deref(), "name")?;
        let organization_role_id =
            required_field(self.organization_role_id.as_deref(), "organizationRoleId")?;
        Ok(NewAccount {
            name: name.to_string(),
            email: email.to_string(),
            organization_role_id: organization_role_id.to_string(),
        })
    }
}

fn required_field<'a>(value: Option<&'a str>, field: &str) -> ConnectorResult<&'a str> {
    match value {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(ConnectorError::missing_field(field)),
    }
}

/// A validated account-creation request with all mandatory fields present.
#[derive(Debug, Clone, PartialEq)]
pub struct NewAccount {
    /// User name.
    pub name: String,
    /// Login email.
    pub email: String,
    /// Organization role for the new user.
    pub organization_role_id: String,
}

/// Top-level plugin surface the governance host drives.
#[async_trait]
pub trait Connector: Send + Sync {
    /// Describe the connector to the host.
    fn metadata(&self) -> ConnectorMetadata;

    /// The syncers to run, one per resource kind.
    fn resource_syncers(&self) -> Vec<Arc<dyn ResourceSyncer>>;

    /// Check that the connector is usable, exercising its credentials.
    ///
    /// Called once before the host starts a sync cycle.
    async fn validate(&self) -> ConnectorResult<()>;
}

/// Metadata describing a connector to the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectorMetadata {
    /// Human-readable connector name.
    pub display_name: String,
    /// Short description of what the connector syncs.
    pub description: String,
    /// Schema of the account-creation form, when provisioning is supported.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_schema: Option<AccountSchema>,
}

/// Schema of the account-creation form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountSchema {
    /// The form fields, in display order.
    pub fields: Vec<AccountField>,
}

/// One field of the account-creation form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountField {
    /// Wire name of the field.
    pub name: String,
    /// Label shown to the operator.
    pub display_name: String,
    /// Help text shown to the operator.
    pub description: String,
    /// Input placeholder.
    pub placeholder: String,
    /// Whether the field must be filled.
    pub required: bool,
    /// Display order, 1-based.
    pub order: u32,
}
