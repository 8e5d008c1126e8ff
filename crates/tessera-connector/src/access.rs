//! Entitlements and grants
//!
//! An entitlement is a grantable permission scoped to a resource; a grant is
//! the assignment of one to a principal. Both are derived per listing call
//! and never persisted by the connector.

use serde::{Deserialize, Serialize};

use crate::resource::{Resource, ResourceId, ResourceKind};

/// A grantable permission scoped to a resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entitlement {
    /// Deterministic identifier: `entitlement:<kind>:<resource-id>:<slug>`.
    pub id: String,
    /// The resource this entitlement is scoped to.
    pub resource: ResourceId,
    /// Short machine name of the permission.
    pub slug: String,
    /// Human-readable name.
    pub display_name: String,
    /// Human-readable description.
    pub description: String,
    /// Resource kinds a grant of this entitlement may target.
    pub grantable_to: Vec<ResourceKind>,
}

impl Entitlement {
    /// Create an assignment entitlement on a resource.
    ///
    /// Display name and description default to the slug; callers are
    /// expected to override both with text meaningful to reviewers.
    pub fn assignment(resource: &Resource, slug: impl Into<String>) -> Self {
        let slug = slug.into();
        Self {
            id: entitlement_id(&resource.id, &slug),
            resource: resource.id.clone(),
            display_name: slug.clone(),
            description: slug.clone(),
            slug,
            grantable_to: Vec::new(),
        }
    }

    /// Set the display name.
    #[must_use]
    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = display_name.into();
        self
    }

    /// Set the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the kinds this entitlement can be granted to.
    #[must_use]
    pub fn grantable_to(mut self, kinds: &[ResourceKind]) -> Self {
        self.grantable_to = kinds.to_vec();
        self
    }
}

/// The assignment of an entitlement to a principal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grant {
    /// Deterministic identifier:
    /// `grant:<entitlement-id>:<principal-kind>:<principal-id>`.
    pub id: String,
    /// Identifier of the granted entitlement.
    pub entitlement_id: String,
    /// The resource the entitlement is scoped to.
    pub resource: ResourceId,
    /// The entitlement slug.
    pub slug: String,
    /// The principal holding the grant.
    pub principal: ResourceId,
}

impl Grant {
    /// Create a grant of `slug` on `resource` to `principal`.
    pub fn new(resource: &Resource, slug: impl Into<String>, principal: ResourceId) -> Self {
        let slug = slug.into();
        let entitlement_id = entitlement_id(&resource.id, &slug);
        Self {
            id: format!(
                "grant:{entitlement_id}:{}:{}",
                principal.kind, principal.id
            ),
            entitlement_id,
            resource: resource.id.clone(),
            slug,
            principal,
        }
    }
}

fn entitlement_id(resource: &ResourceId, slug: &str) -> String {
    format!("entitlement:{}:{}:{slug}", resource.kind, resource.id)
}
