//! # Connector SDK
//!
//! Core abstractions for synchronizing identity data from external SaaS
//! platforms into the tessera governance model.
//!
//! A connector translates a remote system's users, groups, and permission
//! structures into three record kinds the governance host understands:
//! resources, entitlements, and grants. The host drives sync cycles one page
//! at a time and persists the results; connectors stay stateless between
//! calls.
//!
//! ## Architecture
//!
//! One generic adapter interface covers every resource kind:
//!
//! - [`traits::Connector`] - Top-level plugin surface (metadata, syncers,
//!   validation)
//! - [`traits::ResourceSyncer`] - The list/entitlements/grants triad,
//!   paginated via [`pagination::PageRequest`] / [`pagination::ListPage`]
//! - [`traits::AccountProvisioner`] - Account creation, for kinds that
//!   support it
//!
//! Pagination follows one termination contract everywhere: a page carries a
//! continuation token only while the remote reports more pages; a page with
//! `next: None` ends the sequence.
//!
//! ## Example
//!
//! ```ignore
//! use tessera_connector::prelude::*;
//!
//! async fn sync_all(syncer: &dyn ResourceSyncer) -> ConnectorResult<Vec<Resource>> {
//!     let mut out = Vec::new();
//!     let mut page = PageRequest::new(100);
//!     loop {
//!         let result = syncer.list(None, page).await?;
//!         out.extend(result.items);
//!         match result.next {
//!             Some(token) => page = PageRequest::new(100).with_token(token),
//!             None => return Ok(out),
//!         }
//!     }
//! }
//! ```
//!
//! ## Crate Organization
//!
//! - [`resource`] - Resource kinds, identifiers, and typed profiles
//! - [`access`] - Entitlement and grant records
//! - [`pagination`] - Page tokens, requests, and results
//! - [`traits`] - Connector capability traits
//! - [`error`] - Error types with transient/permanent classification
//! - [`config`] - Configuration trait

pub mod access;
pub mod config;
pub mod error;
pub mod pagination;
pub mod resource;
pub mod traits;

/// Prelude module for convenient imports.
///
/// ```
/// use tessera_connector::prelude::*;
/// ```
pub mod prelude {
    // Resources
    pub use crate::resource::{
        Resource, ResourceId, ResourceKind, ResourceProfile, UserProfile, UserStatus,
        WorkspaceProfile,
    };

    // Access records
    pub use crate::access::{Entitlement, Grant};

    // Pagination
    pub use crate::pagination::{ListPage, PageRequest, PageToken};

    // Error handling
    pub use crate::error::{ConnectorError, ConnectorResult};

    // Traits
    pub use crate::traits::{
        AccountField, AccountProvisioner, AccountRequest, AccountSchema, Connector,
        ConnectorMetadata, NewAccount, ResourceSyncer,
    };

    // Configuration
    pub use crate::config::{ConnectorConfig, REDACTED};
}

// Re-export async_trait for connector implementors
pub use async_trait::async_trait;

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn test_prelude_imports() {
        // Verify all prelude types are accessible
        let _kind = ResourceKind::User;
        let _id = ResourceId::user("u1");
        let _profile = UserProfile::new("u1", "alice");
        let _page = PageRequest::new(50);
        let _token = PageToken::new("cursor");
        let _request = AccountRequest::new().with_name("alice");
        let _result: ListPage<Resource> = ListPage::empty();
    }
}
