//! Tray.ai connector for tessera
//!
//! This crate implements the tessera-connector traits for the Tray.ai
//! automation platform, syncing identity data via the core REST API.
//!
//! # Features
//!
//! - Organization user sync with account provisioning
//! - Workspace sync with role entitlements and membership grants
//! - Workspace role sync, scoped to the owning workspace
//! - Cursor pagination honoring the has-next-page termination contract
//!
//! # Example
//!
//! ```no_run
//! use tessera_connector::traits::Connector;
//! use tessera_connector_tray::{TrayConfig, TrayConnector};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = TrayConfig::new("your-auth-token");
//!
//! let connector = TrayConnector::new(config)?;
//! connector.validate().await?;
//!
//! for syncer in connector.resource_syncers() {
//!     let page = syncer.list(None, Default::default()).await?;
//!     println!("{}: {} resources", syncer.resource_kind(), page.count());
//! }
//! # Ok(())
//! # }
//! ```

mod client;
mod config;
mod connector;
mod error;
mod models;
mod roles;
mod users;
mod workspaces;

// Re-exports
pub use client::{ListParams, TrayClient};
pub use config::{DEFAULT_BASE_URL, TrayConfig};
pub use connector::TrayConnector;
pub use error::{TrayError, TrayResult};
pub use models::{
    CreateUserParams, Element, ListResponse, OrganizationRole, PageInfo, TrayUser, TrayWorkspace,
    WorkspaceType,
};
pub use roles::{ROLE_ASSIGNMENT_ENTITLEMENT, RoleSyncer};
pub use users::UserSyncer;
pub use workspaces::WorkspaceSyncer;
