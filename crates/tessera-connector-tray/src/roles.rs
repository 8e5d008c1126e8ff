//! Workspace role synchronization.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, instrument};

use tessera_connector::access::{Entitlement, Grant};
use tessera_connector::error::ConnectorResult;
use tessera_connector::pagination::{ListPage, PageRequest};
use tessera_connector::resource::{Resource, ResourceId, ResourceKind};
use tessera_connector::traits::ResourceSyncer;

use crate::client::{ListParams, TrayClient};
use crate::models::Element;

/// Slug of the single entitlement a workspace role carries.
pub const ROLE_ASSIGNMENT_ENTITLEMENT: &str = "assigned";

fn role_resource(element: &Element, parent: &ResourceId) -> Resource {
    Resource::role(&element.id, &element.name, parent.clone())
}

/// Syncer for workspace roles.
///
/// Roles only exist within a workspace, so every operation here is scoped:
/// a missing workspace parent yields an empty page, not an error, and no
/// request is made.
#[derive(Debug)]
pub struct RoleSyncer {
    client: Arc<TrayClient>,
}

impl RoleSyncer {
    /// Creates a role syncer sharing the given client.
    pub fn new(client: Arc<TrayClient>) -> Self {
        Self { client }
    }

    fn list_params(&self, page: &PageRequest) -> ListParams {
        ListParams {
            cursor: page.token_str().map(String::from),
            first: page.page_size.or(self.client.default_page_size()),
            ..ListParams::default()
        }
    }
}

#[async_trait]
impl ResourceSyncer for RoleSyncer {
    fn resource_kind(&self) -> ResourceKind {
        ResourceKind::Role
    }

    /// Lists one page of the roles defined in the parent workspace.
    #[instrument(skip(self))]
    async fn list(
        &self,
        parent: Option<&ResourceId>,
        page: PageRequest,
    ) -> ConnectorResult<ListPage<Resource>> {
        let Some(parent) = parent else {
            return Ok(ListPage::empty());
        };

        let resp = self
            .client
            .list_workspace_roles(&parent.id, &self.list_params(&page))
            .await
            .map_err(|e| e.into_connector("list workspace roles"))?;

        debug!(count = resp.elements.len(), "listed workspace roles page");

        let items = resp
            .elements
            .iter()
            .map(|element| role_resource(element, parent))
            .collect();

        Ok(ListPage {
            items,
            next: resp.page_info.continuation(),
        })
    }

    /// Derives the single assignment entitlement of a role.
    ///
    /// The owning workspace is fetched for its display name; a failed
    /// lookup aborts rather than emitting text with a missing name.
    #[instrument(skip(self))]
    async fn entitlements(
        &self,
        resource: &Resource,
        _page: PageRequest,
    ) -> ConnectorResult<ListPage<Entitlement>> {
        let Some(parent) = &resource.parent else {
            return Ok(ListPage::empty());
        };

        let workspace = self
            .client
            .get_workspace(&parent.id)
            .await
            .map_err(|e| e.into_connector("get workspace"))?;

        let entitlement = Entitlement::assignment(resource, ROLE_ASSIGNMENT_ENTITLEMENT)
            .with_display_name(format!(
                "{} workspace {} role",
                workspace.name, resource.display_name
            ))
            .with_description(format!(
                "Has the {} role in the tray.ai {} workspace",
                resource.display_name, workspace.name
            ))
            .grantable_to(&[ResourceKind::User]);

        Ok(ListPage::new(vec![entitlement]))
    }

    /// Lists one page of members holding this role's workspace assignment.
    #[instrument(skip(self))]
    async fn grants(
        &self,
        resource: &Resource,
        page: PageRequest,
    ) -> ConnectorResult<ListPage<Grant>> {
        let Some(parent) = &resource.parent else {
            return Ok(ListPage::empty());
        };

        let resp = self
            .client
            .list_workspace_members(&parent.id, &self.list_params(&page))
            .await
            .map_err(|e| e.into_connector("list workspace members"))?;

        let items = resp
            .elements
            .iter()
            .map(|member| {
                Grant::new(
                    resource,
                    ROLE_ASSIGNMENT_ENTITLEMENT,
                    ResourceId::user(&member.id),
                )
            })
            .collect();

        Ok(ListPage {
            items,
            next: resp.page_info.continuation(),
        })
    }
}
