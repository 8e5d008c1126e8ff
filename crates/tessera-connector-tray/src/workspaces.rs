//! Workspace synchronization.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, instrument};

use tessera_connector::access::{Entitlement, Grant};
use tessera_connector::error::{ConnectorError, ConnectorResult};
use tessera_connector::pagination::{ListPage, PageRequest};
use tessera_connector::resource::{
    Resource, ResourceId, ResourceKind, WorkspaceProfile,
};
use tessera_connector::traits::ResourceSyncer;

use crate::client::{ListParams, TrayClient};
use crate::models::Element;

/// Maps a listed element to a workspace resource.
fn workspace_resource(element: &Element) -> Resource {
    let mut profile = WorkspaceProfile::new(&element.id, &element.name);
    if let Some(ws_type) = &element.element_type {
        profile = profile.with_workspace_type(ws_type);
    }
    if let Some(description) = &element.description {
        profile = profile.with_description(description);
    }
    if let Some(limit) = element.monthly_task_limit {
        profile = profile.with_monthly_task_limit(limit);
    }
    Resource::workspace(&element.id, &element.name, profile)
}

/// Syncer for workspaces.
#[derive(Debug)]
pub struct WorkspaceSyncer {
    client: Arc<TrayClient>,
}

impl WorkspaceSyncer {
    /// Creates a workspace syncer sharing the given client.
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
impl ResourceSyncer for WorkspaceSyncer {
    fn resource_kind(&self) -> ResourceKind {
        ResourceKind::Workspace
    }

    /// Lists one page of workspaces. Workspaces are a global listing.
    #[instrument(skip(self))]
    async fn list(
        &self,
        _parent: Option<&ResourceId>,
        page: PageRequest,
    ) -> ConnectorResult<ListPage<Resource>> {
        let resp = self
            .client
            .list_workspaces(&self.list_params(&page))
            .await
            .map_err(|e| e.into_connector("list workspaces"))?;

        debug!(count = resp.elements.len(), "listed workspaces page");

        let items = resp.elements.iter().map(workspace_resource).collect();

        Ok(ListPage {
            items,
            next: resp.page_info.continuation(),
        })
    }

    /// Lists one page of role entitlements defined in this workspace.
    #[instrument(skip(self))]
    async fn entitlements(
        &self,
        resource: &Resource,
        page: PageRequest,
    ) -> ConnectorResult<ListPage<Entitlement>> {
        let resp = self
            .client
            .list_workspace_roles(&resource.id.id, &self.list_params(&page))
            .await
            .map_err(|e| e.into_connector("list workspace roles"))?;

        let items = resp
            .elements
            .iter()
            .map(|role| {
                Entitlement::assignment(resource, &role.name)
                    .with_display_name(format!(
                        "{} workspace {}",
                        resource.display_name, role.name
                    ))
                    .with_description(format!(
                        "{} access to {} in tray.ai",
                        role.name, resource.display_name
                    ))
                    .grantable_to(&[ResourceKind::User, ResourceKind::Workspace])
            })
            .collect();

        Ok(ListPage {
            items,
            next: resp.page_info.continuation(),
        })
    }

    /// Lists one page of workspace membership grants.
    ///
    /// The member listing only carries user ids, so each member costs a
    /// follow-up `get_user` call to resolve the organization-role slug: a
    /// page of n members issues n+1 requests, sequentially. Any failed
    /// resolution aborts the whole page.
    #[instrument(skip(self))]
    async fn grants(
        &self,
        resource: &Resource,
        page: PageRequest,
    ) -> ConnectorResult<ListPage<Grant>> {
        let resp = self
            .client
            .list_workspace_members(&resource.id.id, &self.list_params(&page))
            .await
            .map_err(|e| e.into_connector("list workspace members"))?;

        let mut items = Vec::with_capacity(resp.elements.len());
        for member in &resp.elements {
            let user = self
                .client
                .get_user(&member.id)
                .await
                .map_err(|e| e.into_connector("get user"))?;

            let Some(role) = user.role else {
                return Err(ConnectorError::operation_failed(
                    "get user",
                    format!("user {} has no organization role", user.id),
                ));
            };

            items.push(Grant::new(resource, &role.name, ResourceId::user(user.id)));
        }

        Ok(ListPage {
            items,
            next: resp.page_info.continuation(),
        })
    }
}
