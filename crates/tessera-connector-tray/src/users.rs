//! User synchronization and account provisioning.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info, instrument};

use tessera_connector::error::ConnectorResult;
use tessera_connector::pagination::{ListPage, PageRequest};
use tessera_connector::resource::{Resource, ResourceId, ResourceKind, UserProfile};
use tessera_connector::traits::{AccountProvisioner, AccountRequest, ResourceSyncer};

use crate::client::{ListParams, TrayClient};
use crate::models::{CreateUserParams, Element, TrayUser};

/// Maps a listed element to a user resource.
///
/// The listing only carries id and name, so the profile stays minimal.
// TODO: fill email via get_user; the list endpoint does not return it.
fn user_resource(element: &Element, parent: Option<&ResourceId>) -> Resource {
    let profile = UserProfile::new(&element.id, &element.name);
    let mut resource = Resource::user(&element.id, &element.name, profile);
    if let Some(parent) = parent {
        resource = resource.with_parent(parent.clone());
    }
    resource
}

/// Maps a full user record to a resource with the complete profile.
fn created_user_resource(user: &TrayUser) -> Resource {
    let mut profile = UserProfile::new(&user.id, &user.name);
    if let Some(email) = &user.email {
        profile = profile.with_email(email);
    }
    if let Some(account_type) = &user.account_type {
        profile = profile.with_account_type(account_type);
    }
    if let Some(role) = &user.role {
        profile = profile.with_role(&role.name);
    }
    Resource::user(&user.id, &user.name, profile)
}

/// Syncer for organization users.
#[derive(Debug)]
pub struct UserSyncer {
    client: Arc<TrayClient>,
}

impl UserSyncer {
    /// Creates a user syncer sharing the given client.
    pub fn new(client: Arc<TrayClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ResourceSyncer for UserSyncer {
    fn resource_kind(&self) -> ResourceKind {
        ResourceKind::User
    }

    /// Lists one page of organization users.
    ///
    /// Users are a global listing; a parent scope is passed through onto the
    /// mapped resources, never used to filter.
    #[instrument(skip(self))]
    async fn list(
        &self,
        parent: Option<&ResourceId>,
        page: PageRequest,
    ) -> ConnectorResult<ListPage<Resource>> {
        let params = ListParams {
            cursor: page.token_str().map(String::from),
            first: page.page_size.or(self.client.default_page_size()),
            ..ListParams::default()
        };

        let resp = self
            .client
            .list_users(&params)
            .await
            .map_err(|e| e.into_connector("list users"))?;

        debug!(count = resp.elements.len(), "listed users page");

        let items = resp
            .elements
            .iter()
            .map(|element| user_resource(element, parent))
            .collect();

        Ok(ListPage {
            items,
            next: resp.page_info.continuation(),
        })
    }
}

#[async_trait]
impl AccountProvisioner for UserSyncer {
    /// Creates a user account.
    ///
    /// The request is validated before any network call; the created
    /// resource's identifier is the id the platform assigned.
    #[instrument(skip(self, request))]
    async fn create_account(&self, request: AccountRequest) -> ConnectorResult<Resource> {
        let account = request.validated()?;

        let params = CreateUserParams {
            name: account.name,
            email: account.email,
            organization_role_id: account.organization_role_id,
        };

        let user = self
            .client
            .create_user(&params)
            .await
            .map_err(|e| e.into_connector("create user"))?;

        info!(user_id = %user.id, "created user account");
        Ok(created_user_resource(&user))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::OrganizationRole;

    fn element(id: &str, name: &str) -> Element {
        Element {
            id: id.to_string(),
            name: name.to_string(),
            element_type: None,
            description: None,
            monthly_task_limit: None,
        }
    }

    #[test]
    fn test_element_maps_to_user_resource() {
        let resource = user_resource(&element("u1", "Alice"), None);
        assert_eq!(resource.id, ResourceId::user("u1"));
        assert_eq!(resource.display_name, "Alice");

        let profile = resource.profile.as_ref().unwrap().as_user().unwrap();
        assert_eq!(profile.id, "u1");
        assert_eq!(profile.username, "Alice");
        assert_eq!(profile.email, None);
    }

    #[test]
    fn test_parent_scope_is_passed_through() {
        let parent = ResourceId::workspace("w1");
        let resource = user_resource(&element("u1", "Alice"), Some(&parent));
        assert_eq!(resource.parent, Some(parent));
    }

    #[test]
    fn test_created_user_gets_full_profile() {
        let user = TrayUser {
            id: "u9".to_string(),
            name: "Carol".to_string(),
            email: Some("carol@example.com".to_string()),
            account_type: Some("member".to_string()),
            role: Some(OrganizationRole {
                id: Some("or1".to_string()),
                name: "admin".to_string(),
            }),
        };

        let resource = created_user_resource(&user);
        assert_eq!(resource.id, ResourceId::user("u9"));

        let profile = resource.profile.as_ref().unwrap().as_user().unwrap();
        assert_eq!(profile.email.as_deref(), Some("carol@example.com"));
        assert_eq!(profile.account_type.as_deref(), Some("member"));
        assert_eq!(profile.role.as_deref(), Some("admin"));
    }
}
