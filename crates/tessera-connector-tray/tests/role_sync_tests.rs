//! Workspace role listing, entitlement, and grant tests against a mock
//! Tray API.

mod common;

use common::*;
use tessera_connector::pagination::{PageRequest, PageToken};
use tessera_connector::resource::{Resource, ResourceId, ResourceKind};
use tessera_connector::traits::ResourceSyncer;
use tessera_connector_tray::{ROLE_ASSIGNMENT_ENTITLEMENT, RoleSyncer};

fn admin_role() -> Resource {
    Resource::role("r1", "admin", ResourceId::workspace("w1"))
}

#[tokio::test]
async fn test_list_without_parent_is_empty_and_offline() {
    let server = MockTrayServer::new().await;

    let syncer = RoleSyncer::new(server.client());
    let page = syncer.list(None, PageRequest::first()).await.unwrap();

    assert!(page.items.is_empty());
    assert!(page.next.is_none());
    assert!(server.received_requests().await.is_empty());
}

#[tokio::test]
async fn test_list_scopes_to_parent_workspace() {
    let server = MockTrayServer::new().await;
    server
        .mock_get(
            "/core/v1/workspaces/w1/roles",
            page_json(
                vec![element_json("r1", "admin"), element_json("r2", "viewer")],
                "",
                false,
            ),
        )
        .await;

    let parent = ResourceId::workspace("w1");
    let syncer = RoleSyncer::new(server.client());
    let page = syncer
        .list(Some(&parent), PageRequest::first())
        .await
        .unwrap();

    assert_eq!(page.items.len(), 2);
    let role = &page.items[0];
    assert_eq!(role.id, ResourceId::role("r1"));
    assert_eq!(role.id.kind, ResourceKind::Role);
    assert_eq!(role.display_name, "admin");
    assert_eq!(role.parent, Some(parent));
    assert!(role.profile.is_none());
    assert!(page.next.is_none());
}

#[tokio::test]
async fn test_role_list_follows_termination_contract() {
    let server = MockTrayServer::new().await;
    server
        .mock_get(
            "/core/v1/workspaces/w1/roles",
            page_json(vec![element_json("r1", "admin")], "role-cursor", true),
        )
        .await;

    let parent = ResourceId::workspace("w1");
    let syncer = RoleSyncer::new(server.client());
    let page = syncer
        .list(Some(&parent), PageRequest::first())
        .await
        .unwrap();

    assert_eq!(
        page.next.as_ref().map(PageToken::as_str),
        Some("role-cursor")
    );
}

#[tokio::test]
async fn test_role_entitlement_names_its_workspace() {
    let server = MockTrayServer::new().await;
    server
        .mock_get("/core/v1/workspaces/w1", workspace_json("w1", "Engineering"))
        .await;

    let syncer = RoleSyncer::new(server.client());
    let page = syncer
        .entitlements(&admin_role(), PageRequest::first())
        .await
        .unwrap();

    assert_eq!(page.items.len(), 1);
    let entitlement = &page.items[0];
    assert_eq!(entitlement.id, "entitlement:role:r1:assigned");
    assert_eq!(entitlement.slug, ROLE_ASSIGNMENT_ENTITLEMENT);
    assert_eq!(entitlement.display_name, "Engineering workspace admin role");
    assert_eq!(
        entitlement.description,
        "Has the admin role in the tray.ai Engineering workspace"
    );
    assert_eq!(entitlement.grantable_to, vec![ResourceKind::User]);
    assert!(page.next.is_none());
}

#[tokio::test]
async fn test_role_entitlements_without_parent_are_empty() {
    let server = MockTrayServer::new().await;

    let mut role = admin_role();
    role.parent = None;
    let syncer = RoleSyncer::new(server.client());
    let page = syncer
        .entitlements(&role, PageRequest::first())
        .await
        .unwrap();

    assert!(page.items.is_empty());
    assert!(server.received_requests().await.is_empty());
}

#[tokio::test]
async fn test_role_entitlements_abort_when_workspace_lookup_fails() {
    let server = MockTrayServer::new().await;
    server
        .mock_get_error("/core/v1/workspaces/w1", 404, "no such workspace")
        .await;

    let syncer = RoleSyncer::new(server.client());
    let err = syncer
        .entitlements(&admin_role(), PageRequest::first())
        .await
        .unwrap_err();

    assert_eq!(err.error_code(), "OBJECT_NOT_FOUND");
}

#[tokio::test]
async fn test_role_grants_one_per_member() {
    let server = MockTrayServer::new().await;
    server
        .mock_get(
            "/core/v1/workspaces/w1/users",
            page_json(
                vec![element_json("u1", "Alice"), element_json("u2", "Bob")],
                "",
                false,
            ),
        )
        .await;

    let syncer = RoleSyncer::new(server.client());
    let page = syncer
        .grants(&admin_role(), PageRequest::first())
        .await
        .unwrap();

    assert_eq!(page.items.len(), 2);
    assert_eq!(page.items[0].id, "grant:entitlement:role:r1:assigned:user:u1");
    assert_eq!(page.items[0].slug, ROLE_ASSIGNMENT_ENTITLEMENT);
    assert_eq!(page.items[0].principal, ResourceId::user("u1"));
    assert_eq!(page.items[1].principal, ResourceId::user("u2"));

    // Membership alone decides assignment, so no per-member lookups.
    assert_eq!(server.received_requests().await.len(), 1);
}

#[tokio::test]
async fn test_role_grants_follow_termination_contract() {
    let server = MockTrayServer::new().await;
    server
        .mock_get(
            "/core/v1/workspaces/w1/users",
            page_json(vec![element_json("u1", "Alice")], "stale-cursor", false),
        )
        .await;

    let syncer = RoleSyncer::new(server.client());
    let page = syncer
        .grants(&admin_role(), PageRequest::first())
        .await
        .unwrap();

    // A populated endCursor without hasNextPage does not continue the walk.
    assert!(page.next.is_none());
}

#[tokio::test]
async fn test_role_grants_without_parent_are_empty() {
    let server = MockTrayServer::new().await;

    let mut role = admin_role();
    role.parent = None;
    let syncer = RoleSyncer::new(server.client());
    let page = syncer.grants(&role, PageRequest::first()).await.unwrap();

    assert!(page.items.is_empty());
    assert!(server.received_requests().await.is_empty());
}
