//! Connector-level tests: validation probe, metadata, and the syncer
//! registry driven through the host-facing trait.

mod common;

use common::*;
use tessera_connector::pagination::PageRequest;
use tessera_connector::resource::ResourceKind;
use tessera_connector::traits::Connector;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn test_validate_probes_with_single_user() {
    let server = MockTrayServer::new().await;
    Mock::given(method("GET"))
        .and(path("/core/v1/users"))
        .and(query_param("first", "1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(page_json(vec![element_json("u1", "Alice")], "", false)),
        )
        .expect(1)
        .mount(&server.server)
        .await;

    let connector = server.connector();
    connector.validate().await.unwrap();

    assert_eq!(server.received_requests().await.len(), 1);
}

#[tokio::test]
async fn test_validate_surfaces_bad_credentials() {
    let server = MockTrayServer::new().await;
    server
        .mock_get_error("/core/v1/users", 401, "invalid token")
        .await;

    let connector = server.connector();
    let err = connector.validate().await.unwrap_err();

    assert_eq!(err.error_code(), "AUTH_FAILED");
}

#[tokio::test]
async fn test_metadata_describes_account_schema() {
    let server = MockTrayServer::new().await;
    let metadata = server.connector().metadata();

    assert_eq!(metadata.display_name, "Tray.ai");
    let schema = metadata.account_schema.unwrap();
    let names: Vec<&str> = schema.fields.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["name", "email", "organizationRoleId"]);
    assert!(schema.fields.iter().all(|f| f.required));
}

#[tokio::test]
async fn test_registered_syncers_cover_all_kinds() {
    let server = MockTrayServer::new().await;
    server
        .mock_get(
            "/core/v1/users",
            page_json(vec![element_json("u1", "Alice")], "", false),
        )
        .await;
    server
        .mock_get(
            "/core/v1/workspaces",
            page_json(vec![workspace_json("w1", "Engineering")], "", false),
        )
        .await;

    let connector = server.connector();
    let syncers = connector.resource_syncers();
    let kinds: Vec<ResourceKind> = syncers.iter().map(|s| s.resource_kind()).collect();
    assert_eq!(
        kinds,
        vec![
            ResourceKind::User,
            ResourceKind::Workspace,
            ResourceKind::Role
        ]
    );

    // Top-level listing per kind: users and workspaces return data, roles
    // need a parent workspace and come back empty.
    for syncer in &syncers {
        let page = syncer.list(None, PageRequest::first()).await.unwrap();
        match syncer.resource_kind() {
            ResourceKind::User | ResourceKind::Workspace => {
                assert_eq!(page.items.len(), 1);
            }
            ResourceKind::Role => assert!(page.items.is_empty()),
        }
    }
}
