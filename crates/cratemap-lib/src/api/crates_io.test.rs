use super::*;
use crate::networking::NetworkingConfig;

fn manager() -> Arc<NetworkingManager> {
    Arc::new(NetworkingManager::new(NetworkingConfig::default()).unwrap())
}

#[tokio::test]
async fn test_mock_returns_canned_listing_and_records_calls() {
    let client = MockRegistryClient::new().with_dependencies(
        "serde",
        "1.0.0",
        vec![RegistryDependency::new("serde_derive", "=1.0.0")],
    );

    let listing = client.fetch_dependencies("serde", "1.0.0").await.unwrap();
    assert_eq!(listing.dependencies.len(), 1);
    assert_eq!(listing.dependencies[0].crate_id, "serde_derive");

    let _ = client.fetch_dependencies("serde", "1.0.0").await;
    assert_eq!(
        client.calls().await,
        vec![
            ("serde".to_string(), "1.0.0".to_string()),
            ("serde".to_string(), "1.0.0".to_string()),
        ]
    );
}

#[tokio::test]
async fn test_mock_missing_pair_errors() {
    let client = MockRegistryClient::new();
    let result = client.fetch_dependencies("ghost", "0.1.0").await;
    assert!(matches!(result, Err(RegistryError::NotFound { .. })));
}

#[tokio::test]
async fn test_fetch_or_empty_swallows_failures() {
    let client = MockRegistryClient::new().with_error("broken", "1.0", "boom");

    let deps = fetch_or_empty(&client, &PackageRef::new("broken", "1.0")).await;
    assert!(deps.is_empty());

    let deps = fetch_or_empty(&client, &PackageRef::new("unknown", "1.0")).await;
    assert!(deps.is_empty());
}

#[tokio::test]
async fn test_fetch_or_empty_passes_listing_through() {
    let client = MockRegistryClient::new().with_dependencies(
        "root",
        "1.0",
        vec![
            RegistryDependency::new("a", "^1"),
            RegistryDependency::new("b", "~2").with_kind(DepKind::Dev),
        ],
    );

    let deps = fetch_or_empty(&client, &PackageRef::new("root", "1.0")).await;
    assert_eq!(deps.len(), 2);
    assert_eq!(deps[1].kind, DepKind::Dev);
}

#[test]
fn test_dependencies_url_shape_and_encoding() {
    let client = LiveCratesIoClient::with_base_url(manager(), "http://registry.test".to_string());

    assert_eq!(
        client.dependencies_url("serde", "1.0.200"),
        "http://registry.test/crates/serde/1.0.200/dependencies"
    );
    assert_eq!(
        client.dependencies_url("odd name", ">=1.0"),
        "http://registry.test/crates/odd%20name/%3E=1.0/dependencies"
    );
}

#[tokio::test]
async fn test_live_client_parses_listing() {
    let mut server = mockito::Server::new_async().await;
    let body = r#"{
        "dependencies": [
            {"crate_id": "serde", "req": "^1.0", "kind": "normal", "optional": false},
            {"crate_id": "mystery", "req": "*", "kind": "brand-new-kind"},
            {"crate_id": "bare", "req": "1.0"}
        ]
    }"#;
    server
        .mock("GET", "/crates/demo/1.0.0/dependencies")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body)
        .create_async()
        .await;

    let client = LiveCratesIoClient::with_base_url(manager(), server.url());
    let listing = client.fetch_dependencies("demo", "1.0.0").await.unwrap();

    assert_eq!(listing.dependencies.len(), 3);
    assert_eq!(listing.dependencies[0].kind, DepKind::Normal);
    assert_eq!(listing.dependencies[1].kind, DepKind::Other);
    assert_eq!(listing.dependencies[2].kind, DepKind::Normal);
}

#[tokio::test]
async fn test_live_client_maps_http_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/crates/ghost/0.1.0/dependencies")
        .with_status(404)
        .create_async()
        .await;

    let client = LiveCratesIoClient::with_base_url(manager(), server.url());
    let result = client.fetch_dependencies("ghost", "0.1.0").await;
    assert!(matches!(result, Err(RegistryError::NetworkError { .. })));
}

#[tokio::test]
async fn test_live_client_maps_malformed_json() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/crates/demo/1.0.0/dependencies")
        .with_status(200)
        .with_body("{not json")
        .create_async()
        .await;

    let client = LiveCratesIoClient::with_base_url(manager(), server.url());
    let result = client.fetch_dependencies("demo", "1.0.0").await;
    assert!(matches!(result, Err(RegistryError::JsonError { .. })));
}
