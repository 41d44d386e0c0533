use cratemap_lib::api::{GraphBuilder, LiveCratesIoClient, LoadOrderComputer, to_dot};
use cratemap_lib::networking::{NetworkingConfig, NetworkingManager};
use cratemap_lib::primitives::PackageRef;
use std::collections::HashMap;
use std::sync::Arc;

async fn dependency_endpoint(
    server: &mut mockito::ServerGuard,
    name: &str,
    version: &str,
    body: &str,
) {
    server
        .mock(
            "GET",
            format!("/crates/{name}/{version}/dependencies").as_str(),
        )
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body)
        .create_async()
        .await;
}

fn client_for(server: &mockito::ServerGuard) -> LiveCratesIoClient {
    let networking =
        Arc::new(NetworkingManager::new(NetworkingConfig::default()).expect("client builds"));
    LiveCratesIoClient::with_base_url(networking, server.url())
}

#[tokio::test]
async fn resolves_graph_and_order_over_http() {
    let mut server = mockito::Server::new_async().await;

    dependency_endpoint(
        &mut server,
        "app",
        "0.1.0",
        r#"{"dependencies": [
            {"crate_id": "engine", "req": "^1.2", "kind": "normal"},
            {"crate_id": "cli-args", "req": ">=2.0,<3.0", "kind": "normal"}
        ]}"#,
    )
    .await;
    dependency_endpoint(
        &mut server,
        "engine",
        "1.2",
        r#"{"dependencies": [{"crate_id": "mathlib", "req": "~0.3", "kind": "normal"}]}"#,
    )
    .await;
    dependency_endpoint(&mut server, "cli-args", ">=2.0", r#"{"dependencies": []}"#).await;
    dependency_endpoint(&mut server, "mathlib", "0.3", r#"{"dependencies": []}"#).await;

    let client = client_for(&server);
    let root = PackageRef::new("app", "0.1.0");

    let outcome = GraphBuilder::new(3).build(&client, root.clone()).await;

    let expected: HashMap<String, Vec<String>> = [
        (
            "app@0.1.0".to_string(),
            vec!["engine@1.2".to_string(), "cli-args@>=2.0".to_string()],
        ),
        ("engine@1.2".to_string(), vec!["mathlib@0.3".to_string()]),
        ("cli-args@>=2.0".to_string(), vec![]),
        ("mathlib@0.3".to_string(), vec![]),
    ]
    .into_iter()
    .collect();
    assert_eq!(outcome.graph.adjacency(), expected);
    assert!(outcome.cycles.is_empty());

    let dot = to_dot(&outcome.graph);
    assert!(dot.contains("rankdir=LR"));
    assert!(dot.contains("\"app@0.1.0\" -> \"engine@1.2\";"));

    let order = LoadOrderComputer::new().order(&client, root).await;
    let position = |key: &str| order.iter().position(|k| k == key).unwrap();
    assert_eq!(order.len(), 4);
    assert!(position("mathlib@0.3") < position("engine@1.2"));
    assert!(position("engine@1.2") < position("app@0.1.0"));
    assert_eq!(order.last().unwrap(), "app@0.1.0");
}

#[tokio::test]
async fn missing_packages_degrade_to_leaves() {
    let mut server = mockito::Server::new_async().await;

    dependency_endpoint(
        &mut server,
        "app",
        "0.1.0",
        r#"{"dependencies": [{"crate_id": "ghost", "req": "1.0", "kind": "normal"}]}"#,
    )
    .await;
    // ghost/1.0 has no mock: the server answers 501, the walk shrugs

    let client = client_for(&server);
    let outcome = GraphBuilder::new(3)
        .build(&client, PackageRef::new("app", "0.1.0"))
        .await;

    let adjacency = outcome.graph.adjacency();
    assert_eq!(adjacency["app@0.1.0"], vec!["ghost@1.0".to_string()]);
    assert_eq!(adjacency["ghost@1.0"], Vec::<String>::new());
    assert!(outcome.cycles.is_empty());
}

#[tokio::test]
async fn cyclic_registry_data_terminates() {
    let mut server = mockito::Server::new_async().await;

    dependency_endpoint(
        &mut server,
        "ping",
        "1.0",
        r#"{"dependencies": [{"crate_id": "pong", "req": "1.0", "kind": "normal"}]}"#,
    )
    .await;
    dependency_endpoint(
        &mut server,
        "pong",
        "1.0",
        r#"{"dependencies": [{"crate_id": "ping", "req": "1.0", "kind": "normal"}]}"#,
    )
    .await;

    let client = client_for(&server);
    let outcome = GraphBuilder::new(10)
        .build(&client, PackageRef::new("ping", "1.0"))
        .await;

    assert_eq!(outcome.cycles, vec!["ping@1.0".to_string()]);

    let order = LoadOrderComputer::new()
        .order(&client, PackageRef::new("ping", "1.0"))
        .await;
    assert_eq!(order, vec!["pong@1.0".to_string(), "ping@1.0".to_string()]);
}
