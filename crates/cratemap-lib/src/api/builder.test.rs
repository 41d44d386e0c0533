use super::*;
use crate::api::crates_io::{MockRegistryClient, RegistryDependency};
use std::collections::HashMap;

fn dep(name: &str, req: &str) -> RegistryDependency {
    RegistryDependency::new(name, req)
}

fn keys(entries: &[(&str, &[&str])]) -> HashMap<String, Vec<String>> {
    entries
        .iter()
        .map(|(key, targets)| {
            (
                key.to_string(),
                targets.iter().map(|t| t.to_string()).collect(),
            )
        })
        .collect()
}

#[tokio::test]
async fn test_end_to_end_root_with_two_leaves() {
    let client = MockRegistryClient::new()
        .with_dependencies(
            "root",
            "1.0",
            vec![dep("left", "1.0"), dep("right", "^2.0")],
        )
        .with_dependencies("left", "1.0", vec![])
        .with_dependencies("right", "2.0", vec![]);

    let outcome = GraphBuilder::new(2)
        .build(&client, PackageRef::new("root", "1.0"))
        .await;

    assert_eq!(
        outcome.graph.adjacency(),
        keys(&[
            ("root@1.0", &["left@1.0", "right@2.0"]),
            ("left@1.0", &[]),
            ("right@2.0", &[]),
        ])
    );
    assert!(outcome.cycles.is_empty());
}

#[tokio::test]
async fn test_depth_zero_stops_before_grandchildren() {
    let client = MockRegistryClient::new()
        .with_dependencies("root", "1.0", vec![dep("a", "1.0")])
        .with_dependencies("a", "1.0", vec![dep("b", "1.0")])
        .with_dependencies("b", "1.0", vec![]);

    let outcome = GraphBuilder::new(0)
        .build(&client, PackageRef::new("root", "1.0"))
        .await;

    // Only the root's own fetch ran; its children were never expanded.
    assert_eq!(
        outcome.graph.adjacency(),
        keys(&[("root@1.0", &["a@1.0"])])
    );
    assert_eq!(
        client.calls().await,
        vec![("root".to_string(), "1.0".to_string())]
    );
}

#[tokio::test]
async fn test_mutual_dependency_records_cycle_and_both_edges() {
    let client = MockRegistryClient::new()
        .with_dependencies("A", "1", vec![dep("B", "1")])
        .with_dependencies("B", "1", vec![dep("A", "1")]);

    let outcome = GraphBuilder::new(5)
        .build(&client, PackageRef::new("A", "1"))
        .await;

    assert_eq!(outcome.cycles, vec!["A@1".to_string()]);
    assert_eq!(
        outcome.graph.adjacency(),
        keys(&[("A@1", &["B@1"]), ("B@1", &["A@1"])])
    );
}

#[tokio::test]
async fn test_self_dependency_is_a_cycle() {
    let client =
        MockRegistryClient::new().with_dependencies("loopy", "1.0", vec![dep("loopy", "1.0")]);

    let outcome = GraphBuilder::new(3)
        .build(&client, PackageRef::new("loopy", "1.0"))
        .await;

    assert_eq!(outcome.cycles, vec!["loopy@1.0".to_string()]);
    assert_eq!(
        outcome.graph.adjacency(),
        keys(&[("loopy@1.0", &["loopy@1.0"])])
    );
}

#[tokio::test]
async fn test_filter_records_edge_but_does_not_expand() {
    let client = MockRegistryClient::new()
        .with_dependencies(
            "root",
            "1.0",
            vec![dep("Bar", "1.0"), dep("okay", "1.0")],
        )
        .with_dependencies("Bar", "1.0", vec![dep("inner", "1.0")])
        .with_dependencies("okay", "1.0", vec![]);

    let outcome = GraphBuilder::new(3)
        .with_filter("b")
        .build(&client, PackageRef::new("root", "1.0"))
        .await;

    // Bar is an edge target but never a mapping key, and was never fetched.
    assert_eq!(
        outcome.graph.adjacency(),
        keys(&[("root@1.0", &["Bar@1.0", "okay@1.0"]), ("okay@1.0", &[])])
    );
    assert!(
        !client
            .calls()
            .await
            .contains(&("Bar".to_string(), "1.0".to_string()))
    );
}

#[tokio::test]
async fn test_fetch_failure_becomes_leaf() {
    let client = MockRegistryClient::new()
        .with_dependencies("root", "1.0", vec![dep("broken", "1.0")])
        .with_error("broken", "1.0", "registry exploded");

    let outcome = GraphBuilder::new(3)
        .build(&client, PackageRef::new("root", "1.0"))
        .await;

    assert_eq!(
        outcome.graph.adjacency(),
        keys(&[("root@1.0", &["broken@1.0"]), ("broken@1.0", &[])])
    );
    assert!(outcome.cycles.is_empty());
}

#[tokio::test]
async fn test_requirements_normalized_into_node_identity() {
    let client = MockRegistryClient::new()
        .with_dependencies("root", "1.0", vec![dep("x", "^1.2.3")])
        .with_dependencies("x", "1.2.3", vec![]);

    let outcome = GraphBuilder::new(2)
        .build(&client, PackageRef::new("root", "1.0"))
        .await;

    assert!(outcome.graph.contains("x@1.2.3"));
    assert!(
        client
            .calls()
            .await
            .contains(&("x".to_string(), "1.2.3".to_string()))
    );
}

#[tokio::test]
async fn test_duplicate_dependency_keeps_both_edges() {
    let client = MockRegistryClient::new()
        .with_dependencies(
            "root",
            "1.0",
            vec![dep("dup", "1.0"), dep("dup", "1.0")],
        )
        .with_dependencies("dup", "1.0", vec![]);

    let outcome = GraphBuilder::new(2)
        .build(&client, PackageRef::new("root", "1.0"))
        .await;

    let adjacency = outcome.graph.adjacency();
    assert_eq!(
        adjacency["root@1.0"],
        vec!["dup@1.0".to_string(), "dup@1.0".to_string()]
    );
    // The second encounter is a re-entry by definition, not deduplicated away.
    assert_eq!(outcome.cycles, vec!["dup@1.0".to_string()]);
}

#[tokio::test]
async fn test_shared_dependency_flagged_as_re_entry() {
    let client = MockRegistryClient::new()
        .with_dependencies("a", "1", vec![dep("b", "1"), dep("c", "1")])
        .with_dependencies("b", "1", vec![dep("d", "1")])
        .with_dependencies("c", "1", vec![dep("d", "1")])
        .with_dependencies("d", "1", vec![]);

    let outcome = GraphBuilder::new(5)
        .build(&client, PackageRef::new("a", "1"))
        .await;

    // A diamond is not a true cycle, but re-entry flagging reports it anyway.
    assert_eq!(outcome.cycles, vec!["d@1".to_string()]);
    assert_eq!(outcome.graph.adjacency()["c@1"], vec!["d@1".to_string()]);
}

#[tokio::test]
async fn test_unknown_root_yields_single_empty_entry() {
    let client = MockRegistryClient::new();

    let outcome = GraphBuilder::new(3)
        .build(&client, PackageRef::new("ghost", "0.0.0"))
        .await;

    assert_eq!(outcome.graph.adjacency(), keys(&[("ghost@0.0.0", &[])]));
    assert!(outcome.cycles.is_empty());
}
