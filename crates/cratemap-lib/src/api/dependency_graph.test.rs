use super::*;

fn pkg(name: &str, version: &str) -> PackageRef {
    PackageRef::new(name, version)
}

#[test]
fn test_new_graph_is_empty() {
    let graph = DependencyGraph::new();
    assert_eq!(graph.node_count(), 0);
    assert_eq!(graph.edge_count(), 0);
    assert!(graph.adjacency().is_empty());
}

#[test]
fn test_ensure_node_is_idempotent() {
    let mut graph = DependencyGraph::new();
    let idx1 = graph.ensure_node(&pkg("serde", "1.0"));
    let idx2 = graph.ensure_node(&pkg("serde", "1.0"));

    assert_eq!(idx1, idx2);
    assert_eq!(graph.node_count(), 1);
    assert!(graph.contains("serde@1.0"));
}

#[test]
fn test_same_name_different_version_is_two_nodes() {
    let mut graph = DependencyGraph::new();
    graph.ensure_node(&pkg("serde", "1.0"));
    graph.ensure_node(&pkg("serde", "2.0"));

    assert_eq!(graph.node_count(), 2);
    assert!(graph.contains("serde@1.0"));
    assert!(graph.contains("serde@2.0"));
}

#[test]
fn test_add_edge_creates_endpoints() {
    let mut graph = DependencyGraph::new();
    graph.add_edge(&pkg("a", "1"), &pkg("b", "1"), DepKind::Normal);

    assert_eq!(graph.node_count(), 2);
    assert_eq!(graph.edge_count(), 1);
    assert_eq!(graph.edge_list(), vec![("a@1".to_string(), "b@1".to_string())]);
}

#[test]
fn test_parallel_edges_are_kept() {
    let mut graph = DependencyGraph::new();
    graph.add_edge(&pkg("a", "1"), &pkg("b", "1"), DepKind::Normal);
    graph.add_edge(&pkg("a", "1"), &pkg("b", "1"), DepKind::Dev);

    assert_eq!(graph.edge_count(), 2);
}

#[test]
fn test_adjacency_lists_only_expanded_nodes() {
    let mut graph = DependencyGraph::new();
    graph.mark_expanded(&pkg("a", "1"));
    graph.add_edge(&pkg("a", "1"), &pkg("b", "1"), DepKind::Normal);
    graph.add_edge(&pkg("a", "1"), &pkg("c", "1"), DepKind::Normal);

    let adjacency = graph.adjacency();
    assert_eq!(adjacency.len(), 1);
    assert_eq!(
        adjacency["a@1"],
        vec!["b@1".to_string(), "c@1".to_string()]
    );
    assert!(!adjacency.contains_key("b@1"));
}

#[test]
fn test_expanded_leaf_gets_empty_entry() {
    let mut graph = DependencyGraph::new();
    graph.mark_expanded(&pkg("leaf", "0.1"));

    let adjacency = graph.adjacency();
    assert_eq!(adjacency["leaf@0.1"], Vec::<String>::new());
}

#[test]
fn test_edge_list_preserves_discovery_order() {
    let mut graph = DependencyGraph::new();
    graph.add_edge(&pkg("a", "1"), &pkg("b", "1"), DepKind::Normal);
    graph.add_edge(&pkg("b", "1"), &pkg("c", "1"), DepKind::Normal);
    graph.add_edge(&pkg("a", "1"), &pkg("c", "1"), DepKind::Normal);

    assert_eq!(
        graph.edge_list(),
        vec![
            ("a@1".to_string(), "b@1".to_string()),
            ("b@1".to_string(), "c@1".to_string()),
            ("a@1".to_string(), "c@1".to_string()),
        ]
    );
}

#[test]
fn test_get_node() {
    let mut graph = DependencyGraph::new();
    graph.ensure_node(&pkg("tokio", "1.50.0"));

    let node = graph.get_node("tokio@1.50.0").unwrap();
    assert_eq!(node.name, "tokio");
    assert_eq!(node.version, "1.50.0");
    assert!(graph.get_node("missing@0").is_none());
}

#[test]
fn test_from_adjacency_round_trips() {
    let mut mapping: BTreeMap<String, Vec<String>> = BTreeMap::new();
    mapping.insert(
        "root@1.0".to_string(),
        vec!["left@1.0".to_string(), "right@2.0".to_string()],
    );
    mapping.insert("left@1.0".to_string(), vec![]);
    mapping.insert("right@2.0".to_string(), vec![]);

    let graph = DependencyGraph::from_adjacency(&mapping);

    let adjacency = graph.adjacency();
    assert_eq!(adjacency.len(), 3);
    assert_eq!(
        adjacency["root@1.0"],
        vec!["left@1.0".to_string(), "right@2.0".to_string()]
    );
    assert_eq!(adjacency["left@1.0"], Vec::<String>::new());
}
