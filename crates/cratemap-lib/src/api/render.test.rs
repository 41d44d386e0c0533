use super::*;
use crate::primitives::{DepKind, PackageRef};
use std::collections::BTreeMap;
use std::path::Path;

fn sample_graph() -> DependencyGraph {
    let mut mapping: BTreeMap<String, Vec<String>> = BTreeMap::new();
    mapping.insert(
        "root@1.0".to_string(),
        vec!["left@1.0".to_string(), "right@2.0".to_string()],
    );
    mapping.insert("left@1.0".to_string(), vec![]);
    mapping.insert("right@2.0".to_string(), vec![]);
    DependencyGraph::from_adjacency(&mapping)
}

#[test]
fn test_to_dot_shape() {
    let dot = to_dot(&sample_graph());

    assert!(dot.starts_with("digraph dependencies {\n"));
    assert!(dot.contains("    rankdir=LR;\n"));
    assert!(dot.contains("    \"root@1.0\" -> \"left@1.0\";\n"));
    assert!(dot.contains("    \"root@1.0\" -> \"right@2.0\";\n"));
    assert!(dot.ends_with("}\n"));
}

#[test]
fn test_to_dot_empty_graph() {
    let dot = to_dot(&DependencyGraph::new());
    assert_eq!(dot, "digraph dependencies {\n    rankdir=LR;\n}\n");
}

#[test]
fn test_to_dot_preserves_edge_order() {
    let mut graph = DependencyGraph::new();
    graph.add_edge(
        &PackageRef::new("z", "1"),
        &PackageRef::new("a", "1"),
        DepKind::Normal,
    );
    graph.add_edge(
        &PackageRef::new("a", "1"),
        &PackageRef::new("m", "1"),
        DepKind::Normal,
    );

    let dot = to_dot(&graph);
    let first = dot.find("\"z@1\" -> \"a@1\"").unwrap();
    let second = dot.find("\"a@1\" -> \"m@1\"").unwrap();
    assert!(first < second);
}

#[test]
fn test_render_png_failure_is_an_error_not_a_panic() {
    let dot = to_dot(&sample_graph());
    // Either graphviz is missing (spawn error) or it cannot write here
    // (non-zero exit); both must surface as RenderError.
    let result = render_png(&dot, Path::new("/nonexistent-cratemap-dir/out.png"));
    assert!(result.is_err());
}
