use super::*;
use crate::api::crates_io::{MockRegistryClient, RegistryDependency};

fn dep(name: &str, req: &str) -> RegistryDependency {
    RegistryDependency::new(name, req)
}

fn position(order: &[String], key: &str) -> usize {
    order
        .iter()
        .position(|k| k == key)
        .unwrap_or_else(|| panic!("{key} missing from {order:?}"))
}

#[tokio::test]
async fn test_root_with_two_leaves_root_last() {
    let client = MockRegistryClient::new()
        .with_dependencies(
            "root",
            "1.0",
            vec![dep("left", "1.0"), dep("right", "^2.0")],
        )
        .with_dependencies("left", "1.0", vec![])
        .with_dependencies("right", "2.0", vec![]);

    let order = LoadOrderComputer::new()
        .order(&client, PackageRef::new("root", "1.0"))
        .await;

    assert_eq!(
        order,
        vec![
            "left@1.0".to_string(),
            "right@2.0".to_string(),
            "root@1.0".to_string(),
        ]
    );
}

#[tokio::test]
async fn test_dependencies_precede_dependents_on_diamond() {
    let client = MockRegistryClient::new()
        .with_dependencies("a", "1", vec![dep("b", "1"), dep("c", "1")])
        .with_dependencies("b", "1", vec![dep("d", "1")])
        .with_dependencies("c", "1", vec![dep("d", "1")])
        .with_dependencies("d", "1", vec![]);

    let order = LoadOrderComputer::new()
        .order(&client, PackageRef::new("a", "1"))
        .await;

    assert_eq!(order.len(), 4);
    for (parent, child) in [("a", "b"), ("a", "c"), ("b", "d"), ("c", "d")] {
        assert!(
            position(&order, &format!("{child}@1")) < position(&order, &format!("{parent}@1")),
            "{child} must precede {parent} in {order:?}"
        );
    }
}

#[tokio::test]
async fn test_cycle_terminates_with_best_effort_order() {
    let client = MockRegistryClient::new()
        .with_dependencies("A", "1", vec![dep("B", "1")])
        .with_dependencies("B", "1", vec![dep("A", "1")]);

    let order = LoadOrderComputer::new()
        .order(&client, PackageRef::new("A", "1"))
        .await;

    // Inside a cycle the dependency-first guarantee cannot hold; the walk
    // still terminates and emits each node once.
    assert_eq!(order, vec!["B@1".to_string(), "A@1".to_string()]);
}

#[tokio::test]
async fn test_unbounded_by_default() {
    let client = MockRegistryClient::new()
        .with_dependencies("root", "1.0", vec![dep("c1", "1.0")])
        .with_dependencies("c1", "1.0", vec![dep("c2", "1.0")])
        .with_dependencies("c2", "1.0", vec![dep("c3", "1.0")])
        .with_dependencies("c3", "1.0", vec![]);

    let order = LoadOrderComputer::new()
        .order(&client, PackageRef::new("root", "1.0"))
        .await;

    assert_eq!(order.len(), 4);
    assert_eq!(order.last().unwrap(), "root@1.0");
    assert_eq!(order.first().unwrap(), "c3@1.0");
}

#[tokio::test]
async fn test_filtered_package_still_appears_by_default() {
    // The graph view may exclude a package that the load order includes;
    // the two walks are independent on purpose.
    let client = MockRegistryClient::new()
        .with_dependencies("root", "1.0", vec![dep("Bar", "1.0")])
        .with_dependencies("Bar", "1.0", vec![]);

    let order = LoadOrderComputer::new()
        .order(&client, PackageRef::new("root", "1.0"))
        .await;

    assert_eq!(order, vec!["Bar@1.0".to_string(), "root@1.0".to_string()]);
}

#[tokio::test]
async fn test_bounded_policy_applies_depth() {
    let client = MockRegistryClient::new()
        .with_dependencies("root", "1.0", vec![dep("c1", "1.0")])
        .with_dependencies("c1", "1.0", vec![dep("c2", "1.0")])
        .with_dependencies("c2", "1.0", vec![]);

    let order = LoadOrderComputer::with_policy(LoadOrderPolicy::bounded(0, ""))
        .order(&client, PackageRef::new("root", "1.0"))
        .await;

    assert_eq!(order, vec!["root@1.0".to_string()]);
}

#[tokio::test]
async fn test_bounded_policy_applies_filter() {
    let client = MockRegistryClient::new()
        .with_dependencies("root", "1.0", vec![dep("Bar", "1.0"), dep("ok", "1.0")])
        .with_dependencies("Bar", "1.0", vec![])
        .with_dependencies("ok", "1.0", vec![]);

    let order = LoadOrderComputer::with_policy(LoadOrderPolicy::bounded(3, "bar"))
        .order(&client, PackageRef::new("root", "1.0"))
        .await;

    assert_eq!(order, vec!["ok@1.0".to_string(), "root@1.0".to_string()]);
}

#[tokio::test]
async fn test_duplicate_sibling_emitted_once() {
    let client = MockRegistryClient::new()
        .with_dependencies("root", "1.0", vec![dep("dup", "1.0"), dep("dup", "1.0")])
        .with_dependencies("dup", "1.0", vec![]);

    let order = LoadOrderComputer::new()
        .order(&client, PackageRef::new("root", "1.0"))
        .await;

    assert_eq!(order, vec!["dup@1.0".to_string(), "root@1.0".to_string()]);
}
