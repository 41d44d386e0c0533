use super::*;
use crate::api::{MockRegistryClient, RegistryDependency};
use std::io::Write;

fn dep(name: &str, req: &str) -> RegistryDependency {
    RegistryDependency::new(name, req)
}

fn demo_config() -> AppConfig {
    AppConfig {
        package_name: "root".to_string(),
        version: "1.0".to_string(),
        max_depth: 2,
        ..AppConfig::default()
    }
}

fn demo_client() -> MockRegistryClient {
    MockRegistryClient::new()
        .with_dependencies(
            "root",
            "1.0",
            vec![dep("left", "1.0"), dep("right", "^2.0")],
        )
        .with_dependencies("left", "1.0", vec![])
        .with_dependencies("right", "2.0", vec![])
}

#[tokio::test]
async fn test_run_pipeline_produces_full_report() {
    let report = run_pipeline(&demo_config(), &demo_client()).await;

    assert!(report.dot.contains("\"root@1.0\" -> \"left@1.0\";"));
    assert!(report.dot.contains("\"root@1.0\" -> \"right@2.0\";"));
    assert!(report.cycles.is_empty());
    assert_eq!(
        report.load_order,
        vec![
            "left@1.0".to_string(),
            "right@2.0".to_string(),
            "root@1.0".to_string(),
        ]
    );
}

#[tokio::test]
async fn test_run_pipeline_reports_cycles() {
    let client = MockRegistryClient::new()
        .with_dependencies("root", "1.0", vec![dep("root", "1.0")]);

    let report = run_pipeline(&demo_config(), &client).await;
    assert_eq!(report.cycles, vec!["root@1.0".to_string()]);
}

#[tokio::test]
async fn test_run_pipeline_order_ignores_filter_by_default() {
    let config = AppConfig {
        filter_substring: "left".to_string(),
        ..demo_config()
    };

    let report = run_pipeline(&config, &demo_client()).await;

    // Filtered out of the graph view but present in the order
    assert!(!report.dot.contains("\"left@1.0\" ->"));
    assert!(report.load_order.contains(&"left@1.0".to_string()));
}

#[tokio::test]
async fn test_run_pipeline_bounded_order_applies_filter() {
    let config = AppConfig {
        filter_substring: "left".to_string(),
        order_bounded: true,
        ..demo_config()
    };

    let report = run_pipeline(&config, &demo_client()).await;
    assert!(!report.load_order.contains(&"left@1.0".to_string()));
}

#[test]
fn test_load_fixture_graph() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{"root@1.0": ["left@1.0", "right@2.0"], "left@1.0": [], "right@2.0": []}}"#
    )
    .unwrap();

    let graph = load_fixture_graph(file.path()).unwrap();

    let adjacency = graph.adjacency();
    assert_eq!(adjacency.len(), 3);
    assert_eq!(
        adjacency["root@1.0"],
        vec!["left@1.0".to_string(), "right@2.0".to_string()]
    );
}

#[test]
fn test_load_fixture_graph_rejects_malformed_json() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{{not json").unwrap();

    assert!(load_fixture_graph(file.path()).is_err());
}

#[test]
fn test_load_fixture_graph_missing_file() {
    assert!(load_fixture_graph(Path::new("/nonexistent/fixture.json")).is_err());
}

#[tokio::test]
async fn test_execute_version_needs_no_package() {
    let config = CliConfig {
        app_config: AppConfig::default(),
        command: Some(Commands::Version),
    };

    assert!(execute_command(config).await.is_ok());
}

#[tokio::test]
async fn test_execute_run_rejects_incomplete_config() {
    let config = CliConfig {
        app_config: AppConfig::default(),
        command: Some(Commands::Run),
    };

    let err = execute_command(config).await.unwrap_err();
    assert!(err.to_string().contains("package_name"));
}

#[tokio::test]
async fn test_execute_order_rejects_test_mode() {
    let config = CliConfig {
        app_config: AppConfig {
            test_mode: true,
            ..demo_config()
        },
        command: Some(Commands::Order),
    };

    let err = execute_command(config).await.unwrap_err();
    assert!(err.to_string().contains("test_mode"));
}
