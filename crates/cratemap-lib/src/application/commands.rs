//! Command execution handlers
//!
//! Dispatches parsed commands onto the traversal, ordering, and rendering
//! pipeline. Handlers construct the live registry client; the pipeline
//! itself is generic over [`RegistryClient`] so tests drive it with mocks.

use crate::api::{
    DependencyGraph, GraphBuilder, LiveCratesIoClient, LoadOrderComputer, LoadOrderPolicy,
    RegistryClient, render_png, to_dot,
};
use crate::application::cli::{CliConfig, Commands};
use crate::application::config::AppConfig;
use crate::networking::{NetworkingConfig, NetworkingManager};
use crate::primitives::PackageRef;
use anyhow::{Context, Result, ensure};
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};

/// Everything one pipeline run produces besides the rendered file
pub struct GraphReport {
    /// DOT text of the discovered graph
    pub dot: String,
    /// Re-entered node keys, in detection order
    pub cycles: Vec<String>,
    /// Dependency-first node sequence
    pub load_order: Vec<String>,
}

/// Execute the selected CLI command
pub async fn execute_command(config: CliConfig) -> Result<()> {
    let command = config.command.clone().unwrap_or(Commands::Run);

    if command.requires_package() {
        config.app_config.validate()?;
        log_effective_config(&config.app_config);
    }

    match command {
        Commands::Version => {
            println!("cratemap {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Commands::Run => handle_run(&config.app_config).await,
        Commands::Export => handle_export(&config.app_config).await,
        Commands::Order => handle_order(&config.app_config).await,
    }
}

fn log_effective_config(config: &AppConfig) {
    info!(
        package = %config.package_name,
        version = %config.version,
        max_depth = config.max_depth,
        filter = %config.filter_substring,
        registry = %config.registry_url,
        test_mode = config.test_mode,
        output = %config.output_file.display(),
        "effective configuration"
    );
}

async fn handle_run(config: &AppConfig) -> Result<()> {
    if config.test_mode {
        let graph = load_fixture_graph(&config.test_graph_path)?;
        let dot = to_dot(&graph);
        print!("{dot}");
        render_or_warn(&dot, &config.output_file);
        return Ok(());
    }

    let client = live_client(config)?;
    let report = run_pipeline(config, &client).await;

    print!("{}", report.dot);
    if !report.cycles.is_empty() {
        println!("Cycles detected at: {}", report.cycles.join(", "));
    }
    println!("Load order:");
    for key in &report.load_order {
        println!("  {key}");
    }

    render_or_warn(&report.dot, &config.output_file);
    Ok(())
}

async fn handle_export(config: &AppConfig) -> Result<()> {
    let dot = if config.test_mode {
        to_dot(&load_fixture_graph(&config.test_graph_path)?)
    } else {
        let client = live_client(config)?;
        let outcome = graph_builder(config)
            .build(&client, root_package(config))
            .await;
        to_dot(&outcome.graph)
    };

    print!("{dot}");
    Ok(())
}

async fn handle_order(config: &AppConfig) -> Result<()> {
    ensure!(
        !config.test_mode,
        "load order needs registry traversal; disable test_mode"
    );

    let client = live_client(config)?;
    let order = order_computer(config)
        .order(&client, root_package(config))
        .await;

    for key in order {
        println!("{key}");
    }
    Ok(())
}

/// Run both traversals and produce the report for one root
///
/// The graph walk and the order walk are independent by design: the
/// order walk only honors the depth bound and filter when the config
/// asks for it.
pub async fn run_pipeline<C: RegistryClient>(config: &AppConfig, client: &C) -> GraphReport {
    let root = root_package(config);

    let outcome = graph_builder(config).build(client, root.clone()).await;
    let load_order = order_computer(config).order(client, root).await;

    GraphReport {
        dot: to_dot(&outcome.graph),
        cycles: outcome.cycles,
        load_order,
    }
}

fn root_package(config: &AppConfig) -> PackageRef {
    PackageRef::new(config.package_name.clone(), config.version.clone())
}

fn graph_builder(config: &AppConfig) -> GraphBuilder {
    GraphBuilder::new(config.max_depth).with_filter(&config.filter_substring)
}

fn order_computer(config: &AppConfig) -> LoadOrderComputer {
    if config.order_bounded {
        LoadOrderComputer::with_policy(LoadOrderPolicy::bounded(
            config.max_depth,
            &config.filter_substring,
        ))
    } else {
        LoadOrderComputer::new()
    }
}

fn live_client(config: &AppConfig) -> Result<LiveCratesIoClient> {
    let networking = NetworkingManager::new(NetworkingConfig {
        timeout_seconds: config.net_timeout,
        ..NetworkingConfig::default()
    })
    .context("building HTTP client")?;

    Ok(LiveCratesIoClient::with_base_url(
        Arc::new(networking),
        config.registry_url.clone(),
    ))
}

/// Load the static graph mapping used in test mode
fn load_fixture_graph(path: &Path) -> Result<DependencyGraph> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading fixture graph {}", path.display()))?;
    let mapping: BTreeMap<String, Vec<String>> = serde_json::from_str(&raw)
        .with_context(|| format!("parsing fixture graph {}", path.display()))?;

    Ok(DependencyGraph::from_adjacency(&mapping))
}

fn render_or_warn(dot: &str, output: &Path) {
    match render_png(dot, output) {
        Ok(()) => info!(output = %output.display(), "diagram rendered"),
        Err(err) => {
            warn!(error = %err, "diagram rendering failed; the textual graph above is complete");
        }
    }
}

#[cfg(test)]
mod tests {
    include!("commands.test.rs");
}
