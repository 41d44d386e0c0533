//! # cratemap Library
//!
//! crates.io dependency tree resolution and visualization.
//!
//! ## Core Modules
//!
//! - [`primitives`] - Foundation types, errors, and package identity
//! - [`logger`] - Structured logging setup
//! - [`networking`] - HTTP client with caching and rate-limit handling
//! - [`api`] - Registry access, graph traversal, ordering, and rendering
//! - [`application`] - CLI interface and configuration management
//!
//! The resolver is deliberately approximate: version requirements are
//! collapsed to single tokens instead of being solved, so output can
//! diverge from cargo's own resolution. See the crate README for the
//! documented limitations.

pub mod api;
pub mod application;
pub mod logger;
pub mod networking;
pub mod primitives;

// Re-export commonly used types for convenience
pub use api::{DependencyGraph, GraphBuilder, LoadOrderComputer, RegistryClient};
pub use application::{AppConfig, Cli, CliConfig, Commands, execute_command};
pub use logger::Logger;
pub use networking::{NetworkingConfig, NetworkingManager};
pub use primitives::{ConfigError, DepKind, LogFormat, LogLevel, LogOutput, LoggerError, PackageRef};

use anyhow::Result;

pub async fn main() -> Result<()> {
    // Load configuration from all sources
    let config = CliConfig::load()?;

    // Initialize structured logging before anything can emit diagnostics
    Logger::init(config.app_config.to_logger_config())?;

    // Execute the command
    execute_command(config).await
}
