use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::config::AppConfig;

/// cratemap CLI - crates.io dependency tree visualization
#[derive(Debug, Clone, Parser)]
#[command(name = "cratemap")]
#[command(about = "Visualize the transitive dependency tree of a crates.io package")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long, help = "Read options from this file before env and flags")]
    pub config: Option<PathBuf>,

    /// Global configuration options
    #[command(flatten)]
    pub options: AppConfig,

    /// cratemap commands
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Configuration loaded from all sources plus the selected command
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub app_config: AppConfig,
    pub command: Option<Commands>,
}

/// Available cratemap commands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Build the graph, report cycles, print the load order, render the diagram
    Run,

    /// Build the graph and print its DOT form only
    Export,

    /// Print the dependency-first load order only
    Order,

    /// Show version information
    Version,
}

impl Commands {
    /// Check if the command needs a package selected and validated
    pub fn requires_package(&self) -> bool {
        match self {
            Commands::Version => false,
            Commands::Run | Commands::Export | Commands::Order => true,
        }
    }
}

impl Default for Cli {
    fn default() -> Self {
        Self {
            config: None,
            options: AppConfig::default(),
            command: None,
        }
    }
}

#[cfg(test)]
mod tests {
    include!("cli.test.rs");
}
