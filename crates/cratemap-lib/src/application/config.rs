//! Application configuration management
//!
//! Handles config defaults, validation, and merging following the
//! precedence: defaults -> config file -> .env -> env vars -> CLI args.

use crate::primitives::*;
use clap::Parser;
use serde::Deserialize;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};

/// Default configuration values
pub mod defaults {
    pub const MAX_DEPTH: &str = "3";
    pub const REGISTRY_URL: &str = "https://crates.io/api/v1";
    pub const TEST_GRAPH_PATH: &str = "test_graph.json";
    pub const OUTPUT_FILE: &str = "graph.png";
    pub const NET_TIMEOUT: &str = "30";
    pub const LOG_LEVEL: &str = "2"; // Info: the run narrates itself by default
    pub const LOG_FORMAT: &str = "text";
    pub const LOG_OUTPUT: &str = "stderr";
    pub const COLOR: &str = "auto";
}

/// Default value functions for configuration fields
mod default_fns {
    use super::defaults;
    use crate::primitives::{ColorMode, LogFormat, LogOutput};
    use std::path::PathBuf;

    pub fn max_depth() -> u32 {
        defaults::MAX_DEPTH.parse().unwrap()
    }

    pub fn registry_url() -> String {
        defaults::REGISTRY_URL.to_string()
    }

    pub fn test_graph_path() -> PathBuf {
        PathBuf::from(defaults::TEST_GRAPH_PATH)
    }

    pub fn output_file() -> PathBuf {
        PathBuf::from(defaults::OUTPUT_FILE)
    }

    pub fn net_timeout() -> u64 {
        defaults::NET_TIMEOUT.parse().unwrap()
    }

    pub fn log_level() -> u8 {
        defaults::LOG_LEVEL.parse().unwrap()
    }

    pub fn log_format() -> LogFormat {
        defaults::LOG_FORMAT.parse().unwrap()
    }

    pub fn log_output() -> LogOutput {
        defaults::LOG_OUTPUT.parse().unwrap()
    }

    pub fn color() -> ColorMode {
        defaults::COLOR.parse().unwrap()
    }
}

/// Application configuration structure
#[derive(Debug, Clone, Parser, Deserialize)]
pub struct AppConfig {
    /// Package whose dependency tree should be resolved
    #[arg(short, long, env = "CRATEMAP_PACKAGE_NAME", default_value = "")]
    #[serde(default)]
    pub package_name: String,

    /// Concrete version of the package
    #[arg(id = "package_version", long = "package-version", env = "CRATEMAP_VERSION", default_value = "")]
    #[serde(default)]
    pub version: String,

    /// Maximum traversal depth below the root
    #[arg(short = 'd', long, env = "CRATEMAP_MAX_DEPTH", default_value = defaults::MAX_DEPTH)]
    #[serde(default = "default_fns::max_depth")]
    pub max_depth: u32,

    /// Skip expanding packages whose name contains this substring (case-insensitive)
    #[arg(short, long, env = "CRATEMAP_FILTER_SUBSTRING", default_value = "")]
    #[serde(default)]
    pub filter_substring: String,

    /// Registry API base URL
    #[arg(long, env = "CRATEMAP_REGISTRY_URL", default_value = defaults::REGISTRY_URL)]
    #[serde(default = "default_fns::registry_url")]
    pub registry_url: String,

    /// Bypass traversal and load a static graph mapping from a JSON file
    #[arg(long, env = "CRATEMAP_TEST_MODE")]
    #[serde(default)]
    pub test_mode: bool,

    /// Path of the static graph mapping used in test mode
    #[arg(long, env = "CRATEMAP_TEST_GRAPH_PATH", default_value = defaults::TEST_GRAPH_PATH)]
    #[serde(default = "default_fns::test_graph_path")]
    pub test_graph_path: PathBuf,

    /// Path of the rendered diagram
    #[arg(short, long, env = "CRATEMAP_OUTPUT_FILE", default_value = defaults::OUTPUT_FILE)]
    #[serde(default = "default_fns::output_file")]
    pub output_file: PathBuf,

    /// Apply the depth bound and filter to the load order as well
    #[arg(long, env = "CRATEMAP_ORDER_BOUNDED")]
    #[serde(default)]
    pub order_bounded: bool,

    /// Registry request timeout in seconds
    #[arg(short = 't', long, env = "CRATEMAP_NET_TIMEOUT", default_value = defaults::NET_TIMEOUT)]
    #[serde(default = "default_fns::net_timeout")]
    pub net_timeout: u64,

    /// Verbosity level (0=error, 1=warn, 2=info, 3=debug, 4=trace)
    #[arg(long, env = "CRATEMAP_LOG_LEVEL", default_value = defaults::LOG_LEVEL)]
    #[serde(default = "default_fns::log_level")]
    pub log_level: u8,

    /// Log format (text, json)
    #[arg(long, env = "CRATEMAP_LOG_FORMAT", default_value = defaults::LOG_FORMAT)]
    #[serde(default = "default_fns::log_format")]
    pub log_format: LogFormat,

    /// Log output stream (stderr, stdout)
    #[arg(long, env = "CRATEMAP_LOG_OUTPUT", default_value = defaults::LOG_OUTPUT)]
    #[serde(default = "default_fns::log_output")]
    pub log_output: LogOutput,

    /// Color output control (auto, always, never)
    #[arg(long, env = "CRATEMAP_COLOR", default_value = defaults::COLOR)]
    #[serde(default = "default_fns::color")]
    pub color: ColorMode,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            package_name: String::new(),
            version: String::new(),
            max_depth: default_fns::max_depth(),
            filter_substring: String::new(),
            registry_url: default_fns::registry_url(),
            test_mode: false,
            test_graph_path: default_fns::test_graph_path(),
            output_file: default_fns::output_file(),
            order_bounded: false,
            net_timeout: default_fns::net_timeout(),
            log_level: default_fns::log_level(),
            log_format: default_fns::log_format(),
            log_output: default_fns::log_output(),
            color: default_fns::color(),
        }
    }
}

impl AppConfig {
    /// Read configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::ConfigFileError {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&raw).map_err(|e| ConfigError::ConfigFileParseError {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Merge this config with another, taking non-default values from other
    pub fn merge_with(mut self, other: Self) -> Self {
        if !other.package_name.is_empty() {
            self.package_name = other.package_name;
        }
        if !other.version.is_empty() {
            self.version = other.version;
        }
        if !other.filter_substring.is_empty() {
            self.filter_substring = other.filter_substring;
        }

        if other.max_depth != default_fns::max_depth() {
            self.max_depth = other.max_depth;
        }
        if other.registry_url != default_fns::registry_url() {
            self.registry_url = other.registry_url;
        }
        if other.test_graph_path != default_fns::test_graph_path() {
            self.test_graph_path = other.test_graph_path;
        }
        if other.output_file != default_fns::output_file() {
            self.output_file = other.output_file;
        }
        if other.net_timeout != default_fns::net_timeout() {
            self.net_timeout = other.net_timeout;
        }
        if other.log_level != default_fns::log_level() {
            self.log_level = other.log_level;
        }

        // Flags only ever merge towards enabled
        if other.test_mode {
            self.test_mode = true;
        }
        if other.order_bounded {
            self.order_bounded = true;
        }

        // For enums, detect if it's non-default
        if !matches!(other.log_format, LogFormat::Text) {
            self.log_format = other.log_format;
        }
        if !matches!(other.log_output, LogOutput::Stderr) {
            self.log_output = other.log_output;
        }
        if !matches!(other.color, ColorMode::Auto) {
            self.color = other.color;
        }

        self
    }

    /// Validate the configuration for commands that run a traversal
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.package_name.trim().is_empty() {
            return Err(ConfigError::ValidationFailed {
                reason: "package_name is required".to_string(),
            });
        }
        if self.version.trim().is_empty() {
            return Err(ConfigError::ValidationFailed {
                reason: "version is required".to_string(),
            });
        }

        Ok(())
    }

    /// Derive LoggerConfig, resolving auto color against the output stream
    pub fn to_logger_config(&self) -> LoggerConfig {
        let ansi = match self.color {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => match self.log_output {
                LogOutput::Stderr => std::io::stderr().is_terminal(),
                LogOutput::Stdout => std::io::stdout().is_terminal(),
            },
        };

        LoggerConfig {
            level: LogLevel::from_verbosity(self.log_level),
            format: self.log_format,
            output: self.log_output,
            ansi,
        }
    }
}

#[cfg(test)]
mod tests {
    include!("config.test.rs");
}
