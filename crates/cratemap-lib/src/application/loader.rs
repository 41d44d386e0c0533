//! Configuration loading
//!
//! Coordinates the precedence layers into one effective configuration:
//! defaults -> config file -> .env -> environment variables -> CLI.

use crate::primitives::ConfigError;
use clap::Parser;
use std::path::PathBuf;

use super::{cli::Cli, cli::CliConfig, config::AppConfig, env::EnvironmentConfig};

/// Config file picked up from the working directory when present
const DEFAULT_CONFIG_FILE: &str = "cratemap.toml";

impl CliConfig {
    /// Load configuration from all sources
    pub fn load() -> Result<Self, ConfigError> {
        use dotenvy::from_filename;

        // .env files feed the environment before clap resolves env attrs
        let env_files = [".env.local", ".env"];
        for env_file in &env_files {
            if let Err(e) = from_filename(env_file) {
                // Only fail if the file exists but can't be read
                if !e.to_string().contains("not found") && !e.to_string().contains("No such file") {
                    return Err(ConfigError::EnvFileError {
                        file: env_file.to_string(),
                        source: e,
                    });
                }
            }
        }

        Self::assemble(Cli::parse())
    }

    /// Merge the precedence layers beneath an already-parsed CLI
    pub fn assemble(cli: Cli) -> Result<Self, ConfigError> {
        let mut config = AppConfig::default();

        let config_file = cli.config.clone().or_else(|| {
            let default = PathBuf::from(DEFAULT_CONFIG_FILE);
            default.exists().then_some(default)
        });
        if let Some(path) = config_file {
            config = config.merge_with(AppConfig::from_file(&path)?);
        }

        let env_config = EnvironmentConfig::load()?;
        config.color = env_config.apply_color_mode(config.color);

        // CLI flags (and their env fallbacks) win
        config = config.merge_with(cli.options);

        Ok(Self {
            app_config: config,
            command: cli.command,
        })
    }
}

#[cfg(test)]
mod tests {
    include!("loader.test.rs");
}
