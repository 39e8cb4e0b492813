//! Configuration management for the demo binary.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

use crate::cli::Args;

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Output rendering configuration
    pub output: OutputConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output: OutputConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(anyhow::anyhow!("Config file not found: {}", path.display()));
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = serde_yaml::from_str(&content)
            .with_context(|| "Failed to parse config file")?;

        Ok(config)
    }

    /// Apply CLI argument overrides to the configuration.
    pub fn with_cli_overrides(mut self, args: &Args) -> Self {
        if args.compact {
            self.output.pretty = false;
        }

        if args.no_endpoints {
            self.output.endpoint_tables = false;
        }

        self
    }

    /// Build a configuration from defaults plus CLI arguments.
    pub fn default_with_cli(args: &Args) -> Self {
        Self::default().with_cli_overrides(args)
    }
}

/// Output rendering configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Pretty-print projected JSON (multi-line, indented)
    pub pretty: bool,
    /// Print the REST endpoint mapping table before API scenarios
    pub endpoint_tables: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            pretty: true,
            endpoint_tables: true,
        }
    }
}
