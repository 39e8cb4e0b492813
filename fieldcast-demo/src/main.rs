//! # fieldcast Demo
//!
//! Walks the schema message catalog through the projector and prints the
//! public-facing JSON form of each message. Every scenario follows the
//! same pipeline: build a typed message, project it to camelCase display
//! keys, render the result as JSON text.
//!
//! ## Scenarios
//! - Shared structured-log attribute set
//! - Gateway user API messages plus their REST endpoint table
//! - Job template API messages plus their REST endpoint table
//! - OTLP logs envelope wrapping the attribute set
//! - Arbitrary JSON documents decoded from disk
//!
//! ## Usage
//! ```bash
//! fieldcast-demo gateway
//! fieldcast-demo --compact project --input record.json
//! ```

use anyhow::Result;
use clap::Parser;
use tracing::{error, info};

mod cli;
mod config;
mod gateway;
mod job_templates;
mod log_attributes;
mod otlp;
mod output;
mod project_file;

use cli::{Args, Command};
use config::Config;

fn main() -> Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Initialize logging
    if args.log_json {
        fieldcast_common::init_logging_json(&args.log_level)?;
    } else {
        fieldcast_common::init_logging(&args.log_level)?;
    }

    info!(
        version = env!("CARGO_PKG_VERSION"),
        "Starting fieldcast demo"
    );

    // Load configuration
    let config = match &args.config {
        Some(config_path) => {
            // Explicit config file provided
            match Config::load(config_path) {
                Ok(cfg) => {
                    info!(config_path = %config_path, "Configuration loaded");
                    cfg.with_cli_overrides(&args)
                }
                Err(e) => {
                    error!(error = %e, path = %config_path, "Failed to load configuration");
                    return Err(e);
                }
            }
        }
        None => {
            info!("No config file specified, using CLI arguments and defaults");
            Config::default_with_cli(&args)
        }
    };

    match &args.command {
        Command::LogAttributes => log_attributes::run(&config),
        Command::Gateway => gateway::run(&config),
        Command::JobTemplates => job_templates::run(&config),
        Command::Otlp => otlp::run(&config),
        Command::Project { input } => project_file::run(&config, input),
    }
}
