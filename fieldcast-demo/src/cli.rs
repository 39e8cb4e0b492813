//! Command-line argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// fieldcast Demo - Schema message projection showcase
#[derive(Parser, Debug)]
#[command(name = "fieldcast-demo")]
#[command(about = "fieldcast Demo - Projects schema messages to camelCase JSON")]
#[command(version)]
pub struct Args {
    /// Path to configuration file (optional, defaults used if not found)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    pub log_level: String,

    /// Log in JSON format (for log aggregation pipelines)
    #[arg(long)]
    pub log_json: bool,

    /// Print projections as single-line JSON
    #[arg(long)]
    pub compact: bool,

    /// Skip the REST endpoint mapping tables
    #[arg(long)]
    pub no_endpoints: bool,

    /// Scenario to run
    #[command(subcommand)]
    pub command: Command,
}

/// The demonstration scenarios.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Project the shared structured-log attribute set
    LogAttributes,
    /// Walk the gateway user API messages
    Gateway,
    /// Walk the job template API messages
    JobTemplates,
    /// Wrap the attribute set in an OTLP envelope and project it
    Otlp,
    /// Decode a JSON document from disk and project it
    Project {
        /// Path to the JSON document
        #[arg(short, long)]
        input: PathBuf,
    },
}
