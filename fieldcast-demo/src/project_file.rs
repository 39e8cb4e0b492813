//! Project an arbitrary JSON document from disk.
//!
//! Exercises the decode boundary: bytes go through the `JsonDecoder`
//! into a `Record`, then through the projector like any typed message.

use anyhow::{Context, Result};
use fieldcast_projector::{project, JsonDecoder, RecordDecoder};
use std::path::Path;
use tracing::info;

use crate::config::Config;
use crate::output;

pub fn run(config: &Config, input: &Path) -> Result<()> {
    let bytes = std::fs::read(input)
        .with_context(|| format!("Failed to read input file: {}", input.display()))?;

    let record = JsonDecoder::new()
        .decode(&bytes)
        .with_context(|| format!("Failed to decode record from {}", input.display()))?;

    info!(fields = record.len(), "Record decoded");

    let projection = project(&record)?;
    println!("{}", output::render(config, &projection)?);

    Ok(())
}
