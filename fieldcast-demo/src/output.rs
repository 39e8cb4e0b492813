//! Rendering helpers for projected output.

use anyhow::Result;
use fieldcast_projector::Projection;

use crate::config::Config;

/// Render a projection as JSON text per the output configuration.
pub fn render(config: &Config, projection: &Projection) -> Result<String> {
    let text = if config.output.pretty {
        serde_json::to_string_pretty(projection)?
    } else {
        serde_json::to_string(projection)?
    };

    Ok(text)
}
