//! Structured-log attribute scenario.
//!
//! Builds the shared attribute set once and prints its public-log form,
//! the projector's original use case.

use anyhow::Result;
use fieldcast_projector::project_message;
use fieldcast_schema::LogAttributes;
use tracing::debug;

use crate::config::Config;
use crate::output;

/// Sample attribute set attached to every controller log line.
pub fn sample_attributes() -> LogAttributes {
    LogAttributes {
        job_id: "abc-123".to_string(),
        work_unit_type: "playbook".to_string(),
        org_id: "redhat".to_string(),
        controller_id: "controller-01".to_string(),
        username: "arestle".to_string(),
    }
}

pub fn run(config: &Config) -> Result<()> {
    let attrs = sample_attributes();

    debug!(job_id = %attrs.job_id, "Projecting log attributes");

    println!("=== Example: Log Attributes ===");
    let projection = project_message(&attrs)?;
    println!("{}", output::render(config, &projection)?);

    Ok(())
}
