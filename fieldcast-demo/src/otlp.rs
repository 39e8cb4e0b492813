//! OTLP envelope scenario.
//!
//! Wraps the shared attribute set in a full `LogsData` envelope and
//! projects the whole tree, nested records, lists and all.

use anyhow::Result;
use chrono::Utc;
use fieldcast_projector::project_message;
use fieldcast_schema::{
    log_attribute_key_values, AnyValue, LogRecord, LogsData, Resource, ResourceLogs, ScopeLogs,
    SeverityNumber,
};
use tracing::debug;

use crate::config::Config;
use crate::log_attributes::sample_attributes;
use crate::output;

fn now_unix_nanos() -> u64 {
    // timestamp_nanos_opt only fails for dates past the year 2262
    Utc::now()
        .timestamp_nanos_opt()
        .and_then(|nanos| u64::try_from(nanos).ok())
        .unwrap_or(0)
}

pub fn run(config: &Config) -> Result<()> {
    // The canonical attribute set, created once.
    let attrs = sample_attributes();

    // Wrap it into a log record.
    let record = LogRecord {
        time_unix_nano: now_unix_nanos(),
        severity_number: SeverityNumber::SeverityNumberInfo,
        severity_text: "INFO".to_string(),
        body: AnyValue::StringValue("controller started".to_string()),
        attributes: log_attribute_key_values(&attrs),
    };

    // Stitch together the full envelope.
    let data = LogsData {
        resource_logs: vec![ResourceLogs {
            resource: Resource::default(),
            scope_logs: vec![ScopeLogs {
                log_records: vec![record],
            }],
        }],
    };

    debug!(job_id = %attrs.job_id, "Projecting OTLP envelope");

    println!("=== Example: OTLP Logs Envelope ===");
    let projection = project_message(&data)?;
    println!("{}", output::render(config, &projection)?);

    Ok(())
}
