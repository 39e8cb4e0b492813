//! OTLP log envelope message types.
//!
//! The subset of the OpenTelemetry logs data model needed to ship the
//! shared attribute set inside a `LogsData` envelope. Attribute keys are
//! data, not declared field names, and stay snake_case per OTLP
//! convention; only struct field names get camelCase display keys.

use serde::{Deserialize, Serialize};

use crate::shared::LogAttributes;

/// A single typed value, one member set at a time.
///
/// Serializes as an object keyed by the set member (`string_value`,
/// `bool_value`, `int_value`), the display form of the underlying
/// one-of.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnyValue {
    /// UTF-8 string member.
    StringValue(String),
    /// Boolean member.
    BoolValue(bool),
    /// Signed 64-bit integer member.
    IntValue(i64),
}

/// A named attribute attached to a log record or resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyValue {
    /// Attribute key (stays snake_case, it is data not a field name).
    pub key: String,
    /// Attribute value.
    pub value: AnyValue,
}

/// Log severity level.
///
/// One representative value per level; serialized by name
/// (`SEVERITY_NUMBER_INFO` and friends).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SeverityNumber {
    /// Severity not specified.
    SeverityNumberUnspecified,
    /// Trace-level detail.
    SeverityNumberTrace,
    /// Debug-level detail.
    SeverityNumberDebug,
    /// Routine information.
    SeverityNumberInfo,
    /// Something unexpected but recoverable.
    SeverityNumberWarn,
    /// An operation failed.
    SeverityNumberError,
    /// The emitting process cannot continue.
    SeverityNumberFatal,
}

impl Default for SeverityNumber {
    fn default() -> Self {
        Self::SeverityNumberUnspecified
    }
}

/// One log record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogRecord {
    /// Event time, nanoseconds since the Unix epoch.
    pub time_unix_nano: u64,
    /// Numeric severity.
    pub severity_number: SeverityNumber,
    /// Severity as text ("INFO", "ERROR", ...).
    pub severity_text: String,
    /// The log message body.
    pub body: AnyValue,
    /// Structured attributes attached to this record.
    pub attributes: Vec<KeyValue>,
}

/// Log records produced by one instrumentation scope.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ScopeLogs {
    /// The records in this scope.
    pub log_records: Vec<LogRecord>,
}

/// The entity producing telemetry.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Resource {
    /// Attributes describing the resource.
    pub attributes: Vec<KeyValue>,
}

/// Log records from one resource.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ResourceLogs {
    /// The producing resource.
    pub resource: Resource,
    /// Scoped log batches from this resource.
    pub scope_logs: Vec<ScopeLogs>,
}

/// The top-level logs envelope.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LogsData {
    /// All resource batches in this payload.
    pub resource_logs: Vec<ResourceLogs>,
}

/// Convert the shared attribute set into OTLP attribute pairs.
///
/// Every attribute becomes a string-valued `KeyValue`, in declaration
/// order.
pub fn log_attribute_key_values(attrs: &LogAttributes) -> Vec<KeyValue> {
    let string_pair = |key: &str, value: &str| KeyValue {
        key: key.to_string(),
        value: AnyValue::StringValue(value.to_string()),
    };

    vec![
        string_pair("job_id", &attrs.job_id),
        string_pair("work_unit_type", &attrs.work_unit_type),
        string_pair("org_id", &attrs.org_id),
        string_pair("controller_id", &attrs.controller_id),
        string_pair("username", &attrs.username),
    ]
}
