//! # fieldcast Schema
//!
//! Message type bindings for the services the projector is demonstrated
//! against: the gateway user API, the automation controller job template
//! API, the shared structured-log attribute set, and the OTLP log
//! envelope.
//!
//! Every struct keeps its declared snake_case field names and carries no
//! serde rename attributes. Display keys are the projector's job, so
//! the camelCase convention lives in exactly one place.

pub mod awx;
pub mod endpoints;
pub mod gateway;
pub mod otlp;
pub mod shared;

// Re-export for convenience
pub use awx::{Job, JobTemplate, LaunchJobTemplateRequest, ListJobTemplatesRequest};
pub use endpoints::{
    render_endpoint_table, EndpointRule, HttpMethod, GATEWAY_USER_ENDPOINTS,
    JOB_TEMPLATE_ENDPOINTS,
};
pub use gateway::{ListUsersRequest, ListUsersResponse, User};
pub use otlp::{
    log_attribute_key_values, AnyValue, KeyValue, LogRecord, LogsData, Resource, ResourceLogs,
    ScopeLogs, SeverityNumber,
};
pub use shared::LogAttributes;
