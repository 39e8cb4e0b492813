//! Shared message types used across services.

use serde::{Deserialize, Serialize};

/// The canonical structured-log attribute set.
///
/// Every work unit carries these attributes so logs can be correlated
/// across the controller fleet. Field names are the declared schema
/// names; camelCase display keys come from the projector.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LogAttributes {
    /// Identifier of the job emitting the log line.
    pub job_id: String,
    /// Kind of work unit (e.g. "playbook").
    pub work_unit_type: String,
    /// Organization the work unit belongs to.
    pub org_id: String,
    /// Controller instance that scheduled the work.
    pub controller_id: String,
    /// User the work unit runs as.
    pub username: String,
}
