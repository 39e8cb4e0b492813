//! Automation controller (AWX) job template message types.

use serde::{Deserialize, Serialize};

/// A job template: the reusable definition a job is launched from.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct JobTemplate {
    /// Numeric template identifier.
    pub id: i32,
    /// Display name.
    pub name: String,
    /// Free-text description.
    pub description: String,
    /// Job kind, "run" or "check".
    pub job_type: String,
    /// Project the playbook comes from.
    pub project_id: i32,
    /// Inventory the job runs against.
    pub inventory_id: i32,
    /// Playbook path within the project.
    pub playbook: String,
    /// Owning organization.
    pub organization_id: i32,
    /// Status of the most recent job.
    pub status: String,
    /// Creation timestamp (RFC 3339 text).
    pub created: String,
    /// Last-modification timestamp (RFC 3339 text).
    pub modified: String,
    /// Ansible verbosity level (0-5).
    pub verbosity: i32,
    /// Fork count, 0 for the controller default.
    pub forks: i32,
    /// Job timeout in seconds, 0 for none.
    pub timeout: i32,
    /// Host pattern limiting the run.
    pub limit: String,
    /// Whether privilege escalation is enabled.
    pub become_enabled: bool,
    /// Whether to show file diffs during the run.
    pub diff_mode: bool,
}

/// Request to launch a job from a template.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LaunchJobTemplateRequest {
    /// Template to launch.
    pub id: i32,
    /// Host pattern override.
    pub limit: String,
    /// Extra variables as a JSON or YAML document.
    pub extra_vars: String,
    /// Comma-separated tags to run.
    pub tags: String,
    /// Comma-separated tags to skip.
    pub skip_tags: String,
}

/// A job created from a template launch.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Job {
    /// Numeric job identifier.
    pub id: i32,
    /// Name inherited from the template.
    pub name: String,
    /// Lifecycle status ("pending", "running", "successful", ...).
    pub status: String,
    /// Template the job was launched from.
    pub job_template_id: i32,
    /// Creation timestamp (RFC 3339 text).
    pub created: String,
    /// Start timestamp, empty until execution begins.
    pub started: String,
    /// Finish timestamp, empty until execution ends.
    pub finished: String,
    /// Relative URL of the job's stdout stream.
    pub stdout_url: String,
}

/// Request for a page of job templates.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ListJobTemplatesRequest {
    /// 1-based page number.
    pub page: i32,
    /// Number of results per page.
    pub page_size: i32,
    /// Free-text name filter.
    pub search: String,
    /// Restrict to one organization, 0 for all.
    pub organization_id: i32,
    /// Sort key, "-" prefix for descending (e.g. "-created").
    pub order_by: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_template_serializes_declared_names() {
        let template = JobTemplate {
            id: 7,
            job_type: "run".to_string(),
            become_enabled: false,
            ..Default::default()
        };

        let value = serde_json::to_value(&template).unwrap();
        let object = value.as_object().unwrap();

        assert!(object.contains_key("job_type"));
        assert!(object.contains_key("become_enabled"));
        assert!(object.contains_key("diff_mode"));
        assert_eq!(object.len(), 17);
    }

    #[test]
    fn test_pending_job_has_empty_run_timestamps() {
        let job = Job {
            id: 42,
            status: "pending".to_string(),
            job_template_id: 7,
            created: "2025-11-11T14:00:00Z".to_string(),
            ..Default::default()
        };

        assert!(job.started.is_empty());
        assert!(job.finished.is_empty());
    }
}
