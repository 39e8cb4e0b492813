//! Job template API scenario.
//!
//! Walks the automation controller messages: a job template, a launch
//! request, the pending job the launch creates, and a list request.

use anyhow::Result;
use fieldcast_projector::project_message;
use fieldcast_schema::{
    render_endpoint_table, Job, JobTemplate, LaunchJobTemplateRequest, ListJobTemplatesRequest,
    JOB_TEMPLATE_ENDPOINTS,
};
use tracing::debug;

use crate::config::Config;
use crate::output;

fn sample_job_template() -> JobTemplate {
    JobTemplate {
        id: 7,
        name: "Deploy Web Servers".to_string(),
        description: "Deploys Apache web servers to production".to_string(),
        job_type: "run".to_string(),
        project_id: 5,
        inventory_id: 3,
        playbook: "site.yml".to_string(),
        organization_id: 1,
        status: "successful".to_string(),
        created: "2025-01-15T10:00:00Z".to_string(),
        modified: "2025-10-29T14:30:00Z".to_string(),
        verbosity: 0,
        forks: 0,
        timeout: 0,
        limit: "webservers".to_string(),
        become_enabled: false,
        diff_mode: false,
    }
}

fn sample_job() -> Job {
    Job {
        id: 42,
        name: "Deploy Web Servers".to_string(),
        status: "pending".to_string(),
        job_template_id: 7,
        created: "2025-11-11T14:00:00Z".to_string(),
        started: String::new(),
        finished: String::new(),
        stdout_url: "/api/v2/jobs/42/stdout/".to_string(),
    }
}

pub fn run(config: &Config) -> Result<()> {
    if config.output.endpoint_tables {
        print!("{}", render_endpoint_table(&JOB_TEMPLATE_ENDPOINTS));
        println!();
    }

    let job_template = sample_job_template();

    debug!(id = job_template.id, "Projecting job template messages");

    println!("=== Example: Job Template ===");
    let projection = project_message(&job_template)?;
    println!("{}", output::render(config, &projection)?);

    let launch_request = LaunchJobTemplateRequest {
        id: 7,
        limit: "webservers:&production".to_string(),
        extra_vars: r#"{"env": "production", "debug": false}"#.to_string(),
        tags: "deploy,configure".to_string(),
        skip_tags: "backup".to_string(),
    };

    println!("\n=== Example: Launch Job Template Request ===");
    let projection = project_message(&launch_request)?;
    println!("{}", output::render(config, &projection)?);

    let job = sample_job();

    println!("\n=== Example: Created Job (Pending Execution) ===");
    let projection = project_message(&job)?;
    println!("{}", output::render(config, &projection)?);

    let list_request = ListJobTemplatesRequest {
        page: 1,
        page_size: 25,
        search: "web".to_string(),
        organization_id: 1,
        order_by: "-created".to_string(),
    };

    println!("\n=== Example: List Job Templates Request ===");
    let projection = project_message(&list_request)?;
    println!("{}", output::render(config, &projection)?);

    println!("\n=== Type Safety Demo ===");
    println!("Job Template ID: {} (type: i32)", job_template.id);
    println!("Playbook: {} (type: String)", job_template.playbook);
    println!("Job Status: {} (type: String)", job.status);
    println!("Launch will create job ID: {}", job.id);

    Ok(())
}
