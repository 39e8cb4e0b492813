//! Gateway user API scenario.
//!
//! Walks the user messages end to end: the endpoint table, a single
//! `User`, a list request, and a paginated response, each printed in its
//! projected display form.

use anyhow::Result;
use fieldcast_projector::project_message;
use fieldcast_schema::{
    render_endpoint_table, ListUsersRequest, ListUsersResponse, User, GATEWAY_USER_ENDPOINTS,
};
use tracing::debug;

use crate::config::Config;
use crate::output;

fn sample_user() -> User {
    User {
        id: 1,
        username: "alice".to_string(),
        email: "alice@example.com".to_string(),
        first_name: "Alice".to_string(),
        last_name: "Smith".to_string(),
        is_superuser: false,
        created: "2025-10-29T10:00:00Z".to_string(),
        modified: "2025-10-29T10:00:00Z".to_string(),
    }
}

pub fn run(config: &Config) -> Result<()> {
    if config.output.endpoint_tables {
        print!("{}", render_endpoint_table(&GATEWAY_USER_ENDPOINTS));
        println!();
    }

    let user = sample_user();

    debug!(username = %user.username, "Projecting gateway user messages");

    println!("=== Example: User Message ===");
    let projection = project_message(&user)?;
    println!("{}", output::render(config, &projection)?);

    let list_request = ListUsersRequest {
        page: 1,
        page_size: 25,
        search: "alice".to_string(),
    };

    println!("\n=== Example: ListUsers Request ===");
    let projection = project_message(&list_request)?;
    println!("{}", output::render(config, &projection)?);

    let list_response = ListUsersResponse {
        count: 1,
        next: String::new(),
        previous: String::new(),
        results: vec![user.clone()],
    };

    println!("\n=== Example: ListUsers Response ===");
    let projection = project_message(&list_response)?;
    println!("{}", output::render(config, &projection)?);

    // The typed message is still the source of truth; the projection is
    // display only.
    println!("\n=== Type Safety Demo ===");
    println!("User ID: {} (type: i32)", user.id);
    println!("Username: {} (type: String)", user.username);
    println!("Is Superuser: {} (type: bool)", user.is_superuser);

    Ok(())
}
