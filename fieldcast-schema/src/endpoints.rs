//! Static REST endpoint descriptor tables.
//!
//! Each service's schema annotates its RPCs with HTTP bindings; the
//! tables here carry those bindings as plain data for display. Nothing
//! is routed or served, this is documentation output.

use std::fmt;

/// Width of the path column in the rendered table.
const PATH_COLUMN_WIDTH: usize = 40;

/// HTTP method of an endpoint binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    /// Read a resource.
    Get,
    /// Create a resource or trigger an action.
    Post,
    /// Replace a resource.
    Put,
    /// Remove a resource.
    Delete,
    /// Partially update a resource.
    Patch,
}

impl HttpMethod {
    /// Uppercase wire form of the method.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
            Self::Patch => "PATCH",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // pad() so the table renderer's column width applies
        f.pad(self.as_str())
    }
}

/// One RPC's HTTP binding.
#[derive(Debug, Clone, Copy)]
pub struct EndpointRule {
    /// Bound HTTP method.
    pub method: HttpMethod,
    /// Path template, `{id}`-style placeholders included.
    pub path: &'static str,
    /// Name of the RPC the binding maps to.
    pub rpc: &'static str,
}

/// HTTP bindings of the gateway user service.
pub const GATEWAY_USER_ENDPOINTS: [EndpointRule; 3] = [
    EndpointRule {
        method: HttpMethod::Get,
        path: "/api/gateway/v1/users/{id}",
        rpc: "GetUser",
    },
    EndpointRule {
        method: HttpMethod::Get,
        path: "/api/gateway/v1/users",
        rpc: "ListUsers",
    },
    EndpointRule {
        method: HttpMethod::Post,
        path: "/api/gateway/v1/users",
        rpc: "CreateUser",
    },
];

/// HTTP bindings of the job template service.
pub const JOB_TEMPLATE_ENDPOINTS: [EndpointRule; 3] = [
    EndpointRule {
        method: HttpMethod::Get,
        path: "/api/v2/job_templates/{id}",
        rpc: "GetJobTemplate",
    },
    EndpointRule {
        method: HttpMethod::Get,
        path: "/api/v2/job_templates",
        rpc: "ListJobTemplates",
    },
    EndpointRule {
        method: HttpMethod::Post,
        path: "/api/v2/job_templates/{id}/launch",
        rpc: "LaunchJobTemplate",
    },
];

/// Render an endpoint table as the human-readable mapping block.
///
/// One line per rule: padded method, path column aligned to a fixed
/// width, then the RPC name.
pub fn render_endpoint_table(rules: &[EndpointRule]) -> String {
    let mut out = String::from("=== REST Endpoint Mapping ===\n");
    out.push_str("These messages map to REST endpoints via google.api.http annotations:\n");

    for rule in rules {
        out.push_str(&format!(
            "  {:<6} {:<width$} → {}\n",
            rule.method,
            rule.path,
            rule.rpc,
            width = PATH_COLUMN_WIDTH
        ));
    }

    out
}
