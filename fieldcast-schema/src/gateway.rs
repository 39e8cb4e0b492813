//! Gateway user API message types.

use serde::{Deserialize, Serialize};

/// A gateway user account.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct User {
    /// Numeric user identifier.
    pub id: i32,
    /// Login name.
    pub username: String,
    /// Contact email address.
    pub email: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Whether the account has superuser rights.
    pub is_superuser: bool,
    /// Creation timestamp (RFC 3339 text).
    pub created: String,
    /// Last-modification timestamp (RFC 3339 text).
    pub modified: String,
}

/// Request for a page of users.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ListUsersRequest {
    /// 1-based page number.
    pub page: i32,
    /// Number of results per page.
    pub page_size: i32,
    /// Free-text username filter.
    pub search: String,
}

/// A page of users.
///
/// Pagination fields echo what the caller asked for; there is no paging
/// logic behind them.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ListUsersResponse {
    /// Total number of matching users.
    pub count: i32,
    /// URL of the next page, empty when there is none.
    pub next: String,
    /// URL of the previous page, empty when there is none.
    pub previous: String,
    /// The users on this page.
    pub results: Vec<User>,
}
