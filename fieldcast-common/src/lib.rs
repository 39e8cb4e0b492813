//! # fieldcast Common
//!
//! Shared utilities for the fieldcast workspace.
//!
//! ## Logging
//!
//! Tracing initialization used by the binaries:
//!
//! ```rust,ignore
//! use fieldcast_common::init_logging;
//!
//! // Initialize with level
//! init_logging("info").unwrap();
//! ```

pub mod logging;

// Re-export logging functions
pub use logging::{init_logging, init_logging_json};
