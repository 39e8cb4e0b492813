//! # fieldcast Projector
//!
//! Field projection for schema-defined records.
//!
//! Records arrive with their declared snake_case field names (usually from
//! a schema-driven decoder); public-facing JSON wants camelCase keys. This
//! crate owns that conversion as one pure transformation:
//!
//! ```text
//! bytes ──RecordDecoder──▶ Record ──project──▶ Projection ──serde_json──▶ text
//! ```
//!
//! Decoding the wire format and encoding JSON text both stay external;
//! the projector only renames keys and recurses into nested records and
//! lists. Scalar values pass through untouched.
//!
//! ## Usage
//!
//! ```rust
//! use fieldcast_projector::{project, Record};
//!
//! let attrs = Record::new()
//!     .with_field("job_id", "abc-123")
//!     .with_field("work_unit_type", "playbook");
//!
//! let projection = project(&attrs).unwrap();
//! assert_eq!(projection["workUnitType"], "playbook");
//! ```
//!
//! Typed messages go through the same path via [`project_message`], which
//! serializes the message and projects the result; no per-message key
//! mapping exists anywhere.

pub mod decode;
pub mod error;
pub mod naming;
pub mod project;
pub mod record;

pub use decode::{record_from_json, JsonDecoder, RecordDecoder};
pub use error::{DecodeError, ProjectError, Result};
pub use naming::{camel_case_key, validate_field_name};
pub use project::{project, project_message, Projection};
pub use record::{Field, FieldValue, Record};
