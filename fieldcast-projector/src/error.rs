//! Error types for the field projection library.

use thiserror::Error;

/// Errors reported by the record decode boundary.
///
/// Implementations of [`crate::decode::RecordDecoder`] fail with this type
/// when their input cannot be mapped onto the record model.
#[derive(Error, Debug)]
pub enum DecodeError {
    /// Input is not syntactically valid for the decoder's format.
    #[error("Malformed input: {0}")]
    Malformed(#[from] serde_json::Error),

    /// The top-level decoded value is not a record.
    #[error("Top-level value is not a record, got {0}")]
    NotARecord(String),

    /// A value has no representation in the record model.
    #[error("Field `{field}` has unsupported value: {detail}")]
    UnsupportedValue {
        /// Name of the field carrying the value.
        field: String,
        /// What made the value unrepresentable.
        detail: String,
    },
}

/// Errors that can occur during field projection.
#[derive(Error, Debug)]
pub enum ProjectError {
    /// A field name does not follow the snake_case declaration rules.
    #[error("Invalid field name `{name}`: {reason}")]
    InvalidFieldName {
        /// The offending declared name.
        name: String,
        /// Which rule the name breaks.
        reason: String,
    },

    /// Decoding input into the record model failed.
    #[error("Record decode failed: {0}")]
    Decode(#[from] DecodeError),
}

/// Result type alias for projection operations.
pub type Result<T> = std::result::Result<T, ProjectError>;
