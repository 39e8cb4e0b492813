//! The record decode boundary.
//!
//! Decoding wire bytes belongs to an external, schema-driven decoder;
//! this module only defines the seam. [`RecordDecoder`] is the capability
//! the projector needs ("something that produces a record"), and
//! [`JsonDecoder`] is the shipped reference implementation, mapping a
//! JSON document structurally onto the record model.

use serde_json::Value as JsonValue;

use crate::error::DecodeError;
use crate::record::{FieldValue, Record};

/// Decodes raw bytes into a [`Record`].
///
/// Implementations own the wire format. The contract is total: either a
/// well-formed record comes back, or the input was malformed and a
/// [`DecodeError`] says why. Partial records are never produced.
pub trait RecordDecoder {
    /// Decode `input` into a record.
    fn decode(&self, input: &[u8]) -> Result<Record, DecodeError>;
}

/// Decoder for JSON text whose top level is an object.
///
/// Strings, integers, booleans, nested objects, and arrays map directly
/// onto the record model. JSON `null` and non-integral numbers have no
/// record representation and are rejected.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonDecoder;

impl JsonDecoder {
    /// Create a new JSON decoder.
    pub fn new() -> Self {
        Self
    }
}

impl RecordDecoder for JsonDecoder {
    fn decode(&self, input: &[u8]) -> Result<Record, DecodeError> {
        let value: JsonValue = serde_json::from_slice(input)?;
        record_from_json(&value)
    }
}

/// Map an already-parsed JSON value onto a record.
///
/// The top level must be an object; see [`JsonDecoder`] for the value
/// mapping rules.
pub fn record_from_json(value: &JsonValue) -> Result<Record, DecodeError> {
    match value {
        JsonValue::Object(map) => {
            let mut record = Record::new();
            for (name, value) in map {
                record.set(name.clone(), field_value_from_json(name, value)?);
            }
            Ok(record)
        }
        other => Err(DecodeError::NotARecord(json_type_name(other).to_string())),
    }
}

fn field_value_from_json(field: &str, value: &JsonValue) -> Result<FieldValue, DecodeError> {
    match value {
        JsonValue::String(s) => Ok(FieldValue::String(s.clone())),
        JsonValue::Bool(b) => Ok(FieldValue::Boolean(*b)),
        JsonValue::Number(n) => n.as_i64().map(FieldValue::Integer).ok_or_else(|| {
            DecodeError::UnsupportedValue {
                field: field.to_string(),
                detail: format!("number {n} is not a signed 64-bit integer"),
            }
        }),
        JsonValue::Object(_) => Ok(FieldValue::Record(record_from_json(value)?)),
        JsonValue::Array(items) => items
            .iter()
            .map(|item| field_value_from_json(field, item))
            .collect::<Result<Vec<_>, _>>()
            .map(FieldValue::List),
        JsonValue::Null => Err(DecodeError::UnsupportedValue {
            field: field.to_string(),
            detail: "null has no record representation".to_string(),
        }),
    }
}

fn json_type_name(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "boolean",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_flat_object() {
        let record = JsonDecoder::new()
            .decode(br#"{"job_id": "abc-123", "page": 1, "is_superuser": false}"#)
            .unwrap();

        assert_eq!(record.len(), 3);
        assert_eq!(record.get("job_id"), Some(&FieldValue::String("abc-123".to_string())));
        assert_eq!(record.get("page"), Some(&FieldValue::Integer(1)));
        assert_eq!(record.get("is_superuser"), Some(&FieldValue::Boolean(false)));
    }

    #[test]
    fn test_decode_nested_object_and_array() {
        let record = JsonDecoder::new()
            .decode(br#"{"count": 1, "results": [{"id": 1, "username": "alice"}]}"#)
            .unwrap();

        match record.get("results") {
            Some(FieldValue::List(items)) => match &items[0] {
                FieldValue::Record(user) => {
                    assert_eq!(user.get("id"), Some(&FieldValue::Integer(1)));
                }
                other => panic!("expected record element, got {:?}", other),
            },
            other => panic!("expected list, got {:?}", other),
        }
    }

    #[test]
    fn test_decode_rejects_malformed_json() {
        let err = JsonDecoder::new().decode(b"{not json").unwrap_err();
        assert!(matches!(err, DecodeError::Malformed(_)));
    }

    #[test]
    fn test_decode_rejects_non_object_top_level() {
        let err = JsonDecoder::new().decode(b"[1, 2, 3]").unwrap_err();
        match err {
            DecodeError::NotARecord(kind) => assert_eq!(kind, "array"),
            other => panic!("expected NotARecord, got {:?}", other),
        }
    }

    #[test]
    fn test_decode_rejects_null_and_float() {
        let err = JsonDecoder::new().decode(br#"{"started": null}"#).unwrap_err();
        assert!(matches!(err, DecodeError::UnsupportedValue { ref field, .. } if field == "started"));

        let err = JsonDecoder::new().decode(br#"{"ratio": 0.5}"#).unwrap_err();
        assert!(matches!(err, DecodeError::UnsupportedValue { ref field, .. } if field == "ratio"));
    }

    #[test]
    fn test_decode_rejects_u64_overflow() {
        let err = JsonDecoder::new()
            .decode(br#"{"big": 18446744073709551615}"#)
            .unwrap_err();
        assert!(matches!(err, DecodeError::UnsupportedValue { .. }));
    }
}
