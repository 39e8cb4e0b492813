//! The field projection transformation.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::decode::record_from_json;
use crate::error::{DecodeError, ProjectError, Result};
use crate::naming::camel_case_key;
use crate::record::{FieldValue, Record};

/// The camel-case-keyed mapping produced by projection.
///
/// Key order matches record field order. The map carries data only; JSON
/// text encoding stays with `serde_json`.
pub type Projection = Map<String, Value>;

/// Project a record into its camel-case-keyed display mapping.
///
/// Every key is renamed per the naming convention; scalar values pass
/// through unchanged; nested records and sequences of records are
/// projected recursively. The projection has exactly as many entries as
/// the record has fields. The record itself is never mutated.
///
/// Fails with [`crate::ProjectError::InvalidFieldName`] when a field name
/// (at any nesting depth) breaks the snake_case declaration rules, or
/// when two field names in one record project to the same display key.
pub fn project(record: &Record) -> Result<Projection> {
    let mut projection = Projection::new();
    for field in record.fields() {
        let key = camel_case_key(&field.name)?;
        // The digit no-op lets distinct names share a display key
        // (`a2x` vs `a_2x`); overwriting would drop a field.
        if projection.contains_key(&key) {
            return Err(ProjectError::InvalidFieldName {
                name: field.name.clone(),
                reason: format!("projects to duplicate key `{key}`"),
            });
        }
        projection.insert(key, project_value(&field.value)?);
    }
    Ok(projection)
}

fn project_value(value: &FieldValue) -> Result<Value> {
    Ok(match value {
        FieldValue::String(s) => Value::String(s.clone()),
        FieldValue::Integer(n) => Value::Number((*n).into()),
        FieldValue::Boolean(b) => Value::Bool(*b),
        FieldValue::Record(nested) => Value::Object(project(nested)?),
        FieldValue::List(items) => Value::Array(
            items
                .iter()
                .map(project_value)
                .collect::<Result<Vec<_>>>()?,
        ),
    })
}

/// Project a serializable message through the generic bridge.
///
/// The message is serialized (its declared snake_case field names become
/// record field names), mapped onto the record model, and projected. This
/// is the single message-to-mapping path; message types never carry their
/// own key maps.
pub fn project_message<T: Serialize>(message: &T) -> Result<Projection> {
    let value = serde_json::to_value(message).map_err(DecodeError::Malformed)?;
    let record = record_from_json(&value)?;
    project(&record)
}
