//! The record model: an ordered set of named fields.
//!
//! Records are the in-memory form of schema-defined messages after
//! decoding. Field names keep their declared snake_case form; renaming
//! only happens at projection time.

/// A single field value.
///
/// Mirrors the value space of the schemas the projector is used with:
/// string, integer, and boolean scalars, nested records, and sequences
/// of any of these.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// UTF-8 string scalar.
    String(String),
    /// Signed 64-bit integer scalar.
    Integer(i64),
    /// Boolean scalar.
    Boolean(bool),
    /// Nested record.
    Record(Record),
    /// Sequence of values.
    List(Vec<FieldValue>),
}

/// A named field within a record.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    /// Declared field name (snake_case).
    pub name: String,
    /// The field's value.
    pub value: FieldValue,
}

/// An ordered set of named fields.
///
/// Field order is insertion order and carries through projection, so
/// display output stays stable. Names are unique: setting an existing
/// name replaces the value in place rather than appending a duplicate,
/// which keeps the record's field count equal to its projection's key
/// count.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Record {
    fields: Vec<Field>,
}

impl Record {
    /// Create an empty record.
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Add a field, builder-style.
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.set(name, value);
        self
    }

    /// Set a field value.
    ///
    /// Replaces the existing value when the name is already present,
    /// keeping the field's original position.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<FieldValue>) {
        let name = name.into();
        let value = value.into();
        match self.fields.iter_mut().find(|f| f.name == name) {
            Some(field) => field.value = value,
            None => self.fields.push(Field { name, value }),
        }
    }

    /// Look up a field value by its declared name.
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields.iter().find(|f| f.name == name).map(|f| &f.value)
    }

    /// The fields in insertion order.
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        Self::Integer(value.into())
    }
}

impl From<u32> for FieldValue {
    fn from(value: u32) -> Self {
        Self::Integer(value.into())
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<Record> for FieldValue {
    fn from(value: Record) -> Self {
        Self::Record(value)
    }
}

impl<T: Into<FieldValue>> From<Vec<T>> for FieldValue {
    fn from(values: Vec<T>) -> Self {
        Self::List(values.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_preserves_insertion_order() {
        let record = Record::new()
            .with_field("job_id", "abc-123")
            .with_field("work_unit_type", "playbook")
            .with_field("org_id", "redhat");

        let names: Vec<&str> = record.fields().iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["job_id", "work_unit_type", "org_id"]);
    }

    #[test]
    fn test_set_replaces_in_place() {
        let mut record = Record::new()
            .with_field("page", 1)
            .with_field("page_size", 25);

        record.set("page", 2);

        assert_eq!(record.len(), 2);
        assert_eq!(record.get("page"), Some(&FieldValue::Integer(2)));
        assert_eq!(record.fields()[0].name, "page");
    }

    #[test]
    fn test_scalar_conversions() {
        let record = Record::new()
            .with_field("name", "alice".to_string())
            .with_field("id", 1)
            .with_field("count", 42i64)
            .with_field("is_superuser", false);

        assert_eq!(record.get("name"), Some(&FieldValue::String("alice".to_string())));
        assert_eq!(record.get("id"), Some(&FieldValue::Integer(1)));
        assert_eq!(record.get("count"), Some(&FieldValue::Integer(42)));
        assert_eq!(record.get("is_superuser"), Some(&FieldValue::Boolean(false)));
    }

    #[test]
    fn test_nested_and_list_values() {
        let user = Record::new().with_field("id", 1);
        let record = Record::new()
            .with_field("count", 1)
            .with_field("results", vec![user.clone()]);

        match record.get("results") {
            Some(FieldValue::List(items)) => {
                assert_eq!(items.len(), 1);
                assert_eq!(items[0], FieldValue::Record(user));
            }
            other => panic!("expected list, got {:?}", other),
        }
    }

    #[test]
    fn test_get_missing_field() {
        let record = Record::new().with_field("id", 1);
        assert!(record.get("name").is_none());
    }
}
