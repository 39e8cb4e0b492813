//! The snake_case to camelCase naming convention.
//!
//! Declared field names are lowercase ASCII with digits and underscore
//! separators. Display keys keep the first segment as-is and uppercase
//! the first character of every later segment.

use crate::error::{ProjectError, Result};

/// Convert a declared field name to its camelCase display key.
///
/// `work_unit_type` becomes `workUnitType`; a single-segment name such as
/// `id` is returned unchanged. Uppercasing the character after an
/// underscore is a no-op when that character is a digit (`a_2x` → `a2x`),
/// matching the JSON-name rule of the schema toolchain the records come
/// from.
///
/// Fails with [`ProjectError::InvalidFieldName`] when the name contains
/// characters outside `[a-z0-9_]` or an underscore produces an empty
/// segment (empty name, leading/trailing underscore, doubled underscore).
pub fn camel_case_key(name: &str) -> Result<String> {
    validate_field_name(name)?;

    let mut key = String::with_capacity(name.len());
    let mut upper_next = false;
    for ch in name.chars() {
        if ch == '_' {
            upper_next = true;
        } else if upper_next {
            key.push(ch.to_ascii_uppercase());
            upper_next = false;
        } else {
            key.push(ch);
        }
    }

    Ok(key)
}

/// Check a declared field name against the snake_case rules.
pub fn validate_field_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(invalid(name, "name is empty"));
    }

    if let Some(ch) = name
        .chars()
        .find(|ch| !ch.is_ascii_lowercase() && !ch.is_ascii_digit() && *ch != '_')
    {
        return Err(invalid(name, &format!("character `{ch}` is outside [a-z0-9_]")));
    }

    if name.split('_').any(str::is_empty) {
        return Err(invalid(name, "underscore produces an empty segment"));
    }

    Ok(())
}

fn invalid(name: &str, reason: &str) -> ProjectError {
    ProjectError::InvalidFieldName {
        name: name.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_segment_unchanged() {
        assert_eq!(camel_case_key("id").unwrap(), "id");
        assert_eq!(camel_case_key("results").unwrap(), "results");
        assert_eq!(camel_case_key("username").unwrap(), "username");
    }

    #[test]
    fn test_multi_segment_conversion() {
        assert_eq!(camel_case_key("job_template_id").unwrap(), "jobTemplateId");
        assert_eq!(camel_case_key("work_unit_type").unwrap(), "workUnitType");
        assert_eq!(camel_case_key("is_superuser").unwrap(), "isSuperuser");
        assert_eq!(camel_case_key("page_size").unwrap(), "pageSize");
    }

    #[test]
    fn test_digit_segments() {
        assert_eq!(camel_case_key("k9_unit").unwrap(), "k9Unit");
        assert_eq!(camel_case_key("a_2x").unwrap(), "a2x");
        assert_eq!(camel_case_key("sha256_sum").unwrap(), "sha256Sum");
    }

    #[test]
    fn test_rejects_invalid_characters() {
        for name in ["Bad", "has-dash", "with space", "dot.ted", "camelCase"] {
            let err = camel_case_key(name).unwrap_err();
            match err {
                ProjectError::InvalidFieldName { name: reported, .. } => {
                    assert_eq!(reported, name);
                }
                other => panic!("expected InvalidFieldName, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_rejects_empty_segments() {
        for name in ["", "_x", "x_", "a__b", "_"] {
            assert!(
                matches!(
                    camel_case_key(name),
                    Err(ProjectError::InvalidFieldName { .. })
                ),
                "name `{name}` should be rejected"
            );
        }
    }
}
