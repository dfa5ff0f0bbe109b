//! Core document types.
//!
//! A document is an unordered JSON object. Values cover the full dynamic
//! JSON range: null, booleans, numbers, strings, nested objects, and
//! arrays. Arrays are accepted on insert but invisible to the index and
//! unreachable by queries.

use serde_json::{Map, Value};

/// A schemaless document: string keys mapped to arbitrary JSON values.
pub type Document = Map<String, Value>;

/// Renders a scalar value in the backend's default textual form.
///
/// Booleans render as `true`/`false`, integers without a decimal point,
/// floats in their shortest round-tripping form, null as the literal
/// `null`, and strings unquoted. Objects and arrays have no scalar
/// rendering.
pub fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => Some("null".to_owned()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) => Some(s.clone()),
        Value::Object(_) | Value::Array(_) => None,
    }
}

/// Resolves a dot-path against a document.
///
/// Every step but the last must land on a nested object. Returns `None`
/// if the path is empty, a key is missing, or an intermediate value is
/// not an object.
pub fn get_path<'a>(doc: &'a Document, parts: &[String]) -> Option<&'a Value> {
    let (first, rest) = parts.split_first()?;
    let mut value = doc.get(first)?;
    for part in rest {
        value = value.as_object()?.get(part)?;
    }
    Some(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc(value: Value) -> Document {
        value.as_object().expect("test document is an object").clone()
    }

    #[test]
    fn test_get_path_nested_hit() {
        let d = doc(json!({"a": {"b": 1}}));
        assert_eq!(get_path(&d, &["a".into(), "b".into()]), Some(&json!(1)));
    }

    #[test]
    fn test_get_path_missing_key() {
        let d = doc(json!({"a": {"b": 1}}));
        assert_eq!(get_path(&d, &["a".into(), "c".into()]), None);
    }

    #[test]
    fn test_get_path_through_scalar_fails() {
        let d = doc(json!({"a": 1}));
        assert_eq!(get_path(&d, &["a".into(), "b".into()]), None);
    }

    #[test]
    fn test_get_path_through_array_fails() {
        let d = doc(json!({"a": [{"b": 1}]}));
        assert_eq!(get_path(&d, &["a".into(), "b".into()]), None);
    }

    #[test]
    fn test_scalar_text_forms() {
        assert_eq!(scalar_text(&json!(null)).as_deref(), Some("null"));
        assert_eq!(scalar_text(&json!(true)).as_deref(), Some("true"));
        assert_eq!(scalar_text(&json!(45)).as_deref(), Some("45"));
        assert_eq!(scalar_text(&json!(4.5)).as_deref(), Some("4.5"));
        assert_eq!(scalar_text(&json!("kevin")).as_deref(), Some("kevin"));
    }

    #[test]
    fn test_scalar_text_rejects_containers() {
        assert_eq!(scalar_text(&json!({"a": 1})), None);
        assert_eq!(scalar_text(&json!([1, 2])), None);
    }
}
