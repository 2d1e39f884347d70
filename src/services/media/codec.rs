//! JSON text encoding used on the bus.
//!
//! Items travel as UTF-8 JSON text: a single object for `appendMovie` and an
//! array of objects for `items`/`setItems`.

use serde_json::Value;
use tracing::debug;

use super::{MediaCollection, MediaError, MediaItem, ParsePolicy};

/// Parses the top-level object of `text`.
///
/// Under [`ParsePolicy::Lenient`] anything that is not a JSON object yields an
/// empty object.
///
/// # Errors
///
/// Returns `MediaError::InvalidItem` under [`ParsePolicy::Strict`] when `text`
/// is not valid JSON or its top-level value is not an object.
pub fn parse_item(text: &str, policy: ParsePolicy) -> Result<MediaItem, MediaError> {
    let rejected = match serde_json::from_str::<Value>(text) {
        Ok(Value::Object(item)) => return Ok(item),
        Ok(other) => format!("expected a JSON object, got {}", kind_of(&other)),
        Err(e) => e.to_string(),
    };

    match policy {
        ParsePolicy::Lenient => {
            debug!(reason = %rejected, "Absorbing malformed media item as empty object");
            Ok(MediaItem::new())
        }
        ParsePolicy::Strict => Err(MediaError::InvalidItem(rejected)),
    }
}

/// Encodes a collection as a JSON array.
///
/// # Errors
///
/// Returns `MediaError::InvalidItem` if serialization fails.
pub fn encode_items(items: &[MediaItem]) -> Result<String, MediaError> {
    serde_json::to_string(items).map_err(|e| MediaError::InvalidItem(e.to_string()))
}

/// Decodes a JSON array of objects.
///
/// # Errors
///
/// Returns `MediaError::InvalidItem` if `text` is not a JSON array or any of
/// its elements is not an object.
pub fn decode_items(text: &str) -> Result<MediaCollection, MediaError> {
    serde_json::from_str::<MediaCollection>(text).map_err(|e| {
        MediaError::InvalidItem(format!("expected a JSON array of objects: {e}"))
    })
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn parses_object() {
        let item = parse_item(r#"{"title":"A"}"#, ParsePolicy::Strict).unwrap();
        assert_eq!(Value::Object(item), json!({"title": "A"}));
    }

    #[test]
    fn lenient_absorbs_garbage() {
        let item = parse_item("not json", ParsePolicy::Lenient).unwrap();
        assert!(item.is_empty());
    }

    #[test]
    fn lenient_absorbs_non_object_documents() {
        for text in ["[1, 2]", "42", "\"title\"", "null", ""] {
            let item = parse_item(text, ParsePolicy::Lenient).unwrap();
            assert!(item.is_empty(), "{text:?} should become an empty object");
        }
    }

    #[test]
    fn strict_rejects_garbage() {
        let err = parse_item("not json", ParsePolicy::Strict).unwrap_err();
        assert!(matches!(err, MediaError::InvalidItem(_)));
    }

    #[test]
    fn strict_rejects_array() {
        let err = parse_item("[]", ParsePolicy::Strict).unwrap_err();
        assert!(err.to_string().contains("an array"));
    }

    #[test]
    fn encodes_items_as_array() {
        let items = decode_items(r#"[{"title":"A"},{"title":"B","year":1999}]"#).unwrap();
        assert_eq!(items.len(), 2);

        let text = encode_items(&items).unwrap();
        let value: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value, json!([{"title": "A"}, {"title": "B", "year": 1999}]));
    }

    #[test]
    fn encodes_empty_collection() {
        assert_eq!(encode_items(&[]).unwrap(), "[]");
    }

    #[test]
    fn decode_rejects_array_of_scalars() {
        assert!(decode_items("[1, 2, 3]").is_err());
        assert!(decode_items(r#"{"title":"A"}"#).is_err());
    }
}
