//! JSON Schema builders for tool input schemas

use serde_json::{Map, Value, json};

/// Create a JSON Schema object type
///
/// # Example
///
/// ```
/// use agent_tools::schema::{object, string};
/// use serde_json::json;
///
/// let schema = object(
///     json!({ "symbol": string("Stock ticker symbol") }),
///     &["symbol"],
/// );
/// assert_eq!(schema["required"][0], "symbol");
/// ```
pub fn object(properties: Value, required: &[&str]) -> Value {
    json!({
        "type": "object",
        "properties": properties,
        "required": required,
    })
}

/// Object schema that accepts no properties
pub fn empty_object() -> Value {
    json!({
        "type": "object",
        "properties": {},
    })
}

/// Create a JSON Schema string type
pub fn string(description: &str) -> Value {
    json!({
        "type": "string",
        "description": description,
    })
}

/// Create a bounded JSON Schema integer type
pub fn integer_range(description: &str, minimum: i64, maximum: i64, default: Option<i64>) -> Value {
    let mut schema = Map::new();
    schema.insert("type".to_string(), json!("integer"));
    schema.insert("description".to_string(), json!(description));
    schema.insert("minimum".to_string(), json!(minimum));
    schema.insert("maximum".to_string(), json!(maximum));
    if let Some(default) = default {
        schema.insert("default".to_string(), json!(default));
    }
    Value::Object(schema)
}

/// Create a JSON Schema array type with item count bounds
pub fn array(items: Value, description: &str, min_items: usize, max_items: usize) -> Value {
    json!({
        "type": "array",
        "items": items,
        "description": description,
        "minItems": min_items,
        "maxItems": max_items,
    })
}
