//! Helpers to build response schemas
//!
//! Generative services accept an OpenAPI-style schema subset whose type names
//! are upper case (`OBJECT`, `ARRAY`, `STRING`, `NUMBER`, ...).

use serde_json::{Value, json};

/// Create a schema for an object with properties
///
/// # Example
///
/// ```
/// use genai_client::schema;
/// use serde_json::json;
///
/// let schema = schema::object(
///     json!({
///         "ticker": schema::string(),
///         "beta": schema::number(),
///     }),
///     &["ticker", "beta"],
/// );
/// assert_eq!(schema["required"][1], "beta");
/// ```
pub fn object(properties: Value, required: &[&str]) -> Value {
    json!({
        "type": "OBJECT",
        "properties": properties,
        "required": required,
    })
}

/// String property schema
pub fn string() -> Value {
    json!({ "type": "STRING" })
}

/// Number property schema
pub fn number() -> Value {
    json!({ "type": "NUMBER" })
}

/// Integer property schema
pub fn integer() -> Value {
    json!({ "type": "INTEGER" })
}

/// Array property schema
pub fn array(items: Value) -> Value {
    json!({
        "type": "ARRAY",
        "items": items,
    })
}

/// Attach a description to any schema node
///
/// Non-object values are returned unchanged.
pub fn describe(mut schema: Value, description: &str) -> Value {
    if let Some(map) = schema.as_object_mut() {
        map.insert("description".to_string(), Value::from(description));
    }
    schema
}
