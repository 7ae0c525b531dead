//! Output schema handed to the model with every generation request.

use std::sync::LazyLock;

use gs_core::enums::IdeaField;
use serde_json::{Map, Value, json};

/// Top-level key holding the idea array in the model's response.
pub const IDEAS_KEY: &str = "ideas";

static IDEA_RESPONSE_SCHEMA: LazyLock<Value> = LazyLock::new(|| {
    let properties: Map<String, Value> = IdeaField::REQUIRED
        .into_iter()
        .chain(IdeaField::OPTIONAL)
        .map(|field| (field.as_str().to_string(), json!({ "type": "string" })))
        .collect();
    let required: Vec<&str> = IdeaField::REQUIRED.iter().map(|f| f.as_str()).collect();

    json!({
        "type": "object",
        "properties": {
            IDEAS_KEY: {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": properties,
                    "required": required,
                }
            }
        },
        "required": [IDEAS_KEY],
    })
});

/// JSON schema of the model response: `{"ideas": [{category, title,
/// description, refinedPrompt?, moneyValue?, effortValue?,
/// monetizationStrategies?}]}`, all values strings.
#[must_use]
pub fn idea_response_schema() -> &'static Value {
    &IDEA_RESPONSE_SCHEMA
}

/// Rewrite a JSON schema into Gemini's OpenAPI dialect, which spells
/// `type` values in uppercase (`OBJECT`, `ARRAY`, `STRING`).
#[must_use]
pub fn to_gemini_schema(schema: &Value) -> Value {
    match schema {
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(key, value)| {
                    let converted = match (key.as_str(), value) {
                        ("type", Value::String(ty)) => Value::String(ty.to_uppercase()),
                        _ => to_gemini_schema(value),
                    };
                    (key.clone(), converted)
                })
                .collect(),
        ),
        Value::Array(items) => Value::Array(items.iter().map(to_gemini_schema).collect()),
        other => other.clone(),
    }
}
