//! Type-safe schema generation for OpenAI structured outputs.
//!
//! Uses `schemars` to derive a JSON schema from a Rust type, then rewrites it
//! into the subset OpenAI accepts in strict mode:
//!
//! 1. every object schema carries `additionalProperties: false`
//! 2. every property is listed in `required`, nullable ones included
//! 3. `$ref`s are inlined and the `definitions` table is dropped

use schemars::{schema_for, JsonSchema};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// Types that can be requested as OpenAI structured output.
///
/// Blanket-implemented for anything `JsonSchema + DeserializeOwned`.
pub trait StructuredOutput: JsonSchema + DeserializeOwned {
    /// OpenAI strict-mode compatible schema for this type.
    fn openai_schema() -> Value {
        let mut value = serde_json::to_value(schema_for!(Self)).unwrap_or_default();

        let definitions = match &mut value {
            Value::Object(root) => {
                root.remove("$schema");
                root.remove("definitions")
            }
            _ => None,
        };

        if let Some(defs) = definitions {
            inline_refs(&mut value, &defs);
        }
        close_objects(&mut value);

        value
    }

    fn type_name() -> String {
        <Self as JsonSchema>::schema_name()
    }
}

impl<T: JsonSchema + DeserializeOwned> StructuredOutput for T {}

fn close_objects(value: &mut Value) {
    match value {
        Value::Object(map) => {
            if is_object_schema(map) {
                map.insert("additionalProperties".into(), Value::Bool(false));
                let keys: Vec<Value> = match map.get("properties") {
                    Some(Value::Object(props)) => {
                        props.keys().cloned().map(Value::String).collect()
                    }
                    _ => Vec::new(),
                };
                map.insert("required".into(), Value::Array(keys));
            }
            for (_, v) in map.iter_mut() {
                close_objects(v);
            }
        }
        Value::Array(items) => items.iter_mut().for_each(close_objects),
        _ => {}
    }
}

fn is_object_schema(map: &Map<String, Value>) -> bool {
    match map.get("type") {
        Some(Value::String(t)) => t == "object",
        // Option<Struct> renders as `"type": ["object", "null"]`
        Some(Value::Array(types)) => types.iter().any(|t| t == "object"),
        _ => false,
    }
}

fn inline_refs(value: &mut Value, definitions: &Value) {
    match value {
        Value::Object(map) => {
            let target = map
                .get("$ref")
                .and_then(Value::as_str)
                .and_then(|r| r.strip_prefix("#/definitions/"))
                .and_then(|name| definitions.get(name))
                .cloned();

            if let Some(def) = target {
                *value = def;
                inline_refs(value, definitions);
                return;
            }
            for (_, v) in map.iter_mut() {
                inline_refs(v, definitions);
            }
        }
        Value::Array(items) => {
            for item in items.iter_mut() {
                inline_refs(item, definitions);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize, JsonSchema)]
    #[allow(dead_code)]
    struct Draft {
        title: String,
        subtitle: Option<String>,
        tags: Vec<String>,
    }

    #[derive(Deserialize, JsonSchema)]
    #[allow(dead_code)]
    struct DraftBatch {
        drafts: Vec<Draft>,
    }

    fn required(schema: &Value) -> Vec<&str> {
        schema["required"]
            .as_array()
            .expect("required array")
            .iter()
            .filter_map(Value::as_str)
            .collect()
    }

    #[test]
    fn optional_fields_are_still_required() {
        let schema = Draft::openai_schema();

        let req = required(&schema);
        assert!(req.contains(&"title"));
        assert!(req.contains(&"subtitle"));
        assert!(req.contains(&"tags"));
        assert_eq!(schema["additionalProperties"], Value::Bool(false));
    }

    #[test]
    fn nested_types_are_inlined() {
        let schema = DraftBatch::openai_schema();
        let text = serde_json::to_string(&schema).unwrap();

        assert!(!text.contains("$ref"));
        assert!(schema.get("definitions").is_none());
        assert!(schema.get("$schema").is_none());

        let item = &schema["properties"]["drafts"]["items"];
        assert_eq!(item["type"], "object");
        assert_eq!(item["additionalProperties"], Value::Bool(false));
        assert_eq!(required(item).len(), 3);
    }
}
