// Shared test data

use serde_json::{json, Value};

pub const CAFE_LUNA_URL: &str = "https://maps.example/place/123";

pub fn cafe_luna_record() -> Value {
    json!({ "name": "Cafe Luna", "address": "12 Elm St" })
}

pub fn cafe_luna_articles() -> Vec<Value> {
    vec![json!({ "title": "Why Cafe Luna Shines" })]
}
