// Common types shared by the pipeline, the collaborators and the HTTP layer
//
// The record and article types are opaque JSON. Their shape is
// owned by whichever collaborator produced them.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Map listing URL identifying the place to write about.
///
/// Holds the caller's string exactly as given, never blank; construct with
/// [`LocationReference::parse`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationReference(String);

impl LocationReference {
    /// Returns `None` for absent, empty or whitespace-only input. Anything
    /// else is kept verbatim, surrounding whitespace included.
    pub fn parse(raw: Option<&str>) -> Option<Self> {
        let raw = raw?;
        if raw.trim().is_empty() {
            None
        } else {
            Some(Self(raw.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LocationReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Structured facts about a restaurant, as produced by extraction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RestaurantRecord(serde_json::Value);

impl RestaurantRecord {
    pub fn from_serialize<T: Serialize>(value: &T) -> serde_json::Result<Self> {
        serde_json::to_value(value).map(Self)
    }

    /// `null`, `{}`, `[]` and `""` all count as "nothing extracted".
    pub fn is_empty(&self) -> bool {
        match &self.0 {
            serde_json::Value::Null => true,
            serde_json::Value::Object(map) => map.is_empty(),
            serde_json::Value::Array(items) => items.is_empty(),
            serde_json::Value::String(s) => s.trim().is_empty(),
            _ => false,
        }
    }

    pub fn as_value(&self) -> &serde_json::Value {
        &self.0
    }
}

impl From<serde_json::Value> for RestaurantRecord {
    fn from(value: serde_json::Value) -> Self {
        Self(value)
    }
}

/// A single generated article.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Article(serde_json::Value);

impl Article {
    pub fn from_serialize<T: Serialize>(value: &T) -> serde_json::Result<Self> {
        serde_json::to_value(value).map(Self)
    }

    pub fn as_value(&self) -> &serde_json::Value {
        &self.0
    }
}

impl From<serde_json::Value> for Article {
    fn from(value: serde_json::Value) -> Self {
        Self(value)
    }
}

/// Ordered articles returned by generation.
pub type ArticleCollection = Vec<Article>;

/// Combined outcome of a successful pipeline run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationResult {
    pub restaurant: RestaurantRecord,
    pub articles: ArticleCollection,
}
