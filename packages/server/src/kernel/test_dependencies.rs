// Test dependencies - mock collaborators for testing
//
// Both mocks record every call so tests can assert on call counts and
// arguments. Clones share the same recorded calls.

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use super::{BaseArticleGenerator, BaseRestaurantExtractor};
use crate::common::{Article, ArticleCollection, LocationReference, RestaurantRecord};

/// What a mock does when called.
#[derive(Debug, Clone)]
enum Outcome<T> {
    Succeed(T),
    Fail(String),
    Panic(String),
}

impl<T: Clone> Outcome<T> {
    fn resolve(&self) -> Result<T> {
        match self {
            Outcome::Succeed(value) => Ok(value.clone()),
            Outcome::Fail(message) => Err(anyhow!("{}", message)),
            Outcome::Panic(message) => panic!("{}", message),
        }
    }
}

// =============================================================================
// Mock Restaurant Extractor
// =============================================================================

#[derive(Clone)]
pub struct MockRestaurantExtractor {
    outcome: Arc<Mutex<Outcome<RestaurantRecord>>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockRestaurantExtractor {
    /// Extractor that returns a minimal "Mock Restaurant" record.
    pub fn new() -> Self {
        Self::returning(serde_json::json!({
            "name": "Mock Restaurant",
            "address": "1 Mock Street",
        }))
    }

    pub fn returning(record: serde_json::Value) -> Self {
        Self::with_outcome(Outcome::Succeed(record.into()))
    }

    pub fn failing(message: &str) -> Self {
        Self::with_outcome(Outcome::Fail(message.to_string()))
    }

    pub fn panicking(message: &str) -> Self {
        Self::with_outcome(Outcome::Panic(message.to_string()))
    }

    fn with_outcome(outcome: Outcome<RestaurantRecord>) -> Self {
        Self {
            outcome: Arc::new(Mutex::new(outcome)),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// References passed to `extract`, in call order
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

impl Default for MockRestaurantExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseRestaurantExtractor for MockRestaurantExtractor {
    async fn extract(&self, reference: &LocationReference) -> Result<RestaurantRecord> {
        self.calls.lock().unwrap().push(reference.as_str().to_string());
        let outcome = self.outcome.lock().unwrap().clone();
        outcome.resolve()
    }
}

// =============================================================================
// Mock Article Generator
// =============================================================================

/// Arguments captured from a generate call
#[derive(Debug, Clone)]
pub struct GenerateCallArgs {
    pub restaurant: RestaurantRecord,
    pub reference: String,
}

#[derive(Clone)]
pub struct MockArticleGenerator {
    outcome: Arc<Mutex<Outcome<ArticleCollection>>>,
    calls: Arc<Mutex<Vec<GenerateCallArgs>>>,
    delay: Option<Duration>,
}

impl MockArticleGenerator {
    /// Generator that returns a single "Mock Article".
    pub fn new() -> Self {
        Self::returning(vec![serde_json::json!({ "title": "Mock Article" })])
    }

    pub fn returning(articles: Vec<serde_json::Value>) -> Self {
        Self::with_outcome(Outcome::Succeed(
            articles.into_iter().map(Article::from).collect(),
        ))
    }

    pub fn failing(message: &str) -> Self {
        Self::with_outcome(Outcome::Fail(message.to_string()))
    }

    pub fn panicking(message: &str) -> Self {
        Self::with_outcome(Outcome::Panic(message.to_string()))
    }

    fn with_outcome(outcome: Outcome<ArticleCollection>) -> Self {
        Self {
            outcome: Arc::new(Mutex::new(outcome)),
            calls: Arc::new(Mutex::new(Vec::new())),
            delay: None,
        }
    }

    /// Sleep before answering, to simulate a slow model
    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn calls(&self) -> Vec<GenerateCallArgs> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

impl Default for MockArticleGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseArticleGenerator for MockArticleGenerator {
    async fn generate(
        &self,
        restaurant: &RestaurantRecord,
        reference: &LocationReference,
    ) -> Result<ArticleCollection> {
        self.calls.lock().unwrap().push(GenerateCallArgs {
            restaurant: restaurant.clone(),
            reference: reference.as_str().to_string(),
        });
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        let outcome = self.outcome.lock().unwrap().clone();
        outcome.resolve()
    }
}
