//! OpenAI-backed article generation.

use anyhow::{ensure, Context, Result};
use async_trait::async_trait;
use openai_client::{OpenAIClient, StructuredRequest};
use tracing::{debug, info, warn};

use super::models::{ArticleBatch, PublishedArticle};
use super::prompts::{system_prompt, user_prompt};
use crate::common::{Article, ArticleCollection, LocationReference, RestaurantRecord};
use crate::kernel::BaseArticleGenerator;

/// Some variety between articles; facts are pinned by the prompt.
const GENERATION_TEMPERATURE: f32 = 0.7;

/// Room for up to ten long articles in one answer.
const MAX_OUTPUT_TOKENS: u32 = 16_000;

pub struct OpenAIArticleGenerator {
    client: OpenAIClient,
    model: String,
    article_count: u32,
    language: String,
}

impl OpenAIArticleGenerator {
    pub fn new(client: OpenAIClient, model: String, article_count: u32, language: String) -> Self {
        Self {
            client,
            model,
            article_count,
            language,
        }
    }

    fn request(&self, restaurant: &RestaurantRecord, reference: &LocationReference) -> StructuredRequest {
        StructuredRequest::new(
            self.model.as_str(),
            system_prompt(self.article_count, &self.language),
            user_prompt(restaurant, reference),
        )
        .temperature(GENERATION_TEMPERATURE)
        .max_completion_tokens(MAX_OUTPUT_TOKENS)
    }
}

#[async_trait]
impl BaseArticleGenerator for OpenAIArticleGenerator {
    async fn generate(
        &self,
        restaurant: &RestaurantRecord,
        reference: &LocationReference,
    ) -> Result<ArticleCollection> {
        debug!(model = %self.model, count = self.article_count, "Generating articles");

        let batch: ArticleBatch = self
            .client
            .structured(self.request(restaurant, reference))
            .await
            .context("Article generation request failed")?;

        ensure!(!batch.articles.is_empty(), "model returned no articles");

        if batch.articles.len() != self.article_count as usize {
            warn!(
                requested = self.article_count,
                received = batch.articles.len(),
                "Model returned a different number of articles than requested"
            );
        }

        let articles = batch
            .articles
            .into_iter()
            .map(|generated| {
                let published = PublishedArticle::from_generated(generated, reference.as_str());
                Article::from_serialize(&published)
            })
            .collect::<serde_json::Result<ArticleCollection>>()
            .context("Failed to serialise generated articles")?;

        info!(count = articles.len(), model = %self.model, "Articles generated");

        Ok(articles)
    }
}
