//! Server dependencies (using traits for testability)
//!
//! The HTTP layer holds one `ServerDeps` and builds a pipeline from it per
//! request. Production wiring uses the Apify and OpenAI adapters; tests swap in
//! the mocks from `test_dependencies`.

use std::sync::Arc;

use apify_client::ApifyClient;
use openai_client::OpenAIClient;

use crate::config::Config;
use crate::domains::articles::OpenAIArticleGenerator;
use crate::domains::restaurants::ApifyRestaurantExtractor;
use crate::kernel::{BaseArticleGenerator, BaseRestaurantExtractor};

#[derive(Clone)]
pub struct ServerDeps {
    pub extractor: Arc<dyn BaseRestaurantExtractor>,
    pub generator: Arc<dyn BaseArticleGenerator>,
}

impl ServerDeps {
    pub fn new(
        extractor: Arc<dyn BaseRestaurantExtractor>,
        generator: Arc<dyn BaseArticleGenerator>,
    ) -> Self {
        Self {
            extractor,
            generator,
        }
    }

    /// Production dependencies: Apify for extraction, OpenAI for generation.
    pub fn from_config(config: &Config) -> Self {
        let apify = ApifyClient::new(config.apify_token.clone())
            .with_places_actor(config.apify_actor_id.clone())
            .with_max_wait(config.request_timeout);
        let openai = OpenAIClient::new(config.openai_api_key.clone());

        Self::new(
            Arc::new(ApifyRestaurantExtractor::new(
                apify,
                config.max_reviews,
                config.article_language.clone(),
            )),
            Arc::new(OpenAIArticleGenerator::new(
                openai,
                config.openai_model.clone(),
                config.article_count,
                config.article_language.clone(),
            )),
        )
    }
}
