// Trait definitions for dependency injection
//
// These are the two collaborator capabilities the article pipeline depends on.
// Errors are opaque (anyhow) because the pipeline only attributes them to a stage.
//
// Naming convention: Base* for trait names (e.g., BaseRestaurantExtractor)

use anyhow::Result;
use async_trait::async_trait;

use crate::common::{ArticleCollection, LocationReference, RestaurantRecord};

// =============================================================================
// Extraction (map listing URL -> restaurant record)
// =============================================================================

#[async_trait]
pub trait BaseRestaurantExtractor: Send + Sync {
    /// Resolve a location reference into structured restaurant facts.
    ///
    /// Fails on any network, parsing or not-found problem.
    async fn extract(&self, reference: &LocationReference) -> Result<RestaurantRecord>;
}

// =============================================================================
// Generation (restaurant record -> articles)
// =============================================================================

#[async_trait]
pub trait BaseArticleGenerator: Send + Sync {
    /// Write articles about `restaurant`.
    ///
    /// `reference` is the original listing URL, for attribution and links.
    async fn generate(
        &self,
        restaurant: &RestaurantRecord,
        reference: &LocationReference,
    ) -> Result<ArticleCollection>;
}
