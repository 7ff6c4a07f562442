//! Article pipeline: location reference -> restaurant record -> articles.
//!
//! Runs are sequential (generation needs the extracted record), never retried,
//! and either complete fully or fail at exactly one point. The pipeline holds
//! no state between runs; dropping the future abandons whichever collaborator
//! call is in flight.

use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use anyhow::anyhow;
use futures::FutureExt;
use tracing::{debug, info};

use super::error::{PipelineError, Stage};
use crate::common::{GenerationResult, LocationReference};
use crate::kernel::{BaseArticleGenerator, BaseRestaurantExtractor, ServerDeps};

pub struct ArticlePipeline {
    extractor: Arc<dyn BaseRestaurantExtractor>,
    generator: Arc<dyn BaseArticleGenerator>,
}

impl ArticlePipeline {
    pub fn new(
        extractor: Arc<dyn BaseRestaurantExtractor>,
        generator: Arc<dyn BaseArticleGenerator>,
    ) -> Self {
        Self {
            extractor,
            generator,
        }
    }

    pub fn from_deps(deps: &ServerDeps) -> Self {
        Self::new(deps.extractor.clone(), deps.generator.clone())
    }

    /// Extract the restaurant behind `reference`, then generate articles about it.
    ///
    /// Blank or absent references fail with [`PipelineError::MissingInput`]
    /// before either collaborator is called. The returned record is exactly
    /// what extraction produced.
    pub async fn run(&self, reference: Option<&str>) -> Result<GenerationResult, PipelineError> {
        let reference = LocationReference::parse(reference).ok_or(PipelineError::MissingInput)?;

        match AssertUnwindSafe(self.run_stages(&reference)).catch_unwind().await {
            Ok(result) => result,
            Err(panic) => Err(PipelineError::UnexpectedFailure {
                cause: anyhow!("collaborator panicked: {}", panic_message(panic.as_ref())),
            }),
        }
    }

    async fn run_stages(
        &self,
        reference: &LocationReference,
    ) -> Result<GenerationResult, PipelineError> {
        debug!(reference = %reference, "Extracting restaurant");
        let restaurant = self
            .extractor
            .extract(reference)
            .await
            .map_err(|cause| PipelineError::upstream(Stage::Extraction, cause))?;

        if restaurant.is_empty() {
            return Err(PipelineError::upstream(
                Stage::Extraction,
                anyhow!("extraction returned an empty record"),
            ));
        }

        debug!(reference = %reference, "Generating articles");
        let articles = self
            .generator
            .generate(&restaurant, reference)
            .await
            .map_err(|cause| PipelineError::upstream(Stage::Generation, cause))?;

        info!(reference = %reference, articles = articles.len(), "Pipeline completed");

        Ok(GenerationResult {
            restaurant,
            articles,
        })
    }
}

fn panic_message(panic: &(dyn Any + Send)) -> &str {
    if let Some(s) = panic.downcast_ref::<&str>() {
        *s
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.as_str()
    } else {
        "non-string panic payload"
    }
}
