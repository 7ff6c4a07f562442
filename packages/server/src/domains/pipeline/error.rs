//! Failure taxonomy for a pipeline run.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// Pipeline step a failure is attributed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    Extraction,
    Generation,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Extraction => "extraction",
            Stage::Generation => "generation",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a pipeline run failed. A run fails at exactly one point.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// No usable location reference; no collaborator was called.
    #[error("missing location reference")]
    MissingInput,

    /// A collaborator returned an error.
    #[error("{stage} failed: {cause:#}")]
    UpstreamFailure { stage: Stage, cause: anyhow::Error },

    /// Anything else, such as a collaborator panicking.
    #[error("unexpected failure: {cause:#}")]
    UnexpectedFailure { cause: anyhow::Error },
}

impl PipelineError {
    pub fn upstream(stage: Stage, cause: anyhow::Error) -> Self {
        Self::UpstreamFailure { stage, cause }
    }

    pub fn stage(&self) -> Option<Stage> {
        match self {
            Self::UpstreamFailure { stage, .. } => Some(*stage),
            Self::MissingInput | Self::UnexpectedFailure { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upstream_message_names_stage_and_cause_chain() {
        let cause = anyhow::anyhow!("not found").context("Google Maps scrape failed");
        let err = PipelineError::upstream(Stage::Extraction, cause);

        assert_eq!(err.stage(), Some(Stage::Extraction));
        assert_eq!(
            err.to_string(),
            "extraction failed: Google Maps scrape failed: not found"
        );
    }

    #[test]
    fn stage_serialises_lowercase() {
        assert_eq!(serde_json::to_value(Stage::Generation).unwrap(), "generation");
    }
}
