//! HTTP error responses.
//!
//! Callers only ever see a short message; stage and cause of pipeline failures
//! go to the log.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::domains::pipeline::PipelineError;

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Invalid request body: {0}")]
    InvalidBody(String),
    #[error(transparent)]
    Pipeline(#[from] PipelineError),
}

impl ApiError {
    fn status_and_message(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::InvalidBody(_) => (StatusCode::BAD_REQUEST, "Invalid request body"),
            ApiError::Pipeline(PipelineError::MissingInput) => {
                (StatusCode::BAD_REQUEST, "Missing googleMapsUrl")
            }
            ApiError::Pipeline(PipelineError::UpstreamFailure { .. })
            | ApiError::Pipeline(PipelineError::UnexpectedFailure { .. }) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Generation failed")
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::InvalidBody(detail) => {
                tracing::warn!(detail = %detail, "Rejected request body");
            }
            ApiError::Pipeline(PipelineError::MissingInput) => {
                tracing::warn!("Request without googleMapsUrl");
            }
            ApiError::Pipeline(PipelineError::UpstreamFailure { stage, cause }) => {
                tracing::error!(stage = %stage, cause = ?cause, "Article pipeline failed");
            }
            ApiError::Pipeline(PipelineError::UnexpectedFailure { cause }) => {
                tracing::error!(cause = ?cause, "Article pipeline failed unexpectedly");
            }
        }

        let (status, error) = self.status_and_message();
        (status, Json(ErrorBody { error })).into_response()
    }
}
