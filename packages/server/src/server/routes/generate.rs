use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::Deserialize;

use crate::common::GenerationResult;
use crate::domains::pipeline::ArticlePipeline;
use crate::server::{ApiError, AppState};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    pub google_maps_url: Option<String>,
}

/// `POST /generate` - scrape the listing and write articles about it.
pub async fn generate_handler(
    State(state): State<AppState>,
    payload: Result<Json<GenerateRequest>, JsonRejection>,
) -> Result<Json<GenerationResult>, ApiError> {
    // Without a JSON content type there is no body to read the URL from
    let google_maps_url = match payload {
        Ok(Json(request)) => request.google_maps_url,
        Err(JsonRejection::MissingJsonContentType(_)) => None,
        Err(rejection) => return Err(ApiError::InvalidBody(rejection.body_text())),
    };

    let result = ArticlePipeline::from_deps(&state.deps)
        .run(google_maps_url.as_deref())
        .await?;

    Ok(Json(result))
}
