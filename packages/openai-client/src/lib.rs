//! Minimal OpenAI client for schema-constrained chat completions.
//!
//! ```rust,ignore
//! use openai_client::{OpenAIClient, StructuredRequest};
//!
//! #[derive(serde::Deserialize, schemars::JsonSchema)]
//! struct Headline {
//!     title: String,
//! }
//!
//! let client = OpenAIClient::new(api_key);
//! let headline: Headline = client
//!     .structured(StructuredRequest::new("gpt-4o-mini", "Write a headline.", "Cafe Luna"))
//!     .await?;
//! ```

pub mod error;
pub mod schema;
pub mod types;

pub use error::{OpenAIError, Result};
pub use schema::StructuredOutput;
pub use types::{is_reasoning_model, Role, StructuredRequest};

use std::time::Instant;

use reqwest::Client;
use tracing::{debug, warn};
use types::{strip_json_fence, CompletionResponse};

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

#[derive(Clone)]
pub struct OpenAIClient {
    http: Client,
    api_key: String,
    base_url: String,
}

impl OpenAIClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Point at a proxy or compatible API.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Send `request` with the strict schema of `T` and decode the answer.
    pub async fn structured<T: StructuredOutput>(&self, request: StructuredRequest) -> Result<T> {
        let request = request.with_schema(&T::type_name(), T::openai_schema());
        let started = Instant::now();

        let response = self.complete(&request).await?;
        if let Some(usage) = response.usage {
            debug!(
                model = %request.model,
                schema = %request.schema().name,
                prompt_tokens = usage.prompt_tokens,
                completion_tokens = usage.completion_tokens,
                elapsed_ms = started.elapsed().as_millis() as u64,
                "Structured completion finished"
            );
        }

        let content = response.into_content()?;
        Ok(serde_json::from_str(strip_json_fence(&content))?)
    }

    async fn complete(&self, request: &StructuredRequest) -> Result<CompletionResponse> {
        let response = self
            .http
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = %status, body = %body, "OpenAI rejected the request");
            return Err(OpenAIError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json().await?)
    }
}
