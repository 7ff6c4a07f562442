//! Wire types for `POST /chat/completions` with a strict JSON-schema response.

use serde::{Deserialize, Serialize};

use crate::error::{OpenAIError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

#[derive(Debug, Clone, Serialize)]
pub struct PromptMessage {
    pub role: Role,
    pub content: String,
}

impl PromptMessage {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }
}

/// Reasoning models only run at their default temperature.
pub fn is_reasoning_model(model: &str) -> bool {
    ["o1", "o3", "o4", "gpt-5"]
        .iter()
        .any(|prefix| model.starts_with(prefix))
}

/// A system + user prompt whose answer must match a JSON schema.
///
/// The schema itself is attached by [`crate::OpenAIClient::structured`] from
/// the target type.
#[derive(Debug, Serialize)]
pub struct StructuredRequest {
    pub model: String,
    pub messages: Vec<PromptMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_completion_tokens: Option<u32>,
    pub response_format: ResponseFormat,
}

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ResponseFormat {
    JsonSchema { json_schema: SchemaSpec },
}

#[derive(Debug, Serialize)]
pub struct SchemaSpec {
    /// Must match `^[a-zA-Z0-9_-]+$`
    pub name: String,
    pub strict: bool,
    pub schema: serde_json::Value,
}

impl StructuredRequest {
    /// Deterministic by default: temperature 0 where the model allows it.
    pub fn new(model: impl Into<String>, system: impl Into<String>, user: impl Into<String>) -> Self {
        let model = model.into();
        let temperature = (!is_reasoning_model(&model)).then_some(0.0);

        Self {
            model,
            messages: vec![
                PromptMessage::new(Role::System, system),
                PromptMessage::new(Role::User, user),
            ],
            temperature,
            max_completion_tokens: None,
            response_format: ResponseFormat::JsonSchema {
                json_schema: SchemaSpec {
                    name: "response".to_string(),
                    strict: true,
                    schema: serde_json::Value::Null,
                },
            },
        }
    }

    /// Ignored for reasoning models.
    pub fn temperature(mut self, temperature: f32) -> Self {
        if !is_reasoning_model(&self.model) {
            self.temperature = Some(temperature);
        }
        self
    }

    pub fn max_completion_tokens(mut self, limit: u32) -> Self {
        self.max_completion_tokens = Some(limit);
        self
    }

    pub fn schema(&self) -> &SchemaSpec {
        let ResponseFormat::JsonSchema { json_schema } = &self.response_format;
        json_schema
    }

    pub(crate) fn with_schema(mut self, name: &str, schema: serde_json::Value) -> Self {
        let ResponseFormat::JsonSchema { json_schema } = &mut self.response_format;

        let name: String = name
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '-' { c } else { '_' })
            .collect();
        if !name.is_empty() {
            json_schema.name = name;
        }
        json_schema.schema = schema;
        self
    }
}

#[derive(Debug, Deserialize)]
pub struct CompletionResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
    pub usage: Option<TokenUsage>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: AssistantMessage,
    pub finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AssistantMessage {
    pub content: Option<String>,
    pub refusal: Option<String>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct TokenUsage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
}

impl CompletionResponse {
    /// Text of the first choice. Refusals, truncated output and blank answers
    /// are errors.
    pub fn into_content(self) -> Result<String> {
        let choice = self
            .choices
            .into_iter()
            .next()
            .ok_or(OpenAIError::EmptyResponse)?;

        if let Some(refusal) = choice.message.refusal {
            return Err(OpenAIError::Refusal(refusal));
        }
        if choice.finish_reason.as_deref() == Some("length") {
            return Err(OpenAIError::Truncated);
        }

        choice
            .message
            .content
            .filter(|c| !c.trim().is_empty())
            .ok_or(OpenAIError::EmptyResponse)
    }
}

/// Drop a Markdown code fence some models wrap around JSON.
pub fn strip_json_fence(text: &str) -> &str {
    text.trim()
        .trim_start_matches("```json")
        .trim_start_matches("```")
        .trim_end_matches("```")
        .trim()
}
