use thiserror::Error;

pub type Result<T> = std::result::Result<T, OpenAIError>;

#[derive(Debug, Error)]
pub enum OpenAIError {
    #[error("request to OpenAI failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("OpenAI responded {status}: {body}")]
    Status { status: u16, body: String },

    /// The model declined to answer
    #[error("model refused: {0}")]
    Refusal(String),

    /// Output hit the completion token limit, so the JSON is incomplete
    #[error("model output was cut off at the token limit")]
    Truncated,

    #[error("model returned no content")]
    EmptyResponse,

    #[error("model output does not match the schema: {0}")]
    Decode(#[from] serde_json::Error),
}
