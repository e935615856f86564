//! Reasoning-model client errors

use thiserror::Error;

pub type Result<T> = std::result::Result<T, LLMError>;

/// Failures talking to an OpenAI-compatible chat endpoint
///
/// Status codes the endpoint reports map to dedicated variants; transport
/// failures surface as [`LLMError::HttpError`].
#[derive(Error, Debug)]
pub enum LLMError {
    /// Non-success status without a more specific variant
    #[error("API request failed: {0}")]
    RequestFailed(String),

    /// HTTP 401
    #[error("Invalid API key or authentication failed")]
    AuthenticationFailed,

    /// HTTP 429, carrying the endpoint's message
    #[error("Rate limit exceeded: {0}")]
    RateLimitExceeded(String),

    /// HTTP 400
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// HTTP 404 for the configured model name
    #[error("Model not found: {0}")]
    ModelNotFound(String),

    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// The body could not be decoded or had no usable choice
    #[error("Unexpected response format: {0}")]
    UnexpectedResponse(String),
}
