//! LLM provider trait definition

use crate::{CompletionRequest, CompletionResponse, Result};
use async_trait::async_trait;

/// A reasoning model that can answer completion requests
#[async_trait]
pub trait LLMProvider: Send + Sync {
    /// Generate a completion for the request's conversation
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse>;

    /// Provider name (e.g. "openai")
    fn name(&self) -> &str;
}
