//! Reasoning-model client layer for crew runs
//!
//! This crate provides the provider-agnostic request/response types used by
//! the crew executor and an OpenAI-compatible chat-completions provider:
//!
//! - Message types, including tool calls and tool results
//! - Completion request/response types
//! - Tool definitions sent to the model
//! - The [`LLMProvider`] trait

pub mod completion;
pub mod error;
pub mod messages;
pub mod provider;
pub mod providers;
pub mod tools;

// Re-export main types
pub use completion::{CompletionRequest, CompletionResponse, StopReason, TokenUsage};
pub use error::{LLMError, Result};
pub use messages::{ContentBlock, Message, MessageContent, Role};
pub use provider::LLMProvider;
pub use tools::ToolDefinition;
