//! Agent executor for running one agent on one task
//!
//! The loop:
//! 1. Call the model with the conversation and the agent's tools
//! 2. If the model asks for tools, run them and append the results
//! 3. Stop when the model produces a final answer
//!
//! A failing tool aborts the run. A call to a tool the agent does not have is
//! answered with an error result so the model can correct itself.

use crew_core::{Error, Result, ToolRegistry};
use crew_llm::{CompletionRequest, LLMProvider, Message, StopReason, ToolDefinition};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Configuration for agent execution
#[derive(Debug, Clone)]
pub struct ExecutorConfig {
    /// Maximum model round-trips per task
    pub max_iterations: usize,

    /// Model to use
    pub model: String,

    /// Max tokens per completion
    pub max_tokens: usize,

    /// Temperature; provider default when unset
    pub temperature: Option<f32>,
}

impl Default for ExecutorConfig {
    fn default() -> Self {
        Self {
            max_iterations: 15,
            model: "gpt-4o-mini".to_string(),
            max_tokens: 4096,
            temperature: None,
        }
    }
}

impl ExecutorConfig {
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }
}

/// Runs the model/tool loop for a single agent
pub struct AgentExecutor {
    provider: Arc<dyn LLMProvider>,
    tools: ToolRegistry,
    config: ExecutorConfig,
}

impl AgentExecutor {
    pub fn new(provider: Arc<dyn LLMProvider>, tools: ToolRegistry, config: ExecutorConfig) -> Self {
        Self {
            provider,
            tools,
            config,
        }
    }

    /// Run until the model gives a final answer
    pub async fn run(&self, system_prompt: &str, user_message: &str) -> Result<String> {
        let mut conversation = vec![Message::user(user_message)];
        let tools = self.tool_definitions();

        for iteration in 1..=self.config.max_iterations {
            debug!(
                iteration,
                max_iterations = self.config.max_iterations,
                tool_count = tools.len(),
                "Sending request to LLM"
            );

            let mut builder = CompletionRequest::builder(&self.config.model)
                .messages(conversation.clone())
                .system(system_prompt)
                .max_tokens(self.config.max_tokens);
            if let Some(temperature) = self.config.temperature {
                builder = builder.temperature(temperature);
            }
            if !tools.is_empty() {
                builder = builder.tools(tools.clone());
            }

            let response = self
                .provider
                .complete(builder.build())
                .await
                .map_err(|e| Error::ExecutionFailed(format!("LLM request failed: {e}")))?;

            debug!(
                stop_reason = ?response.stop_reason,
                input_tokens = response.usage.input_tokens,
                output_tokens = response.usage.output_tokens,
                "LLM response received"
            );

            match response.stop_reason {
                StopReason::EndTurn => {
                    return Ok(response.message.text().unwrap_or_default());
                }
                StopReason::MaxTokens => {
                    warn!("Hit max tokens in LLM response, returning truncated answer");
                    return Ok(response.message.text().unwrap_or_default());
                }
                StopReason::ToolUse => {
                    let results = self.execute_tools(&response.message).await?;
                    conversation.push(response.message);
                    conversation.extend(results);
                }
            }
        }

        Err(Error::ExecutionFailed(format!(
            "no final answer after {} iterations",
            self.config.max_iterations
        )))
    }

    fn tool_definitions(&self) -> Vec<ToolDefinition> {
        self.tools
            .list_tools()
            .iter()
            .map(|tool| ToolDefinition::new(tool.name(), tool.description(), tool.input_schema()))
            .collect()
    }

    async fn execute_tools(&self, message: &Message) -> Result<Vec<Message>> {
        let mut results = Vec::new();

        for (id, name, input) in message.tool_uses() {
            let Some(tool) = self.tools.get(name) else {
                warn!(tool_name = %name, "Model requested an unknown tool");
                results.push(Message::tool_result(
                    id,
                    format!("Error: tool '{name}' is not available"),
                ));
                continue;
            };

            info!(tool_name = %name, input = %input, "Executing tool");
            let start = Instant::now();
            let output = tool.execute(input.clone()).await.inspect_err(|e| {
                warn!(tool_name = %name, error = %e, "Tool execution failed");
            })?;

            let output = output.to_string();
            debug!(
                tool_name = %name,
                duration_ms = start.elapsed().as_millis(),
                result_length = output.len(),
                "Tool execution succeeded"
            );
            results.push(Message::tool_result(id, output));
        }

        Ok(results)
    }
}
