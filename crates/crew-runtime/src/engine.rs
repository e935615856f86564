//! Sequential crew engine

use crate::executor::{AgentExecutor, ExecutorConfig};
use crate::prompt::{PromptRenderer, TaskContext};
use async_trait::async_trait;
use crew_core::{Crew, Error, ExecutionEngine, Result, ToolRegistry};
use crew_llm::LLMProvider;
use std::sync::Arc;
use tracing::{Instrument, debug, info, info_span};

/// Runs crew members one after another in task order
///
/// Each task sees the outputs of every task before it. The crew's result is
/// the output of the last task.
pub struct SequentialEngine {
    provider: Arc<dyn LLMProvider>,
    config: ExecutorConfig,
    prompts: PromptRenderer,
}

impl SequentialEngine {
    pub fn new(provider: Arc<dyn LLMProvider>, config: ExecutorConfig) -> Result<Self> {
        Ok(Self {
            provider,
            config,
            prompts: PromptRenderer::new()?,
        })
    }

    pub fn config(&self) -> &ExecutorConfig {
        &self.config
    }
}

#[async_trait]
impl ExecutionEngine for SequentialEngine {
    async fn execute(&self, crew: &Crew) -> Result<String> {
        let mut prior: Vec<TaskContext> = Vec::with_capacity(crew.len());

        for (index, member) in crew.members().iter().enumerate() {
            let agent = &member.agent;
            let verbose = crew.is_verbose() || agent.is_verbose();
            let span = info_span!("task", role = %member.role, step = index + 1);

            let output = async {
                if verbose {
                    info!(agent = agent.role(), "Starting task");
                } else {
                    debug!(agent = agent.role(), "Starting task");
                }

                let system = self.prompts.system_prompt(agent)?;
                let user = self.prompts.task_prompt(&member.task, &prior)?;
                let executor = AgentExecutor::new(
                    Arc::clone(&self.provider),
                    ToolRegistry::from_tools(agent.tools()),
                    self.config.clone(),
                );
                let output = executor.run(&system, &user).await?;

                if verbose {
                    info!(output_length = output.len(), "Task finished");
                } else {
                    debug!(output_length = output.len(), "Task finished");
                }
                Ok::<_, Error>(output)
            }
            .instrument(span)
            .await?;

            prior.push(TaskContext {
                role: agent.role().to_string(),
                output,
            });
        }

        prior
            .pop()
            .map(|last| last.output)
            .ok_or_else(|| Error::ExecutionFailed("crew produced no output".to_string()))
    }

    fn name(&self) -> &str {
        "sequential"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crew_core::{AgentSpec, TaskSpec};
    use crew_llm::{
        CompletionRequest, CompletionResponse, LLMError, Message, StopReason, TokenUsage,
    };
    use mockall::{Sequence, mock};

    mock! {
        Provider {}

        #[async_trait]
        impl LLMProvider for Provider {
            async fn complete(&self, request: CompletionRequest) -> crew_llm::Result<CompletionResponse>;
            fn name(&self) -> &str;
        }
    }

    fn answer(text: &str) -> CompletionResponse {
        CompletionResponse {
            message: Message::assistant(text),
            stop_reason: StopReason::EndTurn,
            usage: TokenUsage::default(),
        }
    }

    fn prompt_text(request: &CompletionRequest) -> String {
        request.messages[0].text().unwrap_or_default()
    }

    fn two_member_crew() -> Crew {
        Crew::builder()
            .agent("pricing", AgentSpec::new("Pricing Analyst", "prices", "numbers"))
            .agent("market", AgentSpec::new("Market Strategist", "strategy", "markets"))
            .task(TaskSpec::new("pricing", "Collect prices", "A table"))
            .task(TaskSpec::new("market", "Recommend a model", "A recommendation"))
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn test_runs_in_order_and_passes_context() {
        let mut provider = MockProvider::new();
        let mut seq = Sequence::new();
        provider
            .expect_complete()
            .withf(|req| {
                req.system.as_deref().is_some_and(|s| s.contains("Pricing Analyst"))
                    && !prompt_text(req).contains("earlier tasks")
            })
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(answer("gpt-4o-mini is $0.15 per 1M input tokens")));
        provider
            .expect_complete()
            .withf(|req| {
                req.system.as_deref().is_some_and(|s| s.contains("Market Strategist"))
                    && prompt_text(req).contains("gpt-4o-mini is $0.15 per 1M input tokens")
            })
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(answer("Pick gpt-4o-mini for volume workloads")));

        let engine = SequentialEngine::new(Arc::new(provider), ExecutorConfig::default()).unwrap();
        let result = engine.execute(&two_member_crew()).await.unwrap();

        assert_eq!(result, "Pick gpt-4o-mini for volume workloads");
        assert_eq!(engine.name(), "sequential");
    }

    #[tokio::test]
    async fn test_configured_model_is_used() {
        let mut provider = MockProvider::new();
        provider
            .expect_complete()
            .withf(|req| req.model == "gpt-4o")
            .times(2)
            .returning(|_| Ok(answer("ok")));

        let config = ExecutorConfig::default().with_model("gpt-4o");
        let engine = SequentialEngine::new(Arc::new(provider), config).unwrap();
        engine.execute(&two_member_crew()).await.unwrap();
    }

    #[tokio::test]
    async fn test_failure_stops_remaining_tasks() {
        let mut provider = MockProvider::new();
        provider
            .expect_complete()
            .times(1)
            .returning(|_| Err(LLMError::RequestFailed("503 Service Unavailable".to_string())));

        let engine = SequentialEngine::new(Arc::new(provider), ExecutorConfig::default()).unwrap();
        let err = engine.execute(&two_member_crew()).await.unwrap_err();
        assert!(err.to_string().contains("503 Service Unavailable"));
    }
}
