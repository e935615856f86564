//! Prompt templates for agents and tasks

use crew_core::{AgentSpec, Error, Result, TaskSpec};
use minijinja::{Environment, context};
use serde::Serialize;

const SYSTEM_TEMPLATE: &str = "system";
const TASK_TEMPLATE: &str = "task";

const SYSTEM_SOURCE: &str = "\
You are {{ role }}. {{ backstory }}
Your personal goal is: {{ goal }}
{% if tools %}
You have access to the following tools:
{% for tool in tools %}
- {{ tool.name }}: {{ tool.description }}
{% endfor %}
Call a tool whenever it helps you answer with current information.
{% endif %}";

const TASK_SOURCE: &str = "\
Current task: {{ description }}

Criteria for your final answer: {{ expected_output }}
Return the complete content of your answer, not a summary of it.
{% if context %}

Work from the following results of earlier tasks:
{% for entry in context %}

## {{ entry.role }}
{{ entry.output }}
{% endfor %}
{% endif %}";

/// Output of an earlier task, passed along as context
#[derive(Debug, Clone, Serialize)]
pub struct TaskContext {
    /// Display role of the agent that produced the output
    pub role: String,
    pub output: String,
}

/// Renders system and task prompts
pub struct PromptRenderer {
    env: Environment<'static>,
}

impl PromptRenderer {
    pub fn new() -> Result<Self> {
        let mut env = Environment::new();
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        env.add_template(SYSTEM_TEMPLATE, SYSTEM_SOURCE)
            .map_err(render_error)?;
        env.add_template(TASK_TEMPLATE, TASK_SOURCE)
            .map_err(render_error)?;
        Ok(Self { env })
    }

    /// System prompt built from the agent's persona and tools
    pub fn system_prompt(&self, agent: &AgentSpec) -> Result<String> {
        let tools: Vec<_> = agent
            .tools()
            .iter()
            .map(|t| context! { name => t.name(), description => t.description() })
            .collect();

        self.env
            .get_template(SYSTEM_TEMPLATE)
            .and_then(|t| {
                t.render(context! {
                    role => agent.role(),
                    goal => agent.goal(),
                    backstory => agent.backstory(),
                    tools => tools,
                })
            })
            .map_err(render_error)
    }

    /// User prompt for a task, with earlier outputs appended as context
    pub fn task_prompt(&self, task: &TaskSpec, prior: &[TaskContext]) -> Result<String> {
        self.env
            .get_template(TASK_TEMPLATE)
            .and_then(|t| {
                t.render(context! {
                    description => &task.description,
                    expected_output => &task.expected_output,
                    context => prior,
                })
            })
            .map_err(render_error)
    }
}

fn render_error(e: minijinja::Error) -> Error {
    Error::ExecutionFailed(format!("prompt rendering failed: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use crew_core::Tool;
    use serde_json::{Value, json};
    use std::sync::Arc;

    struct LookupTool;

    #[async_trait]
    impl Tool for LookupTool {
        async fn execute(&self, params: Value) -> Result<Value> {
            Ok(params)
        }

        fn name(&self) -> &str {
            "Search"
        }

        fn description(&self) -> &str {
            "Looks things up"
        }

        fn input_schema(&self) -> Value {
            json!({"type": "object"})
        }
    }

    #[test]
    fn test_system_prompt_includes_persona_and_tools() {
        let renderer = PromptRenderer::new().unwrap();
        let agent = AgentSpec::new("AI Pricing Analyst", "Find prices", "Veteran analyst.")
            .with_tool(Arc::new(LookupTool));

        let prompt = renderer.system_prompt(&agent).unwrap();
        assert!(prompt.starts_with("You are AI Pricing Analyst. Veteran analyst."));
        assert!(prompt.contains("Your personal goal is: Find prices"));
        assert!(prompt.contains("- Search: Looks things up"));
    }

    #[test]
    fn test_system_prompt_without_tools() {
        let renderer = PromptRenderer::new().unwrap();
        let agent = AgentSpec::new("Strategist", "Plan", "Thinks ahead.");

        let prompt = renderer.system_prompt(&agent).unwrap();
        assert!(!prompt.contains("following tools"));
    }

    #[test]
    fn test_task_prompt_with_and_without_context() {
        let renderer = PromptRenderer::new().unwrap();
        let task = TaskSpec::new("pricing", "Compare prices", "A table");

        let first = renderer.task_prompt(&task, &[]).unwrap();
        assert!(first.contains("Current task: Compare prices"));
        assert!(first.contains("Criteria for your final answer: A table"));
        assert!(!first.contains("earlier tasks"));

        let prior = vec![TaskContext {
            role: "AI Pricing Analyst".to_string(),
            output: "gpt-4o-mini: $0.15/1M input".to_string(),
        }];
        let second = renderer.task_prompt(&task, &prior).unwrap();
        assert!(second.contains("## AI Pricing Analyst"));
        assert!(second.contains("gpt-4o-mini: $0.15/1M input"));
    }

    #[test]
    fn test_output_is_not_html_escaped() {
        let renderer = PromptRenderer::new().unwrap();
        let task = TaskSpec::new("r", "Compare <models> & \"tiers\"", "x");
        let prompt = renderer.task_prompt(&task, &[]).unwrap();
        assert!(prompt.contains("Compare <models> & \"tiers\""));
    }
}
