//! Agent descriptors

use crate::tool::Tool;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Identifier that binds an agent to its task inside a [`Crew`](crate::Crew)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RoleId(String);

impl RoleId {
    /// Create a role identifier
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RoleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RoleId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for RoleId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A named role with a goal, a backstory, and the tools it may call
///
/// Agents are plain descriptors: they carry no behavior of their own. An
/// [`ExecutionEngine`](crate::ExecutionEngine) turns them into prompts and
/// drives the tool calls.
///
/// # Example
///
/// ```
/// use crew_core::AgentSpec;
///
/// let agent = AgentSpec::new(
///     "AI Pricing Analyst",
///     "Gather current model pricing",
///     "You are an expert in AI model pricing.",
/// )
/// .verbose(true);
///
/// assert_eq!(agent.role(), "AI Pricing Analyst");
/// assert!(agent.tools().is_empty());
/// ```
#[derive(Clone)]
pub struct AgentSpec {
    role: String,
    goal: String,
    backstory: String,
    tools: Vec<Arc<dyn Tool>>,
    verbose: bool,
}

impl AgentSpec {
    /// Create an agent with no tools
    pub fn new(
        role: impl Into<String>,
        goal: impl Into<String>,
        backstory: impl Into<String>,
    ) -> Self {
        Self {
            role: role.into(),
            goal: goal.into(),
            backstory: backstory.into(),
            tools: Vec::new(),
            verbose: false,
        }
    }

    /// Bind a tool to this agent
    pub fn with_tool(mut self, tool: Arc<dyn Tool>) -> Self {
        self.tools.push(tool);
        self
    }

    /// Replace the bound tools
    pub fn with_tools(mut self, tools: Vec<Arc<dyn Tool>>) -> Self {
        self.tools = tools;
        self
    }

    /// Request verbose progress logging for this agent
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn role(&self) -> &str {
        &self.role
    }

    pub fn goal(&self) -> &str {
        &self.goal
    }

    pub fn backstory(&self) -> &str {
        &self.backstory
    }

    pub fn tools(&self) -> &[Arc<dyn Tool>] {
        &self.tools
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose
    }
}

impl fmt::Debug for AgentSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tool_names: Vec<&str> = self.tools.iter().map(|t| t.name()).collect();
        f.debug_struct("AgentSpec")
            .field("role", &self.role)
            .field("goal", &self.goal)
            .field("tools", &tool_names)
            .field("verbose", &self.verbose)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde_json::{Value, json};

    struct EchoTool;

    #[async_trait]
    impl Tool for EchoTool {
        async fn execute(&self, params: Value) -> crate::Result<Value> {
            Ok(params)
        }

        fn name(&self) -> &str {
            "Echo"
        }

        fn description(&self) -> &str {
            "Echo the input"
        }

        fn input_schema(&self) -> Value {
            json!({"type": "object"})
        }
    }

    #[test]
    fn test_agent_builder() {
        let agent = AgentSpec::new("role", "goal", "backstory")
            .with_tool(Arc::new(EchoTool))
            .verbose(true);

        assert_eq!(agent.role(), "role");
        assert_eq!(agent.goal(), "goal");
        assert_eq!(agent.backstory(), "backstory");
        assert_eq!(agent.tools().len(), 1);
        assert!(agent.is_verbose());
    }

    #[test]
    fn test_debug_lists_tool_names() {
        let agent = AgentSpec::new("role", "goal", "backstory").with_tool(Arc::new(EchoTool));
        let debug = format!("{agent:?}");
        assert!(debug.contains("Echo"));
    }

    #[test]
    fn test_role_id_conversions() {
        let id: RoleId = "pricing".into();
        assert_eq!(id.as_str(), "pricing");
        assert_eq!(id.to_string(), "pricing");
        assert_eq!(RoleId::from("pricing".to_string()), id);
    }
}
