//! The three pricing analysts

use crew_core::{AgentSpec, RoleId, Tool};
use std::fmt;
use std::sync::Arc;

/// Identifies an analyst and the task it owns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnalystRole {
    Pricing,
    Technical,
    Market,
}

impl AnalystRole {
    /// All roles, in execution order
    pub const ALL: [Self; 3] = [Self::Pricing, Self::Technical, Self::Market];

    pub fn id(&self) -> &'static str {
        match self {
            Self::Pricing => "pricing",
            Self::Technical => "technical",
            Self::Market => "market",
        }
    }
}

impl fmt::Display for AnalystRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl From<AnalystRole> for RoleId {
    fn from(role: AnalystRole) -> Self {
        RoleId::new(role.id())
    }
}

/// Builds the analyst agents, all sharing one search tool
pub struct PricingAgents {
    search_tool: Arc<dyn Tool>,
}

impl PricingAgents {
    pub fn new(search_tool: Arc<dyn Tool>) -> Self {
        Self { search_tool }
    }

    pub fn pricing_analyst(&self) -> AgentSpec {
        AgentSpec::new(
            "AI Pricing Analyst",
            "Gather and analyze current pricing structures of Anthropic and OpenAI models",
            "You are an expert in AI model pricing and licensing. Your task is to search and \
             find the most current pricing information for AI models from OpenAI and Anthropic.",
        )
        .with_tool(Arc::clone(&self.search_tool))
        .verbose(true)
    }

    pub fn technical_analyst(&self) -> AgentSpec {
        AgentSpec::new(
            "AI Technical Analyst",
            "Research and compare technical capabilities and their cost implications",
            "You are a technical analyst specialized in AI model evaluation.",
        )
        .with_tool(Arc::clone(&self.search_tool))
        .verbose(true)
    }

    pub fn market_analyst(&self) -> AgentSpec {
        AgentSpec::new(
            "AI Market Strategy Analyst",
            "Research current market positioning and pricing strategies",
            "You are a strategic analyst focused on AI market dynamics.",
        )
        .with_tool(Arc::clone(&self.search_tool))
        .verbose(true)
    }

    pub fn agent(&self, role: AnalystRole) -> AgentSpec {
        match role {
            AnalystRole::Pricing => self.pricing_analyst(),
            AnalystRole::Technical => self.technical_analyst(),
            AnalystRole::Market => self.market_analyst(),
        }
    }

    /// Every analyst keyed by role, in execution order
    pub fn all(&self) -> Vec<(AnalystRole, AgentSpec)> {
        AnalystRole::ALL
            .into_iter()
            .map(|role| (role, self.agent(role)))
            .collect()
    }
}
