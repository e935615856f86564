//! Research tasks, one per analyst

use crate::agents::AnalystRole;
use crew_core::TaskSpec;

pub struct PricingTasks;

impl PricingTasks {
    pub fn pricing_research() -> TaskSpec {
        TaskSpec::new(
            AnalystRole::Pricing,
            "Research and compile current pricing information for the OpenAI and Anthropic \
             model families. For each model find the price per million input tokens, the \
             price per million output tokens and the context window size. Note any volume \
             discounts, batch pricing or free tiers.",
            "A detailed pricing comparison table listing each model with its input price, \
             output price and context window, followed by notes on discounts and tiers.",
        )
    }

    pub fn technical_research() -> TaskSpec {
        TaskSpec::new(
            AnalystRole::Technical,
            "Research technical specifications of the models identified in the pricing \
             research: context length, modalities, tool use, benchmark results and latency. \
             Relate each capability to what it costs per request.",
            "A technical comparison matrix covering capabilities, limits and \
             cost-effectiveness for typical workloads.",
        )
    }

    pub fn market_analysis() -> TaskSpec {
        TaskSpec::new(
            AnalystRole::Market,
            "Analyze current market positioning and pricing strategies of OpenAI and \
             Anthropic using the pricing and technical findings. Identify which models lead \
             on price, which on capability, and recent pricing changes.",
            "A comprehensive market analysis report with positioning, pricing strategy \
             observations and recommendations for choosing a model by use case.",
        )
    }

    /// All tasks in execution order
    pub fn all() -> Vec<TaskSpec> {
        vec![
            Self::pricing_research(),
            Self::technical_research(),
            Self::market_analysis(),
        ]
    }
}
