//! AI model pricing analysis
//!
//! A crew of three analysts researches current AI model pricing with a web
//! search tool and a reasoning model:
//!
//! - `AI Pricing Analyst`: collects per-model prices
//! - `AI Technical Analyst`: compares capabilities against cost
//! - `AI Market Strategy Analyst`: positions providers and recommends models
//!
//! Tasks run in that order, each seeing the results of the ones before it. The
//! final answer is wrapped in a text report and written to the output
//! directory.
//!
//! # Example
//!
//! ```rust,ignore
//! use pricing_analysis::{ConfigManager, PricingAnalyzer};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ConfigManager::load(None)?;
//!     let analyzer = PricingAnalyzer::from_config(&config)?;
//!     println!("{}", analyzer.run_analysis().await?);
//!     Ok(())
//! }
//! ```

pub mod agents;
pub mod analyzer;
pub mod config;
pub mod error;
pub mod report;
pub mod tasks;

pub use agents::{AnalystRole, PricingAgents};
pub use analyzer::PricingAnalyzer;
pub use config::{AppSettings, Config, ConfigManager, Credentials, LogLevel};
pub use error::{AnalysisError, ConfigError, ReportError};
pub use report::{ModelPricing, ReportGenerator};
pub use tasks::PricingTasks;
