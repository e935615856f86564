//! AI model pricing analysis CLI
//!
//! # Usage
//!
//! ```bash
//! # Credentials, from the environment or a .env file
//! export OPENAI_API_KEY="sk-..."
//! export TAVILY_API_KEY="tvly-..."
//!
//! # Optional: OpenAI-compatible endpoint
//! export OPENAI_API_BASE="http://localhost:1234/v1"
//!
//! cargo run --bin pricing-analysis -- --config config/config.yaml
//! ```

use anyhow::Context;
use clap::Parser;
use pricing_analysis::{ConfigManager, PricingAnalyzer};
use std::path::{Path, PathBuf};
use tracing::{debug, error, info};

const LOG_DIR: &str = "logs";
const LOG_FILE_PREFIX: &str = "ai_pricing_analysis";

#[derive(Parser, Debug)]
#[command(name = "pricing-analysis")]
#[command(about = "Research and compare AI model pricing with a crew of analyst agents", long_about = None)]
struct Args {
    /// YAML settings file; defaults apply when it does not exist
    #[arg(short, long, default_value = "config/config.yaml")]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let logging = crew_utils::init_logging(Path::new(LOG_DIR), LOG_FILE_PREFIX)
        .context("failed to initialize logging")?;

    let result = run(&args, &logging).await;
    if let Err(e) = &result {
        error!("Application error: {e:#}");
    }
    result
}

async fn run(args: &Args, logging: &crew_utils::LogHandle) -> anyhow::Result<()> {
    let config = ConfigManager::load(Some(args.config.as_path()))?;
    logging.set_console_level(config.settings.console_directive())?;
    debug!(log_file = %logging.log_file().display(), settings = ?config.settings, "Configuration loaded");

    info!("Starting AI Model Pricing Analysis...");
    let analyzer = PricingAnalyzer::from_config(&config)?;
    let report = analyzer.run_analysis().await?;

    println!("\nAnalysis Report");
    println!("==============");
    println!("{report}");

    Ok(())
}
