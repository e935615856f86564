//! End-to-end analysis run with a canned execution engine

use async_trait::async_trait;
use crew_core::{Crew, ExecutionEngine};
use pricing_analysis::{ConfigManager, PricingAnalyzer, ReportGenerator};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Records which agent roles it saw and returns fixed text
struct CannedEngine {
    output: String,
    seen_roles: Mutex<Vec<String>>,
}

#[async_trait]
impl ExecutionEngine for CannedEngine {
    async fn execute(&self, crew: &Crew) -> crew_core::Result<String> {
        let mut seen = self.seen_roles.lock().unwrap();
        seen.extend(crew.members().iter().map(|m| m.agent.role().to_string()));
        Ok(self.output.clone())
    }
}

#[tokio::test]
async fn test_run_analysis_without_config_file() {
    let env: HashMap<&str, &str> = [("OPENAI_API_KEY", "sk-test"), ("TAVILY_API_KEY", "tvly-test")]
        .into_iter()
        .collect();
    let config =
        ConfigManager::load_with(None, |name| env.get(name).map(|v| (*v).to_string())).unwrap();

    let output_dir = tempfile::tempdir().unwrap();
    let engine = Arc::new(CannedEngine {
        output: "GPT-4o: $2.50 in / $10.00 out per 1M tokens".to_string(),
        seen_roles: Mutex::new(Vec::new()),
    });
    let analyzer = PricingAnalyzer::new(
        config.credentials,
        engine.clone(),
        ReportGenerator::new(output_dir.path()),
    );

    let report = analyzer.run_analysis().await.unwrap();

    assert!(report.contains("AI Model Pricing Analysis Report"));
    assert!(report.contains("GPT-4o: $2.50 in / $10.00 out per 1M tokens"));
    assert_eq!(
        *engine.seen_roles.lock().unwrap(),
        ["AI Pricing Analyst", "AI Technical Analyst", "AI Market Strategy Analyst"]
    );

    let saved: Vec<_> = std::fs::read_dir(output_dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .collect();
    assert_eq!(saved.len(), 1);
    assert_eq!(std::fs::read_to_string(&saved[0]).unwrap(), report);
}

#[test]
fn test_missing_credentials_fail_before_any_work() {
    let err = ConfigManager::load_with(None, |_| None).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("OPENAI_API_KEY"));
    assert!(message.contains("TAVILY_API_KEY"));
}
