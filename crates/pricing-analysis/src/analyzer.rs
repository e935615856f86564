//! Analysis coordinator
//!
//! Builds the crew, hands it to the execution engine and turns the result
//! into a saved report.

use crate::agents::PricingAgents;
use crate::config::{Config, Credentials};
use crate::error::AnalysisError;
use crate::report::ReportGenerator;
use crate::tasks::PricingTasks;
use crew_core::{Crew, ExecutionEngine, Tool};
use crew_llm::providers::{OpenAIConfig, OpenAIProvider};
use crew_runtime::{ExecutorConfig, SequentialEngine};
use crew_tools::{SearchConfig, SearchTool};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, error, info};

pub struct PricingAnalyzer {
    credentials: Credentials,
    engine: Arc<dyn ExecutionEngine>,
    reports: ReportGenerator,
}

impl PricingAnalyzer {
    pub fn new(
        credentials: Credentials,
        engine: Arc<dyn ExecutionEngine>,
        reports: ReportGenerator,
    ) -> Self {
        Self {
            credentials,
            engine,
            reports,
        }
    }

    /// Wire up the OpenAI-backed sequential engine from configuration
    pub fn from_config(config: &Config) -> Result<Self, AnalysisError> {
        let settings = &config.settings;
        let provider = OpenAIProvider::with_config(
            OpenAIConfig::new(config.credentials.reasoning_api_key.clone())
                .with_api_base(settings.api_base.clone()),
        )?;
        info!(model = %settings.model, api_base = %settings.api_base, "Using reasoning model");

        let engine = SequentialEngine::new(
            Arc::new(provider),
            ExecutorConfig::default().with_model(settings.model.clone()),
        )?;

        Ok(Self::new(
            config.credentials.clone(),
            Arc::new(engine),
            ReportGenerator::new(settings.output_directory.clone()),
        ))
    }

    /// The three analysts bound to their tasks
    pub fn build_crew(&self) -> Result<Crew, AnalysisError> {
        let search: Arc<dyn Tool> = Arc::new(SearchTool::new(SearchConfig::new(
            self.credentials.search_api_key.clone(),
        )));
        let agents = PricingAgents::new(search);

        let mut builder = Crew::builder().verbose(true);
        for (role, agent) in agents.all() {
            builder = builder.agent(role, agent);
        }
        for task in PricingTasks::all() {
            builder = builder.task(task);
        }
        Ok(builder.build()?)
    }

    /// Run the crew and return the formatted report
    pub async fn run_analysis(&self) -> Result<String, AnalysisError> {
        debug!("Starting execution of run_analysis");
        let start = Instant::now();

        match self.analyze().await {
            Ok(report) => {
                debug!("Completed run_analysis in {:?}", start.elapsed());
                Ok(report)
            }
            Err(e) => {
                error!("Error in analysis: {e}");
                Err(e)
            }
        }
    }

    async fn analyze(&self) -> Result<String, AnalysisError> {
        let crew = self.build_crew()?;
        debug!(members = crew.len(), "Crew assembled");

        let result = self.engine.execute(&crew).await?;
        Ok(self.reports.generate_report(&result)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agents::AnalystRole;
    use async_trait::async_trait;
    use crew_core::RoleId;
    use mockall::mock;

    mock! {
        Engine {}

        #[async_trait]
        impl ExecutionEngine for Engine {
            async fn execute(&self, crew: &Crew) -> crew_core::Result<String>;
            fn name(&self) -> &str;
        }
    }

    fn credentials() -> Credentials {
        Credentials {
            reasoning_api_key: "sk-test".to_string(),
            search_api_key: "tvly-test".to_string(),
        }
    }

    fn engine_returning(
        result: impl Fn() -> crew_core::Result<String> + Send + 'static,
    ) -> MockEngine {
        let mut engine = MockEngine::new();
        engine
            .expect_execute()
            .times(1)
            .returning(move |_| result());
        engine
    }

    #[test]
    fn test_crew_binds_each_role() {
        let dir = tempfile::tempdir().unwrap();
        let analyzer = PricingAnalyzer::new(
            credentials(),
            Arc::new(MockEngine::new()),
            ReportGenerator::new(dir.path()),
        );

        let crew = analyzer.build_crew().unwrap();
        assert!(crew.is_verbose());
        assert_eq!(crew.len(), 3);

        let pricing = crew.member(&RoleId::from(AnalystRole::Pricing)).unwrap();
        assert_eq!(pricing.agent.role(), "AI Pricing Analyst");
        assert_eq!(pricing.task, PricingTasks::pricing_research());

        let market = &crew.members()[2];
        assert_eq!(market.role, RoleId::from(AnalystRole::Market));
        assert_eq!(market.agent.role(), "AI Market Strategy Analyst");
    }

    #[tokio::test]
    async fn test_run_analysis_wraps_engine_output() {
        let dir = tempfile::tempdir().unwrap();
        let engine = engine_returning(|| Ok("Claude 3.5 Sonnet: $3 / $15".to_string()));
        let analyzer =
            PricingAnalyzer::new(credentials(), Arc::new(engine), ReportGenerator::new(dir.path()));

        let report = analyzer.run_analysis().await.unwrap();

        assert!(report.contains("AI Model Pricing Analysis Report"));
        assert!(report.contains("Claude 3.5 Sonnet: $3 / $15"));
    }

    #[tokio::test]
    async fn test_engine_failure_writes_no_report() {
        let dir = tempfile::tempdir().unwrap();
        let engine = engine_returning(|| {
            Err(crew_core::Error::ToolFailed {
                tool: "Search".to_string(),
                detail: "401 Unauthorized".to_string(),
            })
        });
        let analyzer =
            PricingAnalyzer::new(credentials(), Arc::new(engine), ReportGenerator::new(dir.path()));

        let err = analyzer.run_analysis().await.unwrap_err();

        assert!(matches!(
            err,
            AnalysisError::Execution(crew_core::Error::ToolFailed { .. })
        ));
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_from_config_uses_settings() {
        let config = Config {
            credentials: credentials(),
            settings: crate::config::AppSettings {
                output_directory: "custom-reports".into(),
                ..Default::default()
            },
        };

        let analyzer = PricingAnalyzer::from_config(&config).unwrap();
        assert_eq!(analyzer.reports.output_dir(), std::path::Path::new("custom-reports"));
        assert_eq!(analyzer.engine.name(), "sequential");
    }
}
