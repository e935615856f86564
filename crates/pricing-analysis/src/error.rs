//! Error types for pricing analysis

use std::path::PathBuf;
use thiserror::Error;

/// Startup configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Every required variable that was absent or empty
    #[error("Missing required environment variables: {}", .0.join(", "))]
    MissingEnvVars(Vec<String>),
}

/// Report formatting or persistence errors
#[derive(Debug, Error)]
pub enum ReportError {
    /// Could not create the output directory or write the file
    #[error("Failed to write report {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// JSON serialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors from an analysis run
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The crew definition was rejected
    #[error("Invalid crew: {0}")]
    Crew(#[from] crew_core::CrewError),

    /// The execution engine failed
    #[error("Crew execution failed: {0}")]
    Execution(#[from] crew_core::Error),

    /// The reasoning-model client could not be built
    #[error("LLM client error: {0}")]
    Llm(#[from] crew_llm::LLMError),

    #[error("Report error: {0}")]
    Report(#[from] ReportError),
}
