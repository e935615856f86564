//! Configuration for pricing analysis runs
//!
//! Credentials come from the environment (optionally seeded from `.env`);
//! application settings come from an optional YAML file with per-key
//! defaults.

use crate::error::ConfigError;
use crew_llm::providers::openai::DEFAULT_OPENAI_API_BASE;
use crew_utils::load_settings_or_empty;
use serde_yaml::{Mapping, Value};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{debug, warn};

pub const OPENAI_API_KEY: &str = "OPENAI_API_KEY";
pub const TAVILY_API_KEY: &str = "TAVILY_API_KEY";
pub const OPENAI_API_BASE: &str = "OPENAI_API_BASE";

const DEFAULT_OUTPUT_DIRECTORY: &str = "reports";
const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// API keys for the external services
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    /// Reasoning model (`OPENAI_API_KEY`)
    pub reasoning_api_key: String,
    /// Web search (`TAVILY_API_KEY`)
    pub search_api_key: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("reasoning_api_key", &"<redacted>")
            .field("search_api_key", &"<redacted>")
            .finish()
    }
}

/// Severity threshold for console output
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogLevel {
    Debug,
    #[default]
    Info,
    Warning,
    Error,
    Critical,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warning => "WARNING",
            Self::Error => "ERROR",
            Self::Critical => "CRITICAL",
        }
    }

    /// Equivalent tracing filter directive
    pub fn directive(&self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warning => "warn",
            // tracing has no level above error
            Self::Error | Self::Critical => "error",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "DEBUG" => Ok(Self::Debug),
            "INFO" => Ok(Self::Info),
            "WARNING" | "WARN" => Ok(Self::Warning),
            "ERROR" => Ok(Self::Error),
            "CRITICAL" => Ok(Self::Critical),
            other => Err(format!("unknown log level '{other}'")),
        }
    }
}

/// Application settings
#[derive(Debug, Clone, PartialEq)]
pub struct AppSettings {
    pub debug_mode: bool,
    pub log_level: LogLevel,
    /// Where reports are written
    pub output_directory: PathBuf,
    /// Reasoning model identifier
    pub model: String,
    /// Base URL of the OpenAI-compatible API
    pub api_base: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            debug_mode: false,
            log_level: LogLevel::Info,
            output_directory: PathBuf::from(DEFAULT_OUTPUT_DIRECTORY),
            model: DEFAULT_MODEL.to_string(),
            api_base: DEFAULT_OPENAI_API_BASE.to_string(),
        }
    }
}

impl AppSettings {
    /// Console filter directive; debug mode overrides the configured level
    pub fn console_directive(&self) -> &'static str {
        if self.debug_mode {
            LogLevel::Debug.directive()
        } else {
            self.log_level.directive()
        }
    }
}

/// Validated configuration for one run
#[derive(Debug, Clone)]
pub struct Config {
    pub credentials: Credentials,
    pub settings: AppSettings,
}

/// Loads [`Config`] from the environment and an optional YAML file
pub struct ConfigManager;

impl ConfigManager {
    /// Load from `.env`, the process environment and `config_path`
    pub fn load(config_path: Option<&Path>) -> Result<Config, ConfigError> {
        match dotenvy::dotenv() {
            Ok(path) => debug!("Loaded environment from {}", path.display()),
            Err(e) if e.not_found() => debug!("No .env file found"),
            Err(e) => warn!("Failed to load .env file: {e}"),
        }
        Self::load_with(config_path, |name| std::env::var(name).ok())
    }

    /// Load with an explicit environment lookup
    pub fn load_with<F>(config_path: Option<&Path>, env: F) -> Result<Config, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let credentials = Self::credentials(&env)?;

        let overlay = match config_path {
            Some(path) if path.exists() => load_settings_or_empty(path),
            Some(path) => {
                debug!("No config file at {}, using defaults", path.display());
                Mapping::new()
            }
            None => Mapping::new(),
        };

        let mut settings = Self::settings(&overlay);
        if let Some(api_base) = env(OPENAI_API_BASE).filter(|v| !v.trim().is_empty()) {
            settings.api_base = api_base;
        }

        Ok(Config {
            credentials,
            settings,
        })
    }

    fn credentials<F>(env: &F) -> Result<Credentials, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |name: &str| env(name).filter(|v| !v.is_empty());
        let reasoning = lookup(OPENAI_API_KEY);
        let search = lookup(TAVILY_API_KEY);

        match (reasoning, search) {
            (Some(reasoning_api_key), Some(search_api_key)) => Ok(Credentials {
                reasoning_api_key,
                search_api_key,
            }),
            (reasoning, search) => {
                let missing = [(OPENAI_API_KEY, reasoning), (TAVILY_API_KEY, search)]
                    .into_iter()
                    .filter(|(_, value)| value.is_none())
                    .map(|(name, _)| name.to_string())
                    .collect();
                Err(ConfigError::MissingEnvVars(missing))
            }
        }
    }

    fn settings(overlay: &Mapping) -> AppSettings {
        let defaults = AppSettings::default();

        AppSettings {
            debug_mode: setting(overlay, "debug_mode", Value::as_bool)
                .unwrap_or(defaults.debug_mode),
            log_level: setting(overlay, "log_level", |v| v.as_str()?.parse().ok())
                .unwrap_or(defaults.log_level),
            output_directory: setting(overlay, "output_directory", |v| {
                v.as_str().map(PathBuf::from)
            })
            .unwrap_or(defaults.output_directory),
            model: setting(overlay, "model", |v| v.as_str().map(str::to_string))
                .unwrap_or(defaults.model),
            api_base: setting(overlay, "api_base", |v| v.as_str().map(str::to_string))
                .unwrap_or(defaults.api_base),
        }
    }
}

/// Read one key, warning when it is present but unusable
fn setting<T>(overlay: &Mapping, key: &str, parse: impl Fn(&Value) -> Option<T>) -> Option<T> {
    let value = overlay.get(key)?;
    let parsed = parse(value);
    if parsed.is_none() {
        warn!("Ignoring invalid value for '{key}' in config file: {value:?}");
    }
    parsed
}
