//! Shared utilities for crew applications
//!
//! Logging setup with a console layer and a per-process log file, and loading
//! of optional YAML settings files.

pub mod config;
pub mod logging;

pub use config::{SettingsFileError, load_settings_file, load_settings_or_empty};
pub use logging::{LogHandle, LoggingError, init_logging};
