//! Logging and tracing setup
//!
//! Two sinks share one registry:
//! - console: `LEVEL - message`, filter adjustable after startup
//! - file: one timestamped file per process, DEBUG for our crates with the
//!   HTTP stack held at INFO
//!
//! `RUST_LOG`, when set and valid, takes precedence over any level chosen at
//! runtime.

use chrono::Local;
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use thiserror::Error;
use tracing::{Event, Subscriber};
use tracing_subscriber::{
    EnvFilter, Layer, Registry,
    fmt::{self, FmtContext, FormatEvent, FormatFields, format::Writer},
    layer::SubscriberExt,
    registry::LookupSpan,
    reload,
    util::SubscriberInitExt,
};

const DEFAULT_CONSOLE_LEVEL: &str = "info";
const FILE_DIRECTIVES: &str = "debug,h2=info,hyper=info,hyper_util=info,reqwest=info,rustls=info";

#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("failed to create log file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid log filter '{directive}': {detail}")]
    InvalidDirective { directive: String, detail: String },

    #[error("failed to install subscriber: {0}")]
    Init(String),

    #[error("failed to update log filter: {0}")]
    Reload(String),
}

/// Handle to the installed subscriber
pub struct LogHandle {
    console_filter: reload::Handle<EnvFilter, Registry>,
    log_file: PathBuf,
}

impl LogHandle {
    /// Change the console level, e.g. `"debug"` or `"warn"`
    pub fn set_console_level(&self, level: &str) -> Result<(), LoggingError> {
        let rust_log = std::env::var("RUST_LOG").ok();
        let filter = console_filter(level, rust_log.as_deref())?;
        self.console_filter
            .reload(filter)
            .map_err(|e| LoggingError::Reload(e.to_string()))
    }

    /// Path of this process's log file
    pub fn log_file(&self) -> &Path {
        &self.log_file
    }
}

/// Install the global subscriber
///
/// Creates `log_dir` if needed and opens `<file_prefix>_<YYYYmmdd_HHMMSS>.log`
/// inside it. Fails if a global subscriber is already set.
pub fn init_logging(log_dir: &Path, file_prefix: &str) -> Result<LogHandle, LoggingError> {
    let (log_file, file) = create_log_file(log_dir, file_prefix)?;

    let rust_log = std::env::var("RUST_LOG").ok();
    let (filter, handle) =
        reload::Layer::new(console_filter(DEFAULT_CONSOLE_LEVEL, rust_log.as_deref())?);

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .event_format(ConsoleFormat)
                .with_writer(std::io::stdout)
                .with_filter(filter),
        )
        .with(
            fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .with_filter(file_filter()?),
        )
        .try_init()
        .map_err(|e| LoggingError::Init(e.to_string()))?;

    Ok(LogHandle {
        console_filter: handle,
        log_file,
    })
}

fn console_filter(level: &str, rust_log: Option<&str>) -> Result<EnvFilter, LoggingError> {
    if let Some(filter) = rust_log
        .filter(|s| !s.trim().is_empty())
        .and_then(|s| EnvFilter::try_new(s).ok())
    {
        return Ok(filter);
    }

    EnvFilter::try_new(level).map_err(|e| LoggingError::InvalidDirective {
        directive: level.to_string(),
        detail: e.to_string(),
    })
}

fn file_filter() -> Result<EnvFilter, LoggingError> {
    EnvFilter::try_new(FILE_DIRECTIVES).map_err(|e| LoggingError::InvalidDirective {
        directive: FILE_DIRECTIVES.to_string(),
        detail: e.to_string(),
    })
}

fn create_log_file(log_dir: &Path, file_prefix: &str) -> Result<(PathBuf, File), LoggingError> {
    fs::create_dir_all(log_dir)?;
    let path = log_dir.join(format!(
        "{file_prefix}_{}.log",
        Local::now().format("%Y%m%d_%H%M%S")
    ));
    let file = File::options().create(true).append(true).open(&path)?;
    Ok((path, file))
}

/// `LEVEL - message` console lines
struct ConsoleFormat;

impl<S, N> FormatEvent<S, N> for ConsoleFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        write!(writer, "{} - ", event.metadata().level())?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}
