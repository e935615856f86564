//! Report formatting and persistence
//!
//! Reports are written to `<output_dir>/ai_pricing_analysis_<timestamp>.<ext>`
//! where the timestamp is `YYYY-MM-DD_HH-MM-SS` in local time. Two reports
//! generated within the same second share a file name.

use crate::error::ReportError;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{error, info};

/// Title line of every text report
pub const REPORT_TITLE: &str = "AI Model Pricing Analysis Report";

const JSON_REPORT_TYPE: &str = "AI Model Pricing Analysis";
const FILE_PREFIX: &str = "ai_pricing_analysis";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const TABLE_WIDTH: usize = 80;
const NOT_AVAILABLE: &str = "N/A";

/// Prices and limits for one model; any field may be unknown
///
/// Values are kept as JSON so `"$2.50"` and `128000` both render as written.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelPricing {
    pub input_price: Option<Value>,
    pub output_price: Option<Value>,
    pub context_window: Option<Value>,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    timestamp: &'a str,
    #[serde(rename = "type")]
    kind: &'static str,
    data: &'a Map<String, Value>,
}

/// Formats analysis output and saves it to disk
#[derive(Debug, Clone)]
pub struct ReportGenerator {
    output_dir: PathBuf,
}

impl ReportGenerator {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Wrap raw analysis text in the report template and save it
    ///
    /// The text is inserted verbatim.
    pub fn generate_report(&self, analysis: &str) -> Result<String, ReportError> {
        self.generate_report_at(analysis, Local::now())
    }

    fn generate_report_at(
        &self,
        analysis: &str,
        now: DateTime<Local>,
    ) -> Result<String, ReportError> {
        let timestamp = now.format(TIMESTAMP_FORMAT).to_string();
        let report = render_report(analysis, &timestamp);

        let path = self.save(&report, &timestamp, "txt").inspect_err(|e| {
            error!("Error saving report: {e}");
        })?;
        info!("Report saved to {}", path.display());

        Ok(report)
    }

    /// Save `data` as a JSON report and return the JSON text
    pub fn generate_json_report(&self, data: &Map<String, Value>) -> Result<String, ReportError> {
        let timestamp = Local::now().format(TIMESTAMP_FORMAT).to_string();

        let json = to_json(&JsonReport {
            timestamp: &timestamp,
            kind: JSON_REPORT_TYPE,
            data,
        })
        .inspect_err(|e| error!("Error generating JSON report: {e}"))?;

        let path = self.save(&json, &timestamp, "json").inspect_err(|e| {
            error!("Error generating JSON report: {e}");
        })?;
        info!("JSON report saved to {}", path.display());

        Ok(json)
    }

    /// Fixed-width comparison table; unknown fields render as `N/A`
    ///
    /// Rows keep the order of `pricing`.
    pub fn format_pricing_table(&self, pricing: &[(String, ModelPricing)]) -> String {
        let mut table = String::from("Model Pricing Comparison\n");
        table.push_str(&"=".repeat(TABLE_WIDTH));
        table.push('\n');
        table.push_str(&format!(
            "{:<20} {:<15} {:<15} {:<15}\n",
            "Model", "Input Price", "Output Price", "Context Window"
        ));
        table.push_str(&"-".repeat(TABLE_WIDTH));
        table.push('\n');

        for (model, data) in pricing {
            table.push_str(&format!(
                "{:<20} {:<15} {:<15} {:<15}\n",
                model,
                cell(data.input_price.as_ref()),
                cell(data.output_price.as_ref()),
                cell(data.context_window.as_ref()),
            ));
        }

        table
    }

    fn save(&self, contents: &str, timestamp: &str, extension: &str) -> Result<PathBuf, ReportError> {
        let path = self.output_dir.join(file_name(timestamp, extension));
        let io_error = |source| ReportError::Io {
            path: path.clone(),
            source,
        };

        fs::create_dir_all(&self.output_dir).map_err(io_error)?;
        fs::write(&path, contents).map_err(io_error)?;
        Ok(path)
    }
}

fn file_name(timestamp: &str, extension: &str) -> String {
    format!(
        "{FILE_PREFIX}_{}.{extension}",
        timestamp.replace(' ', "_").replace(':', "-")
    )
}

/// Strings render without quotes, everything else as JSON text
fn cell(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => NOT_AVAILABLE.to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

fn render_report(analysis: &str, timestamp: &str) -> String {
    format!(
        "\
{REPORT_TITLE}
==============================
Generated on: {timestamp}

Executive Summary
-----------------
This report provides a comprehensive analysis of AI model pricing,
technical capabilities, and market positioning for major AI providers.

Analysis Results
----------------
{analysis}

Methodology
-----------
This analysis was conducted using automated intelligence gathering
and analysis tools, with data verified from multiple sources.
"
    )
}

/// Pretty-print with four-space indentation
fn to_json<T: Serialize>(value: &T) -> Result<String, ReportError> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut serializer)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
