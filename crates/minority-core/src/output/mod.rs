//! Output
//!
//! Console report formatting and JSON report files.

pub mod report;

pub use report::{
    format_count, format_win_line, render_scenario, scenario_report, section_heading,
    NO_WINNERS_LINE,
};

use std::fs;
use std::path::Path;

use minority_events::SimulationReport;
use thiserror::Error;

/// Default JSON report path
pub const REPORT_OUTPUT_PATH: &str = "output/report.json";

/// Errors writing report files
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Write the report as pretty JSON, creating parent directories as needed
pub fn write_report(report: &SimulationReport, path: impl AsRef<Path>) -> Result<(), OutputError> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    let json = report.to_json_pretty()?;
    fs::write(path, json)?;
    Ok(())
}
