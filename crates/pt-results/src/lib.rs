//! pt-results: run output writers.
//!
//! Three artifacts per run: the hourly temperature-profile CSV, the
//! fixed-format pavement report restricted to the outermost layer, and a
//! machine-readable JSON run summary.

pub mod profile;
pub mod report;
pub mod types;

pub use profile::ProfileWriter;
pub use report::PavementReportWriter;
pub use types::RunSummary;

use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResultsError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Shape mismatch: {what}")]
    Shape { what: String },
}

pub type ResultsResult<T> = Result<T, ResultsError>;

pub fn save_summary(path: &Path, summary: &RunSummary) -> ResultsResult<()> {
    let content = serde_json::to_string_pretty(summary)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn load_summary(path: &Path) -> ResultsResult<RunSummary> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}
