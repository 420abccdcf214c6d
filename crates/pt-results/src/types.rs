//! Result data types.

use serde::{Deserialize, Serialize};

/// Machine-readable summary written next to the profile CSV.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RunSummary {
    pub project_name: String,
    pub solver_version: String,
    /// RFC 3339 wall-clock stamp of when the run finished.
    pub created_at: String,
    pub elements: usize,
    pub hours: usize,
    pub total_coupler_passes: usize,
    pub max_coupler_passes: usize,
    pub degraded_hours: usize,
}

impl RunSummary {
    /// Stamp a summary with the current wall-clock time.
    pub fn new(
        project_name: impl Into<String>,
        solver_version: impl Into<String>,
        elements: usize,
        hours: usize,
        total_coupler_passes: usize,
        max_coupler_passes: usize,
        degraded_hours: usize,
    ) -> Self {
        Self {
            project_name: project_name.into(),
            solver_version: solver_version.into(),
            created_at: chrono::Utc::now().to_rfc3339(),
            elements,
            hours,
            total_coupler_passes,
            max_coupler_passes,
            degraded_hours,
        }
    }
}
