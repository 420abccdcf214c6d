//! Error types for simulation runs.

use pt_material::MaterialError;
use pt_mesh::MeshError;
use pt_solver::SolverError;
use thiserror::Error;

/// Errors encountered while driving the hourly march.
#[derive(Error, Debug)]
pub enum SimError {
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Mesh error: {0}")]
    Mesh(#[from] MeshError),

    #[error("Material error: {0}")]
    Material(#[from] MaterialError),

    #[error("Numerical failure at hour {hour}, sub-step {substep}: {source}")]
    Numeric {
        hour: usize,
        substep: usize,
        #[source]
        source: SolverError,
    },

    #[error(
        "Phase-change coupling failed to converge at hour {hour}, sub-step {substep} \
         ({passes} passes, residual {residual:.3e})"
    )]
    ConvergenceFailed {
        hour: usize,
        substep: usize,
        passes: usize,
        residual: f64,
    },
}

pub type SimResult<T> = Result<T, SimError>;
