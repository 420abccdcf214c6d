//! Error types for solver operations.

use thiserror::Error;

/// Errors that can occur while assembling or solving the conduction system.
#[derive(Error, Debug)]
pub enum SolverError {
    #[error("Ill-formed system: {what}")]
    IllFormed { what: String },

    #[error("Zero pivot at row {row} during tridiagonal elimination")]
    ZeroPivot { row: usize },

    #[error("Non-finite value in {what} at element {index}")]
    NonFinite { what: &'static str, index: usize },
}

pub type SolverResult<T> = Result<T, SolverError>;
