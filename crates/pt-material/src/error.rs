//! Error types for material models.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MaterialError {
    #[error("Non-physical material parameter: {what}")]
    NonPhysical { what: &'static str },

    #[error("Mesh has {mesh} layers but {layers} layer models were supplied")]
    LayerCountMismatch { mesh: usize, layers: usize },

    #[error("Field '{field}' has length {got}, expected {expected}")]
    FieldLengthMismatch {
        field: &'static str,
        expected: usize,
        got: usize,
    },
}

pub type MaterialResult<T> = Result<T, MaterialError>;

impl From<pt_core::PtError> for MaterialError {
    fn from(e: pt_core::PtError) -> Self {
        match e {
            pt_core::PtError::NonFinite { what, .. } => MaterialError::NonPhysical { what },
            pt_core::PtError::InvalidArg { what } => MaterialError::NonPhysical { what },
        }
    }
}
