//! Error types for mesh construction.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MeshError {
    #[error("Mesh has no layers")]
    NoLayers,

    #[error("Layer {layer} requests zero elements")]
    ZeroElements { layer: usize },

    #[error("Layer {layer} has non-positive thickness: {thickness_m} m")]
    NonPositiveThickness { layer: usize, thickness_m: f64 },
}

pub type MeshResult<T> = Result<T, MeshError>;
