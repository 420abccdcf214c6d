//! pt-material: layer material models for the slab stack.
//!
//! A layer is a solid matrix with an optional embedded phase-change material
//! (PCM). Effective conductivity, heat capacity and density are blends of the
//! matrix and the PCM's frozen/melted states at the current liquid fraction;
//! from those the per-element diffusivity and enthalpy-release terms are
//! derived.

pub mod error;
pub mod layer;
pub mod material;
pub mod properties;

pub use error::{MaterialError, MaterialResult};
pub use layer::{EffectiveProps, Layer, PhaseChange};
pub use material::Material;
pub use properties::{equilibrium_fractions, update_element_properties, ElementProperties};
