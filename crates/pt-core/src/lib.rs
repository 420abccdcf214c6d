//! pt-core: stable foundation for pavetherm.
//!
//! Contains:
//! - units (uom SI types + constructors + physical constants)
//! - numeric (Real + float helpers)
//! - ids (stable compact IDs for mesh/layer objects)
//! - error (shared error types)

pub mod error;
pub mod ids;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{PtError, PtResult};
pub use ids::*;
pub use numeric::*;
pub use units::*;
