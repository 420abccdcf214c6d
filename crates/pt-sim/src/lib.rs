//! pt-sim: hourly time-stepping driver for the slab conduction model.
//!
//! One hour of weather forcing is split into `steps_per_hour` implicit
//! sub-steps. Each sub-step runs the phase-change coupler to convergence,
//! then refreshes thermal properties and the conduction bands because the
//! accepted liquid-fraction field generally changed diffusivity.

pub mod driver;
pub mod error;
pub mod model;

pub use driver::{run_simulation, HourResult, RunStats, SimOptions, SimRecord};
pub use error::{SimError, SimResult};
pub use model::SlabModel;
