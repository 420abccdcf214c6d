//! Hourly march and sub-step sequencing.

use nalgebra::DVector;
use pt_material::{equilibrium_fractions, update_element_properties};
use pt_solver::{
    assemble_conduction, couple_substep, PicardConfig, SubstepInputs, TridiagonalSystem,
};
use pt_weather::{convection, longwave, solar, Timestamp, WeatherRecord};
use tracing::{info, warn};

use crate::error::{SimError, SimResult};
use crate::model::SlabModel;

/// Options for simulation runs.
#[derive(Clone, Debug)]
pub struct SimOptions {
    /// Sub-steps per hour (`nt`); each sub-step spans `3600 / nt` seconds.
    pub steps_per_hour: usize,
    /// Under-relaxation factor for the phase-change coupler, in (0, 1].
    pub under_relaxation: f64,
    /// Pass cap for the phase-change coupler.
    pub max_coupler_passes: usize,
    /// Near-surface temperature-gradient constant (degrees C per m).
    pub surface_gradient_c_per_m: f64,
    /// Accept the last candidate fields on a convergence failure instead of
    /// aborting the run; the hour is counted as degraded.
    pub continue_on_convergence_failure: bool,
}

impl Default for SimOptions {
    fn default() -> Self {
        Self {
            steps_per_hour: 24,
            under_relaxation: 0.7,
            max_coupler_passes: 100,
            surface_gradient_c_per_m: -0.1,
            continue_on_convergence_failure: false,
        }
    }
}

impl SimOptions {
    fn validate(&self) -> SimResult<()> {
        if self.steps_per_hour == 0 {
            return Err(SimError::InvalidArg {
                what: "steps_per_hour must be positive",
            });
        }
        if !(self.under_relaxation > 0.0 && self.under_relaxation <= 1.0) {
            return Err(SimError::InvalidArg {
                what: "under_relaxation must be in (0, 1]",
            });
        }
        if self.max_coupler_passes == 0 {
            return Err(SimError::InvalidArg {
                what: "max_coupler_passes must be positive",
            });
        }
        if !self.surface_gradient_c_per_m.is_finite() {
            return Err(SimError::InvalidArg {
                what: "surface_gradient_c_per_m must be finite",
            });
        }
        Ok(())
    }
}

/// Converged state at the end of one weather hour.
#[derive(Clone, Debug)]
pub struct HourResult {
    pub timestamp: Timestamp,
    /// Temperature per element (degrees C), surface to depth.
    pub temperature_c: Vec<f64>,
    /// Liquid fraction per element.
    pub liquid_fraction: Vec<f64>,
    /// True when some sub-step of this hour hit the coupler pass cap.
    pub degraded: bool,
}

/// Aggregate counters for a run.
#[derive(Clone, Copy, Debug, Default)]
pub struct RunStats {
    /// Coupler passes summed over all sub-steps.
    pub total_passes: usize,
    /// Largest pass count seen in any sub-step.
    pub max_passes: usize,
    /// Hours accepted with a non-converged sub-step.
    pub degraded_hours: usize,
}

/// Record of a full run: one entry per weather hour, in order.
#[derive(Clone, Debug)]
pub struct SimRecord {
    pub hours: Vec<HourResult>,
    pub stats: RunStats,
}

/// March the model through the weather sequence.
///
/// Strictly sequential: each hour's `nt` sub-steps start from the previous
/// sub-step's accepted fields, and an hour is complete before the next
/// begins.
pub fn run_simulation(
    model: &SlabModel,
    weather: &[WeatherRecord],
    opts: &SimOptions,
) -> SimResult<SimRecord> {
    opts.validate()?;
    let Some(first) = weather.first() else {
        return Err(SimError::InvalidArg {
            what: "weather must contain at least one record",
        });
    };

    let mesh = &model.mesh;
    let layers = &model.layers;
    let n = mesh.len();
    let nt = opts.steps_per_hour;
    let dt_s = 3600.0 / nt as f64;

    let elem_layer: Vec<usize> = mesh
        .elements()
        .iter()
        .map(|e| e.layer.index() as usize)
        .collect();
    let equilibrium =
        |j: usize, t_c: f64| layers[elem_layer[j]].equilibrium_fraction(t_c);

    // The absorbed-flux normalization uses the outermost layer's solid matrix.
    let surface_rho_c = layers[0].matrix().density_si() * layers[0].matrix().heat_capacity_si();

    let picard = PicardConfig {
        max_passes: opts.max_coupler_passes,
        relaxation: opts.under_relaxation,
        ..PicardConfig::default()
    };

    // Initial fields: uniform at the first record's air temperature, liquid
    // fractions at their equilibrium values for that temperature.
    let mut t = DVector::from_element(n, first.air_temp_c);
    let mut fl = DVector::from_vec(equilibrium_fractions(mesh, layers, t.as_slice())?);

    let mut props = update_element_properties(mesh, layers, fl.as_slice())?;
    let mut system = assemble(mesh, &props.alpha, dt_s, 0, 0)?;

    let mut hours = Vec::with_capacity(weather.len());
    let mut stats = RunStats::default();

    for (hour, record) in weather.iter().enumerate() {
        // Absorbed solar input is held constant over the hour.
        let solarrad = solar(record);
        let mut degraded = false;

        for substep in 0..nt {
            let t_surface = t[0];
            let q_lw = longwave(record, t_surface, model.surface.emissivity);
            let q_conv = convection(record, t_surface);
            let albedo = model.surface.albedo(t_surface);
            let qrad = (solarrad * (1.0 - albedo) + q_lw + q_conv) / surface_rho_c;

            let inputs = SubstepInputs {
                mesh,
                alpha: &props.alpha,
                delta_h: &props.delta_h,
                dt_s,
                qrad,
                xi: opts.surface_gradient_c_per_m,
            };
            let solution = couple_substep(&system, &inputs, &t, &fl, equilibrium, &picard)
                .map_err(|source| SimError::Numeric {
                    hour,
                    substep,
                    source,
                })?;

            stats.total_passes += solution.passes;
            stats.max_passes = stats.max_passes.max(solution.passes);

            if !solution.converged {
                if !opts.continue_on_convergence_failure {
                    return Err(SimError::ConvergenceFailed {
                        hour,
                        substep,
                        passes: solution.passes,
                        residual: solution.residual,
                    });
                }
                warn!(
                    hour,
                    substep,
                    residual = solution.residual,
                    "accepting non-converged sub-step"
                );
                degraded = true;
            }

            t = solution.temperature;
            fl = solution.liquid_fraction;

            // The accepted liquid fraction changed diffusivity; stale bands
            // would silently corrupt the next sub-step.
            props = update_element_properties(mesh, layers, fl.as_slice())?;
            system = assemble(mesh, &props.alpha, dt_s, hour, substep)?;
        }

        info!(hour = hour + 1, total = weather.len(), "hour complete");
        if degraded {
            stats.degraded_hours += 1;
        }
        hours.push(HourResult {
            timestamp: record.timestamp,
            temperature_c: t.as_slice().to_vec(),
            liquid_fraction: fl.as_slice().to_vec(),
            degraded,
        });
    }

    Ok(SimRecord { hours, stats })
}

fn assemble(
    mesh: &pt_mesh::Mesh,
    alpha: &[f64],
    dt_s: f64,
    hour: usize,
    substep: usize,
) -> SimResult<TridiagonalSystem> {
    assemble_conduction(mesh, alpha, dt_s).map_err(|source| SimError::Numeric {
        hour,
        substep,
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_defaults() {
        let opts = SimOptions::default();
        assert_eq!(opts.steps_per_hour, 24);
        assert_eq!(opts.max_coupler_passes, 100);
        assert!(opts.validate().is_ok());
    }

    #[test]
    fn options_rejected() {
        let mut opts = SimOptions::default();
        opts.steps_per_hour = 0;
        assert!(opts.validate().is_err());

        let mut opts = SimOptions::default();
        opts.under_relaxation = 0.0;
        assert!(opts.validate().is_err());

        let mut opts = SimOptions::default();
        opts.under_relaxation = 1.5;
        assert!(opts.validate().is_err());

        let mut opts = SimOptions::default();
        opts.max_coupler_passes = 0;
        assert!(opts.validate().is_err());
    }
}
