//! Under-relaxed Picard coupling of temperature and liquid fraction.
//!
//! Per sub-step the latent-heat source depends on liquid fraction and liquid
//! fraction depends on temperature. Rather than one monolithic nonlinear
//! solve, each pass solves temperature twice against a frozen fraction guess
//! (before and after relaxing the guess toward equilibrium) and accepts the
//! pair once the two temperature candidates agree.

use nalgebra::DVector;
use pt_core::numeric::max_abs_diff;

use crate::error::SolverResult;
use crate::system::{build_rhs, SubstepInputs, TridiagonalSystem};
use crate::tridiag::solve_tridiagonal;

/// Coupler configuration.
#[derive(Debug, Clone, Copy)]
pub struct PicardConfig {
    /// Maximum passes before the sub-step is declared non-converged.
    pub max_passes: usize,
    /// Acceptance threshold on max |T1 - T2| (degrees C).
    pub tolerance: f64,
    /// Under-relaxation factor in (0, 1].
    pub relaxation: f64,
}

impl Default for PicardConfig {
    fn default() -> Self {
        Self {
            max_passes: 100,
            tolerance: 1e-4,
            relaxation: 0.7,
        }
    }
}

/// Accepted (or last-candidate) state of one sub-step.
#[derive(Debug, Clone)]
pub struct SubstepSolution {
    pub temperature: DVector<f64>,
    pub liquid_fraction: DVector<f64>,
    /// Passes taken (equals `max_passes` when not converged).
    pub passes: usize,
    /// Final max |T1 - T2|.
    pub residual: f64,
    /// False when the pass cap was reached before the tolerance was met; the
    /// fields then hold the last candidate pair.
    pub converged: bool,
}

/// Run the coupling loop for one sub-step.
///
/// `t_old` and `fl_old` are the fields accepted at the end of the previous
/// sub-step; `equilibrium(j, t)` is the element's equilibrium
/// liquid-fraction-of-temperature curve. On a failed pass the working
/// temperature field is replaced by the second candidate and the guess by the
/// relaxed fraction, then the loop repeats; `fl_old` stays the reference for
/// the latent source throughout the sub-step.
pub fn couple_substep<F>(
    system: &TridiagonalSystem,
    inputs: &SubstepInputs,
    t_old: &DVector<f64>,
    fl_old: &DVector<f64>,
    equilibrium: F,
    config: &PicardConfig,
) -> SolverResult<SubstepSolution>
where
    F: Fn(usize, f64) -> f64,
{
    let mut t_ref = t_old.clone();
    let mut fl = fl_old.clone();

    let mut residual = f64::INFINITY;
    for pass in 1..=config.max_passes {
        let d = build_rhs(inputs, &t_ref, fl_old, &fl);
        let t1 = DVector::from_vec(solve_tridiagonal(
            &system.a, &system.b, &system.c, d.as_slice(),
        )?);

        let fl_new = DVector::from_fn(fl.len(), |j, _| {
            let target = equilibrium(j, t1[j]);
            (fl[j] + config.relaxation * (target - fl[j])).clamp(0.0, 1.0)
        });

        let d = build_rhs(inputs, &t_ref, fl_old, &fl_new);
        let t2 = DVector::from_vec(solve_tridiagonal(
            &system.a, &system.b, &system.c, d.as_slice(),
        )?);

        residual = max_abs_diff(t1.as_slice(), t2.as_slice());
        tracing::debug!(pass, residual, "phase-change pass");

        if residual < config.tolerance {
            return Ok(SubstepSolution {
                temperature: t2,
                liquid_fraction: fl_new,
                passes: pass,
                residual,
                converged: true,
            });
        }

        t_ref = t2;
        fl = fl_new;
    }

    Ok(SubstepSolution {
        temperature: t_ref,
        liquid_fraction: fl,
        passes: config.max_passes,
        residual,
        converged: false,
    })
}
