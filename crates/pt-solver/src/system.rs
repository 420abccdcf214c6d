//! Tridiagonal assembly for implicit 1-D conduction on a non-uniform mesh.

use nalgebra::DVector;
use pt_mesh::Mesh;

use crate::error::{SolverError, SolverResult};

/// The `a, b, c` bands of the implicit conduction operator.
///
/// Depends only on mesh geometry, the diffusivity field and the time step;
/// rebuild whenever any of those change. Coefficients left stale after a
/// thermal-property update are a correctness bug, not a performance issue.
#[derive(Debug, Clone)]
pub struct TridiagonalSystem {
    pub a: Vec<f64>,
    pub b: Vec<f64>,
    pub c: Vec<f64>,
}

/// Per-sub-step scalar inputs shared by every right-hand-side build.
#[derive(Debug, Clone, Copy)]
pub struct SubstepInputs<'m> {
    pub mesh: &'m Mesh,
    /// Diffusivity per element (m^2/s).
    pub alpha: &'m [f64],
    /// Enthalpy-release term per element (K per unit liquid fraction).
    pub delta_h: &'m [f64],
    /// Sub-step length (s).
    pub dt_s: f64,
    /// Net surface energy term pre-divided by the surface layer's
    /// solid-matrix rho*c (K*m/s).
    pub qrad: f64,
    /// Near-surface temperature-gradient constant (degrees C per m).
    pub xi: f64,
}

/// Harmonic-mean interface diffusivity between neighboring elements.
fn interface_alpha(a_i: f64, a_j: f64) -> f64 {
    2.0 * a_i * a_j / (a_i + a_j)
}

/// Assemble the implicit (backward-Euler) conduction bands.
///
/// Interior rows couple each element to its neighbors through harmonic-mean
/// diffusivities over the midpoint spacings. The surface row carries no
/// upward coupling (flux enters through the RHS); the bottom row is
/// adiabatic.
pub fn assemble_conduction(
    mesh: &Mesh,
    alpha: &[f64],
    dt_s: f64,
) -> SolverResult<TridiagonalSystem> {
    let n = mesh.len();
    if alpha.len() != n {
        return Err(SolverError::IllFormed {
            what: format!("diffusivity length {} does not match mesh {}", alpha.len(), n),
        });
    }
    if !(dt_s > 0.0) {
        return Err(SolverError::IllFormed {
            what: format!("time step must be positive, got {dt_s}"),
        });
    }
    for (i, &al) in alpha.iter().enumerate() {
        if !al.is_finite() || al <= 0.0 {
            return Err(SolverError::NonFinite {
                what: "diffusivity",
                index: i,
            });
        }
    }

    let e = mesh.elements();
    let mut a = vec![0.0; n];
    let mut b = vec![0.0; n];
    let mut c = vec![0.0; n];

    for j in 0..n {
        let w_minus = if j > 0 {
            let spacing = e[j].x_m - e[j - 1].x_m;
            dt_s * interface_alpha(alpha[j - 1], alpha[j]) / (e[j].dx_m * spacing)
        } else {
            0.0
        };
        let w_plus = if j < n - 1 {
            let spacing = e[j + 1].x_m - e[j].x_m;
            dt_s * interface_alpha(alpha[j], alpha[j + 1]) / (e[j].dx_m * spacing)
        } else {
            0.0
        };
        a[j] = -w_minus;
        c[j] = -w_plus;
        b[j] = 1.0 + w_minus + w_plus;
    }

    Ok(TridiagonalSystem { a, b, c })
}

/// Build the right-hand side for one Picard pass.
///
/// `t_old` is the working temperature field, `fl_ref` the liquid fraction
/// accepted at the start of the sub-step, and `fl` the current guess. The
/// latent source releases the enthalpy implied by the `fl_ref -> fl` change;
/// because `fl` moves every pass, this vector is rebuilt every pass even
/// though the bands are not.
pub fn build_rhs(
    inputs: &SubstepInputs,
    t_old: &DVector<f64>,
    fl_ref: &DVector<f64>,
    fl: &DVector<f64>,
) -> DVector<f64> {
    let e = inputs.mesh.elements();
    let mut d = DVector::from_fn(e.len(), |j, _| {
        t_old[j] + inputs.delta_h[j] * (fl_ref[j] - fl[j])
    });
    // Surface flux plus the fixed near-surface gradient term.
    d[0] += inputs.dt_s * (inputs.qrad + inputs.alpha[0] * inputs.xi) / e[0].dx_m;
    d
}
