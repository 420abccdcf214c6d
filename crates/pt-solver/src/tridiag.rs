//! Thomas algorithm for tridiagonal systems.

use crate::error::{SolverError, SolverResult};

/// Pivots smaller than this are treated as singular.
const PIVOT_EPS: f64 = 1e-14;

/// Solve the tridiagonal system A x = d by forward elimination and back
/// substitution.
///
/// - `a`: sub-diagonal (a[0] unused)
/// - `b`: main diagonal
/// - `c`: super-diagonal (c[n-1] unused)
/// - `d`: right-hand side
///
/// All four must share length N >= 1. Runs in O(N). Returns `ZeroPivot` if a
/// pivot vanishes during elimination and `NonFinite` if the right-hand side
/// or the solution contains a non-finite value.
pub fn solve_tridiagonal(a: &[f64], b: &[f64], c: &[f64], d: &[f64]) -> SolverResult<Vec<f64>> {
    let n = d.len();
    if n == 0 || a.len() != n || b.len() != n || c.len() != n {
        return Err(SolverError::IllFormed {
            what: format!(
                "band lengths a={}, b={}, c={}, d={} (need equal, nonzero)",
                a.len(),
                b.len(),
                c.len(),
                n
            ),
        });
    }
    if let Some(i) = d.iter().position(|v| !v.is_finite()) {
        return Err(SolverError::NonFinite {
            what: "rhs",
            index: i,
        });
    }

    let mut c_prime = vec![0.0; n];
    let mut d_prime = vec![0.0; n];

    // Forward sweep
    if b[0].abs() < PIVOT_EPS {
        return Err(SolverError::ZeroPivot { row: 0 });
    }
    c_prime[0] = c[0] / b[0];
    d_prime[0] = d[0] / b[0];

    for i in 1..n {
        let den = b[i] - a[i] * c_prime[i - 1];
        if !den.is_finite() || den.abs() < PIVOT_EPS {
            return Err(SolverError::ZeroPivot { row: i });
        }
        if i < n - 1 {
            c_prime[i] = c[i] / den;
        }
        d_prime[i] = (d[i] - a[i] * d_prime[i - 1]) / den;
    }

    // Back substitution
    let mut x = vec![0.0; n];
    x[n - 1] = d_prime[n - 1];
    for i in (0..n - 1).rev() {
        x[i] = d_prime[i] - c_prime[i] * x[i + 1];
    }

    if let Some(i) = x.iter().position(|v| !v.is_finite()) {
        return Err(SolverError::NonFinite {
            what: "solution",
            index: i,
        });
    }
    Ok(x)
}
