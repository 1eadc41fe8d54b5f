//! Modified Euler (Heun predictor-corrector) method.

use crate::{Error, Float, Rhs, Trajectory};

/// Modified Euler's method over the time grid `t`.
///
/// Per step: `k1 = dt * f(t[i], X[i], p)`, then the corrector slope is
/// evaluated at the raw predictor state, `k2 = dt * f(t[i+1], X[i] + k1, p)`,
/// and `X[i+1] = X[i] + (k1 + k2) / 2`.
///
/// The corrector is deliberately *not* iterated to convergence; evaluating at
/// the predicted endpoint is the defining trait of this scheme.
///
/// # Errors
///
/// Same validation as [`euler`](super::euler).
pub fn mod_euler<F>(
    f: &F,
    x0: &[Float],
    t: &[Float],
    params: &[Float],
) -> Result<Trajectory, Error>
where
    F: Rhs,
{
    super::validate(x0, t)?;

    let n = x0.len();
    let mut x = x0.to_vec();
    let mut xt = vec![0.0; n];
    let mut k1 = vec![0.0; n];
    let mut dxdt = vec![0.0; n];
    let mut traj = Trajectory::with_initial(t[0], x0.to_vec());

    for i in 0..t.len() - 1 {
        let dt = t[i + 1] - t[i];

        // Predictor
        f.rhs(t[i], &x, params, &mut dxdt);
        for j in 0..n {
            k1[j] = dt * dxdt[j];
            xt[j] = x[j] + k1[j];
        }

        // Corrector slope at the predicted endpoint
        f.rhs(t[i + 1], &xt, params, &mut dxdt);
        for j in 0..n {
            let k2 = dt * dxdt[j];
            x[j] += 0.5 * (k1[j] + k2);
        }

        traj.push(t[i + 1], x.clone());
    }

    traj.nfev = 2 * (t.len() - 1);
    traj.naccpt = t.len() - 1;
    Ok(traj)
}
