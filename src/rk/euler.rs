//! Euler's method.

use crate::{Error, Float, Rhs, Trajectory};

/// Euler's (explicit first-order) method over the time grid `t`.
///
/// Advances `X[i+1] = X[i] + dt * f(t[i], X[i], p)` with `dt = t[i+1] - t[i]`
/// and returns the state at every grid point. First-order accurate, no error
/// estimate.
///
/// # Errors
///
/// [`Error::EmptyState`] for an empty initial state, [`Error::DegenerateGrid`]
/// when `t` has fewer than two points or is not strictly increasing.
pub fn euler<F>(f: &F, x0: &[Float], t: &[Float], params: &[Float]) -> Result<Trajectory, Error>
where
    F: Rhs,
{
    super::validate(x0, t)?;

    let n = x0.len();
    let mut x = x0.to_vec();
    let mut dxdt = vec![0.0; n];
    let mut traj = Trajectory::with_initial(t[0], x0.to_vec());

    for i in 0..t.len() - 1 {
        let dt = t[i + 1] - t[i];
        f.rhs(t[i], &x, params, &mut dxdt);
        for j in 0..n {
            x[j] += dt * dxdt[j];
        }
        traj.push(t[i + 1], x.clone());
    }

    traj.nfev = t.len() - 1;
    traj.naccpt = t.len() - 1;
    Ok(traj)
}
