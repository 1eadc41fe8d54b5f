//! Classic explicit Runge-Kutta 4 (RK4) fixed-step integrator.

use crate::{Error, Float, Rhs, Trajectory};

/// Classical fourth-order Runge-Kutta method over the time grid `t`.
///
/// Four stages per step at offsets `0, dt/2, dt/2, dt`, combined as
/// `X[i+1] = X[i] + dt * (k1 + 2 k2 + 2 k3 + k4) / 6`.
///
/// # Errors
///
/// Same validation as [`euler`](super::euler).
pub fn rk4<F>(f: &F, x0: &[Float], t: &[Float], params: &[Float]) -> Result<Trajectory, Error>
where
    F: Rhs,
{
    super::validate(x0, t)?;

    let n = x0.len();
    let mut x = x0.to_vec();
    let mut xt = vec![0.0; n];
    let mut k1 = vec![0.0; n];
    let mut k2 = vec![0.0; n];
    let mut k3 = vec![0.0; n];
    let mut k4 = vec![0.0; n];
    let mut traj = Trajectory::with_initial(t[0], x0.to_vec());

    for i in 0..t.len() - 1 {
        let dt = t[i + 1] - t[i];

        f.rhs(t[i], &x, params, &mut k1);
        for j in 0..n {
            xt[j] = x[j] + dt * A21 * k1[j];
        }
        f.rhs(t[i] + C2 * dt, &xt, params, &mut k2);
        for j in 0..n {
            xt[j] = x[j] + dt * A32 * k2[j];
        }
        f.rhs(t[i] + C3 * dt, &xt, params, &mut k3);
        for j in 0..n {
            xt[j] = x[j] + dt * A43 * k3[j];
        }
        f.rhs(t[i] + C4 * dt, &xt, params, &mut k4);

        for j in 0..n {
            x[j] += dt * (B1 * k1[j] + B2 * k2[j] + B3 * k3[j] + B4 * k4[j]);
        }
        traj.push(t[i + 1], x.clone());
    }

    traj.nfev = 4 * (t.len() - 1);
    traj.naccpt = t.len() - 1;
    Ok(traj)
}

// Classical RK4 coefficients
const C2: Float = 0.5;
const C3: Float = 0.5;
const C4: Float = 1.0;
const A21: Float = 0.5;
const A32: Float = 0.5;
const A43: Float = 1.0;
const B1: Float = 1.0 / 6.0;
const B2: Float = 1.0 / 3.0;
const B3: Float = 1.0 / 3.0;
const B4: Float = 1.0 / 6.0;
