//! RKF45 - Runge-Kutta-Fehlberg 4(5) embedded adaptive integrator.
//!
//! Reference
//! - E. Fehlberg, "Low-order classical Runge-Kutta formulas with stepsize
//!   control and their application to some heat transfer problems",
//!   NASA TR R-315 (1969).

use super::AdaptiveSettings;
use crate::{Error, Float, Rhs, Status, Trajectory};

/// Runge-Kutta-Fehlberg 4(5) adaptive-step integrator.
///
/// Integrates `dX/dt = f(t, X, p)` from `t0` to `tf`, choosing its own step
/// sizes to keep the local error per unit step below `settings.tol`. Each
/// attempt evaluates six stages and forms a fourth-order estimate `X1` and a
/// fifth-order estimate `X2`; the error measure is the largest componentwise
/// difference scaled by `1/dt`,
///
/// ```text
/// R = max_i |X1_i - X2_i| / dt
/// ```
///
/// A step with `R <= tol` is accepted and `(t + dt, X1)` is appended to the
/// trajectory; otherwise time does not advance. In both cases the step size
/// is rescaled by `s = (tol / 2R)^(1/4)`, so an accepted step also carries
/// its rescaled size into the next interval.
///
/// # Arguments
///
/// - `f`: right-hand side implementing [`Rhs`].
/// - `x0`: initial state at `t0`.
/// - `t0`, `tf`: integration span, `tf > t0`.
/// - `params`: parameter vector forwarded to every `f` call.
/// - `settings`: tolerance, accepted-step cap, and initial step guess.
///
/// # Returns
///
/// The trajectory of accepted `(t, X)` pairs. If the accepted-step cap is
/// reached before `tf`, the partial trajectory is returned with
/// [`Status::MaxIterReached`]; if the error measure turns NaN or infinite the
/// run stops with [`Status::StepNotFinite`].
///
/// # Errors
///
/// [`Error::EmptyState`], [`Error::InvalidTimeSpan`],
/// [`Error::InvalidTolerance`], or [`Error::InvalidStepSize`] on invalid
/// input.
pub fn rkf45<F>(
    f: &F,
    x0: &[Float],
    t0: Float,
    tf: Float,
    params: &[Float],
    settings: &AdaptiveSettings,
) -> Result<Trajectory, Error>
where
    F: Rhs,
{
    // --- Input validation ---
    if x0.is_empty() {
        return Err(Error::EmptyState);
    }
    if !(tf > t0) {
        return Err(Error::InvalidTimeSpan(t0, tf));
    }
    if !(settings.tol > 0.0) || !settings.tol.is_finite() {
        return Err(Error::InvalidTolerance(settings.tol));
    }
    if !(settings.dt_init > 0.0) || !settings.dt_init.is_finite() {
        return Err(Error::InvalidStepSize(settings.dt_init));
    }

    // --- Declarations ---
    let n = x0.len();
    let mut k1 = vec![0.0; n];
    let mut k2 = vec![0.0; n];
    let mut k3 = vec![0.0; n];
    let mut k4 = vec![0.0; n];
    let mut k5 = vec![0.0; n];
    let mut k6 = vec![0.0; n];
    let mut xs = vec![0.0; n];
    let mut x1 = vec![0.0; n];
    let mut x2 = vec![0.0; n];
    let mut dxdt = vec![0.0; n];
    let mut x = x0.to_vec();
    let mut t = t0;
    let mut dt = settings.dt_init;
    let mut nfev = 0;
    let mut naccpt = 0;
    let mut nrejct = 0;
    let mut status = Status::Success;
    let mut traj = Trajectory::with_initial(t0, x0.to_vec());

    // --- Main integration loop ---
    while t < tf {
        if naccpt >= settings.max_iter {
            status = Status::MaxIterReached;
            break;
        }

        // Never overshoot the end of the span
        dt = dt.min(tf - t);

        // Stage 1
        f.rhs(t, &x, params, &mut dxdt);
        for j in 0..n {
            k1[j] = dt * dxdt[j];
            xs[j] = x[j] + A21 * k1[j];
        }

        // Stage 2
        f.rhs(t + C2 * dt, &xs, params, &mut dxdt);
        for j in 0..n {
            k2[j] = dt * dxdt[j];
            xs[j] = x[j] + A31 * k1[j] + A32 * k2[j];
        }

        // Stage 3
        f.rhs(t + C3 * dt, &xs, params, &mut dxdt);
        for j in 0..n {
            k3[j] = dt * dxdt[j];
            xs[j] = x[j] + A41 * k1[j] + A42 * k2[j] + A43 * k3[j];
        }

        // Stage 4
        f.rhs(t + C4 * dt, &xs, params, &mut dxdt);
        for j in 0..n {
            k4[j] = dt * dxdt[j];
            xs[j] = x[j] + A51 * k1[j] + A52 * k2[j] + A53 * k3[j] + A54 * k4[j];
        }

        // Stage 5
        f.rhs(t + dt, &xs, params, &mut dxdt);
        for j in 0..n {
            k5[j] = dt * dxdt[j];
            xs[j] =
                x[j] + A61 * k1[j] + A62 * k2[j] + A63 * k3[j] + A64 * k4[j] + A65 * k5[j];
        }

        // Stage 6
        f.rhs(t + C6 * dt, &xs, params, &mut dxdt);
        for j in 0..n {
            k6[j] = dt * dxdt[j];
        }
        nfev += 6;

        // Fourth- and fifth-order candidates (k2 feeds the stages only)
        for j in 0..n {
            x1[j] = x[j] + B1 * k1[j] + B3 * k3[j] + B4 * k4[j] + B5 * k5[j];
            x2[j] = x[j]
                + BH1 * k1[j]
                + BH3 * k3[j]
                + BH4 * k4[j]
                + BH5 * k5[j]
                + BH6 * k6[j];
        }

        // Local error per unit step
        let mut r: Float = 0.0;
        for j in 0..n {
            r = r.max((x1[j] - x2[j]).abs() / dt);
        }

        if !r.is_finite() {
            status = Status::StepNotFinite;
            break;
        }

        // Step-size scale factor
        let s = if r != 0.0 {
            (settings.tol / (2.0 * r)).powf(0.25)
        } else {
            1.0
        };

        if r <= settings.tol {
            // Step accepted
            t += dt;
            x.copy_from_slice(&x1);
            traj.push(t, x1.clone());
            naccpt += 1;
        } else {
            // Step rejected; time does not advance
            nrejct += 1;
        }

        // Rescale after acceptance and rejection alike
        dt *= s;
    }

    traj.nfev = nfev;
    traj.naccpt = naccpt;
    traj.nrejct = nrejct;
    traj.status = status;
    Ok(traj)
}

// Fehlberg 4(5) Butcher tableau coefficients
const C2: Float = 1.0 / 4.0;
const C3: Float = 3.0 / 8.0;
const C4: Float = 12.0 / 13.0;
const C6: Float = 1.0 / 2.0;

const A21: Float = 1.0 / 4.0;
const A31: Float = 3.0 / 32.0;
const A32: Float = 9.0 / 32.0;
const A41: Float = 1932.0 / 2197.0;
const A42: Float = -7200.0 / 2197.0;
const A43: Float = 7296.0 / 2197.0;
const A51: Float = 439.0 / 216.0;
const A52: Float = -8.0;
const A53: Float = 3680.0 / 513.0;
const A54: Float = -845.0 / 4104.0;
const A61: Float = -8.0 / 27.0;
const A62: Float = 2.0;
const A63: Float = -3544.0 / 2565.0;
const A64: Float = 1859.0 / 4104.0;
const A65: Float = -11.0 / 40.0;

// Fourth-order weights
const B1: Float = 25.0 / 216.0;
const B3: Float = 1408.0 / 2565.0;
const B4: Float = 2197.0 / 4104.0;
const B5: Float = -1.0 / 5.0;

// Fifth-order weights
const BH1: Float = 16.0 / 135.0;
const BH3: Float = 6656.0 / 12825.0;
const BH4: Float = 28561.0 / 56430.0;
const BH5: Float = -9.0 / 50.0;
const BH6: Float = 2.0 / 55.0;
