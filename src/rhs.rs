//! User-supplied ODE right-hand side.

use crate::Float;

/// Right-hand side of the system `dX/dt = f(t, X, params)`.
///
/// Implement this trait for your problem. The integrators repeatedly call
/// [`rhs`](Rhs::rhs) with the current time `t`, state `x`, and the problem's
/// parameter vector `p`, and expect the derivative values to be written into
/// `dxdt`. The buffer always has exactly `x.len()` entries, so the derivative
/// necessarily matches the state in length.
///
/// The parameter vector is opaque to the integrators; only the right-hand
/// side interprets it.
///
/// # Example
///
/// ```
/// use odesolve::{Float, Rhs};
///
/// struct Lorenz;
/// impl Rhs for Lorenz {
///     fn rhs(&self, _t: Float, x: &[Float], p: &[Float], dxdt: &mut [Float]) {
///         let (sigma, rho, beta) = (p[0], p[1], p[2]);
///         dxdt[0] = sigma * (x[1] - x[0]);
///         dxdt[1] = x[0] * (rho - x[2]) - x[1];
///         dxdt[2] = x[0] * x[1] - beta * x[2];
///     }
/// }
/// ```
pub trait Rhs {
    fn rhs(&self, t: Float, x: &[Float], p: &[Float], dxdt: &mut [Float]);
}

/// Plain functions and closures with the right shape are right-hand sides.
impl<F> Rhs for F
where
    F: Fn(Float, &[Float], &[Float], &mut [Float]),
{
    fn rhs(&self, t: Float, x: &[Float], p: &[Float], dxdt: &mut [Float]) {
        self(t, x, p, dxdt)
    }
}
