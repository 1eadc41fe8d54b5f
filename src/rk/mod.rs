//! Fixed-step integrators (Euler, Modified Euler, RK4).
//!
//! All three advance the solution over a caller-supplied time grid and share
//! the same signature: `(rhs, initial state, time grid, parameters)`.

mod euler;
mod mod_euler;
mod rk4;

pub use euler::euler;
pub use mod_euler::mod_euler;
pub use rk4::rk4;

use crate::{Error, Float};

/// Entry validation shared by the fixed-step methods.
pub(crate) fn validate(x0: &[Float], t: &[Float]) -> Result<(), Error> {
    if x0.is_empty() {
        return Err(Error::EmptyState);
    }
    if t.len() < 2 || t.windows(2).any(|w| w[1] <= w[0]) {
        return Err(Error::DegenerateGrid);
    }
    Ok(())
}
