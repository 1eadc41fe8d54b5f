//! Adaptive Runge-Kutta-Fehlberg integration.

mod rkf45;

pub use rkf45::rkf45;

use bon::Builder;

use crate::Float;

/// Settings for the adaptive integrator.
///
/// # Example
///
/// ```
/// use odesolve::rkf::AdaptiveSettings;
///
/// let settings = AdaptiveSettings::builder().tol(1e-6).build();
/// assert_eq!(settings.max_iter, 1_000_000);
/// ```
#[derive(Builder, Clone, Debug)]
pub struct AdaptiveSettings {
    /// Local error tolerance per unit step.
    #[builder(default = 1e-9)]
    pub tol: Float,
    /// Maximum number of accepted steps before giving up with
    /// [`Status::MaxIterReached`](crate::Status::MaxIterReached).
    #[builder(default = 1_000_000)]
    pub max_iter: usize,
    /// Initial step size guess.
    #[builder(default = 0.1)]
    pub dt_init: Float,
}

impl Default for AdaptiveSettings {
    fn default() -> Self {
        Self::builder().build()
    }
}
