//! Errors for the integrators and the root finder.

use thiserror::Error;

use crate::Float;

/// Validation and I/O errors surfaced at the entry points.
///
/// Non-fatal run outcomes (iteration cap, non-finite error estimate) are not
/// errors; they are reported through [`crate::Status`] on the returned result
/// so partial data is never discarded.
#[derive(Debug, Error)]
pub enum Error {
    /// Two vectors that must agree in length do not.
    #[error("vector lengths differ (got {0} and {1})")]
    DimensionMismatch(usize, usize),
    /// Time grid is empty, a single point, or not strictly increasing.
    #[error("time grid must be strictly increasing with at least two points")]
    DegenerateGrid,
    /// Zero intervals requested from `linspace`.
    #[error("linspace requires at least one interval (got n = 0)")]
    EmptyLinspace,
    /// The initial state vector has no components.
    #[error("initial state must not be empty")]
    EmptyState,
    /// Integration span with `tf <= t0`.
    #[error("time span must satisfy tf > t0 (got t0 = {0}, tf = {1})")]
    InvalidTimeSpan(Float, Float),
    /// Non-positive or non-finite initial step size.
    #[error("initial step size must be positive and finite (got {0})")]
    InvalidStepSize(Float),
    /// Non-positive or non-finite tolerance.
    #[error("tolerance must be positive and finite (got {0})")]
    InvalidTolerance(Float),
    /// Newton update cannot be computed.
    #[error("Jacobian is singular at the current iterate")]
    SingularJacobian,
    /// Failure while writing a trajectory out.
    #[error("write failed: {0}")]
    Io(#[from] std::io::Error),
}
