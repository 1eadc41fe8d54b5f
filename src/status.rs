//! Status codes for iterative algorithms.

/// Outcome of an integration or root-finding run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Success,
    /// Iteration cap reached before the target; the result holds the data
    /// accumulated so far.
    MaxIterReached,
    /// The local error estimate became NaN or infinite; the result holds the
    /// data accumulated before the blow-up.
    StepNotFinite,
}
