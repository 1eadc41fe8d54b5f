//! A library of explicit numerical integrators for ordinary differential
//! equations (ODEs), plus a Newton's-method root finder with parameter
//! continuation.
//!
//! The integrators share a single right-hand-side contract ([`Rhs`]): any
//! system `dX/dt = f(t, X, params)` can be driven by any of the four methods.
//!
//! - Fixed-step over a caller-supplied time grid: [`rk::euler`],
//!   [`rk::mod_euler`], [`rk::rk4`].
//! - Adaptive step-size with embedded error estimation: [`rkf::rkf45`].
//!
//! All methods return a [`Trajectory`] holding the paired time and state
//! sequences, ready for the CSV writer ([`write_csv`]) or any other
//! downstream consumer. [`solve_problem`] runs all four methods on the same
//! problem for cross-method comparison.

mod csv;
mod error;
mod linalg;
mod newton;
mod rhs;
mod solve;
mod status;
mod trajectory;

pub mod prelude;
pub mod rk;
pub mod rkf;

pub use csv::{write_csv, write_csv_file};
pub use error::Error;
pub use linalg::{linspace, scal_mult, vec_abs, vec_add};
pub use newton::{
    ContinuationPath, NewtonSettings, RootSolution, System2, continuation, newton,
};
pub use rhs::Rhs;
pub use solve::{Problem, ProblemSolution, solve_problem};
pub use status::Status;
pub use trajectory::Trajectory;

// Prevent selecting two incompatible float precision features at once.
#[cfg(all(feature = "f32", feature = "f64"))]
compile_error!(
    "features 'f32' and 'f64' cannot both be enabled; pick exactly one Float precision feature"
);

/// Floating-point type used throughout the crate, selected by feature.
#[cfg(feature = "f32")]
pub type Float = f32;
#[cfg(feature = "f64")]
pub type Float = f64;
