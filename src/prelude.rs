//! Convenient prelude: import the most commonly used traits, types, and
//! functions.
//!
//! Bring this into scope with:
//!
//! ```rust
//! use odesolve::prelude::*;
//! ```

pub use crate::{
    Error, Float, Rhs, Status, Trajectory,
    linalg::{linspace, scal_mult, vec_abs, vec_add},
    newton::{ContinuationPath, NewtonSettings, RootSolution, System2, continuation, newton},
    rk::{euler, mod_euler, rk4},
    rkf::{AdaptiveSettings, rkf45},
    solve::{Problem, ProblemSolution, solve_problem},
};
