//! High-level driver: run one problem through all four integrators.

use std::path::Path;

use bon::Builder;

use crate::{
    Error, Float, Rhs, Trajectory,
    csv::write_csv_file,
    linalg::linspace,
    rk::{euler, mod_euler, rk4},
    rkf::{AdaptiveSettings, rkf45},
};

/// One initial value problem plus its output configuration.
///
/// Replaces any interactive prompting: everything an integration run needs
/// is carried here and passed to [`solve_problem`].
#[derive(Builder, Clone, Debug)]
pub struct Problem {
    /// Problem name, used as the CSV file prefix.
    #[builder(into)]
    pub name: String,
    /// Initial state at `t0`.
    pub x0: Vec<Float>,
    /// Start of the integration span.
    #[builder(default = 0.0)]
    pub t0: Float,
    /// End of the integration span.
    pub tf: Float,
    /// Parameter vector forwarded to the right-hand side.
    #[builder(default)]
    pub params: Vec<Float>,
    /// Number of fixed-step intervals; the grid has `n + 1` points.
    #[builder(default = 1000)]
    pub n: usize,
    /// Error tolerance for the adaptive method.
    #[builder(default = 1e-9)]
    pub tol: Float,
    /// Column headings for CSV output: one for time plus one per variable.
    pub labels: Vec<String>,
    /// Decimal digits written to CSV.
    #[builder(default = 15)]
    pub precision: usize,
}

/// Trajectories of the same problem under all four methods.
#[derive(Debug, Clone)]
pub struct ProblemSolution {
    pub euler: Trajectory,
    pub mod_euler: Trajectory,
    pub rk4: Trajectory,
    pub rkf45: Trajectory,
}

impl ProblemSolution {
    /// Iterate over the four trajectories with their method names.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &Trajectory)> {
        [
            ("Euler", &self.euler),
            ("ModEuler", &self.mod_euler),
            ("RK4", &self.rk4),
            ("RKF45", &self.rkf45),
        ]
        .into_iter()
    }

    /// Write all four trajectories as `<name>_<method>.csv` under `dir`.
    pub fn write_csv<P: AsRef<Path>>(&self, problem: &Problem, dir: P) -> Result<(), Error> {
        for (method, traj) in self.iter() {
            let path = dir
                .as_ref()
                .join(format!("{}_{}.csv", problem.name, method));
            write_csv_file(path, traj, &problem.labels, problem.precision)?;
        }
        Ok(())
    }
}

/// Solve one problem with Euler, Modified Euler, RK4, and RKF45.
///
/// The three fixed-step methods share a uniform grid of `problem.n`
/// intervals over `[t0, tf]`; the adaptive method chooses its own steps
/// under `problem.tol`. Running all four on identical inputs makes the
/// methods directly comparable.
///
/// # Example
///
/// ```
/// use odesolve::{Float, Problem, solve_problem};
///
/// fn decay(_t: Float, x: &[Float], p: &[Float], dxdt: &mut [Float]) {
///     dxdt[0] = -p[0] * x[0];
/// }
///
/// let problem = Problem::builder()
///     .name("decay")
///     .x0(vec![1.0])
///     .tf(1.0)
///     .params(vec![1.0])
///     .labels(vec!["t".into(), "x".into()])
///     .build();
/// let sol = solve_problem(&decay, &problem).unwrap();
/// let exact = (-1.0_f64).exp();
/// assert!((sol.rk4.last().1[0] - exact).abs() < 1e-9);
/// ```
pub fn solve_problem<F>(f: &F, problem: &Problem) -> Result<ProblemSolution, Error>
where
    F: Rhs,
{
    let t = linspace(problem.t0, problem.tf, problem.n)?;
    let settings = AdaptiveSettings::builder().tol(problem.tol).build();

    Ok(ProblemSolution {
        euler: euler(f, &problem.x0, &t, &problem.params)?,
        mod_euler: mod_euler(f, &problem.x0, &t, &problem.params)?,
        rk4: rk4(f, &problem.x0, &t, &problem.params)?,
        rkf45: rkf45(
            f,
            &problem.x0,
            problem.t0,
            problem.tf,
            &problem.params,
            &settings,
        )?,
    })
}
