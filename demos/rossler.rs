//! # Example: Rössler system
//!
//! dx/dt = -y - z
//! dy/dt = x + a * y
//! dz/dt = b + z * (x - c)
//!
//! Initial conditions: X(0) = [-0.1, 0.5, -0.6]

use odesolve::prelude::*;

struct Rossler;

impl Rhs for Rossler {
    fn rhs(&self, _t: Float, x: &[Float], p: &[Float], dxdt: &mut [Float]) {
        let (a, b, c) = (p[0], p[1], p[2]);
        dxdt[0] = -x[1] - x[2];
        dxdt[1] = x[0] + a * x[1];
        dxdt[2] = b + x[2] * (x[0] - c);
    }
}

fn main() {
    let problem = Problem::builder()
        .name("Rossler")
        .x0(vec![-0.1, 0.5, -0.6])
        .tf(100.0)
        .n(10_000)
        .tol(1e-9)
        .params(vec![0.1, 0.1, 14.0])
        .labels(vec!["t".into(), "x".into(), "y".into(), "z".into()])
        .build();

    match solve_problem(&Rossler, &problem) {
        Ok(sol) => {
            for (method, traj) in sol.iter() {
                let (t, x) = traj.last();
                println!(
                    "{method:>8}: t = {t:.3}, x = {x:?}, nfev = {}, status = {:?}",
                    traj.nfev, traj.status
                );
            }
            if let Err(e) = sol.write_csv(&problem, ".") {
                eprintln!("CSV write failed: {e}");
            }
        }
        Err(e) => eprintln!("solve failed: {e}"),
    }
}
