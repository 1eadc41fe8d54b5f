//! # Example: Thomas' cyclically symmetric attractor
//!
//! dx/dt = sin(y) - b * x
//! dy/dt = sin(z) - b * y
//! dz/dt = sin(x) - b * z
//!
//! Initial conditions: X(0) = [-0.5, -1, -2]

use odesolve::prelude::*;

struct Thomas;

impl Rhs for Thomas {
    fn rhs(&self, _t: Float, x: &[Float], p: &[Float], dxdt: &mut [Float]) {
        let b = p[0];
        dxdt[0] = x[1].sin() - b * x[0];
        dxdt[1] = x[2].sin() - b * x[1];
        dxdt[2] = x[0].sin() - b * x[2];
    }
}

fn main() {
    let problem = Problem::builder()
        .name("Thomas")
        .x0(vec![-0.5, -1.0, -2.0])
        .tf(100.0)
        .n(10_000)
        .tol(1e-9)
        .params(vec![0.1998])
        .labels(vec!["t".into(), "x".into(), "y".into(), "z".into()])
        .build();

    match solve_problem(&Thomas, &problem) {
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
