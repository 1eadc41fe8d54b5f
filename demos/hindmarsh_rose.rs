//! # Example: Hindmarsh-Rose neuron model
//!
//! dx/dt = y - a*x^3 + b*x^2 - z + I
//! dy/dt = c - d*x^2 - y
//! dz/dt = r * (s * (x - xR) - z)
//!
//! Initial conditions: X(0) = [1, 1, 1]

use odesolve::prelude::*;

struct HindmarshRose;

impl Rhs for HindmarshRose {
    fn rhs(&self, _t: Float, x: &[Float], p: &[Float], dxdt: &mut [Float]) {
        let (a, b, c, d) = (p[0], p[1], p[2], p[3]);
        let (r, s, x_r, i_ext) = (p[4], p[5], p[6], p[7]);
        dxdt[0] = x[1] - a * x[0].powi(3) + b * x[0].powi(2) - x[2] + i_ext;
        dxdt[1] = c - d * x[0].powi(2) - x[1];
        dxdt[2] = r * (s * (x[0] - x_r) - x[2]);
    }
}

fn main() {
    let problem = Problem::builder()
        .name("HindmarshRose")
        .x0(vec![1.0, 1.0, 1.0])
        .tf(200.0)
        .n(20_000)
        .tol(1e-9)
        .params(vec![1.0, 3.0, 1.0, 5.0, 1e-3, 4.0, -9.0 / 5.0, 10.0])
        .labels(vec!["t".into(), "x".into(), "y".into(), "z".into()])
        .build();

    match solve_problem(&HindmarshRose, &problem) {
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
