//! # Example: Van der Pol oscillator
//!
//! du/dt  = v
//! dv/dt  = mu * (1 - u^2) * v - u
//!
//! Initial conditions: X(0) = [1, 1]

use odesolve::prelude::*;

struct VanDerPol;

impl Rhs for VanDerPol {
    fn rhs(&self, _t: Float, x: &[Float], p: &[Float], dxdt: &mut [Float]) {
        let mu = p[0];
        dxdt[0] = x[1];
        dxdt[1] = mu * (1.0 - x[0] * x[0]) * x[1] - x[0];
    }
}

fn main() {
    let problem = Problem::builder()
        .name("VanderPol")
        .x0(vec![1.0, 1.0])
        .tf(20.0)
        .n(1000)
        .tol(1e-8)
        .params(vec![1.0])
        .labels(vec!["t".into(), "u".into(), "du".into()])
        .build();

    match solve_problem(&VanDerPol, &problem) {
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
