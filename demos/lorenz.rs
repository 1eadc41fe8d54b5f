//! # Example: Lorenz system
//!
//! Chaotic atmospheric convection model:
//! dx/dt = sigma * (y - x)
//! dy/dt = x * (rho - z) - y
//! dz/dt = x * y - beta * z
//!
//! Initial conditions: X(0) = [1, 1, 1]

use odesolve::prelude::*;

struct Lorenz;

impl Rhs for Lorenz {
    fn rhs(&self, _t: Float, x: &[Float], p: &[Float], dxdt: &mut [Float]) {
        let (sigma, rho, beta) = (p[0], p[1], p[2]);
        dxdt[0] = sigma * (x[1] - x[0]);
        dxdt[1] = x[0] * (rho - x[2]) - x[1];
        dxdt[2] = x[0] * x[1] - beta * x[2];
    }
}

fn main() {
    let problem = Problem::builder()
        .name("Lorenz")
        .x0(vec![1.0, 1.0, 1.0])
        .tf(50.0)
        .n(5000)
        .tol(1e-9)
        .params(vec![10.0, 28.0, 8.0 / 3.0])
        .labels(vec!["t".into(), "x".into(), "y".into(), "z".into()])
        .build();

    match solve_problem(&Lorenz, &problem) {
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
