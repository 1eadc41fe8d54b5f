//! # Example: simple pendulum
//!
//! Released from rest pointing horizontally:
//! dtheta/dt  = omega
//! domega/dt  = -(g / l) * cos(theta)
//!
//! Initial conditions: X(0) = [0, 0]

use odesolve::prelude::*;

struct SimplePendulum;

impl Rhs for SimplePendulum {
    fn rhs(&self, _t: Float, x: &[Float], p: &[Float], dxdt: &mut [Float]) {
        let (g, l) = (p[0], p[1]);
        dxdt[0] = x[1];
        dxdt[1] = -g / l * x[0].cos();
    }
}

fn main() {
    let problem = Problem::builder()
        .name("SimplePendulum")
        .x0(vec![0.0, 0.0])
        .tf(10.0)
        .n(1000)
        .tol(1e-9)
        .params(vec![9.8, 1.0])
        .labels(vec!["t".into(), "theta".into(), "thetaDot".into()])
        .build();

    match solve_problem(&SimplePendulum, &problem) {
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
