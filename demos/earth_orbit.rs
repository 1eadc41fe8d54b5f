//! # Example: Earth orbiting the Sun
//!
//! Radial equations from the Euler-Lagrange equations of the Lagrangian
//! m/2 * (r'^2 + r^2 theta'^2) + G*M*m/r, with c = r^2 * theta' the
//! angular momentum per unit mass:
//!
//! dr/dt     = v
//! dv/dt     = c^2 / r^3 - G*M / r^2
//! dtheta/dt = c / r^2
//!
//! Initial conditions: r = 149.6e9 m, v = 350 m/s, theta = 0.
//! Integrated over one year.

use odesolve::prelude::*;

const G: Float = 6.674e-11;

struct EarthOrbit;

impl Rhs for EarthOrbit {
    fn rhs(&self, _t: Float, x: &[Float], p: &[Float], dxdt: &mut [Float]) {
        let (r, v) = (x[0], x[1]);
        let (m, c) = (p[0], p[1]);
        dxdt[0] = v;
        dxdt[1] = c * c / r.powi(3) - G * m / r.powi(2);
        dxdt[2] = c / r.powi(2);
    }
}

fn main() {
    let problem = Problem::builder()
        .name("EarthOrbit")
        .x0(vec![149.6e9, 350.0, 0.0])
        .tf(3.156e7)
        .n(10_000)
        // Absolute per-unit-step tolerance; the state is of order 1e11.
        .tol(1e-4)
        .params(vec![1.9885e30, 4.4405e15])
        .labels(vec!["t".into(), "r".into(), "dr".into(), "theta".into()])
        .build();

    match solve_problem(&EarthOrbit, &problem) {
        Ok(sol) => {
            for (method, traj) in sol.iter() {
                let (t, x) = traj.last();
                println!(
                    "{method:>8}: t = {t:.3e}, x = {x:?}, nfev = {}, status = {:?}",
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
