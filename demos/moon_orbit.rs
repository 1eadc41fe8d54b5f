//! # Example: Moon orbiting the Earth
//!
//! Same radial formulation as the Earth-orbit example with the Earth's
//! mass and the Moon's angular momentum per unit mass:
//!
//! dr/dt     = v
//! dv/dt     = c^2 / r^3 - G*M / r^2
//! dtheta/dt = c / r^2
//!
//! Initial conditions: r = 385e6 m, v = 35 m/s, theta = 0.
//! Integrated over one sidereal month.

use odesolve::prelude::*;

const G: Float = 6.674e-11;

struct MoonOrbit;

impl Rhs for MoonOrbit {
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
        .name("MoonOrbit")
        .x0(vec![385e6, 35.0, 0.0])
        .tf(2.36e6)
        .n(10_000)
        // Absolute per-unit-step tolerance; the state is of order 1e8.
        .tol(1e-4)
        .params(vec![5.97237e24, 3.945e11])
        .labels(vec!["t".into(), "r".into(), "dr".into(), "theta".into()])
        .build();

    match solve_problem(&MoonOrbit, &problem) {
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
