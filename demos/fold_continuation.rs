//! # Example: parameter continuation of an ellipse-parabola intersection
//!
//! Tracks a root of the system
//!
//! x^2 + 9y^2 - 16       = 0
//! y - x^2 + 2x - p      = 0
//!
//! as p sweeps from 0 to 2, warm-starting each Newton solve from the
//! previous root.

use odesolve::prelude::*;

struct EllipseParabola;

impl System2 for EllipseParabola {
    fn eval(&self, x: &[Float; 2], p: &[Float], f: &mut [Float; 2], jac: &mut [Float; 4]) {
        f[0] = x[0] * x[0] + 9.0 * x[1] * x[1] - 16.0;
        f[1] = x[1] - x[0] * x[0] + 2.0 * x[0] - p[0];
        jac[0] = 2.0 * x[0];
        jac[1] = 18.0 * x[1];
        jac[2] = -2.0 * x[0] + 2.0;
        jac[3] = 1.0;
    }
}

fn main() {
    let settings = NewtonSettings::builder().tol(1e-10).build();

    match continuation(&EllipseParabola, [0.0, 1.3], 0.0, 2.0, 2000, &[0.0], &settings) {
        Ok(path) => {
            println!("status: {:?}", path.status);
            // Print every 200th point of the branch
            for (pi, root) in path.p.iter().zip(&path.roots).step_by(200) {
                println!("p = {pi:.4}, x = {:.15}, y = {:.15}", root[0], root[1]);
            }
            let last = path.roots.last().unwrap();
            println!("final root: x = {:.15}, y = {:.15}", last[0], last[1]);
        }
        Err(e) => eprintln!("continuation failed: {e}"),
    }
}
