#![allow(dead_code)]

use odesolve::prelude::*;

/// Simple harmonic oscillator: X(t) = [cos t, -sin t] for X0 = [1, 0].
pub struct Sho;

impl Rhs for Sho {
    fn rhs(&self, _t: Float, x: &[Float], _p: &[Float], dxdt: &mut [Float]) {
        dxdt[0] = x[1];
        dxdt[1] = -x[0];
    }
}

/// Constant derivative taken from the parameter vector: dX/dt = p.
pub struct ConstantRhs;

impl Rhs for ConstantRhs {
    fn rhs(&self, _t: Float, _x: &[Float], p: &[Float], dxdt: &mut [Float]) {
        dxdt.copy_from_slice(p);
    }
}

/// Van der Pol oscillator with mu = p[0].
pub struct VanDerPol;

impl Rhs for VanDerPol {
    fn rhs(&self, _t: Float, x: &[Float], p: &[Float], dxdt: &mut [Float]) {
        dxdt[0] = x[1];
        dxdt[1] = p[0] * (1.0 - x[0] * x[0]) * x[1] - x[0];
    }
}

/// Fast linear decay dX/dt = -lambda * X with lambda = p[0]; stiff enough to
/// force step rejections from a large initial step.
pub struct Decay;

impl Rhs for Decay {
    fn rhs(&self, _t: Float, x: &[Float], p: &[Float], dxdt: &mut [Float]) {
        dxdt[0] = -p[0] * x[0];
    }
}

/// Largest componentwise deviation between a state and a reference.
pub fn max_abs_diff(x: &[Float], reference: &[Float]) -> Float {
    x.iter()
        .zip(reference)
        .map(|(a, b)| (a - b).abs())
        .fold(0.0, Float::max)
}
