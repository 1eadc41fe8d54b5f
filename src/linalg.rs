//! Elementwise vector operations and linear-space generation.

use crate::{Error, Float};

/// Elementwise sum of two vectors.
///
/// # Errors
///
/// Returns [`Error::DimensionMismatch`] when the lengths differ.
pub fn vec_add(x: &[Float], y: &[Float]) -> Result<Vec<Float>, Error> {
    if x.len() != y.len() {
        return Err(Error::DimensionMismatch(x.len(), y.len()));
    }
    Ok(x.iter().zip(y).map(|(a, b)| a + b).collect())
}

/// Multiply each entry of `x` by `scalar`.
pub fn scal_mult(scalar: Float, x: &[Float]) -> Vec<Float> {
    x.iter().map(|v| scalar * v).collect()
}

/// Elementwise absolute value.
pub fn vec_abs(x: &[Float]) -> Vec<Float> {
    x.iter().map(|v| v.abs()).collect()
}

/// Generate `n + 1` linearly spaced points covering `[t0, tf]`, inclusive of
/// both endpoints.
///
/// # Errors
///
/// Returns [`Error::EmptyLinspace`] when `n == 0`.
///
/// # Example
///
/// ```
/// use odesolve::linspace;
///
/// let t = linspace(0.0, 10.0, 5).unwrap();
/// assert_eq!(t, vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);
/// ```
pub fn linspace(t0: Float, tf: Float, n: usize) -> Result<Vec<Float>, Error> {
    if n == 0 {
        return Err(Error::EmptyLinspace);
    }
    let dt = (tf - t0) / n as Float;
    Ok((0..=n).map(|k| t0 + k as Float * dt).collect())
}
