//! Guarded element-wise operations.

use crate::broadcast::{Field, zip_map2};
use crate::error::NumericError;

/// Default epsilon added to denominators by [`safe_div`].
pub const DEFAULT_EPS: f64 = 1e-12;

/// Bounds `x` into `[lo, hi]`. Either bound may be omitted.
///
/// NaN passes through unchanged, so a bad cell stays visibly bad.
pub fn clamp(x: f64, lo: Option<f64>, hi: Option<f64>) -> f64 {
    let x = match lo {
        Some(lo) if x < lo => lo,
        _ => x,
    };
    match hi {
        Some(hi) if x > hi => hi,
        _ => x,
    }
}

/// Returns `a / (b + eps)`.
///
/// Finite for `b == 0`, but not a rigorous limit: the result is simply
/// large when `b` is tiny.
pub fn safe_div(a: f64, b: f64, eps: f64) -> f64 {
    a / (b + eps)
}

/// Applies [`clamp`] to every cell of `x`.
pub fn clamp_field(x: &Field, lo: Option<f64>, hi: Option<f64>) -> Field {
    x.mapv(|v| clamp(v, lo, hi))
}

/// Broadcasting form of [`safe_div`].
///
/// # Errors
///
/// Returns [`NumericError::ShapeMismatch`] if `a` and `b` do not broadcast.
pub fn safe_div_field(a: &Field, b: &Field, eps: f64) -> Result<Field, NumericError> {
    zip_map2(a, b, |x, y| safe_div(x, y, eps))
}
