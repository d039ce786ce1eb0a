//! NumPy-style broadcasting over dynamic-dimension fields.
//!
//! Shapes are right-aligned; each dimension pair must be equal or one of
//! them must be 1. A 0-d field broadcasts against anything.

use ndarray::{ArrayD, ArrayViewD, IxDyn, Zip};

use crate::error::NumericError;

/// A scalar or N-dimensional numeric field.
pub type Field = ArrayD<f64>;

/// Creates a 0-d field holding `value`.
pub fn scalar(value: f64) -> Field {
    ArrayD::from_elem(IxDyn(&[]), value)
}

/// Creates a field of `shape` from row-major `values`.
///
/// # Errors
///
/// Returns [`NumericError::InvalidShape`] if `values.len()` does not match
/// the product of `shape`.
pub fn field_from_vec(shape: &[usize], values: Vec<f64>) -> Result<Field, NumericError> {
    let len = values.len();
    ArrayD::from_shape_vec(IxDyn(shape), values).map_err(|_| NumericError::InvalidShape {
        shape: shape.to_vec(),
        len,
    })
}

/// Returns the broadcast shape of `left` and `right`.
///
/// # Errors
///
/// Returns [`NumericError::ShapeMismatch`] if a dimension pair differs and
/// neither side is 1.
pub fn broadcast_shape(left: &[usize], right: &[usize]) -> Result<Vec<usize>, NumericError> {
    let ndim = left.len().max(right.len());
    let mut shape = Vec::with_capacity(ndim);
    for k in 0..ndim {
        let l = dim_from_right(left, k);
        let r = dim_from_right(right, k);
        let d = match (l, r) {
            (a, b) if a == b => a,
            (1, b) => b,
            (a, 1) => a,
            _ => {
                return Err(NumericError::ShapeMismatch {
                    left: left.to_vec(),
                    right: right.to_vec(),
                });
            }
        };
        shape.push(d);
    }
    shape.reverse();
    Ok(shape)
}

/// Size of the `k`-th dimension counted from the right, 1 when absent.
fn dim_from_right(shape: &[usize], k: usize) -> usize {
    if k < shape.len() {
        shape[shape.len() - 1 - k]
    } else {
        1
    }
}

/// Broadcasts every field to their common shape.
///
/// Returns the common shape together with one read-only view per input, in
/// input order. No data is copied.
///
/// # Errors
///
/// Returns [`NumericError::ShapeMismatch`] on the first incompatible input.
pub fn broadcast_all<'a>(
    fields: &[&'a Field],
) -> Result<(Vec<usize>, Vec<ArrayViewD<'a, f64>>), NumericError> {
    let mut shape: Vec<usize> = Vec::new();
    for f in fields {
        shape = broadcast_shape(&shape, f.shape())?;
    }

    let views = fields
        .iter()
        .map(|&f| {
            f.broadcast(IxDyn(&shape))
                .ok_or_else(|| NumericError::ShapeMismatch {
                    left: shape.clone(),
                    right: f.shape().to_vec(),
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok((shape, views))
}

/// Applies `f` element-wise over two broadcast fields.
///
/// # Errors
///
/// Returns [`NumericError::ShapeMismatch`] if the shapes are incompatible.
pub fn zip_map2<F>(a: &Field, b: &Field, f: F) -> Result<Field, NumericError>
where
    F: Fn(f64, f64) -> f64,
{
    let (_, v) = broadcast_all(&[a, b])?;
    Ok(Zip::from(&v[0]).and(&v[1]).map_collect(|&x, &y| f(x, y)))
}

/// Applies `f` element-wise over three broadcast fields.
///
/// # Errors
///
/// Returns [`NumericError::ShapeMismatch`] if the shapes are incompatible.
pub fn zip_map3<F>(a: &Field, b: &Field, c: &Field, f: F) -> Result<Field, NumericError>
where
    F: Fn(f64, f64, f64) -> f64,
{
    let (_, v) = broadcast_all(&[a, b, c])?;
    Ok(Zip::from(&v[0])
        .and(&v[1])
        .and(&v[2])
        .map_collect(|&x, &y, &z| f(x, y, z)))
}

/// Applies `f` element-wise over four broadcast fields.
///
/// # Errors
///
/// Returns [`NumericError::ShapeMismatch`] if the shapes are incompatible.
pub fn zip_map4<F>(a: &Field, b: &Field, c: &Field, d: &Field, f: F) -> Result<Field, NumericError>
where
    F: Fn(f64, f64, f64, f64) -> f64,
{
    let (_, v) = broadcast_all(&[a, b, c, d])?;
    Ok(Zip::from(&v[0])
        .and(&v[1])
        .and(&v[2])
        .and(&v[3])
        .map_collect(|&w, &x, &y, &z| f(w, x, y, z)))
}
