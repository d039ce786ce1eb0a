//! Array-safe numerical primitives for the petcr evaporation models.
//!
//! Every quantity in petcr is a [`Field`]: a scalar (0-d) or N-dimensional
//! `ndarray` array. Multi-input operations broadcast with NumPy rules, so a
//! scalar Budyko parameter, a per-cell map and a `(years, 12, cells)` time
//! grid can be mixed freely.
//!
//! # Contents
//!
//! - [`clamp`], [`safe_div`] and their field forms
//! - [`cubic_root_trig`]: closed-form root of `x³ − 2x² + z = 0`
//! - [`broadcast_shape`], [`broadcast_all`], `zip_map*`: broadcasting helpers
//!
//! ```
//! use petcr_numeric::{cubic_root_trig, field_from_vec, safe_div_field, scalar};
//!
//! let p = field_from_vec(&[3], vec![10.0, 20.0, 30.0]).unwrap();
//! let phi = safe_div_field(&p, &scalar(40.0), 1e-12).unwrap();
//! assert_eq!(phi.shape(), &[3]);
//! assert!(cubic_root_trig(0.0).abs() < 1e-12);
//! ```

mod broadcast;
mod cubic;
mod error;
mod ops;

pub use broadcast::{
    Field, broadcast_all, broadcast_shape, field_from_vec, scalar, zip_map2, zip_map3, zip_map4,
};
pub use cubic::{
    ARCSIN_ROUNDING_TOL, THREE_ROOT_Z_MAX, TrigRoot, cubic_root_trig, cubic_root_trig_checked,
    cubic_root_trig_field,
};
pub use error::NumericError;
pub use ops::{DEFAULT_EPS, clamp, clamp_field, safe_div, safe_div_field};
