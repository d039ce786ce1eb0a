//! Closed-form solution of `x³ − 2x² + z = 0`.
//!
//! With `x = t + 2/3` the cubic becomes `t³ + p·t + q = 0` where
//! `p = −4/3` and `q = z − 16/27`. Writing `t = m·sin(θ)` with
//! `m = 2·sqrt(−p/3) = 4/3` turns it into `sin(3θ) = 27q/16 = 27z/16 − 1`,
//! which has three real solutions for `z ∈ [0, 32/27]`. The principal arcsine picks
//! the middle root, `x ∈ [0, 4/3]`, which is the branch that tracks the
//! evaporation ratio (`x = 0` at `z = 0`, `x = 1` at `z = 1`).

use crate::broadcast::Field;
use crate::ops::clamp;

/// Linear coefficient of the depressed cubic.
const P: f64 = -4.0 / 3.0;

/// Shift between `x` and the depressed variable `t`.
const SHIFT: f64 = 2.0 / 3.0;

/// Upper end of the `z` interval with three real roots.
pub const THREE_ROOT_Z_MAX: f64 = 32.0 / 27.0;

/// How far the arcsine argument may leave `[-1, 1]` before the clamp is
/// reported as triggered rather than absorbed as rounding.
pub const ARCSIN_ROUNDING_TOL: f64 = 1e-9;

/// Root returned by [`cubic_root_trig_checked`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrigRoot {
    /// Root on the physical branch, clamped to `[0, 2]`.
    pub x: f64,
    /// `true` when `z` lay outside `[0, 32/27]` by more than rounding.
    pub clamped: bool,
}

/// Solves `x³ − 2x² + z = 0` for the physically relevant root.
pub fn cubic_root_trig(z: f64) -> f64 {
    cubic_root_trig_checked(z).x
}

/// Like [`cubic_root_trig`], also reporting whether the arcsine argument
/// had to be clamped beyond rounding.
pub fn cubic_root_trig_checked(z: f64) -> TrigRoot {
    // (3√3/2)·q/(−p)^1.5 reduces to 27q/16; the reduced form keeps z = 0
    // exactly on the arcsine boundary
    let arg = 27.0 / 16.0 * z - 1.0;
    let clamped = arg.abs() > 1.0 + ARCSIN_ROUNDING_TOL;

    let theta = clamp(arg, Some(-1.0), Some(1.0)).asin() / 3.0;
    let amplitude = 2.0 * (-P / 3.0).sqrt();
    let x = amplitude * theta.sin() + SHIFT;

    TrigRoot {
        x: clamp(x, Some(0.0), Some(2.0)),
        clamped,
    }
}

/// Field form of [`cubic_root_trig_checked`].
///
/// Returns the root field and the number of cells where the arcsine clamp
/// fired beyond rounding.
pub fn cubic_root_trig_field(z: &Field) -> (Field, usize) {
    let mut clamped_cells = 0;
    let x = z.mapv(|v| {
        let root = cubic_root_trig_checked(v);
        if root.clamped {
            clamped_cells += 1;
        }
        root.x
    });
    (x, clamped_cells)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::broadcast::field_from_vec;
    use approx::assert_abs_diff_eq;

    fn residual(x: f64, z: f64) -> f64 {
        x * x * x - 2.0 * x * x + z
    }

    #[test]
    fn zero_z_gives_zero_root() {
        assert_abs_diff_eq!(cubic_root_trig(0.0), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn unit_z_gives_unit_root() {
        assert_abs_diff_eq!(cubic_root_trig(1.0), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn upper_end_is_double_root() {
        assert_abs_diff_eq!(cubic_root_trig(THREE_ROOT_Z_MAX), 4.0 / 3.0, epsilon = 1e-7);
    }

    #[test]
    fn root_satisfies_cubic_over_three_root_interval() {
        let n = 400;
        for i in 0..=n {
            let z = THREE_ROOT_Z_MAX * i as f64 / n as f64;
            let root = cubic_root_trig_checked(z);
            assert!(!root.clamped, "z={z} should not trigger the clamp");
            assert!((0.0..=2.0).contains(&root.x));
            assert!(
                residual(root.x, z).abs() < 1e-6,
                "z={z}: x={} residual={}",
                root.x,
                residual(root.x, z)
            );
        }
    }

    #[test]
    fn root_is_monotone_in_z() {
        let mut prev = cubic_root_trig(0.0);
        for i in 1..=100 {
            let x = cubic_root_trig(i as f64 / 100.0);
            assert!(x >= prev);
            prev = x;
        }
    }

    #[test]
    fn negative_z_is_flagged() {
        let root = cubic_root_trig_checked(-0.2);
        assert!(root.clamped);
        assert_abs_diff_eq!(root.x, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn large_z_is_flagged_and_bounded() {
        let root = cubic_root_trig_checked(5.0);
        assert!(root.clamped);
        assert_abs_diff_eq!(root.x, 4.0 / 3.0, epsilon = 1e-12);
    }

    #[test]
    fn rounding_outside_interval_is_not_flagged() {
        assert!(!cubic_root_trig_checked(-1e-14).clamped);
    }

    #[test]
    fn nan_propagates() {
        let root = cubic_root_trig_checked(f64::NAN);
        assert!(root.x.is_nan());
        assert!(!root.clamped);
    }

    #[test]
    fn field_counts_clamped_cells() {
        let z = field_from_vec(&[4], vec![0.0, 0.5, -1.0, 3.0]).unwrap();
        let (x, clamped) = cubic_root_trig_field(&z);
        assert_eq!(x.shape(), &[4]);
        assert_eq!(clamped, 2);
    }
}
