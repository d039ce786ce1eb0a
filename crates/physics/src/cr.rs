//! Closed-form complementary relationship (CR) models.
//!
//! Each model maps potential evaporation `ep` and wet-environment
//! evaporation `ew` to actual evaporation. At `ep == ew` the surface is
//! saturated and every model except the sigmoid returns `ew`; the sigmoid
//! returns `ew · 2^(1 − 1/β)`, which is `ew` only for `β = 1`. Drier air
//! (`ep > ew`) lowers the estimate.

/// Floor applied to `ew` (and to `ep` where it is a divisor).
const MIN_RATE: f64 = 1e-6;

/// Sigmoid CR: `ew · 2 / (1 + x^β)^(1/β)` with `x = ep/ew`, capped at `ew`.
pub fn sigmoid_cr(ep: f64, ew: f64, beta: f64) -> f64 {
    let ep = ep.max(0.0);
    let ew = ew.max(MIN_RATE);
    let x = ep / ew;
    let ea = ew * 2.0 / (1.0 + x.powf(beta)).powf(1.0 / beta);
    ea.min(ew)
}

/// Polynomial CR: `ew · (2 − x^b)`, floored at zero.
pub fn polynomial_cr(ep: f64, ew: f64, b: f64) -> f64 {
    let ep = ep.max(0.0);
    let ew = ew.max(MIN_RATE);
    let x = ep / ew;
    (ew * (2.0 - x.powf(b))).max(0.0)
}

/// Rescaled power CR: `ew · (2 − x^n)^(1/n)` for `x ≤ 2^(1/n)`, bounded to
/// `[0, ew]`.
pub fn rescaled_power_cr(ep: f64, ew: f64, n: f64) -> f64 {
    let ep = ep.max(MIN_RATE);
    let ew = ew.max(MIN_RATE);
    let x = ep / ew;
    let x_crit = 2f64.powf(1.0 / n);

    let term = 2.0 - x.min(x_crit).powf(n);
    let ea = ew * term.max(0.0).powf(1.0 / n);
    ea.clamp(0.0, ew)
}

/// Symmetric Bouchet relation `2·ew − ep`, floored at zero.
pub fn bouchet_cr(ep: f64, ew: f64) -> f64 {
    (2.0 * ew - ep).max(0.0)
}

/// Asymmetric CR with a lower bound `ea_min` on actual evaporation.
///
/// Wet regime (`ep ≤ ew`) returns `ew`; the dry regime falls linearly
/// towards `ea_min`. Output is bounded to `[ea_min, ew]`, with `ew` winning
/// when `ea_min > ew`.
pub fn aa_cr(ep: f64, ew: f64, ea_min: f64) -> f64 {
    let ep = ep.max(0.0);
    let ew = ew.max(MIN_RATE);
    let ea_min = ea_min.max(0.0);

    let ea = if ep <= ew {
        ew
    } else {
        ew * (1.0 + (1.0 - ea_min / ew) * (1.0 - ep / ew))
    };
    ea.max(ea_min).min(ew)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn saturated_surface_returns_ew() {
        let ew = 4.0;
        assert_abs_diff_eq!(sigmoid_cr(ew, ew, 1.0), ew, epsilon = 1e-12);
        assert_abs_diff_eq!(polynomial_cr(ew, ew, 2.0), ew, epsilon = 1e-12);
        assert_abs_diff_eq!(rescaled_power_cr(ew, ew, 0.5), ew, epsilon = 1e-12);
        assert_abs_diff_eq!(bouchet_cr(ew, ew), ew, epsilon = 1e-12);
        assert_abs_diff_eq!(aa_cr(ew, ew, 0.0), ew, epsilon = 1e-12);
    }

    #[test]
    fn sigmoid_saturation_value_depends_on_beta() {
        assert_abs_diff_eq!(sigmoid_cr(4.0, 4.0, 0.5), 2.0, epsilon = 1e-12);
        assert!(sigmoid_cr(8.0, 4.0, 0.5) < sigmoid_cr(4.0, 4.0, 0.5));
    }

    #[test]
    fn polynomial_dries_out() {
        // x = sqrt(2) is the polynomial's zero for b = 2
        assert_abs_diff_eq!(polynomial_cr(2f64.sqrt() * 3.0, 3.0, 2.0), 0.0, epsilon = 1e-9);
        assert_eq!(polynomial_cr(10.0, 3.0, 2.0), 0.0);
    }

    #[test]
    fn rescaled_power_hits_zero_at_critical_ratio() {
        // n = 0.5 gives x_crit = 4
        assert_abs_diff_eq!(rescaled_power_cr(8.0, 2.0, 0.5), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(rescaled_power_cr(20.0, 2.0, 0.5), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn bouchet_is_linear_then_floored() {
        assert_eq!(bouchet_cr(5.0, 3.0), 1.0);
        assert_eq!(bouchet_cr(7.0, 3.0), 0.0);
    }

    #[test]
    fn aa_dry_regime_respects_floor() {
        let ea = aa_cr(10.0, 3.0, 1.0);
        assert!((1.0..=3.0).contains(&ea));
        assert_eq!(aa_cr(10.0, 3.0, 5.0), 3.0);
    }

    #[test]
    fn zero_ew_is_guarded() {
        assert!(sigmoid_cr(1.0, 0.0, 0.5).is_finite());
        assert!(polynomial_cr(1.0, 0.0, 2.0).is_finite());
        assert!(rescaled_power_cr(0.0, 0.0, 0.5).is_finite());
        assert!(aa_cr(1.0, 0.0, 0.0).is_finite());
    }
}
