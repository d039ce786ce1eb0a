//! Tixeront-Fu form of the Budyko curve.

use petcr_numeric::{DEFAULT_EPS, Field, clamp, safe_div, zip_map3};

use crate::error::BgcrError;

/// Unclamped Tixeront-Fu residual `1 + Φ − (1 + Φ^w)^(1/w)`.
///
/// `phi` is the ratio `P/Epa`. For `w ≥ 1` and `phi ≥ 0` the residual lies
/// in `[0, 1]`; outside that domain it is returned as computed. For
/// `phi > 1` and `w > 0` it is evaluated as `1 − Φ·expm1(ln_1p(Φ^−w)/w)`,
/// which stays accurate as `Epa → 0` drives `Φ` to very large values.
pub fn budyko_tixeront_fu_residual(phi: f64, w: f64) -> f64 {
    if phi > 1.0 && w > 0.0 {
        1.0 - phi * (phi.powf(-w).ln_1p() / w).exp_m1()
    } else {
        1.0 + phi - (1.0 + phi.powf(w)).powf(1.0 / w)
    }
}

/// Budyko evaporation ratio `E/Epa`, clamped to `[0, 1]`.
///
/// `Φ = P/(Epa + eps)` uses [`DEFAULT_EPS`]; see
/// [`budyko_tixeront_fu_ratio_with_eps`] to choose another epsilon.
///
/// # Errors
///
/// Returns [`BgcrError::Numeric`] if the inputs do not broadcast.
pub fn budyko_tixeront_fu_ratio(p: &Field, epa: &Field, w: &Field) -> Result<Field, BgcrError> {
    budyko_tixeront_fu_ratio_with_eps(p, epa, w, DEFAULT_EPS)
}

/// Like [`budyko_tixeront_fu_ratio`] with an explicit division epsilon.
///
/// # Errors
///
/// Returns [`BgcrError::Numeric`] if the inputs do not broadcast.
pub fn budyko_tixeront_fu_ratio_with_eps(
    p: &Field,
    epa: &Field,
    w: &Field,
    eps: f64,
) -> Result<Field, BgcrError> {
    Ok(zip_map3(p, epa, w, |p, epa, w| {
        let phi = safe_div(p, epa, eps);
        clamp(budyko_tixeront_fu_residual(phi, w), Some(0.0), Some(1.0))
    })?)
}
