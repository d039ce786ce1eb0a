//! Regionalized Budyko shape parameter `w`.
//!
//! Two regressions on the precipitation seasonality index `SI`, one of
//! them also on albedo. Both were fitted for `SI ∈ [0, 1.1]`; outside that
//! range the polynomials may give non-physical `w`, which is logged but not
//! rejected.

use petcr_numeric::{Field, clamp, scalar, zip_map2};
use tracing::warn;

use crate::config::WScheme;
use crate::error::BgcrError;

/// Calibration range of the seasonality index.
pub const SI_CALIBRATION_RANGE: (f64, f64) = (0.0, 1.1);

/// Bounds applied to albedo before it is used as a divisor.
const ALBEDO_CLIP: (f64, f64) = (1e-3, 1.0);

fn w_si(si: f64) -> f64 {
    0.214 - 0.651 * si + 7.350 * si * si
}

fn w_si_albedo(si: f64, albedo: f64) -> f64 {
    let albedo = clamp(albedo, Some(ALBEDO_CLIP.0), Some(ALBEDO_CLIP.1));
    0.5931 + 7.0871 * si.powi(3) + 0.0175 / (albedo * albedo)
}

fn warn_out_of_calibration(si: &Field) {
    let (lo, hi) = SI_CALIBRATION_RANGE;
    let outside = si.iter().filter(|&&v| v < lo || v > hi).count();
    if outside > 0 {
        warn!(
            cells = outside,
            "seasonality index outside calibration range [{lo}, {hi}]"
        );
    }
}

/// Single-variable scheme `w = 0.214 − 0.651·SI + 7.350·SI²`.
///
/// The output has the shape of `si`.
pub fn w_from_si(si: &Field) -> Field {
    warn_out_of_calibration(si);
    si.mapv(w_si)
}

/// Dual-variable scheme `w = 0.5931 + 7.0871·SI³ + 0.0175/ALB²`.
///
/// Albedo is clipped to `[1e-3, 1]` first. The output has the broadcast
/// shape of `si` and `albedo`.
///
/// # Errors
///
/// Returns [`BgcrError::Numeric`] if `si` and `albedo` do not broadcast.
pub fn w_from_si_albedo(si: &Field, albedo: &Field) -> Result<Field, BgcrError> {
    warn_out_of_calibration(si);
    let outside = albedo.iter().filter(|&&a| a <= 0.0 || a > 1.0).count();
    if outside > 0 {
        warn!(cells = outside, "albedo outside (0, 1], clipped");
    }
    Ok(zip_map2(si, albedo, w_si_albedo)?)
}

/// Resolves `w` for a scheme.
///
/// `Uniform` returns a 0-d field and ignores `si`.
///
/// # Errors
///
/// Returns [`BgcrError::MissingAlbedo`] for the seasonality-albedo scheme
/// when `albedo` is `None`, and [`BgcrError::Numeric`] on a shape mismatch.
pub fn resolve_w(scheme: WScheme, si: &Field, albedo: Option<&Field>) -> Result<Field, BgcrError> {
    match scheme {
        WScheme::Uniform(w) => Ok(scalar(w)),
        WScheme::SeasonalityIndex => Ok(w_from_si(si)),
        WScheme::SeasonalityAlbedo => {
            let albedo = albedo.ok_or(BgcrError::MissingAlbedo)?;
            w_from_si_albedo(si, albedo)
        }
    }
}
