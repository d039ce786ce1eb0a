//! Penman energy partition and reference evaporation formulas.
//!
//! Apparent potential evaporation is split into a radiation-driven and an
//! aerodynamic-driven term:
//!
//! - `Erad  = Δ/(Δ+γ) · Qne`, with `Qne = (Rn − G)/Le`
//! - `Eaero = γ/(Δ+γ) · f(U2) · (es − ea)`, with `f(U2) = 2.6·(1 + 0.54·U2)`
//! - `Epa = Erad + Eaero`

use ndarray::{IxDyn, Zip};
use petcr_numeric::{Field, broadcast_all};
use tracing::debug;

use crate::constants::{CP_AIR, DEFAULT_GAMMA, LV_WATER, PRIESTLEY_TAYLOR_ALPHA, RHO_AIR_SL};
use crate::error::PhysicsError;
use crate::vapor::{psychrometric_constant, slope_svp, slope_svp_kpa, vapor_pressure_deficit};

/// Constants of the Penman partition.
///
/// # Example
///
/// ```
/// use petcr_physics::PenmanConstants;
///
/// let c = PenmanConstants::new().with_gamma(0.062);
/// assert!(c.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PenmanConstants {
    gamma: f64,
    latent_heat: f64,
}

impl PenmanConstants {
    /// Creates constants with `gamma = 0.066` kPa/°C and `latent_heat = 2.45e6` J/kg.
    pub fn new() -> Self {
        Self {
            gamma: DEFAULT_GAMMA,
            latent_heat: LV_WATER,
        }
    }

    /// Sets the psychrometric constant (kPa/°C).
    pub fn with_gamma(mut self, gamma: f64) -> Self {
        self.gamma = gamma;
        self
    }

    /// Sets the latent heat used to convert available energy to a depth.
    pub fn with_latent_heat(mut self, latent_heat: f64) -> Self {
        self.latent_heat = latent_heat;
        self
    }

    /// Returns the psychrometric constant.
    pub fn gamma(&self) -> f64 {
        self.gamma
    }

    /// Returns the latent heat of vaporization.
    pub fn latent_heat(&self) -> f64 {
        self.latent_heat
    }

    /// Checks that `gamma` is finite and non-negative and `latent_heat` is
    /// finite and positive.
    pub fn validate(&self) -> Result<(), PhysicsError> {
        if !self.gamma.is_finite() || self.gamma < 0.0 {
            return Err(PhysicsError::InvalidConfig {
                reason: format!("gamma must be finite and >= 0, got {}", self.gamma),
            });
        }
        if !self.latent_heat.is_finite() || self.latent_heat <= 0.0 {
            return Err(PhysicsError::InvalidConfig {
                reason: format!(
                    "latent_heat must be finite and > 0, got {}",
                    self.latent_heat
                ),
            });
        }
        Ok(())
    }
}

impl Default for PenmanConstants {
    fn default() -> Self {
        Self::new()
    }
}

/// Radiation and aerodynamic terms of apparent potential evaporation.
#[derive(Debug, Clone)]
pub struct PenmanComponents {
    erad: Field,
    eaero: Field,
}

impl PenmanComponents {
    /// Returns the radiation-driven term `Erad`.
    pub fn erad(&self) -> &Field {
        &self.erad
    }

    /// Returns the aerodynamic term `Eaero`.
    pub fn eaero(&self) -> &Field {
        &self.eaero
    }

    /// Returns apparent potential evaporation `Epa = Erad + Eaero`.
    pub fn epa(&self) -> Field {
        &self.erad + &self.eaero
    }

    /// Consumes `self` and returns `(erad, eaero)`.
    pub fn into_parts(self) -> (Field, Field) {
        (self.erad, self.eaero)
    }
}

/// Penman empirical wind function.
pub fn wind_function(u2: f64) -> f64 {
    2.6 * (1.0 + 0.54 * u2)
}

/// Splits one cell into `(erad, eaero)`.
fn partition(qne: f64, temperature: f64, u2: f64, vpd: f64, gamma: f64) -> (f64, f64) {
    let delta = slope_svp_kpa(temperature);
    let erad = delta / (delta + gamma) * qne;
    let eaero = gamma / (delta + gamma) * wind_function(u2) * vpd;
    (erad, eaero)
}

/// Computes the Penman radiation and aerodynamic terms.
///
/// All six inputs broadcast against each other; the outputs have the common
/// shape. No range validation is applied to the meteorology: temperature is
/// expected in °C, wind speed non-negative and `es >= ea`.
///
/// # Arguments
///
/// * `rn` — Net radiation.
/// * `g` — Ground heat flux (same units as `rn`).
/// * `t` — Air temperature (°C).
/// * `u2` — Wind speed at 2 m (m/s).
/// * `ea` — Actual vapour pressure (kPa).
/// * `es` — Saturation vapour pressure (kPa).
/// * `constants` — Psychrometric constant and latent heat.
///
/// # Errors
///
/// Returns [`PhysicsError::Numeric`] if the inputs do not broadcast and
/// [`PhysicsError::InvalidConfig`] if `constants` fails validation.
pub fn penman_components(
    rn: &Field,
    g: &Field,
    t: &Field,
    u2: &Field,
    ea: &Field,
    es: &Field,
    constants: &PenmanConstants,
) -> Result<PenmanComponents, PhysicsError> {
    constants.validate()?;
    let (shape, v) = broadcast_all(&[rn, g, t, u2, ea, es])?;
    let gamma = constants.gamma();
    let le = constants.latent_heat();

    let qne = Zip::from(&v[0])
        .and(&v[1])
        .map_collect(|&rn, &g| (rn - g) / le);
    let vpd = Zip::from(&v[5]).and(&v[4]).map_collect(|&es, &ea| es - ea);

    let mut erad = Field::zeros(IxDyn(&shape));
    let mut eaero = Field::zeros(IxDyn(&shape));
    Zip::from(&mut erad)
        .and(&mut eaero)
        .and(&qne)
        .and(&v[2])
        .and(&v[3])
        .and(&vpd)
        .for_each(|erad, eaero, &qne, &t, &u2, &vpd| {
            (*erad, *eaero) = partition(qne, t, u2, vpd, gamma);
        });

    debug!(shape = ?shape, "penman components computed");
    Ok(PenmanComponents { erad, eaero })
}

/// Computes apparent potential evaporation in one combined expression,
/// `(Δ·Qne + γ·f(U2)·(es − ea)) / (Δ + γ)`.
///
/// Agrees with [`PenmanComponents::epa`] to rounding.
///
/// # Errors
///
/// Same as [`penman_components`].
pub fn apparent_potential_evaporation(
    rn: &Field,
    g: &Field,
    t: &Field,
    u2: &Field,
    ea: &Field,
    es: &Field,
    constants: &PenmanConstants,
) -> Result<Field, PhysicsError> {
    constants.validate()?;
    let (_, v) = broadcast_all(&[rn, g, t, u2, ea, es])?;
    let gamma = constants.gamma();
    let le = constants.latent_heat();

    let qne = Zip::from(&v[0])
        .and(&v[1])
        .map_collect(|&rn, &g| (rn - g) / le);
    Ok(Zip::from(&qne)
        .and(&v[2])
        .and(&v[3])
        .and(&v[4])
        .and(&v[5])
        .map_collect(|&qne, &t, &u2, &ea, &es| {
            let delta = slope_svp_kpa(t);
            (delta * qne + gamma * wind_function(u2) * (es - ea)) / (delta + gamma)
        }))
}

/// Penman potential evaporation as a latent heat flux (same units as `rn`).
///
/// Uses an aerodynamic resistance of `208 / wind_speed` s/m. Temperature in
/// °C, relative humidity in %, pressure in Pa.
pub fn penman_potential_et(
    rn: f64,
    g: f64,
    temperature: f64,
    relative_humidity: f64,
    wind_speed: f64,
    pressure: f64,
) -> f64 {
    let delta = slope_svp(temperature);
    let gamma = psychrometric_constant(pressure);
    let vpd = vapor_pressure_deficit(temperature, relative_humidity);
    let ra = 208.0 / wind_speed;

    let radiation = delta * (rn - g);
    let aerodynamic = RHO_AIR_SL * CP_AIR * vpd / ra;
    (radiation + aerodynamic) / (delta + gamma)
}

/// Priestley-Taylor equilibrium evaporation scaled by `alpha`.
///
/// Pass [`PRIESTLEY_TAYLOR_ALPHA`] for the classic 1.26.
pub fn priestley_taylor_et(rn: f64, g: f64, temperature: f64, pressure: f64, alpha: f64) -> f64 {
    let delta = slope_svp(temperature);
    let gamma = psychrometric_constant(pressure);
    alpha * delta / (delta + gamma) * (rn - g)
}

/// Priestley-Taylor with the default coefficient.
pub fn priestley_taylor_et_default(rn: f64, g: f64, temperature: f64, pressure: f64) -> f64 {
    priestley_taylor_et(rn, g, temperature, pressure, PRIESTLEY_TAYLOR_ALPHA)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use petcr_numeric::{field_from_vec, scalar};

    #[test]
    fn constants_defaults() {
        let c = PenmanConstants::default();
        assert_eq!(c.gamma(), 0.066);
        assert_eq!(c.latent_heat(), 2.45e6);
    }

    #[test]
    fn constants_reject_bad_values() {
        assert!(PenmanConstants::new().with_gamma(-0.1).validate().is_err());
        assert!(PenmanConstants::new().with_gamma(f64::NAN).validate().is_err());
        assert!(PenmanConstants::new().with_latent_heat(0.0).validate().is_err());
    }

    #[test]
    fn wind_function_still_air() {
        assert_abs_diff_eq!(wind_function(0.0), 2.6, epsilon = 1e-12);
        assert_abs_diff_eq!(wind_function(2.0), 2.6 * 2.08, epsilon = 1e-12);
    }

    #[test]
    fn latent_heat_scales_radiation_term() {
        let rn = scalar(2.45e7);
        let zero = scalar(0.0);
        let t = scalar(20.0);
        let one = scalar(1.0);
        let c = PenmanConstants::new();
        let a = penman_components(&rn, &zero, &t, &one, &one, &one, &c).unwrap();
        let b = penman_components(&rn, &zero, &t, &one, &one, &one, &c.with_latent_heat(4.9e6))
            .unwrap();
        let ra = a.erad().iter().next().copied().unwrap();
        let rb = b.erad().iter().next().copied().unwrap();
        assert_relative_eq!(ra, 2.0 * rb, max_relative = 1e-12);
    }

    #[test]
    fn saturated_air_has_no_aerodynamic_term() {
        let es = scalar(2.3);
        let c = PenmanConstants::new();
        let p = penman_components(
            &scalar(1.5e7),
            &scalar(0.0),
            &scalar(20.0),
            &scalar(3.0),
            &es,
            &es,
            &c,
        )
        .unwrap();
        assert!(p.eaero().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn components_broadcast_series_against_scalars() {
        let t = field_from_vec(&[4], vec![5.0, 10.0, 20.0, 30.0]).unwrap();
        let p = penman_components(
            &scalar(1.2e7),
            &scalar(0.0),
            &t,
            &scalar(2.0),
            &scalar(1.0),
            &scalar(2.0),
            &PenmanConstants::new(),
        )
        .unwrap();
        assert_eq!(p.erad().shape(), &[4]);
        assert_eq!(p.eaero().shape(), &[4]);
        // warmer air shifts weight from the aerodynamic to the radiation term
        let erad: Vec<f64> = p.erad().iter().copied().collect();
        let eaero: Vec<f64> = p.eaero().iter().copied().collect();
        assert!(erad.windows(2).all(|w| w[1] > w[0]));
        assert!(eaero.windows(2).all(|w| w[1] < w[0]));
    }

    #[test]
    fn priestley_taylor_is_alpha_times_equilibrium() {
        let eq = priestley_taylor_et(200.0, 20.0, 20.0, 101_325.0, 1.0);
        let pt = priestley_taylor_et_default(200.0, 20.0, 20.0, 101_325.0);
        assert_relative_eq!(pt, 1.26 * eq, max_relative = 1e-12);
    }

    #[test]
    fn penman_exceeds_equilibrium_in_dry_air() {
        let eq = priestley_taylor_et(200.0, 20.0, 25.0, 101_325.0, 1.0);
        let pm = penman_potential_et(200.0, 20.0, 25.0, 40.0, 2.0, 101_325.0);
        assert!(pm > eq);
    }
}
