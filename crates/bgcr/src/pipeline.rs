//! Meteorology-to-evaporation pipeline.
//!
//! Penman partition → `Epa`; seasonality index (and albedo) → `w`;
//! `{P, Epa, Erad, w}` → BGCR solver.

use petcr_numeric::{Field, scalar};
use petcr_physics::penman_components;
use tracing::debug;

use crate::config::PipelineConfig;
use crate::error::BgcrError;
use crate::result::BgcrEstimate;
use crate::solver::bgcr_monthly_with;
use crate::w_scheme::resolve_w;

/// Meteorological forcing for [`estimate_et`].
///
/// Net radiation and ground heat flux are energy per accounting period
/// (J/m²), so that `(Rn − G)/Le` is a depth in mm per period. All fields
/// broadcast against each other.
#[derive(Debug, Clone)]
pub struct MeteoForcing {
    net_radiation: Field,
    ground_heat_flux: Field,
    temperature: Field,
    wind_speed: Field,
    actual_vapor_pressure: Field,
    saturation_vapor_pressure: Field,
    precipitation: Field,
    seasonality_index: Field,
    albedo: Option<Field>,
}

impl MeteoForcing {
    /// Creates forcing with zero ground heat flux and no albedo.
    ///
    /// # Arguments
    ///
    /// * `net_radiation` — Net radiation (J/m² per period).
    /// * `temperature` — Air temperature (°C).
    /// * `wind_speed` — Wind speed at 2 m (m/s).
    /// * `actual_vapor_pressure` — `ea` (kPa).
    /// * `saturation_vapor_pressure` — `es` (kPa).
    /// * `precipitation` — Precipitation (mm per period).
    /// * `seasonality_index` — Per-cell seasonality index.
    pub fn new(
        net_radiation: Field,
        temperature: Field,
        wind_speed: Field,
        actual_vapor_pressure: Field,
        saturation_vapor_pressure: Field,
        precipitation: Field,
        seasonality_index: Field,
    ) -> Self {
        Self {
            net_radiation,
            ground_heat_flux: scalar(0.0),
            temperature,
            wind_speed,
            actual_vapor_pressure,
            saturation_vapor_pressure,
            precipitation,
            seasonality_index,
            albedo: None,
        }
    }

    /// Sets the ground heat flux (same units as net radiation).
    pub fn with_ground_heat_flux(mut self, ground_heat_flux: Field) -> Self {
        self.ground_heat_flux = ground_heat_flux;
        self
    }

    /// Sets the per-cell albedo.
    pub fn with_albedo(mut self, albedo: Field) -> Self {
        self.albedo = Some(albedo);
        self
    }

    /// Returns net radiation.
    pub fn net_radiation(&self) -> &Field {
        &self.net_radiation
    }

    /// Returns the ground heat flux.
    pub fn ground_heat_flux(&self) -> &Field {
        &self.ground_heat_flux
    }

    /// Returns air temperature.
    pub fn temperature(&self) -> &Field {
        &self.temperature
    }

    /// Returns wind speed.
    pub fn wind_speed(&self) -> &Field {
        &self.wind_speed
    }

    /// Returns the actual vapour pressure.
    pub fn actual_vapor_pressure(&self) -> &Field {
        &self.actual_vapor_pressure
    }

    /// Returns the saturation vapour pressure.
    pub fn saturation_vapor_pressure(&self) -> &Field {
        &self.saturation_vapor_pressure
    }

    /// Returns precipitation.
    pub fn precipitation(&self) -> &Field {
        &self.precipitation
    }

    /// Returns the seasonality index.
    pub fn seasonality_index(&self) -> &Field {
        &self.seasonality_index
    }

    /// Returns the albedo, if set.
    pub fn albedo(&self) -> Option<&Field> {
        self.albedo.as_ref()
    }
}

/// Estimates actual evaporation from meteorological forcing.
///
/// # Errors
///
/// Returns [`BgcrError::InvalidConfig`] or [`BgcrError::Physics`] if
/// `config` fails validation, [`BgcrError::MissingAlbedo`] if the scheme
/// needs albedo and none is given, and any solver error under the
/// configured input policy.
#[tracing::instrument(skip(forcing, config), fields(scheme = config.scheme().label()))]
pub fn estimate_et(
    forcing: &MeteoForcing,
    config: &PipelineConfig,
) -> Result<BgcrEstimate, BgcrError> {
    config.validate()?;

    let parts = penman_components(
        forcing.net_radiation(),
        forcing.ground_heat_flux(),
        forcing.temperature(),
        forcing.wind_speed(),
        forcing.actual_vapor_pressure(),
        forcing.saturation_vapor_pressure(),
        config.penman(),
    )?;
    let epa = parts.epa();
    debug!(shape = ?epa.shape(), "apparent potential evaporation computed");

    let w = resolve_w(
        config.scheme(),
        forcing.seasonality_index(),
        forcing.albedo(),
    )?;
    debug!(shape = ?w.shape(), "budyko w resolved");

    let output = bgcr_monthly_with(
        forcing.precipitation(),
        &epa,
        parts.erad(),
        &w,
        config.solver(),
    )?;

    let (erad, eaero) = parts.into_parts();
    Ok(BgcrEstimate::new(epa, erad, eaero, w, output))
}
