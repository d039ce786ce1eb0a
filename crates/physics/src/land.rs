//! Land-atmosphere potential evaporation from surface energy fluxes.
//!
//! Splits the available energy with a wet-surface Bowen ratio `βw`:
//! energy-based PET is `rn / (1 + βw)` and the aerodynamic counterpart is
//! `H / βw`. Fluxes are taken in W/m² and reported as mm/day, temperatures
//! in kelvin, pressure in Pa, vapour pressures in kPa.

use crate::constants::{EPSILON_MOLWEIGHT, FLUX_TO_MJ_DAY, KELVIN_OFFSET, TETENS_A, TETENS_B};

/// Specific heat of air at constant pressure \[MJ/(kg·K)\].
const CP_AIR_MJ: f64 = 1.005e-3;

/// Saturation vapour pressure at 0 °C used by the land formulas \[kPa\].
const E0_KPA: f64 = 0.611;

/// Lower bound on `βw` relative to `γ/Δ`, from the ocean surface.
const OCEAN_BOWEN_FACTOR: f64 = 0.24;

/// Surface energy fluxes and near-surface state for one cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceFluxes {
    /// Latent heat flux \[W/m²\].
    pub latent_heat: f64,
    /// Sensible heat flux \[W/m²\].
    pub sensible_heat: f64,
    /// Near-surface specific humidity \[kg/kg\].
    pub specific_humidity: f64,
    /// Surface air pressure \[Pa\].
    pub air_pressure: f64,
    /// Near-surface air temperature \[K\].
    pub air_temperature: f64,
    /// Skin (surface) temperature \[K\].
    pub skin_temperature: f64,
}

/// Land PET partition, all rates in mm/day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LandPet {
    /// Energy-based PET, `rn / (1 + βw)`.
    pub pete: f64,
    /// Aerodynamic PET, `sh / βw`.
    pub peta: f64,
    /// Wet-surface Bowen ratio.
    pub beta_w: f64,
    /// Available energy as evaporation equivalent.
    pub rn: f64,
    /// Actual evaporation.
    pub et: f64,
}

/// Ocean PET under the observed (wet) and the driest surface state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OceanPet {
    /// Actual evaporation \[mm/day\].
    pub et: f64,
    /// Observed Bowen ratio `H/LE`.
    pub beta: f64,
    /// Wet-surface Bowen ratio.
    pub beta_w_wet: f64,
    /// Bowen ratio of the driest state.
    pub beta_w_driest: f64,
    /// Energy-based PET, wet state.
    pub pete_wet: f64,
    /// Aerodynamic PET, wet state.
    pub peta_wet: f64,
    /// Energy-based PET, driest state.
    pub pete_driest: f64,
    /// Aerodynamic PET, driest state.
    pub peta_driest: f64,
    /// Mean temperature rise from the observed to the driest state \[K\].
    pub temp_diff: f64,
}

/// Latent heat of vaporization \[MJ/kg\] for temperature in K.
pub fn latent_heat_vaporization(temperature: f64) -> f64 {
    let t = temperature - KELVIN_OFFSET;
    (2500.8 - 2.36 * t + 0.0016 * t.powi(2) - 0.00006 * t.powi(3)) / 1000.0
}

/// Tetens saturation vapour pressure \[kPa\] for temperature in K.
pub fn saturation_vapor_pressure_kpa(temperature: f64) -> f64 {
    let t = temperature - KELVIN_OFFSET;
    E0_KPA * (TETENS_A * t / (t + TETENS_B)).exp()
}

/// Actual vapour pressure \[kPa\] from specific humidity and pressure \[Pa\].
pub fn actual_vapor_pressure(specific_humidity: f64, air_pressure: f64) -> f64 {
    let mixing_ratio = specific_humidity / (1.0 - specific_humidity);
    mixing_ratio / (mixing_ratio + EPSILON_MOLWEIGHT) * (air_pressure / 1000.0)
}

/// Psychrometric constant \[kPa/K\] from latent heat \[MJ/kg\] and pressure \[Pa\].
pub fn psychrometric_constant_land(latent_heat: f64, air_pressure: f64) -> f64 {
    CP_AIR_MJ / (latent_heat * EPSILON_MOLWEIGHT) * (air_pressure / 1000.0)
}

/// Slope of the saturation curve \[kPa/K\] for temperature in K.
pub fn slope_saturation_curve(temperature: f64) -> f64 {
    let t = temperature - KELVIN_OFFSET;
    saturation_vapor_pressure_kpa(temperature) * 4098.0 / (t + TETENS_B).powi(2)
}

/// Wet-surface Bowen ratio.
///
/// The surface estimate `γ·(Ts − Ta)/(es(Ts) − ea)` is raised to at least
/// the ocean bound `0.24·γ/Δ` and capped by the observed Bowen ratio.
pub fn wet_bowen_ratio(fluxes: &SurfaceFluxes) -> f64 {
    let lv = latent_heat_vaporization(fluxes.air_temperature);
    let gamma = psychrometric_constant_land(lv, fluxes.air_pressure);
    let delta = slope_saturation_curve(fluxes.air_temperature);
    let es_surface = saturation_vapor_pressure_kpa(fluxes.skin_temperature);
    let ea = actual_vapor_pressure(fluxes.specific_humidity, fluxes.air_pressure);

    let beta_actual = fluxes.sensible_heat / fluxes.latent_heat;
    let beta_ocean = OCEAN_BOWEN_FACTOR * gamma / delta;
    let beta_surface =
        gamma * (fluxes.skin_temperature - fluxes.air_temperature) / (es_surface - ea);

    beta_surface.max(beta_ocean).min(beta_actual)
}

/// Converts a flux in W/m² to an evaporation rate in mm/day.
fn flux_to_rate(flux: f64, lv: f64) -> f64 {
    flux * FLUX_TO_MJ_DAY / lv
}

/// Land PET partition for one cell.
pub fn pet_land(fluxes: &SurfaceFluxes) -> LandPet {
    let lv = latent_heat_vaporization(fluxes.air_temperature);
    let beta_w = wet_bowen_ratio(fluxes);

    let lh = flux_to_rate(fluxes.latent_heat, lv);
    let sh = flux_to_rate(fluxes.sensible_heat, lv);
    let rn = sh + lh;

    LandPet {
        pete: rn / (1.0 + beta_w),
        peta: sh / beta_w,
        beta_w,
        rn,
        et: lh,
    }
}

/// Ocean PET for one cell, comparing the observed and driest states.
pub fn pet_ocean(fluxes: &SurfaceFluxes) -> OceanPet {
    let ta = fluxes.air_temperature;
    let ts = fluxes.skin_temperature;
    let lv = latent_heat_vaporization(ta);
    let es_surface = saturation_vapor_pressure_kpa(ts);
    let ea = actual_vapor_pressure(fluxes.specific_humidity, fluxes.air_pressure);
    let gamma = psychrometric_constant_land(lv, fluxes.air_pressure);

    let ta_driest = ta + ea / gamma;
    let ts_driest = ts + es_surface / gamma;
    let es_surface_driest = saturation_vapor_pressure_kpa(ts_driest);

    let beta_w_wet = gamma * (ts - ta) / (es_surface - ea);
    let beta_w_driest = gamma * (ts_driest - ta_driest) / es_surface_driest;

    let lh = flux_to_rate(fluxes.latent_heat, lv);
    let sh = flux_to_rate(fluxes.sensible_heat, lv);
    let rn = sh + lh;

    OceanPet {
        et: lh,
        beta: fluxes.sensible_heat / fluxes.latent_heat,
        beta_w_wet,
        beta_w_driest,
        pete_wet: rn / (1.0 + beta_w_wet),
        peta_wet: sh / beta_w_wet,
        pete_driest: rn / (1.0 + beta_w_driest),
        peta_driest: rn / beta_w_driest,
        temp_diff: (ts_driest + ta_driest) / 2.0 - (ts + ta) / 2.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn summer_cell() -> SurfaceFluxes {
        SurfaceFluxes {
            latent_heat: 80.0,
            sensible_heat: 40.0,
            specific_humidity: 0.008,
            air_pressure: 100_000.0,
            air_temperature: 293.15,
            skin_temperature: 296.15,
        }
    }

    #[test]
    fn latent_heat_at_zero_celsius() {
        assert_relative_eq!(latent_heat_vaporization(273.15), 2.5008, epsilon = 1e-12);
    }

    #[test]
    fn saturation_at_twenty_celsius() {
        assert_relative_eq!(saturation_vapor_pressure_kpa(293.15), 2.338, epsilon = 2e-3);
    }

    #[test]
    fn dry_air_has_no_vapor_pressure() {
        assert_eq!(actual_vapor_pressure(0.0, 100_000.0), 0.0);
    }

    #[test]
    fn psychrometric_near_sea_level() {
        let gamma = psychrometric_constant_land(2.45, 101_325.0);
        assert_relative_eq!(gamma, 0.0668, epsilon = 1e-3);
    }

    #[test]
    fn wet_bowen_ratio_within_bounds() {
        let f = summer_cell();
        let beta_w = wet_bowen_ratio(&f);
        let beta_actual = f.sensible_heat / f.latent_heat;
        assert!(beta_w > 0.0);
        assert!(beta_w <= beta_actual);
    }

    #[test]
    fn land_pet_energy_identity() {
        let pet = pet_land(&summer_cell());
        assert_relative_eq!(pet.pete * (1.0 + pet.beta_w), pet.rn, max_relative = 1e-12);
        assert_relative_eq!(pet.rn, pet.et + pet.peta * pet.beta_w, max_relative = 1e-12);
    }

    #[test]
    fn ocean_driest_state_is_warmer() {
        let pet = pet_ocean(&summer_cell());
        assert!(pet.temp_diff > 0.0);
        assert_relative_eq!(pet.beta, 0.5, epsilon = 1e-12);
        assert_relative_eq!(
            pet.pete_wet * (1.0 + pet.beta_w_wet),
            pet.pete_driest * (1.0 + pet.beta_w_driest),
            max_relative = 1e-12
        );
    }
}
