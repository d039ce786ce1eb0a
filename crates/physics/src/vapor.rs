//! Saturation vapour pressure and psychrometric relations.
//!
//! Temperatures are in °C.

use crate::constants::{
    CP_AIR, EPSILON_MOLWEIGHT, LV_WATER, TETENS_A, TETENS_B, TETENS_E0_KPA, TETENS_E0_PA,
};

/// Saturation vapour pressure (Tetens) \[Pa\].
pub fn saturation_vapor_pressure(temperature: f64) -> f64 {
    TETENS_E0_PA * (TETENS_A * temperature / (temperature + TETENS_B)).exp()
}

/// Saturation vapour pressure (Tetens, FAO-56 coefficients) \[kPa\].
pub fn saturation_vapor_pressure_kpa(temperature: f64) -> f64 {
    TETENS_E0_KPA * (TETENS_A * temperature / (temperature + TETENS_B)).exp()
}

/// Slope of the saturation vapour pressure curve \[Pa/°C\].
pub fn slope_svp(temperature: f64) -> f64 {
    4098.0 * saturation_vapor_pressure(temperature) / (temperature + TETENS_B).powi(2)
}

/// Slope of the saturation vapour pressure curve \[kPa/°C\].
///
/// This is the Δ of the Penman partition.
pub fn slope_svp_kpa(temperature: f64) -> f64 {
    4098.0 * saturation_vapor_pressure_kpa(temperature) / (temperature + TETENS_B).powi(2)
}

/// Psychrometric constant for air `pressure` in Pa \[Pa/°C\].
pub fn psychrometric_constant(pressure: f64) -> f64 {
    CP_AIR * pressure / (EPSILON_MOLWEIGHT * LV_WATER)
}

/// Vapour pressure deficit from temperature and relative humidity (%) \[Pa\].
pub fn vapor_pressure_deficit(temperature: f64, relative_humidity: f64) -> f64 {
    saturation_vapor_pressure(temperature) * (1.0 - relative_humidity / 100.0)
}
