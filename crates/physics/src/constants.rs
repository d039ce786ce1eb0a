//! Physical constants and conversion factors (SI unless noted).

/// Seconds per day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Average days per month (365.25 / 12).
pub const DAYS_PER_MONTH_AVG: f64 = 30.4375;

/// Specific heat of air at constant pressure \[J/(kg·K)\] (FAO-56).
pub const CP_AIR: f64 = 1013.0;

/// Latent heat of vaporization at ~20 °C \[J/kg\] (FAO-56).
pub const LV_WATER: f64 = 2.45e6;

/// Ratio of molecular weights of water vapour and dry air.
pub const EPSILON_MOLWEIGHT: f64 = 0.622;

/// Air density at sea level, 15 °C \[kg/m³\].
pub const RHO_AIR_SL: f64 = 1.225;

/// Tetens coefficient A.
pub const TETENS_A: f64 = 17.27;

/// Tetens coefficient B \[°C\].
pub const TETENS_B: f64 = 237.3;

/// Saturation vapour pressure at 0 °C \[Pa\].
pub const TETENS_E0_PA: f64 = 611.0;

/// Saturation vapour pressure at 0 °C \[kPa\], FAO-56 form used by Penman.
pub const TETENS_E0_KPA: f64 = 0.6108;

/// Priestley-Taylor coefficient.
pub const PRIESTLEY_TAYLOR_ALPHA: f64 = 1.26;

/// Psychrometric constant near sea level \[kPa/°C\].
pub const DEFAULT_GAMMA: f64 = 0.066;

/// Converts a flux in W/m² to MJ/(m²·day).
pub const FLUX_TO_MJ_DAY: f64 = 0.0864;

/// Zero Celsius in kelvin.
pub const KELVIN_OFFSET: f64 = 273.15;
