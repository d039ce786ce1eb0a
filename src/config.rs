use std::path::PathBuf;

use serde::Deserialize;

/// Top-level PETCR configuration.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PetcrConfig {
    /// Solver settings.
    #[serde(default)]
    pub solver: SolverToml,

    /// Budyko shape-parameter settings.
    #[serde(default)]
    pub budyko: BudykoToml,

    /// Penman constants.
    #[serde(default)]
    pub penman: PenmanToml,

    /// Inline meteorological forcing.
    pub forcing: Option<ForcingToml>,

    /// Output settings.
    #[serde(default)]
    pub output: OutputToml,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SolverToml {
    #[serde(default = "default_policy")]
    pub policy: String,
    #[serde(default = "default_eps")]
    pub eps: f64,
}

impl Default for SolverToml {
    fn default() -> Self {
        Self {
            policy: default_policy(),
            eps: default_eps(),
        }
    }
}

fn default_policy() -> String {
    "strict".to_string()
}
fn default_eps() -> f64 {
    petcr_numeric::DEFAULT_EPS
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BudykoToml {
    #[serde(default = "default_scheme")]
    pub scheme: String,
    /// Required by the `uniform` scheme.
    #[serde(default)]
    pub w: Option<f64>,
}

impl Default for BudykoToml {
    fn default() -> Self {
        Self {
            scheme: default_scheme(),
            w: None,
        }
    }
}

fn default_scheme() -> String {
    "seasonality_albedo".to_string()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PenmanToml {
    #[serde(default = "default_gamma")]
    pub gamma: f64,
    #[serde(default = "default_latent_heat")]
    pub latent_heat: f64,
}

impl Default for PenmanToml {
    fn default() -> Self {
        Self {
            gamma: default_gamma(),
            latent_heat: default_latent_heat(),
        }
    }
}

fn default_gamma() -> f64 {
    petcr_physics::constants::DEFAULT_GAMMA
}
fn default_latent_heat() -> f64 {
    petcr_physics::constants::LV_WATER
}

/// One value per period; a single value broadcasts over all periods.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ForcingToml {
    /// Net radiation (J/m² per period).
    pub net_radiation: Vec<f64>,
    #[serde(default)]
    pub ground_heat_flux: Option<Vec<f64>>,
    /// Air temperature (°C).
    pub temperature: Vec<f64>,
    /// Wind speed at 2 m (m/s).
    pub wind_speed: Vec<f64>,
    /// Actual vapour pressure (kPa).
    pub actual_vapor_pressure: Vec<f64>,
    /// Saturation vapour pressure (kPa).
    pub saturation_vapor_pressure: Vec<f64>,
    /// Precipitation (mm per period).
    pub precipitation: Vec<f64>,
    /// Derived from `precipitation` when omitted, which then must cover
    /// whole years of monthly values.
    #[serde(default)]
    pub seasonality_index: Option<Vec<f64>>,
    #[serde(default)]
    pub albedo: Option<Vec<f64>>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct OutputToml {
    pub path: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn empty_file_uses_defaults() {
        let config: PetcrConfig = toml::from_str("").unwrap();
        assert_eq!(config.solver.policy, "strict");
        assert_abs_diff_eq!(config.solver.eps, 1e-12);
        assert_eq!(config.budyko.scheme, "seasonality_albedo");
        assert!(config.budyko.w.is_none());
        assert_abs_diff_eq!(config.penman.gamma, 0.066);
        assert_abs_diff_eq!(config.penman.latent_heat, 2.45e6);
        assert!(config.forcing.is_none());
        assert!(config.output.path.is_none());
    }

    #[test]
    fn full_file_parses() {
        let config: PetcrConfig = toml::from_str(
            r#"
            [solver]
            policy = "mask"

            [budyko]
            scheme = "uniform"
            w = 2.2

            [forcing]
            net_radiation = [2.0e8, 3.0e8]
            temperature = [10.0, 18.0]
            wind_speed = [2.0]
            actual_vapor_pressure = [1.0]
            saturation_vapor_pressure = [1.8]
            precipitation = [60.0, 40.0]
            seasonality_index = [0.4]

            [output]
            path = "et.json"
            "#,
        )
        .unwrap();
        assert_eq!(config.solver.policy, "mask");
        assert_abs_diff_eq!(config.budyko.w.unwrap(), 2.2);
        let forcing = config.forcing.unwrap();
        assert_eq!(forcing.net_radiation.len(), 2);
        assert!(forcing.ground_heat_flux.is_none());
        assert!(forcing.albedo.is_none());
        assert_eq!(config.output.path, Some(PathBuf::from("et.json")));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(toml::from_str::<PetcrConfig>("[solver]\ntolerance = 1.0").is_err());
        assert!(toml::from_str::<PetcrConfig>("[weather]\nx = 1").is_err());
    }
}
