//! Pure conversion functions: TOML config structs -> crate API config types.

use anyhow::{Context, Result, bail};

use crate::config::*;

use petcr_bgcr::{
    InputPolicy, MONTHS_PER_YEAR, MeteoForcing, PipelineConfig, SolverConfig, WScheme,
    seasonal_index,
};
use petcr_numeric::{Field, field_from_vec};
use petcr_physics::PenmanConstants;

/// Parses an input policy name into the corresponding enum variant.
pub fn parse_policy(s: &str) -> Result<InputPolicy> {
    match s.to_lowercase().as_str() {
        "strict" => Ok(InputPolicy::Strict),
        "mask" => Ok(InputPolicy::Mask),
        "passthrough" => Ok(InputPolicy::Passthrough),
        other => bail!("unknown input policy: {other:?}"),
    }
}

/// Converts the `[budyko]` section into a [`WScheme`].
///
/// The `uniform` scheme requires `w`; the others must not set it.
pub fn parse_scheme(budyko: &BudykoToml) -> Result<WScheme> {
    match (budyko.scheme.to_lowercase().as_str(), budyko.w) {
        ("uniform", Some(w)) => Ok(WScheme::Uniform(w)),
        ("uniform", None) => bail!("the uniform scheme requires [budyko].w"),
        ("seasonality_index" | "seasonality_albedo", Some(_)) => {
            bail!("[budyko].w is only used by the uniform scheme")
        }
        ("seasonality_index", None) => Ok(WScheme::SeasonalityIndex),
        ("seasonality_albedo", None) => Ok(WScheme::SeasonalityAlbedo),
        (other, _) => bail!("unknown w scheme: {other:?}"),
    }
}

/// Builds a [`SolverConfig`] from the TOML solver configuration.
pub fn build_solver_config(solver: &SolverToml) -> Result<SolverConfig> {
    let cfg = SolverConfig::new()
        .with_policy(parse_policy(&solver.policy)?)
        .with_eps(solver.eps);
    cfg.validate().context("invalid [solver] section")?;
    Ok(cfg)
}

/// Builds [`PenmanConstants`] from the TOML Penman configuration.
pub fn build_penman_constants(penman: &PenmanToml) -> PenmanConstants {
    PenmanConstants::new()
        .with_gamma(penman.gamma)
        .with_latent_heat(penman.latent_heat)
}

/// Builds a [`PipelineConfig`] from the full TOML configuration.
pub fn build_pipeline_config(config: &PetcrConfig) -> Result<PipelineConfig> {
    let cfg = PipelineConfig::new()
        .with_scheme(parse_scheme(&config.budyko)?)
        .with_penman(build_penman_constants(&config.penman))
        .with_solver(build_solver_config(&config.solver)?);
    cfg.validate().context("invalid pipeline configuration")?;
    Ok(cfg)
}

/// Wraps an inline series as a one-dimensional [`Field`].
pub fn series(name: &str, values: &[f64]) -> Result<Field> {
    if values.is_empty() {
        bail!("{name} must contain at least one value");
    }
    field_from_vec(&[values.len()], values.to_vec())
        .with_context(|| format!("failed to build {name} series"))
}

/// Builds [`MeteoForcing`] from the `[forcing]` section.
///
/// A missing seasonality index is computed from precipitation laid out as
/// consecutive calendar years.
pub fn build_forcing(forcing: &ForcingToml) -> Result<MeteoForcing> {
    let precipitation = series("precipitation", &forcing.precipitation)?;
    let seasonality = match forcing.seasonality_index {
        Some(ref si) => series("seasonality_index", si)?,
        None => {
            let n = forcing.precipitation.len();
            if n % MONTHS_PER_YEAR != 0 {
                bail!(
                    "cannot derive the seasonality index from {n} precipitation values: \
                     provide whole years of monthly data or set [forcing].seasonality_index"
                );
            }
            let monthly = field_from_vec(
                &[n / MONTHS_PER_YEAR, MONTHS_PER_YEAR],
                forcing.precipitation.clone(),
            )?;
            seasonal_index(&monthly).context("failed to derive seasonality index")?
        }
    };

    let mut meteo = MeteoForcing::new(
        series("net_radiation", &forcing.net_radiation)?,
        series("temperature", &forcing.temperature)?,
        series("wind_speed", &forcing.wind_speed)?,
        series("actual_vapor_pressure", &forcing.actual_vapor_pressure)?,
        series("saturation_vapor_pressure", &forcing.saturation_vapor_pressure)?,
        precipitation,
        seasonality,
    );
    if let Some(ref g) = forcing.ground_heat_flux {
        meteo = meteo.with_ground_heat_flux(series("ground_heat_flux", g)?);
    }
    if let Some(ref albedo) = forcing.albedo {
        meteo = meteo.with_albedo(series("albedo", albedo)?);
    }
    Ok(meteo)
}
