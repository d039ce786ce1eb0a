//! Seeded synthetic sub-basins and the three-way `w` strategy comparison.
//!
//! Basins span a gradient from low, humid and weakly seasonal to high, arid
//! and strongly seasonal. Monthly fields are laid out `(years, 12, basins)`.

use std::f64::consts::PI;

use ndarray::{Array1, Array3, Axis};
use petcr_numeric::{Field, scalar};
use rand::Rng;
use rand_distr::{Distribution, Normal};
use tracing::{debug, info};

use crate::config::SolverConfig;
use crate::error::BgcrError;
use crate::seasonality::{MONTHS_PER_YEAR, seasonal_index};
use crate::solver::bgcr_monthly_with;
use crate::w_scheme::{w_from_si, w_from_si_albedo};

/// Lowest monthly precipitation after noise is added.
const MIN_PRECIP: f64 = 0.1;

/// Configuration of [`SyntheticBasins::generate`].
#[derive(Debug, Clone)]
pub struct SyntheticSpec {
    /// Number of years.
    years: usize,
    /// Number of basins.
    basins: usize,
    /// Standard deviation of the monthly precipitation noise.
    noise_sd: f64,
}

impl SyntheticSpec {
    /// Creates a spec with 41 years, 8 basins and noise sd 5.
    pub fn new() -> Self {
        Self {
            years: 41,
            basins: 8,
            noise_sd: 5.0,
        }
    }

    /// Sets the number of years.
    pub fn with_years(mut self, years: usize) -> Self {
        self.years = years;
        self
    }

    /// Sets the number of basins.
    pub fn with_basins(mut self, basins: usize) -> Self {
        self.basins = basins;
        self
    }

    /// Sets the precipitation noise standard deviation.
    pub fn with_noise_sd(mut self, noise_sd: f64) -> Self {
        self.noise_sd = noise_sd;
        self
    }

    /// Returns the number of years.
    pub fn years(&self) -> usize {
        self.years
    }

    /// Returns the number of basins.
    pub fn basins(&self) -> usize {
        self.basins
    }

    /// Returns the precipitation noise standard deviation.
    pub fn noise_sd(&self) -> f64 {
        self.noise_sd
    }

    /// Validates the spec.
    pub fn validate(&self) -> Result<(), BgcrError> {
        if self.years == 0 {
            return Err(BgcrError::InvalidConfig {
                reason: "years must be > 0".to_string(),
            });
        }
        if self.basins == 0 {
            return Err(BgcrError::InvalidConfig {
                reason: "basins must be > 0".to_string(),
            });
        }
        if !self.noise_sd.is_finite() || self.noise_sd < 0.0 {
            return Err(BgcrError::InvalidConfig {
                reason: format!("noise_sd must be finite and >= 0, got {}", self.noise_sd),
            });
        }
        Ok(())
    }
}

impl Default for SyntheticSpec {
    fn default() -> Self {
        Self::new()
    }
}

/// Evenly spaced values from `lo` to `hi` inclusive.
fn linspace(lo: f64, hi: f64, n: usize) -> Array1<f64> {
    if n == 1 {
        return Array1::from_elem(1, lo);
    }
    Array1::from_iter((0..n).map(|i| lo + (hi - lo) * i as f64 / (n - 1) as f64))
}

fn seasonal_wave(month: usize, phase: f64) -> f64 {
    (2.0 * PI * (month as f64 / MONTHS_PER_YEAR as f64 - phase)).sin()
}

/// Synthetic monthly forcing for a set of basins.
#[derive(Debug, Clone)]
pub struct SyntheticBasins {
    precipitation: Field,
    epa: Field,
    erad: Field,
    elevation: Field,
    aridity: Field,
    albedo: Field,
}

impl SyntheticBasins {
    /// Generates basins from `spec`, drawing precipitation noise from `rng`.
    ///
    /// # Errors
    ///
    /// Returns [`BgcrError::InvalidConfig`] if `spec` fails validation.
    pub fn generate<R: Rng + ?Sized>(
        spec: &SyntheticSpec,
        rng: &mut R,
    ) -> Result<Self, BgcrError> {
        spec.validate()?;
        let (n_years, n_basins) = (spec.years(), spec.basins());
        let noise = Normal::new(0.0, spec.noise_sd()).map_err(|e| BgcrError::InvalidConfig {
            reason: format!("noise distribution: {e}"),
        })?;

        let elevation = linspace(800.0, 5200.0, n_basins);
        let aridity = linspace(0.5, 1.6, n_basins);
        let season_amp = linspace(0.2, 1.2, n_basins);
        let wind = linspace(1.0, 4.0, n_basins);
        let albedo = elevation.mapv(|e| (0.15 + (e - 800.0) / 5000.0 * 0.35).clamp(0.12, 0.6));

        let shape = (n_years, MONTHS_PER_YEAR, n_basins);
        let mut precipitation = Array3::<f64>::zeros(shape);
        let mut erad = Array3::<f64>::zeros(shape);
        let mut epa = Array3::<f64>::zeros(shape);

        for b in 0..n_basins {
            let scale = 1.4 - 0.6 * (aridity[b] - 0.5);
            for y in 0..n_years {
                for m in 0..MONTHS_PER_YEAR {
                    let base = 50.0 + 100.0 * seasonal_wave(m + 1, 0.2);
                    let shaped = base * scale * (1.0 + season_amp[b] * 0.3 * seasonal_wave(m, 0.0));
                    let p = shaped + noise.sample(rng);
                    precipitation[[y, m, b]] = p.max(MIN_PRECIP);

                    let r = (3.0 + 0.002 * elevation[b]) * (1.0 + 0.5 * seasonal_wave(m + 1, 0.25));
                    let vpd = 0.8 + 0.3 * seasonal_wave(m + 1, 0.2);
                    erad[[y, m, b]] = r;
                    epa[[y, m, b]] = r + 0.05 * wind[b] * vpd;
                }
            }
        }

        debug!(years = n_years, basins = n_basins, "synthetic basins generated");
        Ok(Self {
            precipitation: precipitation.into_dyn(),
            epa: epa.into_dyn(),
            erad: erad.into_dyn(),
            elevation: elevation.into_dyn(),
            aridity: aridity.into_dyn(),
            albedo: albedo.into_dyn(),
        })
    }

    /// Returns monthly precipitation `(years, 12, basins)`.
    pub fn precipitation(&self) -> &Field {
        &self.precipitation
    }

    /// Returns monthly apparent potential evaporation `(years, 12, basins)`.
    pub fn epa(&self) -> &Field {
        &self.epa
    }

    /// Returns the monthly radiation term `(years, 12, basins)`.
    pub fn erad(&self) -> &Field {
        &self.erad
    }

    /// Returns per-basin elevation (m).
    pub fn elevation(&self) -> &Field {
        &self.elevation
    }

    /// Returns the per-basin aridity proxy.
    pub fn aridity(&self) -> &Field {
        &self.aridity
    }

    /// Returns per-basin albedo.
    pub fn albedo(&self) -> &Field {
        &self.albedo
    }
}

/// Per-basin results of the three `w` strategies.
#[derive(Debug, Clone)]
pub struct StrategyComparison {
    /// Seasonality index per basin.
    pub seasonality_index: Vec<f64>,
    /// `w` of the uniform strategy.
    pub uniform_w: f64,
    /// `w(SI)` per basin.
    pub w_si: Vec<f64>,
    /// `w(SI, ALB)` per basin.
    pub w_si_albedo: Vec<f64>,
    /// Mean annual precipitation per basin.
    pub annual_precipitation: Vec<f64>,
    /// Mean annual evaporation per basin, uniform `w`.
    pub annual_e_uniform: Vec<f64>,
    /// Mean annual evaporation per basin, `w(SI)`.
    pub annual_e_si: Vec<f64>,
    /// Mean annual evaporation per basin, `w(SI, ALB)`.
    pub annual_e_si_albedo: Vec<f64>,
}

/// Sums months and averages years: `(years, 12, basins)` → `(basins,)`.
fn mean_annual(monthly: &Field) -> Result<Vec<f64>, BgcrError> {
    let annual = monthly.sum_axis(Axis(1));
    let mean = annual.mean_axis(Axis(0)).ok_or(BgcrError::EmptyData)?;
    Ok(mean.iter().copied().collect())
}

/// Runs the solver with uniform, `w(SI)` and `w(SI, ALB)` parameters.
///
/// # Errors
///
/// Returns [`BgcrError::InvalidConfig`] if `uniform_w` is not finite and
/// positive, and any other [`BgcrError`] if a strategy's `w` or forcing
/// fails the solver's input checks.
pub fn compare_w_strategies(
    basins: &SyntheticBasins,
    uniform_w: f64,
    config: &SolverConfig,
) -> Result<StrategyComparison, BgcrError> {
    if !uniform_w.is_finite() || uniform_w <= 0.0 {
        return Err(BgcrError::InvalidConfig {
            reason: format!("uniform_w must be finite and > 0, got {uniform_w}"),
        });
    }
    let si = seasonal_index(basins.precipitation())?;
    let w_si = w_from_si(&si);
    let w_dual = w_from_si_albedo(&si, basins.albedo())?;

    let run = |w: &Field| -> Result<Vec<f64>, BgcrError> {
        let out = bgcr_monthly_with(basins.precipitation(), basins.epa(), basins.erad(), w, config)?;
        mean_annual(out.evaporation())
    };
    let annual_e_uniform = run(&scalar(uniform_w))?;
    let annual_e_si = run(&w_si)?;
    let annual_e_si_albedo = run(&w_dual)?;

    info!(basins = si.len(), "compared uniform, SI and SI+albedo w strategies");
    Ok(StrategyComparison {
        seasonality_index: si.iter().copied().collect(),
        uniform_w,
        w_si: w_si.iter().copied().collect(),
        w_si_albedo: w_dual.iter().copied().collect(),
        annual_precipitation: mean_annual(basins.precipitation())?,
        annual_e_uniform,
        annual_e_si,
        annual_e_si_albedo,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn linspace_endpoints() {
        let v = linspace(800.0, 5200.0, 8);
        assert_eq!(v.len(), 8);
        assert_abs_diff_eq!(v[0], 800.0, epsilon = 1e-12);
        assert_abs_diff_eq!(v[7], 5200.0, epsilon = 1e-9);
        assert_eq!(linspace(3.0, 9.0, 1).to_vec(), vec![3.0]);
    }

    #[test]
    fn spec_validation() {
        assert!(SyntheticSpec::new().validate().is_ok());
        assert!(SyntheticSpec::new().with_years(0).validate().is_err());
        assert!(SyntheticSpec::new().with_basins(0).validate().is_err());
        assert!(SyntheticSpec::new().with_noise_sd(-1.0).validate().is_err());
    }

    #[test]
    fn comparison_rejects_non_positive_uniform_w() {
        let mut rng = StdRng::seed_from_u64(3);
        let b = SyntheticBasins::generate(&SyntheticSpec::new().with_years(1), &mut rng).unwrap();
        for w in [0.0, -1.6, f64::NAN] {
            let r = compare_w_strategies(&b, w, &SolverConfig::new());
            assert!(matches!(r, Err(BgcrError::InvalidConfig { .. })));
        }
    }

    #[test]
    fn albedo_rises_with_elevation() {
        let mut rng = StdRng::seed_from_u64(1);
        let b = SyntheticBasins::generate(&SyntheticSpec::new().with_years(2), &mut rng).unwrap();
        let alb: Vec<f64> = b.albedo().iter().copied().collect();
        assert!(alb.windows(2).all(|w| w[1] >= w[0]));
        assert_abs_diff_eq!(alb[0], 0.15, epsilon = 1e-12);
        assert!(alb.iter().all(|&a| (0.12..=0.6).contains(&a)));
    }

    #[test]
    fn mean_annual_sums_months() {
        let f = Field::from_elem(ndarray::IxDyn(&[2, 12, 3]), 2.0);
        assert_eq!(mean_annual(&f).unwrap(), vec![24.0; 3]);
    }
}
