//! Monthly Budyko-Generalized-Complementary-Relationship (BGCR) evaporation.
//!
//! Couples the long-term Budyko water balance (Tixeront-Fu form) with the
//! short-term generalized complementary relationship. The wet-environment
//! evaporation that the complementary relationship needs is never observed:
//! it is eliminated through a cubic whose root is found in closed form, so
//! monthly evaporation follows from precipitation, apparent potential
//! evaporation, its radiation term and a regionalized shape parameter `w`.
//!
//! # Pipeline
//!
//! 1. **Partition** meteorology into `Erad` and `Eaero` (Penman); `Epa = Erad + Eaero`
//! 2. **Regionalize** `w` from the seasonality index, optionally with albedo
//! 3. **Solve** `{P, Epa, Erad, w}` for `E` and the diagnostics `β_c`, `x` and `E/Epa`
//!
//! Every input is a [`Field`](petcr_numeric::Field) and broadcasts, so a
//! scalar `w`, a per-basin `w` and a `(years, 12, basins)` grid mix freely.
//!
//! # Glossary
//!
//! - **P**: precipitation over the accounting period
//! - **Epa**: apparent potential evaporation
//! - **Erad**: radiation-driven part of `Epa`
//! - **SI**: precipitation seasonality index
//! - **w**: Budyko shape parameter (`> 0`, typically 1-4)
//! - **β_c**: complementary coefficient, `(Epa/Erad)·x`
//!
//! # Quick Start
//!
//! ```
//! use petcr_bgcr::{bgcr_monthly, seasonal_index, w_from_si_albedo};
//! use petcr_numeric::{field_from_vec, scalar};
//!
//! let p: Vec<f64> = (0..24).map(|i| 20.0 + 5.0 * (i % 12) as f64).collect();
//! let p_monthly = field_from_vec(&[2, 12], p).unwrap();
//! let si = seasonal_index(&p_monthly).unwrap();
//! let w = w_from_si_albedo(&si, &scalar(0.2)).unwrap();
//!
//! let out = bgcr_monthly(&p_monthly, &scalar(90.0), &scalar(60.0), &w).unwrap();
//! assert_eq!(out.evaporation().shape(), &[2, 12]);
//! ```

mod budyko;
mod config;
mod error;
mod pipeline;
mod result;
mod seasonality;
mod solver;
mod synthetic;
mod w_scheme;

pub use budyko::{
    budyko_tixeront_fu_ratio, budyko_tixeront_fu_ratio_with_eps, budyko_tixeront_fu_residual,
};
pub use config::{InputPolicy, PipelineConfig, SolverConfig, WScheme};
pub use error::BgcrError;
pub use pipeline::{MeteoForcing, estimate_et};
pub use result::{BgcrEstimate, BgcrOutput};
pub use seasonality::{MONTHS_PER_YEAR, seasonal_index};
pub use solver::{bgcr_monthly, bgcr_monthly_with};
pub use synthetic::{StrategyComparison, SyntheticBasins, SyntheticSpec, compare_w_strategies};
pub use w_scheme::{SI_CALIBRATION_RANGE, resolve_w, w_from_si, w_from_si_albedo};
