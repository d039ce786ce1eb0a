//! Monthly BGCR solver.
//!
//! Eliminates the unobserved wet-environment evaporation between the
//! Tixeront-Fu curve and the generalized complementary relationship:
//!
//! 1. `Φ = P/Epa`
//! 2. `z = 1 + Φ − (1 + Φ^w)^(1/w)` (unclamped)
//! 3. `x` solves `x³ − 2x² + z = 0`
//! 4. `β_c = (Epa/Erad) · x`
//! 5. `y = clamp(z, 0, 1)`, `E = y · Epa`

use ndarray::{ArrayD, ArrayViewD, Dimension, Zip};
use petcr_numeric::{Field, broadcast_all, clamp_field, cubic_root_trig_field, safe_div};
use tracing::{debug, warn};

use crate::budyko::budyko_tixeront_fu_residual;
use crate::config::{InputPolicy, SolverConfig};
use crate::error::BgcrError;
use crate::result::BgcrOutput;

/// A violated physical precondition of one cell.
struct Violation {
    field: &'static str,
    value: f64,
    reason: &'static str,
}

fn check_cell(p: f64, epa: f64, erad: f64, w: f64) -> Option<Violation> {
    let inputs = [("precipitation", p), ("epa", epa), ("erad", erad), ("w", w)];
    if let Some(&(field, value)) = inputs.iter().find(|(_, v)| !v.is_finite()) {
        return Some(Violation {
            field,
            value,
            reason: "must be finite",
        });
    }
    let violation = |field, value, reason| Some(Violation { field, value, reason });
    if p < 0.0 {
        violation("precipitation", p, "must be non-negative")
    } else if epa <= 0.0 {
        violation("epa", epa, "must be positive")
    } else if erad < 0.0 {
        violation("erad", erad, "must be non-negative")
    } else if w <= 0.0 {
        violation("w", w, "must be positive")
    } else {
        None
    }
}

/// Returns the first invalid cell as an error.
fn first_invalid(v: &[ArrayViewD<'_, f64>]) -> Option<BgcrError> {
    let cells = v[0]
        .indexed_iter()
        .zip(v[1].iter())
        .zip(v[2].iter())
        .zip(v[3].iter());
    for ((((idx, &p), &epa), &erad), &w) in cells {
        if let Some(bad) = check_cell(p, epa, erad, w) {
            return Some(BgcrError::InvalidInput {
                field: bad.field.to_string(),
                index: idx.slice().to_vec(),
                value: bad.value,
                reason: bad.reason.to_string(),
            });
        }
    }
    None
}

/// Returns `true` for every cell that passes the preconditions.
fn valid_cells(v: &[ArrayViewD<'_, f64>]) -> ArrayD<bool> {
    Zip::from(&v[0])
        .and(&v[1])
        .and(&v[2])
        .and(&v[3])
        .map_collect(|&p, &epa, &erad, &w| check_cell(p, epa, erad, w).is_none())
}

/// Solves the monthly BGCR system.
///
/// Inputs broadcast against each other; every output has the common shape.
/// The solver is calibration-free and applies no physical validation, so
/// negative precipitation or an out-of-range `w` propagate through the
/// formulas. Only `w == 0` is rejected. Use [`bgcr_monthly_with`] to choose another
/// [`InputPolicy`].
///
/// # Errors
///
/// Returns [`BgcrError::Numeric`] if the inputs do not broadcast and
/// [`BgcrError::ZeroShapeParameter`] if any `w` is exactly zero.
///
/// # Example
///
/// ```
/// use petcr_bgcr::bgcr_monthly;
/// use petcr_numeric::{field_from_vec, scalar};
///
/// let p = field_from_vec(&[3], vec![10.0, 40.0, 90.0]).unwrap();
/// let epa = field_from_vec(&[3], vec![60.0, 80.0, 100.0]).unwrap();
/// let erad = field_from_vec(&[3], vec![40.0, 55.0, 70.0]).unwrap();
/// let out = bgcr_monthly(&p, &epa, &erad, &scalar(1.6)).unwrap();
/// assert_eq!(out.shape(), &[3]);
/// ```
pub fn bgcr_monthly(
    p: &Field,
    epa: &Field,
    erad: &Field,
    w: &Field,
) -> Result<BgcrOutput, BgcrError> {
    let config = SolverConfig::new().with_policy(InputPolicy::Passthrough);
    bgcr_monthly_with(p, epa, erad, w, &config)
}

/// Solves the monthly BGCR system under `config`.
///
/// # Errors
///
/// Returns [`BgcrError::InvalidConfig`] if `config` fails validation,
/// [`BgcrError::Numeric`] if the inputs do not broadcast,
/// [`BgcrError::InvalidInput`] for the first invalid cell under
/// [`InputPolicy::Strict`], and [`BgcrError::ZeroShapeParameter`] for a
/// zero `w` under [`InputPolicy::Passthrough`].
pub fn bgcr_monthly_with(
    p: &Field,
    epa: &Field,
    erad: &Field,
    w: &Field,
    config: &SolverConfig,
) -> Result<BgcrOutput, BgcrError> {
    config.validate()?;
    let (shape, v) = broadcast_all(&[p, epa, erad, w])?;
    let eps = config.eps();

    let mut phi = Zip::from(&v[0])
        .and(&v[1])
        .map_collect(|&p, &epa| safe_div(p, epa, eps));

    let mut masked_cells = 0;
    match config.policy() {
        InputPolicy::Strict => {
            if let Some(err) = first_invalid(&v) {
                return Err(err);
            }
        }
        InputPolicy::Mask => {
            let valid = valid_cells(&v);
            masked_cells = valid.iter().filter(|&&ok| !ok).count();
            Zip::from(&mut phi).and(&valid).for_each(|phi, &ok| {
                if !ok {
                    *phi = f64::NAN;
                }
            });
            if masked_cells > 0 {
                warn!(cells = masked_cells, "masked cells with invalid inputs");
            }
        }
        InputPolicy::Passthrough => {
            if let Some((idx, _)) = v[3].indexed_iter().find(|&(_, &w)| w == 0.0) {
                return Err(BgcrError::ZeroShapeParameter {
                    index: idx.slice().to_vec(),
                });
            }
        }
    }

    let z = Zip::from(&phi)
        .and(&v[3])
        .map_collect(|&phi, &w| budyko_tixeront_fu_residual(phi, w));
    let (x, clamped_cells) = cubic_root_trig_field(&z);
    if clamped_cells > 0 {
        warn!(
            cells = clamped_cells,
            "cubic arcsine argument clamped beyond rounding, budyko residual outside [0, 32/27]"
        );
    }

    let ratio = clamp_field(&z, Some(0.0), Some(1.0));
    let beta_c = Zip::from(&v[1])
        .and(&v[2])
        .and(&x)
        .map_collect(|&epa, &erad, &x| safe_div(epa, erad, eps) * x);
    let evaporation = Zip::from(&ratio)
        .and(&v[1])
        .map_collect(|&y, &epa| y * epa);

    debug!(shape = ?shape, policy = ?config.policy(), "bgcr monthly solved");
    Ok(BgcrOutput::new(
        evaporation,
        beta_c,
        x,
        ratio,
        clamped_cells,
        masked_cells,
    ))
}
