//! Precipitation seasonality index.

use ndarray::{Axis, Zip};
use petcr_numeric::Field;

use crate::error::BgcrError;

/// Months per year on the second axis of monthly inputs.
pub const MONTHS_PER_YEAR: usize = 12;

/// Computes the seasonality index from monthly precipitation.
///
/// For each year, `SI_year = Σ |P_month − P_annual/12| / P_annual` (zero when
/// the annual total is not positive); the result is the mean over years.
/// The input is laid out as `(years, 12, ...)` and the output has the
/// trailing shape `(...)`, 0-d for a `(years, 12)` record.
///
/// # Errors
///
/// Returns [`BgcrError::InvalidMonthAxis`] if the input has fewer than two
/// axes or the second axis is not 12 long, and [`BgcrError::EmptyData`] if
/// there are no years.
pub fn seasonal_index(p_monthly: &Field) -> Result<Field, BgcrError> {
    let shape = p_monthly.shape();
    if shape.len() < 2 || shape[1] != MONTHS_PER_YEAR {
        return Err(BgcrError::InvalidMonthAxis {
            shape: shape.to_vec(),
        });
    }
    if shape[0] == 0 {
        return Err(BgcrError::EmptyData);
    }

    let annual = p_monthly.sum_axis(Axis(1));
    let uniform_share = &annual / MONTHS_PER_YEAR as f64;

    let mut spread = Field::zeros(annual.raw_dim());
    for month in p_monthly.axis_iter(Axis(1)) {
        Zip::from(&mut spread)
            .and(&month)
            .and(&uniform_share)
            .for_each(|s, &p, &share| *s += (p - share).abs());
    }

    let si_year = Zip::from(&spread)
        .and(&annual)
        .map_collect(|&s, &a| if a > 0.0 { s / a } else { 0.0 });

    si_year.mean_axis(Axis(0)).ok_or(BgcrError::EmptyData)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use petcr_numeric::field_from_vec;

    #[test]
    fn uniform_rain_has_zero_seasonality() {
        let p = field_from_vec(&[3, 12], vec![40.0; 36]).unwrap();
        let si = seasonal_index(&p).unwrap();
        assert_eq!(si.ndim(), 0);
        assert_abs_diff_eq!(si.sum(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn single_wet_month_is_maximal() {
        let mut values = vec![0.0; 12];
        values[6] = 120.0;
        let p = field_from_vec(&[1, 12], values).unwrap();
        // |120 − 10| + 11·10 = 220, over 120
        assert_abs_diff_eq!(seasonal_index(&p).unwrap().sum(), 220.0 / 120.0, epsilon = 1e-12);
    }

    #[test]
    fn dry_year_counts_as_zero() {
        let mut values = vec![0.0; 24];
        values[12] = 120.0;
        let p = field_from_vec(&[2, 12], values).unwrap();
        assert_abs_diff_eq!(seasonal_index(&p).unwrap().sum(), 110.0 / 120.0, epsilon = 1e-12);
    }

    #[test]
    fn wrong_month_axis() {
        let p = field_from_vec(&[2, 6], vec![1.0; 12]).unwrap();
        assert!(matches!(
            seasonal_index(&p),
            Err(BgcrError::InvalidMonthAxis { .. })
        ));
    }

    #[test]
    fn one_dimensional_input_rejected() {
        let p = field_from_vec(&[12], vec![1.0; 12]).unwrap();
        assert!(matches!(
            seasonal_index(&p),
            Err(BgcrError::InvalidMonthAxis { .. })
        ));
    }

    #[test]
    fn zero_years_is_empty() {
        let p = field_from_vec(&[0, 12], vec![]).unwrap();
        assert!(matches!(seasonal_index(&p), Err(BgcrError::EmptyData)));
    }

    #[test]
    fn trailing_axes_are_kept() {
        let p = field_from_vec(&[2, 12, 3], vec![10.0; 72]).unwrap();
        assert_eq!(seasonal_index(&p).unwrap().shape(), &[3]);
    }
}
