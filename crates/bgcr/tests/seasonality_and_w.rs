//! Integration tests for the seasonality index and the `w` schemes.

use petcr_bgcr::{BgcrError, WScheme, resolve_w, seasonal_index, w_from_si, w_from_si_albedo};
use petcr_numeric::{field_from_vec, scalar};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[test]
fn synthetic_two_year_record_has_sane_index() {
    let mut rng = StdRng::seed_from_u64(42);
    let values: Vec<f64> = (0..24)
        .map(|i| {
            let month = (i % 12) as f64;
            let base = 60.0 + 50.0 * (2.0 * std::f64::consts::PI * month / 12.0).sin();
            (base + rng.random_range(-5.0..5.0)).max(0.0)
        })
        .collect();
    let p = field_from_vec(&[2, 12], values).unwrap();

    let si = seasonal_index(&p).unwrap();
    assert_eq!(si.ndim(), 0);
    let v = si.sum();
    assert!(v.is_finite());
    assert!((0.0..=3.0).contains(&v), "SI={v}");
}

#[test]
fn seasonality_is_deterministic() {
    let values: Vec<f64> = (0..36).map(|i| ((i * 7) % 11) as f64 * 10.0).collect();
    let p = field_from_vec(&[3, 12], values).unwrap();
    assert_eq!(seasonal_index(&p).unwrap(), seasonal_index(&p).unwrap());
}

#[test]
fn six_month_axis_is_rejected() {
    let p = field_from_vec(&[2, 6, 4], vec![10.0; 48]).unwrap();
    match seasonal_index(&p) {
        Err(BgcrError::InvalidMonthAxis { shape }) => assert_eq!(shape, vec![2, 6, 4]),
        other => panic!("expected InvalidMonthAxis, got {other:?}"),
    }
}

#[test]
fn per_cell_index_on_a_grid() {
    // cell 0 uniform, cell 1 all rain in one month
    let mut values = vec![0.0; 2 * 12 * 2];
    for y in 0..2 {
        for m in 0..12 {
            values[(y * 12 + m) * 2] = 30.0;
        }
        values[(y * 12 + 5) * 2 + 1] = 360.0;
    }
    let p = field_from_vec(&[2, 12, 2], values).unwrap();
    let si = seasonal_index(&p).unwrap();
    assert_eq!(si.shape(), &[2]);
    assert!(si[[0]].abs() < 1e-12);
    assert!((si[[1]] - 22.0 / 12.0).abs() < 1e-12);
}

#[test]
fn regressions_finite_and_positive_over_calibration_grid() {
    let si: Vec<f64> = (0..=20).map(|i| i as f64 / 20.0).collect();
    let si = field_from_vec(&[21], si).unwrap();
    let albedo = field_from_vec(&[5, 1], vec![0.1, 0.2, 0.3, 0.4, 0.5]).unwrap();

    let w1 = w_from_si(&si);
    assert_eq!(w1.shape(), &[21]);
    assert!(w1.iter().all(|&w| w.is_finite() && w > 0.0));

    let w2 = w_from_si_albedo(&si, &albedo).unwrap();
    assert_eq!(w2.shape(), &[5, 21]);
    assert!(w2.iter().all(|&w| w.is_finite() && w > 0.0));
}

#[test]
fn dual_scheme_falls_with_albedo() {
    let si = scalar(0.5);
    let dark = w_from_si_albedo(&si, &scalar(0.12)).unwrap().sum();
    let bright = w_from_si_albedo(&si, &scalar(0.6)).unwrap().sum();
    assert!(dark > bright);
}

#[test]
fn resolve_follows_scheme() {
    let si = field_from_vec(&[3], vec![0.2, 0.5, 0.8]).unwrap();
    let albedo = field_from_vec(&[3], vec![0.15, 0.25, 0.35]).unwrap();

    let w = resolve_w(WScheme::SeasonalityIndex, &si, Some(&albedo)).unwrap();
    assert_eq!(w, w_from_si(&si));

    let w = resolve_w(WScheme::SeasonalityAlbedo, &si, Some(&albedo)).unwrap();
    assert_eq!(w, w_from_si_albedo(&si, &albedo).unwrap());

    let bad = field_from_vec(&[2], vec![0.2, 0.3]).unwrap();
    assert!(matches!(
        resolve_w(WScheme::SeasonalityAlbedo, &si, Some(&bad)),
        Err(BgcrError::Numeric(_))
    ));
}
