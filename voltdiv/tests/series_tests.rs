//! Series generation properties across every supported size.

use voltdiv::series::{max_allowable_error, ESeries, SUPPORTED_SIZES};
use voltdiv::VoltDivError;

#[test]
fn every_series_has_exactly_its_size() {
    for size in SUPPORTED_SIZES {
        let series = ESeries::from_size(size).unwrap();
        assert_eq!(series.mantissas().len(), size as usize, "{}", series);
    }
}

#[test]
fn mantissas_are_in_range_and_unique() {
    for size in SUPPORTED_SIZES {
        let series = ESeries::from_size(size).unwrap();
        let mantissas = series.mantissas();
        for &m in &mantissas {
            assert!((10..=999).contains(&m), "{}: {} out of range", series, m);
        }
        let mut sorted = mantissas.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), mantissas.len(), "{} has duplicates", series);
    }
}

#[test]
fn mantissa_width_matches_series_digits() {
    for size in SUPPORTED_SIZES {
        let series = ESeries::from_size(size).unwrap();
        let (lo, hi) = if series.digits() == 2 { (10, 99) } else { (100, 999) };
        for m in series.mantissas() {
            assert!((lo..=hi).contains(&m), "{}: {}", series, m);
        }
    }
}

#[test]
fn e24_deviates_from_formula_at_corrected_positions() {
    let e24 = ESeries::E24.mantissas();
    assert_eq!(&e24[10..17], &[27, 30, 33, 36, 39, 43, 47]);
    assert_eq!(e24[22], 82);
}

#[test]
fn e24_step_tolerance_is_ten_percent() {
    let mantissas = ESeries::E24.mantissas();
    assert_eq!(&mantissas[..2], &[10, 11]);
    let err = max_allowable_error(&mantissas);
    assert!((err - 10.0).abs() < 1e-9, "got {}", err);
}

#[test]
fn unsupported_sizes_fail_fast() {
    let err = ESeries::from_size(50).unwrap_err();
    assert!(matches!(err, VoltDivError::InvalidConfiguration(_)));
    assert!(err.to_string().contains("50"));
}
