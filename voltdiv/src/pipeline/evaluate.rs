//! Pair evaluation and canonical normalization.
//!
//! Every ordered pair of candidate values becomes one [`PairRecord`]
//! carrying its electrical quantities and a canonical (mantissa, mantissa,
//! decade) form. Self-pairs (R1 == R2) flow through like any other pair;
//! the filters decide their fate.

use serde::Serialize;

use crate::core::VoltDivError;

/// One evaluated resistor pair.
///
/// `r1` and `r2` are the raw candidate values in ohms. `norm_r1`,
/// `norm_r2` and `multiplier` are the canonical representation: both
/// resistors expressed against one shared power-of-ten exponent, with the
/// smaller value scaled down to the series' digit count. Two pairs that
/// differ only by decade scaling normalize to the same mantissa tuple.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PairRecord {
    pub r1: u64,
    pub r2: u64,
    pub norm_r1: u64,
    pub norm_r2: u64,
    /// Shared power-of-ten exponent of the normalized pair.
    pub multiplier: i32,
    pub output_voltage: f64,
    pub percent_error: f64,
    pub current: f64,
    /// The hotter of the two resistors, in watts.
    pub power_dissipation: f64,
}

/// Evaluate every ordered pair drawn from the candidate pool.
///
/// `digits` is the mantissa width of the series the candidates came from
/// (2 up to E24, 3 from E48).
pub fn evaluate_pairs(
    candidates: &[u64],
    digits: u32,
    source_voltage: f64,
    target_voltage: f64,
) -> Result<Vec<PairRecord>, VoltDivError> {
    let mut records = Vec::with_capacity(candidates.len() * candidates.len());
    for &r1 in candidates {
        for &r2 in candidates {
            records.push(evaluate_pair(r1, r2, digits, source_voltage, target_voltage)?);
        }
    }
    Ok(records)
}

/// Build the record for a single (r1, r2) pair.
pub(crate) fn evaluate_pair(
    r1: u64,
    r2: u64,
    digits: u32,
    source_voltage: f64,
    target_voltage: f64,
) -> Result<PairRecord, VoltDivError> {
    let total = (r1 + r2) as f64;
    let output_voltage = source_voltage * r2 as f64 / total;
    let percent_error = ((output_voltage - target_voltage) / target_voltage).abs() * 100.0;
    let current = source_voltage / total;
    let power_r1 = (source_voltage - output_voltage) * current;
    let power_r2 = output_voltage * current;
    let power_dissipation = power_r1.max(power_r2);

    let (norm_r1, norm_r2, multiplier) = normalize(r1, r2, digits)?;

    Ok(PairRecord {
        r1,
        r2,
        norm_r1,
        norm_r2,
        multiplier,
        output_voltage,
        percent_error,
        current,
        power_dissipation,
    })
}

/// Reduce a pair to its canonical (mantissa, mantissa, exponent) triple.
///
/// The exponent is chosen so the smaller value lands at `digits` digits.
/// Candidate construction guarantees positive values and an exact integer
/// division; a zero value here means the pool was corrupted, which is
/// fatal rather than silently recovered.
fn normalize(r1: u64, r2: u64, digits: u32) -> Result<(u64, u64, i32), VoltDivError> {
    let lowest = r1.min(r2);
    if lowest == 0 {
        return Err(VoltDivError::InvariantViolation(format!(
            "candidate resistor values must be positive, got pair ({}, {})",
            r1, r2
        )));
    }
    let multiplier = lowest.ilog10() as i32 - digits as i32 + 1;
    let (norm_r1, norm_r2) = if multiplier >= 0 {
        let scale = 10u64.pow(multiplier as u32);
        (r1 / scale, r2 / scale)
    } else {
        // Sub-digit-count values cannot come from a generated pool, but
        // normalization must stay total for them.
        let scale = 10u64.pow(multiplier.unsigned_abs());
        (r1 * scale, r2 * scale)
    };
    Ok((norm_r1, norm_r2, multiplier))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn divider_equation_holds() {
        let rec = evaluate_pair(10_000, 15_000, 2, 5.0, 3.0).unwrap();
        assert!((rec.output_voltage - 5.0 * 15_000.0 / 25_000.0).abs() < 1e-12);
        assert!((rec.current - 5.0 / 25_000.0).abs() < 1e-15);
    }

    #[test]
    fn power_is_max_of_both_legs() {
        let rec = evaluate_pair(100, 400, 2, 5.0, 4.0).unwrap();
        // R2 drops 4V at 10mA, R1 only 1V.
        assert!((rec.power_dissipation - 4.0 * 0.01).abs() < 1e-12);
    }

    #[test]
    fn normalization_shares_one_exponent() {
        let rec = evaluate_pair(10_000, 15_000, 2, 5.0, 3.0).unwrap();
        assert_eq!((rec.norm_r1, rec.norm_r2, rec.multiplier), (10, 15, 3));

        let rec = evaluate_pair(4_700, 10, 2, 5.0, 3.0).unwrap();
        assert_eq!((rec.norm_r1, rec.norm_r2, rec.multiplier), (4_700, 10, 0));
    }

    #[test]
    fn normalization_uses_three_digits_for_fine_series() {
        let rec = evaluate_pair(102_000, 475_000, 3, 5.0, 3.0).unwrap();
        assert_eq!((rec.norm_r1, rec.norm_r2, rec.multiplier), (102, 475, 3));
    }

    #[test]
    fn decade_scaled_pairs_normalize_identically() {
        let a = evaluate_pair(1_500, 2_200, 2, 5.0, 3.0).unwrap();
        let b = evaluate_pair(150_000, 220_000, 2, 5.0, 3.0).unwrap();
        assert_eq!((a.norm_r1, a.norm_r2), (b.norm_r1, b.norm_r2));
        assert_ne!(a.multiplier, b.multiplier);
        assert_eq!(a.output_voltage, b.output_voltage);
    }

    #[test]
    fn self_pair_halves_the_source() {
        let rec = evaluate_pair(470, 470, 2, 5.0, 2.5).unwrap();
        assert!((rec.output_voltage - 2.5).abs() < 1e-12);
        assert!(rec.percent_error < 1e-9);
    }

    #[test]
    fn sub_digit_value_normalizes_without_panicking() {
        let rec = evaluate_pair(5, 70, 2, 5.0, 3.0).unwrap();
        assert_eq!((rec.norm_r1, rec.norm_r2, rec.multiplier), (50, 700, -1));
    }

    #[test]
    fn zero_value_is_an_invariant_violation() {
        let err = evaluate_pair(0, 470, 2, 5.0, 3.0).unwrap_err();
        assert!(matches!(err, VoltDivError::InvariantViolation(_)));
    }

    #[test]
    fn pair_count_is_pool_size_squared() {
        let pool = [10, 100, 22, 220];
        let records = evaluate_pairs(&pool, 2, 5.0, 3.0).unwrap();
        assert_eq!(records.len(), 16);
    }
}
