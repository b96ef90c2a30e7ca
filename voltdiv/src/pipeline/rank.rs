//! Deterministic result ordering.

use std::cmp::Ordering;

use crate::pipeline::evaluate::PairRecord;

/// Stable ascending sort over (percent_error, output_voltage, norm_r1,
/// norm_r2, multiplier).
///
/// The sort runs once before deduplication, making "first occurrence per
/// key" well-defined, and once more for final presentation order. Ties
/// beyond the listed keys keep their original pool order.
pub fn rank_records(records: &mut [PairRecord]) {
    records.sort_by(compare_records);
}

fn compare_records(a: &PairRecord, b: &PairRecord) -> Ordering {
    a.percent_error
        .total_cmp(&b.percent_error)
        .then_with(|| a.output_voltage.total_cmp(&b.output_voltage))
        .then_with(|| a.norm_r1.cmp(&b.norm_r1))
        .then_with(|| a.norm_r2.cmp(&b.norm_r2))
        .then_with(|| a.multiplier.cmp(&b.multiplier))
}
