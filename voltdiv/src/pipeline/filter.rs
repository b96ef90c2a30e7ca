//! Power and accuracy constraints.
//!
//! Exclusion is binary: a pair either satisfies both limits or it is
//! dropped. There is no partial or soft-fail state.

use crate::pipeline::evaluate::PairRecord;

/// Drop every record that exceeds the dissipation ceiling or misses the
/// target by more than the series' step tolerance.
pub fn apply_constraints(
    records: &mut Vec<PairRecord>,
    max_resistor_heat: f64,
    max_percent_error: f64,
) {
    records.retain(|r| {
        r.power_dissipation <= max_resistor_heat && r.percent_error <= max_percent_error
    });
}
