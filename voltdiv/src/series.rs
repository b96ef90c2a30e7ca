//! Standard E-series mantissa tables.
//!
//! The tables are generated from the E192 logarithmic base rather than
//! stored whole: `round(round(10^(i/192), 2) * 100)` for i in [0, 192)
//! gives the three-digit E192 mantissas, and the smaller series are even
//! subsamples of it. The published E24 values deviate from that formula
//! in eight places (27, 30, 33, 36, 39, 43, 47 and 82); those are applied
//! as literal corrections, and E3/E6/E12 are subsampled from the corrected
//! E24 table so the deviations carry through.

use std::fmt;

use crate::core::VoltDivError;

/// Series sizes with a standardized value table.
pub const SUPPORTED_SIZES: [u32; 7] = [3, 6, 12, 24, 48, 96, 192];

/// Positions 10..=16 of the E24 table, where the standard departs from the
/// rounded logarithmic spacing.
const E24_CORRECTIONS_10_16: [u32; 7] = [27, 30, 33, 36, 39, 43, 47];
/// Position 22 of the E24 table: the standard says 82, the formula 83.
const E24_CORRECTION_22: u32 = 82;

/// A standard IEC 60063 preferred-value series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
pub enum ESeries {
    E3,
    E6,
    E12,
    E24,
    E48,
    E96,
    E192,
}

impl ESeries {
    /// Map a member count to its series, failing on anything outside the
    /// standardized set.
    pub fn from_size(size: u32) -> Result<Self, VoltDivError> {
        match size {
            3 => Ok(ESeries::E3),
            6 => Ok(ESeries::E6),
            12 => Ok(ESeries::E12),
            24 => Ok(ESeries::E24),
            48 => Ok(ESeries::E48),
            96 => Ok(ESeries::E96),
            192 => Ok(ESeries::E192),
            other => Err(VoltDivError::InvalidConfiguration(format!(
                "invalid E series size {}. Must be one of: 3, 6, 12, 24, 48, 96, or 192",
                other
            ))),
        }
    }

    /// Number of values per decade.
    pub fn size(&self) -> u32 {
        match self {
            ESeries::E3 => 3,
            ESeries::E6 => 6,
            ESeries::E12 => 12,
            ESeries::E24 => 24,
            ESeries::E48 => 48,
            ESeries::E96 => 96,
            ESeries::E192 => 192,
        }
    }

    /// Significant digits of a mantissa: two up to E24, three from E48.
    pub fn digits(&self) -> u32 {
        if self.size() <= 24 {
            2
        } else {
            3
        }
    }

    /// The series' mantissa table, in generation order (ascending).
    pub fn mantissas(&self) -> Vec<u32> {
        let size = self.size() as usize;
        if size >= 48 {
            // 192 is evenly divisible by every supported size, so the
            // subsample step is always exact.
            e192_table().into_iter().step_by(192 / size).collect()
        } else {
            e24_table().into_iter().step_by(24 / size).collect()
        }
    }
}

impl fmt::Display for ESeries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{}", self.size())
    }
}

/// Worst-case quantization step of a series, as a percentage.
///
/// The ratio between the first two mantissas approximates the spacing of
/// adjacent standard values and bounds the output accuracy any pair from
/// the series can be expected to hit.
pub fn max_allowable_error(mantissas: &[u32]) -> f64 {
    debug_assert!(mantissas.len() >= 2);
    (mantissas[1] as f64 / mantissas[0] as f64 - 1.0) * 100.0
}

/// Three-digit E192 base table from the logarithmic formula.
fn e192_table() -> Vec<u32> {
    (0..192)
        .map(|i| {
            let x = 10f64.powf(i as f64 / 192.0);
            let two_places = (x * 100.0).round() / 100.0;
            (two_places * 100.0).round() as u32
        })
        .collect()
}

/// Two-digit E24 table: every 8th E192 entry compressed to two digits,
/// with the historical corrections written over the formula output.
fn e24_table() -> Vec<u32> {
    let mut table: Vec<u32> = e192_table()
        .into_iter()
        .step_by(8)
        .map(|v| (v as f64 / 10.0).round() as u32)
        .collect();
    table[10..17].copy_from_slice(&E24_CORRECTIONS_10_16);
    table[22] = E24_CORRECTION_22;
    table
}
