//! Core search orchestration shared by library consumers and the CLI.
//! No display or I/O dependencies.

use crate::pipeline::candidates::expand_candidates;
use crate::pipeline::dedup::dedup_records;
use crate::pipeline::evaluate::{evaluate_pairs, PairRecord};
use crate::pipeline::filter::apply_constraints;
use crate::pipeline::rank::rank_records;
use crate::series::{max_allowable_error, ESeries};

#[derive(Debug, thiserror::Error)]
pub enum VoltDivError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
    #[error("Internal invariant violated: {0}")]
    InvariantViolation(String),
}

/// Search parameters consumed by [`DividerCore::search`].
///
/// Defaults match a common 5V-rail use case: divide 5.0V down to 2.456V
/// with quarter-watt E24 resistors scanned across six decades.
#[derive(Clone, Debug, serde::Serialize)]
pub struct SearchConfig {
    /// Source voltage in volts, must be positive.
    pub source_voltage: f64,
    /// Target output voltage in volts, must lie strictly between zero and
    /// the source voltage.
    pub target_voltage: f64,
    /// Per-resistor dissipation ceiling in watts.
    pub max_resistor_heat: f64,
    /// E-series size: 3, 6, 12, 24, 48, 96 or 192.
    pub series_size: u32,
    /// Number of decade multipliers applied to each mantissa.
    pub decade_range: u32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            source_voltage: 5.0,
            target_voltage: 2.456,
            max_resistor_heat: 0.25,
            series_size: 24,
            decade_range: 6,
        }
    }
}

impl SearchConfig {
    /// Check every precondition before any computation starts.
    pub fn validate(&self) -> Result<(), VoltDivError> {
        if !self.source_voltage.is_finite() || self.source_voltage <= 0.0 {
            return Err(VoltDivError::InvalidConfiguration(format!(
                "source voltage must be positive, got {}",
                self.source_voltage
            )));
        }
        if !self.target_voltage.is_finite()
            || self.target_voltage <= 0.0
            || self.target_voltage >= self.source_voltage
        {
            return Err(VoltDivError::InvalidConfiguration(format!(
                "target voltage must lie strictly between 0 and the source voltage ({}), got {}",
                self.source_voltage, self.target_voltage
            )));
        }
        if !self.max_resistor_heat.is_finite() || self.max_resistor_heat <= 0.0 {
            return Err(VoltDivError::InvalidConfiguration(format!(
                "max resistor heat must be positive, got {}",
                self.max_resistor_heat
            )));
        }
        if self.decade_range < 1 || self.decade_range > 12 {
            return Err(VoltDivError::InvalidConfiguration(format!(
                "decade range must be between 1 and 12, got {}",
                self.decade_range
            )));
        }
        ESeries::from_size(self.series_size)?;
        Ok(())
    }
}

/// Counters for each pipeline stage.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct SearchStats {
    pub candidates: usize,
    pub pairs_evaluated: usize,
    pub passed_filters: usize,
    pub unique_pairs: usize,
}

/// The ordered, deduplicated outcome of one search run.
///
/// An empty `records` list is a valid outcome, not an error: it means no
/// pair satisfied both the heat and the accuracy constraints.
#[derive(Debug, Clone, serde::Serialize)]
pub struct SearchReport {
    pub config: SearchConfig,
    /// Accuracy ceiling implied by the series' step ratio, in percent.
    pub max_allowable_error: f64,
    pub records: Vec<PairRecord>,
    pub stats: SearchStats,
}

impl SearchReport {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The lowest-error combination, if any survived.
    pub fn best(&self) -> Option<&PairRecord> {
        self.records.first()
    }
}

/// Core search API used by the CLI and library consumers.
pub struct DividerCore;

impl DividerCore {
    /// Run the full pipeline: generate the series, expand candidates,
    /// evaluate every ordered pair, filter, rank, deduplicate.
    pub fn search(config: &SearchConfig) -> Result<SearchReport, VoltDivError> {
        config.validate()?;
        let series = ESeries::from_size(config.series_size)?;

        let mantissas = series.mantissas();
        let max_error = max_allowable_error(&mantissas);
        tracing::debug!(
            "Generated {} series: {} mantissas, step tolerance {:.2}%",
            series,
            mantissas.len(),
            max_error
        );

        let candidates = expand_candidates(&mantissas, config.decade_range);
        let mut records = evaluate_pairs(
            &candidates,
            series.digits(),
            config.source_voltage,
            config.target_voltage,
        )?;
        let pairs_evaluated = records.len();
        tracing::debug!(
            "Evaluated {} ordered pairs from {} candidates",
            pairs_evaluated,
            candidates.len()
        );

        apply_constraints(&mut records, config.max_resistor_heat, max_error);
        let passed_filters = records.len();
        tracing::debug!("{} pairs within heat and accuracy limits", passed_filters);

        rank_records(&mut records);
        let mut records = dedup_records(records);
        rank_records(&mut records);
        tracing::info!("Search complete: {} unique combinations", records.len());

        Ok(SearchReport {
            config: config.clone(),
            max_allowable_error: max_error,
            stats: SearchStats {
                candidates: candidates.len(),
                pairs_evaluated,
                passed_filters,
                unique_pairs: records.len(),
            },
            records,
        })
    }
}
