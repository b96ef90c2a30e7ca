//! VoltDiv - voltage divider resistor pair search
//!
//! This library finds practical two-resistor voltage divider combinations
//! that convert a fixed source voltage to a target voltage, drawing both
//! resistors from a standard E-series and rejecting pairs that would
//! dissipate too much heat or miss the target by more than the series'
//! own step tolerance.
//!
//! # Quick Start
//!
//! ```
//! use voltdiv::{DividerCore, SearchConfig};
//!
//! let config = SearchConfig {
//!     source_voltage: 5.0,
//!     target_voltage: 3.3,
//!     ..SearchConfig::default()
//! };
//! let report = DividerCore::search(&config).unwrap();
//!
//! for rec in report.records.iter().take(3) {
//!     println!(
//!         "{:.3}V ({:.2}%) [{}Ω + {}Ω]E{} ({:.3}W)",
//!         rec.output_voltage, rec.percent_error,
//!         rec.norm_r1, rec.norm_r2, rec.multiplier,
//!         rec.power_dissipation,
//!     );
//! }
//! ```
//!
//! # Features
//!
//! - **E-series tables**: E3 through E192, including the historical
//!   corrections to the pure logarithmic spacing
//! - **Full pair search**: every ordered pair across six decades of
//!   multipliers, evaluated, filtered and deduplicated
//! - **Canonical results**: each surviving pair reported once, as a
//!   (mantissa, mantissa, decade) triple with its electrical quantities

pub mod core;
pub mod pipeline;
pub mod series;

// Re-export main types
pub use crate::core::{
    DividerCore, SearchConfig, SearchReport, SearchStats, VoltDivError,
};
pub use crate::pipeline::evaluate::PairRecord;
pub use crate::series::ESeries;

/// Run a divider search (convenience wrapper).
pub fn search(config: &SearchConfig) -> Result<SearchReport, VoltDivError> {
    DividerCore::search(config)
}

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{
        DividerCore, ESeries, PairRecord, SearchConfig, SearchReport, SearchStats, VoltDivError,
    };
}
