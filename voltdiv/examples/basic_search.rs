//! Basic search example: find divider pairs and print the top matches.

use voltdiv::prelude::*;

fn main() -> Result<(), VoltDivError> {
    let target = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(2.456);

    let config = SearchConfig {
        target_voltage: target,
        ..SearchConfig::default()
    };

    let report = DividerCore::search(&config)?;

    println!(
        "Dividing {}V down to {}V with E{} resistors",
        config.source_voltage, config.target_voltage, config.series_size
    );
    println!(
        "{} of {} pairs within limits, {} unique\n",
        report.stats.passed_filters, report.stats.pairs_evaluated, report.stats.unique_pairs
    );

    if report.is_empty() {
        println!("No combination satisfies the constraints.");
        return Ok(());
    }

    for rec in report.records.iter().take(10) {
        println!(
            "{:.3}V\t({:.2}%)\t[{}Ω + {}Ω]E{}\t({:.3}W)",
            rec.output_voltage, rec.percent_error, rec.norm_r1, rec.norm_r2, rec.multiplier,
            rec.power_dissipation
        );
    }

    Ok(())
}
