//! VoltDiv CLI - voltage divider resistor pair search from the command line.

use clap::{Parser, Subcommand, ValueEnum};
use std::process;
use voltdiv::series::{max_allowable_error, ESeries};
use voltdiv::{DividerCore, SearchConfig, SearchReport};

#[derive(Parser)]
#[command(name = "voltdiv")]
#[command(about = "Voltage divider resistor pair search tool", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search for resistor pairs hitting a target voltage
    Search {
        /// Target output voltage in volts
        #[arg(short, long, value_name = "VOLTS")]
        target: f64,

        /// Source voltage in volts
        #[arg(short, long, value_name = "VOLTS", default_value_t = 5.0)]
        source: f64,

        /// E series size (3, 6, 12, 24, 48, 96 or 192)
        #[arg(short = 'e', long, value_name = "SIZE", default_value_t = 24)]
        series: u32,

        /// Per-resistor dissipation ceiling in watts
        #[arg(long, value_name = "WATTS", default_value_t = 0.25)]
        max_power: f64,

        /// Number of decade multipliers to scan
        #[arg(long, value_name = "COUNT", default_value_t = 6)]
        decades: u32,

        /// Print at most this many combinations
        #[arg(short = 'n', long, value_name = "COUNT")]
        limit: Option<usize>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "human")]
        format: OutputFormat,
    },

    /// Print the mantissa table of an E series
    Series {
        /// E series size (3, 6, 12, 24, 48, 96 or 192)
        #[arg(value_name = "SIZE", default_value_t = 24)]
        size: u32,

        /// Also show the series' step tolerance
        #[arg(short, long)]
        verbose: bool,
    },
}

#[derive(Clone, ValueEnum)]
enum OutputFormat {
    /// Human-readable table
    Human,
    /// JSON output for scripting
    Json,
}

fn main() {
    let cli = Cli::parse();

    let exit_code = match cli.command {
        Commands::Search {
            target,
            source,
            series,
            max_power,
            decades,
            limit,
            format,
        } => handle_search(target, source, series, max_power, decades, limit, format),
        Commands::Series { size, verbose } => handle_series(size, verbose),
    };

    process::exit(exit_code);
}

fn handle_search(
    target: f64,
    source: f64,
    series: u32,
    max_power: f64,
    decades: u32,
    limit: Option<usize>,
    format: OutputFormat,
) -> i32 {
    let config = SearchConfig {
        source_voltage: source,
        target_voltage: target,
        max_resistor_heat: max_power,
        series_size: series,
        decade_range: decades,
    };

    match DividerCore::search(&config) {
        Ok(report) => {
            match format {
                OutputFormat::Human => output_human(&report, limit),
                OutputFormat::Json => output_json(&report, limit),
            }
            0
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

fn output_human(report: &SearchReport, limit: Option<usize>) {
    println!(
        "Max allowable error for E{} series: {:.1}%",
        report.config.series_size, report.max_allowable_error
    );

    if report.is_empty() {
        println!(
            "No resistor combination reaches {}V within the limits.",
            report.config.target_voltage
        );
        return;
    }

    println!(
        "Valid resistor combinations for E{} series:",
        report.config.series_size
    );
    let shown = limit.unwrap_or(report.records.len());
    for rec in report.records.iter().take(shown) {
        println!(
            "{:.3}V\t({:.2}%)\t[{}Ω + {}Ω]E{}\t({:.3}W)",
            rec.output_voltage,
            rec.percent_error,
            rec.norm_r1,
            rec.norm_r2,
            rec.multiplier,
            rec.power_dissipation
        );
    }
    if shown < report.records.len() {
        println!("... {} more", report.records.len() - shown);
    }

    println!(
        "\n{} candidates, {} pairs evaluated, {} within limits, {} unique",
        report.stats.candidates,
        report.stats.pairs_evaluated,
        report.stats.passed_filters,
        report.stats.unique_pairs
    );
}

fn output_json(report: &SearchReport, limit: Option<usize>) {
    let shown = limit.unwrap_or(report.records.len());
    let output = serde_json::json!({
        "config": report.config,
        "max_allowable_error": report.max_allowable_error,
        "stats": report.stats,
        "records": report.records.iter().take(shown).collect::<Vec<_>>(),
    });
    println!("{}", serde_json::to_string_pretty(&output).unwrap());
}

fn handle_series(size: u32, verbose: bool) -> i32 {
    let series = match ESeries::from_size(size) {
        Ok(series) => series,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };

    let mantissas = series.mantissas();
    println!("{} series ({} values per decade):", series, mantissas.len());
    let rendered: Vec<String> = mantissas.iter().map(|m| m.to_string()).collect();
    println!("  {}", rendered.join(", "));

    if verbose {
        println!(
            "\nStep tolerance: {:.1}% between adjacent values",
            max_allowable_error(&mantissas)
        );
        println!("Mantissa digits: {}", series.digits());
    }

    0
}
