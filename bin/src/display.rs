//! Display utilities and output formatting for the duochart CLI.

use anyhow::{Context, Result};
use clap::ValueEnum;
use duochart_lib::prelude::*;
use duochart_lib::XRange;
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

/// Output format for prepared charts.
#[derive(Clone, Copy, ValueEnum)]
pub(crate) enum Format {
    Csv,
    Json,
    Ndjson,
}

impl Format {
    /// Returns the file extension for this format.
    pub(crate) fn extension(self) -> &'static str {
        OutputFormat::from(self).extension()
    }
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Csv => Self::Csv,
            Format::Json => Self::Json,
            Format::Ndjson => Self::Ndjson,
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}

/// Write a prepared chart to `<dir>/<ticker>.<format>`, returning the path.
pub(crate) fn write_chart(chart: &PreparedChart, dir: &Path, format: Format) -> Result<PathBuf> {
    let output = dir.join(format!(
        "{}.{}",
        chart.ticker.as_str().to_lowercase(),
        format.extension()
    ));
    let file = File::create(&output)
        .with_context(|| format!("Failed to create {}", output.display()))?;
    let writer = BufWriter::new(file);

    match format {
        Format::Csv => CsvFormatter::new().write_chart(chart, writer)?,
        Format::Json => JsonFormatter::new().with_pretty(true).write_chart(chart, writer)?,
        Format::Ndjson => JsonFormatter::ndjson().write_chart(chart, writer)?,
    }

    Ok(output)
}

/// Print a per-ticker summary of a prepared pair.
pub(crate) fn print_summary(pair: &ChartPair) {
    println!(
        "{:<10} {:>6} {:>6} {:>6} {:>6} {:>8}",
        "TICKER", "BARS", "GAIN", "LOSS", "FLAT", "SKIPPED"
    );
    println!("{}", "-".repeat(48));

    for chart in pair.charts() {
        let counts = chart.geometry.counts();
        println!(
            "{:<10} {:>6} {:>6} {:>6} {:>6} {:>8}",
            chart.ticker.as_str(),
            chart.series.len(),
            counts.gain,
            counts.loss,
            counts.flat,
            chart.skipped_rows.len()
        );
    }

    match pair.x_range {
        Some(XRange { start, end }) => println!("\nShared x-axis: {start} to {end}"),
        None => println!("\nNo bars in the requested range."),
    }

    for chart in pair.charts() {
        for overlay in &chart.overlays {
            if !overlay.is_defined() {
                println!(
                    "{}: {} needs at least {} bars, skipped",
                    chart.ticker,
                    overlay.kind(),
                    overlay.kind().min_bars()
                );
            }
        }
    }
}
