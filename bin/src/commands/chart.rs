//! Chart command implementation.
//!
//! Loads both tickers from a CSV directory, prepares their candles and
//! overlays, and writes one output file per ticker.

use crate::display::{Format, print_summary, write_chart};
use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use duochart_lib::prelude::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{info, warn};

/// Prepare and write charts for two tickers.
#[allow(clippy::too_many_arguments)]
pub(crate) fn chart(
    ticker1: &str,
    ticker2: &str,
    start_str: &str,
    end_str: &str,
    indicators: Vec<String>,
    data_dir: Option<PathBuf>,
    output_dir: &Path,
    format: Format,
    quiet: bool,
) -> Result<()> {
    if ticker1.trim().is_empty() || ticker2.trim().is_empty() {
        bail!("Both ticker identifiers are required");
    }

    let start = NaiveDate::parse_from_str(start_str, "%Y-%m-%d")
        .with_context(|| format!("Invalid start date: {start_str}"))?;
    let end = NaiveDate::parse_from_str(end_str, "%Y-%m-%d")
        .with_context(|| format!("Invalid end date: {end_str}"))?;

    let request = ChartRequest::new(ticker1, ticker2, start, end, indicators)?;

    let source = data_dir.map_or_else(CsvDirSource::with_default_path, CsvDirSource::new);
    info!(dir = %source.dir().display(), "reading price tables");

    let progress = if quiet {
        ProgressBar::hidden()
    } else {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")?,
        );
        pb.enable_steady_tick(Duration::from_millis(100));
        pb.set_message(format!(
            "Preparing {} and {} ({})",
            request.primary, request.secondary, request.range
        ));
        pb
    };

    let pair = prepare_pair(&request, &source)?;
    progress.finish_and_clear();

    // Unsupported names are identical on both charts; report them once.
    for err in &pair.primary.indicator_errors {
        warn!("{err}");
        if !quiet {
            eprintln!("Skipping indicator: {err}");
        }
    }
    for chart in pair.charts() {
        for err in &chart.skipped_rows {
            warn!(ticker = %chart.ticker, "{err}");
        }
    }

    let mut written = Vec::with_capacity(2);
    for chart in pair.charts() {
        written.push(write_chart(chart, output_dir, format)?);
    }

    if !quiet {
        print_summary(&pair);
        println!();
        for path in &written {
            println!("Output written to: {}", path.display());
        }
    }

    Ok(())
}
