//! Synthetic price data for duochart benchmarks.

use chrono::{Days, NaiveDate};
use duochart_lib::{PriceBar, PriceSeries, RawRow};

/// First date of every generated series.
pub const BASE_DATE: NaiveDate = match NaiveDate::from_ymd_opt(2020, 1, 1) {
    Some(date) => date,
    None => panic!("invalid base date"),
};

/// Series lengths exercised by the benchmarks, in bars.
pub const SIZES: [usize; 4] = [50, 252, 2_520, 25_200];

/// Generates `n` consecutive daily bars following a drifting sine wave.
///
/// The output is deterministic so runs are comparable.
#[must_use]
pub fn synthetic_bars(n: usize) -> Vec<PriceBar> {
    (0..n)
        .map(|i| {
            let t = i as f64;
            let open = 100.0 + 0.05 * t + (t / 7.0).sin() * 3.0;
            let close = 100.0 + 0.05 * t + ((t + 1.0) / 7.0).sin() * 3.0;
            let high = open.max(close) + 0.5;
            let low = open.min(close) - 0.5;
            let date = BASE_DATE + Days::new(i as u64);
            PriceBar::new(date, open, high, low, close)
        })
        .collect()
}

/// Generates a normalized series of `n` bars.
#[must_use]
pub fn synthetic_series(n: usize) -> PriceSeries {
    PriceSeries::from_bars(synthetic_bars(n))
}

/// Generates `n` raw text rows, as a CSV source would deliver them.
#[must_use]
pub fn synthetic_rows(n: usize) -> Vec<RawRow> {
    synthetic_bars(n)
        .into_iter()
        .map(|bar| {
            RawRow::new(
                bar.date.format("%Y-%m-%d").to_string(),
                bar.open.to_string(),
                bar.high.to_string(),
                bar.low.to_string(),
                bar.close.to_string(),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_synthetic_rows_normalize_cleanly() {
        let normalized = duochart_lib::normalize(synthetic_rows(120));
        assert!(normalized.is_clean());
        assert_eq!(normalized.series.len(), 120);
        assert_eq!(normalized.series.first_date(), Some(BASE_DATE));
    }

    #[test]
    fn test_synthetic_bars_are_consistent() {
        assert!(synthetic_bars(500).iter().all(PriceBar::is_consistent));
    }
}
