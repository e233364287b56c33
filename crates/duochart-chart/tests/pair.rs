//! End-to-end preparation of synchronized chart pairs.

use approx::assert_relative_eq;
use chrono::{Days, NaiveDate};
use duochart_chart::{ChartRequest, XRange, prepare_chart, prepare_pair};
use duochart_data::{RawRow, StaticSource};
use duochart_types::{CandleClass, ChartError, IndicatorKind, Ticker, TickerError};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// `n` consecutive daily rows starting at `start`, closes rising by 1 from `base`.
fn rising_rows(start: NaiveDate, n: u64, base: f64) -> Vec<RawRow> {
    (0..n)
        .map(|i| {
            let close = base + i as f64;
            let open = if i % 3 == 0 { close } else { close - 0.5 };
            RawRow::new(
                (start + Days::new(i)).format("%Y-%m-%d").to_string(),
                open,
                close + 1.0,
                open - 1.0,
                close,
            )
        })
        .collect()
}

fn all_indicators() -> Vec<String> {
    vec![
        "30 Day SMA".to_string(),
        "100 Day SMA".to_string(),
        "Linear Regression Line".to_string(),
    ]
}

#[test]
fn test_prepare_chart_linear_closes() {
    let ticker: Ticker = "LIN".parse().unwrap();
    let chart = prepare_chart(
        ticker,
        rising_rows(date(2020, 1, 1), 100, 100.0),
        &all_indicators(),
    );

    assert!(chart.is_clean());
    assert_eq!(chart.series.len(), 100);
    assert_eq!(chart.geometry.len(), 100);
    assert_eq!(chart.overlays.len(), 3);

    let sma30 = &chart.overlays[0];
    assert_eq!(sma30.kind(), IndicatorKind::Sma30);
    assert_relative_eq!(sma30.value_at(99).unwrap(), 169.5, epsilon = 1e-9);

    let sma100 = &chart.overlays[1];
    assert_eq!(sma100.defined_count(), 1);
    assert_relative_eq!(sma100.value_at(99).unwrap(), 149.5, epsilon = 1e-9);

    let line = &chart.overlays[2];
    for (i, bar) in chart.series.iter().enumerate() {
        assert_relative_eq!(line.value_at(i).unwrap(), bar.close, epsilon = 1e-9);
    }

    let counts = chart.geometry.counts();
    assert_eq!(counts.flat, 34);
    assert_eq!(counts.gain, 66);
    assert_eq!(counts.loss, 0);
    assert_eq!(
        chart.geometry.of_class(CandleClass::Flat).next().unwrap().date,
        date(2020, 1, 1)
    );
}

#[test]
fn test_prepare_chart_records_recoverable_errors() {
    let mut rows = rising_rows(date(2020, 1, 1), 5, 10.0);
    rows.push(RawRow::new("2020-01-10", "bad", 1.0, 1.0, 1.0));

    let chart = prepare_chart(
        "ABC".parse().unwrap(),
        rows,
        &["Linear Regression Line", "Bollinger"],
    );

    assert_eq!(chart.series.len(), 5);
    assert_eq!(chart.skipped_rows.len(), 1);
    assert_eq!(chart.indicator_errors.len(), 1);
    assert_eq!(chart.indicator_errors[0].name, "Bollinger");
    assert_eq!(chart.overlays.len(), 1);
    assert_eq!(chart.drawable_overlays().count(), 1);
}

#[test]
fn test_prepare_chart_empty_rows() {
    let chart = prepare_chart("ABC".parse().unwrap(), Vec::new(), &all_indicators());

    assert!(chart.series.is_empty());
    assert!(chart.geometry.is_empty());
    assert_eq!(chart.overlays.len(), 3);
    assert_eq!(chart.drawable_overlays().count(), 0);
}

#[test]
fn test_request_rejects_blank_ticker() {
    let err = ChartRequest::new("AAPL", " ", date(2020, 1, 1), date(2020, 2, 1), vec![])
        .unwrap_err();
    assert!(matches!(err, ChartError::Ticker(TickerError::Empty)));
}

#[test]
fn test_request_rejects_ticker_outside_data_dir() {
    let err = ChartRequest::new("../AAPL", "MSFT", date(2020, 1, 1), date(2020, 2, 1), vec![])
        .unwrap_err();
    assert!(matches!(err, ChartError::Ticker(TickerError::InvalidSymbol(_))));
}

#[test]
fn test_request_rejects_reversed_range() {
    let err = ChartRequest::new("AAPL", "MSFT", date(2020, 2, 1), date(2020, 1, 1), vec![])
        .unwrap_err();
    assert!(matches!(err, ChartError::DateRange(_)));
}

#[test]
fn test_prepare_pair_shares_x_range() {
    let source = StaticSource::new()
        .with_table(
            "AAPL".parse().unwrap(),
            rising_rows(date(2020, 1, 2), 20, 70.0),
        )
        .with_table(
            "MSFT".parse().unwrap(),
            rising_rows(date(2019, 12, 20), 30, 150.0),
        );

    let request = ChartRequest::new(
        "aapl",
        "msft",
        date(2020, 1, 1),
        date(2020, 2, 1),
        all_indicators(),
    )
    .unwrap();
    let pair = prepare_pair(&request, &source).unwrap();

    assert_eq!(pair.primary.ticker.as_str(), "AAPL");
    assert_eq!(pair.primary.series.len(), 20);
    // MSFT rows before 2020-01-01 are outside the request.
    assert_eq!(pair.secondary.series.len(), 18);

    assert_eq!(
        pair.x_range,
        Some(XRange {
            start: date(2020, 1, 1),
            end: date(2020, 1, 21),
        })
    );
    for chart in pair.charts() {
        assert_eq!(chart.overlays.len(), 3);
        assert!(!chart.overlays[0].is_defined());
        assert!(chart.overlays[2].is_defined());
    }
}

#[test]
fn test_prepare_pair_unknown_ticker() {
    let source = StaticSource::new();
    let request = ChartRequest::new(
        "AAPL",
        "MSFT",
        date(2020, 1, 1),
        date(2020, 2, 1),
        Vec::new(),
    )
    .unwrap();

    let err = prepare_pair(&request, &source).unwrap_err();
    assert!(matches!(err, ChartError::Source { ref ticker, .. } if ticker == "AAPL"));
}

#[test]
fn test_chart_pair_serializes() {
    let source = StaticSource::new()
        .with_table("A".parse().unwrap(), rising_rows(date(2020, 1, 2), 3, 1.0))
        .with_table("B".parse().unwrap(), Vec::new());
    let request = ChartRequest::new(
        "A",
        "B",
        date(2020, 1, 1),
        date(2020, 2, 1),
        vec!["Linear Regression Line".to_string()],
    )
    .unwrap();

    let pair = prepare_pair(&request, &source).unwrap();
    let json = serde_json::to_value(&pair).unwrap();

    assert_eq!(json["primary"]["ticker"], "A");
    assert_eq!(json["primary"]["overlays"][0]["kind"], "Linear Regression Line");
    assert_eq!(json["x_range"]["start"], "2020-01-02");
    assert!(json["secondary"]["series"].as_array().unwrap().is_empty());
}
