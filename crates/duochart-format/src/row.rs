//! Flattened per-date chart records.

use chrono::NaiveDate;
use duochart_chart::PreparedChart;
use duochart_types::{CandleClass, IndicatorKind};
use serde::Serialize;

/// One trading date of a prepared chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartRow {
    /// Charted ticker.
    pub ticker: String,
    /// Trading date.
    pub date: NaiveDate,
    /// Opening price.
    pub open: f64,
    /// Highest price.
    pub high: f64,
    /// Lowest price.
    pub low: f64,
    /// Closing price.
    pub close: f64,
    /// Candle class.
    pub class: CandleClass,
    /// Overlay values at this date, in the chart's overlay order.
    pub overlays: Vec<OverlayValue>,
}

/// An overlay's value at one date.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OverlayValue {
    /// Overlay kind.
    pub indicator: IndicatorKind,
    /// Value, or `None` where the overlay is undefined.
    pub value: Option<f64>,
}

/// Flattens a chart into one row per bar.
#[must_use]
pub fn chart_rows(chart: &PreparedChart) -> Vec<ChartRow> {
    chart
        .series
        .iter()
        .zip(chart.geometry.candles())
        .enumerate()
        .map(|(i, (bar, candle))| ChartRow {
            ticker: chart.ticker.to_string(),
            date: bar.date,
            open: bar.open,
            high: bar.high,
            low: bar.low,
            close: bar.close,
            class: candle.class,
            overlays: chart
                .overlays
                .iter()
                .map(|o| OverlayValue {
                    indicator: o.kind(),
                    value: o.value_at(i),
                })
                .collect(),
        })
        .collect()
}
