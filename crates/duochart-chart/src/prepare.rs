//! Chart preparation for one ticker and for a synchronized pair.

use chrono::NaiveDate;
use duochart_data::{DataSource, RawRow, normalize};
use duochart_indicators::compute_requested;
use duochart_types::{
    ChartError, DataError, DateRange, IndicatorSeries, PriceSeries, Ticker,
    UnsupportedIndicatorError,
};
use serde::Serialize;
use tracing::{debug, info};

use crate::{CandlestickGeometry, build_candlestick_geometry};

/// Everything a renderer needs to draw one ticker's chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PreparedChart {
    /// The charted ticker.
    pub ticker: Ticker,
    /// Normalized bars.
    pub series: PriceSeries,
    /// Candles derived from `series`.
    pub geometry: CandlestickGeometry,
    /// Overlays for the supported requested indicators, in request order.
    pub overlays: Vec<IndicatorSeries>,
    /// Rows dropped during normalization.
    #[serde(skip)]
    pub skipped_rows: Vec<DataError>,
    /// Requested indicators that are not supported.
    #[serde(skip)]
    pub indicator_errors: Vec<UnsupportedIndicatorError>,
}

impl PreparedChart {
    /// Returns the overlays that have at least one defined point.
    pub fn drawable_overlays(&self) -> impl Iterator<Item = &IndicatorSeries> {
        self.overlays.iter().filter(|o| o.is_defined())
    }

    /// Returns true if no recoverable error was recorded.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.skipped_rows.is_empty() && self.indicator_errors.is_empty()
    }
}

/// Normalizes `rows` and derives candles and overlays for one ticker.
///
/// Malformed rows and unsupported indicator names are recorded on the result;
/// they never prevent the rest of the chart from being prepared.
pub fn prepare_chart<S>(ticker: Ticker, rows: Vec<RawRow>, indicators: &[S]) -> PreparedChart
where
    S: AsRef<str> + Sync,
{
    let normalized = normalize(rows);
    let series = normalized.series;
    let geometry = build_candlestick_geometry(&series);

    let mut overlays = Vec::with_capacity(indicators.len());
    let mut indicator_errors = Vec::new();
    for result in compute_requested(&series, indicators) {
        match result {
            Ok(overlay) => overlays.push(overlay),
            Err(err) => indicator_errors.push(err),
        }
    }

    debug!(
        %ticker,
        bars = series.len(),
        overlays = overlays.len(),
        skipped_rows = normalized.skipped.len(),
        unsupported = indicator_errors.len(),
        "prepared chart"
    );

    PreparedChart {
        ticker,
        series,
        geometry,
        overlays,
        skipped_rows: normalized.skipped,
        indicator_errors,
    }
}

/// Validated input for a two-ticker chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartRequest {
    /// Ticker drawn first; its x-axis drives the second chart.
    pub primary: Ticker,
    /// Ticker drawn second.
    pub secondary: Ticker,
    /// Dates to load, `[start, end)`.
    pub range: DateRange,
    /// Indicator identifiers applied to both charts.
    pub indicators: Vec<String>,
}

impl ChartRequest {
    /// Builds a request from user input.
    ///
    /// # Errors
    ///
    /// Returns an error if either ticker is blank or `start >= end`.
    pub fn new(
        primary: &str,
        secondary: &str,
        start: NaiveDate,
        end: NaiveDate,
        indicators: Vec<String>,
    ) -> Result<Self, ChartError> {
        Ok(Self {
            primary: primary.parse()?,
            secondary: secondary.parse()?,
            range: DateRange::new(start, end)?,
            indicators,
        })
    }
}

/// Inclusive date span shared by the x-axes of several charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct XRange {
    /// Earliest date on any chart.
    pub start: NaiveDate,
    /// Latest date on any chart.
    pub end: NaiveDate,
}

impl XRange {
    /// Returns the span covering every bar of every series, if any has bars.
    pub fn covering<'a, I>(series: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a PriceSeries>,
    {
        series
            .into_iter()
            .filter_map(|s| Some((s.first_date()?, s.last_date()?)))
            .reduce(|(a_start, a_end), (b_start, b_end)| {
                (a_start.min(b_start), a_end.max(b_end))
            })
            .map(|(start, end)| Self { start, end })
    }

    /// Returns true if the date lies within the span.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}

/// Two charts drawn side by side with a shared x-axis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPair {
    /// Chart for the request's primary ticker.
    pub primary: PreparedChart,
    /// Chart for the request's secondary ticker.
    pub secondary: PreparedChart,
    /// Shared x-axis span, or `None` when neither chart has bars.
    pub x_range: Option<XRange>,
}

impl ChartPair {
    /// Returns both charts, primary first.
    #[must_use]
    pub const fn charts(&self) -> [&PreparedChart; 2] {
        [&self.primary, &self.secondary]
    }
}

/// Loads both tickers of `request` from `source` and prepares their charts.
///
/// # Errors
///
/// Returns [`ChartError::Source`] if either ticker cannot be loaded. Malformed
/// rows and unsupported indicators are recorded on the charts instead.
pub fn prepare_pair<D>(request: &ChartRequest, source: &D) -> Result<ChartPair, ChartError>
where
    D: DataSource + ?Sized,
{
    let load = |ticker: &Ticker| -> Result<PreparedChart, ChartError> {
        let rows = source
            .fetch_daily_bars(ticker, request.range)
            .map_err(|err| ChartError::Source {
                ticker: ticker.to_string(),
                message: err.to_string(),
            })?;
        Ok(prepare_chart(
            ticker.clone(),
            rows,
            request.indicators.as_slice(),
        ))
    };

    let primary = load(&request.primary)?;
    let secondary = load(&request.secondary)?;
    let x_range = XRange::covering([&primary.series, &secondary.series]);

    info!(
        primary = %request.primary,
        secondary = %request.secondary,
        range = %request.range,
        "prepared chart pair"
    );

    Ok(ChartPair {
        primary,
        secondary,
        x_range,
    })
}
