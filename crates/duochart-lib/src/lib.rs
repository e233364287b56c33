//! Candlestick chart preparation and overlay indicators for paired tickers.
//!
//! This is a facade crate that re-exports functionality from the duochart
//! workspace crates for convenient access.
//!
//! # Quick Start
//!
//! ```
//! use duochart_lib::prelude::*;
//!
//! let rows = vec![
//!     RawRow::new("2020-01-02", 74.06, 75.15, 73.80, 75.09),
//!     RawRow::new("2020-01-03", 74.29, 75.14, 74.13, 74.36),
//!     RawRow::new("2020-01-06", 73.45, 74.99, 73.19, 74.95),
//! ];
//!
//! let normalized = normalize(rows);
//! let geometry = build_candlestick_geometry(&normalized.series);
//! let trend = compute_indicator(&normalized.series, IndicatorKind::LinearRegression);
//!
//! assert_eq!(geometry.len(), 3);
//! assert_eq!(trend.defined_count(), 3);
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/duochart/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core types
pub use duochart_types::*;

// Re-export normalization and sources
pub use duochart_data::{
    CsvDirSource, DataSource, Normalized, RawRow, RawValue, SourceError, StaticSource,
    normalize, parse_date, read_csv,
};

// Re-export indicators
pub use duochart_indicators::{
    IndicatorResult, LinearFit, compute_indicator, compute_kinds, compute_requested, sma,
};

// Re-export chart preparation
#[cfg(feature = "chart")]
pub use duochart_chart::{
    Body, Candle, CandlestickGeometry, ChartPair, ChartRequest, ClassCounts, PreparedChart,
    Wick, XRange, build_candlestick_geometry, prepare_chart, prepare_pair, style,
};

// Re-export formatters
#[cfg(feature = "format")]
pub use duochart_format::{
    ChartRow, CsvFormatter, FormatError, Formatter, JsonFormatter, JsonStyle, OutputFormat,
    chart_rows,
};

/// Prelude module for convenient imports.
///
/// ```
/// use duochart_lib::prelude::*;
/// ```
pub mod prelude {
    pub use duochart_types::{
        CandleClass, ChartError, DataError, DateRange, IndicatorKind, IndicatorSeries,
        PriceBar, PriceSeries, Result, Ticker, UnsupportedIndicatorError,
    };

    pub use duochart_data::{CsvDirSource, DataSource, RawRow, normalize};

    pub use duochart_indicators::{compute_indicator, compute_requested};

    #[cfg(feature = "chart")]
    pub use duochart_chart::{
        CandlestickGeometry, ChartPair, ChartRequest, PreparedChart, build_candlestick_geometry,
        prepare_chart, prepare_pair,
    };

    #[cfg(feature = "format")]
    pub use duochart_format::{CsvFormatter, Formatter, JsonFormatter, OutputFormat};
}
