//! Core types for the duochart candlestick and indicator engine.
//!
//! This crate provides the fundamental data structures used throughout duochart:
//!
//! - [`PriceBar`] - One trading day of open/high/low/close prices
//! - [`PriceSeries`] - Date-ordered bars for a single ticker
//! - [`Ticker`] - Non-empty ticker identifier
//! - [`DateRange`] - Half-open date range for data retrieval
//! - [`IndicatorKind`] - The closed set of supported overlay indicators
//! - [`IndicatorSeries`] - Date-aligned overlay values
//! - [`CandleClass`] - Gain/loss/flat classification of a bar

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/duochart/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod bar;
mod candle;
mod date_range;
mod error;
mod indicator;
mod ticker;

pub use bar::{PriceBar, PriceSeries};
pub use candle::CandleClass;
pub use date_range::DateRange;
pub use error::{
    ChartError, DataError, DateRangeError, Field, Result, TickerError, UnsupportedIndicatorError,
};
pub use indicator::{IndicatorKind, IndicatorPoint, IndicatorSeries};
pub use ticker::Ticker;
