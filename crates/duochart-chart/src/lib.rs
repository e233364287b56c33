//! Candlestick geometry and chart preparation for duochart.
//!
//! - [`CandlestickGeometry`] - Per-bar class, wick and body
//! - [`PreparedChart`] - Geometry plus overlays for one ticker
//! - [`ChartRequest`] / [`ChartPair`] - Two synchronized charts
//! - [`style`] - Colours, labels and widths for drawing

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/duochart/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod geometry;
mod prepare;
pub mod style;

pub use geometry::{
    Body, Candle, CandlestickGeometry, ClassCounts, Wick, build_candlestick_geometry,
};
pub use prepare::{ChartPair, ChartRequest, PreparedChart, XRange, prepare_chart, prepare_pair};
