//! Moving average and linear regression overlays for duochart.
//!
//! - [`sma`] - Trailing simple moving average
//! - [`LinearFit`] - Ordinary least-squares line against bar index
//! - [`compute_indicator`] - One overlay for a known [`IndicatorKind`](duochart_types::IndicatorKind)
//! - [`compute_requested`] - Overlays for user-supplied identifiers, with per-request errors

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/duochart/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod engine;
mod regression;
mod sma;

pub use engine::{IndicatorResult, compute_indicator, compute_kinds, compute_requested};
pub use regression::LinearFit;
pub use sma::sma;
