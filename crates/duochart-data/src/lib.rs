//! Raw price table normalization and data sources for duochart.
//!
//! - [`RawRow`] - A loosely typed row as delivered by a price feed
//! - [`normalize`] - Raw rows to a date-ordered [`PriceSeries`](duochart_types::PriceSeries)
//! - [`read_csv`] - CSV tables to raw rows
//! - [`DataSource`] - Provider of daily rows for a ticker and date range

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/duochart/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod csv;
mod normalize;
mod raw;
mod source;

pub use crate::csv::read_csv;
pub use normalize::{Normalized, normalize};
pub use raw::{RawRow, RawValue, parse_date};
pub use source::{CsvDirSource, DataSource, SourceError, StaticSource};
