//! Output formatters for prepared duochart charts.
//!
//! - [`CsvFormatter`] - CSV/TSV rows
//! - [`JsonFormatter`] - JSON document or NDJSON rows
//! - [`ChartRow`] - Flattened per-date record shared by the formatters

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/duochart/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod csv;
mod formatter;
mod json;
mod row;

pub use crate::csv::CsvFormatter;
pub use formatter::{FormatError, Formatter, OutputFormat};
pub use json::{JsonFormatter, JsonStyle};
pub use row::{ChartRow, OverlayValue, chart_rows};
