//! Error types for duochart.

use chrono::NaiveDate;
use thiserror::Error;

/// Result type alias for duochart operations.
pub type Result<T> = std::result::Result<T, ChartError>;

/// Errors that abort a chart request.
///
/// Recoverable conditions ([`DataError`], [`UnsupportedIndicatorError`]) are
/// reported alongside prepared data rather than through this type.
#[derive(Error, Debug)]
pub enum ChartError {
    /// Invalid ticker identifier.
    #[error(transparent)]
    Ticker(#[from] TickerError),

    /// Invalid date range.
    #[error(transparent)]
    DateRange(#[from] DateRangeError),

    /// The data source could not provide bars.
    #[error("Data source error for {ticker}: {message}")]
    Source {
        /// The ticker being loaded.
        ticker: String,
        /// Description of the failure.
        message: String,
    },
}

/// A raw row field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// Trading date.
    Date,
    /// Opening price.
    Open,
    /// Highest price.
    High,
    /// Lowest price.
    Low,
    /// Closing price.
    Close,
}

impl Field {
    /// Returns the column name used by upstream price tables.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Date => "Date",
            Self::Open => "Open",
            Self::High => "High",
            Self::Low => "Low",
            Self::Close => "Close",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A malformed raw row, skipped during normalization.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DataError {
    /// A required field was absent or blank.
    #[error("row {row}: missing {field}")]
    MissingField {
        /// Zero-based input row index.
        row: usize,
        /// The missing field.
        field: Field,
    },

    /// A price field could not be parsed as a number.
    #[error("row {row}: invalid {field} value '{value}'")]
    InvalidNumber {
        /// Zero-based input row index.
        row: usize,
        /// The offending field.
        field: Field,
        /// The raw text.
        value: String,
    },

    /// A price field parsed to NaN or infinity.
    #[error("row {row}: non-finite {field} value {value}")]
    NonFinite {
        /// Zero-based input row index.
        row: usize,
        /// The offending field.
        field: Field,
        /// The parsed value.
        value: f64,
    },

    /// The date could not be parsed.
    #[error("row {row}: invalid date '{value}'")]
    InvalidDate {
        /// Zero-based input row index.
        row: usize,
        /// The raw text.
        value: String,
    },
}

impl DataError {
    /// Returns the input row index the error refers to.
    #[must_use]
    pub const fn row(&self) -> usize {
        match self {
            Self::MissingField { row, .. }
            | Self::InvalidNumber { row, .. }
            | Self::NonFinite { row, .. }
            | Self::InvalidDate { row, .. } => *row,
        }
    }
}

/// An indicator name outside the supported set.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error(
    "unsupported indicator '{name}', expected one of: 30 Day SMA, 100 Day SMA, Linear Regression Line"
)]
pub struct UnsupportedIndicatorError {
    /// The name as requested.
    pub name: String,
}

impl UnsupportedIndicatorError {
    /// Creates an error for the given requested name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Error for invalid ticker identifiers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TickerError {
    /// The identifier was empty or whitespace only.
    #[error("Ticker identifier must not be empty")]
    Empty,

    /// The identifier contains a path separator or `..`.
    #[error("Invalid ticker identifier: {0}")]
    InvalidSymbol(String),
}

/// Error for invalid date ranges.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateRangeError {
    /// Start date is not before end date.
    #[error("Invalid date range: {start} >= {end}")]
    InvalidRange {
        /// The start date.
        start: NaiveDate,
        /// The end date.
        end: NaiveDate,
    },
}
