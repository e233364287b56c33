//! Loosely typed price rows.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use duochart_types::{DataError, Field, PriceBar};
use serde::{Deserialize, Serialize};

/// A cell value as delivered by a feed: either already numeric or text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    /// A numeric cell.
    Number(f64),
    /// A text cell, parsed on demand.
    Text(String),
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// One row of a raw daily price table.
///
/// Any field may be missing; [`RawRow::parse`] decides whether the row is usable.
/// Column names are accepted in either `Open` or `open` spelling.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawRow {
    /// Trading date.
    #[serde(default, alias = "Date")]
    pub date: Option<RawValue>,
    /// Opening price.
    #[serde(default, alias = "Open")]
    pub open: Option<RawValue>,
    /// Highest price.
    #[serde(default, alias = "High")]
    pub high: Option<RawValue>,
    /// Lowest price.
    #[serde(default, alias = "Low")]
    pub low: Option<RawValue>,
    /// Closing price.
    #[serde(default, alias = "Close")]
    pub close: Option<RawValue>,
}

impl RawRow {
    /// Creates a fully populated row.
    #[must_use]
    pub fn new(
        date: impl Into<RawValue>,
        open: impl Into<RawValue>,
        high: impl Into<RawValue>,
        low: impl Into<RawValue>,
        close: impl Into<RawValue>,
    ) -> Self {
        Self {
            date: Some(date.into()),
            open: Some(open.into()),
            high: Some(high.into()),
            low: Some(low.into()),
            close: Some(close.into()),
        }
    }

    /// Converts a typed bar back into a raw row.
    #[must_use]
    pub fn from_bar(bar: &PriceBar) -> Self {
        Self::new(
            bar.date.format("%Y-%m-%d").to_string(),
            bar.open,
            bar.high,
            bar.low,
            bar.close,
        )
    }

    /// Parses the row into a typed bar.
    ///
    /// `row` is the zero-based position of this row in its table and is only
    /// used for error reporting.
    ///
    /// # Errors
    ///
    /// Returns the first [`DataError`] found, checking the date first and then
    /// open, high, low and close.
    pub fn parse(&self, row: usize) -> Result<PriceBar, DataError> {
        let date = match &self.date {
            None => {
                return Err(DataError::MissingField {
                    row,
                    field: Field::Date,
                });
            }
            Some(RawValue::Text(text)) if text.trim().is_empty() => {
                return Err(DataError::MissingField {
                    row,
                    field: Field::Date,
                });
            }
            Some(RawValue::Text(text)) => {
                parse_date(text).ok_or_else(|| DataError::InvalidDate {
                    row,
                    value: text.clone(),
                })?
            }
            Some(RawValue::Number(n)) => {
                return Err(DataError::InvalidDate {
                    row,
                    value: n.to_string(),
                });
            }
        };

        Ok(PriceBar::new(
            date,
            parse_price(row, Field::Open, self.open.as_ref())?,
            parse_price(row, Field::High, self.high.as_ref())?,
            parse_price(row, Field::Low, self.low.as_ref())?,
            parse_price(row, Field::Close, self.close.as_ref())?,
        ))
    }
}

impl From<&PriceBar> for RawRow {
    fn from(bar: &PriceBar) -> Self {
        Self::from_bar(bar)
    }
}

/// Parses a trading date.
///
/// Accepts `YYYY-MM-DD`, `YYYY-MM-DD HH:MM:SS` with or without a UTC offset,
/// and RFC 3339 timestamps. Timestamps keep the calendar date in their own
/// offset, which is how exchanges label daily bars.
#[must_use]
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();

    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = DateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S%:z") {
        return Some(dt.date_naive());
    }
    NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S")
        .ok()
        .map(|dt| dt.date())
}

fn parse_price(row: usize, field: Field, value: Option<&RawValue>) -> Result<f64, DataError> {
    let value = match value {
        None => return Err(DataError::MissingField { row, field }),
        Some(RawValue::Number(n)) => *n,
        Some(RawValue::Text(text)) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                return Err(DataError::MissingField { row, field });
            }
            trimmed
                .parse::<f64>()
                .map_err(|_| DataError::InvalidNumber {
                    row,
                    field,
                    value: text.clone(),
                })?
        }
    };

    if !value.is_finite() {
        return Err(DataError::NonFinite { row, field, value });
    }
    Ok(value)
}
