//! Raw rows to typed price series.

use duochart_types::{DataError, PriceBar, PriceSeries};
use tracing::{debug, warn};

use crate::RawRow;

/// Result of normalizing a raw table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Normalized {
    /// The usable bars, ascending by date with unique dates.
    pub series: PriceSeries,
    /// One entry per skipped row, in input order.
    pub skipped: Vec<DataError>,
}

impl Normalized {
    /// Returns the number of rows that were skipped.
    #[must_use]
    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }

    /// Returns true if every row parsed.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// Normalizes raw rows into a [`PriceSeries`].
///
/// Rows with a missing or unparseable field are skipped and reported in
/// [`Normalized::skipped`]. The remaining bars are sorted by date; when two
/// rows share a date the later row wins. An empty table yields an empty series.
pub fn normalize<I>(rows: I) -> Normalized
where
    I: IntoIterator<Item = RawRow>,
{
    let mut bars: Vec<PriceBar> = Vec::new();
    let mut skipped = Vec::new();

    for (index, row) in rows.into_iter().enumerate() {
        match row.parse(index) {
            Ok(bar) => bars.push(bar),
            Err(err) => {
                warn!(%err, "skipping malformed price row");
                skipped.push(err);
            }
        }
    }

    let parsed = bars.len();
    let series = PriceSeries::from_bars(bars);
    debug!(
        bars = series.len(),
        skipped = skipped.len(),
        duplicates = parsed - series.len(),
        "normalized price table"
    );

    Normalized { series, skipped }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use duochart_types::Field;

    #[test]
    fn test_empty_table() {
        let result = normalize(Vec::new());
        assert!(result.series.is_empty());
        assert!(result.is_clean());
    }

    #[test]
    fn test_skips_bad_rows_and_counts() {
        let rows = vec![
            RawRow::new("2020-01-03", 2.0, 3.0, 1.0, 2.5),
            RawRow::new("2020-01-02", "x", 3.0, 1.0, 2.5),
            RawRow::new("2020-01-01", 1.0, 2.0, 0.5, 1.5),
            RawRow {
                date: Some("2020-01-06".into()),
                ..RawRow::default()
            },
        ];

        let result = normalize(rows);

        assert_eq!(result.series.len(), 2);
        assert_eq!(result.skipped_count(), 2);
        assert_eq!(result.skipped[0].row(), 1);
        assert_eq!(
            result.skipped[1],
            DataError::MissingField {
                row: 3,
                field: Field::Open
            }
        );
        assert_eq!(
            result.series.first_date(),
            NaiveDate::from_ymd_opt(2020, 1, 1)
        );
    }

    #[test]
    fn test_duplicate_dates_keep_last() {
        let rows = vec![
            RawRow::new("2020-01-02", 1.0, 1.0, 1.0, 1.0),
            RawRow::new("2020-01-02", 9.0, 9.0, 9.0, 9.0),
        ];

        let result = normalize(rows);
        assert_eq!(result.series.len(), 1);
        assert_eq!(result.series.bars()[0].close, 9.0);
    }
}
