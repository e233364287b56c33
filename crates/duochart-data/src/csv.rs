//! CSV price tables.

use std::io::Read;

use duochart_types::Field;

use crate::{RawRow, RawValue, SourceError};

/// Header names accepted for the date column.
const DATE_HEADERS: &[&str] = &["date", "datetime", "timestamp"];

/// Column positions of the required fields.
#[derive(Debug, Clone, Copy)]
struct Columns {
    date: usize,
    open: usize,
    high: usize,
    low: usize,
    close: usize,
}

impl Columns {
    fn from_headers(headers: &csv::StringRecord) -> Result<Self, SourceError> {
        let names: Vec<String> = headers.iter().map(|h| h.trim().to_lowercase()).collect();
        let find = |field: Field, accepted: &[&str]| {
            names
                .iter()
                .position(|name| accepted.contains(&name.as_str()))
                .ok_or(SourceError::MissingColumn(field))
        };

        Ok(Self {
            date: find(Field::Date, DATE_HEADERS)?,
            open: find(Field::Open, &["open"])?,
            high: find(Field::High, &["high"])?,
            low: find(Field::Low, &["low"])?,
            close: find(Field::Close, &["close"])?,
        })
    }
}

/// Reads a daily price table with a header row.
///
/// The header must name `Date`, `Open`, `High`, `Low` and `Close` columns in
/// any order and case; other columns such as `Adj Close` or `Volume` are
/// ignored. Cells are kept as text so that malformed values surface later as
/// per-row [`DataError`](duochart_types::DataError)s rather than failing the
/// whole table.
///
/// # Errors
///
/// Returns an error if the header lacks a required column or the input is not
/// readable CSV.
pub fn read_csv<R: Read>(reader: R) -> Result<Vec<RawRow>, SourceError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let columns = Columns::from_headers(reader.headers()?)?;

    // Cells are decoded lossily so invalid UTF-8 fails its row, not the table.
    let mut rows = Vec::new();
    for record in reader.byte_records() {
        let record = record?;
        let cell = |idx: usize| {
            record
                .get(idx)
                .map(|bytes| RawValue::Text(String::from_utf8_lossy(bytes).into_owned()))
        };
        rows.push(RawRow {
            date: cell(columns.date),
            open: cell(columns.open),
            high: cell(columns.high),
            low: cell(columns.low),
            close: cell(columns.close),
        });
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_csv_any_column_order() {
        let data = "Close,Date,Volume,Low,High,Open,Adj Close\n\
                    1.5,2020-01-02,100,0.5,2.0,1.0,1.4\n";
        let rows = read_csv(data.as_bytes()).unwrap();

        assert_eq!(rows.len(), 1);
        let bar = rows[0].parse(0).unwrap();
        assert_eq!(bar.open, 1.0);
        assert_eq!(bar.close, 1.5);
    }

    #[test]
    fn test_read_csv_short_record() {
        let data = "Date,Open,High,Low,Close\n2020-01-02,1.0,2.0\n";
        let rows = read_csv(data.as_bytes()).unwrap();

        assert_eq!(rows.len(), 1);
        assert!(rows[0].low.is_none());
        assert!(rows[0].parse(0).is_err());
    }

    #[test]
    fn test_read_csv_missing_column() {
        let data = "Date,Open,High,Low\n2020-01-02,1.0,2.0,0.5\n";
        let err = read_csv(data.as_bytes()).unwrap_err();
        assert!(matches!(err, SourceError::MissingColumn(Field::Close)));
    }

    #[test]
    fn test_read_csv_invalid_utf8_cell_fails_only_its_row() {
        let mut data = b"Date,Open,High,Low,Close\n".to_vec();
        data.extend_from_slice(b"2020-01-02,1.0,2.0,0.5,1.5\n2020-01-03,");
        data.extend_from_slice(&[0xff, 0xfe]);
        data.extend_from_slice(b",2.0,0.5,1.5\n2020-01-06,1.5,2.5,1.0,2.0\n");

        let rows = read_csv(data.as_slice()).unwrap();
        assert_eq!(rows.len(), 3);
        assert!(rows[0].parse(0).is_ok());
        assert!(matches!(
            rows[1].parse(1),
            Err(duochart_types::DataError::InvalidNumber {
                field: Field::Open,
                ..
            })
        ));
        assert!(rows[2].parse(2).is_ok());
    }

    #[test]
    fn test_read_csv_empty_body() {
        let data = "Date,Open,High,Low,Close\n";
        assert!(read_csv(data.as_bytes()).unwrap().is_empty());
    }
}
