//! Providers of raw daily rows.

use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use duochart_types::{DateRange, Field, Ticker};
use thiserror::Error;
use tracing::debug;

use crate::{RawRow, RawValue, parse_date, read_csv};

/// Errors raised while loading rows from a source.
#[derive(Error, Debug)]
pub enum SourceError {
    /// No data exists for the ticker.
    #[error("No data for {ticker} at '{path}'")]
    NotFound {
        /// The requested ticker.
        ticker: Ticker,
        /// Where the data was expected.
        path: PathBuf,
    },

    /// Failed to open a file.
    #[error("Failed to read file '{path}': {source}")]
    ReadFile {
        /// The path that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The table lacks a required column.
    #[error("Missing required column: {0}")]
    MissingColumn(Field),

    /// The table is not valid CSV.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Provider of daily price rows.
///
/// Implementations return the raw rows for `ticker` whose date falls inside
/// `range`. Rows whose date cannot be parsed are passed through so the
/// normalizer can report them.
pub trait DataSource {
    /// Fetches daily rows for a ticker.
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot provide data for the ticker.
    fn fetch_daily_bars(
        &self,
        ticker: &Ticker,
        range: DateRange,
    ) -> Result<Vec<RawRow>, SourceError>;
}

/// Keeps rows inside the range, plus rows whose date is not parseable.
fn retain_in_range(rows: Vec<RawRow>, range: DateRange) -> Vec<RawRow> {
    rows.into_iter()
        .filter(|row| match &row.date {
            Some(RawValue::Text(text)) => parse_date(text).is_none_or(|d| range.contains(d)),
            _ => true,
        })
        .collect()
}

/// Reads `<dir>/<TICKER>.csv` files.
#[derive(Debug, Clone)]
pub struct CsvDirSource {
    dir: PathBuf,
}

impl CsvDirSource {
    /// Creates a source reading from the given directory.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Returns the default directory for price tables.
    ///
    /// Uses the `directories` crate to find the platform data directory:
    /// - Linux: `~/.local/share/duochart/bars/`
    /// - macOS: `~/Library/Application Support/duochart/bars/`
    /// - Windows: `C:\Users\<User>\AppData\Roaming\duochart\bars\`
    ///
    /// Falls back to `./bars/` if the platform location cannot be determined.
    #[must_use]
    pub fn default_path() -> PathBuf {
        ProjectDirs::from("", "", "duochart").map_or_else(
            || PathBuf::from("bars"),
            |proj_dirs| proj_dirs.data_dir().join("bars"),
        )
    }

    /// Creates a source at the default path.
    #[must_use]
    pub fn with_default_path() -> Self {
        Self::new(Self::default_path())
    }

    /// Returns the directory being read.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Returns the file that holds a ticker's table.
    ///
    /// Prefers `<TICKER>.csv` and falls back to the lower-case file name.
    #[must_use]
    pub fn path_for(&self, ticker: &Ticker) -> PathBuf {
        let upper = self.dir.join(format!("{}.csv", ticker.as_str()));
        if upper.exists() {
            return upper;
        }
        let lower = self
            .dir
            .join(format!("{}.csv", ticker.as_str().to_lowercase()));
        if lower.exists() { lower } else { upper }
    }
}

impl DataSource for CsvDirSource {
    fn fetch_daily_bars(
        &self,
        ticker: &Ticker,
        range: DateRange,
    ) -> Result<Vec<RawRow>, SourceError> {
        let path = self.path_for(ticker);
        if !path.exists() {
            return Err(SourceError::NotFound {
                ticker: ticker.clone(),
                path,
            });
        }

        let file = File::open(&path).map_err(|source| SourceError::ReadFile {
            path: path.clone(),
            source,
        })?;
        let rows = read_csv(BufReader::new(file))?;
        let total = rows.len();
        let rows = retain_in_range(rows, range);

        debug!(
            %ticker,
            path = %path.display(),
            total,
            in_range = rows.len(),
            "loaded price table"
        );
        Ok(rows)
    }
}

/// Serves rows held in memory, keyed by ticker.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    tables: HashMap<Ticker, Vec<RawRow>>,
}

impl StaticSource {
    /// Creates an empty source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces the table for a ticker.
    #[must_use]
    pub fn with_table(mut self, ticker: Ticker, rows: Vec<RawRow>) -> Self {
        self.tables.insert(ticker, rows);
        self
    }
}

impl DataSource for StaticSource {
    fn fetch_daily_bars(
        &self,
        ticker: &Ticker,
        range: DateRange,
    ) -> Result<Vec<RawRow>, SourceError> {
        self.tables
            .get(ticker)
            .map(|rows| retain_in_range(rows.clone(), range))
            .ok_or_else(|| SourceError::NotFound {
                ticker: ticker.clone(),
                path: PathBuf::from("<memory>"),
            })
    }
}
