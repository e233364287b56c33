//! CSV output format.

use duochart_chart::PreparedChart;
use std::io::Write;

use crate::{FormatError, Formatter, chart_rows};

/// CSV formatter.
#[derive(Debug, Clone, Default)]
pub struct CsvFormatter {
    /// Field delimiter (default: comma).
    delimiter: char,
    /// Whether to include header row.
    include_header: bool,
}

impl CsvFormatter {
    /// Creates a new CSV formatter with default settings.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            delimiter: ',',
            include_header: true,
        }
    }

    /// Sets the field delimiter.
    #[must_use]
    pub const fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Sets whether to include a header row.
    #[must_use]
    pub const fn with_header(mut self, include: bool) -> Self {
        self.include_header = include;
        self
    }

    /// Creates a tab-separated values (TSV) formatter.
    #[must_use]
    pub const fn tsv() -> Self {
        Self {
            delimiter: '\t',
            include_header: true,
        }
    }
}

impl Formatter for CsvFormatter {
    fn write_chart<W: Write + Send>(
        &self,
        chart: &PreparedChart,
        mut writer: W,
    ) -> Result<(), FormatError> {
        let d = self.delimiter;

        if self.include_header {
            write!(writer, "date{d}open{d}high{d}low{d}close{d}class")?;
            for overlay in &chart.overlays {
                write!(writer, "{d}{}", overlay.kind())?;
            }
            writeln!(writer)?;
        }

        for row in chart_rows(chart) {
            write!(
                writer,
                "{}{d}{}{d}{}{d}{}{d}{}{d}{}",
                row.date.format("%Y-%m-%d"),
                row.open,
                row.high,
                row.low,
                row.close,
                row.class
            )?;
            for overlay in &row.overlays {
                match overlay.value {
                    Some(value) => write!(writer, "{d}{value}")?,
                    None => write!(writer, "{d}")?,
                }
            }
            writeln!(writer)?;
        }

        Ok(())
    }

    fn extension(&self) -> &str {
        "csv"
    }
}
