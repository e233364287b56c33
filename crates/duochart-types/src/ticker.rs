//! Ticker identifiers.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::TickerError;

/// A non-empty, upper-cased ticker symbol (e.g. `AAPL`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Ticker(String);

impl Ticker {
    /// Creates a ticker, trimming whitespace and upper-casing the symbol.
    ///
    /// # Errors
    ///
    /// Returns [`TickerError::Empty`] if nothing remains after trimming, and
    /// [`TickerError::InvalidSymbol`] if the symbol contains a path separator
    /// or `..`. Symbols name files in data directories.
    pub fn new(symbol: &str) -> Result<Self, TickerError> {
        let symbol = symbol.trim();
        if symbol.is_empty() {
            return Err(TickerError::Empty);
        }
        if symbol.contains(['/', '\\']) || symbol.contains("..") {
            return Err(TickerError::InvalidSymbol(symbol.to_string()));
        }
        Ok(Self(symbol.to_uppercase()))
    }

    /// Returns the symbol.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Ticker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Ticker {
    type Err = TickerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Ticker {
    type Error = TickerError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<Ticker> for String {
    fn from(ticker: Ticker) -> Self {
        ticker.0
    }
}
