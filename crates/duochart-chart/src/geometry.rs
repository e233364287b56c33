//! Candlestick geometry.

use chrono::NaiveDate;
use duochart_types::{CandleClass, PriceBar, PriceSeries};
use serde::{Deserialize, Serialize};

/// Vertical line from low to high.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Wick {
    /// Trading date (x position).
    pub date: NaiveDate,
    /// Bottom of the wick.
    pub low: f64,
    /// Top of the wick.
    pub high: f64,
}

/// Box spanning open to close.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Body {
    /// Trading date (x position).
    pub date: NaiveDate,
    /// Opening price.
    pub open: f64,
    /// Closing price.
    pub close: f64,
}

impl Body {
    /// Returns the upper edge of the body.
    #[must_use]
    pub fn top(&self) -> f64 {
        self.open.max(self.close)
    }

    /// Returns the lower edge of the body.
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.open.min(self.close)
    }
}

/// Drawable form of one bar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    /// Trading date.
    pub date: NaiveDate,
    /// Direction of the body.
    pub class: CandleClass,
    /// Low-to-high segment.
    pub wick: Wick,
    /// Open-to-close box.
    pub body: Body,
}

impl From<&PriceBar> for Candle {
    fn from(bar: &PriceBar) -> Self {
        Self {
            date: bar.date,
            class: bar.class(),
            wick: Wick {
                date: bar.date,
                low: bar.low,
                high: bar.high,
            },
            body: Body {
                date: bar.date,
                open: bar.open,
                close: bar.close,
            },
        }
    }
}

/// Number of candles in each class.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassCounts {
    /// Candles closing above their open.
    pub gain: usize,
    /// Candles closing below their open.
    pub loss: usize,
    /// Candles closing at their open.
    pub flat: usize,
}

impl ClassCounts {
    /// Returns the total number of candles counted.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.gain + self.loss + self.flat
    }
}

/// Candles for a whole series, one per bar in date order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CandlestickGeometry {
    candles: Vec<Candle>,
}

impl CandlestickGeometry {
    /// Returns all candles.
    #[must_use]
    pub fn candles(&self) -> &[Candle] {
        &self.candles
    }

    /// Returns the number of candles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.candles.len()
    }

    /// Returns true if there are no candles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.candles.is_empty()
    }

    /// Returns the wick segments of every candle.
    pub fn wicks(&self) -> impl Iterator<Item = &Wick> {
        self.candles.iter().map(|c| &c.wick)
    }

    /// Returns the candles of one class.
    pub fn of_class(&self, class: CandleClass) -> impl Iterator<Item = &Candle> {
        self.candles.iter().filter(move |c| c.class == class)
    }

    /// Returns the positions of the candles of one class.
    #[must_use]
    pub fn indices_of(&self, class: CandleClass) -> Vec<usize> {
        self.candles
            .iter()
            .enumerate()
            .filter(|(_, c)| c.class == class)
            .map(|(i, _)| i)
            .collect()
    }

    /// Counts candles per class.
    #[must_use]
    pub fn counts(&self) -> ClassCounts {
        self.candles
            .iter()
            .fold(ClassCounts::default(), |mut counts, c| {
                match c.class {
                    CandleClass::Gain => counts.gain += 1,
                    CandleClass::Loss => counts.loss += 1,
                    CandleClass::Flat => counts.flat += 1,
                }
                counts
            })
    }
}

/// Builds candlestick geometry for every bar of `series`.
#[must_use]
pub fn build_candlestick_geometry(series: &PriceSeries) -> CandlestickGeometry {
    CandlestickGeometry {
        candles: series.iter().map(Candle::from).collect(),
    }
}
