//! Candle direction classification.

use serde::{Deserialize, Serialize};

/// Direction of a bar's body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CandleClass {
    /// Close above open.
    Gain,
    /// Open above close.
    Loss,
    /// Open equal to close.
    Flat,
}

impl CandleClass {
    /// Classifies a bar from its open and close.
    ///
    /// Anything that is neither a gain nor a loss is `Flat`, so NaN inputs
    /// still land in exactly one class.
    #[must_use]
    pub fn of(open: f64, close: f64) -> Self {
        if close > open {
            Self::Gain
        } else if open > close {
            Self::Loss
        } else {
            Self::Flat
        }
    }

    /// Returns the class as a string identifier.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Gain => "gain",
            Self::Loss => "loss",
            Self::Flat => "flat",
        }
    }

    /// Returns all classes.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Gain, Self::Loss, Self::Flat]
    }
}

impl std::fmt::Display for CandleClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        assert_eq!(CandleClass::of(10.0, 11.0), CandleClass::Gain);
        assert_eq!(CandleClass::of(11.0, 10.0), CandleClass::Loss);
        assert_eq!(CandleClass::of(10.0, 10.0), CandleClass::Flat);
    }

    #[test]
    fn test_nan_is_flat() {
        assert_eq!(CandleClass::of(f64::NAN, 10.0), CandleClass::Flat);
    }
}
