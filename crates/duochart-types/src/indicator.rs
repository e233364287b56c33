//! Indicator kinds and overlay series.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::UnsupportedIndicatorError;

/// The closed set of overlay indicators.
///
/// The string identifiers returned by [`IndicatorKind::as_str`] are the
/// labels offered to users and are parsed back verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum IndicatorKind {
    /// Simple moving average of close over 30 bars.
    #[serde(rename = "30 Day SMA")]
    Sma30,
    /// Simple moving average of close over 100 bars.
    #[serde(rename = "100 Day SMA")]
    Sma100,
    /// Least-squares line through close against bar index.
    #[serde(rename = "Linear Regression Line")]
    LinearRegression,
}

impl IndicatorKind {
    /// Returns the selectable identifier.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Sma30 => "30 Day SMA",
            Self::Sma100 => "100 Day SMA",
            Self::LinearRegression => "Linear Regression Line",
        }
    }

    /// Returns the trailing window length, or `None` for whole-series fits.
    #[must_use]
    pub const fn window(&self) -> Option<usize> {
        match self {
            Self::Sma30 => Some(30),
            Self::Sma100 => Some(100),
            Self::LinearRegression => None,
        }
    }

    /// Returns the minimum number of bars needed for any defined output.
    #[must_use]
    pub const fn min_bars(&self) -> usize {
        match self.window() {
            Some(window) => window,
            None => 2,
        }
    }

    /// Returns all indicator kinds in the order they are offered.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Sma100, Self::Sma30, Self::LinearRegression]
    }
}

impl std::fmt::Display for IndicatorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IndicatorKind {
    type Err = UnsupportedIndicatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "30 Day SMA" => Ok(Self::Sma30),
            "100 Day SMA" => Ok(Self::Sma100),
            "Linear Regression Line" => Ok(Self::LinearRegression),
            _ => Err(UnsupportedIndicatorError::new(s)),
        }
    }
}

/// One overlay point. `value` is `None` where the indicator is undefined.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IndicatorPoint {
    /// Trading date of the source bar.
    pub date: NaiveDate,
    /// Indicator value, if defined at this date.
    pub value: Option<f64>,
}

/// Overlay values aligned by date to a source price series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorSeries {
    kind: IndicatorKind,
    points: Vec<IndicatorPoint>,
}

impl IndicatorSeries {
    /// Creates an overlay from its points.
    #[must_use]
    pub const fn new(kind: IndicatorKind, points: Vec<IndicatorPoint>) -> Self {
        Self { kind, points }
    }

    /// Creates an overlay with no points.
    #[must_use]
    pub const fn empty(kind: IndicatorKind) -> Self {
        Self {
            kind,
            points: Vec::new(),
        }
    }

    /// Returns the indicator kind.
    #[must_use]
    pub const fn kind(&self) -> IndicatorKind {
        self.kind
    }

    /// Returns all points, defined or not.
    #[must_use]
    pub fn points(&self) -> &[IndicatorPoint] {
        &self.points
    }

    /// Returns the number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if there are no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the defined `(date, value)` pairs, skipping undefined points.
    pub fn defined(&self) -> impl Iterator<Item = (NaiveDate, f64)> + '_ {
        self.points
            .iter()
            .filter_map(|p| p.value.map(|value| (p.date, value)))
    }

    /// Returns the number of defined points.
    #[must_use]
    pub fn defined_count(&self) -> usize {
        self.points.iter().filter(|p| p.value.is_some()).count()
    }

    /// Returns true if at least one point is defined.
    ///
    /// An overlay with nothing defined is the "insufficient data" outcome:
    /// the chart renders without it.
    #[must_use]
    pub fn is_defined(&self) -> bool {
        self.points.iter().any(|p| p.value.is_some())
    }

    /// Returns the value at a point index.
    #[must_use]
    pub fn value_at(&self, index: usize) -> Option<f64> {
        self.points.get(index).and_then(|p| p.value)
    }

    /// Returns the value at a date.
    #[must_use]
    pub fn value_on(&self, date: NaiveDate) -> Option<f64> {
        self.points
            .binary_search_by_key(&date, |p| p.date)
            .ok()
            .and_then(|i| self.points[i].value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_roundtrip_labels() {
        for kind in IndicatorKind::all() {
            assert_eq!(kind.as_str().parse::<IndicatorKind>().unwrap(), *kind);
        }
    }

    #[test]
    fn test_kind_parse_rejects_unknown() {
        let err = "XYZ".parse::<IndicatorKind>().unwrap_err();
        assert_eq!(err.name, "XYZ");
        assert!("30 day sma".parse::<IndicatorKind>().is_err());
    }

    #[test]
    fn test_kind_serde_uses_labels() {
        let json = serde_json::to_string(&IndicatorKind::Sma100).unwrap();
        assert_eq!(json, "\"100 Day SMA\"");
    }

    #[test]
    fn test_windows() {
        assert_eq!(IndicatorKind::Sma30.window(), Some(30));
        assert_eq!(IndicatorKind::Sma100.min_bars(), 100);
        assert_eq!(IndicatorKind::LinearRegression.min_bars(), 2);
    }

    #[test]
    fn test_defined_points() {
        let d1 = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        let d2 = NaiveDate::from_ymd_opt(2024, 1, 3).unwrap();
        let series = IndicatorSeries::new(
            IndicatorKind::Sma30,
            vec![
                IndicatorPoint {
                    date: d1,
                    value: None,
                },
                IndicatorPoint {
                    date: d2,
                    value: Some(4.5),
                },
            ],
        );

        assert_eq!(series.defined_count(), 1);
        assert!(series.is_defined());
        assert_eq!(series.defined().collect::<Vec<_>>(), vec![(d2, 4.5)]);
        assert_eq!(series.value_on(d2), Some(4.5));
        assert_eq!(series.value_on(d1), None);
    }
}
