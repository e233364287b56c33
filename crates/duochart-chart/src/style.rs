//! Drawing conventions for duochart charts.
//!
//! Renderers are free to ignore these; they document how the dashboard
//! draws candles and overlays.

use duochart_types::{CandleClass, IndicatorKind};

/// Width of a candle body in milliseconds: half a trading day.
pub const BODY_WIDTH_MS: i64 = 12 * 60 * 60 * 1000;

/// Colour of every wick segment.
pub const WICK_COLOR: &str = "black";

/// Fill and line colour of gain bodies.
pub const GAIN_COLOR: &str = "#00ff00";

/// Fill and line colour of loss bodies.
pub const LOSS_COLOR: &str = "#ff0000";

/// Returns the body colour for a candle class.
///
/// Flat candles have no body height, so they are drawn as a horizontal tick
/// in the wick colour.
#[must_use]
pub const fn candle_color(class: CandleClass) -> &'static str {
    match class {
        CandleClass::Gain => GAIN_COLOR,
        CandleClass::Loss => LOSS_COLOR,
        CandleClass::Flat => WICK_COLOR,
    }
}

/// How an overlay line is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlayStyle {
    /// Line colour.
    pub color: &'static str,
    /// Legend entry.
    pub legend_label: &'static str,
}

/// Returns the line style for an overlay.
#[must_use]
pub const fn overlay_style(kind: IndicatorKind) -> OverlayStyle {
    match kind {
        IndicatorKind::Sma30 => OverlayStyle {
            color: "purple",
            legend_label: "30 Day SMA",
        },
        IndicatorKind::Sma100 => OverlayStyle {
            color: "blue",
            legend_label: "100 Day SMA",
        },
        IndicatorKind::LinearRegression => OverlayStyle {
            color: "red",
            legend_label: "Linear Regression",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlay_colors_are_distinct() {
        let colors: Vec<_> = IndicatorKind::all()
            .iter()
            .map(|k| overlay_style(*k).color)
            .collect();
        assert_eq!(colors.len(), 3);
        assert!(colors.iter().all(|c| colors.iter().filter(|o| *o == c).count() == 1));
    }

    #[test]
    fn test_body_width_is_half_day() {
        assert_eq!(BODY_WIDTH_MS, 43_200_000);
    }
}
