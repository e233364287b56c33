//! Indicator dispatch.

use duochart_types::{
    IndicatorKind, IndicatorPoint, IndicatorSeries, PriceSeries, UnsupportedIndicatorError,
};
use tracing::{debug, warn};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::{LinearFit, sma};

/// Outcome of one requested overlay.
pub type IndicatorResult = Result<IndicatorSeries, UnsupportedIndicatorError>;

/// Computes one overlay from the close prices of `series`.
///
/// Moving averages produce one point per bar, undefined until the window
/// fills. The regression line produces one defined point per bar, or no
/// points at all for fewer than two bars.
#[must_use]
pub fn compute_indicator(series: &PriceSeries, kind: IndicatorKind) -> IndicatorSeries {
    let closes = series.closes();

    let values: Vec<Option<f64>> = match kind {
        IndicatorKind::Sma30 | IndicatorKind::Sma100 => {
            sma(&closes, kind.window().unwrap_or_default())
        }
        IndicatorKind::LinearRegression => match LinearFit::fit(&closes) {
            Some(fit) => fit.fitted(closes.len()).into_iter().map(Some).collect(),
            None => Vec::new(),
        },
    };

    if series.len() < kind.min_bars() {
        debug!(
            indicator = %kind,
            bars = series.len(),
            required = kind.min_bars(),
            "not enough bars for a defined overlay"
        );
    }

    let points = series
        .dates()
        .zip(values)
        .map(|(date, value)| IndicatorPoint { date, value })
        .collect();
    IndicatorSeries::new(kind, points)
}

/// Computes one overlay per kind, in the given order.
#[must_use]
pub fn compute_kinds(series: &PriceSeries, kinds: &[IndicatorKind]) -> Vec<IndicatorSeries> {
    #[cfg(feature = "parallel")]
    let overlays = kinds
        .par_iter()
        .map(|&kind| compute_indicator(series, kind))
        .collect();

    #[cfg(not(feature = "parallel"))]
    let overlays = kinds
        .iter()
        .map(|&kind| compute_indicator(series, kind))
        .collect();

    overlays
}

/// Computes overlays for indicator identifiers as supplied by a user.
///
/// Returns one result per name, in request order. Each request is computed
/// independently from the same closes, so an unknown name yields an
/// [`UnsupportedIndicatorError`] in its own slot without affecting the others.
pub fn compute_requested<S>(series: &PriceSeries, names: &[S]) -> Vec<IndicatorResult>
where
    S: AsRef<str> + Sync,
{
    let compute = |name: &S| -> IndicatorResult {
        let name = name.as_ref();
        match name.parse::<IndicatorKind>() {
            Ok(kind) => Ok(compute_indicator(series, kind)),
            Err(err) => {
                warn!(indicator = name, "unsupported indicator requested");
                Err(err)
            }
        }
    };

    #[cfg(feature = "parallel")]
    let results = names.par_iter().map(compute).collect();

    #[cfg(not(feature = "parallel"))]
    let results = names.iter().map(compute).collect();

    results
}
