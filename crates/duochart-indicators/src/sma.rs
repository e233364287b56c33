//! Trailing simple moving average.

/// Computes the trailing simple moving average of `values` over `window`.
///
/// The output has one entry per input. Entries before the window fills are
/// `None`; entry `i >= window - 1` is the mean of `values[i + 1 - window..=i]`.
/// A zero window yields no defined values.
#[must_use]
pub fn sma(values: &[f64], window: usize) -> Vec<Option<f64>> {
    let mut out = vec![None; values.len()];
    if window == 0 || window > values.len() {
        return out;
    }

    // Summed per window: a running sum carries rounding residue past outliers.
    let period = window as f64;
    for (i, slot) in out.iter_mut().enumerate().skip(window - 1) {
        let sum: f64 = values[i + 1 - window..=i].iter().sum();
        *slot = Some(sum / period);
    }

    out
}
