//! Ordinary least-squares line against bar index.

/// A fitted straight line `y = slope * x + intercept`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit {
    /// Change in fitted value per bar.
    pub slope: f64,
    /// Fitted value at bar index 0.
    pub intercept: f64,
}

impl LinearFit {
    /// Fits `values[i]` against `i` by least squares.
    ///
    /// Returns `None` for fewer than two values, where the index variance is zero.
    #[must_use]
    pub fn fit(values: &[f64]) -> Option<Self> {
        let n = values.len();
        if n < 2 {
            return None;
        }

        let count = n as f64;
        let x_mean = (count - 1.0) / 2.0;
        let y_mean = values.iter().sum::<f64>() / count;

        let mut sxy = 0.0;
        let mut sxx = 0.0;
        for (i, &y) in values.iter().enumerate() {
            let dx = i as f64 - x_mean;
            sxy += dx * (y - y_mean);
            sxx += dx * dx;
        }

        let slope = sxy / sxx;
        Some(Self {
            slope,
            intercept: y_mean - slope * x_mean,
        })
    }

    /// Evaluates the line at bar index `x`.
    #[must_use]
    pub fn value_at(&self, x: usize) -> f64 {
        self.slope.mul_add(x as f64, self.intercept)
    }

    /// Returns the fitted values at indices `0..n`.
    #[must_use]
    pub fn fitted(&self, n: usize) -> Vec<f64> {
        (0..n).map(|x| self.value_at(x)).collect()
    }

    /// Returns the sum of squared residuals of `values` about this line.
    #[must_use]
    pub fn sum_squared_residuals(&self, values: &[f64]) -> f64 {
        values
            .iter()
            .enumerate()
            .map(|(i, &y)| {
                let r = y - self.value_at(i);
                r * r
            })
            .sum()
    }
}
