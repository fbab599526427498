/// Statistics cached alongside a signal series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesStats {
    /// 50th percentile of the values.
    pub median: f64,
    /// Largest absolute value, never below 0.
    pub max_abs: f64,
}

impl SeriesStats {
    /// Compute statistics for an already validated, non-empty series.
    pub fn compute(values: &[f64]) -> Self {
        let median = percentile(values, 50.0);
        let max_abs = values.iter().fold(0.0f64, |acc, v| acc.max(v.abs()));
        SeriesStats { median, max_abs }
    }

    /// Scale mapping a deviation from the median to a full half-height bar.
    pub fn amplitude_range(&self) -> f64 {
        self.max_abs - self.median
    }
}

/// Estimate the `p`-th percentile (0 < p <= 100) of `values`.
///
/// Uses the `p (n + 1) / 100` position estimator: positions below the first
/// order statistic give the minimum, positions past the last give the
/// maximum, anything in between is interpolated linearly. At `p = 50` this
/// yields the middle element for odd lengths and the mean of the two middle
/// elements for even lengths.
///
/// Returns NaN for an empty slice.
pub fn percentile(values: &[f64], p: f64) -> f64 {
    let n = values.len();
    if n == 0 {
        return f64::NAN;
    }
    if n == 1 {
        return values[0];
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let pos = p * (n as f64 + 1.0) / 100.0;
    let fpos = pos.floor();
    let d = pos - fpos;

    if pos < 1.0 {
        return sorted[0];
    }
    if pos >= n as f64 {
        return sorted[n - 1];
    }

    let lower = sorted[fpos as usize - 1];
    let upper = sorted[fpos as usize];
    lower + d * (upper - lower)
}
