use crate::error::InvalidSeriesError;

/// One value per genomic bin, `step` base pairs apart.
#[derive(Debug, Clone, PartialEq)]
pub struct SignalSeries {
    step: f64,
    values: Vec<f64>,
}

impl SignalSeries {
    /// Validate and wrap a series: the step must be positive and finite,
    /// the values non-empty and finite.
    pub fn new(step: f64, values: Vec<f64>) -> Result<Self, InvalidSeriesError> {
        if !(step.is_finite() && step > 0.0) {
            return Err(InvalidSeriesError::InvalidStep(step));
        }
        if values.is_empty() {
            return Err(InvalidSeriesError::Empty);
        }
        if let Some((index, &value)) = values.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            return Err(InvalidSeriesError::NonFinite { index, value });
        }
        Ok(SignalSeries { step, values })
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Genomic start of bin `i`, truncated to whole base pairs.
    pub fn position(&self, i: usize) -> i64 {
        (self.step * i as f64) as i64
    }

    /// Number of base pairs covered by all bins.
    pub fn extent(&self) -> f64 {
        self.step * self.values.len() as f64
    }
}
