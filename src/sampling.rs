//! The sample domain driving batch evaluation for plotting.

use serde::{Deserialize, Serialize};

/// A fixed ordered sequence of evenly spaced x-values over a closed
/// interval, supplied by the host page to drive curve plotting.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SampleDomain {
    pub start: f64,
    pub stop: f64,
    pub step: f64,
}

impl SampleDomain {
    pub fn new(start: f64, stop: f64, step: f64) -> Self {
        Self { start, stop, step }
    }

    /// Number of sample points: `floor((stop - start) / step) + 1`.
    pub fn len(&self) -> usize {
        ((self.stop - self.start) / self.step).floor() as usize + 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Materialize the sample points, `x_i = start + i * step`.
    pub fn values(&self) -> Vec<f64> {
        (0..self.len())
            .map(|i| self.start + i as f64 * self.step)
            .collect()
    }
}

/// The domain the widget page hard-codes for its chart.
impl Default for SampleDomain {
    fn default() -> Self {
        Self {
            start: 0.0,
            stop: 1.01,
            step: 0.01,
        }
    }
}
