use approx::AbsDiffEq;
use derive_more::TryInto;
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Clone, Copy, TryInto, Serialize)]
// Untagged for succintness in report files
#[serde(untagged)]
pub enum MetricValue {
    Float(f32),
    Int(i64),
}

/// Lower and upper bounds around an observed error rate.
///
/// Bounds are whatever the estimator produced: unless clamping was
/// explicitly requested they may fall outside [0, 1].
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub struct ErrorInterval {
    pub lower: f32,
    pub upper: f32,
}

impl ErrorInterval {
    pub fn width(&self) -> f32 {
        self.upper - self.lower
    }

    pub fn contains(&self, value: f32) -> bool {
        value >= self.lower && value <= self.upper
    }
}

impl From<(f32, f32)> for ErrorInterval {
    fn from((lower, upper): (f32, f32)) -> Self {
        ErrorInterval { lower, upper }
    }
}

impl AbsDiffEq for ErrorInterval {
    type Epsilon = f32;

    fn default_epsilon() -> Self::Epsilon {
        core::f32::EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.lower.abs_diff_eq(&other.lower, epsilon)
            && self.upper.abs_diff_eq(&other.upper, epsilon)
    }
}
