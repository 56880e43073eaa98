use crate::metrics::Metric;
use crate::types::MetricValue;

/// Misclassification rate, 1 - accuracy. This is the point estimate the
/// interval estimator expects as its `error` input.
pub struct ErrorRateMetric {
    pub mismatches: u64,
    pub count: u64,
}

impl ErrorRateMetric {
    pub fn new() -> ErrorRateMetric {
        ErrorRateMetric {
            mismatches: 0,
            count: 0,
        }
    }
}

impl Default for ErrorRateMetric {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: PartialEq> Metric<L> for ErrorRateMetric {
    fn add_point(&mut self, label: &L, prediction: &L) {
        if label != prediction {
            self.mismatches += 1;
        }
        self.count += 1;
    }

    fn get_value(&self) -> MetricValue {
        MetricValue::Float(self.mismatches as f32 / self.count as f32)
    }

    fn get_name(&self) -> String {
        "ErrorRate".to_owned()
    }
}
