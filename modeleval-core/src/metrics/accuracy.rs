use crate::metrics::Metric;
use crate::types::MetricValue;

pub struct AccuracyMetric {
    pub matches: u64,
    pub count: u64,
}

impl AccuracyMetric {
    pub fn new() -> AccuracyMetric {
        AccuracyMetric {
            matches: 0,
            count: 0,
        }
    }
}

impl Default for AccuracyMetric {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: PartialEq> Metric<L> for AccuracyMetric {
    fn add_point(&mut self, label: &L, prediction: &L) {
        if label == prediction {
            self.matches += 1;
        }
        self.count += 1;
    }

    fn get_value(&self) -> MetricValue {
        MetricValue::Float(self.matches as f32 / self.count as f32)
    }

    fn get_name(&self) -> String {
        "Accuracy".to_owned()
    }
}
