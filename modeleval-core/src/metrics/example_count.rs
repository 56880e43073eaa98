use crate::metrics::Metric;
use crate::types::MetricValue;

pub struct ExampleCountMetric {
    pub count: u64,
}

impl ExampleCountMetric {
    pub fn new() -> ExampleCountMetric {
        ExampleCountMetric { count: 0 }
    }
}

impl Default for ExampleCountMetric {
    fn default() -> Self {
        Self::new()
    }
}

impl<L> Metric<L> for ExampleCountMetric {
    fn add_point(&mut self, _label: &L, _prediction: &L) {
        self.count += 1;
    }

    fn get_value(&self) -> MetricValue {
        MetricValue::Int(self.count as i64)
    }

    fn get_name(&self) -> String {
        "Example #".to_owned()
    }
}
