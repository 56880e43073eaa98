use crate::metrics::{accuracy, error_rate, example_count, Metric};

pub fn get_metric<L: PartialEq + 'static>(name: &str) -> Option<Box<dyn Metric<L>>> {
    match name {
        "accuracy" => Some(Box::new(accuracy::AccuracyMetric::new())),
        "error-rate" => Some(Box::new(error_rate::ErrorRateMetric::new())),
        "count" => Some(Box::new(example_count::ExampleCountMetric::new())),
        _ => None,
    }
}

pub fn known_metric(name: &str) -> bool {
    matches!(name, "accuracy" | "error-rate" | "count")
}
