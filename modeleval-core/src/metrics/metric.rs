use crate::types::MetricValue;

pub trait Metric<L> {
    fn add_point(&mut self, label: &L, prediction: &L);
    fn get_value(&self) -> MetricValue;
    fn get_name(&self) -> String;
}
