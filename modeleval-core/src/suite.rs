use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_default::DefaultFromSerde;

use crate::error::{Error, Result};
use crate::intervals::{estimate_error_interval, IntervalOptions};
use crate::metrics::{get_metric, known_metric, Metric};
use crate::types::{ErrorInterval, MetricValue};

fn default_metrics() -> Vec<String> {
    vec!["accuracy".to_owned(), "error-rate".to_owned()]
}

#[derive(Serialize, Deserialize, JsonSchema, DefaultFromSerde, Debug, Clone)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct EvaluationConfig {
    /// Registry names of the metrics to report.
    #[serde(default = "default_metrics")]
    metrics: Vec<String>,

    /// When present, a Wald interval around the observed error rate is
    /// attached to the report, using the split's own sample count.
    #[serde(default)]
    interval: Option<IntervalOptions>,
}

#[derive(Serialize, Debug, PartialEq)]
pub struct MetricReport {
    pub name: String,
    pub value: MetricValue,
}

#[derive(Serialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationReport {
    pub metrics: Vec<MetricReport>,
    pub error_interval: Option<ErrorInterval>,
}

/// A named set of metrics, configured up front, run over parallel label and
/// prediction sequences.
pub struct EvaluationSuite {
    config: EvaluationConfig,
}

impl EvaluationSuite {
    pub fn create_from_json(json: &str) -> Result<EvaluationSuite> {
        let config: EvaluationConfig = serde_json::from_str(json).map_err(|e| {
            Error::InvalidConfiguration(format!("Failed to parse configuration: {e}"))
        })?;

        Self::create_from_configuration(config)
    }

    pub fn create_from_yaml(yaml: &str) -> Result<EvaluationSuite> {
        let json_from_yaml = serde_yaml::from_str::<serde_json::Value>(yaml)
            .map_err(|e| Error::InvalidConfiguration(format!("Failed to parse yaml: {e}")))?;
        let config: EvaluationConfig = serde_json::from_value(json_from_yaml).map_err(|e| {
            Error::InvalidConfiguration(format!("Failed to parse configuration: {e}"))
        })?;

        Self::create_from_configuration(config)
    }

    fn create_from_configuration(config: EvaluationConfig) -> Result<EvaluationSuite> {
        for name in &config.metrics {
            if !known_metric(name) {
                return Err(Error::InvalidConfiguration(format!(
                    "Unknown metric: {name}"
                )));
            }
        }

        Ok(EvaluationSuite { config })
    }

    pub fn config(&self) -> &EvaluationConfig {
        &self.config
    }

    pub fn run<L: PartialEq + 'static>(
        &self,
        y_true: &[L],
        y_pred: &[L],
    ) -> Result<EvaluationReport> {
        if y_true.len() != y_pred.len() {
            return Err(Error::DimensionMismatch(format!(
                "{} labels but {} predictions",
                y_true.len(),
                y_pred.len()
            )));
        }
        if y_true.is_empty() {
            return Err(Error::InvalidArgument(
                "cannot evaluate an empty label sequence".to_owned(),
            ));
        }

        let mut metrics: Vec<Box<dyn Metric<L>>> = self
            .config
            .metrics
            .iter()
            .map(|name| {
                get_metric(name)
                    .ok_or_else(|| Error::InvalidConfiguration(format!("Unknown metric: {name}")))
            })
            .collect::<Result<_>>()?;

        for (label, prediction) in y_true.iter().zip(y_pred.iter()) {
            for metric in metrics.iter_mut() {
                metric.add_point(label, prediction);
            }
        }

        let error_interval = match &self.config.interval {
            Some(options) => {
                let mismatches = y_true
                    .iter()
                    .zip(y_pred.iter())
                    .filter(|(label, prediction)| label != prediction)
                    .count();
                let error = mismatches as f32 / y_true.len() as f32;
                let bounds = estimate_error_interval(error, y_true.len() as u64, options)?;
                Some(bounds.into())
            }
            None => None,
        };

        let metrics = metrics
            .iter()
            .map(|metric| MetricReport {
                name: metric.get_name(),
                value: metric.get_value(),
            })
            .collect();

        Ok(EvaluationReport {
            metrics,
            error_interval,
        })
    }
}
