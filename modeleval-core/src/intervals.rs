use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_default::DefaultFromSerde;

use crate::error::{Error, Result};

/// Two-sided coverage levels with tabulated normal critical values.
#[derive(Serialize, Deserialize, JsonSchema, Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum ConfidenceLevel {
    Ninety,
    #[default]
    NinetyFive,
    NinetyNine,
}

impl ConfidenceLevel {
    pub fn z_score(&self) -> f32 {
        match self {
            ConfidenceLevel::Ninety => 1.645,
            ConfidenceLevel::NinetyFive => 1.96,
            ConfidenceLevel::NinetyNine => 2.576,
        }
    }
}

#[derive(Serialize, Deserialize, JsonSchema, DefaultFromSerde, Debug, PartialEq, Clone, Copy)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct IntervalOptions {
    #[serde(default)]
    pub level: ConfidenceLevel,

    /// Clamp the reported bounds into [0, 1]. The Wald interval can poke
    /// outside that range for small n or extreme error rates; the raw
    /// bounds are reported unless a caller opts in here.
    #[serde(default)]
    pub clamp: bool,
}

/// Estimate a Wald interval on error at the configured coverage level.
///
/// term = z * sqrt(error * (1 - error) / n), bounds = error -/+ term.
pub fn estimate_error_interval(
    error: f32,
    n: u64,
    options: &IntervalOptions,
) -> Result<(f32, f32)> {
    if n == 0 {
        return Err(Error::DomainError(
            "sample size must be positive".to_owned(),
        ));
    }
    let variance = error * (1.0 - error);
    if variance < 0.0 {
        return Err(Error::DomainError(format!(
            "error rate {error} puts a negative value under the square root"
        )));
    }

    let term = options.level.z_score() * (variance / n as f32).sqrt();
    let mut lower = error - term;
    let mut upper = error + term;
    if options.clamp {
        lower = lower.max(0.0);
        upper = upper.min(1.0);
    }

    Ok((lower, upper))
}

/// Estimate 95% confidence interval on error.
pub fn estimate_error_95_interval(error: f32, n: u64) -> Result<(f32, f32)> {
    estimate_error_interval(error, n, &IntervalOptions::default())
}
