pub mod error;
pub mod evaluation;
pub mod intervals;
pub mod metrics;
pub mod predictor;
pub mod suite;
pub mod types;

pub use types::*;
