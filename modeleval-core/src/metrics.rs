mod accuracy;
mod error_rate;
mod example_count;
mod metric;
mod metric_registry;

pub use accuracy::*;
pub use error_rate::*;
pub use example_count::*;
pub use metric::*;
pub use metric_registry::*;
