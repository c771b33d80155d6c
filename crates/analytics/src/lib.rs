//! Display analytics — deterministic synthetic metrics used to backfill
//! dashboards until real delivery counters accumulate.

pub mod snapshot;
pub mod synthetic;

pub use snapshot::{metrics_for_campaign, SyntheticMetrics};
pub use synthetic::synthesize_metric;
