//! Writers for the canonical run artifacts.
//!
//! These produce the machine-readable files that `report` treats as the
//! source of truth.

pub mod metrics;
pub mod structured;

pub use metrics::{MetricsCsvWriter, MetricsOutputError};
pub use structured::{JsonOutputError, JsonReportWriter};
