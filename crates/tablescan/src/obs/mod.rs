//! Observability: typed scan telemetry behind a sink boundary.
//!
//! This module does not touch driver internals; the driver records
//! through the sink only.

pub(crate) mod sink;

// re-exports
pub use sink::{MetricsEvent, MetricsSink, NoopSink};
