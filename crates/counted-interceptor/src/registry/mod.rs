//! In-process metric registry (dependency-light).
//!
//! Metrics are stored as atomics keyed by name and rendered in Prometheus text
//! format on demand. The interceptor only reads from a registry, through
//! [`MetricLookup`], so any store that can hand out counter handles by name
//! can be plugged in.

pub mod metrics;

pub use metrics::{Counter, Gauge, Metric, MetricRegistry};

/// Read side of a registry as seen by the interceptor.
pub trait MetricLookup: Send + Sync {
    /// Metric registered under `name`, if any. Never creates one.
    fn lookup(&self, name: &str) -> Option<Metric>;
}

impl MetricLookup for MetricRegistry {
    fn lookup(&self, name: &str) -> Option<Metric> {
        MetricRegistry::lookup(self, name)
    }
}
