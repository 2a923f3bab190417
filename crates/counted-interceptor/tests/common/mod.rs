#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use counted_interceptor::{Metric, MetricLookup, MetricRegistry};
use tracing_subscriber::EnvFilter;

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Registry wrapper that counts lookups.
pub struct CountingLookup {
    pub inner: Arc<MetricRegistry>,
    pub lookups: AtomicUsize,
}

impl CountingLookup {
    pub fn new(inner: Arc<MetricRegistry>) -> Self {
        Self {
            inner,
            lookups: AtomicUsize::new(0),
        }
    }

    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

impl MetricLookup for CountingLookup {
    fn lookup(&self, name: &str) -> Option<Metric> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        self.inner.lookup(name)
    }
}
