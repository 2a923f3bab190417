//! Named counters and gauges backed by `DashMap`.

use std::fmt::Write;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use counted_core::error::{CountedError, Result};

/// Counter that can be moved both ways (in-flight counts) or only up (totals).
#[derive(Debug, Default)]
pub struct Counter {
    value: AtomicI64,
}

impl Counter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment by 1.
    pub fn inc(&self) {
        self.add(1);
    }

    /// Decrement by 1.
    pub fn dec(&self) {
        self.add(-1);
    }

    /// Add an arbitrary signed delta.
    pub fn add(&self, v: i64) {
        self.value.fetch_add(v, Ordering::Relaxed);
    }

    pub fn count(&self) -> i64 {
        self.value.load(Ordering::Relaxed)
    }
}

#[derive(Debug, Default)]
pub struct Gauge {
    value: AtomicI64,
}

impl Gauge {
    pub fn set(&self, v: i64) {
        self.value.store(v, Ordering::Relaxed);
    }

    pub fn value(&self) -> i64 {
        self.value.load(Ordering::Relaxed)
    }
}

/// A registered metric. Cloning clones the handle, not the value.
#[derive(Debug, Clone)]
pub enum Metric {
    Counter(Arc<Counter>),
    Gauge(Arc<Gauge>),
}

impl Metric {
    pub fn kind(&self) -> &'static str {
        match self {
            Metric::Counter(_) => "counter",
            Metric::Gauge(_) => "gauge",
        }
    }

    fn current(&self) -> i64 {
        match self {
            Metric::Counter(c) => c.count(),
            Metric::Gauge(g) => g.value(),
        }
    }
}

/// Helper to map dotted metric names onto the Prometheus charset.
fn sanitize_name(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' || c == ':' { c } else { '_' })
        .collect()
}

#[derive(Debug, Default)]
pub struct MetricRegistry {
    map: DashMap<String, Metric>,
}

impl MetricRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the counter registered under `name`, registering it if absent.
    pub fn counter(&self, name: &str) -> Result<Arc<Counter>> {
        match self.map.entry(name.to_string()) {
            Entry::Occupied(e) => match e.get() {
                Metric::Counter(c) => Ok(Arc::clone(c)),
                other => Err(CountedError::NotACounter {
                    name: name.to_string(),
                    found: other.kind(),
                }),
            },
            Entry::Vacant(e) => {
                let c = Arc::new(Counter::new());
                e.insert(Metric::Counter(Arc::clone(&c)));
                tracing::debug!(metric = %name, "counter registered");
                Ok(c)
            }
        }
    }

    /// Get the gauge registered under `name`, registering it if absent.
    /// `None` when another kind of metric holds the name.
    pub fn gauge(&self, name: &str) -> Option<Arc<Gauge>> {
        match self.map.entry(name.to_string()) {
            Entry::Occupied(e) => match e.get() {
                Metric::Gauge(g) => Some(Arc::clone(g)),
                Metric::Counter(_) => None,
            },
            Entry::Vacant(e) => {
                let g = Arc::new(Gauge::default());
                e.insert(Metric::Gauge(Arc::clone(&g)));
                Some(g)
            }
        }
    }

    pub fn lookup(&self, name: &str) -> Option<Metric> {
        self.map.get(name).map(|r| r.value().clone())
    }

    pub fn remove(&self, name: &str) -> Option<Metric> {
        self.map.remove(name).map(|(_, m)| m)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.map.contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.map.iter().map(|r| r.key().clone()).collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Render all metrics in Prometheus text exposition format, sorted by name.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for name in self.names() {
            let Some(metric) = self.lookup(&name) else {
                continue;
            };
            let prom = sanitize_name(&name);
            let _ = writeln!(out, "# TYPE {} {}", prom, metric.kind());
            let _ = writeln!(out, "{} {}", prom, metric.current());
        }
        out
    }
}
