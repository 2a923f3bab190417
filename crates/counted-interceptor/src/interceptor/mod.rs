//! Counting interceptor: resolves a member's counter once, then brackets every
//! invocation with increment / decrement.
//!
//! Resolution flow on a cache miss:
//! metadata lookup -> name resolution -> registry lookup -> cache insert.
//! The registry must already hold a counter under the resolved name; a miss
//! is a configuration error, reported on every call until fixed (failures are
//! not cached).
//!
//! Concurrent first calls for the same member may each resolve; the first
//! cache insert wins and every caller proceeds with that entry.

pub mod cache;

use std::future::Future;
use std::sync::Arc;

use counted_core::error::{CountedError, Result};
use counted_core::{naming, Member, TypeName};

use crate::metadata::MetadataProvider;
use crate::registry::{Metric, MetricLookup};

pub use cache::{CounterCache, ResolvedCounter};

/// Holds one increment for the duration of an invocation.
/// Dropping it decrements unless the counter is monotonic, so the release
/// runs on return, error, unwind, and future cancellation alike.
struct InFlight {
    resolved: Arc<ResolvedCounter>,
}

impl InFlight {
    fn enter(resolved: Arc<ResolvedCounter>) -> Self {
        resolved.counter().inc();
        Self { resolved }
    }
}

impl Drop for InFlight {
    fn drop(&mut self) {
        if !self.resolved.is_monotonic() {
            self.resolved.counter().dec();
        }
    }
}

pub struct CountedInterceptor {
    registry: Arc<dyn MetricLookup>,
    metadata: Arc<dyn MetadataProvider>,
    target: Option<TypeName>,
    cache: CounterCache,
}

impl CountedInterceptor {
    pub fn new(registry: Arc<dyn MetricLookup>, metadata: Arc<dyn MetadataProvider>) -> Self {
        Self {
            registry,
            metadata,
            target: None,
            cache: CounterCache::new(),
        }
    }

    /// Compute name prefixes from `target` (the intercepted type) instead of
    /// each member's declaring type. Matters for inherited members.
    pub fn with_target_type(mut self, target: TypeName) -> Self {
        self.target = Some(target);
        self
    }

    /// Entry point for constructor interception.
    pub fn around_construct<T, F>(&self, constructor: &Member, proceed: F) -> Result<T>
    where
        F: FnOnce() -> T,
    {
        self.invoke(constructor, proceed)
    }

    /// Entry point for method interception.
    pub fn around_invoke<T, F>(&self, method: &Member, proceed: F) -> Result<T>
    where
        F: FnOnce() -> T,
    {
        self.invoke(method, proceed)
    }

    /// Run `proceed` bracketed by the member's counter.
    ///
    /// `Err` is only returned when the counter cannot be resolved, and then
    /// `proceed` is not called. Whatever `proceed` returns (including its own
    /// `Result`) comes back unchanged inside `Ok`; panics propagate.
    pub fn invoke<T, F>(&self, member: &Member, proceed: F) -> Result<T>
    where
        F: FnOnce() -> T,
    {
        let resolved = self.resolve(member)?;
        let _in_flight = InFlight::enter(resolved);
        Ok(proceed())
    }

    /// Async form of [`invoke`](Self::invoke). Resolution happens on first
    /// poll, before `proceed` is polled. Dropping the returned future while
    /// `proceed` is pending releases the increment.
    pub async fn invoke_async<F>(&self, member: &Member, proceed: F) -> Result<F::Output>
    where
        F: Future,
    {
        let resolved = self.resolve(member)?;
        let _in_flight = InFlight::enter(resolved);
        Ok(proceed.await)
    }

    /// Cached resolution for `member`, resolving it on first use.
    pub fn resolve(&self, member: &Member) -> Result<Arc<ResolvedCounter>> {
        if let Some(hit) = self.cache.get(member) {
            return Ok(hit);
        }

        let spec = self.metadata.counted(member).unwrap_or_default();
        let ty = self.target.as_ref().unwrap_or(&member.declaring);
        let name = naming::resolve(ty, member, &spec.name, spec.absolute, self.metadata.prefix());

        let counter = match self.registry.lookup(&name) {
            Some(Metric::Counter(c)) => c,
            Some(other) => {
                tracing::warn!(
                    member = %member,
                    metric = %name,
                    found = other.kind(),
                    "metric is not a counter"
                );
                return Err(CountedError::NotACounter {
                    name,
                    found: other.kind(),
                });
            }
            None => {
                tracing::warn!(member = %member, metric = %name, "no counter registered");
                return Err(CountedError::MissingCounter { name });
            }
        };

        let resolved = Arc::new(ResolvedCounter::new(name, counter, spec.monotonic));
        let stored = self.cache.insert_if_absent(member.clone(), resolved);
        tracing::debug!(
            member = %member,
            metric = %stored.name(),
            monotonic = stored.is_monotonic(),
            "counter resolved"
        );
        Ok(stored)
    }

    /// Number of members resolved so far.
    pub fn cached_members(&self) -> usize {
        self.cache.len()
    }

    pub fn is_cached(&self, member: &Member) -> bool {
        self.cache.contains(member)
    }
}
