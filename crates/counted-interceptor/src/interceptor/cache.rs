use std::sync::Arc;

use dashmap::DashMap;

use counted_core::Member;

use crate::registry::Counter;

/// A member's resolved counter. Immutable once cached.
#[derive(Debug)]
pub struct ResolvedCounter {
    name: String,
    counter: Arc<Counter>,
    monotonic: bool,
}

impl ResolvedCounter {
    pub fn new(name: String, counter: Arc<Counter>, monotonic: bool) -> Self {
        Self {
            name,
            counter,
            monotonic,
        }
    }

    /// Registry name the counter was found under.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn counter(&self) -> &Arc<Counter> {
        &self.counter
    }

    /// Monotonic counters are incremented on entry and never decremented.
    pub fn is_monotonic(&self) -> bool {
        self.monotonic
    }
}

/// Member -> resolved counter. Entries are never evicted.
#[derive(Default)]
pub struct CounterCache {
    map: DashMap<Member, Arc<ResolvedCounter>>,
}

impl CounterCache {
    pub fn new() -> Self {
        Self { map: DashMap::new() }
    }

    pub fn get(&self, member: &Member) -> Option<Arc<ResolvedCounter>> {
        self.map.get(member).map(|r| Arc::clone(r.value()))
    }

    /// Store `resolved` unless the member is already cached.
    /// Returns whichever entry ends up in the cache (first insert wins).
    pub fn insert_if_absent(
        &self,
        member: Member,
        resolved: Arc<ResolvedCounter>,
    ) -> Arc<ResolvedCounter> {
        let entry = self.map.entry(member).or_insert(resolved);
        Arc::clone(entry.value())
    }

    pub fn contains(&self, member: &Member) -> bool {
        self.map.contains_key(member)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
