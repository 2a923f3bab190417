//! Precomputed counting metadata: declaring type -> member -> spec.
//!
//! Built once at startup from a metadata document or programmatically, then
//! shared read-only via `Arc`.

use std::collections::HashMap;

use counted_core::{CountedSpec, Member};

use crate::config::MetadataConfig;

/// Supplies per-member counting metadata to the interceptor.
pub trait MetadataProvider: Send + Sync {
    /// Declared metadata for `member`, `None` when it declares nothing.
    fn counted(&self, member: &Member) -> Option<CountedSpec>;

    /// Name prefix applied to non-absolute names.
    fn prefix(&self) -> &str {
        ""
    }
}

#[derive(Debug, Default, Clone)]
pub struct CountedMetadata {
    prefix: String,
    members: HashMap<Member, CountedSpec>,
}

impl CountedMetadata {
    pub fn builder() -> CountedMetadataBuilder {
        CountedMetadataBuilder::default()
    }

    pub fn from_config(cfg: &MetadataConfig) -> Self {
        Self {
            prefix: cfg.prefix.clone(),
            members: cfg.declarations().collect(),
        }
    }

    /// Declared members, sorted for stable iteration.
    pub fn declarations(&self) -> Vec<(&Member, &CountedSpec)> {
        let mut out: Vec<_> = self.members.iter().collect();
        out.sort_by(|a, b| a.0.cmp(b.0));
        out
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl MetadataProvider for CountedMetadata {
    fn counted(&self, member: &Member) -> Option<CountedSpec> {
        self.members.get(member).cloned()
    }

    fn prefix(&self) -> &str {
        &self.prefix
    }
}

#[derive(Debug, Default)]
pub struct CountedMetadataBuilder {
    inner: CountedMetadata,
}

impl CountedMetadataBuilder {
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.inner.prefix = prefix.into();
        self
    }

    /// Declare `member`. A later declaration of the same member replaces it.
    pub fn member(mut self, member: Member, spec: CountedSpec) -> Self {
        self.inner.members.insert(member, spec);
        self
    }

    pub fn build(self) -> CountedMetadata {
        self.inner
    }
}
