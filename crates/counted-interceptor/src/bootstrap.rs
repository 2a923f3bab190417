//! Startup registration of declared counters.
//!
//! The interceptor only looks counters up. Run this once after loading
//! metadata so every declared member finds its counter on first call.

use counted_core::error::Result;
use counted_core::{naming, TypeName};

use crate::metadata::{CountedMetadata, MetadataProvider};
use crate::registry::MetricRegistry;

/// Register a counter for every declared member, named the way the
/// interceptor resolves it. Returns the registered names, sorted and deduped.
///
/// Prefixes come from each member's declaring type, matching an interceptor
/// without a target type. Members whose names collide share one counter.
/// Fails if a name is already held by a non-counter metric.
pub fn register_declared(
    metadata: &CountedMetadata,
    registry: &MetricRegistry,
) -> Result<Vec<String>> {
    register(metadata, registry, None)
}

/// [`register_declared`] for an interceptor built with
/// `with_target_type(target)`: prefixes come from `target`, so inherited
/// members are registered under the names the interceptor looks up.
pub fn register_for(
    target: &TypeName,
    metadata: &CountedMetadata,
    registry: &MetricRegistry,
) -> Result<Vec<String>> {
    register(metadata, registry, Some(target))
}

fn register(
    metadata: &CountedMetadata,
    registry: &MetricRegistry,
    target: Option<&TypeName>,
) -> Result<Vec<String>> {
    let mut names = Vec::with_capacity(metadata.len());
    for (member, spec) in metadata.declarations() {
        let ty = target.unwrap_or(&member.declaring);
        let name = naming::resolve(
            ty,
            member,
            &spec.name,
            spec.absolute,
            metadata.prefix(),
        );
        registry.counter(&name)?;
        names.push(name);
    }
    names.sort();
    names.dedup();
    tracing::info!(
        owner = ?target.map(TypeName::qualified),
        members = metadata.len(),
        counters = names.len(),
        "declared counters registered"
    );
    Ok(names)
}
