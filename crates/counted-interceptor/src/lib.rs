//! counted interceptor library entry.
//!
//! This crate wires counting metadata, the in-process metric registry, and the
//! counting interceptor together. The interception container itself is out of
//! scope: callers hand each invocation to [`CountedInterceptor`] along with the
//! member being invoked.

pub mod bootstrap;
pub mod config;
pub mod interceptor;
pub mod metadata;
pub mod registry;

pub use interceptor::{CountedInterceptor, ResolvedCounter};
pub use metadata::{CountedMetadata, MetadataProvider};
pub use registry::{Counter, Metric, MetricLookup, MetricRegistry};
