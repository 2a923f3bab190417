//! counted core: member identity, metric name resolution, and the shared
//! error surface.
//!
//! This crate holds the pure parts of the counted-invocation stack. It carries
//! no registry or concurrency dependencies so the naming rules can be reused
//! by bootstrap tooling and by the interceptor alike.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `CountedError`/`Result`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod member;
pub mod naming;

/// Shared result type.
pub use error::{CountedError, ErrorCode, Result};
pub use member::{CountedSpec, Member, MemberKind, TypeName};
