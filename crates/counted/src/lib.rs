//! Top-level facade crate for counted.
//!
//! Re-exports core types and the interceptor library so users can depend on a single crate.

pub mod core {
    pub use counted_core::*;
}

pub mod interceptor {
    pub use counted_interceptor::*;
}
