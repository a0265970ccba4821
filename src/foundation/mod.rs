//! Shared value types and the crate error taxonomy.

/// Core value types (viewport, authored transform state).
pub mod core;
/// Error and result types.
pub mod error;
