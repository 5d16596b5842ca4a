//! Cubemap sheet layouts.

/// Horizontal-cross placement table.
pub mod cross;
