//! Zip extraction into a scoped scratch directory.

/// Extraction and face-file lookup.
pub mod extract;
