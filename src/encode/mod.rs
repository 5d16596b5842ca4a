//! Encoding the finished sheet to disk.

/// Image file writer.
pub mod writer;
