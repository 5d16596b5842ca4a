//! Compositing faces onto the output sheet.

/// Canvas and cross compositor.
pub mod composite;
