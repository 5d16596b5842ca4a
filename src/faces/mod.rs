//! Loading the six face images and checking they agree on size.

/// Locating and decoding face files.
pub mod load;
/// The complete set of six decoded faces.
pub mod set;
