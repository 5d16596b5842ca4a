//! zip2cubemap turns six cube-face images shipped in a zip archive into one
//! horizontal-cross cubemap sheet.
//!
//! # Pipeline overview
//!
//! 1. **Extract**: unzip into a scratch directory owned by [`ExtractedArchive`]
//! 2. **Load**: find and decode `front.png`, `back.png`, `left.png`, `right.png`, `top.png`,
//!    `bottom.png` into a [`FaceSet`]
//! 3. **Validate**: [`FaceSet::common_size`] checks all faces share one resolution
//! 4. **Composite**: [`compose_cross`] places the faces on a 4x3 grid per [`HORIZONTAL_CROSS`]
//! 5. **Write**: [`write_canvas`] encodes the sheet (PNG unless the extension says otherwise)
//!
//! [`convert`] runs all five stages. Any failure aborts the run; the scratch directory is
//! removed on every path and the output file is never touched unless the write stage is reached.
#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

mod archive;
mod encode;
mod faces;
mod foundation;
mod layout;
mod pipeline;
mod render;

pub use archive::extract::{ExtractedArchive, extract_archive, locate_file};
pub use encode::writer::{WriteSummary, output_format, write_canvas};
pub use faces::load::{decode_face, load_faces};
pub use faces::set::FaceSet;
pub use foundation::core::{Face, FaceImage, FaceSize};
pub use foundation::error::{CubemapError, CubemapResult};
pub use layout::cross::{Cell, CrossLayout, HORIZONTAL_CROSS};
pub use pipeline::{ConversionReport, ConvertOpts, convert};
pub use render::composite::{CubemapCanvas, compose_cross};
