use std::fmt;
use std::path::{Path, PathBuf};

use image::ImageFormat;

use crate::archive::extract::extract_archive;
use crate::encode::writer::write_canvas;
use crate::faces::load::load_faces;
use crate::foundation::error::CubemapResult;
use crate::layout::cross::HORIZONTAL_CROSS;
use crate::render::composite::compose_cross;

/// Options for [`convert`].
#[derive(Clone, Debug)]
pub struct ConvertOpts {
    /// Create missing parent directories of the output path.
    pub create_output_dir: bool,
    /// Encoding used when the output extension is missing or unrecognized.
    pub default_format: ImageFormat,
}

impl Default for ConvertOpts {
    fn default() -> Self {
        Self {
            create_output_dir: true,
            default_format: ImageFormat::Png,
        }
    }
}

/// Outcome of a successful [`convert`] run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConversionReport {
    /// Path of the written sheet.
    pub output: PathBuf,
    /// Layout name.
    pub layout: &'static str,
    /// Sheet width in pixels.
    pub width: u32,
    /// Sheet height in pixels.
    pub height: u32,
}

impl fmt::Display for ConversionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Cubemap created: {}", self.output.display())?;
        writeln!(f, "Layout: {}", self.layout)?;
        write!(f, "Resolution: {}x{}", self.width, self.height)
    }
}

/// Convert the face archive at `archive` into a horizontal-cross sheet at `output`.
///
/// Stages run strictly in order: extract, load, validate sizes, composite, write. The first
/// failure aborts the run. The scratch directory is removed on every path, and `output` is only
/// touched once everything before the write has succeeded.
#[tracing::instrument(skip(opts))]
pub fn convert(
    archive: &Path,
    output: &Path,
    opts: &ConvertOpts,
) -> CubemapResult<ConversionReport> {
    let extracted = extract_archive(archive)?;
    let faces = load_faces(extracted.root())?;
    drop(extracted);

    let face_size = faces.common_size()?;
    tracing::info!(%face_size, "faces validated");

    let layout = &HORIZONTAL_CROSS;
    let canvas = compose_cross(&faces, face_size, layout)?;
    drop(faces);

    let summary = write_canvas(&canvas, output, opts)?;

    Ok(ConversionReport {
        output: summary.path,
        layout: layout.name,
        width: canvas.width,
        height: canvas.height,
    })
}
