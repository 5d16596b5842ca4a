use std::io::Cursor;
use std::path::{Path, PathBuf};

use image::ImageFormat;

use crate::foundation::error::{CubemapError, CubemapResult};
use crate::pipeline::ConvertOpts;
use crate::render::composite::CubemapCanvas;

/// What [`write_canvas`] produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WriteSummary {
    /// Path written.
    pub path: PathBuf,
    /// Encoding used.
    pub format: ImageFormat,
    /// Encoded file size in bytes.
    pub bytes: usize,
}

/// Format for `path`, chosen by extension with `default` as the fallback.
pub fn output_format(path: &Path, default: ImageFormat) -> ImageFormat {
    ImageFormat::from_path(path).unwrap_or(default)
}

/// Encode `canvas` and write it to `path`, replacing any existing file.
///
/// The image is encoded in memory first; an encoder failure leaves `path` untouched.
pub fn write_canvas(
    canvas: &CubemapCanvas,
    path: &Path,
    opts: &ConvertOpts,
) -> CubemapResult<WriteSummary> {
    let format = output_format(path, opts.default_format);

    let mut buf = Vec::new();
    image::write_buffer_with_format(
        &mut Cursor::new(&mut buf),
        &canvas.data,
        canvas.width,
        canvas.height,
        image::ColorType::Rgba8,
        format,
    )
    .map_err(|e| CubemapError::write(path, format!("encode {format:?}: {e}")))?;

    if opts.create_output_dir {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                CubemapError::write(path, format!("create output dir '{}': {e}", parent.display()))
            })?;
        }
    }

    std::fs::write(path, &buf).map_err(|e| CubemapError::write(path, e.to_string()))?;

    tracing::info!(path = %path.display(), ?format, bytes = buf.len(), "cubemap written");
    Ok(WriteSummary {
        path: path.to_path_buf(),
        format,
        bytes: buf.len(),
    })
}

#[cfg(test)]
#[path = "../../tests/unit/encode/writer.rs"]
mod tests;
