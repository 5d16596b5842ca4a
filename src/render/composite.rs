use crate::faces::set::FaceSet;
use crate::foundation::core::{FaceImage, FaceSize, rgba8_pixel};
use crate::foundation::error::{CubemapError, CubemapResult};
use crate::layout::cross::CrossLayout;

/// Output sheet as straight RGBA8, row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CubemapCanvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// `width * height * 4` bytes.
    pub data: Vec<u8>,
}

impl CubemapCanvas {
    /// Fully transparent canvas (every channel zero).
    pub fn transparent(size: FaceSize) -> CubemapResult<Self> {
        let len = (size.width as usize)
            .checked_mul(size.height as usize)
            .and_then(|n| n.checked_mul(4))
            .ok_or_else(|| anyhow::anyhow!("canvas {size} does not fit in memory"))?;
        Ok(Self {
            width: size.width,
            height: size.height,
            data: vec![0u8; len],
        })
    }

    /// Dimensions as a [`FaceSize`].
    pub fn size(&self) -> FaceSize {
        FaceSize::new(self.width, self.height)
    }

    /// RGBA value at `(x, y)`, or `None` when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        rgba8_pixel(self.width, self.height, &self.data, x, y)
    }

    /// Copy `img` verbatim with its top-left corner at `(x, y)`.
    ///
    /// Destination channels are overwritten, alpha included; nothing is blended.
    pub fn paste(&mut self, img: &FaceImage, x: u32, y: u32) -> CubemapResult<()> {
        let fits_x = x.checked_add(img.width).is_some_and(|r| r <= self.width);
        let fits_y = y.checked_add(img.height).is_some_and(|b| b <= self.height);
        if !fits_x || !fits_y {
            return Err(CubemapError::Other(anyhow::anyhow!(
                "{}x{} image at ({x}, {y}) exceeds {}x{} canvas",
                img.width,
                img.height,
                self.width,
                self.height
            )));
        }

        let row_bytes = img.width as usize * 4;
        if img.rgba8.len() != row_bytes * img.height as usize {
            return Err(CubemapError::Other(anyhow::anyhow!(
                "image buffer length {} does not match {}x{} rgba8",
                img.rgba8.len(),
                img.width,
                img.height
            )));
        }

        let stride = self.width as usize * 4;
        for (row, src) in img.rgba8.chunks_exact(row_bytes).enumerate() {
            let start = (y as usize + row) * stride + x as usize * 4;
            self.data[start..start + row_bytes].copy_from_slice(src);
        }
        Ok(())
    }
}

/// Composite `faces` onto a transparent sheet following `layout`.
///
/// `face_size` is the size every face shares (see [`FaceSet::common_size`]). Cells without a
/// face stay fully transparent.
pub fn compose_cross(
    faces: &FaceSet,
    face_size: FaceSize,
    layout: &CrossLayout,
) -> CubemapResult<CubemapCanvas> {
    let mut canvas = CubemapCanvas::transparent(layout.canvas_size(face_size)?)?;

    for (face, cell) in layout.cells {
        let img = faces.get(face);
        if img.size() != face_size {
            return Err(CubemapError::SizeMismatch(
                faces.iter().map(|(f, i)| (f, i.size())).collect(),
            ));
        }
        let (x, y) = cell.offset(face_size);
        canvas.paste(img, x, y)?;
    }

    tracing::debug!(layout = layout.name, size = %canvas.size(), "canvas composed");
    Ok(canvas)
}

#[cfg(test)]
#[path = "../../tests/unit/render/composite.rs"]
mod tests;
