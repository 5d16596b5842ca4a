use std::collections::BTreeMap;
use std::path::Path;

use anyhow::Context;

use crate::archive::extract::locate_file;
use crate::faces::set::FaceSet;
use crate::foundation::core::{Face, FaceImage};
use crate::foundation::error::{CubemapError, CubemapResult};

/// Decode encoded image bytes for `face` into straight RGBA8.
///
/// The format is sniffed from the bytes. Grayscale and RGB sources become opaque RGBA; 16-bit
/// channels are reduced to 8 bits.
pub fn decode_face(face: Face, bytes: &[u8]) -> CubemapResult<FaceImage> {
    let dyn_img =
        image::load_from_memory(bytes).map_err(|e| CubemapError::decode(face, e.to_string()))?;
    let rgba = dyn_img.to_rgba8();
    let (width, height) = rgba.dimensions();
    if width == 0 || height == 0 {
        return Err(CubemapError::decode(face, "image has zero area"));
    }

    Ok(FaceImage {
        width,
        height,
        rgba8: rgba.into_raw(),
    })
}

/// Locate and decode all six faces below `root`.
///
/// Every missing file is collected before failing, so one error names them all. Files that are
/// not listed as faces are ignored.
#[tracing::instrument]
pub fn load_faces(root: &Path) -> CubemapResult<FaceSet> {
    let mut located = Vec::with_capacity(Face::ALL.len());
    let mut missing = Vec::new();
    for face in Face::ALL {
        match locate_file(root, face.file_name()) {
            Some(path) => located.push((face, path)),
            None => missing.push(face),
        }
    }
    if !missing.is_empty() {
        return Err(CubemapError::MissingFace(missing));
    }

    let mut images = BTreeMap::new();
    for (face, path) in located {
        let bytes =
            std::fs::read(&path).with_context(|| format!("read face '{}'", path.display()))?;
        let img = decode_face(face, &bytes)?;
        tracing::debug!(%face, size = %img.size(), "face decoded");
        images.insert(face, img);
    }

    FaceSet::from_map(images)
}

#[cfg(test)]
#[path = "../../tests/unit/faces/load.rs"]
mod tests;
