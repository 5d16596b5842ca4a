use std::collections::BTreeMap;

use crate::foundation::core::{Face, FaceImage, FaceSize};
use crate::foundation::error::{CubemapError, CubemapResult};

/// Exactly one decoded image per [`Face`].
///
/// Only constructible complete, so lookups by face never fail.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FaceSet {
    faces: [FaceImage; 6],
}

impl FaceSet {
    /// Build a set from a face map.
    ///
    /// Every absent face is reported in one [`CubemapError::MissingFace`].
    pub fn from_map(mut map: BTreeMap<Face, FaceImage>) -> CubemapResult<Self> {
        let mut faces = Vec::with_capacity(Face::ALL.len());
        let mut missing = Vec::new();
        for face in Face::ALL {
            match map.remove(&face) {
                Some(img) => faces.push(img),
                None => missing.push(face),
            }
        }
        if !missing.is_empty() {
            return Err(CubemapError::MissingFace(missing));
        }

        let faces: [FaceImage; 6] = faces
            .try_into()
            .map_err(|_| anyhow::anyhow!("face set must hold six faces"))?;
        Ok(Self { faces })
    }

    /// Image for `face`.
    pub fn get(&self, face: Face) -> &FaceImage {
        &self.faces[face.index()]
    }

    /// Faces with their images, in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Face, &FaceImage)> {
        Face::ALL.into_iter().zip(self.faces.iter())
    }

    /// The one size all six faces share.
    ///
    /// Faces are never resampled: differing sizes fail with [`CubemapError::SizeMismatch`],
    /// which lists every face with its size.
    pub fn common_size(&self) -> CubemapResult<FaceSize> {
        let first = self.faces[0].size();
        if self.faces.iter().all(|img| img.size() == first) {
            return Ok(first);
        }
        Err(CubemapError::SizeMismatch(
            self.iter().map(|(face, img)| (face, img.size())).collect(),
        ))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/faces/set.rs"]
mod tests;
