use std::path::PathBuf;

use crate::foundation::core::{Face, FaceSize};

/// Convenience result type used across the converter.
pub type CubemapResult<T> = Result<T, CubemapError>;

/// Every way a conversion run can fail. All of them are terminal.
#[derive(thiserror::Error, Debug)]
pub enum CubemapError {
    /// The input archive path does not exist.
    #[error("archive not found: {}", .path.display())]
    NotFound {
        /// Path that was requested.
        path: PathBuf,
    },

    /// The archive exists but cannot be read as a zip file.
    #[error("archive format error: {0}")]
    ArchiveFormat(String),

    /// One or more required face files are absent. Listed in canonical face order.
    #[error("missing required face file(s): {}", list_faces(.0))]
    MissingFace(Vec<Face>),

    /// A face file is present but does not hold a decodable image.
    #[error("decode error in {}: {reason}", .face.file_name())]
    Decode {
        /// Face whose file failed to decode.
        face: Face,
        /// Decoder message.
        reason: String,
    },

    /// Faces do not share one resolution. Carries every face with its size.
    #[error("face size mismatch: {}", list_sizes(.0))]
    SizeMismatch(Vec<(Face, FaceSize)>),

    /// The output image could not be encoded or written.
    #[error("write error for {}: {reason}", .path.display())]
    Write {
        /// Output path.
        path: PathBuf,
        /// Encoder or IO message.
        reason: String,
    },

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CubemapError {
    /// Build a [`CubemapError::NotFound`] value.
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        Self::NotFound { path: path.into() }
    }

    /// Build a [`CubemapError::ArchiveFormat`] value.
    pub fn archive_format(msg: impl Into<String>) -> Self {
        Self::ArchiveFormat(msg.into())
    }

    /// Build a [`CubemapError::Decode`] value.
    pub fn decode(face: Face, reason: impl Into<String>) -> Self {
        Self::Decode {
            face,
            reason: reason.into(),
        }
    }

    /// Build a [`CubemapError::Write`] value.
    pub fn write(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::Write {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

fn list_faces(faces: &[Face]) -> String {
    faces
        .iter()
        .map(|f| f.file_name())
        .collect::<Vec<_>>()
        .join(", ")
}

fn list_sizes(sizes: &[(Face, FaceSize)]) -> String {
    sizes
        .iter()
        .map(|(face, size)| format!("{} {size}", face.file_name()))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
