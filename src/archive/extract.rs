use std::collections::VecDeque;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::foundation::error::{CubemapError, CubemapResult};

const SCRATCH_PREFIX: &str = "zip2cubemap-";

/// Archive contents unpacked into an exclusively owned scratch directory.
///
/// The directory lives exactly as long as this value: dropping it removes the directory and
/// everything extracted into it, whether the run succeeded or failed.
#[derive(Debug)]
pub struct ExtractedArchive {
    dir: tempfile::TempDir,
    entries: usize,
}

impl ExtractedArchive {
    /// Scratch directory holding the extracted entries.
    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Number of entries (files and directories) the archive declared.
    pub fn entry_count(&self) -> usize {
        self.entries
    }

    /// Find a regular file named exactly `file_name` under the scratch directory.
    ///
    /// See [`locate_file`].
    pub fn locate(&self, file_name: &str) -> Option<PathBuf> {
        locate_file(self.root(), file_name)
    }
}

/// Find a regular file named exactly `file_name` below `root`.
///
/// `root` itself wins. Otherwise nested directories are searched breadth-first, visiting
/// siblings in name order, and the first hit is returned. Matching is case-sensitive and
/// symlinks are never followed.
pub fn locate_file(root: &Path, file_name: &str) -> Option<PathBuf> {
    let mut queue = VecDeque::from([root.to_path_buf()]);
    while let Some(dir) = queue.pop_front() {
        let Ok(read) = std::fs::read_dir(&dir) else {
            continue;
        };
        let mut entries: Vec<_> = read.filter_map(Result::ok).collect();
        entries.sort_by_key(|e| e.file_name());

        let mut subdirs = Vec::new();
        for entry in entries {
            let Ok(ft) = entry.file_type() else {
                continue;
            };
            if ft.is_dir() {
                subdirs.push(entry.path());
            } else if ft.is_file() && entry.file_name() == file_name {
                return Some(entry.path());
            }
        }
        queue.extend(subdirs);
    }
    None
}

/// Unpack the zip archive at `path` into a fresh scratch directory.
///
/// A missing `path` fails with [`CubemapError::NotFound`] before any scratch directory exists.
/// Unreadable or corrupt archives fail with [`CubemapError::ArchiveFormat`]; a partially
/// extracted scratch directory is discarded in full.
#[tracing::instrument]
pub fn extract_archive(path: &Path) -> CubemapResult<ExtractedArchive> {
    if !path.exists() {
        return Err(CubemapError::not_found(path));
    }

    let file = File::open(path).map_err(|e| {
        CubemapError::archive_format(format!("open '{}': {e}", path.display()))
    })?;
    let mut zip = zip::ZipArchive::new(BufReader::new(file)).map_err(|e| {
        CubemapError::archive_format(format!("read '{}': {e}", path.display()))
    })?;

    let dir = tempfile::Builder::new()
        .prefix(SCRATCH_PREFIX)
        .tempdir()
        .context("create scratch directory")?;

    zip.extract(dir.path()).map_err(|e| {
        CubemapError::archive_format(format!("extract '{}': {e}", path.display()))
    })?;

    let entries = zip.len();
    tracing::debug!(entries, scratch = %dir.path().display(), "archive extracted");

    Ok(ExtractedArchive { dir, entries })
}

#[cfg(test)]
#[path = "../../tests/unit/archive/extract.rs"]
mod tests;
