//! Finding the files an `encode` run should process.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use crate::errors::Result;

/// What a path on disk points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathKind {
    File,
    Folder,
    /// Missing, or neither a regular file nor a directory.
    None,
}

/// A regular file found under the input path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    pub path: PathBuf,
    /// Final path component, e.g. `photo.PNG`.
    pub filename: String,
    /// Lowercase extension without the dot; empty when there is none.
    pub extension: String,
    pub size: u64,
}

impl FileEntry {
    fn from_path(path: &Path, size: u64) -> Self {
        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let extension = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        Self {
            path: path.to_path_buf(),
            filename,
            extension,
            size,
        }
    }
}

/// Check whether a path is a file, a folder, or neither.
pub fn detect_path_type(path: &Path) -> PathKind {
    match fs::metadata(path) {
        Ok(meta) if meta.is_file() => PathKind::File,
        Ok(meta) if meta.is_dir() => PathKind::Folder,
        _ => PathKind::None,
    }
}

/// Collect every regular file at or below `path`, sorted by path.
///
/// A file path yields itself. Entries that cannot be read are skipped,
/// as are files whose extension equals `skip_extension` (already
/// encoded output from an earlier run).
pub fn analyze_path(path: &Path, skip_extension: Option<&str>) -> Result<Vec<FileEntry>> {
    let mut entries = Vec::new();

    match detect_path_type(path) {
        PathKind::None => {}
        PathKind::File => {
            let size = fs::metadata(path)?.len();
            entries.push(FileEntry::from_path(path, size));
        }
        PathKind::Folder => {
            for entry in WalkDir::new(path).follow_links(true).into_iter().flatten() {
                if !entry.file_type().is_file() {
                    continue;
                }
                let Ok(meta) = entry.metadata() else {
                    continue;
                };
                entries.push(FileEntry::from_path(entry.path(), meta.len()));
            }
        }
    }

    if let Some(skip) = skip_extension {
        let skip = skip.to_lowercase();
        entries.retain(|e| e.extension != skip);
    }

    entries.sort_by(|a, b| a.path.cmp(&b.path));
    debug!(root = %path.display(), files = entries.len(), "analyzed input path");
    Ok(entries)
}
