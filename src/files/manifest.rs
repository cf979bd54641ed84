//! The optional `metadata.json` manifest written next to encoded files.
//!
//! It lets a consumer list a folder of opaque `<id>.enc` files without
//! decrypting or parsing each one.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{PocketError, Result};

/// One encoded file in the manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestItem {
    /// Output name without the extension (original filename or UUID).
    pub id: String,
    /// Original filename.
    pub filename: String,
    /// Plaintext size in bytes.
    pub size: u64,
    pub mime: Option<String>,
    pub ext: Option<String>,
}

/// Write the manifest as a pretty-printed JSON array.
pub fn write_manifest(path: &Path, items: &[ManifestItem]) -> Result<()> {
    let json = serde_json::to_string_pretty(items)
        .map_err(|e| PocketError::SerializationError(format!("manifest: {e}")))?;
    fs::write(path, json)?;
    Ok(())
}
