//! File metadata bound to the ciphertext as AAD.

use serde::{Deserialize, Serialize};

use crate::errors::{PocketError, Result};

/// Current AAD schema version, written as `v`.
pub const METADATA_VERSION: u32 = 1;

/// Descriptive metadata about the encrypted file.
///
/// Produced by the caller when encoding (usually by inspecting the
/// source file) and recovered verbatim when decoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileMetadata {
    /// Original file name, e.g. `photo.png`.
    pub name: String,
    /// Extension without the dot, e.g. `png`.
    pub ext: Option<String>,
    /// MIME type, e.g. `image/png`.
    pub mime: Option<String>,
}

impl FileMetadata {
    pub fn new(name: impl Into<String>, ext: Option<String>, mime: Option<String>) -> Self {
        Self {
            name: name.into(),
            ext,
            mime,
        }
    }
}

/// The JSON record stored in the AAD region: metadata plus version.
///
/// Serialized as `{"name":..,"ext":..,"mime":..,"v":1}`; absent `ext` or
/// `mime` become `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AadPayload {
    pub name: String,
    #[serde(default)]
    pub ext: Option<String>,
    #[serde(default)]
    pub mime: Option<String>,
    pub v: u32,
}

impl AadPayload {
    /// Wrap metadata with the current schema version.
    pub fn from_metadata(metadata: &FileMetadata) -> Self {
        Self {
            name: metadata.name.clone(),
            ext: metadata.ext.clone(),
            mime: metadata.mime.clone(),
            v: METADATA_VERSION,
        }
    }

    /// Serialize to the exact AAD bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        serde_json::to_vec(self)
            .map_err(|e| PocketError::SerializationError(format!("metadata: {e}")))
    }

    /// Parse AAD bytes, rejecting bad UTF-8, bad JSON, wrong shapes and
    /// unknown schema versions.
    pub fn from_bytes(aad: &[u8]) -> Result<Self> {
        let text = std::str::from_utf8(aad)
            .map_err(|e| PocketError::MetadataParse(format!("AAD is not UTF-8: {e}")))?;

        let payload: AadPayload = serde_json::from_str(text)
            .map_err(|e| PocketError::MetadataParse(format!("AAD JSON: {e}")))?;

        if payload.v != METADATA_VERSION {
            return Err(PocketError::MetadataParse(format!(
                "unsupported format version {}, expected {METADATA_VERSION}",
                payload.v
            )));
        }

        Ok(payload)
    }

    pub fn into_metadata(self) -> FileMetadata {
        FileMetadata {
            name: self.name,
            ext: self.ext,
            mime: self.mime,
        }
    }
}
