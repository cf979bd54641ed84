//! Container module — the on-disk format of an encrypted file.
//!
//! This module provides:
//! - Binary framing of salt, IV, AAD, ciphertext and tag (`format`)
//! - The metadata record carried as AAD (`metadata`)
//! - MIME type to coarse category mapping (`category`)

pub mod category;
pub mod format;
pub mod metadata;

// Re-export the most commonly used items.
pub use category::{classify, FileCategory};
pub use format::{parse, serialize, Container, MIN_CONTAINER_LEN};
pub use metadata::{AadPayload, FileMetadata, METADATA_VERSION};
