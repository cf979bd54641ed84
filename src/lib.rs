//! Pocket: password-based file encryption into a self-describing
//! AES-256-GCM container with authenticated metadata.

pub mod cli;
pub mod codec;
pub mod config;
pub mod container;
pub mod crypto;
pub mod errors;
pub mod files;

pub use codec::{decode_buffer, encode_buffer, validate_password, DecodedFile};
pub use container::{classify, FileCategory, FileMetadata};
pub use errors::{PocketError, Result};
