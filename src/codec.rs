//! Encode and decode pipelines.
//!
//! `encode_buffer` turns plaintext + password + metadata into a container
//! blob; `decode_buffer` reverses it. Each call generates or reads its
//! own salt and IV and holds the derived key only for its own duration,
//! so calls can run concurrently without coordination.
//!
//! Password strength is a caller-side policy (`validate_password`):
//! neither pipeline enforces it. Decoding must accept any password and
//! let authentication reject wrong ones.

use tracing::debug;

use crate::container::{self, classify, AadPayload, FileCategory, FileMetadata};
use crate::crypto;
use crate::errors::{PocketError, Result};

/// Default minimum password length, in characters.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Plaintext and metadata recovered from a container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedFile {
    pub plaintext: Vec<u8>,
    pub metadata: FileMetadata,
    pub category: FileCategory,
}

/// Reject passwords shorter than `min_len` characters.
pub fn validate_password(password: &str, min_len: usize) -> Result<()> {
    if password.chars().count() < min_len {
        return Err(PocketError::WeakPassword(min_len));
    }
    Ok(())
}

/// Encrypt `plaintext` under `password` and bind `metadata` as AAD.
pub fn encode_buffer(plaintext: &[u8], password: &str, metadata: &FileMetadata) -> Result<Vec<u8>> {
    let salt = crypto::generate_salt();
    let iv = crypto::generate_iv();

    let aad = AadPayload::from_metadata(metadata).to_bytes()?;
    if aad.len() > container::format::MAX_AAD_LEN {
        return Err(PocketError::OversizeMetadata(aad.len()));
    }

    // The key is zeroized when `key` drops, including on the error paths below.
    let key = crypto::derive_key(password.as_bytes(), &salt)?;
    let (ciphertext, tag) = crypto::encrypt(&key[..], &iv, plaintext, &aad)?;
    drop(key);

    let blob = container::serialize(&salt, &iv, &aad, &ciphertext, &tag)?;
    debug!(
        name = %metadata.name,
        plaintext_len = plaintext.len(),
        aad_len = aad.len(),
        container_len = blob.len(),
        "encoded container"
    );
    Ok(blob)
}

/// Parse, authenticate and decrypt a container.
///
/// Framing errors surface before any key derivation. A wrong password
/// and tampered data (ciphertext or AAD) both yield
/// `AuthenticationFailed`. The AAD JSON is only parsed once the tag has
/// verified it, so `MetadataParse` means authentic but malformed
/// metadata.
pub fn decode_buffer(data: &[u8], password: &str) -> Result<DecodedFile> {
    let parsed = container::parse(data)?;

    let key = crypto::derive_key(password.as_bytes(), &parsed.salt)?;
    let plaintext = crypto::decrypt(
        &key[..],
        &parsed.iv,
        parsed.ciphertext,
        &parsed.tag,
        parsed.aad,
    )?;
    drop(key);

    let metadata = AadPayload::from_bytes(parsed.aad)?.into_metadata();
    let category = classify(metadata.mime.as_deref());
    debug!(
        name = %metadata.name,
        plaintext_len = plaintext.len(),
        category = %category,
        "decoded container"
    );

    Ok(DecodedFile {
        plaintext,
        metadata,
        category,
    })
}

/// Read the metadata of a container without a password.
///
/// The result is *unverified*: only `decode_buffer` proves the AAD was
/// not tampered with.
pub fn peek_metadata(data: &[u8]) -> Result<(FileMetadata, FileCategory)> {
    let parsed = container::parse(data)?;
    let metadata = AadPayload::from_bytes(parsed.aad)?.into_metadata();
    let category = classify(metadata.mime.as_deref());
    Ok((metadata, category))
}
