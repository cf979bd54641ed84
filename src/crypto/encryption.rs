//! AES-256-GCM authenticated encryption with a detached tag.
//!
//! The container stores the IV, ciphertext and tag in separate places,
//! so unlike a nonce-prefixed blob these helpers take the IV from the
//! caller and hand the 16-byte tag back on its own.
//!
//! The AAD is authenticated but not encrypted.

use aes_gcm::aead::{AeadInPlace, KeyInit};
use aes_gcm::{Aes256Gcm, Nonce, Tag};
use rand::RngCore;
use zeroize::Zeroize;

use crate::errors::{PocketError, Result};

/// Size of the AES-256-GCM nonce in bytes.
pub const IV_LEN: usize = 12;

/// Size of the GCM authentication tag in bytes.
pub const TAG_LEN: usize = 16;

/// Encrypt `plaintext` with a 32-byte `key` and a caller-supplied `iv`.
///
/// Returns the ciphertext (same length as the plaintext) and the tag.
/// The caller must never reuse an `(key, iv)` pair.
pub fn encrypt(
    key: &[u8],
    iv: &[u8; IV_LEN],
    plaintext: &[u8],
    aad: &[u8],
) -> Result<(Vec<u8>, [u8; TAG_LEN])> {
    let cipher = Aes256Gcm::new_from_slice(key)
        .map_err(|e| PocketError::EncryptionFailed(format!("invalid key length: {e}")))?;

    let mut buffer = plaintext.to_vec();
    let tag = cipher
        .encrypt_in_place_detached(Nonce::from_slice(iv), aad, &mut buffer)
        .map_err(|e| PocketError::EncryptionFailed(format!("encryption error: {e}")))?;

    let mut tag_bytes = [0u8; TAG_LEN];
    tag_bytes.copy_from_slice(&tag);
    Ok((buffer, tag_bytes))
}

/// Decrypt `ciphertext` and verify its `tag` over ciphertext + `aad`.
///
/// Any mismatch yields `AuthenticationFailed` and no plaintext bytes.
/// A key of the wrong length is a caller bug (`EncryptionFailed`).
pub fn decrypt(
    key: &[u8],
    iv: &[u8; IV_LEN],
    ciphertext: &[u8],
    tag: &[u8; TAG_LEN],
    aad: &[u8],
) -> Result<Vec<u8>> {
    let cipher = Aes256Gcm::new_from_slice(key)
        .map_err(|e| PocketError::EncryptionFailed(format!("invalid key length: {e}")))?;

    let mut buffer = ciphertext.to_vec();
    if cipher
        .decrypt_in_place_detached(Nonce::from_slice(iv), aad, &mut buffer, Tag::from_slice(tag))
        .is_err()
    {
        buffer.zeroize();
        return Err(PocketError::AuthenticationFailed);
    }

    Ok(buffer)
}

/// Generate a random 12-byte IV.
pub fn generate_iv() -> [u8; IV_LEN] {
    let mut iv = [0u8; IV_LEN];
    rand::rng().fill_bytes(&mut iv);
    iv
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: [u8; 32] = [0x42; 32];
    const IV: [u8; IV_LEN] = [0x24; IV_LEN];

    #[test]
    fn ciphertext_has_plaintext_length() {
        let (ct, tag) = encrypt(&KEY, &IV, b"hello", b"aad").unwrap();
        assert_eq!(ct.len(), 5);
        assert_eq!(tag.len(), TAG_LEN);
        assert_ne!(ct, b"hello");
    }

    #[test]
    fn empty_plaintext_still_produces_tag() {
        let (ct, tag) = encrypt(&KEY, &IV, b"", b"meta").unwrap();
        assert!(ct.is_empty());
        assert_eq!(decrypt(&KEY, &IV, &ct, &tag, b"meta").unwrap(), b"");
    }

    #[test]
    fn wrong_aad_fails_authentication() {
        let (ct, tag) = encrypt(&KEY, &IV, b"payload", b"name=a.txt").unwrap();
        let result = decrypt(&KEY, &IV, &ct, &tag, b"name=b.txt");
        assert!(matches!(result, Err(PocketError::AuthenticationFailed)));
    }

    #[test]
    fn flipped_tag_fails_authentication() {
        let (ct, mut tag) = encrypt(&KEY, &IV, b"payload", b"").unwrap();
        tag[0] ^= 0x01;
        let result = decrypt(&KEY, &IV, &ct, &tag, b"");
        assert!(matches!(result, Err(PocketError::AuthenticationFailed)));
    }

    #[test]
    fn rejects_short_key() {
        assert!(matches!(
            encrypt(&[0u8; 16], &IV, b"x", b""),
            Err(PocketError::EncryptionFailed(_))
        ));
    }

    #[test]
    fn short_key_on_decrypt_is_not_an_authentication_failure() {
        let (ct, tag) = encrypt(&KEY, &IV, b"x", b"").unwrap();
        assert!(matches!(
            decrypt(&KEY[..16], &IV, &ct, &tag, b""),
            Err(PocketError::EncryptionFailed(_))
        ));
    }

    #[test]
    fn ivs_are_random() {
        assert_ne!(generate_iv(), generate_iv());
    }
}
