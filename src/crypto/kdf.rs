//! Password-based key derivation using PBKDF2-HMAC-SHA256.
//!
//! The iteration count is part of the container protocol: encoder and
//! decoder must agree on it, so it is a constant rather than a setting.

use pbkdf2::pbkdf2_hmac;
use rand::RngCore;
use sha2::Sha256;
use zeroize::Zeroizing;

use crate::errors::{PocketError, Result};

/// PBKDF2 iteration count shared by encoder and decoder.
pub const ITERATIONS: u32 = 200_000;

/// Length of the salt in bytes (128 bits).
pub const SALT_LEN: usize = 16;

/// Length of the derived key in bytes (256 bits, for AES-256).
pub const KEY_LEN: usize = 32;

/// Derive a 32-byte key from a password and salt with the protocol
/// iteration count.
///
/// The key is returned in a `Zeroizing` wrapper so it is wiped when the
/// caller drops it, on every exit path.
pub fn derive_key(password: &[u8], salt: &[u8]) -> Result<Zeroizing<[u8; KEY_LEN]>> {
    derive_key_with_iterations(password, salt, ITERATIONS)
}

/// Derive a 32-byte key with an explicit iteration count.
///
/// The same password + salt + iterations always produce the same key.
pub fn derive_key_with_iterations(
    password: &[u8],
    salt: &[u8],
    iterations: u32,
) -> Result<Zeroizing<[u8; KEY_LEN]>> {
    if salt.len() != SALT_LEN {
        return Err(PocketError::KeyDerivationFailed(format!(
            "salt must be {SALT_LEN} bytes (got {})",
            salt.len()
        )));
    }
    if iterations < 1 {
        return Err(PocketError::KeyDerivationFailed(
            "iterations must be at least 1".into(),
        ));
    }

    let mut key = Zeroizing::new([0u8; KEY_LEN]);
    pbkdf2_hmac::<Sha256>(password, salt, iterations, &mut key[..]);
    Ok(key)
}

/// Generate a cryptographically random 16-byte salt.
pub fn generate_salt() -> [u8; SALT_LEN] {
    let mut salt = [0u8; SALT_LEN];
    rand::rng().fill_bytes(&mut salt);
    salt
}
