//! Cryptographic primitives for Pocket.
//!
//! This module provides:
//! - PBKDF2-HMAC-SHA256 password-based key derivation (`kdf`)
//! - AES-256-GCM encryption and decryption with a detached tag (`encryption`)

pub mod encryption;
pub mod kdf;

// Re-export the most commonly used items so callers can write:
//   use crate::crypto::{encrypt, decrypt, derive_key, ...};
pub use encryption::{decrypt, encrypt, generate_iv, IV_LEN, TAG_LEN};
pub use kdf::{derive_key, derive_key_with_iterations, generate_salt, ITERATIONS, KEY_LEN, SALT_LEN};
