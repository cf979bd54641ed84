//! Integration tests for the Pocket crypto module.

use pocket::crypto::{decrypt, derive_key, encrypt, generate_iv, generate_salt, KEY_LEN};
use pocket::PocketError;

// ---------------------------------------------------------------------------
// Key derivation (PBKDF2-HMAC-SHA256)
// ---------------------------------------------------------------------------

#[test]
fn derive_key_same_inputs_same_output() {
    let salt = generate_salt();

    let key1 = derive_key(b"my-secure-passphrase", &salt).expect("derive 1");
    let key2 = derive_key(b"my-secure-passphrase", &salt).expect("derive 2");

    assert_eq!(*key1, *key2, "same password + salt must produce the same key");
    assert_eq!(key1.len(), KEY_LEN);
}

#[test]
fn derive_key_different_salts_different_keys() {
    let key1 = derive_key(b"same-password", &generate_salt()).expect("derive 1");
    let key2 = derive_key(b"same-password", &generate_salt()).expect("derive 2");

    assert_ne!(*key1, *key2, "different salts must produce different keys");
}

#[test]
fn derive_key_different_passwords_different_keys() {
    let salt = generate_salt();

    let key1 = derive_key(b"password-one", &salt).expect("derive 1");
    let key2 = derive_key(b"password-two", &salt).expect("derive 2");

    assert_ne!(*key1, *key2, "different passwords must produce different keys");
}

#[test]
fn derive_key_matches_reference_pbkdf2_sha256() {
    // PBKDF2-HMAC-SHA256, 200,000 iterations, 32 bytes.
    let key = derive_key(b"correct-horse", &[0u8; 16]).expect("derive");
    let expected: [u8; 32] = [
        0x64, 0x72, 0xc5, 0x14, 0x25, 0x24, 0xcf, 0x30, 0xbc, 0x3a, 0x53, 0x6c, 0x5b, 0xd8, 0x38,
        0x77, 0x4a, 0xa6, 0x03, 0x05, 0x0d, 0xb9, 0x1c, 0x8f, 0xec, 0xf7, 0xb8, 0xea, 0x26, 0x16,
        0x44, 0xa7,
    ];
    assert_eq!(*key, expected);
}

// ---------------------------------------------------------------------------
// AES-256-GCM
// ---------------------------------------------------------------------------

#[test]
fn encrypt_decrypt_roundtrip() {
    let key = [0xABu8; 32];
    let iv = generate_iv();
    let plaintext = b"the quick brown fox";

    let (ciphertext, tag) = encrypt(&key, &iv, plaintext, b"aad").expect("encrypt");
    assert_eq!(ciphertext.len(), plaintext.len());

    let recovered = decrypt(&key, &iv, &ciphertext, &tag, b"aad").expect("decrypt");
    assert_eq!(recovered, plaintext);
}

#[test]
fn decrypt_with_wrong_key_fails() {
    let iv = generate_iv();
    let (ciphertext, tag) = encrypt(&[0x11u8; 32], &iv, b"TOP_SECRET=42", b"").expect("encrypt");

    let result = decrypt(&[0x22u8; 32], &iv, &ciphertext, &tag, b"");
    assert!(matches!(result, Err(PocketError::AuthenticationFailed)));
}

#[test]
fn decrypt_with_wrong_iv_fails() {
    let key = [0x33u8; 32];
    let (ciphertext, tag) = encrypt(&key, &[1u8; 12], b"value", b"").expect("encrypt");

    let result = decrypt(&key, &[2u8; 12], &ciphertext, &tag, b"");
    assert!(matches!(result, Err(PocketError::AuthenticationFailed)));
}

#[test]
fn decrypt_with_corrupted_ciphertext_fails() {
    let key = [0xBBu8; 32];
    let iv = generate_iv();
    let (mut ciphertext, tag) = encrypt(&key, &iv, b"VALUE=abc", b"").expect("encrypt");
    ciphertext[3] ^= 0x80;

    let result = decrypt(&key, &iv, &ciphertext, &tag, b"");
    assert!(matches!(result, Err(PocketError::AuthenticationFailed)));
}

#[test]
fn matches_nist_gcm_test_case_14() {
    // AES-256 key of zeros, 96-bit zero IV, one zero block, no AAD.
    let (ciphertext, tag) = encrypt(&[0u8; 32], &[0u8; 12], &[0u8; 16], b"").expect("encrypt");
    assert_eq!(
        ciphertext,
        [
            0xce, 0xa7, 0x40, 0x3d, 0x4d, 0x60, 0x6b, 0x6e, 0x07, 0x4e, 0xc5, 0xd3, 0xba, 0xf3,
            0x9d, 0x18
        ]
    );
    assert_eq!(
        tag,
        [
            0xd0, 0xd1, 0xc8, 0xa7, 0x99, 0x99, 0x6b, 0xf0, 0x26, 0x5b, 0x98, 0xb5, 0xd4, 0x8a,
            0xb9, 0x19
        ]
    );
}
