//! Binary container format.
//!
//! A `.enc` file has this layout:
//!
//! ```text
//! [salt: 16 bytes][iv: 12 bytes][aad_len: 2 bytes BE][aad JSON][ciphertext][tag: 16 bytes]
//! ```
//!
//! - **Salt**: PBKDF2 salt, fresh per container.
//! - **IV**: AES-GCM nonce, fresh per container.
//! - **AAD length**: big-endian u16 telling us where the AAD ends and
//!   the ciphertext begins.
//! - **AAD**: UTF-8 JSON metadata, authenticated but readable without
//!   the password.
//! - **Ciphertext**: same length as the original plaintext.
//! - **Tag**: 16-byte GCM authentication tag over ciphertext + AAD.

use crate::crypto::{IV_LEN, SALT_LEN, TAG_LEN};
use crate::errors::{PocketError, Result};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Size of the big-endian AAD length field.
const AAD_LEN_FIELD: usize = 2;

/// Fixed-size prefix: 16 (salt) + 12 (iv) + 2 (aad_len).
pub const PREFIX_LEN: usize = SALT_LEN + IV_LEN + AAD_LEN_FIELD;

/// Smallest possible container: prefix + tag, with empty AAD and ciphertext.
pub const MIN_CONTAINER_LEN: usize = PREFIX_LEN + TAG_LEN;

/// Largest AAD the length field can describe.
pub const MAX_AAD_LEN: usize = u16::MAX as usize;

// ---------------------------------------------------------------------------
// Container
// ---------------------------------------------------------------------------

/// A parsed container, borrowing its variable-length parts from the
/// input buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Container<'a> {
    pub salt: [u8; SALT_LEN],
    pub iv: [u8; IV_LEN],
    /// The raw AAD bytes exactly as stored; these are what the tag covers.
    pub aad: &'a [u8],
    pub ciphertext: &'a [u8],
    pub tag: [u8; TAG_LEN],
}

impl Container<'_> {
    /// Total serialized size of this container.
    pub fn encoded_len(&self) -> usize {
        MIN_CONTAINER_LEN + self.aad.len() + self.ciphertext.len()
    }

    /// Serialize into the on-disk layout.
    ///
    /// Fails with `OversizeMetadata` if the AAD does not fit the u16
    /// length field; nothing is truncated.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let aad_len =
            u16::try_from(self.aad.len()).map_err(|_| PocketError::OversizeMetadata(self.aad.len()))?;

        let mut buf = Vec::with_capacity(self.encoded_len());
        buf.extend_from_slice(&self.salt); // 16 bytes
        buf.extend_from_slice(&self.iv); // 12 bytes
        buf.extend_from_slice(&aad_len.to_be_bytes()); // 2 bytes BE
        buf.extend_from_slice(self.aad); // AAD JSON
        buf.extend_from_slice(self.ciphertext); // ciphertext
        buf.extend_from_slice(&self.tag); // 16 bytes

        Ok(buf)
    }
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Concatenate the container fields into one blob.
pub fn serialize(
    salt: &[u8; SALT_LEN],
    iv: &[u8; IV_LEN],
    aad: &[u8],
    ciphertext: &[u8],
    tag: &[u8; TAG_LEN],
) -> Result<Vec<u8>> {
    Container {
        salt: *salt,
        iv: *iv,
        aad,
        ciphertext,
        tag: *tag,
    }
    .to_bytes()
}

/// Split a container blob into its fields.
///
/// Only the framing is checked here; nothing cryptographic happens, so
/// a `InvalidContainer` error is always reported before any key
/// derivation is attempted.
pub fn parse(data: &[u8]) -> Result<Container<'_>> {
    if data.len() < MIN_CONTAINER_LEN {
        return Err(PocketError::InvalidContainer(format!(
            "{} bytes is too small, need at least {MIN_CONTAINER_LEN}",
            data.len()
        )));
    }

    // --- Parse the fixed-size prefix ---

    let (salt_bytes, rest) = data.split_at(SALT_LEN);
    let (iv_bytes, rest) = rest.split_at(IV_LEN);
    let (len_bytes, rest) = rest.split_at(AAD_LEN_FIELD);

    let aad_len = usize::from(u16::from_be_bytes([len_bytes[0], len_bytes[1]]));

    // `rest` now holds aad + ciphertext + tag.
    if aad_len + TAG_LEN > rest.len() {
        return Err(PocketError::InvalidContainer(format!(
            "AAD length {aad_len} exceeds container size"
        )));
    }

    // --- Extract the variable-length sections ---

    let (aad, rest) = rest.split_at(aad_len);
    let (ciphertext, tag_bytes) = rest.split_at(rest.len() - TAG_LEN);

    let mut salt = [0u8; SALT_LEN];
    salt.copy_from_slice(salt_bytes);
    let mut iv = [0u8; IV_LEN];
    iv.copy_from_slice(iv_bytes);
    let mut tag = [0u8; TAG_LEN];
    tag.copy_from_slice(tag_bytes);

    Ok(Container {
        salt,
        iv,
        aad,
        ciphertext,
        tag,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::collection::vec;
    use proptest::prelude::*;

    fn sample() -> Vec<u8> {
        serialize(&[1u8; 16], &[2u8; 12], b"{\"a\":1}", b"cipher", &[3u8; 16]).unwrap()
    }

    #[test]
    fn layout_is_bit_exact() {
        let blob = sample();
        assert_eq!(blob.len(), 16 + 12 + 2 + 7 + 6 + 16);
        assert_eq!(&blob[..16], &[1u8; 16]);
        assert_eq!(&blob[16..28], &[2u8; 12]);
        assert_eq!(&blob[28..30], &[0x00, 0x07]);
        assert_eq!(&blob[30..37], b"{\"a\":1}");
        assert_eq!(&blob[37..43], b"cipher");
        assert_eq!(&blob[43..], &[3u8; 16]);
    }

    #[test]
    fn parse_recovers_fields() {
        let blob = sample();
        let c = parse(&blob).unwrap();
        assert_eq!(c.salt, [1u8; 16]);
        assert_eq!(c.iv, [2u8; 12]);
        assert_eq!(c.aad, b"{\"a\":1}");
        assert_eq!(c.ciphertext, b"cipher");
        assert_eq!(c.tag, [3u8; 16]);
        assert_eq!(c.encoded_len(), blob.len());
        assert_eq!(c.to_bytes().unwrap(), blob);
    }

    #[test]
    fn aad_length_is_big_endian() {
        let aad = vec![b'x'; 0x0102];
        let blob = serialize(&[0u8; 16], &[0u8; 12], &aad, b"", &[0u8; 16]).unwrap();
        assert_eq!(&blob[28..30], &[0x01, 0x02]);
    }

    #[test]
    fn minimum_container_parses_with_empty_parts() {
        let blob = vec![0u8; MIN_CONTAINER_LEN];
        let c = parse(&blob).unwrap();
        assert!(c.aad.is_empty());
        assert!(c.ciphertext.is_empty());
    }

    #[test]
    fn rejects_input_below_minimum() {
        let blob = vec![0u8; MIN_CONTAINER_LEN - 1];
        assert!(matches!(parse(&blob), Err(PocketError::InvalidContainer(_))));
        assert!(matches!(parse(&[]), Err(PocketError::InvalidContainer(_))));
    }

    #[test]
    fn rejects_aad_length_past_end() {
        let mut blob = sample();
        // All 13 non-tag bytes as AAD leaves an empty ciphertext.
        blob[28..30].copy_from_slice(&13u16.to_be_bytes());
        assert!(parse(&blob).is_ok());
        // One more byte would eat into the tag.
        blob[28..30].copy_from_slice(&14u16.to_be_bytes());
        assert!(matches!(parse(&blob), Err(PocketError::InvalidContainer(_))));
    }

    #[test]
    fn serialize_rejects_oversize_aad() {
        let aad = vec![b'x'; MAX_AAD_LEN + 1];
        let result = serialize(&[0u8; 16], &[0u8; 12], &aad, b"", &[0u8; 16]);
        assert!(matches!(result, Err(PocketError::OversizeMetadata(65_536))));
    }

    #[test]
    fn serialize_accepts_max_aad() {
        let aad = vec![b'x'; MAX_AAD_LEN];
        let blob = serialize(&[0u8; 16], &[0u8; 12], &aad, b"", &[0u8; 16]).unwrap();
        assert_eq!(&blob[28..30], &[0xFF, 0xFF]);
        assert_eq!(parse(&blob).unwrap().aad.len(), MAX_AAD_LEN);
    }

    proptest! {
        #[test]
        fn parse_accepts_or_rejects_any_bytes(data in vec(any::<u8>(), 0..512)) {
            match parse(&data) {
                Ok(c) => {
                    let bytes = c.to_bytes().unwrap();
                    prop_assert_eq!(&bytes, &data);
                }
                Err(e) => prop_assert!(matches!(e, PocketError::InvalidContainer(_))),
            }
        }

        #[test]
        fn serialize_then_parse_roundtrips(
            salt in any::<[u8; 16]>(),
            iv in any::<[u8; 12]>(),
            aad in vec(any::<u8>(), 0..4096),
            ciphertext in vec(any::<u8>(), 0..4096),
            tag in any::<[u8; 16]>(),
        ) {
            let blob = serialize(&salt, &iv, &aad, &ciphertext, &tag).unwrap();
            prop_assert_eq!(blob.len(), MIN_CONTAINER_LEN + aad.len() + ciphertext.len());

            let c = parse(&blob).unwrap();
            prop_assert_eq!(c.salt, salt);
            prop_assert_eq!(c.iv, iv);
            prop_assert_eq!(c.aad, &aad[..]);
            prop_assert_eq!(c.ciphertext, &ciphertext[..]);
            prop_assert_eq!(c.tag, tag);
        }
    }
}
