//! `pocket inspect` — show a container's metadata without the password.

use std::fs;
use std::path::Path;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

use crate::cli::output;
use crate::codec::peek_metadata;
use crate::container::{self, METADATA_VERSION};
use crate::errors::{PocketError, Result};

/// Execute the `inspect` command.
pub fn execute(input: &str) -> Result<()> {
    let input = Path::new(input);
    if !input.is_file() {
        return Err(PocketError::PathNotFound(input.to_path_buf()));
    }

    let data = fs::read(input)?;
    let rows = inspect_rows(&data)?;
    println!("{}", output::field_table(&rows));

    output::warning("Metadata is unverified until the file is decoded with its password.");
    output::tip(&format!("Run `pocket decode {}` to verify and recover it.", input.display()));
    Ok(())
}

/// Describe a container's framing and AAD as table rows.
fn inspect_rows(data: &[u8]) -> Result<Vec<(&'static str, String)>> {
    let parsed = container::parse(data)?;
    // Only version 1 metadata gets past `peek_metadata`.
    let (metadata, category) = peek_metadata(data)?;

    let mut rows = output::metadata_rows(&metadata, category);
    rows.push(("Format version", METADATA_VERSION.to_string()));
    rows.push(("AAD length", format!("{} bytes", parsed.aad.len())));
    rows.push(("Ciphertext length", format!("{} bytes", parsed.ciphertext.len())));
    rows.push(("Salt", BASE64.encode(parsed.salt)));
    rows.push(("IV", BASE64.encode(parsed.iv)));
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::encode_buffer;
    use crate::container::FileMetadata;

    #[test]
    fn rows_describe_container() {
        let meta = FileMetadata::new("song.mp3", Some("mp3".into()), Some("audio/mpeg".into()));
        let blob = encode_buffer(b"12345678", "password", &meta).unwrap();

        let rows = inspect_rows(&blob).unwrap();
        let get = |field: &str| rows.iter().find(|(f, _)| *f == field).unwrap().1.clone();

        assert_eq!(get("Name"), "song.mp3");
        assert_eq!(get("Category"), "audio");
        assert_eq!(get("Format version"), "1");
        assert_eq!(get("Ciphertext length"), "8 bytes");
        assert_eq!(BASE64.decode(get("Salt")).unwrap(), blob[..16].to_vec());
        assert_eq!(BASE64.decode(get("IV")).unwrap(), blob[16..28].to_vec());
    }

    #[test]
    fn truncated_container_is_a_format_error() {
        let result = inspect_rows(&[0u8; 10]);
        assert!(matches!(result, Err(PocketError::InvalidContainer(_))));
    }
}
