//! `pocket decode` — recover the original file from a container.

use std::fs;
use std::path::{Path, PathBuf};

use crate::cli::output;
use crate::cli::resolve_password;
use crate::codec::{decode_buffer, DecodedFile};
use crate::errors::{PocketError, Result};

/// Execute the `decode` command.
pub fn execute(input: &str, password: Option<&str>, output_dir: Option<&str>, force: bool) -> Result<()> {
    let input = Path::new(input);
    if !input.is_file() {
        return Err(PocketError::PathNotFound(input.to_path_buf()));
    }

    let password = resolve_password(password)?;
    let (decoded, dest) = decode_to_dir(input, &password, output_dir.map(Path::new), force)?;

    let mut rows = output::metadata_rows(&decoded.metadata, decoded.category);
    rows.push(("Size", format!("{} bytes", decoded.plaintext.len())));
    println!("{}", output::field_table(&rows));

    output::success(&format!("Decoded to {}", dest.display()));
    Ok(())
}

/// Decode `input` and write the plaintext into `output_dir` (default:
/// the directory holding `input`). Returns what was decoded and where
/// it was written.
pub fn decode_to_dir(
    input: &Path,
    password: &str,
    output_dir: Option<&Path>,
    force: bool,
) -> Result<(DecodedFile, PathBuf)> {
    let data = fs::read(input)?;
    let decoded = decode_buffer(&data, password)?;

    let dir = match output_dir {
        Some(dir) => dir.to_path_buf(),
        None => match input.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        },
    };
    let dest = dir.join(safe_file_name(&decoded.metadata.name, input));

    if dest.exists() && !force {
        return Err(PocketError::OutputExists(dest));
    }

    fs::create_dir_all(&dir)?;
    fs::write(&dest, &decoded.plaintext)?;

    Ok((decoded, dest))
}

/// Reduce a recovered name to a single path component so metadata can
/// never point a write outside the output directory.
///
/// Falls back to the container's stem (`a.txt.enc` -> `a.txt`).
fn safe_file_name(name: &str, container: &Path) -> String {
    let candidate = Path::new(name)
        .file_name()
        .and_then(|n| n.to_str())
        .filter(|n| !n.contains('\\'));
    if let Some(candidate) = candidate {
        return candidate.to_string();
    }

    container
        .file_stem()
        .and_then(|s| s.to_str())
        .filter(|s| !s.is_empty())
        .unwrap_or("decoded")
        .to_string()
}
