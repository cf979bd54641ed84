//! CLI module — Clap argument parser, output helpers, and command implementations.

pub mod commands;
pub mod output;

use clap::Parser;

use zeroize::Zeroizing;

use crate::codec::validate_password;
use crate::errors::{PocketError, Result};

/// Environment variable consulted when `--password` is not given.
pub const PASSWORD_ENV: &str = "POCKET_PASSWORD";

/// Pocket CLI: password-based file encryption.
#[derive(Parser)]
#[command(
    name = "pocket",
    about = "Encrypt files into password-protected containers",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// All available subcommands.
#[derive(clap::Subcommand)]
pub enum Commands {
    /// Encode a file, or every file in a folder
    Encode {
        /// Path to a file or folder
        path: String,

        /// Password to encrypt with (prompted if omitted)
        #[arg(short, long, env = PASSWORD_ENV, hide_env_values = true)]
        password: Option<String>,

        /// Write a metadata.json manifest into the folder
        #[arg(short, long)]
        metadata: bool,

        /// Use random unique ids instead of original filenames
        #[arg(short, long)]
        unique: bool,
    },

    /// Decode a container back into the original file
    Decode {
        /// Path to the encoded file
        input: String,

        /// Password to decrypt with (prompted if omitted)
        #[arg(short, long, env = PASSWORD_ENV, hide_env_values = true)]
        password: Option<String>,

        /// Directory to write the decoded file into (default: next to the input)
        #[arg(short, long)]
        output: Option<String>,

        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },

    /// Show the (unverified) metadata of a container without decrypting it
    Inspect {
        /// Path to the encoded file
        input: String,
    },

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for (bash, zsh, fish, powershell)
        shell: String,
    },
}

// ---------------------------------------------------------------------------
// Shared helpers used by multiple commands
// ---------------------------------------------------------------------------

/// Get the decryption password, trying in order:
/// 1. `--password` / `POCKET_PASSWORD`
/// 2. Interactive prompt
///
/// No strength check: a wrong password is rejected by authentication.
/// Returns `Zeroizing<String>` so the password is wiped from memory on drop.
pub fn resolve_password(given: Option<&str>) -> Result<Zeroizing<String>> {
    if let Some(pw) = given {
        if !pw.is_empty() {
            return Ok(Zeroizing::new(pw.to_string()));
        }
    }

    let pw = dialoguer::Password::new()
        .with_prompt("Enter password")
        .interact()
        .map_err(|e| PocketError::CommandFailed(format!("password prompt: {e}")))?;
    Ok(Zeroizing::new(pw))
}

/// Get an encryption password and enforce the minimum length.
///
/// A password passed on the command line or via the environment is
/// rejected outright when too short; an interactive prompt asks again.
/// Returns `Zeroizing<String>` so the password is wiped from memory on drop.
pub fn resolve_new_password(given: Option<&str>, min_len: usize) -> Result<Zeroizing<String>> {
    if let Some(pw) = given {
        let pw = Zeroizing::new(pw.to_string());
        validate_password(&pw, min_len)?;
        return Ok(pw);
    }

    loop {
        let password = Zeroizing::new(
            dialoguer::Password::new()
                .with_prompt("Choose password")
                .with_confirmation("Confirm password", "Passwords do not match, try again")
                .interact()
                .map_err(|e| PocketError::CommandFailed(format!("password prompt: {e}")))?,
        );

        if let Err(e) = validate_password(&password, min_len) {
            output::warning(&format!("{e}. Try again."));
            continue;
        }

        return Ok(password);
    }
}
