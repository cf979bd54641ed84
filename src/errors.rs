use std::path::PathBuf;
use thiserror::Error;

/// All errors that can occur while encoding or decoding Pocket containers.
///
/// None of the variants carry password or key material.
#[derive(Debug, Error)]
pub enum PocketError {
    // --- Container errors ---
    #[error("Invalid container: {0}")]
    InvalidContainer(String),

    #[error("Authentication failed — wrong password or corrupted data")]
    AuthenticationFailed,

    #[error("Invalid metadata: {0}")]
    MetadataParse(String),

    #[error("Metadata too large: {0} bytes (limit is 65535)")]
    OversizeMetadata(usize),

    // --- Crypto errors ---
    #[error("Key derivation failed: {0}")]
    KeyDerivationFailed(String),

    #[error("Encryption failed: {0}")]
    EncryptionFailed(String),

    #[error("Password too short — must be at least {0} characters")]
    WeakPassword(usize),

    // --- File errors ---
    #[error("Folder or file doesn't exist: {0}")]
    PathNotFound(PathBuf),

    #[error("No files found at {0}")]
    NoFilesFound(PathBuf),

    #[error("Metadata can only be generated when the input path is a folder")]
    MetadataRequiresFolder,

    #[error("Output file already exists at {0} (use --force to overwrite)")]
    OutputExists(PathBuf),

    #[error("Another file in this run already encodes to {0} (use --unique)")]
    DuplicateOutputName(String),

    // --- Config errors ---
    #[error("Config file error: {0}")]
    ConfigError(String),

    // --- IO errors ---
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // --- Serialization errors ---
    #[error("Serialization error: {0}")]
    SerializationError(String),

    // --- CLI errors ---
    #[error("Command failed: {0}")]
    CommandFailed(String),
}

impl PocketError {
    /// Stable short name of the error kind, used in per-file reports.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidContainer(_) => "format_error",
            Self::AuthenticationFailed => "authentication_failure",
            Self::MetadataParse(_) => "parse_error",
            Self::OversizeMetadata(_) => "oversize_metadata",
            Self::KeyDerivationFailed(_) => "key_derivation",
            Self::EncryptionFailed(_) => "encryption",
            Self::WeakPassword(_) => "weak_password",
            Self::PathNotFound(_) => "path_not_found",
            Self::NoFilesFound(_) => "no_files",
            Self::MetadataRequiresFolder => "usage",
            Self::OutputExists(_) => "output_exists",
            Self::DuplicateOutputName(_) => "duplicate_name",
            Self::ConfigError(_) => "config",
            Self::Io(_) => "io",
            Self::SerializationError(_) => "serialization",
            Self::CommandFailed(_) => "command",
        }
    }
}

/// Convenience type alias for Pocket results.
pub type Result<T> = std::result::Result<T, PocketError>;
