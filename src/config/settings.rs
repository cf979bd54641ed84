use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::codec::MIN_PASSWORD_LEN;
use crate::errors::{PocketError, Result};

/// Project-level configuration, loaded from `.pocket.toml`.
///
/// Every field has a sensible default so Pocket works out-of-the-box
/// without any config file at all. The KDF iteration count is part of
/// the container protocol and deliberately not configurable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Extension appended to encoded files (default: "enc").
    #[serde(default = "default_output_extension")]
    pub output_extension: String,

    /// File name of the manifest written by `encode --metadata`.
    #[serde(default = "default_manifest_name")]
    pub manifest_name: String,

    /// Use random UUIDs instead of original filenames for output files.
    #[serde(default)]
    pub unique_filenames: bool,

    /// Minimum password length accepted by `encode` (default: 6).
    #[serde(default = "default_min_password_len")]
    pub min_password_len: usize,
}

// ── Serde default helpers ────────────────────────────────────────────

fn default_output_extension() -> String {
    "enc".to_string()
}

fn default_manifest_name() -> String {
    "metadata.json".to_string()
}

fn default_min_password_len() -> usize {
    MIN_PASSWORD_LEN
}

// ── Implementation ───────────────────────────────────────────────────

impl Default for Settings {
    fn default() -> Self {
        Self {
            output_extension: default_output_extension(),
            manifest_name: default_manifest_name(),
            unique_filenames: false,
            min_password_len: default_min_password_len(),
        }
    }
}

impl Settings {
    /// Name of the config file we look for in the working directory.
    const FILE_NAME: &'static str = ".pocket.toml";

    /// Load settings from `<project_dir>/.pocket.toml`.
    ///
    /// If the file does not exist, sensible defaults are returned.
    /// If the file exists but cannot be parsed or is invalid, an error is
    /// returned.
    pub fn load(project_dir: &Path) -> Result<Self> {
        let config_path = project_dir.join(Self::FILE_NAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path)?;

        let settings: Settings = toml::from_str(&contents).map_err(|e| {
            PocketError::ConfigError(format!("Failed to parse {}: {e}", config_path.display()))
        })?;

        settings.validate()?;
        Ok(settings)
    }

    /// Reject settings that would weaken the password policy or produce
    /// unusable output names.
    pub fn validate(&self) -> Result<()> {
        if self.min_password_len < MIN_PASSWORD_LEN {
            return Err(PocketError::ConfigError(format!(
                "min_password_len must be at least {MIN_PASSWORD_LEN} (got {})",
                self.min_password_len
            )));
        }

        let ext = &self.output_extension;
        if ext.is_empty() || !ext.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(PocketError::ConfigError(format!(
                "output_extension '{ext}' must be non-empty ASCII letters or digits"
            )));
        }

        let file_name = Path::new(&self.manifest_name)
            .file_name()
            .and_then(|n| n.to_str());
        if file_name != Some(self.manifest_name.as_str()) {
            return Err(PocketError::ConfigError(format!(
                "manifest_name '{}' must be a plain file name",
                self.manifest_name
            )));
        }

        Ok(())
    }

    /// Output file name for an encoded file with the given id.
    ///
    /// Example: `photo.png` -> `photo.png.enc`
    pub fn output_file_name(&self, id: &str) -> String {
        format!("{id}.{}", self.output_extension)
    }
}

// ── Tests ────────────────────────────────────────────────────────────
