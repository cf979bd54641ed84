//! Filesystem collaborators of the `encode` command.
//!
//! This module provides:
//! - Recursive discovery of input files (`discovery`)
//! - MIME type and extension guessing (`sniff`)
//! - The `metadata.json` manifest (`manifest`)

pub mod discovery;
pub mod manifest;
pub mod sniff;

pub use discovery::{analyze_path, detect_path_type, FileEntry, PathKind};
pub use manifest::{write_manifest, ManifestItem};
pub use sniff::{guess, sniff, Sniffed};
