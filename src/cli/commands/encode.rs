//! `pocket encode` — encrypt a file, or every file under a folder.
//!
//! Each file is handled on its own: a failure is reported with the file
//! path and error kind, and the remaining files are still processed.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use tracing::{debug, warn};
use uuid::Uuid;

use crate::cli::output;
use crate::cli::resolve_new_password;
use crate::codec::encode_buffer;
use crate::config::Settings;
use crate::container::FileMetadata;
use crate::errors::{PocketError, Result};
use crate::files::{analyze_path, detect_path_type, guess, write_manifest, FileEntry, ManifestItem, PathKind};

/// Options for one `encode` run.
pub struct EncodeOptions<'a> {
    pub path: &'a Path,
    pub password: &'a str,
    pub generate_metadata: bool,
    pub unique: bool,
}

/// Outcome of an `encode` run.
#[derive(Debug, Default)]
pub struct EncodeReport {
    pub encoded: Vec<ManifestItem>,
    pub failed: Vec<(PathBuf, PocketError)>,
    pub output_dir: PathBuf,
}

/// Execute the `encode` command.
pub fn execute(path: &str, password: Option<&str>, generate_metadata: bool, unique: bool) -> Result<()> {
    let started = Instant::now();
    let cwd = std::env::current_dir()?;
    let settings = Settings::load(&cwd)?;

    let password = resolve_new_password(password, settings.min_password_len)?;
    let options = EncodeOptions {
        path: Path::new(path),
        password: password.as_str(),
        generate_metadata,
        unique: unique || settings.unique_filenames,
    };

    let report = run(&options, &settings)?;

    for (file, err) in &report.failed {
        output::error(&output::file_failure(file, err));
    }

    let summary = format!(
        "Encoded {} file(s) into {}",
        report.encoded.len(),
        report.output_dir.display()
    );
    if report.failed.is_empty() {
        output::success(&summary);
    } else {
        output::warning(&summary);
    }
    if generate_metadata {
        output::info(&format!("Wrote {}", settings.manifest_name));
    }
    output::info(&format!("Execution time: {:.2?}", started.elapsed()));

    if !report.failed.is_empty() {
        return Err(PocketError::CommandFailed(format!(
            "{} of {} files failed to encode",
            report.failed.len(),
            report.failed.len() + report.encoded.len()
        )));
    }

    Ok(())
}

/// Encode every file under `options.path`, isolating per-file failures.
///
/// Errors returned here are about the run as a whole (missing input,
/// bad flags, nothing to do, manifest write failure).
pub fn run(options: &EncodeOptions<'_>, settings: &Settings) -> Result<EncodeReport> {
    let kind = detect_path_type(options.path);
    if kind == PathKind::None {
        return Err(PocketError::PathNotFound(options.path.to_path_buf()));
    }
    if options.generate_metadata && kind != PathKind::Folder {
        return Err(PocketError::MetadataRequiresFolder);
    }

    let entries = analyze_path(options.path, Some(&settings.output_extension))?;
    if entries.is_empty() {
        return Err(PocketError::NoFilesFound(options.path.to_path_buf()));
    }

    let output_dir = output_dir_for(options.path, kind);
    let mut report = EncodeReport {
        output_dir,
        ..EncodeReport::default()
    };

    // Folder output is flat, so same-named files from different
    // subfolders would overwrite each other.
    let mut used_ids = HashSet::new();

    for entry in &entries {
        let id = if options.unique {
            Uuid::new_v4().to_string()
        } else {
            entry.filename.clone()
        };

        let result = if used_ids.insert(id.clone()) {
            encode_entry(entry, id, options.password, &report.output_dir, settings)
        } else {
            Err(PocketError::DuplicateOutputName(settings.output_file_name(&id)))
        };

        match result {
            Ok(item) => report.encoded.push(item),
            Err(e) => {
                warn!(file = %entry.path.display(), kind = e.kind(), "failed to encode file");
                report.failed.push((entry.path.clone(), e));
            }
        }
    }

    if options.generate_metadata {
        write_manifest(&options.path.join(&settings.manifest_name), &report.encoded)?;
    }

    debug!(
        encoded = report.encoded.len(),
        failed = report.failed.len(),
        "encode run finished"
    );
    Ok(report)
}

/// Folder input writes into the folder itself; file input writes next
/// to the file.
fn output_dir_for(path: &Path, kind: PathKind) -> PathBuf {
    if kind == PathKind::Folder {
        return path.to_path_buf();
    }
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

fn encode_entry(
    entry: &FileEntry,
    id: String,
    password: &str,
    output_dir: &Path,
    settings: &Settings,
) -> Result<ManifestItem> {
    let plaintext = fs::read(&entry.path)?;
    let (mime, ext) = guess(&plaintext, &entry.extension);

    let metadata = FileMetadata::new(entry.filename.clone(), ext.clone(), mime.clone());
    let blob = encode_buffer(&plaintext, password, &metadata)?;

    fs::write(output_dir.join(settings.output_file_name(&id)), blob)?;

    Ok(ManifestItem {
        id,
        filename: entry.filename.clone(),
        size: entry.size,
        mime,
        ext,
    })
}
