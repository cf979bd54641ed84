//! Colored terminal output helpers.
//!
//! All user-facing output goes through these functions so we get
//! consistent styling across every command.

use std::path::Path;

use comfy_table::{ContentArrangement, Table};
use console::style;

use crate::container::{FileCategory, FileMetadata};
use crate::errors::PocketError;

/// Print a green success message: "check_mark {msg}"
pub fn success(msg: &str) {
    println!("{} {}", style("\u{2713}").green().bold(), msg);
}

/// Print a red error message: "x_mark {msg}"
pub fn error(msg: &str) {
    eprintln!("{} {}", style("\u{2717}").red().bold(), msg);
}

/// Print a yellow warning: "warning_sign {msg}"
pub fn warning(msg: &str) {
    eprintln!("{} {}", style("\u{26a0}").yellow().bold(), msg);
}

/// Print a blue info message: "info_sign {msg}"
pub fn info(msg: &str) {
    println!("{} {}", style("\u{2139}").blue().bold(), msg);
}

/// Print a dim tip/hint: "arrow {msg}"
pub fn tip(msg: &str) {
    println!("{} {}", style("\u{2192}").dim(), style(msg).dim());
}

/// One-line report of a failure tied to a file: `path [kind]: message`.
pub fn file_failure(file: &Path, err: &PocketError) -> String {
    format!("{} [{}]: {err}", file.display(), err.kind())
}

/// Render a two-column key/value table.
pub fn field_table(rows: &[(&str, String)]) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Field", "Value"]);
    for (field, value) in rows {
        table.add_row(vec![field.to_string(), value.clone()]);
    }
    table
}

/// Rows describing a file's metadata and category.
pub fn metadata_rows(metadata: &FileMetadata, category: FileCategory) -> Vec<(&'static str, String)> {
    vec![
        ("Name", metadata.name.clone()),
        ("Extension", display_opt(metadata.ext.as_deref())),
        ("MIME", display_opt(metadata.mime.as_deref())),
        ("Category", category.to_string()),
    ]
}

fn display_opt(value: Option<&str>) -> String {
    value.unwrap_or("-").to_string()
}
