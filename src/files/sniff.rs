//! Best-effort MIME type and extension guessing.
//!
//! File content is matched with `infer` first; when it is not recognised
//! the filesystem extension is used instead. A bare ZIP match defers to
//! the extension, since office documents, EPUBs and JARs are all ZIPs.

/// A type recognised from file content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sniffed {
    pub mime: &'static str,
    pub ext: &'static str,
}

/// Matches that only name a generic container format.
const GENERIC_CONTAINERS: &[&str] = &["application/zip", "application/x-cfb"];

/// Recognise a file from its leading bytes.
///
/// Plain text has no signature and is never recognised here.
pub fn sniff(bytes: &[u8]) -> Option<Sniffed> {
    infer::get(bytes).map(|kind| Sniffed {
        mime: kind.mime_type(),
        ext: kind.extension(),
    })
}

/// MIME type for a lowercase extension without the dot.
pub fn mime_for_extension(ext: &str) -> Option<&'static str> {
    let mime = match ext {
        "html" | "htm" => "text/html",
        "css" => "text/css",
        "js" | "mjs" => "text/javascript",
        "json" => "application/json",
        "txt" => "text/plain",
        "md" => "text/markdown",
        "csv" => "text/csv",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "svg" => "image/svg+xml",
        "ico" => "image/x-icon",
        "webp" => "image/webp",
        "heic" | "heif" => "image/heif",
        "avif" => "image/avif",
        "pdf" => "application/pdf",
        "zip" => "application/zip",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        "xlsx" => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        "pptx" => "application/vnd.openxmlformats-officedocument.presentationml.presentation",
        "odt" => "application/vnd.oasis.opendocument.text",
        "epub" => "application/epub+zip",
        "jar" => "application/java-archive",
        "apk" => "application/vnd.android.package-archive",
        "doc" => "application/msword",
        "xls" => "application/vnd.ms-excel",
        "mp3" => "audio/mpeg",
        "wav" => "audio/wav",
        "mp4" => "video/mp4",
        "webm" => "video/webm",
        _ => return None,
    };
    Some(mime)
}

/// Guess `(mime, ext)` for a file, preferring sniffed content over the
/// filesystem extension.
pub fn guess(bytes: &[u8], fs_extension: &str) -> (Option<String>, Option<String>) {
    let ext = fs_extension.trim_start_matches('.').to_lowercase();
    let by_extension = mime_for_extension(&ext);

    if let Some(found) = sniff(bytes) {
        let refined = GENERIC_CONTAINERS.contains(&found.mime)
            && by_extension.is_some_and(|mime| mime != found.mime);
        if !refined {
            return (Some(found.mime.to_string()), Some(found.ext.to_string()));
        }
    }

    if ext.is_empty() {
        return (None, None);
    }
    (by_extension.map(str::to_string), Some(ext))
}
