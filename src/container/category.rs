//! Coarse file categories derived from a MIME type.

use std::fmt;

use serde::Serialize;

/// What kind of viewer a decoded file needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileCategory {
    Image,
    Video,
    Audio,
    Pdf,
    Text,
    Other,
}

impl FileCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Video => "video",
            Self::Audio => "audio",
            Self::Pdf => "pdf",
            Self::Text => "text",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for FileCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

enum Rule {
    Prefix(&'static str),
    Exact(&'static str),
}

/// Ordered rules; the first match wins.
const RULES: &[(Rule, FileCategory)] = &[
    (Rule::Prefix("image/"), FileCategory::Image),
    (Rule::Prefix("video/"), FileCategory::Video),
    (Rule::Prefix("audio/"), FileCategory::Audio),
    (Rule::Exact("application/pdf"), FileCategory::Pdf),
    (Rule::Prefix("text/"), FileCategory::Text),
    (Rule::Exact("application/json"), FileCategory::Text),
];

/// Classify a MIME type; `None` and unrecognised types are `Other`.
pub fn classify(mime: Option<&str>) -> FileCategory {
    let Some(mime) = mime else {
        return FileCategory::Other;
    };

    RULES
        .iter()
        .find(|(rule, _)| match rule {
            Rule::Prefix(prefix) => mime.starts_with(*prefix),
            Rule::Exact(exact) => mime == *exact,
        })
        .map_or(FileCategory::Other, |(_, category)| *category)
}
