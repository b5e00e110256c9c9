//! Content kinds and the extension table used to infer them.

use serde::{Deserialize, Serialize};

/// Coarse classification of a node in the channel tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentKind {
    /// Container for other nodes
    Topic,

    /// Video leaf (local file or hosted stream)
    Video,

    /// Audio leaf
    Audio,

    /// Document leaf (PDF)
    Document,

    /// Zipped HTML5 app leaf
    #[serde(rename = "html5")]
    Html5,

    /// Exercise leaf (question-driven)
    Exercise,
}

/// Extensions recognized for kind inference, kept sorted by extension.
const KIND_BY_EXTENSION: &[(&str, ContentKind)] = &[
    ("html", ContentKind::Html5),
    ("mp3", ContentKind::Audio),
    ("mp4", ContentKind::Video),
    ("pdf", ContentKind::Document),
    ("perseus", ContentKind::Exercise),
    ("zip", ContentKind::Html5),
];

impl ContentKind {
    /// Look up the kind for a lowercase file extension
    pub fn from_extension(ext: &str) -> Option<Self> {
        KIND_BY_EXTENSION
            .iter()
            .find(|(known, _)| *known == ext)
            .map(|(_, kind)| *kind)
    }

    /// All extensions the kind table recognizes
    pub fn allowed_extensions() -> Vec<&'static str> {
        KIND_BY_EXTENSION.iter().map(|(ext, _)| *ext).collect()
    }
}

impl std::fmt::Display for ContentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContentKind::Topic => write!(f, "topic"),
            ContentKind::Video => write!(f, "video"),
            ContentKind::Audio => write!(f, "audio"),
            ContentKind::Document => write!(f, "document"),
            ContentKind::Html5 => write!(f, "html5"),
            ContentKind::Exercise => write!(f, "exercise"),
        }
    }
}

impl std::str::FromStr for ContentKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.to_lowercase().as_str() {
            "topic" => Ok(ContentKind::Topic),
            "video" => Ok(ContentKind::Video),
            "audio" => Ok(ContentKind::Audio),
            "document" | "doc" => Ok(ContentKind::Document),
            "html5" | "html" => Ok(ContentKind::Html5),
            "exercise" => Ok(ContentKind::Exercise),
            _ => anyhow::bail!("Unknown content kind: {}", s),
        }
    }
}
