//! Source records as supplied by a content provider.
//!
//! These mirror the provider's JSON/YAML document. Every field other than a
//! node's `id` and `title` is optional; unknown keys are rejected when the
//! document is parsed, so a typo surfaces at load time instead of silently
//! defaulting deep inside classification.

use serde::{Deserialize, Serialize};

/// A topic or leaf entry in the provider's tree
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SourceNode {
    /// Provider-assigned identifier
    pub id: String,

    /// Human-readable title
    pub title: String,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub author: Option<String>,

    /// License identifier (e.g. "CC BY", "All Rights Reserved")
    #[serde(default)]
    pub license: Option<String>,

    #[serde(default)]
    pub copyright_holder: Option<String>,

    /// Path or URL of the node thumbnail
    #[serde(default)]
    pub thumbnail: Option<String>,

    /// Exercise questions; any entry marks the node as an exercise
    #[serde(default)]
    pub questions: Vec<serde_json::Value>,

    #[serde(default)]
    pub files: Vec<FileDescriptor>,

    #[serde(default)]
    pub children: Vec<SourceNode>,
}

impl SourceNode {
    /// The descriptor used for kind inference (first file, if any)
    pub fn main_file(&self) -> Option<&FileDescriptor> {
        self.files.first()
    }
}

/// A raw file reference attached to a source node.
///
/// Exactly one of `path`, `youtube_id`, `web_url` or `encoding` is expected;
/// classification checks them in a fixed order rather than validating up
/// front.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileDescriptor {
    /// Local path, remote URL, or `content://` reference
    #[serde(default)]
    pub path: Option<String>,

    /// Hosted video id
    #[serde(default)]
    pub youtube_id: Option<String>,

    /// Streaming video page URL
    #[serde(default)]
    pub web_url: Option<String>,

    /// Inline base64 image data
    #[serde(default)]
    pub encoding: Option<String>,

    /// Language tag (required for subtitles)
    #[serde(default)]
    pub language: Option<String>,

    /// Transcode parameters, passed through untouched
    #[serde(default)]
    pub ffmpeg_settings: Option<serde_json::Map<String, serde_json::Value>>,

    #[serde(default)]
    pub high_resolution: Option<bool>,
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

impl FileDescriptor {
    /// Descriptor for a plain path
    pub fn from_path(path: impl Into<String>) -> Self {
        Self {
            path: Some(path.into()),
            ..Default::default()
        }
    }

    /// Descriptor for a hosted video id
    pub fn from_youtube_id(id: impl Into<String>) -> Self {
        Self {
            youtube_id: Some(id.into()),
            ..Default::default()
        }
    }

    /// Descriptor for a streaming video URL
    pub fn from_web_url(url: impl Into<String>) -> Self {
        Self {
            web_url: Some(url.into()),
            ..Default::default()
        }
    }

    /// Set the language tag
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn path(&self) -> Option<&str> {
        present(&self.path)
    }

    pub fn youtube_id(&self) -> Option<&str> {
        present(&self.youtube_id)
    }

    pub fn web_url(&self) -> Option<&str> {
        present(&self.web_url)
    }

    pub fn encoding(&self) -> Option<&str> {
        present(&self.encoding)
    }

    pub fn language(&self) -> Option<&str> {
        present(&self.language)
    }

    /// Hosted id or streaming URL, whichever is set (id wins)
    pub fn stream_marker(&self) -> Option<&str> {
        self.youtube_id().or_else(|| self.web_url())
    }

    /// Best identifier for error messages
    pub fn identifier(&self) -> String {
        self.path()
            .or_else(|| self.youtube_id())
            .or_else(|| self.web_url())
            .map(str::to_string)
            .unwrap_or_else(|| {
                if self.encoding().is_some() {
                    "<inline encoding>".to_string()
                } else {
                    "<empty file descriptor>".to_string()
                }
            })
    }
}
