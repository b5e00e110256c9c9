//! Kind and role inference.
//!
//! Both classifiers are pure: they look at markers in a fixed order and
//! consult the extension tables in [`crate::domain::kind`] and
//! [`crate::domain::role`].

use std::path::Path;

use thiserror::Error;

use crate::domain::{ContentKind, FileRole};

/// Node-level classification failure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClassifyError {
    #[error("Invalid file type '{extension}' for {path}: allowed formats are {allowed:?}")]
    InvalidFormat {
        path: String,
        extension: String,
        allowed: Vec<&'static str>,
    },
}

/// Lowercased extension of the path's final component.
///
/// Dotfiles such as `.vtt` have no extension, mirroring `Path::extension`.
pub fn extension(path: &str) -> Option<String> {
    Path::new(path)
        .extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
}

/// Infer a node's kind from its main file and questions.
///
/// Questions win over everything, then the path's extension, then a
/// streaming marker; with no evidence at all the node is a topic.
pub fn guess_kind<Q>(
    path: Option<&str>,
    stream_marker: Option<&str>,
    questions: &[Q],
) -> Result<ContentKind, ClassifyError> {
    if !questions.is_empty() {
        return Ok(ContentKind::Exercise);
    }

    if let Some(path) = path {
        let ext = extension(path).unwrap_or_default();
        return ContentKind::from_extension(&ext).ok_or_else(|| ClassifyError::InvalidFormat {
            path: path.to_string(),
            extension: ext,
            allowed: ContentKind::allowed_extensions(),
        });
    }

    if stream_marker.is_some() {
        return Ok(ContentKind::Video);
    }

    Ok(ContentKind::Topic)
}

/// Infer a file's role within a node of `kind`.
///
/// Any non-path marker overrides the extension lookup entirely. `None`
/// means the file has no meaning under this kind; callers decide how
/// severe that is.
pub fn guess_role(
    kind: ContentKind,
    path: Option<&str>,
    youtube_id: Option<&str>,
    web_url: Option<&str>,
    encoding: Option<&str>,
) -> Option<FileRole> {
    if youtube_id.is_some() {
        return Some(FileRole::YouTubeVideo);
    }
    if web_url.is_some() {
        return Some(FileRole::WebVideo);
    }
    if encoding.is_some() {
        return Some(FileRole::Base64Image);
    }

    let ext = extension(path?)?;
    FileRole::for_extension(kind, &ext)
}
