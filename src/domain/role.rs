//! File roles and the per-kind extension tables.
//!
//! The owning node's kind restricts which extensions are meaningful: a
//! `.vtt` file is a subtitle under a video and unrecognized anywhere else.

use serde::{Deserialize, Serialize};

use super::kind::ContentKind;

/// Functional role of a single file within its node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FileRole {
    Audio,
    Thumbnail,
    Document,
    Video,
    #[serde(rename = "youtube-video")]
    YouTubeVideo,
    VectorizedVideo,
    VideoThumbnail,
    #[serde(rename = "youtube-thumbnail")]
    YouTubeThumbnail,
    HtmlZip,
    Subtitle,
    TiledThumbnail,
    UniversalSubtitle,
    Base64Image,
    WebVideo,
}

const THUMBNAILS: [(&str, FileRole); 3] = [
    ("jpeg", FileRole::Thumbnail),
    ("jpg", FileRole::Thumbnail),
    ("png", FileRole::Thumbnail),
];

const AUDIO_ROLES: &[(&str, FileRole)] = &[("mp3", FileRole::Audio)];
const DOCUMENT_ROLES: &[(&str, FileRole)] = &[("pdf", FileRole::Document)];
const HTML5_ROLES: &[(&str, FileRole)] = &[("html", FileRole::HtmlZip), ("zip", FileRole::HtmlZip)];
const VIDEO_ROLES: &[(&str, FileRole)] = &[("mp4", FileRole::Video), ("vtt", FileRole::Subtitle)];

impl FileRole {
    /// Look up the role of an extension under the given kind.
    ///
    /// Topics have no table, so every lookup under a topic misses.
    pub fn for_extension(kind: ContentKind, ext: &str) -> Option<Self> {
        let primary: &[(&str, FileRole)] = match kind {
            ContentKind::Topic => return None,
            ContentKind::Video => VIDEO_ROLES,
            ContentKind::Audio => AUDIO_ROLES,
            ContentKind::Document => DOCUMENT_ROLES,
            ContentKind::Html5 => HTML5_ROLES,
            ContentKind::Exercise => &[],
        };

        primary
            .iter()
            .chain(THUMBNAILS.iter())
            .find(|(known, _)| *known == ext)
            .map(|(_, role)| *role)
    }
}

impl std::fmt::Display for FileRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            FileRole::Audio => "audio",
            FileRole::Thumbnail => "thumbnail",
            FileRole::Document => "document",
            FileRole::Video => "video",
            FileRole::YouTubeVideo => "youtube-video",
            FileRole::VectorizedVideo => "vectorized-video",
            FileRole::VideoThumbnail => "video-thumbnail",
            FileRole::YouTubeThumbnail => "youtube-thumbnail",
            FileRole::HtmlZip => "html-zip",
            FileRole::Subtitle => "subtitle",
            FileRole::TiledThumbnail => "tiled-thumbnail",
            FileRole::UniversalSubtitle => "universal-subtitle",
            FileRole::Base64Image => "base64-image",
            FileRole::WebVideo => "web-video",
        };
        f.write_str(name)
    }
}
