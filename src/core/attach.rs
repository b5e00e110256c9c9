//! Turns a node's raw file descriptors into typed attachments.

use thiserror::Error;
use tracing::debug;

use crate::domain::{Attachment, ContentKind, FileDescriptor, FileRole};

use super::classify::guess_role;
use super::resolver::PathResolver;

/// Language of the subtitle track generated alongside every hosted video
pub const YOUTUBE_SUBTITLE_LANGUAGE: &str = "en";

/// File-level failures; each one aborts the whole build
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AttachError {
    #[error("Unrecognized file type '{identifier}' for {kind} node")]
    UnrecognizedFileType { identifier: String, kind: ContentKind },

    #[error("Missing required field '{field}' on {role} file '{identifier}'")]
    MissingField {
        field: &'static str,
        role: FileRole,
        identifier: String,
    },
}

/// Classifies and builds attachments for leaves of one kind
pub struct FileAttacher<'a> {
    resolver: &'a PathResolver,
}

impl<'a> FileAttacher<'a> {
    pub fn new(resolver: &'a PathResolver) -> Self {
        Self { resolver }
    }

    /// Build attachments for every descriptor, in input order.
    ///
    /// Stops at the first descriptor that cannot be classified.
    pub fn attach(
        &self,
        kind: ContentKind,
        files: &[FileDescriptor],
    ) -> Result<Vec<Attachment>, AttachError> {
        let mut attachments = Vec::with_capacity(files.len());
        for file in files {
            self.attach_one(kind, file, &mut attachments)?;
        }
        Ok(attachments)
    }

    fn attach_one(
        &self,
        kind: ContentKind,
        file: &FileDescriptor,
        out: &mut Vec<Attachment>,
    ) -> Result<(), AttachError> {
        let path = self.resolver.resolve_opt(file.path());
        let role = guess_role(
            kind,
            path.as_deref(),
            file.youtube_id(),
            file.web_url(),
            file.encoding(),
        );

        let unrecognized = || AttachError::UnrecognizedFileType {
            identifier: file.identifier(),
            kind,
        };
        let Some(role) = role else {
            return Err(unrecognized());
        };
        debug!(%kind, %role, file = %file.identifier(), "Classified file");

        let language = file.language().map(str::to_string);
        let attachment = match role {
            FileRole::YouTubeVideo => {
                let youtube_id = file.youtube_id().unwrap_or_default().to_string();
                out.push(Attachment::YouTubeVideo {
                    youtube_id: youtube_id.clone(),
                    high_resolution: file.high_resolution,
                });
                Attachment::YouTubeSubtitle {
                    youtube_id,
                    language: YOUTUBE_SUBTITLE_LANGUAGE.to_string(),
                }
            }
            FileRole::WebVideo => Attachment::WebVideo {
                web_url: file.web_url().unwrap_or_default().to_string(),
                high_resolution: file.high_resolution,
            },
            FileRole::Base64Image => Attachment::Base64Image {
                encoding: file.encoding().unwrap_or_default().to_string(),
            },
            FileRole::Audio => Attachment::Audio {
                path: path.unwrap_or_default(),
                language,
            },
            FileRole::Thumbnail => Attachment::Thumbnail {
                path: path.unwrap_or_default(),
            },
            FileRole::Document => Attachment::Document {
                path: path.unwrap_or_default(),
                language,
            },
            FileRole::HtmlZip => Attachment::HtmlZip {
                path: path.unwrap_or_default(),
                language,
            },
            FileRole::Video => Attachment::Video {
                path: path.unwrap_or_default(),
                language,
                ffmpeg_settings: file.ffmpeg_settings.clone(),
            },
            FileRole::Subtitle => Attachment::Subtitle {
                language: language.ok_or_else(|| AttachError::MissingField {
                    field: "language",
                    role,
                    identifier: file.identifier(),
                })?,
                path: path.unwrap_or_default(),
            },
            // Never produced by the tables; no constructor exists for them
            FileRole::VectorizedVideo
            | FileRole::VideoThumbnail
            | FileRole::YouTubeThumbnail
            | FileRole::TiledThumbnail
            | FileRole::UniversalSubtitle => return Err(unrecognized()),
        };

        out.push(attachment);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attacher_root() -> PathResolver {
        PathResolver::new("/srv/content")
    }

    #[test]
    fn test_video_files_in_order() {
        let resolver = attacher_root();
        let attacher = FileAttacher::new(&resolver);
        let files = vec![
            FileDescriptor::from_path("content://clip.mp4"),
            FileDescriptor::from_path("thumb.jpg"),
            FileDescriptor::from_path("subs.vtt").with_language("fr"),
        ];

        let attachments = attacher.attach(ContentKind::Video, &files).unwrap();
        let roles: Vec<_> = attachments.iter().map(Attachment::role).collect();
        assert_eq!(roles, vec![FileRole::Video, FileRole::Thumbnail, FileRole::Subtitle]);
        assert_eq!(attachments[0].source(), "/srv/content/clip.mp4");
        assert_eq!(attachments[2].language(), Some("fr"));
    }

    #[test]
    fn test_ffmpeg_settings_pass_through() {
        let resolver = attacher_root();
        let attacher = FileAttacher::new(&resolver);
        let json = r#"{"path": "clip.mp4", "ffmpeg_settings": {"max_width": 480, "crf": 20}}"#;
        let file: FileDescriptor = serde_json::from_str(json).unwrap();

        let attachments = attacher.attach(ContentKind::Video, &[file.clone()]).unwrap();
        match &attachments[0] {
            Attachment::Video {
                ffmpeg_settings, ..
            } => assert_eq!(ffmpeg_settings, &file.ffmpeg_settings),
            other => panic!("Expected video attachment, got {:?}", other),
        }
    }

    #[test]
    fn test_youtube_adds_subtitle_sidecar() {
        let resolver = attacher_root();
        let attacher = FileAttacher::new(&resolver);

        for high_resolution in [None, Some(true), Some(false)] {
            let file = FileDescriptor {
                high_resolution,
                ..FileDescriptor::from_youtube_id("abc123")
            };
            let attachments = attacher.attach(ContentKind::Video, &[file]).unwrap();

            assert_eq!(attachments.len(), 2);
            assert_eq!(
                attachments[0],
                Attachment::YouTubeVideo {
                    youtube_id: "abc123".to_string(),
                    high_resolution,
                }
            );
            assert_eq!(attachments[1].role(), FileRole::Subtitle);
            assert_eq!(attachments[1].language(), Some("en"));
        }
    }

    #[test]
    fn test_unrecognized_file_type() {
        let resolver = attacher_root();
        let attacher = FileAttacher::new(&resolver);
        let files = vec![FileDescriptor::from_path("notes.txt")];

        let err = attacher.attach(ContentKind::Video, &files).unwrap_err();
        assert_eq!(
            err,
            AttachError::UnrecognizedFileType {
                identifier: "notes.txt".to_string(),
                kind: ContentKind::Video,
            }
        );
    }

    #[test]
    fn test_empty_descriptor_unrecognized() {
        let resolver = attacher_root();
        let attacher = FileAttacher::new(&resolver);

        let err = attacher.attach(ContentKind::Video, &[FileDescriptor::default()]).unwrap_err();
        assert!(matches!(err, AttachError::UnrecognizedFileType { .. }));
    }

    #[test]
    fn test_subtitle_requires_language() {
        let resolver = attacher_root();
        let attacher = FileAttacher::new(&resolver);

        let err = attacher
            .attach(ContentKind::Video, &[FileDescriptor::from_path("subs.vtt")])
            .unwrap_err();
        assert!(matches!(err, AttachError::MissingField { field: "language", .. }));
    }

    #[test]
    fn test_web_video_and_encoding() {
        let resolver = attacher_root();
        let attacher = FileAttacher::new(&resolver);
        let files = vec![
            FileDescriptor::from_web_url("https://vimeo.com/188609325"),
            FileDescriptor {
                encoding: Some("data:image/png;base64,AAAA".to_string()),
                ..Default::default()
            },
        ];

        let attachments = attacher.attach(ContentKind::Video, &files).unwrap();
        assert_eq!(attachments[0].role(), FileRole::WebVideo);
        assert_eq!(attachments[0].source(), "https://vimeo.com/188609325");
        assert_eq!(attachments[1].role(), FileRole::Base64Image);
    }
}
