//! Output tree handed to the curation platform.
//!
//! Every node owns its children or its attachments outright; a parent only
//! receives a subtree once it has been completely built.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::ids::NodeIds;
use super::kind::ContentKind;
use super::license::License;
use super::role::FileRole;

/// Channel-level metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelInfo {
    /// Who provides the content (e.g. "www.designmate.com")
    pub source_domain: String,

    /// Channel identifier unique within the domain
    pub source_id: String,

    pub title: String,

    /// Language code of the channel
    pub language: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
}

/// Root of the output tree
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Channel {
    #[serde(flatten)]
    pub info: ChannelInfo,

    pub channel_id: Uuid,

    #[serde(default)]
    pub children: Vec<ContentNode>,
}

impl Channel {
    /// Walk a chain of source ids from the root
    pub fn find(&self, source_ids: &[&str]) -> Option<&ContentNode> {
        let (first, rest) = source_ids.split_first()?;
        let mut node = self.children.iter().find(|c| c.header.source_id == *first)?;
        for id in rest {
            node = node.child(id)?;
        }
        Some(node)
    }

    /// Number of leaf nodes anywhere in the tree
    pub fn leaf_count(&self) -> usize {
        self.children.iter().map(ContentNode::leaf_count).sum()
    }

    /// Every node, depth-first, pre-order
    pub fn nodes(&self) -> Vec<&ContentNode> {
        let mut out = Vec::new();
        let mut stack: Vec<&ContentNode> = self.children.iter().rev().collect();
        while let Some(node) = stack.pop() {
            out.push(node);
            stack.extend(node.children().iter().rev());
        }
        out
    }
}

/// Fields shared by every node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeHeader {
    pub source_id: String,
    pub content_id: Uuid,
    pub node_id: Uuid,
    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
}

impl NodeHeader {
    pub fn new(source_id: impl Into<String>, ids: NodeIds, title: impl Into<String>) -> Self {
        Self {
            source_id: source_id.into(),
            content_id: ids.content_id,
            node_id: ids.node_id,
            title: title.into(),
            author: None,
            description: None,
            thumbnail: None,
        }
    }
}

/// Leaf payload: license and attachments
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeafBody {
    pub license: License,

    /// Ask the platform to extract a thumbnail when none is attached
    #[serde(default)]
    pub derive_thumbnail: bool,

    #[serde(default)]
    pub files: Vec<Attachment>,
}

/// Kind-specific part of a node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NodeBody {
    Topic {
        #[serde(default)]
        children: Vec<ContentNode>,
    },
    Video(LeafBody),
    Audio(LeafBody),
    Document(LeafBody),
    #[serde(rename = "html5")]
    Html5(LeafBody),
}

impl NodeBody {
    pub fn kind(&self) -> ContentKind {
        match self {
            NodeBody::Topic { .. } => ContentKind::Topic,
            NodeBody::Video(_) => ContentKind::Video,
            NodeBody::Audio(_) => ContentKind::Audio,
            NodeBody::Document(_) => ContentKind::Document,
            NodeBody::Html5(_) => ContentKind::Html5,
        }
    }

    pub fn as_leaf(&self) -> Option<&LeafBody> {
        match self {
            NodeBody::Topic { .. } => None,
            NodeBody::Video(leaf)
            | NodeBody::Audio(leaf)
            | NodeBody::Document(leaf)
            | NodeBody::Html5(leaf) => Some(leaf),
        }
    }
}

/// A node in the output tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentNode {
    #[serde(flatten)]
    pub header: NodeHeader,

    #[serde(flatten)]
    pub body: NodeBody,
}

impl ContentNode {
    /// Container node with already-built children
    pub fn topic(header: NodeHeader, children: Vec<ContentNode>) -> Self {
        Self {
            header,
            body: NodeBody::Topic { children },
        }
    }

    /// Media leaf of the given kind.
    ///
    /// Returns `None` for kinds that have no leaf body (topics and exercises).
    pub fn leaf(kind: ContentKind, header: NodeHeader, leaf: LeafBody) -> Option<Self> {
        let body = match kind {
            ContentKind::Video => NodeBody::Video(leaf),
            ContentKind::Audio => NodeBody::Audio(leaf),
            ContentKind::Document => NodeBody::Document(leaf),
            ContentKind::Html5 => NodeBody::Html5(leaf),
            ContentKind::Topic | ContentKind::Exercise => return None,
        };
        Some(Self { header, body })
    }

    pub fn kind(&self) -> ContentKind {
        self.body.kind()
    }

    pub fn source_id(&self) -> &str {
        &self.header.source_id
    }

    /// Child nodes (empty for leaves)
    pub fn children(&self) -> &[ContentNode] {
        match &self.body {
            NodeBody::Topic { children } => children,
            _ => &[],
        }
    }

    /// Attachments (empty for topics)
    pub fn files(&self) -> &[Attachment] {
        self.body.as_leaf().map(|leaf| leaf.files.as_slice()).unwrap_or(&[])
    }

    pub fn child(&self, source_id: &str) -> Option<&ContentNode> {
        self.children().iter().find(|c| c.header.source_id == source_id)
    }

    fn leaf_count(&self) -> usize {
        match &self.body {
            NodeBody::Topic { children } => children.iter().map(ContentNode::leaf_count).sum(),
            _ => 1,
        }
    }
}

/// A classified file attachment.
///
/// Each variant carries only the fields meaningful for its role.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Attachment {
    Audio {
        path: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        language: Option<String>,
    },
    Thumbnail {
        path: String,
    },
    Document {
        path: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        language: Option<String>,
    },
    HtmlZip {
        path: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        language: Option<String>,
    },
    Video {
        path: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        language: Option<String>,
        /// Opaque transcode parameters
        #[serde(default, skip_serializing_if = "Option::is_none")]
        ffmpeg_settings: Option<serde_json::Map<String, serde_json::Value>>,
    },
    Subtitle {
        path: String,
        language: String,
    },
    Base64Image {
        encoding: String,
    },
    WebVideo {
        web_url: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        high_resolution: Option<bool>,
    },
    #[serde(rename = "youtube_video")]
    YouTubeVideo {
        youtube_id: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        high_resolution: Option<bool>,
    },
    /// Subtitle track fetched from the hosted video
    #[serde(rename = "youtube_subtitle")]
    YouTubeSubtitle {
        youtube_id: String,
        language: String,
    },
}

impl Attachment {
    pub fn role(&self) -> FileRole {
        match self {
            Attachment::Audio { .. } => FileRole::Audio,
            Attachment::Thumbnail { .. } => FileRole::Thumbnail,
            Attachment::Document { .. } => FileRole::Document,
            Attachment::HtmlZip { .. } => FileRole::HtmlZip,
            Attachment::Video { .. } => FileRole::Video,
            Attachment::Subtitle { .. } | Attachment::YouTubeSubtitle { .. } => FileRole::Subtitle,
            Attachment::Base64Image { .. } => FileRole::Base64Image,
            Attachment::WebVideo { .. } => FileRole::WebVideo,
            Attachment::YouTubeVideo { .. } => FileRole::YouTubeVideo,
        }
    }

    /// Path, URL, hosted id or placeholder identifying the attachment
    pub fn source(&self) -> &str {
        match self {
            Attachment::Audio { path, .. }
            | Attachment::Thumbnail { path }
            | Attachment::Document { path, .. }
            | Attachment::HtmlZip { path, .. }
            | Attachment::Video { path, .. }
            | Attachment::Subtitle { path, .. } => path,
            Attachment::WebVideo { web_url, .. } => web_url,
            Attachment::YouTubeVideo { youtube_id, .. }
            | Attachment::YouTubeSubtitle { youtube_id, .. } => youtube_id,
            Attachment::Base64Image { .. } => "<inline encoding>",
        }
    }

    pub fn language(&self) -> Option<&str> {
        match self {
            Attachment::Audio { language, .. }
            | Attachment::Document { language, .. }
            | Attachment::HtmlZip { language, .. }
            | Attachment::Video { language, .. } => language.as_deref(),
            Attachment::Subtitle { language, .. }
            | Attachment::YouTubeSubtitle { language, .. } => Some(language),
            _ => None,
        }
    }
}
