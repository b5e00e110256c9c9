//! Recursive tree assembly.
//!
//! Two failure policies apply. A node whose kind cannot be determined is
//! dropped together with its subtree and the walk moves on to the next
//! sibling. A file that cannot be classified, a missing required field or an
//! unknown license aborts the whole build, and nothing built so far is
//! returned.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;
use uuid::Uuid;

use crate::adapters::licenses::{LicenseError, LicenseRegistry};
use crate::domain::{ContentKind, ContentNode, LeafBody, NodeHeader, NodeIds, SourceNode};

use super::attach::{AttachError, FileAttacher};
use super::classify::guess_kind;
use super::resolver::PathResolver;

/// Description recorded on every resolved license
pub const LICENSE_DESCRIPTION: &str = "Description of license";

/// Fatal build errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("Node '{node_id}': {error}")]
    File { node_id: String, error: AttachError },

    #[error("Node '{node_id}': {error}")]
    License { node_id: String, error: LicenseError },
}

/// A source node left out of the output tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkippedNode {
    pub id: String,
    pub title: String,
    pub reason: String,
}

/// Children built under one parent, plus everything dropped along the way
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BuiltTree {
    pub children: Vec<ContentNode>,
    pub skipped: Vec<SkippedNode>,
}

/// Walks source nodes and assembles owned output subtrees
pub struct TreeBuilder<'a> {
    domain_ns: Uuid,
    resolver: &'a PathResolver,
    attacher: FileAttacher<'a>,
    licenses: &'a dyn LicenseRegistry,
}

impl<'a> TreeBuilder<'a> {
    pub fn new(
        domain_ns: Uuid,
        resolver: &'a PathResolver,
        licenses: &'a dyn LicenseRegistry,
    ) -> Self {
        Self {
            domain_ns,
            resolver,
            attacher: FileAttacher::new(resolver),
            licenses,
        }
    }

    /// Build every source node as a child of `parent_id`
    pub fn build(&self, parent_id: &Uuid, sources: &[SourceNode]) -> Result<BuiltTree, BuildError> {
        let mut skipped = Vec::new();
        let children = self.build_children(parent_id, sources, &mut skipped)?;
        Ok(BuiltTree { children, skipped })
    }

    fn build_children(
        &self,
        parent_id: &Uuid,
        sources: &[SourceNode],
        skipped: &mut Vec<SkippedNode>,
    ) -> Result<Vec<ContentNode>, BuildError> {
        let mut children = Vec::with_capacity(sources.len());

        for source in sources {
            let main_file = source.main_file();
            let kind = match guess_kind(
                main_file.and_then(|f| f.path()),
                main_file.and_then(|f| f.stream_marker()),
                &source.questions,
            ) {
                Ok(kind) => kind,
                Err(e) => {
                    debug!(id = %source.id, error = %e, "Skipping node with unknown kind");
                    skipped.push(skip(source, e.to_string()));
                    continue;
                }
            };

            if kind == ContentKind::Exercise {
                debug!(id = %source.id, "No handler for exercise nodes");
                skipped.push(no_handler(source, kind));
                continue;
            }

            let ids = NodeIds::derive(&self.domain_ns, parent_id, &source.id);
            let header = self.node_header(source, ids);

            let node = if kind == ContentKind::Topic {
                let children = self.build_children(&header.node_id, &source.children, skipped)?;
                ContentNode::topic(header, children)
            } else {
                let leaf = self.build_leaf(kind, source)?;
                match ContentNode::leaf(kind, header, leaf) {
                    Some(node) => node,
                    None => {
                        skipped.push(no_handler(source, kind));
                        continue;
                    }
                }
            };
            children.push(node);
        }

        Ok(children)
    }

    fn build_leaf(&self, kind: ContentKind, source: &SourceNode) -> Result<LeafBody, BuildError> {
        let license = self
            .licenses
            .resolve(
                source.license.as_deref(),
                Some(LICENSE_DESCRIPTION),
                source.copyright_holder.as_deref(),
            )
            .map_err(|error| BuildError::License {
                node_id: source.id.clone(),
                error,
            })?;

        let files = self
            .attacher
            .attach(kind, &source.files)
            .map_err(|error| BuildError::File {
                node_id: source.id.clone(),
                error,
            })?;
        debug!(id = %source.id, %kind, files = files.len(), "Built leaf");

        Ok(LeafBody {
            license,
            derive_thumbnail: kind == ContentKind::Video,
            files,
        })
    }

    fn node_header(&self, source: &SourceNode, ids: NodeIds) -> NodeHeader {
        NodeHeader {
            author: source.author.clone(),
            description: source.description.clone(),
            thumbnail: self.resolver.resolve_opt(source.thumbnail.as_deref()),
            ..NodeHeader::new(source.id.clone(), ids, source.title.clone())
        }
    }
}

fn no_handler(source: &SourceNode, kind: ContentKind) -> SkippedNode {
    skip(source, format!("No handler for {} nodes", kind))
}

fn skip(source: &SourceNode, reason: String) -> SkippedNode {
    SkippedNode {
        id: source.id.clone(),
        title: source.title.clone(),
        reason,
    }
}
