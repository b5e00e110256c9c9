//! Structural validation of a finished channel.

use thiserror::Error;

use crate::domain::{Attachment, Channel, ContentKind, ContentNode, FileRole, LicenseKind, NodeBody};

/// Channel validation failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Channel is missing required field '{0}'")]
    MissingChannelField(&'static str),

    #[error("Node '{node}' is missing required field '{field}'")]
    MissingNodeField { node: String, field: &'static str },

    #[error("Channel has no content nodes")]
    NoLeaves,

    #[error("{kind} node '{node}' has no {expected} file")]
    MissingPrimaryFile {
        node: String,
        kind: ContentKind,
        expected: &'static str,
    },

    #[error("Node '{node}' uses license '{license}' without a copyright holder")]
    MissingCopyrightHolder { node: String, license: LicenseKind },

    #[error("Node '{node}' uses special permissions without a license description")]
    MissingLicenseDescription { node: String },
}

/// Check the invariants the curation platform enforces on upload
pub fn validate_channel(channel: &Channel) -> Result<(), ValidationError> {
    let info = &channel.info;
    for (field, value) in [
        ("source_domain", &info.source_domain),
        ("source_id", &info.source_id),
        ("title", &info.title),
    ] {
        if value.trim().is_empty() {
            return Err(ValidationError::MissingChannelField(field));
        }
    }

    for node in channel.nodes() {
        validate_node(node)?;
    }

    if channel.leaf_count() == 0 {
        return Err(ValidationError::NoLeaves);
    }

    Ok(())
}

fn validate_node(node: &ContentNode) -> Result<(), ValidationError> {
    let name = node.source_id().to_string();
    if name.trim().is_empty() {
        return Err(ValidationError::MissingNodeField {
            node: node.header.node_id.to_string(),
            field: "id",
        });
    }
    if node.header.title.trim().is_empty() {
        return Err(ValidationError::MissingNodeField { node: name, field: "title" });
    }

    let Some(leaf) = node.body.as_leaf() else {
        return Ok(());
    };

    let license = &leaf.license;
    if license.kind.requires_copyright_holder()
        && license.copyright_holder.as_deref().map_or(true, |h| h.trim().is_empty())
    {
        return Err(ValidationError::MissingCopyrightHolder {
            node: name,
            license: license.kind,
        });
    }
    if license.kind == LicenseKind::SpecialPermissions && license.description.is_none() {
        return Err(ValidationError::MissingLicenseDescription { node: name });
    }

    let (expected, primary): (&'static str, &[FileRole]) = match &node.body {
        NodeBody::Video(_) => (
            "video",
            &[FileRole::Video, FileRole::YouTubeVideo, FileRole::WebVideo][..],
        ),
        NodeBody::Audio(_) => ("audio", &[FileRole::Audio][..]),
        NodeBody::Document(_) => ("document", &[FileRole::Document][..]),
        NodeBody::Html5(_) => ("html-zip", &[FileRole::HtmlZip][..]),
        NodeBody::Topic { .. } => return Ok(()),
    };

    if !leaf.files.iter().map(Attachment::role).any(|role| primary.contains(&role)) {
        return Err(ValidationError::MissingPrimaryFile {
            node: name,
            kind: node.kind(),
            expected,
        });
    }

    Ok(())
}
