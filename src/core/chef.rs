//! Channel construction.
//!
//! Coordinates loading the provider's tree, building it under the channel
//! root, and validating the result.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

use crate::adapters::{LicenseRegistry, SourceLoader, StandardLicenses};
use crate::domain::{channel_id, domain_namespace, Channel, ChannelInfo, SourceNode};

use super::builder::{SkippedNode, TreeBuilder};
use super::resolver::PathResolver;
use super::validate::validate_channel;

/// Result of a successful build
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildReport {
    pub channel: Channel,

    /// Source nodes left out of the tree
    #[serde(default)]
    pub skipped: Vec<SkippedNode>,

    pub built_at: DateTime<Utc>,
}

/// Builds a channel from a provider's source tree
pub struct Chef {
    info: ChannelInfo,
    resolver: PathResolver,
    licenses: Box<dyn LicenseRegistry>,
}

impl Chef {
    /// Create a chef using the standard license table
    pub fn new(info: ChannelInfo, content_root: impl Into<PathBuf>) -> Self {
        Self::with_licenses(info, content_root, Box::new(StandardLicenses))
    }

    pub fn with_licenses(
        info: ChannelInfo,
        content_root: impl Into<PathBuf>,
        licenses: Box<dyn LicenseRegistry>,
    ) -> Self {
        Self {
            info,
            resolver: PathResolver::new(content_root),
            licenses,
        }
    }

    /// Load, build and validate the channel
    #[instrument(
        skip(self, loader),
        fields(channel = %self.info.source_id, source = %loader.describe())
    )]
    pub async fn construct_channel(&self, loader: &dyn SourceLoader) -> Result<BuildReport> {
        let sources = loader.load().await.context("Failed to load source tree")?;
        info!(top_level = sources.len(), "Loaded source tree");

        self.build_channel(&sources)
    }

    /// Build and validate a channel from already-loaded sources
    pub fn build_channel(&self, sources: &[SourceNode]) -> Result<BuildReport> {
        let root = channel_id(&self.info.source_domain, &self.info.source_id);
        let builder = TreeBuilder::new(
            domain_namespace(&self.info.source_domain),
            &self.resolver,
            self.licenses.as_ref(),
        );

        let tree = builder.build(&root, sources).context("Channel build aborted")?;
        for skipped in &tree.skipped {
            warn!(id = %skipped.id, reason = %skipped.reason, "Node omitted from channel");
        }

        let channel = Channel {
            info: self.info.clone(),
            channel_id: root,
            children: tree.children,
        };
        validate_channel(&channel).context("Channel failed validation")?;

        info!(
            %root,
            nodes = channel.nodes().len(),
            leaves = channel.leaf_count(),
            skipped = tree.skipped.len(),
            "Channel built"
        );

        Ok(BuildReport {
            channel,
            skipped: tree.skipped,
            built_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::StaticSourceLoader;
    use crate::domain::FileDescriptor;

    fn info() -> ChannelInfo {
        ChannelInfo {
            source_domain: "www.designmate.com".to_string(),
            source_id: "designmate".to_string(),
            title: "designmate".to_string(),
            language: "en".to_string(),
            description: None,
            thumbnail: None,
        }
    }

    fn vimeo() -> SourceNode {
        SourceNode {
            id: "6cafe9".to_string(),
            title: "TEST VIMEO".to_string(),
            license: Some("All Rights Reserved".to_string()),
            copyright_holder: Some("Designmate Ind.Pvt.Ltd.".to_string()),
            files: vec![FileDescriptor::from_web_url("https://vimeo.com/188609325")],
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_construct_channel() {
        let chef = Chef::new(info(), "/srv/content");
        let loader = StaticSourceLoader::new(vec![vimeo()]);

        let report = chef.construct_channel(&loader).await.unwrap();
        assert_eq!(report.channel.leaf_count(), 1);
        assert_eq!(report.channel.channel_id, channel_id("www.designmate.com", "designmate"));
        assert!(report.skipped.is_empty());
    }

    #[test]
    fn test_validation_failure_surfaces() {
        let chef = Chef::new(info(), "/srv/content");
        let err = chef.build_channel(&[]).unwrap_err();
        assert!(format!("{:#}", err).contains("no content nodes"));
    }

    #[test]
    fn test_build_abort_surfaces() {
        let chef = Chef::new(info(), "/srv/content");
        let mut broken = vimeo();
        broken.files.push(FileDescriptor::from_path("notes.txt"));

        let err = chef.build_channel(&[broken]).unwrap_err();
        assert!(format!("{:#}", err).contains("Unrecognized file type 'notes.txt'"));
    }
}
