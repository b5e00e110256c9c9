//! File-backed source loader.
//!
//! Accepts either a bare list of nodes or an object with a `children` list,
//! in JSON or YAML.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Deserialize;
use tokio::fs;

use crate::domain::SourceNode;

use super::SourceLoader;

/// Object form of a source document
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct SourceTree {
    children: Vec<SourceNode>,
}

/// Source format, chosen by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Json,
    Yaml,
}

impl SourceFormat {
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()).map(str::to_lowercase).as_deref() {
            Some("yaml") | Some("yml") => SourceFormat::Yaml,
            _ => SourceFormat::Json,
        }
    }

    /// Parse a source document
    pub fn parse(&self, content: &str) -> Result<Vec<SourceNode>> {
        match self {
            SourceFormat::Json => {
                let value: serde_json::Value =
                    serde_json::from_str(content).context("Failed to parse source JSON")?;
                if value.is_array() {
                    serde_json::from_value(value).context("Invalid source node list")
                } else {
                    let tree: SourceTree =
                        serde_json::from_value(value).context("Invalid source tree")?;
                    Ok(tree.children)
                }
            }
            SourceFormat::Yaml => {
                let value: serde_yaml::Value =
                    serde_yaml::from_str(content).context("Failed to parse source YAML")?;
                if value.is_sequence() {
                    serde_yaml::from_value(value).context("Invalid source node list")
                } else {
                    let tree: SourceTree =
                        serde_yaml::from_value(value).context("Invalid source tree")?;
                    Ok(tree.children)
                }
            }
        }
    }
}

/// Reads the source tree from a JSON or YAML file
pub struct FileSourceLoader {
    path: PathBuf,
}

impl FileSourceLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl SourceLoader for FileSourceLoader {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn load(&self) -> Result<Vec<SourceNode>> {
        let content = fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("Failed to read source file: {}", self.path.display()))?;

        SourceFormat::from_path(&self.path)
            .parse(&content)
            .with_context(|| format!("Invalid source file: {}", self.path.display()))
    }
}

/// Serves an already-parsed tree
pub struct StaticSourceLoader {
    nodes: Vec<SourceNode>,
}

impl StaticSourceLoader {
    pub fn new(nodes: Vec<SourceNode>) -> Self {
        Self { nodes }
    }
}

#[async_trait]
impl SourceLoader for StaticSourceLoader {
    fn describe(&self) -> String {
        format!("{} in-memory nodes", self.nodes.len())
    }

    async fn load(&self) -> Result<Vec<SourceNode>> {
        Ok(self.nodes.clone())
    }
}
