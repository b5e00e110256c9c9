//! `content://` path resolution.

use std::path::{Path, PathBuf};

/// Scheme prefix for paths relative to the content root
pub const CONTENT_SCHEME: &str = "content://";

/// Rewrites `content://<rest>` into `<content_root>/<rest>`.
///
/// Pure string rewriting; the filesystem is never touched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathResolver {
    content_root: PathBuf,
}

impl PathResolver {
    pub fn new(content_root: impl Into<PathBuf>) -> Self {
        Self {
            content_root: content_root.into(),
        }
    }

    pub fn content_root(&self) -> &Path {
        &self.content_root
    }

    /// Resolve a single path; anything without the scheme passes through
    pub fn resolve(&self, path: &str) -> String {
        match path.strip_prefix(CONTENT_SCHEME) {
            Some(rest) if !rest.is_empty() => {
                self.content_root.join(rest).to_string_lossy().into_owned()
            }
            _ => path.to_string(),
        }
    }

    /// Resolve an optional path, keeping absence as absence
    pub fn resolve_opt(&self, path: Option<&str>) -> Option<String> {
        path.map(|p| self.resolve(p))
    }
}
