//! Collaborators at the edge of the build.
//!
//! The tree builder only sees these through traits: a [`SourceLoader`]
//! supplies the provider's tree and a [`LicenseRegistry`] turns license
//! names into records.

pub mod licenses;
pub mod loader;

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::SourceNode;

pub use licenses::{LicenseError, LicenseRegistry, StandardLicenses};
pub use loader::{FileSourceLoader, SourceFormat, StaticSourceLoader};

/// Trait for source tree providers
#[async_trait]
pub trait SourceLoader: Send + Sync {
    /// Human-readable description of where the tree comes from
    fn describe(&self) -> String;

    /// Load the top-level source nodes
    async fn load(&self) -> Result<Vec<SourceNode>>;
}
