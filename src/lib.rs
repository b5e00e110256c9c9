//! content-chef - Content tree builder for a curation platform
//!
//! Turns a provider's loosely-typed description of educational content
//! (topics, sub-topics and media leaves) into a typed channel tree whose
//! leaves carry classified file attachments.
//!
//! # Architecture
//!
//! The build is a synchronous depth-first walk:
//! - Each node's kind is inferred from its first file and its questions
//! - Each file's role is inferred from the node's kind and the file's markers
//! - Subtrees are built as owned values and attached once complete
//!
//! A node whose kind cannot be inferred is dropped with its subtree. A file
//! whose role cannot be inferred aborts the whole build.
//!
//! # Modules
//!
//! - `adapters`: Source loading and license resolution
//! - `core`: Classification, assembly and validation
//! - `domain`: Source records, kinds, roles and the output tree
//! - `cli`: Command-line interface
//!
//! # Usage
//!
//! ```bash
//! # Build a channel from a source tree
//! content-chef build --source tree.json --output channel.json
//!
//! # Inspect how a file would be classified
//! content-chef classify content://lesson/clip.mp4
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;

// Re-export main types at crate root for convenience
pub use crate::adapters::{FileSourceLoader, LicenseRegistry, SourceLoader, StandardLicenses};
pub use crate::core::{BuildError, BuildReport, Chef, PathResolver, TreeBuilder};
pub use crate::domain::{
    Attachment, Channel, ChannelInfo, ContentKind, ContentNode, FileDescriptor, FileRole,
    SourceNode,
};
