//! Classification and assembly.
//!
//! This module contains:
//! - Resolver: `content://` path rewriting
//! - Classify: kind and role inference
//! - Attach: descriptor to attachment conversion
//! - Builder: recursive tree assembly
//! - Validate: channel structure checks
//! - Chef: end-to-end channel construction

pub mod attach;
pub mod builder;
pub mod chef;
pub mod classify;
pub mod resolver;
pub mod validate;

// Re-export commonly used types
pub use attach::{AttachError, FileAttacher, YOUTUBE_SUBTITLE_LANGUAGE};
pub use builder::{BuildError, BuiltTree, SkippedNode, TreeBuilder};
pub use chef::{BuildReport, Chef};
pub use classify::{extension, guess_kind, guess_role, ClassifyError};
pub use resolver::{PathResolver, CONTENT_SCHEME};
pub use validate::{validate_channel, ValidationError};
