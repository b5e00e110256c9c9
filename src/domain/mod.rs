//! Domain types for content-chef.
//!
//! This module contains the data structures on both sides of the build:
//! - Source: provider-supplied records (SourceNode, FileDescriptor)
//! - Kind/Role: closed classifications with their extension tables
//! - Node: the output channel tree and its attachments
//! - License, Ids: supporting records for output nodes

pub mod ids;
pub mod kind;
pub mod license;
pub mod node;
pub mod role;
pub mod source;

// Re-export commonly used types
pub use ids::{channel_id, domain_namespace, NodeIds};
pub use kind::ContentKind;
pub use license::{License, LicenseKind};
pub use node::{Attachment, Channel, ChannelInfo, ContentNode, LeafBody, NodeBody, NodeHeader};
pub use role::FileRole;
pub use source::{FileDescriptor, SourceNode};
