//! Deterministic node identifiers.
//!
//! Ids are UUID v5 values chained from the channel's source domain, so
//! re-running a build over the same source tree reproduces every id and the
//! same source id under two different parents yields two node ids.

use uuid::Uuid;

/// Namespace derived from the channel's source domain
pub fn domain_namespace(source_domain: &str) -> Uuid {
    Uuid::new_v5(&Uuid::NAMESPACE_DNS, source_domain.as_bytes())
}

/// Root node id of the channel
pub fn channel_id(source_domain: &str, source_id: &str) -> Uuid {
    Uuid::new_v5(&domain_namespace(source_domain), source_id.as_bytes())
}

/// Content and placement ids for one node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeIds {
    /// Stable across placements of the same content
    pub content_id: Uuid,

    /// Unique to this position in the tree
    pub node_id: Uuid,
}

impl NodeIds {
    /// Derive ids for `source_id` placed under `parent_node_id`
    pub fn derive(domain_ns: &Uuid, parent_node_id: &Uuid, source_id: &str) -> Self {
        let content_id = Uuid::new_v5(domain_ns, source_id.as_bytes());
        let node_id = Uuid::new_v5(parent_node_id, content_id.simple().to_string().as_bytes());
        Self {
            content_id,
            node_id,
        }
    }
}
