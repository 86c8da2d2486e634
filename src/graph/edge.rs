//! Edge representation: viewer-to-contact connections

use super::node::NodeId;
use serde::{Deserialize, Serialize};

/// Unique identifier for an edge
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EdgeId(String);

impl EdgeId {
    /// The id of the edge for the record at `index`
    pub fn contact(index: usize) -> Self {
        Self(format!("edge_{}", index))
    }

    /// Get the inner string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for EdgeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A directed edge between two nodes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    /// Unique identifier
    pub id: EdgeId,
    /// Source node (always the central node for imported contacts)
    pub source: NodeId,
    /// Target node
    pub target: NodeId,
    /// Display label; empty when there is nothing to show
    #[serde(default)]
    pub label: String,
}

impl Edge {
    /// Create a new unlabelled edge
    pub fn new(id: EdgeId, source: NodeId, target: NodeId) -> Self {
        Self {
            id,
            source,
            target,
            label: String::new(),
        }
    }

    /// Set the display label
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// The label, if any
    pub fn label(&self) -> Option<&str> {
        if self.label.is_empty() {
            None
        } else {
            Some(&self.label)
        }
    }

    /// Whether both endpoints satisfy `present`
    pub fn connects(&self, present: impl Fn(&NodeId) -> bool) -> bool {
        present(&self.source) && present(&self.target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_label_reads_as_none() {
        let edge = Edge::new(EdgeId::contact(0), NodeId::central(), NodeId::contact(0));
        assert_eq!(edge.label(), None);

        let edge = edge.with_label("Connected: 01 Jan 2020");
        assert_eq!(edge.label(), Some("Connected: 01 Jan 2020"));
    }

    #[test]
    fn edge_serializes_with_plain_ids() {
        let edge = Edge::new(EdgeId::contact(2), NodeId::central(), NodeId::contact(2));
        let json = serde_json::to_value(&edge).unwrap();
        assert_eq!(json["id"], "edge_2");
        assert_eq!(json["source"], "central");
        assert_eq!(json["target"], "node_2");
        assert_eq!(json["label"], "");
    }
}
