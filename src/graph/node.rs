//! Node representation in the contact graph

use serde::{Deserialize, Serialize};

/// Reserved id of the node that represents the viewer
pub const CENTRAL_ID: &str = "central";

/// Label of the central node
pub const CENTRAL_LABEL: &str = "You";

/// Unique identifier for a node
///
/// Serializes as a plain string (`"central"` or `"node_<index>"`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    /// The id of the central node
    pub fn central() -> Self {
        Self(CENTRAL_ID.to_string())
    }

    /// The id of the contact imported from the record at `index`
    pub fn contact(index: usize) -> Self {
        Self(format!("node_{}", index))
    }

    /// Create a NodeId from an arbitrary string
    pub fn from_string(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the inner string value
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this is the viewer's node
    pub fn is_central(&self) -> bool {
        self.0 == CENTRAL_ID
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for NodeId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for NodeId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// A vertex in the contact graph
///
/// `fill` and `size` are presentational. The render frame may override
/// `fill` for the selected node without touching the stored node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Unique identifier
    pub id: NodeId,
    /// Display label, possibly truncated
    pub label: String,
    /// Display color
    pub fill: String,
    /// Display scale
    pub size: u32,
}

impl Node {
    /// Create a new node
    pub fn new(id: NodeId, label: impl Into<String>, fill: impl Into<String>, size: u32) -> Self {
        Self {
            id,
            label: label.into(),
            fill: fill.into(),
            size,
        }
    }

    /// Copy of this node painted with another color
    pub fn with_fill(&self, fill: impl Into<String>) -> Self {
        Self {
            fill: fill.into(),
            ..self.clone()
        }
    }
}

/// Truncate a display label to `max_chars` characters, appending `marker`
/// when anything was cut.
///
/// Counts characters, not bytes, so multi-byte names never split mid-char.
pub fn truncate_label(text: &str, max_chars: usize, marker: &str) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut label: String = text.chars().take(max_chars).collect();
    label.push_str(marker);
    label
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contact_ids_follow_input_position() {
        assert_eq!(NodeId::contact(0).as_str(), "node_0");
        assert_eq!(NodeId::contact(17).as_str(), "node_17");
        assert!(!NodeId::contact(0).is_central());
        assert!(NodeId::central().is_central());
    }

    #[test]
    fn node_id_serializes_as_string() {
        let json = serde_json::to_string(&NodeId::contact(3)).unwrap();
        assert_eq!(json, "\"node_3\"");
    }

    #[test]
    fn short_label_is_untouched() {
        assert_eq!(truncate_label("Jane Doe", 20, "…"), "Jane Doe");
    }

    #[test]
    fn label_of_exactly_max_is_untouched() {
        let name = "abcdefghijklmnopqrst";
        assert_eq!(name.chars().count(), 20);
        assert_eq!(truncate_label(name, 20, "…"), name);
    }

    #[test]
    fn long_label_is_cut_with_marker() {
        let name = "Christopher Montgomery Jr";
        assert_eq!(name.chars().count(), 25);
        let label = truncate_label(name, 20, "…");
        assert_eq!(label, "Christopher Montgome…");
    }

    #[test]
    fn truncation_counts_chars_not_bytes() {
        let name = "Zoë Ångström-Øvergård Jr.";
        let label = truncate_label(name, 20, "…");
        assert_eq!(label.chars().count(), 21);
        assert!(label.ends_with('…'));
    }

    #[test]
    fn with_fill_leaves_original_untouched() {
        let node = Node::new(NodeId::central(), "You", "#0077b5", 30);
        let painted = node.with_fill("#ffc107");
        assert_eq!(painted.fill, "#ffc107");
        assert_eq!(node.fill, "#0077b5");
        assert_eq!(painted.id, node.id);
    }
}
