//! GraphSnapshot: an ordered node/edge pair with referential closure

use super::edge::Edge;
use super::node::{Node, NodeId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A node sequence and an edge sequence
///
/// Snapshots produced by [`GraphSnapshot::restrict`] only hold edges whose
/// endpoints are both among the snapshot's nodes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphSnapshot {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

impl GraphSnapshot {
    /// Create a snapshot from raw parts
    pub fn new(nodes: Vec<Node>, edges: Vec<Edge>) -> Self {
        Self { nodes, edges }
    }

    /// Keep the nodes accepted by `keep`, and the edges between kept nodes
    ///
    /// Order is preserved for both sequences.
    pub fn restrict(&self, mut keep: impl FnMut(&Node) -> bool) -> Self {
        let nodes: Vec<Node> = self.nodes.iter().filter(|n| keep(n)).cloned().collect();
        let kept: HashSet<&NodeId> = nodes.iter().map(|n| &n.id).collect();
        let edges = self
            .edges
            .iter()
            .filter(|e| e.connects(|id| kept.contains(id)))
            .cloned()
            .collect();
        Self { nodes, edges }
    }

    /// Ids of every node in the snapshot
    pub fn node_ids(&self) -> HashSet<&NodeId> {
        self.nodes.iter().map(|n| &n.id).collect()
    }

    /// Check if a node is present
    pub fn contains_node(&self, id: &NodeId) -> bool {
        self.nodes.iter().any(|n| &n.id == id)
    }

    /// Whether every edge references nodes of this snapshot
    pub fn is_closed(&self) -> bool {
        let ids = self.node_ids();
        self.edges.iter().all(|e| e.connects(|id| ids.contains(id)))
    }

    /// Number of nodes
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Number of nodes other than the central one
    pub fn contact_count(&self) -> usize {
        self.nodes.iter().filter(|n| !n.id.is_central()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::EdgeId;

    fn star(contacts: usize) -> GraphSnapshot {
        let mut nodes = vec![Node::new(NodeId::central(), "You", "#0077b5", 30)];
        let mut edges = Vec::new();
        for i in 0..contacts {
            nodes.push(Node::new(NodeId::contact(i), format!("c{}", i), "#28a745", 20));
            edges.push(Edge::new(EdgeId::contact(i), NodeId::central(), NodeId::contact(i)));
        }
        GraphSnapshot::new(nodes, edges)
    }

    #[test]
    fn restrict_drops_dangling_edges() {
        let snapshot = star(3);
        let restricted = snapshot.restrict(|n| n.id.as_str() != "node_1");

        assert_eq!(restricted.node_count(), 3);
        assert_eq!(restricted.edge_count(), 2);
        assert!(restricted.is_closed());
        assert!(!restricted.edges.iter().any(|e| e.target.as_str() == "node_1"));
    }

    #[test]
    fn restrict_without_central_drops_every_edge() {
        let restricted = star(2).restrict(|n| !n.id.is_central());
        assert_eq!(restricted.node_count(), 2);
        assert_eq!(restricted.edge_count(), 0);
    }

    #[test]
    fn restrict_preserves_order() {
        let restricted = star(4).restrict(|n| n.id.as_str() != "node_2");
        let ids: Vec<&str> = restricted.nodes.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["central", "node_0", "node_1", "node_3"]);
    }

    #[test]
    fn dangling_edge_breaks_closure() {
        let mut snapshot = star(1);
        snapshot.nodes.pop();
        assert!(!snapshot.is_closed());
    }

    #[test]
    fn contact_count_excludes_central() {
        assert_eq!(star(5).contact_count(), 5);
        assert_eq!(GraphSnapshot::default().contact_count(), 0);
    }
}
