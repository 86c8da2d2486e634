//! Graph building: contact records into a star graph around the viewer

use super::attributes::{AttributeTable, Attributes, UNKNOWN_COMPANY, UNKNOWN_POSITION};
use super::edge::{Edge, EdgeId};
use super::node::{truncate_label, Node, NodeId, CENTRAL_LABEL};
use super::snapshot::GraphSnapshot;
use crate::import::{Column, Record};
use serde::{Deserialize, Serialize};

/// Presentation settings applied while building nodes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphStyle {
    /// Longest label shown before truncation, in characters
    pub label_max_chars: usize,
    /// Appended to truncated labels
    pub ellipsis: String,
    pub central_fill: String,
    pub contact_fill: String,
    /// Fill of the selected node in render frames
    pub selected_fill: String,
    pub central_size: u32,
    pub contact_size: u32,
}

impl Default for GraphStyle {
    fn default() -> Self {
        Self {
            label_max_chars: 20,
            ellipsis: "…".to_string(),
            central_fill: "#0077b5".to_string(),
            contact_fill: "#28a745".to_string(),
            selected_fill: "#ffc107".to_string(),
            central_size: 30,
            contact_size: 20,
        }
    }
}

/// Output of a build: the canonical snapshot and its attribute table
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BuiltGraph {
    pub snapshot: GraphSnapshot,
    pub attributes: AttributeTable,
}

/// Builds a [`BuiltGraph`] from contact records
#[derive(Debug, Clone, Default)]
pub struct GraphBuilder {
    style: GraphStyle,
}

impl GraphBuilder {
    /// Create a builder with the default style
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder with a custom style
    pub fn with_style(style: GraphStyle) -> Self {
        Self { style }
    }

    pub fn style(&self) -> &GraphStyle {
        &self.style
    }

    /// Build the star graph
    ///
    /// Ids derive from the record's position in `records`. A record without
    /// a usable name consumes its index but emits nothing, so emitted ids may
    /// have gaps.
    pub fn build(&self, records: &[Record]) -> BuiltGraph {
        let mut nodes = Vec::with_capacity(records.len() + 1);
        let mut edges = Vec::with_capacity(records.len());
        let mut attributes = AttributeTable::with_capacity(records.len() + 1);

        let central = NodeId::central();
        nodes.push(Node::new(
            central.clone(),
            CENTRAL_LABEL,
            &self.style.central_fill,
            self.style.central_size,
        ));
        attributes.insert(central.clone(), Attributes::central());

        for (index, record) in records.iter().enumerate() {
            let full_name = record.full_name();
            if full_name.is_empty() {
                tracing::debug!(index, "skipping record without a name");
                continue;
            }

            let node_id = NodeId::contact(index);
            let label = truncate_label(&full_name, self.style.label_max_chars, &self.style.ellipsis);
            nodes.push(Node::new(
                node_id.clone(),
                label,
                &self.style.contact_fill,
                self.style.contact_size,
            ));

            let connected_on = record.get(Column::ConnectedOn).to_string();
            let edge = Edge::new(EdgeId::contact(index), central.clone(), node_id.clone());
            let edge = if connected_on.is_empty() {
                edge
            } else {
                edge.with_label(format!("Connected: {}", connected_on))
            };
            edges.push(edge);

            attributes.insert(
                node_id,
                Attributes {
                    name: full_name,
                    url: record.get(Column::Url).to_string(),
                    email: record.get(Column::EmailAddress).to_string(),
                    company: or_default(record.get(Column::Company), UNKNOWN_COMPANY),
                    position: or_default(record.get(Column::Position), UNKNOWN_POSITION),
                    connected_on,
                },
            );
        }

        BuiltGraph {
            snapshot: GraphSnapshot::new(nodes, edges),
            attributes,
        }
    }
}

/// Build the star graph with the default style
pub fn build_graph(records: &[Record]) -> BuiltGraph {
    GraphBuilder::new().build(records)
}

fn or_default(value: &str, fallback: &str) -> String {
    if value.is_empty() {
        fallback.to_string()
    } else {
        value.to_string()
    }
}
