//! Selection rendering and the frame handed to the renderer

use crate::graph::{Attributes, Edge, GraphStyle, Node, NodeId};
use serde::{Deserialize, Serialize};

/// Attribute name used when clustering is enabled
pub const CLUSTER_ATTRIBUTE: &str = "cluster";

/// Layout the renderer should use
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutMode {
    #[default]
    Force,
    Force3d,
}

impl std::str::FromStr for LayoutMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "force" | "2d" => Ok(LayoutMode::Force),
            "force3d" | "3d" => Ok(LayoutMode::Force3d),
            other => Err(format!("unknown layout '{}'", other)),
        }
    }
}

/// Renderer options that survive queries and resets
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderOptions {
    pub layout: LayoutMode,
    pub clustering: bool,
}

/// Everything the rendering collaborator consumes for one paint
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderFrame {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
    pub layout: LayoutMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster_attribute: Option<&'static str>,
}

impl RenderFrame {
    /// Paint the display nodes: the selected node gets the selection color,
    /// the central node always gets its own color.
    pub fn paint(
        nodes: &[Node],
        edges: &[Edge],
        selected: Option<&NodeId>,
        style: &GraphStyle,
        options: RenderOptions,
    ) -> Self {
        let nodes = nodes
            .iter()
            .map(|node| {
                if selected == Some(&node.id) {
                    node.with_fill(&style.selected_fill)
                } else if node.id.is_central() {
                    node.with_fill(&style.central_fill)
                } else {
                    node.clone()
                }
            })
            .collect();
        Self {
            nodes,
            edges: edges.to_vec(),
            layout: options.layout,
            cluster_attribute: options.clustering.then_some(CLUSTER_ATTRIBUTE),
        }
    }
}

/// One labelled row of the details panel
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailRow {
    pub label: &'static str,
    pub value: String,
}

/// Details of a selected node, ready for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeDetails {
    pub id: NodeId,
    pub rows: Vec<DetailRow>,
}

impl NodeDetails {
    /// Name always; every other field only when it has a value
    pub fn from_attributes(id: NodeId, attrs: &Attributes) -> Self {
        let mut rows = vec![DetailRow {
            label: "Name",
            value: attrs.name.clone(),
        }];
        let optional = [
            ("Company", &attrs.company),
            ("Position", &attrs.position),
            ("Email", &attrs.email),
            ("Profile", &attrs.url),
            ("Connected On", &attrs.connected_on),
        ];
        for (label, value) in optional {
            if !value.is_empty() {
                rows.push(DetailRow {
                    label,
                    value: value.clone(),
                });
            }
        }
        Self { id, rows }
    }

    /// Value of a row by label
    pub fn get(&self, label: &str) -> Option<&str> {
        self.rows
            .iter()
            .find(|r| r.label == label)
            .map(|r| r.value.as_str())
    }
}

impl std::fmt::Display for NodeDetails {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in &self.rows {
            writeln!(f, "{:<13} {}", format!("{}:", row.label), row.value)?;
        }
        Ok(())
    }
}
