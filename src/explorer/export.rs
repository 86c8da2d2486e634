//! JSON export of the canonical graph

use crate::graph::{AttributeTable, Attributes, Edge, GraphSnapshot, NodeId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// A node as written to the export
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportedNode {
    pub id: NodeId,
    pub label: String,
    /// Attribute record; `null` only if the graph lost its invariant
    pub data: Option<Attributes>,
}

/// Dataset counts written alongside the graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportStats {
    /// Imported contact rows, including rows later skipped for lack of a name
    pub total_connections: usize,
    pub total_nodes: usize,
    pub total_edges: usize,
}

/// The export document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportDocument {
    pub nodes: Vec<ExportedNode>,
    pub edges: Vec<Edge>,
    pub stats: ExportStats,
}

impl ExportDocument {
    /// Assemble the document from the canonical snapshot
    pub fn from_canonical(
        canonical: &GraphSnapshot,
        attributes: &AttributeTable,
        total_connections: usize,
    ) -> Self {
        let nodes = canonical
            .nodes
            .iter()
            .map(|node| ExportedNode {
                id: node.id.clone(),
                label: node.label.clone(),
                data: attributes.get(&node.id).cloned(),
            })
            .collect();
        Self {
            nodes,
            edges: canonical.edges.clone(),
            stats: ExportStats {
                total_connections,
                total_nodes: canonical.node_count(),
                total_edges: canonical.edge_count(),
            },
        }
    }

    /// Pretty-printed JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Write the document into `dir` under the dated export name
    pub fn write_to_dir(&self, dir: &Path, date: NaiveDate) -> Result<PathBuf, ExportWriteError> {
        let path = dir.join(export_file_name(date));
        std::fs::write(&path, self.to_json()?)?;
        tracing::info!(path = %path.display(), nodes = self.stats.total_nodes, "wrote graph export");
        Ok(path)
    }
}

/// Errors writing an export file
#[derive(Debug, thiserror::Error)]
pub enum ExportWriteError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// File name of an export made on `date`
pub fn export_file_name(date: NaiveDate) -> String {
    format!("linkedin_graph_export_{}.json", date.format("%Y-%m-%d"))
}
