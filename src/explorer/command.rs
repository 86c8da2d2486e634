//! Typed commands accepted by the explorer and what they produce

use super::export::ExportDocument;
use super::profile::StatusMessage;
use super::selection::{LayoutMode, NodeDetails, RenderOptions};
use crate::graph::NodeId;
use crate::query::ViewStats;

/// A user action, already translated from whatever UI produced it
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Replace the dataset with the contents of a connections file
    LoadFile(String),
    /// Free-text search
    Search(String),
    /// Field filter; empty terms match everything
    Filter {
        company: String,
        position: String,
        date: String,
    },
    /// A node was clicked
    SelectNode(NodeId),
    ClearSelection,
    /// Serialize the canonical graph
    Export,
    /// Show everything again and drop the selection
    Reset,
    SetLayout(LayoutMode),
    SetClustering(bool),
    /// Placeholder for fetching a live profile
    FetchProfile(String),
    /// Placeholder for expanding the selected node's own connections
    ExpandSelected,
}

/// Result of a successfully handled command
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Loaded {
        /// Contact rows retained from the file
        connections: usize,
        stats: ViewStats,
    },
    /// The display snapshot was recomputed
    Displayed(ViewStats),
    Selected(NodeDetails),
    /// The id had no attribute record; the selection is unchanged
    NotFound(NodeId),
    SelectionCleared,
    Exported(ExportDocument),
    Reset(ViewStats),
    RenderChanged(RenderOptions),
    Status(StatusMessage),
}
