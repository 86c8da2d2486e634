//! contact-graph: explore an exported connections file as a star graph
//!
//! An exported connections CSV becomes one central node for the viewer plus
//! one node per contact, each joined to the center by a single edge.
//!
//! # Core Concepts
//!
//! - **Canonical snapshot**: every node and edge built from the import
//! - **Display snapshot**: the subset left by the latest search or filter
//! - **Attributes**: the full contact data behind each node
//!
//! # Example
//!
//! ```
//! use contact_graph::Explorer;
//!
//! let mut explorer = Explorer::new();
//! explorer
//!     .load_text("First Name,Last Name,Company\nJane,Doe,Acme\n")
//!     .unwrap();
//! assert_eq!(explorer.search("acme").node_count(), 2);
//! ```

pub mod config;
pub mod explorer;
mod graph;
pub mod import;
pub mod query;
pub mod sample;
pub mod shell;

pub use config::{ConfigError, ExplorerConfig};
pub use explorer::{
    Command, ExplorerError, ExplorerResult, Explorer, ExportDocument, LayoutMode, NodeDetails,
    Outcome, RenderFrame, StatusMessage,
};
pub use graph::{
    build_graph, truncate_label, AttributeTable, Attributes, BuiltGraph, Edge, EdgeId,
    GraphBuilder, GraphSnapshot, GraphStyle, Node, NodeId, CENTRAL_ID, CENTRAL_LABEL,
    UNKNOWN_COMPANY, UNKNOWN_POSITION,
};
pub use import::{ImportError, Record};
pub use query::{FieldFilter, SearchQuery, ViewStats};
pub use sample::{SampleGenerator, SampleReport};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
