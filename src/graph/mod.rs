//! Core graph data structures

mod attributes;
mod builder;
mod edge;
mod node;
mod snapshot;


pub use attributes::{AttributeTable, Attributes, UNKNOWN_COMPANY, UNKNOWN_POSITION};
pub use builder::{build_graph, BuiltGraph, GraphBuilder, GraphStyle};
pub use edge::{Edge, EdgeId};
pub use node::{truncate_label, Node, NodeId, CENTRAL_ID, CENTRAL_LABEL};
pub use snapshot::GraphSnapshot;
