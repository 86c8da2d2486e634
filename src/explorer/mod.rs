//! Explorer controller: loading, querying, selection, export
//!
//! [`Explorer`] is the single owner of session state. UI layers translate
//! their events into [`Command`]s and read results back from [`Outcome`]s or
//! the explorer's accessors.

mod command;
mod engine;
mod export;
mod profile;
mod selection;

pub use command::{Command, Outcome};
pub use engine::{ActiveQuery, Explorer, ExplorerError, ExplorerResult};
pub use export::{export_file_name, ExportDocument, ExportStats, ExportWriteError, ExportedNode};
pub use profile::{expand_connections, fetch_profile, profile_username, StatusLevel, StatusMessage};
pub use selection::{
    DetailRow, LayoutMode, NodeDetails, RenderFrame, RenderOptions, CLUSTER_ATTRIBUTE,
};
