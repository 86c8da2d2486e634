//! Query system for contact graphs
//!
//! Both query kinds run against the canonical snapshot, never against a
//! previously filtered one, so each call starts from the full graph.

mod filter;
mod search;
mod types;

pub use filter::FieldFilter;
pub use search::SearchQuery;
pub use types::ViewStats;
