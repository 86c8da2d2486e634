//! Per-node domain data, kept apart from the display-oriented `Node`

use super::node::{NodeId, CENTRAL_LABEL};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Company recorded when the import left the column empty
pub const UNKNOWN_COMPANY: &str = "Unknown Company";

/// Position recorded when the import left the column empty
pub const UNKNOWN_POSITION: &str = "Unknown Position";

/// Full, untruncated data behind a node
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attributes {
    pub name: String,
    /// Profile URL
    pub url: String,
    pub email: String,
    pub company: String,
    pub position: String,
    /// Connection date exactly as exported, never parsed
    pub connected_on: String,
}

impl Attributes {
    /// Attributes of the central node: a name and nothing else
    pub fn central() -> Self {
        Self {
            name: CENTRAL_LABEL.to_string(),
            ..Default::default()
        }
    }

    /// Lowercase text matched by free-text search
    pub fn search_haystack(&self) -> String {
        format!(
            "{} {} {} {}",
            self.name, self.company, self.position, self.email
        )
        .to_lowercase()
    }
}

/// Attribute records keyed by node id
pub type AttributeTable = HashMap<NodeId, Attributes>;
