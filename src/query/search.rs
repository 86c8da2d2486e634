//! Free-text search across a contact's searchable fields

use super::types::select_contacts;
use crate::graph::{AttributeTable, Attributes, GraphSnapshot};

/// Query matching contacts whose name, company, position or email
/// contains the text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    /// Lowercased, trimmed query text
    text: String,
}

impl SearchQuery {
    /// Create a query; the text is lowercased and trimmed
    pub fn new(text: &str) -> Self {
        Self {
            text: text.trim().to_lowercase(),
        }
    }

    /// The normalized query text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// An empty query shows everything
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Check whether a contact matches
    pub fn matches(&self, attrs: &Attributes) -> bool {
        attrs.search_haystack().contains(&self.text)
    }

    /// Execute against the canonical snapshot
    pub fn execute(&self, canonical: &GraphSnapshot, attributes: &AttributeTable) -> GraphSnapshot {
        if self.is_empty() {
            return canonical.clone();
        }
        select_contacts(canonical, attributes, |attrs| self.matches(attrs))
    }
}
