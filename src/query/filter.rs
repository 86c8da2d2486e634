//! Field filters over company, position and connection date

use super::types::{contains_folded, select_contacts};
use crate::graph::{AttributeTable, Attributes, GraphSnapshot};

/// Conjunctive filter; an empty term matches every contact
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldFilter {
    /// Lowercased company term
    pub company: String,
    /// Lowercased position term
    pub position: String,
    /// Lowercased connection-date term
    pub connected_on: String,
}

impl FieldFilter {
    /// Create a filter from three raw terms
    pub fn new(company: &str, position: &str, connected_on: &str) -> Self {
        Self {
            company: company.to_lowercase(),
            position: position.to_lowercase(),
            connected_on: connected_on.to_lowercase(),
        }
    }

    /// Filter by company
    pub fn with_company(mut self, term: &str) -> Self {
        self.company = term.to_lowercase();
        self
    }

    /// Filter by position
    pub fn with_position(mut self, term: &str) -> Self {
        self.position = term.to_lowercase();
        self
    }

    /// Filter by connection date text
    pub fn with_connected_on(mut self, term: &str) -> Self {
        self.connected_on = term.to_lowercase();
        self
    }

    /// A filter with no terms shows everything
    pub fn is_empty(&self) -> bool {
        self.company.is_empty() && self.position.is_empty() && self.connected_on.is_empty()
    }

    /// Check if a contact matches every term
    pub fn matches(&self, attrs: &Attributes) -> bool {
        contains_folded(&attrs.company, &self.company)
            && contains_folded(&attrs.position, &self.position)
            && contains_folded(&attrs.connected_on, &self.connected_on)
    }

    /// Execute against the canonical snapshot
    pub fn execute(&self, canonical: &GraphSnapshot, attributes: &AttributeTable) -> GraphSnapshot {
        if self.is_empty() {
            return canonical.clone();
        }
        select_contacts(canonical, attributes, |attrs| self.matches(attrs))
    }
}
