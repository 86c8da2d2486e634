//! Shared query plumbing and result structures

use crate::graph::{AttributeTable, Attributes, GraphSnapshot};
use serde::Serialize;
use std::collections::HashSet;

/// Keep the central node plus every contact whose attributes satisfy
/// `matches`; contacts without attributes are dropped.
pub(crate) fn select_contacts(
    canonical: &GraphSnapshot,
    attributes: &AttributeTable,
    matches: impl Fn(&Attributes) -> bool,
) -> GraphSnapshot {
    canonical.restrict(|node| {
        if node.id.is_central() {
            return true;
        }
        match attributes.get(&node.id) {
            Some(attrs) => matches(attrs),
            None => {
                tracing::warn!(node = %node.id, "node has no attribute record; excluding it");
                false
            }
        }
    })
}

/// Case-insensitive substring test where an empty needle matches anything
///
/// `needle` must already be lowercase.
pub(crate) fn contains_folded(haystack: &str, needle: &str) -> bool {
    needle.is_empty() || haystack.to_lowercase().contains(needle)
}

/// Counts shown alongside a displayed graph
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewStats {
    /// Contacts in the canonical snapshot
    pub total_contacts: usize,
    /// Contacts in the display snapshot
    pub visible_contacts: usize,
    /// Distinct non-empty companies across all attribute records
    pub companies: usize,
}

impl ViewStats {
    pub fn compute(
        canonical: &GraphSnapshot,
        display: &GraphSnapshot,
        attributes: &AttributeTable,
    ) -> Self {
        let companies: HashSet<&str> = attributes
            .values()
            .map(|a| a.company.as_str())
            .filter(|c| !c.is_empty())
            .collect();
        Self {
            total_contacts: canonical.contact_count(),
            visible_contacts: display.contact_count(),
            companies: companies.len(),
        }
    }
}
