//! Placeholders for live profile fetching
//!
//! Nothing here performs I/O. The functions validate their input and report
//! that live data needs API access the tool does not have.

use crate::graph::{AttributeTable, NodeId};
use regex_lite::Regex;
use serde::Serialize;
use std::sync::OnceLock;

/// Severity of a status message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusLevel {
    Info,
    Warning,
    Error,
}

/// A user-visible status line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusMessage {
    pub level: StatusLevel,
    pub text: String,
}

impl StatusMessage {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            level: StatusLevel::Info,
            text: text.into(),
        }
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self {
            level: StatusLevel::Warning,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            level: StatusLevel::Error,
            text: text.into(),
        }
    }
}

impl std::fmt::Display for StatusMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tag = match self.level {
            StatusLevel::Info => "info",
            StatusLevel::Warning => "warning",
            StatusLevel::Error => "error",
        };
        write!(f, "[{}] {}", tag, self.text)
    }
}

fn profile_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"linkedin\.com/in/([^/?]+)").expect("valid profile pattern"))
}

/// Username from a profile URL such as `https://www.linkedin.com/in/janedoe/`
pub fn profile_username(url: &str) -> Option<&str> {
    profile_pattern()
        .captures(url)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Report what fetching a profile would do
pub fn fetch_profile(url: &str) -> StatusMessage {
    let url = url.trim();
    if url.is_empty() {
        return StatusMessage::warning("Please enter a LinkedIn URL");
    }
    match profile_username(url) {
        Some(username) => {
            tracing::debug!(username, "profile fetch requested");
            StatusMessage::info(format!(
                "Fetching data for {} requires LinkedIn API access (OAuth 2.0 and a backend proxy); live data is unavailable",
                username
            ))
        }
        None => StatusMessage::warning("Invalid LinkedIn URL format"),
    }
}

/// Report what expanding the selected node's own connections would do
pub fn expand_connections(selected: Option<&NodeId>, attributes: &AttributeTable) -> StatusMessage {
    let id = match selected {
        Some(id) if !id.is_central() => id,
        _ => return StatusMessage::warning("Please select a connection node first"),
    };
    match attributes.get(id) {
        Some(attrs) if !attrs.url.is_empty() => StatusMessage::info(format!(
            "Fetching connections for {} requires LinkedIn API access; live data is unavailable",
            attrs.name
        )),
        _ => StatusMessage::error("No LinkedIn URL available for this node"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Attributes;

    #[test]
    fn username_is_extracted() {
        assert_eq!(profile_username("https://www.linkedin.com/in/janedoe"), Some("janedoe"));
        assert_eq!(profile_username("linkedin.com/in/jane-doe-42/"), Some("jane-doe-42"));
        assert_eq!(profile_username("https://linkedin.com/in/bob?trk=x"), Some("bob"));
        assert_eq!(profile_username("https://example.com/in/bob"), None);
        assert_eq!(profile_username("https://www.linkedin.com/company/acme"), None);
    }

    #[test]
    fn empty_url_asks_for_input() {
        assert_eq!(fetch_profile("  "), StatusMessage::warning("Please enter a LinkedIn URL"));
    }

    #[test]
    fn malformed_url_is_reported_inline() {
        let status = fetch_profile("not a url");
        assert_eq!(status.level, StatusLevel::Warning);
        assert_eq!(status.text, "Invalid LinkedIn URL format");
    }

    #[test]
    fn valid_url_reports_missing_api_access() {
        let status = fetch_profile("https://www.linkedin.com/in/janedoe");
        assert_eq!(status.level, StatusLevel::Info);
        assert!(status.text.contains("janedoe"));
        assert!(status.text.contains("API access"));
    }

    #[test]
    fn expand_requires_a_contact_selection() {
        let table = AttributeTable::new();
        assert_eq!(expand_connections(None, &table).level, StatusLevel::Warning);
        assert_eq!(
            expand_connections(Some(&NodeId::central()), &table).level,
            StatusLevel::Warning
        );
    }

    #[test]
    fn expand_needs_a_profile_url() {
        let mut table = AttributeTable::new();
        let id = NodeId::contact(0);
        table.insert(
            id.clone(),
            Attributes {
                name: "Jane Doe".into(),
                ..Default::default()
            },
        );
        let status = expand_connections(Some(&id), &table);
        assert_eq!(status, StatusMessage::error("No LinkedIn URL available for this node"));

        table.get_mut(&id).unwrap().url = "https://www.linkedin.com/in/janedoe".into();
        let status = expand_connections(Some(&id), &table);
        assert_eq!(status.level, StatusLevel::Info);
        assert!(status.text.contains("Jane Doe"));
    }
}
