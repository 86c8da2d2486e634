//! Explorer: owns the imported graph and everything derived from it

use super::command::{Command, Outcome};
use super::export::{ExportDocument, ExportWriteError};
use super::profile::{expand_connections, fetch_profile};
use super::selection::{NodeDetails, RenderFrame, RenderOptions};
use crate::config::ExplorerConfig;
use crate::graph::{AttributeTable, Attributes, GraphBuilder, GraphSnapshot, GraphStyle, NodeId};
use crate::import::{self, ImportError, Record};
use crate::query::{FieldFilter, SearchQuery, ViewStats};
use chrono::NaiveDate;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur in explorer operations
#[derive(Debug, Error)]
pub enum ExplorerError {
    #[error("Error parsing CSV: {0}")]
    Import(#[from] ImportError),

    #[error("Export failed: {0}")]
    Export(#[from] ExportWriteError),
}

/// Result type for explorer operations
pub type ExplorerResult<T> = Result<T, ExplorerError>;

/// The query currently shaping the display snapshot
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ActiveQuery {
    #[default]
    None,
    Search(SearchQuery),
    Filter(FieldFilter),
}

/// The explorer controller
///
/// Holds the canonical snapshot built at load time, the display snapshot
/// produced by the latest query, and the selection. Every command runs to
/// completion, stats included, before returning.
#[derive(Debug, Clone, Default)]
pub struct Explorer {
    builder: GraphBuilder,
    canonical: GraphSnapshot,
    display: GraphSnapshot,
    attributes: AttributeTable,
    /// Retained contact rows, kept for export statistics only
    connections: Vec<Record>,
    selected: Option<NodeId>,
    active: ActiveQuery,
    render: RenderOptions,
    stats: ViewStats,
}

impl Explorer {
    /// Create an empty explorer with the default style
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty explorer with a custom style
    pub fn with_style(style: GraphStyle) -> Self {
        Self {
            builder: GraphBuilder::with_style(style),
            ..Default::default()
        }
    }

    /// Create an empty explorer from configuration
    pub fn from_config(config: &ExplorerConfig) -> Self {
        Self::with_style(config.style.clone())
    }

    /// Parse a connections file and replace the dataset
    ///
    /// On a parse failure nothing changes. Returns the number of retained
    /// contact rows.
    pub fn load_text(&mut self, text: &str) -> ExplorerResult<usize> {
        let records = import::load_contacts(text).inspect_err(|e| {
            tracing::warn!(error = %e, "connections file rejected; keeping current graph");
        })?;
        Ok(self.load_records(records))
    }

    /// Replace the dataset with already-parsed records
    pub fn load_records(&mut self, records: Vec<Record>) -> usize {
        let records = import::retain_contacts(records);
        let built = self.builder.build(&records);

        self.display = built.snapshot.clone();
        self.canonical = built.snapshot;
        self.attributes = built.attributes;
        self.connections = records;
        self.selected = None;
        self.active = ActiveQuery::None;
        self.refresh_stats();

        tracing::info!(
            connections = self.connections.len(),
            nodes = self.canonical.node_count(),
            edges = self.canonical.edge_count(),
            "loaded connections"
        );
        self.connections.len()
    }

    /// Show contacts matching free text; always recomputed from the full graph
    pub fn search(&mut self, query: &str) -> &GraphSnapshot {
        let query = SearchQuery::new(query);
        self.display = query.execute(&self.canonical, &self.attributes);
        tracing::debug!(query = query.text(), visible = self.display.node_count(), "search");
        self.active = if query.is_empty() {
            ActiveQuery::None
        } else {
            ActiveQuery::Search(query)
        };
        self.refresh_stats();
        &self.display
    }

    /// Show contacts matching every non-empty term
    pub fn filter(&mut self, company: &str, position: &str, date: &str) -> &GraphSnapshot {
        let filter = FieldFilter::new(company, position, date);
        self.display = filter.execute(&self.canonical, &self.attributes);
        tracing::debug!(?filter, visible = self.display.node_count(), "filter");
        self.active = if filter.is_empty() {
            ActiveQuery::None
        } else {
            ActiveQuery::Filter(filter)
        };
        self.refresh_stats();
        &self.display
    }

    /// Show the whole graph again and drop the selection
    pub fn reset(&mut self) {
        self.display = self.canonical.clone();
        self.selected = None;
        self.active = ActiveQuery::None;
        self.refresh_stats();
    }

    /// Select a node and return its attributes
    ///
    /// An id without an attribute record leaves the selection as it was.
    pub fn select_node(&mut self, id: &NodeId) -> Option<&Attributes> {
        if !self.attributes.contains_key(id) {
            tracing::warn!(node = %id, "selected node has no attribute record");
            return None;
        }
        tracing::debug!(node = %id, "node selected");
        self.selected = Some(id.clone());
        self.attributes.get(id)
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Details panel for the current selection
    pub fn selected_details(&self) -> Option<NodeDetails> {
        let id = self.selected.as_ref()?;
        self.attributes
            .get(id)
            .map(|attrs| NodeDetails::from_attributes(id.clone(), attrs))
    }

    /// Export document for the canonical graph
    pub fn export_document(&self) -> ExportDocument {
        ExportDocument::from_canonical(&self.canonical, &self.attributes, self.connections.len())
    }

    /// Write the export document into `dir`, named after `date`
    pub fn write_export(&self, dir: &Path, date: NaiveDate) -> ExplorerResult<PathBuf> {
        Ok(self.export_document().write_to_dir(dir, date)?)
    }

    /// What the renderer should paint right now
    pub fn render_frame(&self) -> RenderFrame {
        RenderFrame::paint(
            &self.display.nodes,
            &self.display.edges,
            self.selected.as_ref(),
            self.builder.style(),
            self.render,
        )
    }

    /// Apply a command
    pub fn handle(&mut self, command: Command) -> ExplorerResult<Outcome> {
        let outcome = match command {
            Command::LoadFile(text) => {
                let connections = self.load_text(&text)?;
                Outcome::Loaded {
                    connections,
                    stats: self.stats,
                }
            }
            Command::Search(query) => {
                self.search(&query);
                Outcome::Displayed(self.stats)
            }
            Command::Filter {
                company,
                position,
                date,
            } => {
                self.filter(&company, &position, &date);
                Outcome::Displayed(self.stats)
            }
            Command::SelectNode(id) => match self.select_node(&id) {
                Some(attrs) => Outcome::Selected(NodeDetails::from_attributes(id.clone(), attrs)),
                None => Outcome::NotFound(id),
            },
            Command::ClearSelection => {
                self.clear_selection();
                Outcome::SelectionCleared
            }
            Command::Export => Outcome::Exported(self.export_document()),
            Command::Reset => {
                self.reset();
                Outcome::Reset(self.stats)
            }
            Command::SetLayout(layout) => {
                self.render.layout = layout;
                Outcome::RenderChanged(self.render)
            }
            Command::SetClustering(clustering) => {
                self.render.clustering = clustering;
                Outcome::RenderChanged(self.render)
            }
            Command::FetchProfile(url) => Outcome::Status(fetch_profile(&url)),
            Command::ExpandSelected => {
                Outcome::Status(expand_connections(self.selected.as_ref(), &self.attributes))
            }
        };
        Ok(outcome)
    }

    /// Consume the explorer, apply a command, and return the next state
    pub fn transition(mut self, command: Command) -> (Self, ExplorerResult<Outcome>) {
        let outcome = self.handle(command);
        (self, outcome)
    }

    pub fn canonical(&self) -> &GraphSnapshot {
        &self.canonical
    }

    pub fn display(&self) -> &GraphSnapshot {
        &self.display
    }

    pub fn attributes(&self) -> &AttributeTable {
        &self.attributes
    }

    pub fn selected(&self) -> Option<&NodeId> {
        self.selected.as_ref()
    }

    pub fn active_query(&self) -> &ActiveQuery {
        &self.active
    }

    pub fn render_options(&self) -> RenderOptions {
        self.render
    }

    pub fn stats(&self) -> ViewStats {
        self.stats
    }

    /// Retained contact rows from the last load
    pub fn connection_count(&self) -> usize {
        self.connections.len()
    }

    /// Whether a file has been loaded
    pub fn is_loaded(&self) -> bool {
        !self.canonical.is_empty()
    }

    fn refresh_stats(&mut self) {
        self.stats = ViewStats::compute(&self.canonical, &self.display, &self.attributes);
    }
}
