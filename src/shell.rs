//! Line-oriented shell: text in, explorer commands out
//!
//! The shell is the UI adapter. It parses lines into [`ShellCommand`]s,
//! performs the file I/O the controller stays out of, and prints outcomes.

use crate::config::ExplorerConfig;
use crate::explorer::{Command, Explorer, LayoutMode, Outcome};
use crate::graph::NodeId;
use crate::import;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use thiserror::Error;

/// Errors from parsing a shell line
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ShellError {
    #[error("unknown command '{0}' (try 'help')")]
    UnknownCommand(String),

    #[error("'{0}' needs an argument")]
    MissingArgument(&'static str),

    #[error("invalid value for '{command}': {message}")]
    InvalidValue {
        command: &'static str,
        message: String,
    },
}

/// A parsed shell line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    /// Forwarded to the explorer as-is
    Explorer(Command),
    /// Read a file, then load it
    Load(PathBuf),
    /// Print the selection's details
    Show,
    /// Print the displayed contacts
    List,
    Stats,
    /// Write the export file, optionally into a given directory
    Export(Option<PathBuf>),
    Help,
    Quit,
}

pub const HELP: &str = "\
commands:
  load <path>                         import a connections CSV
  search [text]                       free-text search (empty shows all)
  filter [company=..] [position=..] [date=..]
  select <node-id>                    select a node
  clear                               clear the selection
  show                                details of the selected node
  list                                displayed contacts
  stats                               contact and company counts
  export [dir]                        write the JSON export
  reset                               show everything, clear selection
  layout force|force3d                renderer layout
  cluster on|off                      renderer clustering
  fetch <url>                         fetch a live profile (unavailable)
  expand                              expand the selected node (unavailable)
  help | quit";

/// Parse one line; blank lines yield `None`
pub fn parse_line(line: &str) -> Result<Option<ShellCommand>, ShellError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word.to_ascii_lowercase().as_str() {
        "load" => ShellCommand::Load(PathBuf::from(required(rest, "load")?)),
        "search" => ShellCommand::Explorer(Command::Search(rest.to_string())),
        "filter" => parse_filter(rest)?,
        "select" => ShellCommand::Explorer(Command::SelectNode(NodeId::from_string(required(
            rest, "select",
        )?))),
        "clear" => ShellCommand::Explorer(Command::ClearSelection),
        "reset" => ShellCommand::Explorer(Command::Reset),
        "layout" => {
            let layout = required(rest, "layout")?
                .parse::<LayoutMode>()
                .map_err(|message| ShellError::InvalidValue {
                    command: "layout",
                    message,
                })?;
            ShellCommand::Explorer(Command::SetLayout(layout))
        }
        "cluster" => {
            let on = match required(rest, "cluster")?.to_ascii_lowercase().as_str() {
                "on" | "true" | "yes" => true,
                "off" | "false" | "no" => false,
                other => {
                    return Err(ShellError::InvalidValue {
                        command: "cluster",
                        message: format!("expected on or off, got '{}'", other),
                    })
                }
            };
            ShellCommand::Explorer(Command::SetClustering(on))
        }
        "fetch" => ShellCommand::Explorer(Command::FetchProfile(rest.to_string())),
        "expand" => ShellCommand::Explorer(Command::ExpandSelected),
        "show" => ShellCommand::Show,
        "list" => ShellCommand::List,
        "stats" => ShellCommand::Stats,
        "export" => ShellCommand::Export((!rest.is_empty()).then(|| PathBuf::from(rest))),
        "help" | "?" => ShellCommand::Help,
        "quit" | "exit" => ShellCommand::Quit,
        other => return Err(ShellError::UnknownCommand(other.to_string())),
    };
    Ok(Some(command))
}

fn required<'a>(rest: &'a str, command: &'static str) -> Result<&'a str, ShellError> {
    if rest.is_empty() {
        Err(ShellError::MissingArgument(command))
    } else {
        Ok(rest)
    }
}

/// `company=acme corp position=eng`: a value runs until the next `key=`
fn parse_filter(rest: &str) -> Result<ShellCommand, ShellError> {
    const KEYS: [&str; 3] = ["company", "position", "date"];
    let mut terms: [String; 3] = Default::default();
    let mut current: Option<usize> = None;

    for token in rest.split_whitespace() {
        let keyed = token.split_once('=').and_then(|(key, value)| {
            KEYS.iter()
                .position(|k| k.eq_ignore_ascii_case(key))
                .map(|slot| (slot, value))
        });

        match (keyed, current) {
            (Some((slot, value)), _) => {
                terms[slot] = value.to_string();
                current = Some(slot);
            }
            (None, Some(slot)) => {
                if !terms[slot].is_empty() {
                    terms[slot].push(' ');
                }
                terms[slot].push_str(token);
            }
            (None, None) => {
                return Err(ShellError::InvalidValue {
                    command: "filter",
                    message: format!("expected company=, position= or date=, got '{}'", token),
                })
            }
        }
    }

    let [company, position, date] = terms;
    Ok(ShellCommand::Explorer(Command::Filter {
        company,
        position,
        date,
    }))
}

/// Interactive session over any reader and writer
pub struct Shell<'a> {
    explorer: Explorer,
    config: &'a ExplorerConfig,
}

impl<'a> Shell<'a> {
    pub fn new(explorer: Explorer, config: &'a ExplorerConfig) -> Self {
        Self { explorer, config }
    }

    pub fn explorer(&self) -> &Explorer {
        &self.explorer
    }

    /// Read lines until EOF or `quit`
    ///
    /// Bad lines and failed commands are reported and the session goes on.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> std::io::Result<()> {
        for line in input.lines() {
            let line = line?;
            match parse_line(&line) {
                Ok(None) => {}
                Ok(Some(ShellCommand::Quit)) => break,
                Ok(Some(command)) => self.execute(command, &mut output)?,
                Err(e) => writeln!(output, "error: {}", e)?,
            }
        }
        Ok(())
    }

    /// Execute one parsed command
    pub fn execute<W: Write>(&mut self, command: ShellCommand, output: &mut W) -> std::io::Result<()> {
        match command {
            ShellCommand::Explorer(command) => self.dispatch(command, output),
            ShellCommand::Load(path) => match import::read_path(&path) {
                Ok(text) => self.dispatch(Command::LoadFile(text), output),
                Err(e) => writeln!(output, "error: {}: {}", path.display(), e),
            },
            ShellCommand::Show => match self.explorer.selected_details() {
                Some(details) => write!(output, "{}", details),
                None => writeln!(output, "Click on a node to view details"),
            },
            ShellCommand::List => {
                for node in &self.explorer.display().nodes {
                    let attrs = self.explorer.attributes().get(&node.id);
                    let company = attrs.map(|a| a.company.as_str()).unwrap_or("");
                    writeln!(output, "{:<10} {:<22} {}", node.id.as_str(), node.label, company)?;
                }
                Ok(())
            }
            ShellCommand::Stats => {
                let stats = self.explorer.stats();
                writeln!(
                    output,
                    "contacts: {}  visible: {}  companies: {}",
                    stats.total_contacts, stats.visible_contacts, stats.companies
                )
            }
            ShellCommand::Export(dir) => {
                let dir = dir.unwrap_or_else(|| self.config.export_dir());
                let today = chrono::Local::now().date_naive();
                match self.explorer.write_export(&dir, today) {
                    Ok(path) => writeln!(output, "Graph exported to {}", path.display()),
                    Err(e) => writeln!(output, "error: {}", e),
                }
            }
            ShellCommand::Help => writeln!(output, "{}", HELP),
            ShellCommand::Quit => Ok(()),
        }
    }

    fn dispatch<W: Write>(&mut self, command: Command, output: &mut W) -> std::io::Result<()> {
        match self.explorer.handle(command) {
            Ok(outcome) => print_outcome(&outcome, output),
            Err(e) => writeln!(output, "error: {}", e),
        }
    }
}

fn print_outcome<W: Write>(outcome: &Outcome, output: &mut W) -> std::io::Result<()> {
    match outcome {
        Outcome::Loaded { connections, .. } => writeln!(output, "Loaded {} connections", connections),
        Outcome::Displayed(stats) | Outcome::Reset(stats) => writeln!(
            output,
            "showing {} of {} contacts",
            stats.visible_contacts, stats.total_contacts
        ),
        Outcome::Selected(details) => write!(output, "{}", details),
        Outcome::NotFound(id) => writeln!(output, "no node '{}'", id),
        Outcome::SelectionCleared => writeln!(output, "selection cleared"),
        Outcome::Exported(doc) => writeln!(output, "{} nodes, {} edges", doc.stats.total_nodes, doc.stats.total_edges),
        Outcome::RenderChanged(options) => writeln!(
            output,
            "layout: {:?}  clustering: {}",
            options.layout,
            if options.clustering { "on" } else { "off" }
        ),
        Outcome::Status(status) => writeln!(output, "{}", status),
    }
}
