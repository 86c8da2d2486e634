//! contact-graph CLI: explore an exported connections CSV.
//!
//! Usage:
//!   contact-graph summary <csv>
//!   contact-graph search <csv> <query> [--json]
//!   contact-graph filter <csv> [--company ..] [--position ..] [--date ..] [--json]
//!   contact-graph show <csv> <node-id>
//!   contact-graph export <csv> [--out dir]
//!   contact-graph shell [csv]
//!   contact-graph generate [--out path] [--seed n] [--until YYYY-MM-DD]

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use contact_graph::import;
use contact_graph::sample::{self, SampleGenerator, SampleReport};
use contact_graph::shell::Shell;
use contact_graph::{Explorer, ExplorerConfig, GraphSnapshot, NodeDetails, NodeId};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "contact-graph",
    version,
    about = "Explore an exported connections file as a star graph"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Path to a YAML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Load a file and print contact and company counts
    Summary {
        /// Connections CSV
        csv: PathBuf,
    },
    /// Free-text search over name, company, position and email
    Search {
        /// Connections CSV
        csv: PathBuf,
        /// Text to look for
        query: String,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Filter by company, position and connection date
    Filter {
        /// Connections CSV
        csv: PathBuf,
        #[arg(long, default_value = "")]
        company: String,
        #[arg(long, default_value = "")]
        position: String,
        #[arg(long, default_value = "")]
        date: String,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Print the details of one node
    Show {
        /// Connections CSV
        csv: PathBuf,
        /// Node id, e.g. node_3 or central
        id: String,
    },
    /// Write the JSON export
    Export {
        /// Connections CSV
        csv: PathBuf,
        /// Output directory (defaults to the configured export dir)
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Interactive shell reading commands from stdin
    Shell {
        /// Connections CSV to load first
        csv: Option<PathBuf>,
    },
    /// Write a synthetic connections file to try the explorer with
    Generate {
        /// Output file
        #[arg(long, default_value = sample::DEFAULT_FILE_NAME)]
        out: PathBuf,
        /// Seed for a reproducible file
        #[arg(long)]
        seed: Option<u64>,
        /// Last connection date (YYYY-MM-DD), 2025-12-05 by default
        #[arg(long)]
        until: Option<NaiveDate>,
    },
}

#[derive(Serialize)]
struct ContactRow<'a> {
    id: &'a str,
    name: &'a str,
    company: &'a str,
    position: &'a str,
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn open_explorer(config: &ExplorerConfig, csv: &Path) -> Result<Explorer, String> {
    let text = import::read_path(csv).map_err(|e| format!("cannot read '{}': {}", csv.display(), e))?;
    let mut explorer = Explorer::from_config(config);
    explorer.load_text(&text).map_err(|e| e.to_string())?;
    Ok(explorer)
}

fn print_contacts(explorer: &Explorer, snapshot: &GraphSnapshot, json: bool) -> i32 {
    let rows: Vec<ContactRow> = snapshot
        .nodes
        .iter()
        .filter(|n| !n.id.is_central())
        .filter_map(|n| {
            explorer.attributes().get(&n.id).map(|a| ContactRow {
                id: n.id.as_str(),
                name: &a.name,
                company: &a.company,
                position: &a.position,
            })
        })
        .collect();

    if json {
        match serde_json::to_string_pretty(&rows) {
            Ok(text) => println!("{}", text),
            Err(e) => {
                eprintln!("Error: {}", e);
                return 1;
            }
        }
        return 0;
    }

    if rows.is_empty() {
        println!("No matching contacts.");
        return 0;
    }
    println!("{:<10}  {:<28}  {:<24}  {}", "ID", "NAME", "COMPANY", "POSITION");
    println!("{}", "-".repeat(88));
    for row in &rows {
        println!(
            "{:<10}  {:<28}  {:<24}  {}",
            row.id, row.name, row.company, row.position
        );
    }
    println!("\n{} of {} contacts", rows.len(), explorer.stats().total_contacts);
    0
}

fn cmd_summary(explorer: &Explorer) -> i32 {
    let stats = explorer.stats();
    println!("Connections: {}", explorer.connection_count());
    println!("Contacts:    {}", stats.total_contacts);
    println!("Companies:   {}", stats.companies);
    println!("Edges:       {}", explorer.canonical().edge_count());
    0
}

fn cmd_show(explorer: &mut Explorer, id: &str) -> i32 {
    let id = NodeId::from_string(id);
    match explorer.select_node(&id) {
        Some(attrs) => {
            print!("{}", NodeDetails::from_attributes(id.clone(), attrs));
            0
        }
        None => {
            eprintln!("Error: node '{}' not found", id);
            1
        }
    }
}

fn cmd_export(explorer: &Explorer, config: &ExplorerConfig, out: Option<PathBuf>) -> i32 {
    let dir = out.unwrap_or_else(|| config.export_dir());
    let today = chrono::Local::now().date_naive();
    match explorer.write_export(&dir, today) {
        Ok(path) => {
            println!("Graph exported to {}", path.display());
            0
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

fn cmd_shell(config: &ExplorerConfig, csv: Option<PathBuf>) -> i32 {
    let explorer = match csv {
        Some(path) => match open_explorer(config, &path) {
            Ok(explorer) => {
                println!("Loaded {} connections", explorer.connection_count());
                explorer
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                return 1;
            }
        },
        None => {
            println!("Type 'load <path>' to import your Connections.csv, 'help' for commands.");
            Explorer::from_config(config)
        }
    };

    let mut shell = Shell::new(explorer, config);
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    match shell.run(stdin.lock(), stdout.lock()) {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

fn cmd_generate(out: &Path, seed: Option<u64>, until: Option<NaiveDate>) -> i32 {
    let mut generator = SampleGenerator::new(seed);
    if let Some(until) = until {
        generator = generator.with_end(until);
    }
    let records = generator.generate();

    if let Err(e) = sample::write_file(&records, out) {
        eprintln!("Error: cannot write '{}': {}", out.display(), e);
        return 1;
    }
    println!("Saved to {}\n", out.display());
    print!("{}", SampleReport::from_records(&records));
    0
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = match ExplorerConfig::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let code = match cli.command {
        Commands::Shell { csv } => cmd_shell(&config, csv),
        Commands::Generate { out, seed, until } => cmd_generate(&out, seed, until),
        Commands::Summary { csv } => match open_explorer(&config, &csv) {
            Ok(explorer) => cmd_summary(&explorer),
            Err(e) => fail(&e),
        },
        Commands::Search { csv, query, json } => match open_explorer(&config, &csv) {
            Ok(mut explorer) => {
                let shown = explorer.search(&query).clone();
                print_contacts(&explorer, &shown, json)
            }
            Err(e) => fail(&e),
        },
        Commands::Filter {
            csv,
            company,
            position,
            date,
            json,
        } => match open_explorer(&config, &csv) {
            Ok(mut explorer) => {
                let shown = explorer.filter(&company, &position, &date).clone();
                print_contacts(&explorer, &shown, json)
            }
            Err(e) => fail(&e),
        },
        Commands::Show { csv, id } => match open_explorer(&config, &csv) {
            Ok(mut explorer) => cmd_show(&mut explorer, &id),
            Err(e) => fail(&e),
        },
        Commands::Export { csv, out } => match open_explorer(&config, &csv) {
            Ok(explorer) => cmd_export(&explorer, &config, out),
            Err(e) => fail(&e),
        },
    };
    std::process::exit(code);
}

fn fail(message: &str) -> i32 {
    eprintln!("Error: {}", message);
    1
}
