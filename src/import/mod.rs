//! Import of exported connections files
//!
//! Text goes in, contact records come out. Parsing is delegated to the
//! `csv` crate; this module maps its rows onto [`Record`] and drops rows
//! that do not describe a contact.

mod reader;
mod record;

pub use reader::{load_contacts, parse_records, read_path, retain_contacts, ImportError, ImportResult};
pub use record::{Column, Record, NOTES_SENTINEL};
