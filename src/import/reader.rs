//! CSV reading for connections exports

use super::record::{Column, Record};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while importing a connections file
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Input has no header row")]
    MissingHeader,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for import operations
pub type ImportResult<T> = Result<T, ImportError>;

/// Parse delimited text with a header row into records
///
/// Empty lines are skipped and rows may be shorter or longer than the
/// header. Columns other than the recognized ones are ignored.
pub fn parse_records(text: &str) -> ImportResult<Vec<Record>> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers = reader.headers()?.clone();
    if headers.iter().all(|h| h.trim().is_empty()) {
        return Err(ImportError::MissingHeader);
    }

    let positions: Vec<(Column, usize)> = Column::ALL
        .iter()
        .filter_map(|&column| {
            headers
                .iter()
                .position(|h| h.trim() == column.header())
                .map(|idx| (column, idx))
        })
        .collect();

    if !positions.iter().any(|(c, _)| *c == Column::FirstName) {
        tracing::warn!("no '{}' column; every row will be dropped", Column::FirstName.header());
    }

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        let mut record = Record::new();
        for &(column, idx) in &positions {
            if let Some(value) = row.get(idx) {
                record.set(column, value);
            }
        }
        records.push(record);
    }

    tracing::debug!(rows = records.len(), "parsed connections file");
    Ok(records)
}

/// Drop rows that do not describe a contact
pub fn retain_contacts(records: Vec<Record>) -> Vec<Record> {
    let total = records.len();
    let kept: Vec<Record> = records.into_iter().filter(Record::is_contact).collect();
    if kept.len() < total {
        tracing::debug!(dropped = total - kept.len(), "dropped non-contact rows");
    }
    kept
}

/// Parse text and keep only contact rows
pub fn load_contacts(text: &str) -> ImportResult<Vec<Record>> {
    Ok(retain_contacts(parse_records(text)?))
}

/// Read a connections file from disk
pub fn read_path(path: impl AsRef<Path>) -> ImportResult<String> {
    Ok(std::fs::read_to_string(path)?)
}
