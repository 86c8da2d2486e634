//! Record: one row of an exported connections file

use serde::{Deserialize, Serialize};

/// First Name value of the legend row some exports append after the data
pub const NOTES_SENTINEL: &str = "Notes:";

/// A recognized column of the connections export
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    FirstName,
    LastName,
    Url,
    EmailAddress,
    Company,
    Position,
    ConnectedOn,
}

impl Column {
    /// Every recognized column, in export order
    pub const ALL: [Column; 7] = [
        Column::FirstName,
        Column::LastName,
        Column::Url,
        Column::EmailAddress,
        Column::Company,
        Column::Position,
        Column::ConnectedOn,
    ];

    /// Header text of the column
    pub fn header(self) -> &'static str {
        match self {
            Column::FirstName => "First Name",
            Column::LastName => "Last Name",
            Column::Url => "URL",
            Column::EmailAddress => "Email Address",
            Column::Company => "Company",
            Column::Position => "Position",
            Column::ConnectedOn => "Connected On",
        }
    }
}

/// One imported row
///
/// Each field is `None` when the column was missing or the cell was empty.
/// Readers go through [`Record::get`], which maps absence to `""`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub url: Option<String>,
    pub email_address: Option<String>,
    pub company: Option<String>,
    pub position: Option<String>,
    pub connected_on: Option<String>,
}

impl Record {
    /// Create an empty record
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a column value; empty values are stored as absent
    pub fn with(mut self, column: Column, value: impl Into<String>) -> Self {
        self.set(column, value);
        self
    }

    /// Set a column value in place
    pub fn set(&mut self, column: Column, value: impl Into<String>) {
        let value: String = value.into();
        *self.slot(column) = if value.is_empty() { None } else { Some(value) };
    }

    /// Value of a column, `""` when absent
    pub fn get(&self, column: Column) -> &str {
        let value = match column {
            Column::FirstName => &self.first_name,
            Column::LastName => &self.last_name,
            Column::Url => &self.url,
            Column::EmailAddress => &self.email_address,
            Column::Company => &self.company,
            Column::Position => &self.position,
            Column::ConnectedOn => &self.connected_on,
        };
        value.as_deref().unwrap_or("")
    }

    /// `first last`, trimmed; empty when neither part carries text
    pub fn full_name(&self) -> String {
        format!("{} {}", self.get(Column::FirstName), self.get(Column::LastName))
            .trim()
            .to_string()
    }

    /// Whether this row describes a contact rather than filler
    ///
    /// Rows whose First Name is empty, blank, or the legend sentinel are not
    /// contacts.
    pub fn is_contact(&self) -> bool {
        let first = self.get(Column::FirstName);
        !first.trim().is_empty() && first != NOTES_SENTINEL
    }

    fn slot(&mut self, column: Column) -> &mut Option<String> {
        match column {
            Column::FirstName => &mut self.first_name,
            Column::LastName => &mut self.last_name,
            Column::Url => &mut self.url,
            Column::EmailAddress => &mut self.email_address,
            Column::Company => &mut self.company,
            Column::Position => &mut self.position,
            Column::ConnectedOn => &mut self.connected_on,
        }
    }
}
