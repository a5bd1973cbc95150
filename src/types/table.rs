//! Table model: a named, optionally domain-tagged list of columns.

use serde::{Deserialize, Serialize};

use super::column::Column;

/// A table declaration and its columns.
///
/// `domain` is a snapshot of the domain that was current when the table
/// header was read, or `None` for tables declared before any domain header.
/// Column order is source order and is semantically significant: diagram
/// consumers anchor connector rows by column index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    pub name: String,
    pub domain: Option<String>,
    pub columns: Vec<Column>,
}

impl Table {
    /// Create an empty table.
    pub fn new(name: impl Into<String>, domain: Option<String>) -> Self {
        Self {
            name: name.into(),
            domain,
            columns: Vec::new(),
        }
    }

    /// Look up a column by name.
    pub fn find_column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// The first column carrying a `PK` marker, if any.
    pub fn primary_key(&self) -> Option<&Column> {
        self.columns.iter().find(|c| c.is_primary_key())
    }
}
