//! Top-level schema document: domains, tables and derived relationships.

use serde::{Deserialize, Serialize};

use super::column::ColumnRef;
use super::table::Table;

/// A named grouping of tables, introduced by a `--- NAME ---` delimiter line.
///
/// Domains carry no structural constraint on tables; consumers use them
/// purely for visual sectioning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Domain {
    pub name: String,
}

impl Domain {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// A directed edge derived from a foreign-key column.
///
/// `from` is the owning column, `to` the referenced target. The target is
/// not checked for existence; an edge may point at a table or column absent
/// from the document, and the renderer skips edges it cannot anchor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relationship {
    pub from: ColumnRef,
    pub to: ColumnRef,
}

/// The parsed form of one schema notation text.
///
/// Domains appear in first-seen order, tables and columns in source order,
/// relationships in table-then-column scan order. Built once per parse and
/// never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaDocument {
    pub domains: Vec<Domain>,
    pub tables: Vec<Table>,
    pub relationships: Vec<Relationship>,
}

impl SchemaDocument {
    /// Look up a table by name.
    pub fn find_table(&self, name: &str) -> Option<&Table> {
        self.tables.iter().find(|t| t.name == name)
    }

    pub fn table_count(&self) -> usize {
        self.tables.len()
    }

    /// Total number of columns across all tables.
    pub fn column_count(&self) -> usize {
        self.tables.iter().map(|t| t.columns.len()).sum()
    }

    /// Whether the document holds no tables and no domains.
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty() && self.domains.is_empty()
    }
}
