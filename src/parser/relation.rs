//! Relationship extraction.
//!
//! Runs after assembly, once every table is known. Each foreign-key-bearing
//! column yields one edge from the owning column to its target, in
//! table-then-column scan order. Nothing is deduplicated and targets are not
//! checked for existence; dangling edges are the renderer's concern.

use crate::types::{ColumnRef, Relationship, Table};

/// Derive the relationship edges for a list of assembled tables.
pub fn resolve_relationships(tables: &[Table]) -> Vec<Relationship> {
    let mut relationships = Vec::new();

    for table in tables {
        for column in &table.columns {
            if let Some(target) = &column.foreign_key {
                relationships.push(Relationship {
                    from: ColumnRef::new(table.name.clone(), column.name.clone()),
                    to: target.clone(),
                });
            }
        }
    }

    relationships
}
