//! Core model types for erd.
//!
//! The output side of the parser:
//! - `SchemaDocument` - the complete parse result
//! - `Domain` / `Table` / `Column` - the declared entities
//! - `Constraint` / `ColumnRef` / `Relationship` - markers and derived edges

mod column;
mod schema;
mod table;

pub use column::{Column, ColumnRef, Constraint};
pub use schema::{Domain, Relationship, SchemaDocument};
pub use table::Table;
