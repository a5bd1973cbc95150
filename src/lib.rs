//! erd - compact ER schema notation parser
//!
//! A library and CLI for turning indentation-based entity-relationship
//! notation into structured schema documents for diagram renderers.

pub mod cli;
pub mod discovery;
pub mod error;
pub mod output;
pub mod parser;
pub mod types;
pub mod validation;

pub use discovery::{discover, discover_paths, is_schema_file};
pub use error::{ErdError, Result};
pub use parser::{parse_column, parse_schema, resolve_relationships};
pub use types::{
    Column, ColumnRef, Constraint, Domain, Relationship, SchemaDocument, Table,
};
pub use validation::{validate_document, Diagnostic, Severity, ValidationResult};
