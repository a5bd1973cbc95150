//! Validation of parsed schema documents.
//!
//! The parser is deliberately permissive; this layer reports what it
//! tolerated. Used by `erd validate` after parsing. Foreign-key targets are
//! never resolved here: dangling edges are valid parser output.

mod checks;
mod diagnostic;

pub use diagnostic::{Diagnostic, Severity, ValidationResult};

use crate::types::SchemaDocument;

/// Run all checks against a parsed document.
pub fn validate_document(document: &SchemaDocument) -> ValidationResult {
    let mut result = ValidationResult::new();

    result.merge(checks::check_duplicate_tables(document));
    result.merge(checks::check_duplicate_columns(document));
    result.merge(checks::check_empty_tables(document));
    result.merge(checks::check_childless_domains(document));
    result.merge(checks::check_self_references(document));
    result.merge(checks::check_opaque_constraints(document));

    result
}
