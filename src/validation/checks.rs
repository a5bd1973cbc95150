//! Individual validation checks over a parsed schema document.
//!
//! The parser itself never rejects input, so everything an author might
//! want to hear about lands here. Checks never inspect whether a
//! foreign-key target exists: dangling edges are legal output, and the
//! renderer drops edges it cannot anchor.

use std::collections::HashSet;

use crate::types::{Constraint, SchemaDocument};

use super::diagnostic::{Diagnostic, ValidationResult};

/// Tables sharing a name make name-based relationship anchoring ambiguous.
pub(crate) fn check_duplicate_tables(document: &SchemaDocument) -> ValidationResult {
    let mut result = ValidationResult::new();
    let mut seen = HashSet::new();

    for table in &document.tables {
        if !seen.insert(table.name.as_str()) {
            result.push(
                Diagnostic::error(
                    "erd::check::duplicate-table",
                    format!("table '{}' is declared more than once", table.name),
                )
                .with_help("Rename one of the declarations; relationships anchor by table name"),
            );
        }
    }

    result
}

/// Columns sharing a name within one table are equally ambiguous.
pub(crate) fn check_duplicate_columns(document: &SchemaDocument) -> ValidationResult {
    let mut result = ValidationResult::new();

    for table in &document.tables {
        let mut seen = HashSet::new();
        for column in &table.columns {
            if !seen.insert(column.name.as_str()) {
                result.push(Diagnostic::error(
                    "erd::check::duplicate-column",
                    format!(
                        "table '{}' declares column '{}' more than once",
                        table.name, column.name
                    ),
                ));
            }
        }
    }

    result
}

/// A table with no columns renders as an empty box.
pub(crate) fn check_empty_tables(document: &SchemaDocument) -> ValidationResult {
    let mut result = ValidationResult::new();

    for table in &document.tables {
        if table.columns.is_empty() {
            result.push(
                Diagnostic::warning(
                    "erd::check::empty-table",
                    format!("table '{}' has no columns", table.name),
                )
                .with_help("Indent at least one `name type` line under the table header"),
            );
        }
    }

    result
}

/// A domain header that no table ended up under.
pub(crate) fn check_childless_domains(document: &SchemaDocument) -> ValidationResult {
    let mut result = ValidationResult::new();

    for domain in &document.domains {
        let used = document
            .tables
            .iter()
            .any(|t| t.domain.as_deref() == Some(domain.name.as_str()));
        if !used {
            result.push(Diagnostic::warning(
                "erd::check::childless-domain",
                format!("domain '{}' groups no tables", domain.name),
            ));
        }
    }

    result
}

/// A column whose foreign key points back at itself.
pub(crate) fn check_self_references(document: &SchemaDocument) -> ValidationResult {
    let mut result = ValidationResult::new();

    for table in &document.tables {
        for column in &table.columns {
            let Some(target) = &column.foreign_key else {
                continue;
            };
            if target.table == table.name && target.column == column.name {
                result.push(Diagnostic::warning(
                    "erd::check::self-reference",
                    format!("column '{}.{}' references itself", table.name, column.name),
                ));
            }
        }
    }

    result
}

/// Constraint tokens nobody recognizes are kept in the output, but an
/// author probably meant `PK`, `UK` or `FK(...)`.
pub(crate) fn check_opaque_constraints(document: &SchemaDocument) -> ValidationResult {
    let mut result = ValidationResult::new();

    for table in &document.tables {
        for column in &table.columns {
            for constraint in &column.constraints {
                if let Constraint::Other(raw) = constraint {
                    result.push(
                        Diagnostic::warning(
                            "erd::check::unknown-constraint",
                            format!(
                                "column '{}.{}' carries unrecognized constraint token '{}'",
                                table.name, column.name, raw
                            ),
                        )
                        .with_help("Recognized markers are PK, UK and FK(table.column)"),
                    );
                }
            }
        }
    }

    result
}
