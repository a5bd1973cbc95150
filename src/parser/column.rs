//! Column grammar.
//!
//! A column line is whitespace-delimited tokens with an optional trailer:
//!
//! ```text
//! <name> <type> <constraint>* [ // <comment> [ | <example> ] ]
//! ```
//!
//! The type is always a single token; types with internal whitespace
//! (`double precision`) are not representable in the notation. Constraint
//! tokens are `PK`, `UK`, `FK(table.column)`, and anything else is kept
//! verbatim as an opaque constraint. The trailer splits on the first `//`
//! and then on the first `|` only, so an example may contain further `|`
//! characters (JSON values, regexes) untouched.

use crate::types::{Column, ColumnRef, Constraint};

/// A recognized constraint token, before it is folded into the column.
#[derive(Debug, Clone, PartialEq, Eq)]
enum ConstraintToken {
    PrimaryKey,
    UniqueKey,
    ForeignKey(ColumnRef),
    Other(String),
}

/// Parse one column line.
///
/// Returns `None` when the line cannot satisfy the grammar (fewer than two
/// tokens before the trailer); callers skip such lines rather than failing
/// the document.
pub fn parse_column(line: &str) -> Option<Column> {
    let (head, trailer) = match line.find("//") {
        Some(at) => (&line[..at], Some(&line[at + 2..])),
        None => (line, None),
    };

    let mut tokens = head.split_whitespace();
    let name = tokens.next()?;
    let column_type = tokens.next()?;

    let mut column = Column::new(name, column_type);

    for token in tokens {
        match constraint_token(token) {
            ConstraintToken::PrimaryKey => column.constraints.push(Constraint::PrimaryKey),
            ConstraintToken::UniqueKey => column.constraints.push(Constraint::UniqueKey),
            ConstraintToken::ForeignKey(target) => {
                column.constraints.push(Constraint::ForeignKey);
                column.foreign_key = Some(target);
            }
            ConstraintToken::Other(raw) => column.constraints.push(Constraint::Other(raw)),
        }
    }

    let (comment, example) = split_trailer(trailer);
    column.comment = comment;
    column.example = example;

    Some(column)
}

/// Classify one constraint token.
fn constraint_token(token: &str) -> ConstraintToken {
    match token {
        "PK" => ConstraintToken::PrimaryKey,
        "UK" => ConstraintToken::UniqueKey,
        _ => match foreign_key_target(token) {
            Some(target) => ConstraintToken::ForeignKey(target),
            None => ConstraintToken::Other(token.to_string()),
        },
    }
}

/// Parse the target out of an `FK(table.column)` token.
///
/// A token that starts like a foreign key but is malformed (no closing
/// paren, no dot, empty table or column part) is not treated as one; the
/// caller keeps it as an opaque constraint instead.
fn foreign_key_target(token: &str) -> Option<ColumnRef> {
    let inner = token.strip_prefix("FK(")?.strip_suffix(')')?;
    let (table, column) = inner.split_once('.')?;
    if table.is_empty() || column.is_empty() {
        return None;
    }
    Some(ColumnRef::new(table, column))
}

/// Split the post-`//` trailer into comment and example.
///
/// Only the first `|` delimits; an empty comment side becomes `None` while
/// an empty example side stays the empty string. Without a `|` there is no
/// example at all.
fn split_trailer(trailer: Option<&str>) -> (Option<String>, Option<String>) {
    let Some(raw) = trailer else {
        return (None, None);
    };

    match raw.split_once('|') {
        Some((comment, example)) => (
            non_empty(comment.trim()),
            Some(example.trim().to_string()),
        ),
        None => (non_empty(raw.trim()), None),
    }
}

fn non_empty(text: &str) -> Option<String> {
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_name_and_type() {
        let column = parse_column("  id int").unwrap();

        assert_eq!(column.name, "id");
        assert_eq!(column.column_type, "int");
        assert!(column.constraints.is_empty());
        assert_eq!(column.foreign_key, None);
        assert_eq!(column.comment, None);
        assert_eq!(column.example, None);
    }

    #[test]
    fn test_parse_primary_key() {
        let column = parse_column("  id int PK").unwrap();

        assert_eq!(column.constraints, vec![Constraint::PrimaryKey]);
    }

    #[test]
    fn test_parse_unique_key() {
        let column = parse_column("  email varchar UK").unwrap();

        assert_eq!(column.constraints, vec![Constraint::UniqueKey]);
    }

    #[test]
    fn test_parse_foreign_key() {
        let column = parse_column("  user_id int FK(users.id)").unwrap();

        assert_eq!(column.constraints, vec![Constraint::ForeignKey]);
        assert_eq!(column.foreign_key, Some(ColumnRef::new("users", "id")));
    }

    #[test]
    fn test_composite_constraints_keep_source_order() {
        let column = parse_column("  sense_id int PK FK(senses.id) // Linked sense").unwrap();

        assert_eq!(
            column.constraints,
            vec![Constraint::PrimaryKey, Constraint::ForeignKey]
        );
        assert_eq!(column.foreign_key, Some(ColumnRef::new("senses", "id")));
        assert_eq!(column.comment.as_deref(), Some("Linked sense"));
    }

    #[test]
    fn test_unknown_token_preserved_verbatim() {
        let column = parse_column("  id int PK AUTOINC").unwrap();

        assert_eq!(
            column.constraints,
            vec![
                Constraint::PrimaryKey,
                Constraint::Other("AUTOINC".to_string())
            ]
        );
    }

    #[test]
    fn test_lowercase_markers_are_opaque() {
        let column = parse_column("  id int pk").unwrap();

        assert_eq!(column.constraints, vec![Constraint::Other("pk".to_string())]);
    }

    #[test]
    fn test_malformed_foreign_key_is_opaque() {
        for token in ["FK(users)", "FK(users.id", "FK(.id)", "FK(users.)", "FK()"] {
            let line = format!("  user_id int {token}");
            let column = parse_column(&line).unwrap();

            assert_eq!(
                column.constraints,
                vec![Constraint::Other(token.to_string())],
                "token {token} should stay opaque"
            );
            assert_eq!(column.foreign_key, None);
        }
    }

    #[test]
    fn test_comment_only() {
        let column = parse_column("  id int PK // Unique identifier").unwrap();

        assert_eq!(column.comment.as_deref(), Some("Unique identifier"));
        assert_eq!(column.example, None);
    }

    #[test]
    fn test_comment_and_example() {
        let column = parse_column("  id int PK // Unique identifier | 42").unwrap();

        assert_eq!(column.comment.as_deref(), Some("Unique identifier"));
        assert_eq!(column.example.as_deref(), Some("42"));
    }

    #[test]
    fn test_example_without_comment() {
        let column = parse_column("  id int PK // | 42").unwrap();

        assert_eq!(column.comment, None);
        assert_eq!(column.example.as_deref(), Some("42"));
    }

    #[test]
    fn test_example_preserved_verbatim() {
        let column = parse_column(r#"  metadata jsonb // Extra data | {"theme": "dark"}"#).unwrap();

        assert_eq!(column.comment.as_deref(), Some("Extra data"));
        assert_eq!(column.example.as_deref(), Some(r#"{"theme": "dark"}"#));
    }

    #[test]
    fn test_only_first_pipe_delimits() {
        let column = parse_column(r#"  flags jsonb // Feature flags | {"a": 1 | 2}"#).unwrap();

        assert_eq!(column.comment.as_deref(), Some("Feature flags"));
        assert_eq!(column.example.as_deref(), Some(r#"{"a": 1 | 2}"#));
    }

    #[test]
    fn test_only_first_marker_starts_trailer() {
        let column = parse_column("  url varchar // Endpoint // with slashes").unwrap();

        assert_eq!(column.comment.as_deref(), Some("Endpoint // with slashes"));
    }

    #[test]
    fn test_trailing_pipe_gives_empty_example() {
        let column = parse_column("  id int // note |").unwrap();

        assert_eq!(column.comment.as_deref(), Some("note"));
        assert_eq!(column.example.as_deref(), Some(""));
    }

    #[test]
    fn test_empty_trailer() {
        let column = parse_column("  id int //").unwrap();

        assert_eq!(column.comment, None);
        assert_eq!(column.example, None);
    }

    #[test]
    fn test_line_without_type_is_rejected() {
        assert_eq!(parse_column("  id"), None);
        assert_eq!(parse_column("  id // orphan comment"), None);
        assert_eq!(parse_column("   "), None);
    }
}
