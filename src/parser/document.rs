//! Document assembly.
//!
//! A single pass over the classified lines, driven by a two-state machine:
//! before the first table header, column lines have no owner and are
//! dropped; afterwards they append to the table opened by the most recent
//! header. Domain headers update the domain snapshot applied to subsequent
//! tables without touching tables already created.
//!
//! Malformed lines are skipped, never fatal. The notation is authored by
//! hand inside documentation, and one typo must not blank out a whole
//! diagram.

use crate::types::{Domain, SchemaDocument, Table};

use super::column::parse_column;
use super::line::{classify, Line};
use super::relation::resolve_relationships;

/// Which table, if any, column lines currently append to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// No table header seen yet.
    BeforeAnyTable,
    /// Filling the table at this index in the output list.
    InTable(usize),
}

/// Parse schema notation text into a [`SchemaDocument`].
///
/// Pure and deterministic: no state survives between calls, and the same
/// input always produces a deep-equal document. Unparseable lines are
/// ignored rather than reported.
pub fn parse_schema(source: &str) -> SchemaDocument {
    let mut domains: Vec<Domain> = Vec::new();
    let mut tables: Vec<Table> = Vec::new();
    let mut current_domain: Option<String> = None;
    let mut state = State::BeforeAnyTable;

    for raw in source.lines() {
        match classify(raw) {
            Line::Blank => {}
            Line::DomainHeader(name) => {
                if !domains.iter().any(|d| d.name == name) {
                    domains.push(Domain::new(name));
                }
                current_domain = Some(name.to_string());
            }
            Line::TableHeader(name) => {
                tables.push(Table::new(name, current_domain.clone()));
                state = State::InTable(tables.len() - 1);
            }
            Line::Column(text) => match state {
                // No owner yet; the line is dropped.
                State::BeforeAnyTable => {}
                State::InTable(index) => {
                    if let Some(column) = parse_column(text) {
                        tables[index].columns.push(column);
                    }
                }
            },
        }
    }

    let relationships = resolve_relationships(&tables);

    SchemaDocument {
        domains,
        tables,
        relationships,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::types::{ColumnRef, Constraint};

    #[test]
    fn test_single_table() {
        let document = parse_schema("users\n  id int PK\n  name varchar\n");

        assert_eq!(document.tables.len(), 1);
        let users = &document.tables[0];
        assert_eq!(users.name, "users");
        assert_eq!(users.domain, None);
        assert_eq!(users.columns.len(), 2);

        let id = &users.columns[0];
        assert_eq!(id.name, "id");
        assert_eq!(id.column_type, "int");
        assert_eq!(id.constraints, vec![Constraint::PrimaryKey]);
        assert_eq!(id.foreign_key, None);
        assert_eq!(id.comment, None);
        assert_eq!(id.example, None);

        assert_eq!(users.columns[1].name, "name");
    }

    #[test]
    fn test_parse_is_deterministic() {
        let source = "--- A ---\nusers\n  id int PK // Unique identifier | 42\nposts\n  user_id int FK(users.id)\n";

        assert_eq!(parse_schema(source), parse_schema(source));
    }

    #[test]
    fn test_column_order_is_source_order() {
        let document = parse_schema("t\n  c varchar\n  a int\n  b text\n");

        let names: Vec<&str> = document.tables[0]
            .columns
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(names, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_foreign_key_becomes_relationship() {
        let document = parse_schema("posts\n  user_id int FK(users.id) // Author | 123\n");

        let column = &document.tables[0].columns[0];
        assert_eq!(column.constraints, vec![Constraint::ForeignKey]);
        assert_eq!(column.foreign_key, Some(ColumnRef::new("users", "id")));
        assert_eq!(column.comment.as_deref(), Some("Author"));
        assert_eq!(column.example.as_deref(), Some("123"));

        assert_eq!(document.relationships.len(), 1);
        assert_eq!(
            document.relationships[0].from,
            ColumnRef::new("posts", "user_id")
        );
        assert_eq!(document.relationships[0].to, ColumnRef::new("users", "id"));
    }

    #[test]
    fn test_domain_sectioning() {
        let document = parse_schema("--- A ---\nt1\n  c1 int\n\n--- B ---\nt2\n  c2 int\n");

        let domain_names: Vec<&str> =
            document.domains.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(domain_names, vec!["A", "B"]);

        assert_eq!(document.tables[0].domain.as_deref(), Some("A"));
        assert_eq!(document.tables[1].domain.as_deref(), Some("B"));
    }

    #[test]
    fn test_table_before_any_domain_has_none() {
        let document = parse_schema("early\n  id int\n--- Late ---\nlater\n  id int\n");

        assert_eq!(document.tables[0].domain, None);
        assert_eq!(document.tables[1].domain.as_deref(), Some("Late"));
    }

    #[test]
    fn test_domain_recorded_once_in_first_seen_order() {
        let document = parse_schema(
            "--- B ---\nt1\n  c int\n--- A ---\nt2\n  c int\n--- B ---\nt3\n  c int\n",
        );

        let domain_names: Vec<&str> =
            document.domains.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(domain_names, vec!["B", "A"]);
        assert_eq!(document.tables[2].domain.as_deref(), Some("B"));
    }

    #[test]
    fn test_column_before_any_table_is_dropped() {
        let document = parse_schema("  orphan int PK\nusers\n  id int\n");

        assert_eq!(document.tables.len(), 1);
        assert_eq!(document.tables[0].columns.len(), 1);
        assert_eq!(document.tables[0].columns[0].name, "id");
    }

    #[test]
    fn test_malformed_column_line_is_skipped() {
        let document = parse_schema("users\n  justonetoken\n  id int\n");

        let names: Vec<&str> = document.tables[0]
            .columns
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(names, vec!["id"]);
    }

    #[test]
    fn test_columns_after_domain_header_stay_with_open_table() {
        // A domain header does not close the active table; only the next
        // table header does.
        let document = parse_schema("t1\n  a int\n--- D ---\n  b int\nt2\n  c int\n");

        assert_eq!(document.tables[0].columns.len(), 2);
        assert_eq!(document.tables[1].domain.as_deref(), Some("D"));
        assert_eq!(document.tables[1].columns.len(), 1);
    }

    #[test]
    fn test_blank_lines_between_tables() {
        let document = parse_schema("users\n  id int\n\n\nposts\n  id int\n");

        assert_eq!(document.tables.len(), 2);
        assert_eq!(document.tables[0].columns.len(), 1);
        assert_eq!(document.tables[1].columns.len(), 1);
    }

    #[test]
    fn test_empty_input() {
        let document = parse_schema("");

        assert!(document.is_empty());
        assert!(document.relationships.is_empty());
    }

    #[test]
    fn test_metadata_defaults_to_none() {
        let document = parse_schema("users\n  id int\n  email varchar UK\n");

        for column in &document.tables[0].columns {
            assert_eq!(column.comment, None);
            assert_eq!(column.example, None);
        }
    }

    #[test]
    fn test_relationship_order_and_no_dedup() {
        let source = "\
users
  id int PK

posts
  id int PK
  author_id int FK(users.id)
  editor_id int FK(users.id)

comments
  post_id int FK(posts.id)
";
        let document = parse_schema(source);

        let edges: Vec<(String, String)> = document
            .relationships
            .iter()
            .map(|r| (r.from.to_string(), r.to.to_string()))
            .collect();

        assert_eq!(
            edges,
            vec![
                ("posts.author_id".to_string(), "users.id".to_string()),
                ("posts.editor_id".to_string(), "users.id".to_string()),
                ("comments.post_id".to_string(), "posts.id".to_string()),
            ]
        );
    }

    #[test]
    fn test_full_document() {
        let source = "\
--- Identity ---
users
  id int PK // Unique identifier | 42
  email varchar UK // Login address | \"jane@example.com\"
  settings jsonb // Preferences | {\"theme\": \"dark\"}

--- Content ---
posts
  id int PK
  user_id int FK(users.id) // Author | 123
  title varchar
";
        let document = parse_schema(source);

        assert_eq!(document.domains.len(), 2);
        assert_eq!(document.table_count(), 2);
        assert_eq!(document.column_count(), 6);

        let users = document.find_table("users").unwrap();
        assert_eq!(
            users.find_column("settings").unwrap().example.as_deref(),
            Some(r#"{"theme": "dark"}"#)
        );
        assert_eq!(users.primary_key().unwrap().name, "id");

        assert_eq!(document.relationships.len(), 1);
    }
}
