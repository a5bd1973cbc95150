//! Column model: name, type, constraints and trailing metadata.
//!
//! A column is one indented line of notation:
//!
//! ```text
//!   user_id int PK FK(users.id) // Author of the post | 123
//! ```

use std::fmt;

use serde::de::{Deserializer, Error as _};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

/// A `table.column` name pair.
///
/// Used both as a foreign-key target and as a relationship endpoint.
/// Renderers resolve these by name, not by index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnRef {
    pub table: String,
    pub column: String,
}

impl ColumnRef {
    pub fn new(table: impl Into<String>, column: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            column: column.into(),
        }
    }
}

impl fmt::Display for ColumnRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.table, self.column)
    }
}

/// A constraint marker on a column.
///
/// The recognized markers form a closed set; anything else found on a column
/// line is preserved verbatim as `Other` rather than dropped, so no source
/// data is lost between the notation and its consumers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Constraint {
    /// `PK` — primary key.
    PrimaryKey,
    /// `UK` — unique key.
    UniqueKey,
    /// `FK(table.column)` — foreign key. The target lives on
    /// [`Column::foreign_key`]; the constraint list only records the marker.
    ForeignKey,
    /// Any unrecognized token, kept byte-for-byte.
    Other(String),
}

impl Constraint {
    /// The source-token form: `"PK"`, `"UK"`, `"FK"`, or the verbatim token.
    pub fn as_str(&self) -> &str {
        match self {
            Constraint::PrimaryKey => "PK",
            Constraint::UniqueKey => "UK",
            Constraint::ForeignKey => "FK",
            Constraint::Other(raw) => raw,
        }
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Constraints serialize as their token strings ("PK", "FK", ...) so the
// exported document matches what diagram consumers expect.
impl Serialize for Constraint {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Constraint {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        if raw.is_empty() {
            return Err(D::Error::custom("constraint token must be non-empty"));
        }
        Ok(match raw.as_str() {
            "PK" => Constraint::PrimaryKey,
            "UK" => Constraint::UniqueKey,
            "FK" => Constraint::ForeignKey,
            _ => Constraint::Other(raw),
        })
    }
}

/// A parsed column.
///
/// `foreign_key` is present exactly when an `FK` marker appears in
/// `constraints`. `comment` and `example` come from the `// comment | example`
/// trailer and are `None` when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    pub name: String,

    /// The declared type, always a single token (`varchar(255)` works,
    /// `double precision` does not — a known limitation of the notation).
    #[serde(rename = "type")]
    pub column_type: String,

    /// Constraint markers in source order.
    pub constraints: Vec<Constraint>,

    /// Target of the `FK(table.column)` marker, if any.
    pub foreign_key: Option<ColumnRef>,

    pub comment: Option<String>,
    pub example: Option<String>,
}

impl Column {
    /// Create a column with no constraints or trailer metadata.
    pub fn new(name: impl Into<String>, column_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            column_type: column_type.into(),
            constraints: Vec::new(),
            foreign_key: None,
            comment: None,
            example: None,
        }
    }

    pub fn is_primary_key(&self) -> bool {
        self.constraints.contains(&Constraint::PrimaryKey)
    }

    pub fn is_unique(&self) -> bool {
        self.constraints.contains(&Constraint::UniqueKey)
    }

    pub fn has_foreign_key(&self) -> bool {
        self.foreign_key.is_some()
    }
}
