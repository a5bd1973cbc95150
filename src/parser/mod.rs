//! Parser for the compact ER schema notation.
//!
//! The notation is indentation-based: unindented lines declare tables,
//! indented lines declare columns, and `--- NAME ---` delimiter lines group
//! the tables that follow into a named domain.
//!
//! # Notation
//!
//! ```text
//! --- Identity ---
//! users
//!   id int PK // Unique identifier | 42
//!   email varchar UK // Login address | "jane@example.com"
//!
//! --- Content ---
//! posts
//!   id int PK
//!   user_id int FK(users.id) // Author | 123
//! ```
//!
//! # Pipeline
//!
//! Four passes, each a pure function over the previous one's output:
//! line classification ([`line`]), column grammar ([`column`]), table and
//! domain assembly ([`document`]), and relationship extraction
//! ([`relation`]). The whole pipeline is [`parse_schema`].
//!
//! # Usage
//!
//! ```text
//! use erd::parse_schema;
//!
//! let document = parse_schema("users\n  id int PK\n");
//! assert_eq!(document.tables[0].name, "users");
//! ```

pub mod column;
pub mod document;
pub mod line;
pub mod relation;

// Re-export main entry points
pub use column::parse_column;
pub use document::parse_schema;
pub use line::{classify, Line};
pub use relation::resolve_relationships;
