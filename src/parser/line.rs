//! Line classification.
//!
//! Indentation is the only thing separating a table header from a column
//! line, so classification happens before any token-level parsing:
//!
//! 1. Whitespace-only lines are blank.
//! 2. `--- NAME ---` at column zero is a domain header.
//! 3. Any other line without leading whitespace is a table header.
//! 4. A line with leading whitespace is a column line.

/// One classified line of notation.
///
/// Borrowed variants reference the (right-trimmed) input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    /// Whitespace-only; has no effect on assembly.
    Blank,
    /// `--- NAME ---` with the name already trimmed.
    DomainHeader(&'a str),
    /// An unindented, non-delimiter line; the table name.
    TableHeader(&'a str),
    /// An indented line, to be handed to the column grammar.
    Column(&'a str),
}

/// Classify a single line.
///
/// Trailing whitespace is ignored; leading whitespace is significant.
pub fn classify(line: &str) -> Line<'_> {
    let line = line.trim_end();

    if line.is_empty() {
        return Line::Blank;
    }
    if let Some(name) = domain_name(line) {
        return Line::DomainHeader(name);
    }
    if line.starts_with(char::is_whitespace) {
        Line::Column(line)
    } else {
        Line::TableHeader(line.trim())
    }
}

/// Extract the name from a `--- NAME ---` delimiter line.
///
/// The delimiter must start at column zero and there must be at least one
/// character between the two dash runs, so a plain `------` is a table
/// header, not an anonymous domain.
fn domain_name(line: &str) -> Option<&str> {
    let inner = line.strip_prefix("---")?.strip_suffix("---")?;
    if inner.is_empty() {
        return None;
    }
    Some(inner.trim())
}
