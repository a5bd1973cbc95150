//! Export command implementation.
//!
//! Parses one notation source and writes the resulting schema document in a
//! machine-readable format, for consumption by diagram renderers.

use std::path::PathBuf;

use clap::{Args, ValueEnum};

use crate::error::Result;
use crate::output::{plural, Printer};
use crate::parser::parse_schema;
use crate::types::SchemaDocument;

/// Export a parsed schema document as JSON or YAML
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Input file (use '-' for stdin)
    pub input: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value = "json")]
    pub format: Format,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Write to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Yaml,
}

pub fn run(args: ExportArgs) -> Result<()> {
    let printer = Printer::new();

    let source = super::read_source(&args.input)?;
    let document = parse_schema(&source);
    let rendered = render(&document, args.format, args.pretty)?;

    match &args.output {
        Some(path) => {
            std::fs::write(path, rendered)?;
            printer.status(
                "Exported",
                &format!(
                    "{} ({}, {})",
                    path.display(),
                    plural(document.table_count(), "table", "tables"),
                    plural(
                        document.relationships.len(),
                        "relationship",
                        "relationships"
                    ),
                ),
            );
        }
        None => {
            println!("{}", rendered);
        }
    }

    Ok(())
}

/// Serialize a document into the requested format.
fn render(document: &SchemaDocument, format: Format, pretty: bool) -> Result<String> {
    let rendered = match format {
        Format::Json if pretty => serde_json::to_string_pretty(document)?,
        Format::Json => serde_json::to_string(document)?,
        Format::Yaml => serde_yaml::to_string(document)?,
    };
    Ok(rendered)
}
