//! List command implementation.
//!
//! Discovers schema files and prints an inventory of what each one
//! declares.

use std::path::PathBuf;

use clap::Args;

use crate::discovery::{discover, discover_paths};
use crate::error::Result;
use crate::output::{plural, Printer};
use crate::parser::parse_schema;
use crate::types::SchemaDocument;

/// List domains, tables and relationships in schema files
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Files or directories to scan (default: current directory)
    pub paths: Vec<PathBuf>,

    /// Show derived relationship edges
    #[arg(long)]
    pub relationships: bool,
}

pub fn run(args: ListArgs) -> Result<()> {
    let printer = Printer::new();

    let files = if args.paths.is_empty() {
        discover(".")?
    } else {
        discover_paths(&args.paths)?
    };

    if files.is_empty() {
        printer.warning("Empty", "no schema files found");
        return Ok(());
    }

    for file in &files {
        let source = super::read_source(file)?;
        let document = parse_schema(&source);

        printer.status(
            "Schema",
            &format!(
                "{} ({}, {})",
                file.display(),
                plural(document.table_count(), "table", "tables"),
                plural(document.column_count(), "column", "columns"),
            ),
        );

        print_inventory(&document, &printer);

        if args.relationships {
            print_relationships(&document, &printer);
        }
    }

    Ok(())
}

fn print_inventory(document: &SchemaDocument, printer: &Printer) {
    for table in &document.tables {
        let label = match &table.domain {
            Some(domain) => format!("{} {}", table.name, printer.dim(&format!("[{domain}]"))),
            None => table.name.clone(),
        };
        let columns: Vec<&str> = table.columns.iter().map(|c| c.name.as_str()).collect();
        printer.info("Table", &format!("{} {}", label, printer.dim(&columns.join(", "))));
    }
}

fn print_relationships(document: &SchemaDocument, printer: &Printer) {
    for relationship in &document.relationships {
        printer.info(
            "Edge",
            &format!(
                "{} {} {}",
                relationship.from,
                printer.dim("->"),
                relationship.to
            ),
        );
    }
}
