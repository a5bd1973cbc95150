//! Validate command implementation.
//!
//! Parses each file and runs the validation suite, printing diagnostics
//! to stderr. Exits with an error when any error-severity finding was
//! produced.

use std::path::PathBuf;

use clap::Args;

use crate::discovery::discover_paths;
use crate::error::{ErdError, Result};
use crate::output::{plural, Printer};
use crate::parser::parse_schema;
use crate::validation::{validate_document, Severity, ValidationResult};

/// Validate schema files and report diagnostics
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Files or directories to validate
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,
}

pub fn run(args: ValidateArgs) -> Result<()> {
    let printer = Printer::new();

    let files = discover_paths(&args.paths)?;
    if files.is_empty() {
        printer.warning("Empty", "no schema files found");
        return Ok(());
    }

    let mut errors = 0;
    let mut warnings = 0;

    for file in &files {
        let source = super::read_source(file)?;
        let document = parse_schema(&source);
        let result = validate_document(&document);

        if result.is_clean() {
            printer.status("Checked", &file.display().to_string());
        } else {
            printer.warning("Checking", &file.display().to_string());
            print_diagnostics(&result, &printer);
        }

        errors += result.error_count();
        warnings += result.warning_count();
    }

    if errors > 0 {
        return Err(ErdError::Validation {
            message: format!(
                "found {} and {} across {}",
                plural(errors, "error", "errors"),
                plural(warnings, "warning", "warnings"),
                plural(files.len(), "file", "files"),
            ),
            help: Some("Diagnostics above list the offending tables and columns".to_string()),
        });
    }

    printer.status(
        "Finished",
        &format!(
            "{} validated, {}",
            plural(files.len(), "file", "files"),
            plural(warnings, "warning", "warnings"),
        ),
    );

    Ok(())
}

fn print_diagnostics(result: &ValidationResult, printer: &Printer) {
    for diagnostic in result.iter() {
        let is_error = diagnostic.severity == Severity::Error;
        let label = printer.severity(&diagnostic.severity.to_string(), is_error);
        eprintln!("  {}[{}]: {}", label, diagnostic.code, diagnostic.message);
        if let Some(help) = &diagnostic.help {
            eprintln!("    help: {}", help);
        }
    }
}
