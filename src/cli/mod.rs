pub mod completions;
pub mod export;
pub mod list;
pub mod validate;

use std::io::Read;
use std::path::Path;

use clap::{Parser, Subcommand};

use crate::error::{ErdError, Result};

/// erd - ER schema notation toolchain
#[derive(Parser, Debug)]
#[command(name = "erd")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Export a parsed schema document as JSON or YAML
    Export(export::ExportArgs),

    /// List domains, tables and relationships in schema files
    List(list::ListArgs),

    /// Validate schema files and report diagnostics
    Validate(validate::ValidateArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Read notation source from a file, or from stdin when the path is `-`.
///
/// The parser accepts any string, so the only hard input failure is a
/// byte stream that is not valid UTF-8.
pub(crate) fn read_source(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut bytes = Vec::new();
        std::io::stdin().read_to_end(&mut bytes)?;
        return decode_utf8(bytes, Path::new("<stdin>"));
    }

    let bytes = std::fs::read(path).map_err(|e| ErdError::Io {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    decode_utf8(bytes, path)
}

fn decode_utf8(bytes: Vec<u8>, origin: &Path) -> Result<String> {
    String::from_utf8(bytes).map_err(|_| ErdError::Parse {
        message: format!("{} is not valid UTF-8", origin.display()),
        help: Some("Schema notation must be UTF-8 encoded text".to_string()),
    })
}
