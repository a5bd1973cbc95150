//! File system discovery of schema notation files.
//!
//! Recursively scans directories for `.erd` files so the CLI commands can
//! accept files, directories, or a mix of both.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{ErdError, Result};

/// File extension recognized as schema notation.
const SCHEMA_EXTENSION: &str = "erd";

/// Whether a path looks like a schema notation file.
pub fn is_schema_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e == SCHEMA_EXTENSION)
        .unwrap_or(false)
}

/// Recursively discover schema files under a root directory.
///
/// Unreadable directory entries are skipped; results are sorted so command
/// output is deterministic.
pub fn discover(root: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
    let root = root.as_ref();
    let mut files = Vec::new();

    for entry in WalkDir::new(root)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();
        if path.is_dir() {
            continue;
        }
        if is_schema_file(path) {
            files.push(path.to_path_buf());
        }
    }

    files.sort();
    Ok(files)
}

/// Resolve a mixed list of files and directories.
///
/// Explicit files are kept as given (whatever their extension — the author
/// named them on purpose); directories are scanned recursively. A path that
/// does not exist is an error.
pub fn discover_paths(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for path in paths {
        if !path.exists() {
            return Err(ErdError::Io {
                path: path.clone(),
                message: "no such file or directory".to_string(),
            });
        }
        if path.is_dir() {
            files.extend(discover(path)?);
        } else {
            files.push(path.clone());
        }
    }

    Ok(files)
}
