//! Finds TestCafe source files to list.

use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

use crate::error::{read_source, Error, IoError};

const EXCLUDED_DIRS: &[&str] = &["node_modules"];

pub fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| extensions.iter().any(|e| e.eq_ignore_ascii_case(ext)))
        .unwrap_or(false)
}

/// Reads a TestCafe source, rejecting files outside the configured
/// extensions.
pub fn load_source(path: &Path, extensions: &[String]) -> crate::error::Result<String> {
    if !has_extension(path, extensions) {
        return Err(Error::unsupported_language(path.display().to_string(), extensions));
    }
    Ok(read_source(path)?)
}

/// A file is returned as-is; a directory is walked for files with one of
/// `extensions`, skipping hidden entries and `node_modules`.
pub fn discover(root: &Path, extensions: &[String]) -> Result<Vec<PathBuf>, IoError> {
    if root.is_file() {
        return Ok(vec![root.to_path_buf()]);
    }
    if !root.exists() {
        return Err(IoError::file_not_found(root));
    }
    if !root.is_dir() {
        return Err(IoError::invalid_path(root));
    }

    let mut files = Vec::new();
    let walker = WalkDir::new(root).into_iter().filter_entry(|e| {
        if e.depth() == 0 {
            return true;
        }
        let name = e.file_name().to_string_lossy();
        !name.starts_with('.') && !(e.file_type().is_dir() && EXCLUDED_DIRS.contains(&name.as_ref()))
    });

    for entry in walker {
        let entry = entry.map_err(|source| IoError::DirectoryScanError {
            path: root.to_path_buf(),
            source,
        })?;
        if entry.file_type().is_file() && has_extension(entry.path(), extensions) {
            files.push(entry.into_path());
        }
    }

    files.sort();
    debug!(root = %root.display(), files = files.len(), "discovered test files");
    Ok(files)
}
