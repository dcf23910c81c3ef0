//! Catalog file path resolution.
//!
//! Users paste paths with surrounding quotes, duplicated extensions, or
//! just a bare file name; resolution tries a sequence of repairs before
//! giving up:
//!
//! 1. the cleaned path as given
//! 2. the same path with a duplicated `.csv.csv` extension collapsed
//! 3. the bare file name in the current directory
//! 4. the first `*.csv` file found in the current directory

use std::fs;
use std::path::{Path, PathBuf};

use super::csv::IngestError;

/// Resolves the user-entered path of a catalog file.
///
/// # Errors
///
/// Returns [`IngestError::FileNotFound`] when none of the fallbacks yields
/// an existing file, or [`IngestError::Io`] when the current directory
/// cannot be scanned.
pub fn resolve(input: &str) -> Result<PathBuf, IngestError> {
    let cleaned = normalize_input(input);
    let path = PathBuf::from(&cleaned);

    if path.is_file() {
        return Ok(path);
    }

    if let Some(file_name) = path.file_name().and_then(|name| name.to_str()) {
        if let Some(repaired) = collapse_duplicate_extension(file_name) {
            let repaired_path = path.with_file_name(repaired);
            if repaired_path.is_file() {
                tracing::debug!(
                    "Collapsed duplicated extension: {}",
                    repaired_path.display()
                );
                return Ok(repaired_path);
            }
        }

        let in_current_directory = PathBuf::from(file_name);
        if in_current_directory.is_file() {
            return Ok(in_current_directory);
        }
    }

    if let Some(found) = first_csv_in_current_directory()? {
        tracing::warn!(
            "Catalog file '{cleaned}' not found, using '{}' from the current directory",
            found.display()
        );
        return Ok(found);
    }

    Err(IngestError::file_not_found(cleaned))
}

/// Trims surrounding whitespace and one pair of double quotes.
fn normalize_input(input: &str) -> String {
    let trimmed = input.trim();
    let trimmed = trimmed.strip_prefix('"').unwrap_or(trimmed);
    let trimmed = trimmed.strip_suffix('"').unwrap_or(trimmed);
    trimmed.to_string()
}

/// Collapses a duplicated `.csv.csv` extension to a single one.
fn collapse_duplicate_extension(file_name: &str) -> Option<&str> {
    if file_name.to_lowercase().ends_with(".csv.csv") {
        Some(&file_name[..file_name.len() - ".csv".len()])
    } else {
        None
    }
}

/// Finds the first `*.csv` file in the current directory, if any.
fn first_csv_in_current_directory() -> Result<Option<PathBuf>, IngestError> {
    for entry in fs::read_dir(Path::new("."))? {
        let path = entry?.path();
        let is_csv = path
            .extension()
            .is_some_and(|extension| extension.eq_ignore_ascii_case("csv"));
        if is_csv && path.is_file() {
            return Ok(Some(path));
        }
    }
    Ok(None)
}

// =============================================================================
// Tests
// =============================================================================
