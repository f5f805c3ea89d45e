use crate::tokenizer::{Tokenized, tokenize_lines};
use crate::{Error, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Read a log file into lines.
///
/// Terminal logs are not guaranteed to be clean UTF-8; invalid sequences are
/// replaced rather than failing the whole file.
pub fn read_log_lines(path: &Path) -> Result<Vec<String>> {
    let bytes = std::fs::read(path)?;
    let text = String::from_utf8_lossy(&bytes);
    Ok(text.lines().map(str::to_string).collect())
}

/// Read and tokenize a log file.
pub fn read_log_file(path: &Path) -> Result<Tokenized> {
    let lines = read_log_lines(path)?;
    Ok(tokenize_lines(&lines))
}

/// List the log files directly inside `folder` with the given extension.
///
/// Only the top level of the folder is scanned. The extension match is
/// case-insensitive and the result is sorted by path so runs are repeatable.
pub fn discover_log_files(folder: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    if !folder.is_dir() {
        return Err(Error::NotADirectory(folder.to_path_buf()));
    }

    let extension = extension.trim_start_matches('.');
    let mut files = Vec::new();

    for entry in WalkDir::new(folder).min_depth(1).max_depth(1) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }

        let matches = entry
            .path()
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case(extension));

        if matches {
            files.push(entry.into_path());
        }
    }

    files.sort();
    tracing::debug!(folder = %folder.display(), count = files.len(), "discovered log files");

    Ok(files)
}
