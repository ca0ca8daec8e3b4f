//! Reading source texts from files

use anyhow::{Context, Result};
use std::fs::read_to_string;
use std::path::Path;

/// Reads a file as `(reference, line)` pairs. The reference is
/// `<file name>:<line number>`, counting from 1.
pub fn read_lines(path: &Path) -> Result<Vec<(String, String)>> {
    let mut content = read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    // Strip UTF-8 BOM if present
    if content.starts_with('\u{FEFF}') {
        content = content.trim_start_matches('\u{FEFF}').to_string();
    }

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    Ok(lines_with_references(&name, &content))
}

/// Splits text into lines tagged with `<name>:<line number>`
pub fn lines_with_references(name: &str, content: &str) -> Vec<(String, String)> {
    content
        .lines()
        .enumerate()
        .map(|(i, line)| (format!("{}:{}", name, i + 1), line.to_string()))
        .collect()
}
