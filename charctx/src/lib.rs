pub mod report;
pub mod sources;

pub use charcontext_core::*;

use anyhow::{Context, Result};
use std::fs::read_to_string;
use std::path::{Path, PathBuf};

/// Loads scan options from a JSON file, or the defaults when no file is given
pub fn load_options(config: Option<&Path>) -> Result<ScanOptions> {
    let Some(path) = config else {
        return Ok(ScanOptions::default());
    };
    let text = read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let options = serde_json::from_str(&text)
        .with_context(|| format!("Invalid config {}", path.display()))?;
    log::info!("Loaded scan options from {}", path.display());
    Ok(options)
}

/// Scans every line of every input file
pub fn scan_files(options: ScanOptions, inputs: &[PathBuf]) -> Result<Vec<MatchContext>> {
    let scanner = MatchScanner::new(options)?;
    let mut contexts = Vec::new();

    for input in inputs {
        let lines = sources::read_lines(input)?;
        log::debug!("{}: {} lines", input.display(), lines.len());
        contexts.extend(scanner.scan_many(lines)?);
    }

    Ok(contexts)
}
