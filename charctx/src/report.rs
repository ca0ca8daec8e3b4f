//! Output formats for scan results

use anyhow::Result;
use charcontext_core::{Inventory, MatchContext};
use clap::ValueEnum;
use std::fmt::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// One tab-separated row per match: reference, before, match, after
    #[default]
    Rows,
    /// The contexts as a JSON array
    Json,
    /// Occurrence count per distinct key
    Summary,
}

pub fn render(contexts: Vec<MatchContext>, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Rows => Ok(render_rows(&contexts)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&contexts)? + "\n"),
        OutputFormat::Summary => Ok(render_summary(&Inventory::from_contexts(contexts))),
    }
}

pub fn render_rows(contexts: &[MatchContext]) -> String {
    let mut out = String::new();
    for ctx in contexts {
        let _ = writeln!(
            out,
            "{}\t{}\t{}\t{}",
            ctx.reference(),
            escape(ctx.before()),
            escape(ctx.match_text()),
            escape(ctx.after())
        );
    }
    out
}

pub fn render_summary(inventory: &Inventory) -> String {
    let mut out = String::new();
    for entry in inventory.iter() {
        let _ = writeln!(out, "{}\t{}", entry.count(), escape(&entry.key));
    }
    out
}

/// Makes tabs and boundary markers visible in a tab-separated row
fn escape(text: &str) -> String {
    text.replace('\t', "\\t").replace('\u{2029}', "\\p")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(escape("a\tb"), "a\\tb");
        assert_eq!(escape("\u{2029}\""), "\\p\"");
    }
}
