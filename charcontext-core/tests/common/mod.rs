use charcontext_core::{extract, MatchContext, MatchScanner, PositionKind, ScanOptions};

/// Extracts a context with the default width, panicking on error
#[allow(dead_code)]
pub fn context(match_text: &str, offset: isize, source: &str, kind: PositionKind) -> MatchContext {
    extract(match_text, offset, source, "ref", kind).unwrap()
}

/// Text made of `count` repetitions of `ch`
#[allow(dead_code)]
pub fn repeated(ch: char, count: usize) -> String {
    std::iter::repeat(ch).take(count).collect()
}

#[allow(dead_code)]
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Scans lines of text with references "line 1", "line 2", ...
#[allow(dead_code)]
pub fn scan_lines(options: ScanOptions, lines: &[&str]) -> Vec<MatchContext> {
    let scanner = MatchScanner::new(options).unwrap();
    let sources = lines
        .iter()
        .enumerate()
        .map(|(i, line)| (format!("line {}", i + 1), *line));
    scanner.scan_many(sources).unwrap()
}
