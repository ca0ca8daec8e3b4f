mod common;

use common::*;
use charcontext_core::{extract, ContextExtractor, Error, LocatedMatch, MatchPattern, PositionKind};
use pretty_assertions::assert_eq;

#[test]
fn test_simple_comma() {
    let ctx = context(",", 5, "Hello, world. Goodbye.", PositionKind::Undefined);
    assert_eq!(ctx.before(), "Hello");
    assert_eq!(ctx.after(), " world. Goodbye.");
    assert_eq!(ctx.match_text(), ",");
    assert_eq!(ctx.reference(), "ref");
    assert_eq!(ctx.key(), ",");
}

#[test]
fn test_full_windows_in_long_text() {
    let source = repeated('a', 200);
    let ctx = context("a", 100, &source, PositionKind::Undefined);
    assert_eq!(char_len(ctx.before()), 50);
    assert_eq!(char_len(ctx.after()), 50);
}

#[test]
fn test_windows_never_exceed_width() {
    let source = "The quick brown fox jumps over the lazy dog, again and again and again.";
    let len = char_len(source) as isize;
    for offset in 0..=len {
        let ctx = context("x", offset, source, PositionKind::Undefined);
        assert!(char_len(ctx.before()) <= 50);
        assert!(char_len(ctx.after()) <= 50);
    }
}

#[test]
fn test_exact_windows_when_room_on_both_sides() {
    let source = repeated('b', 120);
    for offset in 50..=68 {
        let ctx = context("bb", offset, &source, PositionKind::Undefined);
        assert_eq!(char_len(ctx.before()), 50);
        assert_eq!(char_len(ctx.after()), 50);
    }
}

#[test]
fn test_wide_window_takes_whole_text() {
    let extractor = ContextExtractor::with_width(usize::MAX).unwrap();
    let source = repeated('q', 300);
    let ctx = extractor.extract("q", 100, &source, "ref", PositionKind::Undefined).unwrap();
    assert_eq!(char_len(ctx.before()), 100);
    assert_eq!(char_len(ctx.after()), 199);
}

#[test]
fn test_match_at_start_has_empty_before() {
    let ctx = context("H", 0, "Hello", PositionKind::Undefined);
    assert_eq!(ctx.before(), "");
    assert_eq!(ctx.after(), "ello");
}

#[test]
fn test_match_at_end_has_empty_after() {
    let ctx = context("!", 5, "Hello!", PositionKind::Undefined);
    assert_eq!(ctx.before(), "Hello");
    assert_eq!(ctx.after(), "");
}

#[test]
fn test_negative_offset_is_clamped() {
    let ctx = context("a", -4, "abc", PositionKind::Undefined);
    assert_eq!(ctx.before(), "");
    assert_eq!(ctx.after(), "abc");
    assert_eq!(ctx.offset(), -4);
}

#[test]
fn test_offset_past_end_is_clamped() {
    let ctx = context("z", 10, "abc", PositionKind::Undefined);
    assert_eq!(ctx.before(), "abc");
    assert_eq!(ctx.after(), "");
}

#[test]
fn test_match_longer_than_remaining_text() {
    // Pattern built from adjacent tokens runs past the end of this one
    let ctx = context("d...", 3, "abcd.", PositionKind::Undefined);
    assert_eq!(ctx.before(), "abc");
    assert_eq!(ctx.after(), "");
}

#[test]
fn test_word_initial_pattern_splits_one_earlier() {
    let source = "said .5 percent";
    // Offset points at the period, the second character of the pattern
    let ctx = context(" .", 5, source, PositionKind::WordInitial);
    assert_eq!(ctx.before(), "said");
    assert_eq!(ctx.after(), "5 percent");
    assert_eq!(ctx.key(), " .WordInitial");
}

#[test]
fn test_isolated_pattern_at_paragraph_start() {
    // The paragraph marker has no counterpart in the source; the after
    // window still starts right behind the punctuation
    let ctx = context("\u{2029}-", 0, "- item", PositionKind::Isolated);
    assert_eq!(ctx.before(), "");
    assert_eq!(ctx.after(), " item");
}

#[test]
fn test_single_char_word_initial_not_adjusted() {
    let ctx = context("(", 3, "an (aside)", PositionKind::WordInitial);
    assert_eq!(ctx.before(), "an ");
    assert_eq!(ctx.after(), "aside)");
}

#[test]
fn test_word_final_multi_char_not_adjusted() {
    let ctx = context(",\"", 5, "\"Well,\" he said", PositionKind::WordFinal);
    assert_eq!(ctx.before(), "\"Well");
    assert_eq!(ctx.after(), " he said");
}

#[test]
fn test_inconsistent_boundary_offset_fails() {
    let result = extract(" .", 3, "said .5", "ref", PositionKind::WordInitial);
    assert_eq!(
        result.unwrap_err(),
        Error::InvalidMatchOffset {
            offset: 3,
            expected: '.',
            found: Some('d'),
        }
    );
}

#[test]
fn test_empty_match_text_fails() {
    let result = extract("", 0, "abc", "ref", PositionKind::Undefined);
    assert_eq!(result.unwrap_err(), Error::EmptyMatchText);
}

#[test]
fn test_key_depends_on_position() {
    let a = context("-", 2, "ab-cd", PositionKind::WordMedial);
    let b = context("-", 7, "xyz and-or", PositionKind::WordMedial);
    let c = context("-", 4, "word- ", PositionKind::WordFinal);
    let d = context("-", 2, "ab-cd", PositionKind::Undefined);
    assert_eq!(a.key(), b.key());
    assert_ne!(a.key(), c.key());
    assert_eq!(d.key(), "-");
}

#[test]
fn test_multibyte_source() {
    let source = "မင်္ဂလာပါ။ နေကောင်းလား";
    let offset = source.chars().position(|c| c == '။').unwrap() as isize;
    let ctx = context("။", offset, source, PositionKind::Undefined);
    assert_eq!(ctx.before(), "မင်္ဂလာပါ");
    assert_eq!(ctx.after(), " နေကောင်းလား");
}

#[test]
fn test_located_boundary_pattern() {
    let located = LocatedMatch::new(
        MatchPattern::with_boundary(' ', "\u{201C}"),
        4,
        "and \u{201C}quoted",
        "Gen 1:1",
        PositionKind::WordInitial,
    );
    let ctx = ContextExtractor::default().extract_located(&located).unwrap();
    assert_eq!(ctx.before(), "and");
    assert_eq!(ctx.after(), "quoted");
    assert_eq!(ctx.reference(), "Gen 1:1");
}

#[test]
fn test_serializes_for_display() {
    let ctx = context(",", 5, "Hello, world", PositionKind::Undefined);
    let json = serde_json::to_value(&ctx).unwrap();
    assert_eq!(json["before"], "Hello");
    assert_eq!(json["after"], " world");
    assert_eq!(json["key"], ",");
    assert!(json.get("source_text").is_none());
}
