//! Tests for the single-line field tokenizer

use crate::app::services::csv::tokenizer::tokenize_row;

#[test]
fn test_plain_fields() {
    assert_eq!(tokenize_row("a,b,c"), vec!["a", "b", "c"]);
}

#[test]
fn test_single_field_line() {
    assert_eq!(tokenize_row("hello"), vec!["hello"]);
}

#[test]
fn test_empty_line_is_one_empty_field() {
    assert_eq!(tokenize_row(""), vec![""]);
}

#[test]
fn test_trailing_comma_yields_trailing_empty_field() {
    assert_eq!(tokenize_row("a,"), vec!["a", ""]);
    assert_eq!(tokenize_row(",,"), vec!["", "", ""]);
}

#[test]
fn test_comma_inside_quotes_is_literal() {
    assert_eq!(tokenize_row("\"1,2\",3"), vec!["1,2", "3"]);
}

#[test]
fn test_escaped_quote_inside_quotes() {
    assert_eq!(
        tokenize_row("\"he said \"\"hi\"\"\""),
        vec!["he said \"hi\""]
    );
}

#[test]
fn test_quoted_field_mixed_with_plain() {
    assert_eq!(
        tokenize_row("101호,\"김, 철수\",84.5"),
        vec!["101호", "김, 철수", "84.5"]
    );
}

#[test]
fn test_quotes_embedded_mid_field() {
    // Quote toggling applies anywhere in the field, not just at the edges
    assert_eq!(tokenize_row("ab\"c,d\"e,f"), vec!["abc,de", "f"]);
}

#[test]
fn test_unterminated_quote_closes_at_end_of_line() {
    // The dangling quote state is dropped; the accumulator still flushes
    assert_eq!(tokenize_row("\"abc,def"), vec!["abc,def"]);
}

#[test]
fn test_empty_quoted_field() {
    assert_eq!(tokenize_row("\"\",b"), vec!["", "b"]);
}
