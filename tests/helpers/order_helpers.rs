//! Parse helpers and assertions on parse results.

use eressea::parser::ErrorCode;
use eressea::{OrderParser, ParseResult};

/// Parse and assert the line is a valid order.
pub fn parse_valid(parser: &OrderParser, line: &str) -> ParseResult {
    let result = parser.parse(line);
    assert!(
        result.valid(),
        "expected '{}' to be valid, got {} error(s):\n{}",
        line,
        result.errors.len(),
        result
            .errors
            .iter()
            .map(|e| format!("  {e}"))
            .collect::<Vec<_>>()
            .join("\n")
    );
    result
}

/// Parse and assert the line fails with `code` as its first error.
pub fn assert_error(parser: &OrderParser, line: &str, code: ErrorCode) -> ParseResult {
    let result = parser.parse(line);
    assert!(!result.valid(), "expected '{}' to be invalid", line);
    let first = result.errors.first().map(|e| e.code);
    assert_eq!(first, Some(code), "'{}': {:?}", line, result.errors);
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::helpers::fixtures::german;

    #[test]
    fn test_parse_valid_passes_for_valid_order() {
        parse_valid(&german(), "ARBEITE");
    }

    #[test]
    fn test_assert_error_matches_first_code() {
        assert_error(&german(), "FROBNICATE", ErrorCode::E0301);
    }
}
