//! Diagnostics for orders that do not parse.

use eressea::parser::{ErrorCode, SyntaxKind};
use rstest::rstest;

use crate::helpers::fixtures::{english, german};
use crate::helpers::order_helpers::assert_error;

#[rstest]
#[case("GIB", ErrorCode::E0202)]
#[case("GIB abc", ErrorCode::E0202)]
#[case("GIB abc 5 Gold", ErrorCode::E0501)]
#[case("GIB abc 5 S", ErrorCode::E0502)]
#[case("LERNE H", ErrorCode::E0502)]
#[case("NACH XX", ErrorCode::E0201)]
#[case("NACH", ErrorCode::E0202)]
#[case("ARBEITE 5", ErrorCode::E0203)]
#[case("BEWACHE NICHT NICHT", ErrorCode::E0203)]
#[case("GIB abc 99999999999 Silber", ErrorCode::E0401)]
#[case("BENENNE EINHEIT \"Hugo", ErrorCode::E0101)]
#[case("KAUFE 5 Schwert", ErrorCode::E0501)]
#[case("REKRUTIERE 5 Drachen", ErrorCode::E0501)]
#[case("ZAUBERE Schockwelle", ErrorCode::E0501)]
#[case("KAMPFZAUBER Feuerball", ErrorCode::E0501)]
#[case("MACHE Drache", ErrorCode::E0501)]
#[case("KAMPFE HINTEN", ErrorCode::E0301)]
#[case("DEFAULT \"FROBNICATE\"", ErrorCode::E0601)]
#[case("EMAIL \"keine-adresse\"", ErrorCode::E0601)]
#[case("SPRACHE fr", ErrorCode::E0601)]
#[case("BETRETE BURG !!", ErrorCode::E0402)]
#[case("BETRETE HAUS 1", ErrorCode::E0201)]
#[case("BENENNE EINHEIT \"\"", ErrorCode::E0601)]
#[case("ZAUBERE STUFE 0 Feuerball", ErrorCode::E0401)]
#[case("FROBNICATE", ErrorCode::E0301)]
#[case("@", ErrorCode::E0202)]
fn test_german_errors(#[case] line: &str, #[case] code: ErrorCode) {
    assert_error(&german(), line, code);
}

#[rstest]
#[case("RES 10", ErrorCode::E0302)]
#[case("GIVE 1 5 Silber", ErrorCode::E0501)]
#[case("ARBEITE", ErrorCode::E0301)]
#[case("MOVE NO", ErrorCode::E0201)]
fn test_english_errors(#[case] line: &str, #[case] code: ErrorCode) {
    assert_error(&english(), line, code);
}

#[test]
fn test_error_range_points_at_offending_token() {
    let line = "GIB abc 5 Gold";
    let result = assert_error(&german(), line, ErrorCode::E0501);
    let range = result.errors[0].range;
    assert_eq!(&line[range], "Gold");
}

#[test]
fn test_offending_token_is_undefined() {
    let result = assert_error(&german(), "NACH O XX", ErrorCode::E0201);
    let kinds: Vec<SyntaxKind> = result.tokens().iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            SyntaxKind::KEYWORD,
            SyntaxKind::KEYWORD,
            SyntaxKind::UNDEFINED,
            SyntaxKind::END_OF_COMMAND,
        ]
    );
}

#[test]
fn test_ambiguous_names_fail_closed() {
    // Silber, Schwert, Stein and Seide all start with S
    let result = assert_error(&german(), "GIB abc 5 S", ErrorCode::E0502);
    assert_eq!(result.tokens()[3].kind, SyntaxKind::UNDEFINED);
}

#[test]
fn test_unterminated_string_reports_opening_quote() {
    let result = assert_error(&german(), "BENENNE EINHEIT \"Hugo", ErrorCode::E0101);
    let error = &result.errors[0];
    assert_eq!(error.related.len(), 1);
}
