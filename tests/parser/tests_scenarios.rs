//! End-to-end scenarios: typed orders, their tokens and completion requests.

use eressea::OrderKeyword;
use eressea::orders::{Amount, Direction, GiveOrder, GiveTarget, GiveWhat, MovementStep, OrderKind, UnitRef};
use eressea::parser::{CompletionLog, CompletionPoint, ErrorCode, SyntaxKind};

use crate::helpers::fixtures::{english, german};
use crate::helpers::order_helpers::{assert_error, parse_valid};

fn kinds(line: &str) -> Vec<SyntaxKind> {
    english().parse(line).tokens().iter().map(|t| t.kind).collect()
}

#[test]
fn test_give_amount_of_item() {
    let result = parse_valid(&english(), "GIVE 1 5 Silver");
    assert_eq!(
        result.order.kind,
        OrderKind::Give(GiveOrder {
            target: GiveTarget::Unit(UnitRef::Id(1)),
            what: GiveWhat::Items {
                each: false,
                amount: Amount::Count(5),
                item: Some("silver".into()),
            },
        })
    );
    assert!(!result.order.long);
}

#[test]
fn test_give_each_with_german_alias() {
    let result = parse_valid(&english(), "GIVE 1 JE 5 Silver");
    let OrderKind::Give(give) = &result.order.kind else {
        panic!("expected GIVE, got {:?}", result.order.kind);
    };
    assert!(matches!(give.what, GiveWhat::Items { each: true, .. }));
}

#[test]
fn test_bare_verb_requests_target_after_separator() {
    let parser = english();
    let mut log = CompletionLog::default();
    let result = parser.parse_with_completion("GIVE", &mut log);

    assert!(!result.valid());
    assert_eq!(result.errors[0].code, ErrorCode::E0202);
    let last = log.last().expect("completion requested");
    assert_eq!(last.point, CompletionPoint::GiveTarget);
    assert!(last.needs_separator);
    assert_eq!(last.partial, "");
}

#[test]
fn test_move_with_pause_is_long() {
    let result = parse_valid(&english(), "MOVE NE NE PAUSE SE");
    assert!(result.order.long);
    let OrderKind::Movement(movement) = &result.order.kind else {
        panic!("expected MOVE, got {:?}", result.order.kind);
    };
    assert_eq!(
        movement.steps,
        vec![
            MovementStep::Go(Direction::Northeast),
            MovementStep::Go(Direction::Northeast),
            MovementStep::Pause,
            MovementStep::Go(Direction::Southeast),
        ]
    );
}

#[test]
fn test_unterminated_name_tokens() {
    let result = assert_error(&english(), "NAME UNIT \"Foo", ErrorCode::E0101);
    assert_eq!(
        result.tokens().iter().map(|t| t.kind).collect::<Vec<_>>(),
        vec![
            SyntaxKind::KEYWORD,
            SyntaxKind::KEYWORD,
            SyntaxKind::OPENING_QUOTE,
            SyntaxKind::UNDEFINED,
            SyntaxKind::END_OF_COMMAND,
        ]
    );
}

#[test]
fn test_default_holds_inner_order() {
    let result = parse_valid(&english(), "DEFAULT \"GIVE 1 5 Silver\"");
    let OrderKind::Default { inner } = &result.order.kind else {
        panic!("expected DEFAULT, got {:?}", result.order.kind);
    };
    assert_eq!(inner.verb, Some(OrderKeyword::Give));
    assert!(inner.valid);
    assert_eq!(inner.kind, english().parse("GIVE 1 5 Silver").order.kind);
}

#[test]
fn test_default_inner_order_uses_other_quote() {
    let result = parse_valid(&german(), "DEFAULT \"BENENNE EINHEIT 'Hugo der Alte'\"");
    let OrderKind::Default { inner } = &result.order.kind else {
        panic!("expected DEFAULT, got {:?}", result.order.kind);
    };
    let OrderKind::Named { text, .. } = &inner.kind else {
        panic!("expected NAME, got {:?}", inner.kind);
    };
    assert_eq!(text, "Hugo der Alte");
}

#[test]
fn test_persistent_order() {
    let result = parse_valid(&german(), "@ARBEITE");
    assert!(result.order.persistent);
    assert_eq!(result.tokens()[0].kind, SyntaxKind::PERSIST);
}

#[test]
fn test_trailing_comment_is_kept_as_token() {
    let result = parse_valid(&german(), "ARBEITE ; den ganzen Tag");
    assert_eq!(result.order.verb, Some(OrderKeyword::Work));
    assert!(result.tokens().iter().any(|t| t.kind == SyntaxKind::COMMENT));
}

#[test]
fn test_parse_is_idempotent() {
    let parser = german();
    for line in ["GIB abc 5 Silber", "NACH O XX", "BENENNE EINHEIT \"Hugo", "; notiz", ""] {
        let first = parser.parse(line);
        let second = parser.parse(line);
        assert_eq!(first.order, second.order, "{line}");
        assert_eq!(first.tokens(), second.tokens(), "{line}");
        assert_eq!(first.errors, second.errors, "{line}");
    }
}

#[test]
fn test_every_line_ends_with_end_of_command() {
    for line in ["", "GIVE", "GIVE 1 5 Silver", "NAME UNIT \"Foo", "// kept"] {
        assert_eq!(kinds(line).last(), Some(&SyntaxKind::END_OF_COMMAND), "{line}");
    }
}

#[test]
fn test_teach_temp_units() {
    let result = parse_valid(&german(), "LEHRE abc TEMP 3 1");
    assert_eq!(
        result.order.kind,
        OrderKind::Teach {
            targets: vec![UnitRef::Id(13368), UnitRef::Temp(3), UnitRef::Id(1)],
        }
    );
}

#[test]
fn test_optional_text_may_be_omitted() {
    let parser = german();
    assert_eq!(parse_valid(&parser, "GRUPPE").order.kind, OrderKind::Text { text: None });
    assert_eq!(
        parse_valid(&parser, "GRUPPE Jäger").order.kind,
        OrderKind::Text {
            text: Some("Jäger".into())
        }
    );
    assert_error(&parser, "BENENNE EINHEIT", ErrorCode::E0202);
}

#[test]
fn test_temp_name_may_be_omitted() {
    let parser = german();
    assert_eq!(
        parse_valid(&parser, "MACHE TEMP 1").order.kind,
        OrderKind::MakeTemp { id: 1, name: None }
    );
    assert_eq!(
        parse_valid(&parser, "MACHE TEMP 1 \"Neue Leute\"").order.kind,
        OrderKind::MakeTemp {
            id: 1,
            name: Some("Neue Leute".into())
        }
    );
}

#[test]
fn test_default_inner_order_may_be_persistent() {
    let result = parse_valid(&german(), "DEFAULT \"@ARBEITE\"");
    let OrderKind::Default { inner } = result.order.kind else {
        panic!("expected DEFAULT, got {:?}", result.order.kind);
    };
    assert!(inner.persistent);
    assert_eq!(inner.verb, Some(OrderKeyword::Work));
}
