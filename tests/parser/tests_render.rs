//! Rendering orders back to text.

use eressea::orders::{EntityKind, NameTarget, OrderKind, RenderError};
use eressea::{OrderParser, ParserConfig};
use rstest::rstest;

use crate::helpers::fixtures::{RULES, english, german};
use crate::helpers::order_helpers::parse_valid;

#[rstest]
#[case("ARBEITE")]
#[case("@ARBEITE")]
#[case("ATTACKIERE abc")]
#[case("BANNER \"Für Ruhm und Silber\"")]
#[case("BEANSPRUCHE 2 Balsam")]
#[case("BELAGERE xyz")]
#[case("BENENNE FREMDES GEBÄUDE 12 \"Turm\"")]
#[case("BESCHREIBE PRIVAT \"geheim\"")]
#[case("BETRETE BURG 1a")]
#[case("BEWACHE NICHT")]
#[case("BOTSCHAFT PARTEI xy \"Hallo\"")]
#[case("DEFAULT \"BENENNE EINHEIT 'Hugo'\"")]
#[case("EMAIL \"spieler@example.com\"")]
#[case("FOLGE SCHIFF 5")]
#[case("GIB abc JE 2 Schwert")]
#[case("GIB BAUERN ALLES")]
#[case("HELFE xy KÄMPFE NICHT")]
#[case("KÄMPFE HELFE NICHT")]
#[case("KAMPFZAUBER STUFE 2 Schockwelle NICHT")]
#[case("KONTAKTIERE PARTEI xy")]
#[case("LEHRE abc TEMP 3")]
#[case("MACHE TEMP 1 \"Neue Leute\"")]
#[case("MACHE BURG")]
#[case("MACHE Boot 12")]
#[case("MACHE STRASSE NO")]
#[case("NACH O SO PAUSE W")]
#[case("NUMMER PARTEI")]
#[case("PFLANZE 5 BÄUME")]
#[case("PIRATERIE xy z1")]
#[case("REKRUTIERE 5 Elfen")]
#[case("RESERVIERE JE 1 Schwert")]
#[case("SABOTIERE SCHIFF")]
#[case("SORTIERE VOR abc")]
#[case("TARNE PARTEI NUMMER xy")]
#[case("URSPRUNG -3 4")]
#[case("ZAUBERE REGION 1 -2 Feuerball abc")]
#[case("ZAUBERE STUFE 2 \"Segen der Ernte\"")]
#[case("ZEIGE Heiltrank")]
fn test_rendered_order_parses_to_same_order(#[case] line: &str) {
    let parser = german();
    let order = parse_valid(&parser, line).order;
    let text = order.render(&parser).expect("valid order renders");
    let again = parse_valid(&parser, &text);
    assert_eq!(again.order, order, "{line} rendered as {text}");
}

#[rstest]
#[case("GIB 1 5 Silber")]
#[case("LERNE Hiebwaffen 3")]
#[case("ZAUBERE STUFE 2 \"Segen der Ernte\"")]
#[case("DEFAULT \"GIB 1 JE 5 Silber\"")]
#[case("MACHE 10 Schwert")]
#[case("TARNE Zwerge")]
fn test_render_in_other_locale(#[case] line: &str) {
    let order = parse_valid(&german(), line).order;
    let english = english();
    let text = order.render(&english).expect("valid order renders");
    let again = parse_valid(&english, &text);
    assert_eq!(again.order, order, "{line} rendered as {text}");
}

#[test]
fn test_canonical_surfaces() {
    let parser = german();
    let order = parse_valid(&parser, "gib abc je 5 silber").order;
    assert_eq!(order.render(&parser).unwrap(), "GIB abc JE 5 Silber");
}

#[test]
fn test_invalid_order_does_not_render() {
    let parser = german();
    let order = parser.parse("GIB abc 5 Gold").order;
    assert!(matches!(order.render(&parser), Err(RenderError::Invalid)));
}

#[rstest]
#[case("DEFAULT \"BENENNE EINHEIT Hugo\"")]
#[case("DEFAULT \"BENENNE EINHEIT 'Hugo der Alte'\"")]
#[case("DEFAULT \"MACHE TEMP 1 'Neue Leute'\"")]
fn test_default_round_trip_with_double_quotes_only(#[case] line: &str) {
    let config = ParserConfig::default().with_quotes(&['"']);
    let parser = OrderParser::new(RULES.clone(), config).unwrap();
    let order = parse_valid(&parser, line).order;
    let text = order.render(&parser).expect("valid order renders");
    let again = parse_valid(&parser, &text);
    assert_eq!(again.order, order, "{line} rendered as {text}");
}

#[test]
fn test_default_inner_name_is_unquoted_with_double_quotes_only() {
    let config = ParserConfig::default().with_quotes(&['"']);
    let parser = OrderParser::new(RULES.clone(), config).unwrap();
    let order = parse_valid(&parser, "DEFAULT \"BENENNE EINHEIT 'Hugo der Alte'\"").order;
    let OrderKind::Default { inner } = order.kind else {
        panic!("expected DEFAULT, got {:?}", order.kind);
    };
    assert_eq!(
        inner.kind,
        OrderKind::Named {
            target: NameTarget::Own(EntityKind::Unit),
            text: "Hugo der Alte".into(),
        }
    );
}
