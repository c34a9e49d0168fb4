//! Completion proposals for partially typed orders.

use eressea::ide::{Completion, CompletionKind, CompletionScope, completions};
use eressea::{Locale, OrderParser, ParserConfig};
use rstest::rstest;

use crate::helpers::fixtures::{RULES, english, german, scope};

fn replacements(items: &[Completion]) -> Vec<&str> {
    items.iter().map(|c| c.replacement.as_str()).collect()
}

fn complete(line: &str) -> Vec<Completion> {
    completions(&german(), line, &scope())
}

#[rstest]
#[case("")]
#[case("G")]
#[case("GIB ")]
#[case("GIB abc ")]
#[case("GIB abc 5 ")]
#[case("NACH ")]
#[case("LERNE ")]
#[case("MACHE ")]
#[case("MACHE TEMP ")]
#[case("ZAUBERE ")]
#[case("KÄMPFE ")]
#[case("BETRETE ")]
#[case("BETRETE BURG ")]
#[case("KONTAKTIERE PARTEI ")]
#[case("REKRUTIERE 5 ")]
#[case("SPRACHE ")]
#[case("BENENNE EINHEIT ")]
#[case("DEFAULT \"NACH ")]
fn test_positions_offer_something(#[case] line: &str) {
    assert!(!complete(line).is_empty(), "no completions for {line:?}");
}

#[test]
fn test_empty_line_offers_every_verb() {
    let parser = german();
    let items = completions(&parser, "", &scope());
    assert_eq!(items.len(), parser.commands().len());
    assert!(items.iter().all(|c| c.kind == CompletionKind::Keyword));
    let texts = replacements(&items);
    assert!(texts.contains(&"ARBEITE"));
    assert!(texts.contains(&"GIB"));
}

#[test]
fn test_verb_prefix_is_folded() {
    let items = complete("gi");
    assert_eq!(replacements(&items), vec!["GIB"]);
    assert_eq!(items[0].replaces, 2);
}

#[test]
fn test_give_target_offers_units_and_peasants() {
    let items = complete("GIB ");
    let texts = replacements(&items);
    for expected in ["1", "abc", "TEMP 1", "BAUERN", "TEMP"] {
        assert!(texts.contains(&expected), "{expected} missing from {texts:?}");
    }
    let hugo = items.iter().find(|c| c.replacement == "1").unwrap();
    assert_eq!(hugo.detail.as_deref(), Some("Hugo"));
    assert_eq!(hugo.kind, CompletionKind::Unit);
}

#[test]
fn test_give_quantity_offers_amounts_and_keywords() {
    let texts: Vec<String> = complete("GIB abc ").into_iter().map(|c| c.replacement).collect();
    for expected in ["1200", "10", "ALLES", "JE", "EINHEIT", "KOMMANDO", "KRÄUTER"] {
        assert!(texts.iter().any(|t| t == expected), "{expected} missing from {texts:?}");
    }
}

#[test]
fn test_own_items_come_first() {
    let items = complete("GIB abc 5 ");
    assert_eq!(replacements(&items[..2]), vec!["Silber", "Schwert"]);
    assert!(replacements(&items).contains(&"Balsam"));
}

#[test]
fn test_direction_prefix() {
    let items = complete("NACH O S");
    assert_eq!(replacements(&items), vec!["SO", "SW"]);
    assert!(items.iter().all(|c| c.replaces == 1));
}

#[test]
fn test_spells_split_by_combat_flag() {
    let cast = complete("ZAUBERE ");
    let texts = replacements(&cast);
    assert!(texts.contains(&"Feuerball"));
    assert!(texts.contains(&"\"Segen der Ernte\""));
    assert!(!texts.contains(&"Schockwelle"));

    let combat = complete("KAMPFZAUBER ");
    assert_eq!(replacements(&combat), vec!["Schockwelle", "STUFE"]);
}

#[test]
fn test_known_spells_limit_proposals() {
    let scope = scope().with_spell("fireball");
    let items = completions(&german(), "ZAUBERE ", &scope);
    assert_eq!(replacements(&items), vec!["Feuerball", "REGION", "STUFE"]);
}

#[rstest]
#[case("ZAUBERE ST", "STUFE")]
#[case("ZAUBERE RE", "REGION")]
#[case("ZAUBERE REGION 1 2 ST", "STUFE")]
#[case("KAMPFZAUBER ST", "STUFE")]
#[case("ZEIGE AL", "ALLES")]
#[case("ZEIGE Sch", "Schockwelle")]
#[case("ZEIGE Heil", "Heiltrank")]
#[case("KONTAKTIERE PA", "PARTEI")]
#[case("KONTAKTIERE EIN", "EINHEIT")]
#[case("TARNE PA", "PARTEI")]
fn test_keywords_before_names_are_offered(#[case] line: &str, #[case] expected: &str) {
    let items = complete(line);
    assert!(replacements(&items).contains(&expected), "{line:?}: {:?}", replacements(&items));
}

#[test]
fn test_offered_keywords_parse() {
    let parser = german();
    for line in [
        "ZAUBERE STUFE 2 Feuerball",
        "ZEIGE ALLES ZAUBER",
        "ZEIGE Schockwelle",
        "KONTAKTIERE PARTEI 5",
        "KONTAKTIERE EINHEIT abc",
        "TARNE PARTEI",
    ] {
        assert!(parser.parse(line).valid(), "{line}");
    }
}

#[test]
fn test_level_not_offered_twice() {
    let texts: Vec<String> = complete("ZAUBERE STUFE 2 ").into_iter().map(|c| c.replacement).collect();
    assert!(!texts.iter().any(|t| t == "STUFE" || t == "REGION"), "{texts:?}");
    assert!(texts.iter().any(|t| t == "Feuerball"));
}

#[test]
fn test_contact_unit_keyword_then_units_only() {
    let texts: Vec<String> = complete("KONTAKTIERE EINHEIT ").into_iter().map(|c| c.replacement).collect();
    assert!(texts.iter().any(|t| t == "abc"));
    assert!(!texts.iter().any(|t| t == "PARTEI"));
}

#[test]
fn test_make_targets() {
    let items = complete("MACHE ");
    let texts = replacements(&items);
    for expected in ["TEMP", "Schwert", "Eisen", "Leuchtturm", "BURG", "Boot", "STRASSE", "GEBÄUDE", "SCHIFF"] {
        assert!(texts.contains(&expected), "{expected} missing from {texts:?}");
    }
    // castles are made with the keyword, silver is not made at all
    assert!(!texts.contains(&"Burg"));
    assert!(!texts.contains(&"Silber"));
}

#[test]
fn test_make_after_amount_drops_temp() {
    let texts: Vec<String> = complete("MACHE 5 ").into_iter().map(|c| c.replacement).collect();
    assert!(!texts.iter().any(|t| t == "TEMP"));
    assert!(texts.iter().any(|t| t == "Schwert"));
}

#[test]
fn test_next_temp_number() {
    assert_eq!(replacements(&complete("MACHE TEMP ")), vec!["2"]);
}

#[test]
fn test_container_and_faction_ids() {
    let castle = complete("BETRETE BURG ");
    assert_eq!(replacements(&castle), vec!["2s"]);
    assert_eq!(castle[0].detail.as_deref(), Some("Alte Burg"));

    let faction = complete("KONTAKTIERE PARTEI ");
    assert_eq!(replacements(&faction), vec!["100"]);
    assert_eq!(faction[0].kind, CompletionKind::Faction);
}

#[test]
fn test_recruit_offers_playable_races() {
    let texts: Vec<String> = complete("REKRUTIERE 5 ").into_iter().map(|c| c.replacement).collect();
    assert_eq!(texts, vec!["Menschen", "Elfen", "Zwerge"]);
}

#[test]
fn test_completion_after_exact_verb_inserts_space() {
    let items = complete("LERNE");
    assert!(replacements(&items).contains(&" Magie"));
    assert!(items.iter().all(|c| c.replacement.starts_with(' ') && c.replaces == 0));
}

#[test]
fn test_gui_locale_only_changes_details() {
    let config = ParserConfig::default()
        .with_order_locale(Locale::English)
        .with_gui_locale(Locale::German);
    let parser = OrderParser::new(RULES.clone(), config).unwrap();
    let items = completions(&parser, "GIVE 1 5 Si", &scope());

    let texts = replacements(&items);
    assert!(texts.contains(&"Silver"));
    assert!(texts.contains(&"Silk"));
    let silver = items.iter().find(|c| c.replacement == "Silver").unwrap();
    assert_eq!(silver.detail.as_deref(), Some("Silber"));
}

#[test]
fn test_english_keywords() {
    let items = completions(&english(), "GIVE 1 ", &CompletionScope::default());
    let texts = replacements(&items);
    for expected in ["ALL", "EACH", "UNIT", "CONTROL", "HERBS"] {
        assert!(texts.contains(&expected), "{expected} missing from {texts:?}");
    }
}

#[test]
fn test_nested_default_is_anchored_to_string_start() {
    let typed = "NACH O S";
    let items = complete(&format!("DEFAULT \"{typed}"));
    assert_eq!(replacements(&items), vec!["NACH O SO", "NACH O SW"]);
    assert!(items.iter().all(|c| c.replaces == typed.len()));
}

#[test]
fn test_nested_default_offers_verbs() {
    let items = complete("DEFAULT \"AR");
    assert_eq!(replacements(&items), vec!["ARBEITE"]);
}

#[rstest]
#[case("; GI")]
#[case("ARBEITE ; ")]
#[case("GIB abc 5 Silber ")]
fn test_nothing_to_complete(#[case] line: &str) {
    assert!(complete(line).is_empty(), "{line:?}: {:?}", complete(line));
}
