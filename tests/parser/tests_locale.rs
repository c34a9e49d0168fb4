//! The same order typed in German and English parses to the same order.

use rstest::rstest;

use crate::helpers::fixtures::{english, german};
use crate::helpers::order_helpers::parse_valid;

#[rstest]
#[case("ARBEITE", "WORK")]
#[case("@ARBEITE", "@WORK")]
#[case("GIB 1 5 Silber", "GIVE 1 5 Silver")]
#[case("GIB 1 JE 5 Silber", "GIVE 1 EACH 5 Silver")]
#[case("GIB BAUERN ALLES Silber", "GIVE PEASANTS ALL Silver")]
#[case("NACH NO O PAUSE SW", "MOVE NE E PAUSE SW")]
#[case("NACH Nordosten", "MOVE NORTHEAST")]
#[case("LERNE Hiebwaffen 3", "LEARN Melee 3")]
#[case("MACHE BURG 1a", "MAKE CASTLE 1a")]
#[case("MACHE 5 Schwert", "MAKE 5 Sword")]
#[case("KÄMPFE HINTEN", "COMBAT REAR")]
#[case("HELFE 100 GIB NICHT", "HELP 100 GIVE NOT")]
#[case("REKRUTIERE 2 Menschen", "RECRUIT 2 Humans")]
#[case("ZAUBERE STUFE 2 \"Segen der Ernte\"", "CAST LEVEL 2 \"Blessed Harvest\"")]
#[case("BENENNE EINHEIT \"Hugo\"", "NAME UNIT \"Hugo\"")]
#[case("DEFAULT \"ARBEITE\"", "DEFAULT \"WORK\"")]
#[case("ZEIGE ALLES ZAUBER", "SHOW ALL SPELLS")]
#[case("ZEIGE Heiltrank", "SHOW \"Healing Potion\"")]
#[case("OPTION ZUGVORLAGE", "OPTION TEMPLATE")]
#[case("TARNE Zwerge", "HIDE Dwarves")]
#[case("VERKAUFE ALLES Seide", "SELL ALL Silk")]
#[case("ZERSTÖRE STRASSE W", "DESTROY ROAD W")]
fn test_german_and_english_agree(#[case] de: &str, #[case] en: &str) {
    let german = parse_valid(&german(), de);
    let english = parse_valid(&english(), en);
    assert_eq!(german.order, english.order);
}

#[test]
fn test_english_keywords_are_not_german() {
    assert!(!german().parse("GIVE 1 5 Silber").valid());
    assert!(!english().parse("GIB 1 5 Silver").valid());
}

#[test]
fn test_item_names_follow_order_locale() {
    // rule names are matched in the order locale only
    assert!(!german().parse("GIB 1 5 Silver").valid());
    assert!(!english().parse("GIVE 1 5 Silber").valid());
}
