//! Acceptance tables: every verb with typical arguments.

use eressea::OrderKeyword;
use rstest::rstest;

use crate::helpers::fixtures::{english, german};
use crate::helpers::order_helpers::parse_valid;

#[rstest]
#[case("ARBEITE", OrderKeyword::Work)]
#[case("ATTACKIERE abc", OrderKeyword::Attack)]
#[case("BANNER \"Für Ruhm und Silber\"", OrderKeyword::Banner)]
#[case("BEANSPRUCHE 2 Balsam", OrderKeyword::Claim)]
#[case("BEFÖRDERUNG", OrderKeyword::Promote)]
#[case("BEKLAUE abc", OrderKeyword::Steal)]
#[case("BELAGERE xyz", OrderKeyword::Siege)]
#[case("BENENNE EINHEIT \"Hugo\"", OrderKeyword::Name)]
#[case("BENENNE FREMDES GEBÄUDE 12 \"Turm\"", OrderKeyword::Name)]
#[case("BENUTZE Heiltrank", OrderKeyword::Use)]
#[case("BESCHREIBE PRIVAT \"geheim\"", OrderKeyword::Describe)]
#[case("BETRETE BURG 1a", OrderKeyword::Enter)]
#[case("BEWACHE", OrderKeyword::Guard)]
#[case("BEWACHE NICHT", OrderKeyword::Guard)]
#[case("BOTSCHAFT PARTEI xy \"Hallo\"", OrderKeyword::Message)]
#[case("BOTSCHAFT REGION \"Hallo alle\"", OrderKeyword::Message)]
#[case("DEFAULT \"ARBEITE\"", OrderKeyword::Default)]
#[case("EMAIL \"spieler@example.com\"", OrderKeyword::Email)]
#[case("ENDE", OrderKeyword::End)]
#[case("FAHRE abc", OrderKeyword::Ride)]
#[case("FOLGE EINHEIT abc", OrderKeyword::Follow)]
#[case("FOLGE SCHIFF 5", OrderKeyword::Follow)]
#[case("FORSCHE KRÄUTER", OrderKeyword::Research)]
#[case("GIB abc 10 Silber", OrderKeyword::Give)]
#[case("GIB BAUERN ALLES", OrderKeyword::Give)]
#[case("GIB abc EINHEIT", OrderKeyword::Give)]
#[case("GIB abc JE 2 Schwert", OrderKeyword::Give)]
#[case("GRUPPE", OrderKeyword::Group)]
#[case("HELFE xy ALLES", OrderKeyword::Help)]
#[case("HELFE xy KÄMPFE NICHT", OrderKeyword::Help)]
#[case("KÄMPFE", OrderKeyword::Combat)]
#[case("KÄMPFE HINTEN", OrderKeyword::Combat)]
#[case("KÄMPFE HELFE NICHT", OrderKeyword::Combat)]
#[case("KAMPFZAUBER Schockwelle", OrderKeyword::CombatSpell)]
#[case("KAMPFZAUBER STUFE 2 Schockwelle NICHT", OrderKeyword::CombatSpell)]
#[case("KAUFE 10 Balsam", OrderKeyword::Buy)]
#[case("KONTAKTIERE abc", OrderKeyword::Contact)]
#[case("KONTAKTIERE PARTEI xy", OrderKeyword::Contact)]
#[case("LEHRE abc TEMP 3", OrderKeyword::Teach)]
#[case("LERNE Hiebwaffen", OrderKeyword::Learn)]
#[case("LERNE Magie 5", OrderKeyword::Learn)]
#[case("LOCALE de", OrderKeyword::Locale)]
#[case("MACHE TEMP 1", OrderKeyword::Make)]
#[case("MACHE 10 Schwert", OrderKeyword::Make)]
#[case("MACHE BURG", OrderKeyword::Make)]
#[case("MACHE Leuchtturm", OrderKeyword::Make)]
#[case("MACHE Boot 12", OrderKeyword::Make)]
#[case("MACHE STRASSE NO", OrderKeyword::Make)]
#[case("NACH O SO PAUSE W", OrderKeyword::Move)]
#[case("NUMMER EINHEIT abc", OrderKeyword::Number)]
#[case("NUMMER PARTEI", OrderKeyword::Number)]
#[case("OPTION ZUGVORLAGE NICHT", OrderKeyword::Option)]
#[case("PASSWORT \"geheim\"", OrderKeyword::Password)]
#[case("PFLANZE 5 BÄUME", OrderKeyword::Plant)]
#[case("PIRATERIE xy z1", OrderKeyword::Piracy)]
#[case("PRÄFIX \"Nord\"", OrderKeyword::Prefix)]
#[case("REKRUTIERE 5", OrderKeyword::Recruit)]
#[case("REKRUTIERE 5 Elfen", OrderKeyword::Recruit)]
#[case("RESERVIERE 100 Silber", OrderKeyword::Reserve)]
#[case("RESERVIERE JE 1 Schwert", OrderKeyword::Reserve)]
#[case("RESERVIERE ALLES Eisen", OrderKeyword::Reserve)]
#[case("ROUTE O W PAUSE", OrderKeyword::Route)]
#[case("SABOTIERE SCHIFF", OrderKeyword::Sabotage)]
#[case("SORTIERE VOR abc", OrderKeyword::Sort)]
#[case("SPIONIERE abc", OrderKeyword::Spy)]
#[case("SPRACHE en", OrderKeyword::Language)]
#[case("STIRB \"passwort\"", OrderKeyword::Quit)]
#[case("TARNE", OrderKeyword::Hide)]
#[case("TARNE 2", OrderKeyword::Hide)]
#[case("TARNE Zwerge", OrderKeyword::Hide)]
#[case("TARNE PARTEI NICHT", OrderKeyword::Hide)]
#[case("TARNE PARTEI NUMMER xy", OrderKeyword::Hide)]
#[case("TRANSPORTIERE abc", OrderKeyword::Carry)]
#[case("TREIBE", OrderKeyword::Tax)]
#[case("TREIBE 500", OrderKeyword::Tax)]
#[case("UNTERHALTE", OrderKeyword::Entertain)]
#[case("URSPRUNG -3 4", OrderKeyword::Origin)]
#[case("VERGISS Taktik", OrderKeyword::Forget)]
#[case("VERKAUFE ALLES Seide", OrderKeyword::Sell)]
#[case("VERLASSE", OrderKeyword::Leave)]
#[case("ZAUBERE Feuerball", OrderKeyword::Cast)]
#[case("ZAUBERE STUFE 2 \"Segen der Ernte\"", OrderKeyword::Cast)]
#[case("ZAUBERE REGION 1 -2 Feuerball abc", OrderKeyword::Cast)]
#[case("ZEIGE ALLES TRÄNKE", OrderKeyword::Show)]
#[case("ZEIGE Heiltrank", OrderKeyword::Show)]
#[case("ZEIGE Feuerball", OrderKeyword::Show)]
#[case("ZERSTÖRE", OrderKeyword::Destroy)]
#[case("ZERSTÖRE STRASSE W", OrderKeyword::Destroy)]
#[case("ZÜCHTE PFERDE", OrderKeyword::Grow)]
fn test_german_verbs(#[case] line: &str, #[case] verb: OrderKeyword) {
    let result = parse_valid(&german(), line);
    assert_eq!(result.order.verb, Some(verb));
}

#[rstest]
#[case("WORK", OrderKeyword::Work)]
#[case("GIVE 1 5 Silver", OrderKeyword::Give)]
#[case("GIVE PEASANTS ALL Silver", OrderKeyword::Give)]
#[case("MOVE NE NE PAUSE SE", OrderKeyword::Move)]
#[case("NAME UNIT \"Foo\"", OrderKeyword::Name)]
#[case("LEARN Melee 3", OrderKeyword::Learn)]
#[case("MAKE 5 Sword", OrderKeyword::Make)]
#[case("MAKE CASTLE 1a", OrderKeyword::Make)]
#[case("RECRUIT 2 Humans", OrderKeyword::Recruit)]
#[case("CAST \"Blessed Harvest\"", OrderKeyword::Cast)]
#[case("COMBAT REAR", OrderKeyword::Combat)]
#[case("HELP 100 GUARD", OrderKeyword::Help)]
#[case("SELL 5 Silk", OrderKeyword::Sell)]
#[case("SHOW ALL SPELLS", OrderKeyword::Show)]
#[case("DEFAULT \"GIVE 1 5 Silver\"", OrderKeyword::Default)]
fn test_english_verbs(#[case] line: &str, #[case] verb: OrderKeyword) {
    let result = parse_valid(&english(), line);
    assert_eq!(result.order.verb, Some(verb));
}

#[rstest]
#[case("ARBEITE", true)]
#[case("BEKLAUE abc", true)]
#[case("LERNE Magie", true)]
#[case("MACHE 10 Schwert", true)]
#[case("MACHE TEMP 1", false)]
#[case("NACH O", true)]
#[case("ZAUBERE Feuerball", true)]
#[case("KAUFE 10 Balsam", true)]
#[case("FOLGE SCHIFF 5", true)]
#[case("FOLGE EINHEIT abc", false)]
#[case("GIB abc 10 Silber", false)]
#[case("BEWACHE", false)]
#[case("KÄMPFE HINTEN", false)]
#[case("LEHRE abc", true)]
fn test_long_orders(#[case] line: &str, #[case] long: bool) {
    let result = parse_valid(&german(), line);
    assert_eq!(result.order.long, long, "{line}");
}

#[rstest]
#[case("ARB", OrderKeyword::Work)]
#[case("rekr 5", OrderKeyword::Recruit)]
#[case("kaempfe hinten", OrderKeyword::Combat)]
#[case("Gib abc 1 silber", OrderKeyword::Give)]
fn test_abbreviations_and_folding(#[case] line: &str, #[case] verb: OrderKeyword) {
    let result = parse_valid(&german(), line);
    assert_eq!(result.order.verb, Some(verb));
}
