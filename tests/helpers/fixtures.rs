//! The shared ruleset fixture, parsers and a completion scope.

use std::sync::Arc;

use eressea::ide::CompletionScope;
use eressea::orders::UnitRef;
use eressea::rules::{RuleSet, fixtures};
use eressea::{Locale, OrderParser, ParserConfig};
use once_cell::sync::Lazy;

/// Built once for the whole test binary.
pub static RULES: Lazy<Arc<RuleSet>> = Lazy::new(|| Arc::new(fixtures::eressea()));

pub fn parser(locale: Locale) -> OrderParser {
    let config = ParserConfig::default().with_order_locale(locale).with_gui_locale(locale);
    OrderParser::new(RULES.clone(), config).expect("fixture parser")
}

pub fn german() -> OrderParser {
    parser(Locale::German)
}

pub fn english() -> OrderParser {
    parser(Locale::English)
}

/// Units `1` and `abc`, TEMP 1, one faction, building and ship, some items.
pub fn scope() -> CompletionScope {
    CompletionScope::default()
        .with_unit(UnitRef::Id(1), "Hugo")
        .with_unit(UnitRef::Id(13368), "Kalle")
        .with_unit(UnitRef::Temp(1), "Rekruten")
        .with_faction(1296, "Die Nordmänner")
        .with_building(100, "Alte Burg")
        .with_ship(7, "Seeadler")
        .with_item("silver", 1200)
        .with_item("sword", 10)
}
