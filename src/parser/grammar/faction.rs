//! Faction-wide settings and combat behaviour.

use smol_str::SmolStr;

use crate::orders::{CombatStatus, EntityKind, HelpCategory, OrderKind, ShowSubject};
use crate::parser::context::OrderContext;
use crate::parser::errors::{ErrorCode, SyntaxError};
use crate::parser::hooks::CompletionPoint;
use crate::parser::keywords::OrderKeyword;
use crate::parser::strings::{self, PlainText, StringRules};
use crate::parser::syntax_kind::SyntaxKind;
use crate::rules::{NameMatch, resolve_name};

use super::OrderHandler;
use super::common::{entity_kind, read_entity_id};

const COMBAT_OPTIONS: &[OrderKeyword] = &[
    OrderKeyword::Aggressive,
    OrderKeyword::Front,
    OrderKeyword::Rear,
    OrderKeyword::Defensive,
    OrderKeyword::Not,
    OrderKeyword::Flee,
    OrderKeyword::Help,
];

/// `COMBAT [AGGRESSIVE | FRONT | REAR | DEFENSIVE | NOT | FLEE | HELP [NOT]]`
///
/// Without an argument the unit fights in the front row.
pub struct CombatHandler;

impl OrderHandler for CombatHandler {
    fn keyword(&self) -> OrderKeyword {
        OrderKeyword::Combat
    }

    fn read(&self, cx: &mut OrderContext<'_>) -> bool {
        let verb = OrderKeyword::Combat;
        cx.complete(CompletionPoint::Keywords {
            verb,
            options: COMBAT_OPTIONS,
        });
        let status = if cx.at_end() {
            CombatStatus::Front
        } else {
            match cx.eat_any_keyword(COMBAT_OPTIONS) {
                Some(OrderKeyword::Aggressive) => CombatStatus::Aggressive,
                Some(OrderKeyword::Front) => CombatStatus::Front,
                Some(OrderKeyword::Rear) => CombatStatus::Rear,
                Some(OrderKeyword::Defensive) => CombatStatus::Defensive,
                Some(OrderKeyword::Not) => CombatStatus::NotFighting,
                Some(OrderKeyword::Flee) => CombatStatus::Flee,
                Some(_) => {
                    cx.complete(CompletionPoint::Keywords {
                        verb,
                        options: &[OrderKeyword::Not],
                    });
                    if cx.eat_keyword(OrderKeyword::Not) {
                        CombatStatus::NotHelping
                    } else {
                        CombatStatus::Helping
                    }
                }
                None => return cx.unexpected("combat status"),
            }
        };
        cx.set_kind(OrderKind::Combat(status));
        cx.expect_end()
    }
}

/// `GUARD [NOT]`
pub struct GuardHandler;

impl OrderHandler for GuardHandler {
    fn keyword(&self) -> OrderKeyword {
        OrderKeyword::Guard
    }

    fn read(&self, cx: &mut OrderContext<'_>) -> bool {
        cx.complete(CompletionPoint::Keywords {
            verb: OrderKeyword::Guard,
            options: &[OrderKeyword::Not],
        });
        let not = cx.eat_keyword(OrderKeyword::Not);
        cx.set_kind(OrderKind::Guard { not });
        cx.expect_end()
    }
}

const HELP_CATEGORIES: &[OrderKeyword] = &[
    OrderKeyword::All,
    OrderKeyword::Give,
    OrderKeyword::Combat,
    OrderKeyword::Guard,
    OrderKeyword::Silver,
    OrderKeyword::FactionStealth,
];

/// `HELP faction category [NOT]`
pub struct HelpHandler;

impl OrderHandler for HelpHandler {
    fn keyword(&self) -> OrderKeyword {
        OrderKeyword::Help
    }

    fn read(&self, cx: &mut OrderContext<'_>) -> bool {
        let verb = OrderKeyword::Help;
        let Some(faction) = read_entity_id(cx, verb, EntityKind::Faction) else {
            return false;
        };
        cx.complete(CompletionPoint::Keywords {
            verb,
            options: HELP_CATEGORIES,
        });
        let Some(category) = cx
            .eat_any_keyword(HELP_CATEGORIES)
            .and_then(|k| HelpCategory::ALL.into_iter().find(|c| c.keyword() == k))
        else {
            return cx.unexpected("help category");
        };
        cx.complete(CompletionPoint::Keywords {
            verb,
            options: &[OrderKeyword::Not],
        });
        let not = cx.eat_keyword(OrderKeyword::Not);
        cx.set_kind(OrderKind::Help { faction, category, not });
        cx.expect_end()
    }
}

/// `OPTION option [NOT]`
pub struct OptionHandler;

impl OrderHandler for OptionHandler {
    fn keyword(&self) -> OrderKeyword {
        OrderKeyword::Option
    }

    fn read(&self, cx: &mut OrderContext<'_>) -> bool {
        let verb = OrderKeyword::Option;
        cx.complete(CompletionPoint::Keywords {
            verb,
            options: OrderKeyword::OPTIONS,
        });
        let Some(option) = cx.eat_any_keyword(OrderKeyword::OPTIONS) else {
            return cx.unexpected("report option");
        };
        cx.complete(CompletionPoint::Keywords {
            verb,
            options: &[OrderKeyword::Not],
        });
        let not = cx.eat_keyword(OrderKeyword::Not);
        cx.set_kind(OrderKind::Option { option, not });
        cx.expect_end()
    }
}

const NUMBERED: &[OrderKeyword] = &[
    OrderKeyword::Unit,
    OrderKeyword::Ship,
    OrderKeyword::Building,
    OrderKeyword::Castle,
    OrderKeyword::Faction,
];

/// `NUMBER kind [id]`; without an id a new random one is chosen
pub struct NumberHandler;

impl OrderHandler for NumberHandler {
    fn keyword(&self) -> OrderKeyword {
        OrderKeyword::Number
    }

    fn read(&self, cx: &mut OrderContext<'_>) -> bool {
        let verb = OrderKeyword::Number;
        cx.complete(CompletionPoint::Keywords {
            verb,
            options: NUMBERED,
        });
        let Some(kind) = cx.eat_any_keyword(NUMBERED).and_then(entity_kind) else {
            return cx.unexpected("unit, ship, building or faction");
        };
        let id = if cx.at_end() {
            None
        } else {
            match cx.read_id("id") {
                Some(id) => Some(id),
                None => return false,
            }
        };
        cx.set_kind(OrderKind::Number { kind, id });
        cx.expect_end()
    }
}

/// `PIRACY [faction...]`
pub struct PiracyHandler;

impl OrderHandler for PiracyHandler {
    fn keyword(&self) -> OrderKeyword {
        OrderKeyword::Piracy
    }

    fn is_long(&self) -> bool {
        true
    }

    fn read(&self, cx: &mut OrderContext<'_>) -> bool {
        let verb = OrderKeyword::Piracy;
        let mut factions = Vec::new();
        loop {
            if cx.at_end() {
                cx.complete(CompletionPoint::Faction { verb });
                break;
            }
            match read_entity_id(cx, verb, EntityKind::Faction) {
                Some(id) => factions.push(id),
                None => return false,
            }
        }
        cx.set_kind(OrderKind::Piracy { factions });
        true
    }
}

/// `ORIGIN x y`
pub struct OriginHandler;

impl OrderHandler for OriginHandler {
    fn keyword(&self) -> OrderKeyword {
        OrderKeyword::Origin
    }

    fn read(&self, cx: &mut OrderContext<'_>) -> bool {
        let verb = OrderKeyword::Origin;
        cx.complete(CompletionPoint::Coordinate { verb });
        let Some(x) = cx.read_signed() else {
            return false;
        };
        cx.complete(CompletionPoint::Coordinate { verb });
        let Some(y) = cx.read_signed() else {
            return false;
        };
        cx.set_kind(OrderKind::Origin { x, y });
        cx.expect_end()
    }
}

const SHOW_ALL: &[OrderKeyword] = &[OrderKeyword::Potions, OrderKeyword::Spells];

/// `SHOW ALL (POTIONS | SPELLS) | SHOW name`
///
/// A name is a spell or a potion.
pub struct ShowHandler;

impl OrderHandler for ShowHandler {
    fn keyword(&self) -> OrderKeyword {
        OrderKeyword::Show
    }

    fn read(&self, cx: &mut OrderContext<'_>) -> bool {
        let verb = OrderKeyword::Show;
        cx.complete(CompletionPoint::Shown);
        let subject = if cx.eat_keyword(OrderKeyword::All) {
            cx.complete(CompletionPoint::Keywords {
                verb,
                options: SHOW_ALL,
            });
            match cx.eat_any_keyword(SHOW_ALL) {
                Some(what) => ShowSubject::All(what),
                None => return cx.unexpected("POTIONS or SPELLS"),
            }
        } else {
            match read_shown_name(cx) {
                Some(id) => ShowSubject::Name(id),
                None => return false,
            }
        };
        cx.set_kind(OrderKind::Show(subject));
        cx.expect_end()
    }
}

/// Spells are searched first; an item name is used only if no spell matches.
fn read_shown_name(cx: &mut OrderContext<'_>) -> Option<SmolStr> {
    let start = cx.pos();
    if !cx.is_word(start) && cx.kind(start) != SyntaxKind::OPENING_QUOTE {
        cx.unexpected("spell or potion");
        return None;
    }
    let value = strings::read_string(cx, StringRules::default().non_final(), &mut PlainText)?;

    let rules = cx.rules();
    let locale = cx.locale();
    let found = match resolve_name(rules.spells(), &value.text, locale) {
        NameMatch::Unique(spell) => Ok(spell.id.clone()),
        NameMatch::Ambiguous => Err(true),
        NameMatch::NotFound => match resolve_name(rules.item_types(), &value.text, locale) {
            NameMatch::Unique(item) => Ok(item.id.clone()),
            NameMatch::Ambiguous => Err(true),
            NameMatch::NotFound => Err(false),
        },
    };

    match found {
        Ok(id) => {
            cx.tag(value.token, SyntaxKind::STRING);
            Some(id)
        }
        Err(ambiguous) => {
            cx.tag(value.token, SyntaxKind::UNDEFINED);
            let range = cx.token(value.token).range;
            let error = if ambiguous {
                SyntaxError::new(format!("\"{}\" matches more than one name", value.text), range, ErrorCode::E0502)
                    .with_hint("type more of the name")
            } else {
                SyntaxError::new(format!("unknown spell or potion \"{}\"", value.text), range, ErrorCode::E0501)
            };
            cx.push(error);
            None
        }
    }
}
