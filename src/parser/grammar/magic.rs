//! CAST and COMBATSPELL.
//!
//! ```text
//! CAST [REGION x y] [LEVEL n] spell [argument...]
//! COMBATSPELL [LEVEL n] spell [NOT]
//! ```
//!
//! Combat spells are only valid for COMBATSPELL, all others only for CAST.

use crate::orders::{CastArgument, CastOrder, OrderKind};
use crate::parser::context::OrderContext;
use crate::parser::errors::ErrorCode;
use crate::parser::hooks::CompletionPoint;
use crate::parser::keywords::OrderKeyword;
use crate::parser::strings::{self, PlainText, StringRules};
use crate::rules::Spell;

use super::OrderHandler;
use super::common::reject_name;

/// Keywords allowed before the first CAST spell name
const CAST_OPTIONS: &[OrderKeyword] = &[OrderKeyword::Region, OrderKeyword::Level];
const LEVEL_OPTION: &[OrderKeyword] = &[OrderKeyword::Level];

fn spell_point(verb: OrderKeyword, combat: bool, options: &'static [OrderKeyword]) -> CompletionPoint {
    CompletionPoint::Spell { verb, combat, options }
}

pub struct CastHandler;

impl OrderHandler for CastHandler {
    fn keyword(&self) -> OrderKeyword {
        OrderKeyword::Cast
    }

    fn is_long(&self) -> bool {
        true
    }

    fn read(&self, cx: &mut OrderContext<'_>) -> bool {
        let verb = OrderKeyword::Cast;
        cx.complete(spell_point(verb, false, CAST_OPTIONS));
        let region = if cx.eat_keyword(OrderKeyword::Region) {
            cx.complete(CompletionPoint::Coordinate { verb });
            let Some(x) = cx.read_signed() else {
                return false;
            };
            cx.complete(CompletionPoint::Coordinate { verb });
            let Some(y) = cx.read_signed() else {
                return false;
            };
            cx.complete(spell_point(verb, false, LEVEL_OPTION));
            Some((x, y))
        } else {
            None
        };

        let level = if cx.eat_keyword(OrderKeyword::Level) {
            match read_level(cx, verb) {
                Some(level) => {
                    cx.complete(spell_point(verb, false, &[]));
                    Some(level)
                }
                None => return false,
            }
        } else {
            None
        };

        let Some(spell) = read_spell(cx, false) else {
            return false;
        };

        let mut args = Vec::new();
        while !cx.at_end() {
            let Some(value) = strings::read_string(cx, StringRules::default().non_final().allow_empty(), &mut PlainText)
            else {
                return false;
            };
            args.push(if value.quoted {
                CastArgument::Quoted(value.text)
            } else {
                CastArgument::Word(value.text)
            });
        }

        cx.set_kind(OrderKind::Cast(CastOrder {
            region,
            level,
            spell: spell.id.clone(),
            args,
        }));
        true
    }
}

pub struct CombatSpellHandler;

impl OrderHandler for CombatSpellHandler {
    fn keyword(&self) -> OrderKeyword {
        OrderKeyword::CombatSpell
    }

    fn read(&self, cx: &mut OrderContext<'_>) -> bool {
        let verb = OrderKeyword::CombatSpell;
        cx.complete(spell_point(verb, true, LEVEL_OPTION));
        let level = if cx.eat_keyword(OrderKeyword::Level) {
            match read_level(cx, verb) {
                Some(level) => {
                    cx.complete(spell_point(verb, true, &[]));
                    Some(level)
                }
                None => return false,
            }
        } else {
            None
        };

        let Some(spell) = read_spell(cx, true) else {
            return false;
        };
        cx.complete(CompletionPoint::Keywords {
            verb,
            options: &[OrderKeyword::Not],
        });
        let not = cx.eat_keyword(OrderKeyword::Not);
        cx.set_kind(OrderKind::CombatSpell {
            level,
            spell: spell.id.clone(),
            not,
        });
        cx.expect_end()
    }
}

fn read_level(cx: &mut OrderContext<'_>, verb: OrderKeyword) -> Option<u32> {
    cx.complete(CompletionPoint::Amount { verb });
    let level = cx.read_number()?;
    if level == 0 {
        let t = cx.pos().saturating_sub(1);
        cx.error(ErrorCode::E0401, t, "spell level must be at least 1");
        return None;
    }
    Some(level)
}

/// A spell name, restricted to combat or non-combat spells.
fn read_spell<'a>(cx: &mut OrderContext<'a>, combat: bool) -> Option<&'a Spell> {
    let rules = cx.rules();
    let start = cx.pos();
    let spell = cx.read_rule(rules.spells(), "spell", None)?;
    if spell.combat != combat {
        let reason = if combat { "is not a combat spell" } else { "is a combat spell" };
        reject_name(cx, start, reason);
        return None;
    }
    Some(spell)
}
