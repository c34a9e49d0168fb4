use crate::orders::{ContactTarget, EntityKind, HideOrder, OrderKind};
use crate::parser::context::OrderContext;
use crate::parser::hooks::CompletionPoint;
use crate::parser::keywords::OrderKeyword;

use super::OrderHandler;
use super::common::read_entity_id;

/// `TEACH unit...`
pub struct TeachHandler;

impl OrderHandler for TeachHandler {
    fn keyword(&self) -> OrderKeyword {
        OrderKeyword::Teach
    }

    fn is_long(&self) -> bool {
        true
    }

    fn read(&self, cx: &mut OrderContext<'_>) -> bool {
        let point = CompletionPoint::UnitTarget { verb: OrderKeyword::Teach };
        let mut targets = Vec::new();
        loop {
            if cx.at_end() {
                cx.complete(point);
                break;
            }
            match cx.read_unit_ref(OrderKeyword::Teach, Some(point)) {
                Some(unit) => targets.push(unit),
                None => return false,
            }
        }
        if targets.is_empty() {
            return cx.unexpected("unit id");
        }
        cx.set_kind(OrderKind::Teach { targets });
        true
    }
}

/// `CONTACT [UNIT] [TEMP] id | CONTACT FACTION id`
pub struct ContactHandler;

impl OrderHandler for ContactHandler {
    fn keyword(&self) -> OrderKeyword {
        OrderKeyword::Contact
    }

    fn read(&self, cx: &mut OrderContext<'_>) -> bool {
        let verb = OrderKeyword::Contact;
        cx.complete(CompletionPoint::ContactTarget);
        let target = if cx.eat_keyword(OrderKeyword::Faction) {
            match read_entity_id(cx, verb, EntityKind::Faction) {
                Some(id) => ContactTarget::Faction(id),
                None => return false,
            }
        } else {
            let point = cx
                .eat_keyword(OrderKeyword::Unit)
                .then_some(CompletionPoint::UnitTarget { verb });
            match cx.read_unit_ref(verb, point) {
                Some(unit) => ContactTarget::Unit(unit),
                None => return false,
            }
        };
        cx.set_kind(OrderKind::Contact(target));
        cx.expect_end()
    }
}

const SORT_POSITIONS: &[OrderKeyword] = &[OrderKeyword::Before, OrderKeyword::Behind];

/// `SORT (BEFORE | BEHIND) unit`
pub struct SortHandler;

impl OrderHandler for SortHandler {
    fn keyword(&self) -> OrderKeyword {
        OrderKeyword::Sort
    }

    fn read(&self, cx: &mut OrderContext<'_>) -> bool {
        let verb = OrderKeyword::Sort;
        cx.complete(CompletionPoint::Keywords {
            verb,
            options: SORT_POSITIONS,
        });
        let Some(position) = cx.eat_any_keyword(SORT_POSITIONS) else {
            return cx.unexpected("BEFORE or BEHIND");
        };
        let Some(target) = cx.read_unit_ref(verb, Some(CompletionPoint::UnitTarget { verb })) else {
            return false;
        };
        cx.set_kind(OrderKind::Sort {
            before: position == OrderKeyword::Before,
            target,
        });
        cx.expect_end()
    }
}

const HIDE_FACTION_OPTIONS: &[OrderKeyword] = &[OrderKeyword::Not, OrderKeyword::Number];

/// `HIDE [level | race | FACTION [NOT | NUMBER id]]`
pub struct HideHandler;

impl OrderHandler for HideHandler {
    fn keyword(&self) -> OrderKeyword {
        OrderKeyword::Hide
    }

    fn read(&self, cx: &mut OrderContext<'_>) -> bool {
        let verb = OrderKeyword::Hide;
        cx.complete(CompletionPoint::Race { verb });

        let hide = if cx.at_end() {
            HideOrder::Level(None)
        } else if cx.is_number() {
            match cx.read_number() {
                Some(level) => HideOrder::Level(Some(level)),
                None => return false,
            }
        } else if cx.eat_keyword(OrderKeyword::Faction) {
            cx.complete(CompletionPoint::Keywords {
                verb,
                options: HIDE_FACTION_OPTIONS,
            });
            if cx.eat_keyword(OrderKeyword::Not) {
                HideOrder::Faction { not: true }
            } else if cx.eat_keyword(OrderKeyword::Number) {
                match read_entity_id(cx, verb, EntityKind::Faction) {
                    Some(id) => HideOrder::FactionNumber(id),
                    None => return false,
                }
            } else {
                HideOrder::Faction { not: false }
            }
        } else {
            let rules = cx.rules();
            match cx.read_rule(rules.races(), "race", None) {
                Some(race) => HideOrder::Race(race.id.clone()),
                None => return false,
            }
        };
        cx.set_kind(OrderKind::Hide(hide));
        cx.expect_end()
    }
}
