//! GIVE and RESERVE.
//!
//! ```text
//! GIVE target (UNIT | CONTROL | HERBS | ALL [item] | [EACH] amount item)
//! target  := PEASANTS | [TEMP] id
//! RESERVE (ALL | [EACH] amount) item
//! ```

use crate::orders::{Amount, GiveOrder, GiveTarget, GiveWhat, OrderKind};
use crate::parser::context::OrderContext;
use crate::parser::hooks::CompletionPoint;
use crate::parser::keywords::OrderKeyword;

use super::OrderHandler;

const GIVE_OBJECTS: &[OrderKeyword] = &[OrderKeyword::Unit, OrderKeyword::Control, OrderKeyword::Herbs];

pub struct GiveHandler;

impl OrderHandler for GiveHandler {
    fn keyword(&self) -> OrderKeyword {
        OrderKeyword::Give
    }

    fn read(&self, cx: &mut OrderContext<'_>) -> bool {
        let Some(target) = read_target(cx) else {
            return false;
        };

        cx.complete(CompletionPoint::GiveQuantity { target });
        if let Some(object) = cx.eat_any_keyword(GIVE_OBJECTS) {
            let what = match object {
                OrderKeyword::Unit => GiveWhat::Unit,
                OrderKeyword::Control => GiveWhat::Control,
                _ => GiveWhat::Herbs,
            };
            cx.set_kind(OrderKind::Give(GiveOrder { target, what }));
            return cx.expect_end();
        }

        if cx.eat_keyword(OrderKeyword::All) {
            return read_all(cx, target);
        }

        let each = cx.eat_keyword(OrderKeyword::Each);
        if each {
            cx.complete(CompletionPoint::Amount { verb: OrderKeyword::Give });
        }
        if !cx.is_number() {
            return cx.unexpected("amount");
        }
        let Some(amount) = cx.read_number() else {
            return false;
        };

        let amount = Amount::Count(amount);
        let rules = cx.rules();
        let point = CompletionPoint::GiveItem { target, amount, each };
        let Some(item) = cx.read_rule(rules.item_types(), "item", Some(point)) else {
            return false;
        };
        cx.set_kind(OrderKind::Give(GiveOrder {
            target,
            what: GiveWhat::Items {
                each,
                amount,
                item: Some(item.id.clone()),
            },
        }));
        cx.expect_end()
    }
}

fn read_target(cx: &mut OrderContext<'_>) -> Option<GiveTarget> {
    cx.complete(CompletionPoint::GiveTarget);
    if cx.eat_keyword(OrderKeyword::Peasants) {
        return Some(GiveTarget::Peasants);
    }
    cx.read_unit_ref(OrderKeyword::Give, None).map(GiveTarget::Unit)
}

/// `ALL` gives everything, `ALL item` all of one item.
fn read_all(cx: &mut OrderContext<'_>, target: GiveTarget) -> bool {
    let point = CompletionPoint::GiveItem {
        target,
        amount: Amount::All,
        each: false,
    };
    let item = if cx.at_end() {
        cx.complete(point);
        None
    } else {
        let rules = cx.rules();
        match cx.read_rule(rules.item_types(), "item", Some(point)) {
            Some(item) => Some(item.id.clone()),
            None => return false,
        }
    };
    cx.set_kind(OrderKind::Give(GiveOrder {
        target,
        what: GiveWhat::Items {
            each: false,
            amount: Amount::All,
            item,
        },
    }));
    cx.expect_end()
}

pub struct ReserveHandler;

impl OrderHandler for ReserveHandler {
    fn keyword(&self) -> OrderKeyword {
        OrderKeyword::Reserve
    }

    fn read(&self, cx: &mut OrderContext<'_>) -> bool {
        cx.complete(CompletionPoint::Amount { verb: OrderKeyword::Reserve });
        let (each, amount) = if cx.eat_keyword(OrderKeyword::All) {
            (false, Amount::All)
        } else {
            let each = cx.eat_keyword(OrderKeyword::Each);
            if each {
                cx.complete(CompletionPoint::Amount { verb: OrderKeyword::Reserve });
            }
            if !cx.is_number() {
                return cx.unexpected("amount");
            }
            match cx.read_number() {
                Some(n) => (each, Amount::Count(n)),
                None => return false,
            }
        };

        let rules = cx.rules();
        let point = CompletionPoint::Item { verb: OrderKeyword::Reserve };
        let Some(item) = cx.read_rule(rules.item_types(), "item", Some(point)) else {
            return false;
        };
        cx.set_kind(OrderKind::Reserve {
            each,
            amount,
            item: item.id.clone(),
        });
        cx.expect_end()
    }
}
