//! Verbs that make, gather or trade things.

use smol_str::SmolStr;

use crate::orders::{Amount, EntityKind, MakeOrder, MakeTarget, OrderKind};
use crate::parser::context::OrderContext;
use crate::parser::errors::{ErrorCode, SyntaxError};
use crate::parser::hooks::CompletionPoint;
use crate::parser::keywords::OrderKeyword;
use crate::parser::strings::{self, PlainText, StringRules};
use crate::parser::syntax_kind::SyntaxKind;
use crate::rules::{ItemCategory, NameMatch, Named, resolve_name};

use super::OrderHandler;
use super::common::{read_amount, read_direction, read_optional_number, reject_name};

// ============================================================================
// MAKE
// ============================================================================

/// `MAKE TEMP id ["name"]` or `MAKE [amount] target`
///
/// ```text
/// target := ROAD dir | CASTLE [id] | BUILDING [id] | SHIP [id]
///         | item | building type [id] | ship type [id]
/// ```
///
/// A typed name is looked up among items, then building types, then ship
/// types; the first kind with any match decides.
pub struct MakeHandler;

impl OrderHandler for MakeHandler {
    fn keyword(&self) -> OrderKeyword {
        OrderKeyword::Make
    }

    fn is_long(&self) -> bool {
        true
    }

    fn read(&self, cx: &mut OrderContext<'_>) -> bool {
        let verb = OrderKeyword::Make;
        cx.complete(CompletionPoint::MakeTarget { amount: None });

        if cx.eat_keyword(OrderKeyword::Temp) {
            // opening a unit takes no turn
            cx.set_long(false);
            return read_make_temp(cx);
        }

        let Ok(amount) = read_optional_number(cx) else {
            return false;
        };
        if amount.is_some() {
            cx.complete(CompletionPoint::MakeTarget { amount });
        }

        let target = if cx.eat_keyword(OrderKeyword::Road) {
            match read_direction(cx, verb) {
                Some(direction) => MakeTarget::Road(direction),
                None => return false,
            }
        } else if cx.eat_keyword(OrderKeyword::Castle) {
            let castle = cx.rules().building_types().iter().find(|b| b.castle).map(|b| b.id.clone());
            let Ok(id) = read_optional_id(cx, EntityKind::Castle) else {
                return false;
            };
            MakeTarget::Building {
                building_type: castle,
                id,
            }
        } else if cx.eat_keyword(OrderKeyword::Building) {
            let Ok(id) = read_optional_id(cx, EntityKind::Building) else {
                return false;
            };
            MakeTarget::Building {
                building_type: None,
                id,
            }
        } else if cx.eat_keyword(OrderKeyword::Ship) {
            let Ok(id) = read_optional_id(cx, EntityKind::Ship) else {
                return false;
            };
            MakeTarget::Ship { ship_type: None, id }
        } else {
            match read_make_name(cx) {
                Some(target) => target,
                None => return false,
            }
        };

        cx.set_kind(OrderKind::Make(MakeOrder { amount, target }));
        cx.expect_end()
    }
}

fn read_make_temp(cx: &mut OrderContext<'_>) -> bool {
    let verb = OrderKeyword::Make;
    cx.complete(CompletionPoint::TempUnit { verb });
    let Some(id) = cx.read_id("TEMP number") else {
        return false;
    };
    let rules = StringRules::default()
        .end_allowed()
        .completion(CompletionPoint::QuotedText { verb });
    let Some(name) = strings::read_string(cx, rules, &mut PlainText) else {
        return false;
    };
    cx.set_kind(OrderKind::MakeTemp {
        id,
        name: name.into_text(),
    });
    true
}

/// An optional building or ship id after the type.
fn read_optional_id(cx: &mut OrderContext<'_>, kind: EntityKind) -> Result<Option<u32>, ()> {
    cx.complete(CompletionPoint::Container {
        verb: OrderKeyword::Make,
        kind,
    });
    if cx.at_end() {
        return Ok(None);
    }
    cx.read_id("building or ship id").map(Some).ok_or(())
}

/// Result of looking up one kind of makeable thing
enum Lookup {
    Found(MakeTarget),
    Ambiguous,
    Missing,
}

fn lookup<T: Named>(candidates: &[T], text: &str, cx: &OrderContext<'_>, wrap: impl FnOnce(SmolStr) -> MakeTarget) -> Lookup {
    match resolve_name(candidates, text, cx.locale()) {
        NameMatch::Unique(found) => Lookup::Found(wrap(SmolStr::new(found.id()))),
        NameMatch::Ambiguous => Lookup::Ambiguous,
        NameMatch::NotFound => Lookup::Missing,
    }
}

fn read_make_name(cx: &mut OrderContext<'_>) -> Option<MakeTarget> {
    let start = cx.pos();
    if !cx.is_word(start) && cx.kind(start) != SyntaxKind::OPENING_QUOTE {
        cx.unexpected("item, building or ship");
        return None;
    }
    let value = strings::read_string(cx, StringRules::default().non_final(), &mut PlainText)?;

    let rules = cx.rules();
    let mut found = lookup(rules.item_types(), &value.text, cx, MakeTarget::Item);
    if matches!(found, Lookup::Missing) {
        found = lookup(rules.building_types(), &value.text, cx, |id| MakeTarget::Building {
            building_type: Some(id),
            id: None,
        });
    }
    if matches!(found, Lookup::Missing) {
        found = lookup(rules.ship_types(), &value.text, cx, |id| MakeTarget::Ship {
            ship_type: Some(id),
            id: None,
        });
    }

    let mut target = match found {
        Lookup::Found(target) => {
            cx.tag(value.token, SyntaxKind::STRING);
            target
        }
        Lookup::Ambiguous => {
            cx.tag(value.token, SyntaxKind::UNDEFINED);
            let range = cx.token(value.token).range;
            cx.push(
                SyntaxError::new(format!("\"{}\" matches more than one thing to make", value.text), range, ErrorCode::E0502)
                    .with_hint("type more of the name"),
            );
            return None;
        }
        Lookup::Missing => {
            cx.tag(value.token, SyntaxKind::UNDEFINED);
            let message = format!("cannot make \"{}\"", value.text);
            cx.error(ErrorCode::E0501, value.token, message);
            return None;
        }
    };

    // a building or ship under construction may follow its type
    let kind = match target {
        MakeTarget::Building { .. } => Some(EntityKind::Building),
        MakeTarget::Ship { .. } => Some(EntityKind::Ship),
        _ => None,
    };
    if let Some(kind) = kind {
        let Ok(read) = read_optional_id(cx, kind) else {
            return None;
        };
        if let MakeTarget::Building { id, .. } | MakeTarget::Ship { id, .. } = &mut target {
            *id = read;
        }
    }
    Some(target)
}

// ============================================================================
// Recruiting and farming
// ============================================================================

/// `RECRUIT amount [race]`
pub struct RecruitHandler;

impl OrderHandler for RecruitHandler {
    fn keyword(&self) -> OrderKeyword {
        OrderKeyword::Recruit
    }

    fn is_long(&self) -> bool {
        true
    }

    fn read(&self, cx: &mut OrderContext<'_>) -> bool {
        let verb = OrderKeyword::Recruit;
        cx.complete(CompletionPoint::Amount { verb });
        let Some(amount) = cx.read_number() else {
            return false;
        };
        let point = CompletionPoint::Race { verb };
        let race = if cx.at_end() {
            cx.complete(point);
            None
        } else {
            let rules = cx.rules();
            let start = cx.pos();
            let race = match cx.read_rule(rules.races(), "race", Some(point)) {
                Some(race) => race,
                None => return false,
            };
            if !race.playable {
                return reject_name(cx, start, "cannot be recruited");
            }
            Some(race.id.clone())
        };
        cx.set_kind(OrderKind::Recruit { amount, race });
        cx.expect_end()
    }
}

const PLANTABLE: &[OrderKeyword] = &[
    OrderKeyword::Herbs,
    OrderKeyword::Trees,
    OrderKeyword::Seeds,
    OrderKeyword::MallornSeeds,
];

/// `PLANT [amount] (HERBS | TREES | SEEDS | MALLORNSEEDS)`
pub struct PlantHandler;

impl OrderHandler for PlantHandler {
    fn keyword(&self) -> OrderKeyword {
        OrderKeyword::Plant
    }

    fn is_long(&self) -> bool {
        true
    }

    fn read(&self, cx: &mut OrderContext<'_>) -> bool {
        let point = CompletionPoint::Keywords {
            verb: OrderKeyword::Plant,
            options: PLANTABLE,
        };
        cx.complete(point);
        let Ok(amount) = read_optional_number(cx) else {
            return false;
        };
        if amount.is_some() {
            cx.complete(point);
        }
        let Some(what) = cx.eat_any_keyword(PLANTABLE) else {
            return cx.unexpected("HERBS, TREES or SEEDS");
        };
        cx.set_kind(OrderKind::Plant { amount, what });
        cx.expect_end()
    }
}

const GROWABLE: &[OrderKeyword] = &[OrderKeyword::Horses, OrderKeyword::Herbs];

/// `GROW (HORSES | HERBS)`
pub struct GrowHandler;

impl OrderHandler for GrowHandler {
    fn keyword(&self) -> OrderKeyword {
        OrderKeyword::Grow
    }

    fn is_long(&self) -> bool {
        true
    }

    fn read(&self, cx: &mut OrderContext<'_>) -> bool {
        cx.complete(CompletionPoint::Keywords {
            verb: OrderKeyword::Grow,
            options: GROWABLE,
        });
        let Some(what) = cx.eat_any_keyword(GROWABLE) else {
            return cx.unexpected("HORSES or HERBS");
        };
        cx.set_kind(OrderKind::Grow { what });
        cx.expect_end()
    }
}

const DESTROY_OPTIONS: &[OrderKeyword] = &[OrderKeyword::Road];

/// `DESTROY [amount] [ROAD dir]`
pub struct DestroyHandler;

impl OrderHandler for DestroyHandler {
    fn keyword(&self) -> OrderKeyword {
        OrderKeyword::Destroy
    }

    fn read(&self, cx: &mut OrderContext<'_>) -> bool {
        let verb = OrderKeyword::Destroy;
        let point = CompletionPoint::Keywords {
            verb,
            options: DESTROY_OPTIONS,
        };
        cx.complete(point);
        let Ok(amount) = read_optional_number(cx) else {
            return false;
        };
        if amount.is_some() {
            cx.complete(point);
        }
        let road = if cx.eat_keyword(OrderKeyword::Road) {
            match read_direction(cx, verb) {
                Some(direction) => Some(direction),
                None => return false,
            }
        } else {
            None
        };
        cx.set_kind(OrderKind::Destroy { amount, road });
        cx.expect_end()
    }
}

// ============================================================================
// Items
// ============================================================================

/// `[amount] item`, shared by CLAIM and USE
fn read_counted_item(cx: &mut OrderContext<'_>, verb: OrderKeyword) -> Option<(Option<u32>, SmolStr)> {
    let point = CompletionPoint::Item { verb };
    cx.complete(point);
    let amount = read_optional_number(cx).ok()?;
    let rules = cx.rules();
    let item = cx.read_rule(rules.item_types(), "item", amount.map(|_| point))?;
    Some((amount, item.id.clone()))
}

/// `CLAIM [amount] item`
pub struct ClaimHandler;

impl OrderHandler for ClaimHandler {
    fn keyword(&self) -> OrderKeyword {
        OrderKeyword::Claim
    }

    fn read(&self, cx: &mut OrderContext<'_>) -> bool {
        let Some((amount, item)) = read_counted_item(cx, OrderKeyword::Claim) else {
            return false;
        };
        cx.set_kind(OrderKind::Claim { amount, item });
        cx.expect_end()
    }
}

/// `USE [amount] item`
pub struct UseHandler;

impl OrderHandler for UseHandler {
    fn keyword(&self) -> OrderKeyword {
        OrderKeyword::Use
    }

    fn read(&self, cx: &mut OrderContext<'_>) -> bool {
        let Some((amount, item)) = read_counted_item(cx, OrderKeyword::Use) else {
            return false;
        };
        cx.set_kind(OrderKind::Use { amount, item });
        cx.expect_end()
    }
}

/// `BUY amount luxury` and `SELL (amount | ALL) luxury`
pub struct TradeHandler {
    keyword: OrderKeyword,
}

impl TradeHandler {
    pub const fn buy() -> Self {
        Self {
            keyword: OrderKeyword::Buy,
        }
    }

    pub const fn sell() -> Self {
        Self {
            keyword: OrderKeyword::Sell,
        }
    }
}

impl OrderHandler for TradeHandler {
    fn keyword(&self) -> OrderKeyword {
        self.keyword
    }

    fn is_long(&self) -> bool {
        true
    }

    fn read(&self, cx: &mut OrderContext<'_>) -> bool {
        let verb = self.keyword;
        let amount = if verb == OrderKeyword::Sell {
            match read_amount(cx, CompletionPoint::Amount { verb }) {
                Some(amount) => amount,
                None => return false,
            }
        } else {
            cx.complete(CompletionPoint::Amount { verb });
            match cx.read_number() {
                Some(n) => Amount::Count(n),
                None => return false,
            }
        };

        let rules = cx.rules();
        let start = cx.pos();
        let Some(item) = cx.read_rule(rules.item_types(), "luxury good", Some(CompletionPoint::Item { verb })) else {
            return false;
        };
        if item.category != ItemCategory::Luxury {
            return reject_name(cx, start, "is not a luxury good");
        }
        cx.set_kind(OrderKind::Trade {
            amount,
            item: item.id.clone(),
        });
        cx.expect_end()
    }
}
