//! Handlers shared by several verbs, and argument readers used across the
//! grammar.

use crate::orders::{Amount, ContainerRef, Direction, EntityKind, OrderKind};
use crate::parser::context::OrderContext;
use crate::parser::errors::ErrorCode;
use crate::parser::hooks::CompletionPoint;
use crate::parser::keywords::OrderKeyword;
use crate::parser::strings::{self, PlainText, StringRules};
use crate::parser::syntax_kind::SyntaxKind;

use super::OrderHandler;

// ============================================================================
// Shared handlers
// ============================================================================

/// A verb without arguments
pub struct SimpleHandler {
    keyword: OrderKeyword,
    long: bool,
}

impl SimpleHandler {
    pub const fn short(keyword: OrderKeyword) -> Self {
        Self { keyword, long: false }
    }

    pub const fn long(keyword: OrderKeyword) -> Self {
        Self { keyword, long: true }
    }
}

impl OrderHandler for SimpleHandler {
    fn keyword(&self) -> OrderKeyword {
        self.keyword
    }

    fn is_long(&self) -> bool {
        self.long
    }

    fn read(&self, cx: &mut OrderContext<'_>) -> bool {
        cx.set_kind(OrderKind::Simple);
        cx.expect_end()
    }
}

/// `VERB [TEMP] unit`
pub struct UnitTargetHandler {
    keyword: OrderKeyword,
    long: bool,
}

impl UnitTargetHandler {
    pub const fn short(keyword: OrderKeyword) -> Self {
        Self { keyword, long: false }
    }

    pub const fn long(keyword: OrderKeyword) -> Self {
        Self { keyword, long: true }
    }
}

impl OrderHandler for UnitTargetHandler {
    fn keyword(&self) -> OrderKeyword {
        self.keyword
    }

    fn is_long(&self) -> bool {
        self.long
    }

    fn read(&self, cx: &mut OrderContext<'_>) -> bool {
        let point = CompletionPoint::UnitTarget { verb: self.keyword };
        let Some(target) = cx.read_unit_ref(self.keyword, Some(point)) else {
            return false;
        };
        cx.set_kind(OrderKind::UnitArgument { target });
        cx.expect_end()
    }
}

/// `VERB "text"`, where the text may be optional
pub struct TextHandler {
    keyword: OrderKeyword,
    optional: bool,
}

impl TextHandler {
    pub const fn required(keyword: OrderKeyword) -> Self {
        Self { keyword, optional: false }
    }

    pub const fn optional(keyword: OrderKeyword) -> Self {
        Self { keyword, optional: true }
    }
}

impl OrderHandler for TextHandler {
    fn keyword(&self) -> OrderKeyword {
        self.keyword
    }

    fn read(&self, cx: &mut OrderContext<'_>) -> bool {
        let point = CompletionPoint::QuotedText { verb: self.keyword };
        let mut rules = StringRules::default().completion(point);
        if self.optional {
            rules = rules.end_allowed();
        }
        let Some(value) = strings::read_string(cx, rules, &mut PlainText) else {
            return false;
        };
        cx.set_kind(OrderKind::Text { text: value.into_text() });
        true
    }
}

/// `TAX [amount]` / `ENTERTAIN [amount]`
pub struct ProduceHandler {
    keyword: OrderKeyword,
}

impl ProduceHandler {
    pub const fn new(keyword: OrderKeyword) -> Self {
        Self { keyword }
    }
}

impl OrderHandler for ProduceHandler {
    fn keyword(&self) -> OrderKeyword {
        self.keyword
    }

    fn is_long(&self) -> bool {
        true
    }

    fn read(&self, cx: &mut OrderContext<'_>) -> bool {
        cx.complete(CompletionPoint::Amount { verb: self.keyword });
        let amount = if cx.at_end() {
            None
        } else {
            match cx.read_number() {
                Some(n) => Some(n),
                None => return false,
            }
        };
        cx.set_kind(OrderKind::Produce { amount });
        cx.expect_end()
    }
}

// ============================================================================
// Argument readers
// ============================================================================

/// An optional leading amount.
///
/// `Ok(None)` if the current token is not a number; `Err` if it is one that
/// does not fit.
pub fn read_optional_number(cx: &mut OrderContext<'_>) -> Result<Option<u32>, ()> {
    if !cx.is_number() {
        return Ok(None);
    }
    cx.read_number().map(Some).ok_or(())
}

/// `amount | ALL`
pub fn read_amount(cx: &mut OrderContext<'_>, point: CompletionPoint) -> Option<Amount> {
    cx.complete(point);
    if cx.eat_keyword(OrderKeyword::All) {
        return Some(Amount::All);
    }
    if cx.is_number() {
        return cx.read_number().map(Amount::Count);
    }
    cx.unexpected("amount");
    None
}

/// A direction keyword (short or long form)
pub fn read_direction(cx: &mut OrderContext<'_>, verb: OrderKeyword) -> Option<Direction> {
    cx.complete(CompletionPoint::Direction { verb });
    match cx.eat_any_keyword(OrderKeyword::DIRECTIONS) {
        Some(keyword) => Direction::from_keyword(keyword),
        None => {
            cx.unexpected("direction");
            None
        }
    }
}

/// `CASTLE id | BUILDING id | SHIP id`, restricted to `kinds`
pub fn read_container(
    cx: &mut OrderContext<'_>,
    verb: OrderKeyword,
    kinds: &'static [OrderKeyword],
) -> Option<ContainerRef> {
    cx.complete(CompletionPoint::Keywords { verb, options: kinds });
    let Some(keyword) = cx.eat_any_keyword(kinds) else {
        cx.unexpected("building or ship");
        return None;
    };
    let kind = entity_kind(keyword)?;
    let id = read_entity_id(cx, verb, kind)?;
    Some(ContainerRef { kind, id })
}

/// The id of a building, ship or faction
pub fn read_entity_id(cx: &mut OrderContext<'_>, verb: OrderKeyword, kind: EntityKind) -> Option<u32> {
    let point = match kind {
        EntityKind::Faction => CompletionPoint::Faction { verb },
        EntityKind::Unit => CompletionPoint::UnitTarget { verb },
        _ => CompletionPoint::Container { verb, kind },
    };
    cx.complete(point);
    let what = match kind {
        EntityKind::Unit => "unit id",
        EntityKind::Faction => "faction id",
        EntityKind::Region => "region id",
        EntityKind::Building | EntityKind::Castle => "building id",
        EntityKind::Ship => "ship id",
    };
    cx.read_id(what)
}

pub fn entity_kind(keyword: OrderKeyword) -> Option<EntityKind> {
    match keyword {
        OrderKeyword::Unit => Some(EntityKind::Unit),
        OrderKeyword::Faction => Some(EntityKind::Faction),
        OrderKeyword::Region => Some(EntityKind::Region),
        OrderKeyword::Building => Some(EntityKind::Building),
        OrderKeyword::Castle => Some(EntityKind::Castle),
        OrderKeyword::Ship => Some(EntityKind::Ship),
        _ => None,
    }
}

/// Fail a name that resolved to a rule object not accepted here.
///
/// `start` is the token the name started at (its opening quote if quoted).
pub fn reject_name(cx: &mut OrderContext<'_>, start: usize, reason: &str) -> bool {
    let t = if cx.kind(start) == SyntaxKind::OPENING_QUOTE { start + 1 } else { start };
    cx.tag(t, SyntaxKind::UNDEFINED);
    let message = format!("\"{}\" {reason}", cx.text(t));
    cx.error(ErrorCode::E0501, t, message);
    false
}
