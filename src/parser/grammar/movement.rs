use crate::orders::{Direction, EntityKind, FollowTarget, MovementOrder, MovementStep, OrderKind};
use crate::parser::context::OrderContext;
use crate::parser::hooks::CompletionPoint;
use crate::parser::keywords::OrderKeyword;

use super::OrderHandler;
use super::common::read_entity_id;

/// `MOVE dir...` and `ROUTE dir...`; both accept PAUSE between steps
pub struct MoveHandler {
    keyword: OrderKeyword,
}

impl MoveHandler {
    pub const fn moving() -> Self {
        Self {
            keyword: OrderKeyword::Move,
        }
    }

    pub const fn route() -> Self {
        Self {
            keyword: OrderKeyword::Route,
        }
    }
}

impl OrderHandler for MoveHandler {
    fn keyword(&self) -> OrderKeyword {
        self.keyword
    }

    fn is_long(&self) -> bool {
        true
    }

    fn read(&self, cx: &mut OrderContext<'_>) -> bool {
        let mut steps = Vec::new();
        loop {
            cx.complete(CompletionPoint::Direction { verb: self.keyword });
            if cx.at_end() {
                break;
            }
            if cx.eat_keyword(OrderKeyword::Pause) {
                steps.push(MovementStep::Pause);
                continue;
            }
            match cx.eat_any_keyword(OrderKeyword::DIRECTIONS).and_then(Direction::from_keyword) {
                Some(direction) => steps.push(MovementStep::Go(direction)),
                None => return cx.unexpected("direction"),
            }
        }

        if steps.is_empty() {
            return cx.unexpected("direction");
        }
        cx.set_kind(OrderKind::Movement(MovementOrder { steps }));
        true
    }
}

const FOLLOW_TARGETS: &[OrderKeyword] = &[OrderKeyword::Unit, OrderKeyword::Ship];

/// `FOLLOW UNIT [TEMP] id | FOLLOW SHIP id`
///
/// Following a ship is a long order, following a unit is not.
pub struct FollowHandler;

impl OrderHandler for FollowHandler {
    fn keyword(&self) -> OrderKeyword {
        OrderKeyword::Follow
    }

    fn read(&self, cx: &mut OrderContext<'_>) -> bool {
        cx.complete(CompletionPoint::Keywords {
            verb: OrderKeyword::Follow,
            options: FOLLOW_TARGETS,
        });
        let target = match cx.eat_any_keyword(FOLLOW_TARGETS) {
            Some(OrderKeyword::Unit) => {
                let point = CompletionPoint::UnitTarget { verb: OrderKeyword::Follow };
                match cx.read_unit_ref(OrderKeyword::Follow, Some(point)) {
                    Some(unit) => FollowTarget::Unit(unit),
                    None => return false,
                }
            }
            Some(_) => {
                cx.set_long(true);
                match read_entity_id(cx, OrderKeyword::Follow, EntityKind::Ship) {
                    Some(id) => FollowTarget::Ship(id),
                    None => return false,
                }
            }
            None => return cx.unexpected("UNIT or SHIP"),
        };
        cx.set_kind(OrderKind::Follow(target));
        cx.expect_end()
    }
}
