use crate::orders::{ContainerRef, EntityKind, OrderKind};
use crate::parser::context::OrderContext;
use crate::parser::hooks::CompletionPoint;
use crate::parser::keywords::OrderKeyword;

use super::OrderHandler;
use super::common::{read_container, read_entity_id};

const ENTERABLE: &[OrderKeyword] = &[OrderKeyword::Castle, OrderKeyword::Building, OrderKeyword::Ship];

/// `ENTER (CASTLE | BUILDING | SHIP) id`
pub struct EnterHandler;

impl OrderHandler for EnterHandler {
    fn keyword(&self) -> OrderKeyword {
        OrderKeyword::Enter
    }

    fn read(&self, cx: &mut OrderContext<'_>) -> bool {
        let Some(container) = read_container(cx, OrderKeyword::Enter, ENTERABLE) else {
            return false;
        };
        cx.set_kind(OrderKind::ContainerArgument { container });
        cx.expect_end()
    }
}

/// `SIEGE id` of a castle
pub struct SiegeHandler;

impl OrderHandler for SiegeHandler {
    fn keyword(&self) -> OrderKeyword {
        OrderKeyword::Siege
    }

    fn is_long(&self) -> bool {
        true
    }

    fn read(&self, cx: &mut OrderContext<'_>) -> bool {
        let Some(id) = read_entity_id(cx, OrderKeyword::Siege, EntityKind::Castle) else {
            return false;
        };
        cx.set_kind(OrderKind::ContainerArgument {
            container: ContainerRef {
                kind: EntityKind::Castle,
                id,
            },
        });
        cx.expect_end()
    }
}

const SABOTAGE_TARGETS: &[OrderKeyword] = &[OrderKeyword::Ship];

/// `SABOTAGE SHIP`
pub struct SabotageHandler;

impl OrderHandler for SabotageHandler {
    fn keyword(&self) -> OrderKeyword {
        OrderKeyword::Sabotage
    }

    fn is_long(&self) -> bool {
        true
    }

    fn read(&self, cx: &mut OrderContext<'_>) -> bool {
        cx.complete(CompletionPoint::Keywords {
            verb: OrderKeyword::Sabotage,
            options: SABOTAGE_TARGETS,
        });
        if !cx.eat_keyword(OrderKeyword::Ship) {
            return cx.unexpected("SHIP");
        }
        cx.set_kind(OrderKind::Simple);
        cx.expect_end()
    }
}
