use crate::orders::OrderKind;
use crate::parser::context::OrderContext;
use crate::parser::hooks::CompletionPoint;
use crate::parser::keywords::OrderKeyword;

use super::OrderHandler;
use super::common::read_optional_number;

/// `LEARN skill [max]`
pub struct LearnHandler;

impl OrderHandler for LearnHandler {
    fn keyword(&self) -> OrderKeyword {
        OrderKeyword::Learn
    }

    fn is_long(&self) -> bool {
        true
    }

    fn read(&self, cx: &mut OrderContext<'_>) -> bool {
        let verb = OrderKeyword::Learn;
        let rules = cx.rules();
        let Some(skill) = cx.read_rule(rules.skill_types(), "skill", Some(CompletionPoint::Skill { verb })) else {
            return false;
        };
        cx.complete(CompletionPoint::Amount { verb });
        let Ok(max_level) = read_optional_number(cx) else {
            return false;
        };
        cx.set_kind(OrderKind::Learn {
            skill: skill.id.clone(),
            max_level,
        });
        cx.expect_end()
    }
}

/// `FORGET skill`
pub struct ForgetHandler;

impl OrderHandler for ForgetHandler {
    fn keyword(&self) -> OrderKeyword {
        OrderKeyword::Forget
    }

    fn read(&self, cx: &mut OrderContext<'_>) -> bool {
        let verb = OrderKeyword::Forget;
        let rules = cx.rules();
        let Some(skill) = cx.read_rule(rules.skill_types(), "skill", Some(CompletionPoint::Skill { verb })) else {
            return false;
        };
        cx.set_kind(OrderKind::Forget {
            skill: skill.id.clone(),
        });
        cx.expect_end()
    }
}

const RESEARCH_OPTIONS: &[OrderKeyword] = &[OrderKeyword::Herbs];

/// `RESEARCH [HERBS]`
pub struct ResearchHandler;

impl OrderHandler for ResearchHandler {
    fn keyword(&self) -> OrderKeyword {
        OrderKeyword::Research
    }

    fn is_long(&self) -> bool {
        true
    }

    fn read(&self, cx: &mut OrderContext<'_>) -> bool {
        cx.complete(CompletionPoint::Keywords {
            verb: OrderKeyword::Research,
            options: RESEARCH_OPTIONS,
        });
        let herbs = cx.eat_keyword(OrderKeyword::Herbs);
        cx.set_kind(OrderKind::Research { herbs });
        cx.expect_end()
    }
}
