//! DEFAULT: a string holding another order.
//!
//! The inner order is parsed by a second parser that quotes with the other
//! quote character, so `DEFAULT "NAME UNIT 'Foo'"` nests cleanly. While the outer string is still open the inner parse drives
//! completion; its proposals are then anchored to the start of the string.

use crate::orders::{Order, OrderKind};
use crate::parser::context::OrderContext;
use crate::parser::errors::ErrorCode;
use crate::parser::hooks::CompletionPoint;
use crate::parser::keywords::OrderKeyword;
use crate::parser::strings::{self, StringArgument, StringRules, StringSpan};

use super::OrderHandler;

pub struct DefaultHandler;

impl OrderHandler for DefaultHandler {
    fn keyword(&self) -> OrderKeyword {
        OrderKeyword::Default
    }

    fn read(&self, cx: &mut OrderContext<'_>) -> bool {
        let rules = StringRules::default()
            .nested()
            .persist()
            .completion(CompletionPoint::QuotedText {
                verb: OrderKeyword::Default,
            });
        let mut nested = NestedOrder::default();
        if strings::read_string(cx, rules, &mut nested).is_none() {
            return false;
        }
        let Some(inner) = nested.inner else {
            return false;
        };
        cx.set_kind(OrderKind::Default { inner: Box::new(inner) });
        true
    }
}

/// Parses the string content as an order
#[derive(Default)]
struct NestedOrder {
    inner: Option<Order>,
}

impl StringArgument for NestedOrder {
    fn check_inner(&mut self, cx: &mut OrderContext<'_>, span: StringSpan<'_>) -> bool {
        let parser = cx.parser();
        let quote = span.opening.and_then(|t| cx.token(t).text.chars().next());
        let nested = match quote {
            Some(quote) => parser.nested(quote),
            None => parser.clone(),
        };

        if span.open {
            if let Some(hook) = cx.hook_mut() {
                hook.clear();
                nested.parse_with_completion(span.content, &mut *hook);
                hook.anchor(span.content);
            }
            return false;
        }

        let result = nested.parse(span.content);
        if !result.valid() {
            let reason = result
                .errors
                .first()
                .map(|e| e.message.clone())
                .unwrap_or_else(|| "not an order".to_string());
            cx.error(ErrorCode::E0601, span.token, format!("invalid default order: {reason}"));
            return false;
        }
        self.inner = Some(result.order);
        true
    }
}
