//! Verbs whose main argument is free text.

use smol_str::SmolStr;

use crate::base::Locale;
use crate::orders::{EntityKind, MessageTarget, NameTarget, OrderKind};
use crate::parser::context::OrderContext;
use crate::parser::errors::ErrorCode;
use crate::parser::hooks::CompletionPoint;
use crate::parser::keywords::OrderKeyword;
use crate::parser::strings::{self, PlainText, StringArgument, StringRules, StringSpan};

use super::OrderHandler;
use super::common::{entity_kind, read_entity_id};

fn read_text(cx: &mut OrderContext<'_>, verb: OrderKeyword) -> Option<SmolStr> {
    let rules = StringRules::default().completion(CompletionPoint::QuotedText { verb });
    strings::read_string(cx, rules, &mut PlainText).map(|value| value.text)
}

const NAME_TARGETS: &[OrderKeyword] = &[
    OrderKeyword::Unit,
    OrderKeyword::Faction,
    OrderKeyword::Region,
    OrderKeyword::Building,
    OrderKeyword::Castle,
    OrderKeyword::Ship,
    OrderKeyword::Foreign,
];

const FOREIGN_TARGETS: &[OrderKeyword] = &[
    OrderKeyword::Unit,
    OrderKeyword::Faction,
    OrderKeyword::Building,
    OrderKeyword::Castle,
    OrderKeyword::Ship,
];

/// `NAME kind "text" | NAME FOREIGN kind id "text"`
pub struct NameHandler;

impl OrderHandler for NameHandler {
    fn keyword(&self) -> OrderKeyword {
        OrderKeyword::Name
    }

    fn read(&self, cx: &mut OrderContext<'_>) -> bool {
        let verb = OrderKeyword::Name;
        cx.complete(CompletionPoint::Keywords {
            verb,
            options: NAME_TARGETS,
        });
        let target = match cx.eat_any_keyword(NAME_TARGETS) {
            Some(OrderKeyword::Foreign) => {
                cx.complete(CompletionPoint::Keywords {
                    verb,
                    options: FOREIGN_TARGETS,
                });
                let Some(kind) = cx.eat_any_keyword(FOREIGN_TARGETS).and_then(entity_kind) else {
                    return cx.unexpected("unit, faction, building or ship");
                };
                let id = if kind == EntityKind::Unit {
                    let point = CompletionPoint::UnitTarget { verb };
                    cx.read_unit_ref(verb, Some(point)).map(|unit| unit.id())
                } else {
                    read_entity_id(cx, verb, kind)
                };
                let Some(id) = id else {
                    return false;
                };
                NameTarget::Foreign(kind, id)
            }
            Some(keyword) => match entity_kind(keyword) {
                Some(kind) => NameTarget::Own(kind),
                None => return cx.unexpected("name target"),
            },
            None => return cx.unexpected("name target"),
        };
        let Some(text) = read_text(cx, verb) else {
            return false;
        };
        cx.set_kind(OrderKind::Named { target, text });
        true
    }
}

const DESCRIBE_TARGETS: &[OrderKeyword] = &[
    OrderKeyword::Unit,
    OrderKeyword::Private,
    OrderKeyword::Region,
    OrderKeyword::Building,
    OrderKeyword::Castle,
    OrderKeyword::Ship,
];

/// `DESCRIBE (UNIT | PRIVATE | REGION | BUILDING | CASTLE | SHIP) "text"`
pub struct DescribeHandler;

impl OrderHandler for DescribeHandler {
    fn keyword(&self) -> OrderKeyword {
        OrderKeyword::Describe
    }

    fn read(&self, cx: &mut OrderContext<'_>) -> bool {
        let verb = OrderKeyword::Describe;
        cx.complete(CompletionPoint::Keywords {
            verb,
            options: DESCRIBE_TARGETS,
        });
        let target = match cx.eat_any_keyword(DESCRIBE_TARGETS) {
            Some(OrderKeyword::Private) => NameTarget::Private,
            Some(keyword) => match entity_kind(keyword) {
                Some(kind) => NameTarget::Own(kind),
                None => return cx.unexpected("description target"),
            },
            None => return cx.unexpected("description target"),
        };
        let Some(text) = read_text(cx, verb) else {
            return false;
        };
        cx.set_kind(OrderKind::Named { target, text });
        true
    }
}

const MESSAGE_TARGETS: &[OrderKeyword] = &[
    OrderKeyword::Unit,
    OrderKeyword::Faction,
    OrderKeyword::Region,
    OrderKeyword::Building,
    OrderKeyword::Ship,
];

/// `MESSAGE (UNIT id | FACTION id | REGION | BUILDING id | SHIP id) "text"`
pub struct MessageHandler;

impl OrderHandler for MessageHandler {
    fn keyword(&self) -> OrderKeyword {
        OrderKeyword::Message
    }

    fn read(&self, cx: &mut OrderContext<'_>) -> bool {
        let verb = OrderKeyword::Message;
        cx.complete(CompletionPoint::Keywords {
            verb,
            options: MESSAGE_TARGETS,
        });
        let target = match cx.eat_any_keyword(MESSAGE_TARGETS) {
            Some(OrderKeyword::Unit) => {
                let point = CompletionPoint::UnitTarget { verb };
                match cx.read_unit_ref(verb, Some(point)) {
                    Some(unit) => MessageTarget::Unit(unit),
                    None => return false,
                }
            }
            Some(OrderKeyword::Region) => MessageTarget::Region,
            Some(keyword) => {
                let Some(kind) = entity_kind(keyword) else {
                    return cx.unexpected("message target");
                };
                let Some(id) = read_entity_id(cx, verb, kind) else {
                    return false;
                };
                match kind {
                    EntityKind::Faction => MessageTarget::Faction(id),
                    EntityKind::Ship => MessageTarget::Ship(id),
                    _ => MessageTarget::Building(id),
                }
            }
            None => return cx.unexpected("message target"),
        };
        let Some(text) = read_text(cx, verb) else {
            return false;
        };
        cx.set_kind(OrderKind::Message { target, text });
        true
    }
}

/// Rejects text that cannot be a mail address
struct EmailAddress;

impl EmailAddress {
    fn is_valid(address: &str) -> bool {
        let Some((local, domain)) = address.split_once('@') else {
            return false;
        };
        !local.is_empty()
            && !domain.contains('@')
            && domain.contains('.')
            && !domain.starts_with('.')
            && !domain.ends_with('.')
            && !address.chars().any(char::is_whitespace)
    }
}

impl StringArgument for EmailAddress {
    fn check_inner(&mut self, cx: &mut OrderContext<'_>, span: StringSpan<'_>) -> bool {
        if Self::is_valid(span.content) {
            return true;
        }
        cx.error(
            ErrorCode::E0601,
            span.token,
            format!("\"{}\" is not an email address", span.content),
        );
        false
    }
}

/// `EMAIL address`
pub struct EmailHandler;

impl OrderHandler for EmailHandler {
    fn keyword(&self) -> OrderKeyword {
        OrderKeyword::Email
    }

    fn read(&self, cx: &mut OrderContext<'_>) -> bool {
        let rules = StringRules::default().completion(CompletionPoint::QuotedText {
            verb: OrderKeyword::Email,
        });
        let Some(value) = strings::read_string(cx, rules, &mut EmailAddress) else {
            return false;
        };
        cx.set_kind(OrderKind::Text { text: Some(value.text) });
        true
    }
}

/// Accepts the tags of supported locales
struct LanguageTag;

impl StringArgument for LanguageTag {
    fn check_inner(&mut self, cx: &mut OrderContext<'_>, span: StringSpan<'_>) -> bool {
        if Locale::from_tag(span.content).is_some() {
            return true;
        }
        cx.error(ErrorCode::E0601, span.token, format!("unknown language \"{}\"", span.content));
        false
    }
}

/// `LANGUAGE tag`
pub struct LanguageHandler;

impl OrderHandler for LanguageHandler {
    fn keyword(&self) -> OrderKeyword {
        OrderKeyword::Language
    }

    fn read(&self, cx: &mut OrderContext<'_>) -> bool {
        let rules = StringRules::default().completion(CompletionPoint::Language);
        let Some(value) = strings::read_string(cx, rules, &mut LanguageTag) else {
            return false;
        };
        cx.set_kind(OrderKind::Text { text: Some(value.text) });
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_shape() {
        assert!(EmailAddress::is_valid("player@example.org"));
        assert!(!EmailAddress::is_valid("player.example.org"));
        assert!(!EmailAddress::is_valid("@example.org"));
        assert!(!EmailAddress::is_valid("a@b@c.de"));
        assert!(!EmailAddress::is_valid("player@localhost"));
    }
}
