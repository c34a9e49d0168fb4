//! Order grammar: one production per verb.
//!
//! Every verb is an [`OrderHandler`] registered in [`HANDLERS`]. The
//! dispatcher classifies the verb token, marks long orders, moves past the
//! verb and calls [`OrderHandler::read`] with the cursor on the first
//! argument. Productions share their argument readers through the functions
//! in `common` rather than through a handler hierarchy.
//!
//! Modules are grouped by argument shape:
//! - `common` - verbs without arguments, single-unit and single-text verbs
//! - `give` - GIVE, RESERVE
//! - `movement` - MOVE, ROUTE, FOLLOW
//! - `units` - TEACH, CONTACT, SORT, HIDE
//! - `containers` - ENTER, SIEGE, SABOTAGE
//! - `text` - NAME, DESCRIBE, MESSAGE, EMAIL, LANGUAGE
//! - `skills` - LEARN, FORGET, RESEARCH
//! - `magic` - CAST, COMBATSPELL
//! - `production` - MAKE, RECRUIT, PLANT, GROW, DESTROY, CLAIM, USE, BUY, SELL
//! - `faction` - COMBAT, GUARD, HELP, OPTION, NUMBER, PIRACY, ORIGIN, SHOW
//! - `default` - DEFAULT and its nested order

mod common;
mod containers;
mod default;
mod faction;
mod give;
mod magic;
mod movement;
mod production;
mod skills;
mod text;
mod units;

use std::fmt;

use indexmap::IndexMap;
use rustc_hash::FxHashMap;
use tracing::debug;

use crate::base::{Locale, normalize};

use super::context::OrderContext;
use super::errors::OrderParserError;
use super::keywords::{Keywords, OrderKeyword};

use common::{ProduceHandler, SimpleHandler, TextHandler, UnitTargetHandler};

/// A verb production
pub trait OrderHandler: Send + Sync {
    fn keyword(&self) -> OrderKeyword;

    /// The verb consumes the unit's whole turn, whatever its arguments.
    fn is_long(&self) -> bool {
        false
    }

    /// Parse the arguments. The cursor is on the token after the verb.
    fn read(&self, cx: &mut OrderContext<'_>) -> bool;
}

/// Every verb the parser knows, in completion order
pub static HANDLERS: &[&dyn OrderHandler] = &[
    &SimpleHandler::long(OrderKeyword::Work),
    &UnitTargetHandler::short(OrderKeyword::Attack),
    &TextHandler::required(OrderKeyword::Banner),
    &production::ClaimHandler,
    &SimpleHandler::short(OrderKeyword::Promote),
    &UnitTargetHandler::long(OrderKeyword::Steal),
    &containers::SiegeHandler,
    &text::NameHandler,
    &production::UseHandler,
    &text::DescribeHandler,
    &containers::EnterHandler,
    &faction::GuardHandler,
    &text::MessageHandler,
    &default::DefaultHandler,
    &text::EmailHandler,
    &SimpleHandler::short(OrderKeyword::End),
    &UnitTargetHandler::long(OrderKeyword::Ride),
    &movement::FollowHandler,
    &skills::ResearchHandler,
    &give::GiveHandler,
    &TextHandler::optional(OrderKeyword::Group),
    &faction::HelpHandler,
    &faction::CombatHandler,
    &magic::CombatSpellHandler,
    &production::TradeHandler::buy(),
    &units::ContactHandler,
    &units::TeachHandler,
    &skills::LearnHandler,
    &TextHandler::required(OrderKeyword::Locale),
    &production::MakeHandler,
    &movement::MoveHandler::moving(),
    &faction::NumberHandler,
    &faction::OptionHandler,
    &TextHandler::optional(OrderKeyword::Password),
    &production::PlantHandler,
    &faction::PiracyHandler,
    &TextHandler::optional(OrderKeyword::Prefix),
    &production::RecruitHandler,
    &give::ReserveHandler,
    &movement::MoveHandler::route(),
    &containers::SabotageHandler,
    &units::SortHandler,
    &UnitTargetHandler::long(OrderKeyword::Spy),
    &text::LanguageHandler,
    &TextHandler::required(OrderKeyword::Quit),
    &units::HideHandler,
    &UnitTargetHandler::short(OrderKeyword::Carry),
    &ProduceHandler::new(OrderKeyword::Tax),
    &ProduceHandler::new(OrderKeyword::Entertain),
    &faction::OriginHandler,
    &skills::ForgetHandler,
    &production::TradeHandler::sell(),
    &SimpleHandler::short(OrderKeyword::Leave),
    &magic::CastHandler,
    &faction::ShowHandler,
    &production::DestroyHandler,
    &production::GrowHandler,
];

/// Result of looking up a typed verb
#[derive(Clone, Copy)]
pub enum VerbMatch {
    /// The text is a verb surface, or a prefix of exactly one
    Found { handler: &'static dyn OrderHandler, exact: bool },
    /// A prefix of several verbs
    Ambiguous,
    Unknown,
}

/// Verb lookup for one order locale.
///
/// Built in one pass over [`HANDLERS`] and never modified; a locale or
/// ruleset change builds a new table.
pub struct CommandTable {
    locale: Locale,
    by_surface: IndexMap<String, &'static dyn OrderHandler>,
    by_keyword: FxHashMap<OrderKeyword, &'static dyn OrderHandler>,
}

impl CommandTable {
    pub fn build(keywords: &Keywords, locale: Locale) -> Result<Self, OrderParserError> {
        Self::from_handlers(HANDLERS, keywords, locale)
    }

    pub fn from_handlers(
        handlers: &[&'static dyn OrderHandler],
        keywords: &Keywords,
        locale: Locale,
    ) -> Result<Self, OrderParserError> {
        let mut by_surface: IndexMap<String, &'static dyn OrderHandler> = IndexMap::new();
        let mut by_keyword = FxHashMap::default();

        for &handler in handlers {
            let keyword = handler.keyword();
            let surfaces = keywords.folded_surfaces(keyword, locale);
            if surfaces.is_empty() {
                return Err(OrderParserError::MissingTranslation {
                    keyword: keyword.id(),
                    locale,
                });
            }
            for surface in surfaces {
                if let Some(previous) = by_surface.get(surface) {
                    if previous.keyword() != keyword {
                        return Err(OrderParserError::DuplicateVerb {
                            first: previous.keyword().id(),
                            second: keyword.id(),
                            surface: surface.clone(),
                            locale,
                        });
                    }
                    continue;
                }
                by_surface.insert(surface.clone(), handler);
            }
            by_keyword.insert(keyword, handler);
        }

        debug!(%locale, verbs = by_keyword.len(), "built command table");
        Ok(Self {
            locale,
            by_surface,
            by_keyword,
        })
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn len(&self) -> usize {
        self.by_keyword.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_keyword.is_empty()
    }

    pub fn handler(&self, keyword: OrderKeyword) -> Option<&'static dyn OrderHandler> {
        self.by_keyword.get(&keyword).copied()
    }

    /// Verbs in registration order
    pub fn verbs(&self) -> impl Iterator<Item = OrderKeyword> + '_ {
        let mut seen = Vec::new();
        self.by_surface.values().filter_map(move |h| {
            let keyword = h.keyword();
            if seen.contains(&keyword) {
                None
            } else {
                seen.push(keyword);
                Some(keyword)
            }
        })
    }

    /// Exact surface wins; otherwise a prefix of exactly one verb.
    pub fn lookup(&self, text: &str) -> VerbMatch {
        let key = normalize(text);
        if key.is_empty() {
            return VerbMatch::Unknown;
        }
        if let Some(&handler) = self.by_surface.get(&key) {
            return VerbMatch::Found { handler, exact: true };
        }

        let mut found: Option<&'static dyn OrderHandler> = None;
        for (surface, &handler) in &self.by_surface {
            if !surface.starts_with(&key) {
                continue;
            }
            match found {
                Some(previous) if previous.keyword() != handler.keyword() => return VerbMatch::Ambiguous,
                _ => found = Some(handler),
            }
        }
        match found {
            Some(handler) => VerbMatch::Found { handler, exact: false },
            None => VerbMatch::Unknown,
        }
    }
}

impl fmt::Debug for CommandTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandTable")
            .field("locale", &self.locale)
            .field("verbs", &self.by_keyword.len())
            .finish()
    }
}

impl fmt::Debug for VerbMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VerbMatch::Found { handler, exact } => f
                .debug_struct("Found")
                .field("keyword", &handler.keyword())
                .field("exact", exact)
                .finish(),
            VerbMatch::Ambiguous => f.write_str("Ambiguous"),
            VerbMatch::Unknown => f.write_str("Unknown"),
        }
    }
}
