//! Completion hook protocol.
//!
//! Productions announce grammar positions as [`CompletionPoint`]s. The parse
//! context forwards a point to the attached [`CompletionHook`] only when the
//! cursor sits there: at the end of the line after a space, or in the last
//! word while it is still being typed. Each token position fires at most once
//! per parse.

use crate::base::{IdFormat, Locale};
use crate::orders::{Amount, EntityKind, GiveTarget};
use crate::rules::Rules;

use super::grammar::CommandTable;
use super::keywords::{Keywords, OrderKeyword};

/// A grammar position at which completions can be proposed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionPoint {
    /// First word of the line
    Verb,
    UnitTarget { verb: OrderKeyword },
    /// The number after TEMP
    TempUnit { verb: OrderKeyword },
    GiveTarget,
    /// After the GIVE target: amount, ALL, EACH, UNIT, CONTROL, HERBS
    GiveQuantity { target: GiveTarget },
    GiveItem { target: GiveTarget, amount: Amount, each: bool },
    Amount { verb: OrderKeyword },
    Direction { verb: OrderKeyword },
    Item { verb: OrderKeyword },
    Skill { verb: OrderKeyword },
    /// A spell name, or one of `options` still allowed before it
    Spell {
        verb: OrderKeyword,
        combat: bool,
        options: &'static [OrderKeyword],
    },
    /// SHOW: ALL, a spell or an item
    Shown,
    /// CONTACT: a unit, UNIT or FACTION
    ContactTarget,
    /// A race; HIDE also takes FACTION here
    Race { verb: OrderKeyword },
    MakeTarget { amount: Option<u32> },
    Container { verb: OrderKeyword, kind: EntityKind },
    Faction { verb: OrderKeyword },
    /// One of a fixed set of sub-keywords
    Keywords { verb: OrderKeyword, options: &'static [OrderKeyword] },
    QuotedText { verb: OrderKeyword },
    Coordinate { verb: OrderKeyword },
    Language,
}

/// Where and how the completion is requested
pub struct CompletionRequest<'a> {
    /// Text of the word being typed, empty at the start of a new word
    pub partial: &'a str,
    /// The cursor is directly after a complete verb; inserted text must start
    /// with a space
    pub needs_separator: bool,
    pub locale: Locale,
    /// Quote character for inserted names that contain spaces
    pub quote: char,
    pub keywords: &'a Keywords,
    pub commands: &'a CommandTable,
    pub rules: &'a dyn Rules,
    pub id_format: IdFormat,
}

/// Receives completion requests during a parse
pub trait CompletionHook {
    fn complete(&mut self, point: &CompletionPoint, request: &CompletionRequest<'_>);

    /// Drop everything collected so far.
    fn clear(&mut self) {}

    /// Re-anchor collected completions to an enclosing string.
    ///
    /// `typed` is everything typed inside the string. Afterwards each
    /// completion replaces all of it rather than just the inner partial word.
    fn anchor(&mut self, _typed: &str) {}
}

/// One request seen by a [`CompletionLog`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggedCompletion {
    pub point: CompletionPoint,
    pub partial: String,
    pub needs_separator: bool,
}

/// A hook that records requests without proposing anything
#[derive(Debug, Clone, Default)]
pub struct CompletionLog {
    pub entries: Vec<LoggedCompletion>,
    pub anchors: Vec<String>,
}

impl CompletionLog {
    pub fn points(&self) -> Vec<CompletionPoint> {
        self.entries.iter().map(|e| e.point).collect()
    }

    pub fn last(&self) -> Option<&LoggedCompletion> {
        self.entries.last()
    }
}

impl CompletionHook for CompletionLog {
    fn complete(&mut self, point: &CompletionPoint, request: &CompletionRequest<'_>) {
        self.entries.push(LoggedCompletion {
            point: *point,
            partial: request.partial.to_string(),
            needs_separator: request.needs_separator,
        });
    }

    fn clear(&mut self) {
        self.entries.clear();
    }

    fn anchor(&mut self, typed: &str) {
        self.anchors.push(typed.to_string());
    }
}
