//! Per-parse state shared by all productions.
//!
//! An [`OrderContext`] owns the token array of one line and a cursor into it.
//! Productions classify tokens by index as they recognize them; nothing else
//! holds a reference to the tokens while the parse runs.

use rustc_hash::FxHashSet;
use smol_str::SmolStr;
use tracing::{trace, warn};

use crate::base::{IdFormat, Locale};
use crate::orders::{OrderKind, UnitRef};
use crate::rules::{NameMatch, Named, Rules, resolve_name};

use super::errors::{ErrorCode, SyntaxError};
use super::hooks::{CompletionHook, CompletionPoint, CompletionRequest};
use super::keywords::{Keywords, OrderKeyword};
use super::lexer::Token;
use super::parser::OrderParser;
use super::strings::{self, PlainText, StringRules};
use super::syntax_kind::SyntaxKind;

pub struct OrderContext<'a> {
    parser: &'a OrderParser,
    tokens: Vec<Token>,
    pos: usize,
    /// Index of the END_OF_COMMAND token
    end: usize,
    has_comment: bool,
    hook: Option<&'a mut dyn CompletionHook>,
    completed: FxHashSet<usize>,
    verb: Option<usize>,
    verb_exact: bool,
    errors: Vec<SyntaxError>,
    kind: OrderKind,
    long: bool,
}

impl<'a> OrderContext<'a> {
    pub(crate) fn new(
        parser: &'a OrderParser,
        tokens: Vec<Token>,
        hook: Option<&'a mut dyn CompletionHook>,
    ) -> Self {
        let end = tokens.len().saturating_sub(1);
        let has_comment = tokens.iter().any(|t| t.kind == SyntaxKind::COMMENT);
        Self {
            parser,
            tokens,
            pos: 0,
            end,
            has_comment,
            hook,
            completed: FxHashSet::default(),
            verb: None,
            verb_exact: false,
            errors: Vec::new(),
            kind: OrderKind::Simple,
            long: false,
        }
    }

    // ========================================================================
    // Environment
    // ========================================================================

    pub fn parser(&self) -> &'a OrderParser {
        self.parser
    }

    pub fn locale(&self) -> Locale {
        self.parser.locale()
    }

    pub fn keywords(&self) -> &'a Keywords {
        self.parser.keywords()
    }

    pub fn rules(&self) -> &'a dyn Rules {
        self.parser.rules()
    }

    pub fn id_format(&self) -> IdFormat {
        self.parser.id_format()
    }

    pub fn has_hook(&self) -> bool {
        self.hook.is_some()
    }

    /// Reborrow the hook for a nested parse.
    pub(crate) fn hook_mut(&mut self) -> Option<&mut dyn CompletionHook> {
        match &mut self.hook {
            Some(hook) => Some(&mut **hook),
            None => None,
        }
    }

    // ========================================================================
    // Token inspection
    // ========================================================================

    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn token(&self, t: usize) -> &Token {
        &self.tokens[t.min(self.end)]
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn text(&self, t: usize) -> SmolStr {
        self.token(t).text.clone()
    }

    pub fn kind(&self, t: usize) -> SyntaxKind {
        self.token(t).kind
    }

    pub fn at_end(&self) -> bool {
        self.pos >= self.end
    }

    /// Move to the next token, skipping comments.
    pub fn bump(&mut self) {
        if self.pos < self.end {
            self.pos += 1;
        }
        while self.pos < self.end && self.tokens[self.pos].kind.is_trivia() {
            self.pos += 1;
        }
    }

    pub fn tag(&mut self, t: usize, kind: SyntaxKind) {
        if let Some(token) = self.tokens.get_mut(t) {
            token.kind = kind;
        }
    }

    /// A plain word: not a quote, not string content, not the end marker.
    pub fn is_word(&self, t: usize) -> bool {
        t < self.end
            && self.tokens[t].kind == SyntaxKind::UNDEFINED
            && (t == 0 || self.tokens[t - 1].kind != SyntaxKind::OPENING_QUOTE)
    }

    pub fn is_keyword(&self, keyword: OrderKeyword) -> bool {
        self.is_word(self.pos) && self.keywords().matches(&self.tokens[self.pos].text, keyword, self.locale())
    }

    pub fn find_keyword(&self, options: &[OrderKeyword]) -> Option<OrderKeyword> {
        if !self.is_word(self.pos) {
            return None;
        }
        self.keywords().find(&self.tokens[self.pos].text, self.locale(), options)
    }

    /// Consume `keyword` if it is the current token.
    pub fn eat_keyword(&mut self, keyword: OrderKeyword) -> bool {
        if self.is_keyword(keyword) {
            self.tag(self.pos, SyntaxKind::KEYWORD);
            self.bump();
            true
        } else {
            false
        }
    }

    /// Consume whichever of `options` is the current token.
    pub fn eat_any_keyword(&mut self, options: &[OrderKeyword]) -> Option<OrderKeyword> {
        let found = self.find_keyword(options)?;
        self.tag(self.pos, SyntaxKind::KEYWORD);
        self.bump();
        Some(found)
    }

    pub fn is_number(&self) -> bool {
        self.is_word(self.pos) && self.tokens[self.pos].text.bytes().all(|b| b.is_ascii_digit())
    }

    pub fn is_id(&self) -> bool {
        self.is_word(self.pos) && self.id_format().is_id_shaped(&self.tokens[self.pos].text)
    }

    // ========================================================================
    // Terminals
    // ========================================================================

    /// Read a decimal amount. Overflow fails the token rather than clamping.
    pub fn read_number(&mut self) -> Option<u32> {
        if !self.is_number() {
            self.unexpected("number");
            return None;
        }
        let t = self.pos;
        match self.tokens[t].text.parse::<u32>() {
            Ok(n) => {
                self.tag(t, SyntaxKind::NUMBER);
                self.bump();
                Some(n)
            }
            Err(_) => {
                let message = format!("number \"{}\" is too large", self.tokens[t].text);
                self.error(ErrorCode::E0401, t, message);
                None
            }
        }
    }

    /// Read a possibly negative number (region coordinates).
    pub fn read_signed(&mut self) -> Option<i32> {
        let t = self.pos;
        let text = self.text(t);
        let digits = text.strip_prefix('-').unwrap_or(text.as_str());
        if !self.is_word(t) || digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            self.unexpected("coordinate");
            return None;
        }
        match text.parse::<i32>() {
            Ok(n) => {
                self.tag(t, SyntaxKind::NUMBER);
                self.bump();
                Some(n)
            }
            Err(_) => {
                self.error(ErrorCode::E0401, t, format!("coordinate \"{text}\" is out of range"));
                None
            }
        }
    }

    /// Read an id in the ruleset's base.
    pub fn read_id(&mut self, what: &str) -> Option<u32> {
        let t = self.pos;
        if !self.is_word(t) {
            self.unexpected(what);
            return None;
        }
        match self.id_format().parse(&self.tokens[t].text) {
            Some(id) => {
                self.tag(t, SyntaxKind::ID);
                self.bump();
                Some(id)
            }
            None => {
                let message = format!("\"{}\" is not a valid {what}", self.tokens[t].text);
                self.error(ErrorCode::E0402, t, message);
                None
            }
        }
    }

    /// `id | TEMP id`
    pub fn read_unit_ref(&mut self, verb: OrderKeyword, point: Option<CompletionPoint>) -> Option<UnitRef> {
        if let Some(point) = point {
            self.complete(point);
        }
        if self.eat_keyword(OrderKeyword::Temp) {
            self.complete(CompletionPoint::TempUnit { verb });
            return self.read_id("TEMP number").map(UnitRef::Temp);
        }
        if self.is_id() {
            return self.read_id("unit id").map(UnitRef::Id);
        }
        self.unexpected("unit id");
        None
    }

    /// Read a rule object by name, as a single word or quoted.
    ///
    /// Ambiguous names fail like unknown ones.
    pub fn read_rule<T: Named>(
        &mut self,
        candidates: &'a [T],
        what: &str,
        point: Option<CompletionPoint>,
    ) -> Option<&'a T> {
        if let Some(point) = point {
            self.complete(point);
        }
        let t = self.pos;
        if !self.is_word(t) && self.kind(t) != SyntaxKind::OPENING_QUOTE {
            self.unexpected(what);
            return None;
        }
        let value = strings::read_string(self, StringRules::default().non_final(), &mut PlainText)?;
        match resolve_name(candidates, &value.text, self.locale()) {
            NameMatch::Unique(found) => {
                self.tag(value.token, SyntaxKind::STRING);
                Some(found)
            }
            NameMatch::Ambiguous => {
                self.tag(value.token, SyntaxKind::UNDEFINED);
                let message = format!("\"{}\" matches more than one {what}", value.text);
                self.push(
                    SyntaxError::new(message, self.tokens[value.token].range, ErrorCode::E0502)
                        .with_hint("type more of the name"),
                );
                None
            }
            NameMatch::NotFound => {
                self.tag(value.token, SyntaxKind::UNDEFINED);
                self.error(ErrorCode::E0501, value.token, format!("unknown {what} \"{}\"", value.text));
                None
            }
        }
    }

    // ========================================================================
    // Outcomes
    // ========================================================================

    /// Succeed if the order is complete here.
    pub fn expect_end(&mut self) -> bool {
        if self.at_end() {
            return true;
        }
        let t = self.pos;
        let message = format!("unexpected \"{}\" after complete order", self.tokens[t].text);
        self.error(ErrorCode::E0203, t, message);
        false
    }

    /// Fail the production at the current token.
    pub fn unexpected(&mut self, expected: &str) -> bool {
        let t = self.pos;
        if self.at_end() {
            self.error(ErrorCode::E0202, t, format!("expected {expected}"));
        } else {
            if !self.tokens[t].kind.is_quote() {
                self.tag(t, SyntaxKind::UNDEFINED);
            }
            let message = format!("expected {expected}, found \"{}\"", self.tokens[t].text);
            self.error(ErrorCode::E0201, t, message);
        }
        false
    }

    pub fn error(&mut self, code: ErrorCode, t: usize, message: impl Into<String>) {
        let range = self.token(t).range;
        self.push(SyntaxError::new(message, range, code));
    }

    pub fn push(&mut self, error: SyntaxError) {
        self.errors.push(error);
    }

    pub fn set_kind(&mut self, kind: OrderKind) {
        self.kind = kind;
    }

    pub fn set_long(&mut self, long: bool) {
        self.long = long;
    }

    pub(crate) fn set_verb(&mut self, t: usize, exact: bool) {
        self.verb = Some(t);
        self.verb_exact = exact;
    }

    // ========================================================================
    // Completion
    // ========================================================================

    /// Offer `point` for the current token.
    pub fn complete(&mut self, point: CompletionPoint) {
        self.complete_at(self.pos, point);
    }

    pub fn complete_at(&mut self, t: usize, point: CompletionPoint) {
        if self.hook.is_none() || self.has_comment {
            return;
        }
        let Some((partial, needs_separator)) = self.cursor_at(t, &point) else {
            return;
        };
        if !self.completed.insert(t) {
            warn!(?point, token = t, "second completion at one position ignored");
            return;
        }
        trace!(?point, partial = %partial, needs_separator, "completion");

        let parser = self.parser;
        let request = CompletionRequest {
            partial: &partial,
            needs_separator,
            locale: parser.locale(),
            quote: parser.config().quotes.first().copied().unwrap_or('"'),
            keywords: parser.keywords(),
            commands: parser.commands(),
            rules: parser.rules(),
            id_format: parser.id_format(),
        };
        if let Some(hook) = self.hook.as_deref_mut() {
            hook.complete(&point, &request);
        }
    }

    /// The typed partial word if the cursor sits at token `t`.
    fn cursor_at(&self, t: usize, point: &CompletionPoint) -> Option<(SmolStr, bool)> {
        let token = self.tokens.get(t)?;
        if token.is_end() {
            let Some(prev) = t.checked_sub(1).map(|p| &self.tokens[p]) else {
                return Some((SmolStr::default(), false));
            };
            if prev.followed_by_space || prev.kind == SyntaxKind::PERSIST {
                return Some((SmolStr::default(), false));
            }
            if self.verb == Some(t - 1) && self.verb_exact && *point != CompletionPoint::Verb {
                return Some((SmolStr::default(), true));
            }
            return None;
        }
        if t + 1 == self.end && !token.followed_by_space && !token.kind.is_quote() {
            return Some((token.text.clone(), false));
        }
        None
    }

    pub(crate) fn finish(self) -> (OrderKind, bool, Vec<Token>, Vec<SyntaxError>) {
        (self.kind, self.long, self.tokens, self.errors)
    }
}
