//! Order parser entry point.
//!
//! [`OrderParser`] owns everything a parse reads: configuration, keyword
//! resolver, rule data and the command table. All of it is immutable while a
//! parse runs; each call to [`OrderParser::parse`] gets its own
//! [`OrderContext`], so one parser can serve many threads.

use std::fmt;
use std::sync::Arc;

use tracing::trace;

use crate::base::{IdFormat, Locale};
use crate::orders::{Order, OrderKind};
use crate::rules::Rules;

use super::config::ParserConfig;
use super::context::OrderContext;
use super::errors::{ErrorCode, OrderParserError, SyntaxError};
use super::grammar::{CommandTable, VerbMatch};
use super::hooks::{CompletionHook, CompletionPoint};
use super::keywords::{Keywords, OrderKeyword};
use super::lexer::{Token, Tokenizer};
use super::strings;
use super::syntax_kind::SyntaxKind;

/// Parse result: the order plus diagnostics
#[derive(Debug, Clone)]
pub struct ParseResult {
    pub order: Order,
    pub errors: Vec<SyntaxError>,
}

impl ParseResult {
    /// The line is a complete, valid order
    pub fn valid(&self) -> bool {
        self.order.valid
    }

    /// Tokens with their final classification
    pub fn tokens(&self) -> &[Token] {
        &self.order.tokens
    }
}

/// Parser for one order locale and ruleset
#[derive(Clone)]
pub struct OrderParser {
    config: ParserConfig,
    keywords: Arc<Keywords>,
    rules: Arc<dyn Rules>,
    table: Arc<CommandTable>,
    tokenizer: Tokenizer,
    id_format: IdFormat,
}

impl OrderParser {
    /// A parser using the built-in German and English keywords.
    pub fn new(rules: Arc<dyn Rules>, config: ParserConfig) -> Result<Self, OrderParserError> {
        Self::with_keywords(rules, config, Keywords::builtin())
    }

    pub fn with_keywords(
        rules: Arc<dyn Rules>,
        config: ParserConfig,
        keywords: Keywords,
    ) -> Result<Self, OrderParserError> {
        config.validate()?;
        let table = CommandTable::build(&keywords, config.order_locale)?;
        let tokenizer = Tokenizer::new(&config.quotes, config.keep_comments);
        let id_format = config.id_format(rules.id_format());
        Ok(Self {
            config,
            keywords: Arc::new(keywords),
            rules,
            table: Arc::new(table),
            tokenizer,
            id_format,
        })
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Locale orders are matched in
    pub fn locale(&self) -> Locale {
        self.config.order_locale
    }

    /// Locale for display text; never used for matching
    pub fn gui_locale(&self) -> Locale {
        self.config.gui_locale
    }

    pub fn keywords(&self) -> &Keywords {
        &self.keywords
    }

    pub fn rules(&self) -> &dyn Rules {
        &*self.rules
    }

    pub fn id_format(&self) -> IdFormat {
        self.id_format
    }

    pub fn commands(&self) -> &CommandTable {
        &self.table
    }

    /// Switch the order locale, rebuilding the command table.
    pub fn set_locale(&mut self, locale: Locale) -> Result<(), OrderParserError> {
        let table = CommandTable::build(&self.keywords, locale)?;
        self.config.order_locale = locale;
        self.table = Arc::new(table);
        Ok(())
    }

    /// Switch the ruleset, rebuilding the command table.
    pub fn set_rules(&mut self, rules: Arc<dyn Rules>) -> Result<(), OrderParserError> {
        let table = CommandTable::build(&self.keywords, self.config.order_locale)?;
        self.id_format = self.config.id_format(rules.id_format());
        self.rules = rules;
        self.table = Arc::new(table);
        Ok(())
    }

    pub fn tokenize(&self, line: &str) -> Vec<Token> {
        self.tokenizer.tokenize(line)
    }

    pub fn parse(&self, line: &str) -> ParseResult {
        self.run(line, None)
    }

    /// Parse and report completion points at the end of `line` to `hook`.
    ///
    /// `line` is the text up to the cursor.
    pub fn parse_with_completion(&self, line: &str, hook: &mut dyn CompletionHook) -> ParseResult {
        self.run(line, Some(hook))
    }

    /// A parser for an order nested in a string delimited by `outer`.
    ///
    /// The nested parser quotes with the other quote character only, whether
    /// or not the outer configuration enables it.
    pub fn nested(&self, outer: char) -> OrderParser {
        let quotes = vec![strings::nested_quote(outer)];
        let mut nested = self.clone();
        nested.tokenizer = Tokenizer::new(&quotes, self.config.keep_comments);
        nested.config.quotes = quotes;
        nested
    }

    pub(crate) fn run<'a>(&'a self, line: &str, hook: Option<&'a mut (dyn CompletionHook + 'a)>) -> ParseResult {
        let tokens = self.tokenizer.tokenize(line);
        let mut cx = OrderContext::new(self, tokens, hook);
        let (verb, persistent, ok) = self.read_order(&mut cx);
        let (kind, long, tokens, errors) = cx.finish();

        let order = Order {
            verb,
            kind,
            long,
            persistent,
            valid: ok && errors.is_empty(),
            text: line.to_string(),
            tokens,
        };
        ParseResult { order, errors }
    }

    fn read_order(&self, cx: &mut OrderContext<'_>) -> (Option<OrderKeyword>, bool, bool) {
        let persistent = cx.kind(0) == SyntaxKind::PERSIST;
        if persistent {
            cx.bump();
        }

        let t = cx.pos();
        if cx.kind(t) == SyntaxKind::COMMENT {
            let text = cx.text(t);
            let (body, slashes) = match text.strip_prefix("//") {
                Some(body) => (body, true),
                None => (text.strip_prefix(';').unwrap_or(text.as_str()), false),
            };
            cx.set_kind(OrderKind::Comment {
                text: body.to_string(),
                persistent: slashes,
            });
            return (None, persistent || slashes, true);
        }

        if cx.at_end() {
            cx.complete(CompletionPoint::Verb);
            if persistent {
                cx.error(ErrorCode::E0202, t, "expected order after @");
                return (None, true, false);
            }
            cx.set_kind(OrderKind::Empty);
            return (None, false, true);
        }

        if !cx.is_word(t) {
            cx.complete(CompletionPoint::Verb);
            cx.unexpected("order");
            return (None, persistent, false);
        }

        let text = cx.text(t);
        let found = self.table.lookup(&text);
        trace!(verb = %text, ?found, "dispatch");
        match found {
            VerbMatch::Found { handler, exact } => {
                if !exact {
                    cx.complete(CompletionPoint::Verb);
                }
                cx.tag(t, SyntaxKind::KEYWORD);
                cx.set_verb(t, exact);
                cx.set_long(handler.is_long());
                cx.bump();
                let ok = handler.read(cx);
                (Some(handler.keyword()), persistent, ok)
            }
            VerbMatch::Ambiguous => {
                cx.complete(CompletionPoint::Verb);
                cx.tag(t, SyntaxKind::UNDEFINED);
                let range = cx.token(t).range;
                cx.push(
                    SyntaxError::new(format!("\"{text}\" abbreviates more than one order"), range, ErrorCode::E0302)
                        .with_hint("type more of the order"),
                );
                (None, persistent, false)
            }
            VerbMatch::Unknown => {
                cx.complete(CompletionPoint::Verb);
                cx.tag(t, SyntaxKind::UNDEFINED);
                cx.error(ErrorCode::E0301, t, format!("unknown order \"{text}\""));
                (None, persistent, false)
            }
        }
    }
}

impl fmt::Debug for OrderParser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrderParser")
            .field("config", &self.config)
            .field("table", &self.table)
            .field("id_format", &self.id_format)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orders::{Amount, GiveTarget, GiveWhat, UnitRef};
    use crate::parser::hooks::CompletionLog;
    use crate::rules::fixtures;

    fn parser(locale: Locale) -> OrderParser {
        let config = ParserConfig::default().with_order_locale(locale);
        OrderParser::new(Arc::new(fixtures::eressea()), config).unwrap()
    }

    #[test]
    fn test_give() {
        let result = parser(Locale::English).parse("GIVE 1 5 Silver");
        assert!(result.valid(), "{:?}", result.errors);
        assert_eq!(result.order.verb, Some(OrderKeyword::Give));
        let OrderKind::Give(give) = &result.order.kind else {
            panic!("expected GIVE, got {:?}", result.order.kind);
        };
        assert_eq!(give.target, GiveTarget::Unit(UnitRef::Id(1)));
        assert_eq!(
            give.what,
            GiveWhat::Items {
                each: false,
                amount: Amount::Count(5),
                item: Some("silver".into()),
            }
        );
    }

    #[test]
    fn test_empty_line_is_valid() {
        let result = parser(Locale::German).parse("");
        assert!(result.valid());
        assert!(result.order.is_empty());
    }

    #[test]
    fn test_lone_persist_marker_is_invalid() {
        let result = parser(Locale::German).parse("@");
        assert!(!result.valid());
        assert_eq!(result.errors[0].code, ErrorCode::E0202);
    }

    #[test]
    fn test_comments() {
        let p = parser(Locale::German);
        let plain = p.parse("; nur ein Kommentar");
        assert!(plain.valid());
        assert_eq!(
            plain.order.kind,
            OrderKind::Comment {
                text: " nur ein Kommentar".to_string(),
                persistent: false,
            }
        );
        let kept = p.parse("// bleibt");
        assert!(kept.order.persistent);
        assert!(kept.order.is_comment());
    }

    #[test]
    fn test_unknown_and_ambiguous_verbs() {
        let p = parser(Locale::English);
        assert_eq!(p.parse("FROBNICATE").errors[0].code, ErrorCode::E0301);
        assert_eq!(p.parse("RES 10").errors[0].code, ErrorCode::E0302);
        assert_eq!(p.parse("RES 10").tokens()[0].kind, SyntaxKind::UNDEFINED);
    }

    #[test]
    fn test_long_flag_set_even_when_arguments_fail() {
        let result = parser(Locale::German).parse("NACH XX");
        assert!(!result.valid());
        assert!(result.order.long);
    }

    #[test]
    fn test_set_locale_switches_verbs() {
        let mut p = parser(Locale::German);
        assert!(p.parse("ARBEITE").valid());
        p.set_locale(Locale::English).unwrap();
        assert!(p.parse("WORK").valid());
        assert!(!p.parse("ARBEITE").valid());
    }

    #[test]
    fn test_nested_parser_swaps_quote() {
        let p = parser(Locale::German);
        let nested = p.nested('"');
        assert_eq!(nested.tokenizer.quotes(), &['\'']);
        assert_eq!(nested.config().quotes, vec!['\'']);
        assert_eq!(p.nested('\'').config().quotes, vec!['"']);
    }

    #[test]
    fn test_nested_parser_quotes_with_single_outer_quote() {
        let config = ParserConfig::default().with_quotes(&['"']);
        let p = OrderParser::new(Arc::new(fixtures::eressea()), config).unwrap();
        let nested = p.nested('"');
        assert_eq!(nested.config().quotes, vec!['\'']);
        assert!(nested.parse("BENENNE EINHEIT 'Hugo der Alte'").valid());
    }

    #[test]
    fn test_completion_on_empty_line() {
        let mut log = CompletionLog::default();
        parser(Locale::German).parse_with_completion("", &mut log);
        assert_eq!(log.points(), vec![CompletionPoint::Verb]);
    }
}
