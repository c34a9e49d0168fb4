//! Quoted string arguments.
//!
//! [`read_string`] is the shared skeleton for every string position: it
//! accepts a quoted string (or, unless quotes are required, a single word),
//! hands the content to [`StringArgument::check_inner`] and then lets
//! [`StringArgument::check_next`] decide what may follow.

use smol_str::SmolStr;

use super::context::OrderContext;
use super::errors::{ErrorCode, RelatedInfo, SyntaxError};
use super::hooks::CompletionPoint;
use super::syntax_kind::SyntaxKind;

/// Quote character of a string nested in one delimited by `outer`.
pub fn nested_quote(outer: char) -> char {
    if outer == '"' { '\'' } else { '"' }
}

/// What a string position accepts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StringRules {
    /// `""` is acceptable
    pub allow_empty: bool,
    /// A bare word is not acceptable
    pub require_quotes: bool,
    /// The order may end where the string would start
    pub end_allowed: bool,
    /// A nested order may be persistent (`@`)
    pub persist: bool,
    /// More arguments may follow; the caller continues parsing
    pub non_final: bool,
    /// The content is itself an order; an unterminated string is still
    /// handed to `check_inner` so the nested order can be completed
    pub nested: bool,
    /// Completion offered before the string starts
    pub completion: Option<CompletionPoint>,
}

impl StringRules {
    pub fn allow_empty(mut self) -> Self {
        self.allow_empty = true;
        self
    }

    pub fn require_quotes(mut self) -> Self {
        self.require_quotes = true;
        self
    }

    pub fn end_allowed(mut self) -> Self {
        self.end_allowed = true;
        self
    }

    pub fn persist(mut self) -> Self {
        self.persist = true;
        self
    }

    pub fn non_final(mut self) -> Self {
        self.non_final = true;
        self
    }

    pub fn nested(mut self) -> Self {
        self.nested = true;
        self
    }

    pub fn completion(mut self, point: CompletionPoint) -> Self {
        self.completion = Some(point);
        self
    }
}

/// A string read by [`read_string`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringValue {
    /// Content without quotes, escapes resolved
    pub text: SmolStr,
    /// Index of the content token, or of the opening quote for `""`
    pub token: usize,
    pub quoted: bool,
    /// No string was given; only with [`StringRules::end_allowed`]
    pub omitted: bool,
}

impl StringValue {
    /// The text, unless the string was omitted
    pub fn into_text(self) -> Option<SmolStr> {
        (!self.omitted).then_some(self.text)
    }
}

/// The string being checked, as seen by [`StringArgument::check_inner`]
#[derive(Debug, Clone, Copy)]
pub struct StringSpan<'s> {
    pub content: &'s str,
    /// Index of the content token, or of the opening quote for `""`
    pub token: usize,
    /// Index of the opening quote, `None` for a bare word
    pub opening: Option<usize>,
    /// No closing quote was found
    pub open: bool,
}

/// Per-position validation hooks for string arguments.
pub trait StringArgument {
    /// Validate the content. Errors are reported on the context.
    fn check_inner(&mut self, _cx: &mut OrderContext<'_>, _span: StringSpan<'_>) -> bool {
        true
    }

    /// Validate what follows the string; a complete order by default.
    fn check_next(&mut self, cx: &mut OrderContext<'_>) -> bool {
        cx.expect_end()
    }
}

/// Any text
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainText;

impl StringArgument for PlainText {}

/// Read the string argument at the current token.
///
/// Returns `None` if the production fails. With `non_final` the cursor stays
/// after the string and `check_next` is not called.
pub fn read_string(
    cx: &mut OrderContext<'_>,
    rules: StringRules,
    arg: &mut dyn StringArgument,
) -> Option<StringValue> {
    if let Some(point) = rules.completion {
        cx.complete(point);
    }

    let start = cx.pos();
    if rules.end_allowed && cx.at_end() {
        return Some(StringValue {
            text: SmolStr::default(),
            token: start,
            quoted: false,
            omitted: true,
        });
    }
    let value = if cx.kind(start) == SyntaxKind::OPENING_QUOTE {
        read_quoted(cx, rules, arg)?
    } else if cx.is_word(start) && !rules.require_quotes {
        let text = cx.text(start);
        cx.tag(start, SyntaxKind::STRING);
        let span = StringSpan {
            content: &text,
            token: start,
            opening: None,
            open: false,
        };
        if !arg.check_inner(cx, span) {
            return None;
        }
        cx.bump();
        StringValue {
            text,
            token: start,
            quoted: false,
            omitted: false,
        }
    } else {
        let expected = if rules.require_quotes { "quoted text" } else { "text" };
        cx.unexpected(expected);
        return None;
    };

    if rules.non_final || arg.check_next(cx) {
        Some(value)
    } else {
        None
    }
}

fn read_quoted(cx: &mut OrderContext<'_>, rules: StringRules, arg: &mut dyn StringArgument) -> Option<StringValue> {
    let opening = cx.pos();
    cx.bump();
    let t = cx.pos();

    let (text, token) = match cx.kind(t) {
        SyntaxKind::STRING => (cx.text(t), t),
        SyntaxKind::CLOSING_QUOTE => (SmolStr::default(), opening),
        _ => return unterminated(cx, rules, arg, opening),
    };

    if text.is_empty() && !rules.allow_empty {
        cx.error(ErrorCode::E0601, token, "text must not be empty");
        return None;
    }
    if rules.nested && !rules.persist && text.trim_start().starts_with('@') {
        cx.error(ErrorCode::E0601, token, "nested order must not be persistent");
        return None;
    }
    let span = StringSpan {
        content: &text,
        token,
        opening: Some(opening),
        open: false,
    };
    if !arg.check_inner(cx, span) {
        return None;
    }

    if token != opening {
        cx.bump();
    }
    // closing quote
    cx.bump();
    Some(StringValue {
        text,
        token,
        quoted: true,
        omitted: false,
    })
}

fn unterminated(
    cx: &mut OrderContext<'_>,
    rules: StringRules,
    arg: &mut dyn StringArgument,
    opening: usize,
) -> Option<StringValue> {
    let tail = cx.pos();
    let range = cx.token(tail).range;
    let opened_at = cx.token(opening).range;
    cx.push(
        SyntaxError::new("unterminated string", range, ErrorCode::E0101)
            .with_related(RelatedInfo::new("string opened here", opened_at)),
    );
    if rules.nested {
        let content = if cx.at_end() { SmolStr::default() } else { cx.text(tail) };
        let span = StringSpan {
            content: &content,
            token: tail,
            opening: Some(opening),
            open: true,
        };
        arg.check_inner(cx, span);
    }
    None
}
