//! Logos-based tokenizer for order lines
//!
//! Logos splits the raw line into whitespace, words and the handful of
//! characters with lexical meaning (`;`, `//`, `@`, quotes, escapes). The
//! [`Tokenizer`] then assembles those pieces into order tokens: adjacent word
//! pieces merge, text between a pair of active quote characters becomes one
//! `STRING` token framed by `OPENING_QUOTE` / `CLOSING_QUOTE`, and the stream
//! always ends with an `END_OF_COMMAND` token.
//!
//! The tokenizer never fails. An unterminated quote leaves the rest of the
//! line as a single `UNDEFINED` token after the `OPENING_QUOTE`.

use logos::Logos;
use smol_str::SmolStr;
use text_size::{TextRange, TextSize};

use super::syntax_kind::SyntaxKind;

/// A token with its classification, text, and position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Source text; unescaped content for `STRING` tokens
    pub text: SmolStr,
    pub kind: SyntaxKind,
    pub range: TextRange,
    /// The source character right after the token is whitespace
    pub followed_by_space: bool,
}

impl Token {
    fn new(text: impl Into<SmolStr>, kind: SyntaxKind, start: usize, end: usize) -> Self {
        Self {
            text: text.into(),
            kind,
            range: TextRange::new(offset(start), offset(end)),
            followed_by_space: false,
        }
    }

    pub fn is_end(&self) -> bool {
        self.kind == SyntaxKind::END_OF_COMMAND
    }
}

fn offset(pos: usize) -> TextSize {
    TextSize::new(u32::try_from(pos).unwrap_or(u32::MAX))
}

/// Raw pieces produced by logos
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
enum RawToken {
    #[regex(r"[ \t\r\n\f]+")]
    Whitespace,

    #[token(";")]
    Semicolon,

    #[token("//")]
    DoubleSlash,

    #[token("/")]
    Slash,

    #[token("@")]
    At,

    #[token("\"")]
    DoubleQuote,

    #[token("'")]
    SingleQuote,

    #[regex(r"\\.")]
    Escape,

    #[token("\\")]
    Backslash,

    #[regex(r#"[^ \t\r\n\f;/@"'\\]+"#)]
    Text,
}

/// Splits order lines into tokens
#[derive(Debug, Clone)]
pub struct Tokenizer {
    quotes: Vec<char>,
    keep_comments: bool,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new(&['"', '\''], true)
    }
}

enum State {
    Normal,
    InString { quote: char, start: usize, content: String },
}

impl Tokenizer {
    /// A tokenizer that treats `quotes` as string delimiters.
    ///
    /// Quote characters outside that set are ordinary word characters.
    pub fn new(quotes: &[char], keep_comments: bool) -> Self {
        Self {
            quotes: quotes.to_vec(),
            keep_comments,
        }
    }

    pub fn quotes(&self) -> &[char] {
        &self.quotes
    }

    /// Tokenize one order line.
    pub fn tokenize(&self, line: &str) -> Vec<Token> {
        let mut tokens = Vec::new();
        let mut word: Option<(usize, usize)> = None;
        let mut state = State::Normal;
        let mut lexer = RawToken::lexer(line);

        while let Some(raw) = lexer.next() {
            let span = lexer.span();
            let slice = lexer.slice();
            let raw = raw.unwrap_or(RawToken::Text);

            match &mut state {
                State::InString { quote, start, content } => {
                    let closes = match raw {
                        RawToken::DoubleQuote => *quote == '"',
                        RawToken::SingleQuote => *quote == '\'',
                        _ => false,
                    };
                    if closes {
                        tokens.push(Token::new(content.as_str(), SyntaxKind::STRING, *start, span.start));
                        tokens.push(Token::new(slice, SyntaxKind::CLOSING_QUOTE, span.start, span.end));
                        state = State::Normal;
                    } else if raw == RawToken::Escape {
                        content.push_str(unescape(slice, *quote));
                    } else {
                        content.push_str(slice);
                    }
                }
                State::Normal => match raw {
                    RawToken::Whitespace => flush_word(line, &mut word, &mut tokens),
                    RawToken::Semicolon => {
                        flush_word(line, &mut word, &mut tokens);
                        self.push_comment(line, span.start, &mut tokens);
                        break;
                    }
                    RawToken::DoubleSlash if word.is_none() => {
                        self.push_comment(line, span.start, &mut tokens);
                        break;
                    }
                    RawToken::At if word.is_none() && tokens.is_empty() => {
                        tokens.push(Token::new(slice, SyntaxKind::PERSIST, span.start, span.end));
                    }
                    RawToken::DoubleQuote | RawToken::SingleQuote
                        if self.is_active_quote(slice) =>
                    {
                        flush_word(line, &mut word, &mut tokens);
                        tokens.push(Token::new(slice, SyntaxKind::OPENING_QUOTE, span.start, span.end));
                        state = State::InString {
                            quote: slice.chars().next().unwrap_or('"'),
                            start: span.end,
                            content: String::new(),
                        };
                    }
                    _ => {
                        word = Some(match word {
                            Some((start, _)) => (start, span.end),
                            None => (span.start, span.end),
                        });
                    }
                },
            }
        }

        flush_word(line, &mut word, &mut tokens);
        if let State::InString { start, content, .. } = state {
            if !content.is_empty() {
                tokens.push(Token::new(content, SyntaxKind::UNDEFINED, start, line.len()));
            }
        }

        // comments keep the end marker at the end of the line
        tokens.push(Token::new("", SyntaxKind::END_OF_COMMAND, line.len(), line.len()));

        for token in &mut tokens {
            let end = usize::from(token.range.end());
            token.followed_by_space = line
                .get(end..)
                .and_then(|rest| rest.chars().next())
                .is_some_and(char::is_whitespace);
        }
        tokens
    }

    fn is_active_quote(&self, slice: &str) -> bool {
        slice.chars().next().is_some_and(|c| self.quotes.contains(&c))
    }

    fn push_comment(&self, line: &str, start: usize, tokens: &mut Vec<Token>) {
        if self.keep_comments {
            tokens.push(Token::new(line[start..].trim_end(), SyntaxKind::COMMENT, start, line.len()));
        }
    }
}

fn flush_word(line: &str, word: &mut Option<(usize, usize)>, tokens: &mut Vec<Token>) {
    if let Some((start, end)) = word.take() {
        tokens.push(Token::new(&line[start..end], SyntaxKind::UNDEFINED, start, end));
    }
}

/// `\"` inside a `"`-string and `\\` unescape; any other escape stays literal.
fn unescape(slice: &str, quote: char) -> &str {
    let escaped = &slice[1..];
    if escaped == "\\" || escaped.chars().next() == Some(quote) {
        escaped
    } else {
        slice
    }
}

/// Tokenize with the default quote characters, keeping comments
pub fn tokenize(input: &str) -> Vec<Token> {
    Tokenizer::default().tokenize(input)
}
