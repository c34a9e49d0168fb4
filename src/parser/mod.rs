//! Order parser
//!
//! A hand-written recursive-descent parser for one order line at a time:
//!
//! ```text
//! Order line
//!     ↓
//! Tokenizer (logos) → Tokens, all UNDEFINED except quotes / @ / comments
//!     ↓
//! CommandTable → verb handler for the first word
//!     ↓
//! OrderHandler::read → classifies tokens in place, builds the OrderKind,
//!                      fires completion points at the cursor
//!     ↓
//! ParseResult { Order, SyntaxError* }
//! ```
//!
//! Invalid input never panics or returns `Err`; it yields an invalid order
//! with diagnostics. [`OrderParserError`] is reserved for configuration and
//! registration defects found when a parser is built.

#[allow(clippy::module_inception)]
mod parser;

pub mod config;
pub mod context;
pub mod errors;
pub mod grammar;
pub mod hooks;
pub mod keywords;
pub mod lexer;
pub mod strings;
mod syntax_kind;

pub use config::ParserConfig;
pub use context::OrderContext;
pub use errors::{ErrorCode, OrderParserError, RelatedInfo, Severity, SyntaxError};
pub use grammar::{CommandTable, OrderHandler, VerbMatch};
pub use hooks::{CompletionHook, CompletionLog, CompletionPoint, CompletionRequest, LoggedCompletion};
pub use keywords::{KeywordSource, Keywords, OrderKeyword};
pub use lexer::{Token, Tokenizer, tokenize};
pub use parser::{OrderParser, ParseResult};
pub use syntax_kind::SyntaxKind;
