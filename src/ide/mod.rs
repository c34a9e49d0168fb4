//! Editor features built on the order parser.
//!
//! Everything here takes parser output in and returns plain data out; there
//! are no LSP types. Each function corresponds to one editor request.
//!
//! ## Usage
//!
//! ```ignore
//! use eressea::ide::{CompletionScope, completions, semantic_tokens};
//!
//! let result = parser.parse("GIB 1 5 Silber");
//! let highlights = semantic_tokens(&result);
//! let proposals = completions(&parser, "GIB 1 5 Si", &CompletionScope::default());
//! ```

mod analysis;
mod completion;
mod semantic_tokens;

pub use analysis::{SharedOrderParser, validate_orders};
pub use completion::{
    Completion, CompletionKind, CompletionScope, OrderCompleter, ScopeEntity, ScopeItem, ScopeUnit, completions,
};
pub use semantic_tokens::{SemanticToken, TokenType, semantic_tokens};
