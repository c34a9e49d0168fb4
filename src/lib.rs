//! # eressea-orders
//!
//! Order language library for Eressea-family play-by-mail games: tokenizer,
//! recursive-descent order grammar, typed order model and completion engine.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! ide       → Completion, semantic tokens, batch validation, shared parser host
//!   ↓
//! orders    → Typed order model and surface rendering
//!   ↓
//! parser    → Logos tokenizer, keyword resolver, command table, verb handlers
//!   ↓
//! rules     → Read-only rule-data oracle (items, skills, buildings, ...)
//!   ↓
//! base      → Primitives (Locale, IdFormat, TextRange, normalisation)
//! ```

// ============================================================================
// MODULES (dependency order: base → rules → parser → orders → ide)
// ============================================================================

/// Foundation types: Locale, IdFormat, TextRange, keyword normalisation
pub mod base;

/// Rule data oracle consulted while parsing
pub mod rules;

/// Parser: tokenizer, keyword resolver, grammar handlers
pub mod parser;

/// Typed order objects produced by the parser
pub mod orders;

/// Editor features: completion, semantic tokens, batch validation
pub mod ide;

// Re-export commonly needed items
pub use parser::keywords::{self, OrderKeyword};
pub use parser::{OrderParser, ParseResult, ParserConfig};

// Re-export foundation types
pub use base::{IdFormat, Locale, TextRange, TextSize};
