//! Foundation types for the order toolchain.
//!
//! This module provides fundamental types used throughout the crate:
//! - [`Locale`] - Order / GUI languages
//! - [`IdFormat`] - Numeric base for unit and container ids
//! - [`TextRange`], [`TextSize`] - Source positions (byte offsets)
//! - [`normalize`] - Case and umlaut folding used for keyword matching
//!
//! This module has NO dependencies on other crate modules.

mod id;
mod locale;
mod text;

pub use id::IdFormat;
pub use locale::Locale;
pub use text::{is_prefix_normalized, normalize};

// Re-export text-size types for convenience
pub use text_size::{self, TextRange, TextSize};
