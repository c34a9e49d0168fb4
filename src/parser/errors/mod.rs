//! Order diagnostics
//!
//! Invalid user input is reported as [`SyntaxError`] values on the parse
//! result; the parser never fails on it. [`OrderParserError`] covers the
//! remaining fatal cases, which are programming or configuration defects.

mod codes;
mod error;
mod fatal;

pub use codes::ErrorCode;
pub use error::{RelatedInfo, Severity, SyntaxError};
pub use fatal::OrderParserError;
