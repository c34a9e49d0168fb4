//! Order grammar tests
//!
//! Tests for:
//! - Verb acceptance (German and English)
//! - Diagnostics for invalid orders
//! - Token classification
//! - Locale independence
//! - Rendering round trips

pub mod tests_errors;
pub mod tests_locale;
pub mod tests_render;
pub mod tests_scenarios;
pub mod tests_verbs;
