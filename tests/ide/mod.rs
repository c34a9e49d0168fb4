//! Editor feature tests
//!
//! Tests for:
//! - Completion proposals at each grammar position
//! - Semantic token classification
//! - Batch validation and the shared parser

pub mod tests_analysis;
pub mod tests_completion;
pub mod tests_semantic_tokens;
