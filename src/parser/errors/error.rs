//! Diagnostics attached to a parse result.

use std::fmt;

use text_size::TextRange;

use super::codes::ErrorCode;

/// How serious a diagnostic is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Severity {
    /// The order is invalid
    #[default]
    Error,
    /// The order is valid but probably not what the player meant
    Warning,
}

impl Severity {
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error)
    }
}

/// A second location that explains a diagnostic, such as the opening quote
/// of an unterminated string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelatedInfo {
    pub message: String,
    pub range: TextRange,
}

impl RelatedInfo {
    pub fn new(message: impl Into<String>, range: TextRange) -> Self {
        Self {
            message: message.into(),
            range,
        }
    }
}

/// One problem in an order line.
///
/// `range` covers the offending token; for a missing argument it is the
/// empty range at the end of the line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    pub message: String,
    pub range: TextRange,
    pub code: ErrorCode,
    pub severity: Severity,
    /// What the player could type instead
    pub hint: Option<String>,
    pub related: Vec<RelatedInfo>,
}

impl SyntaxError {
    pub fn new(message: impl Into<String>, range: TextRange, code: ErrorCode) -> Self {
        Self {
            message: message.into(),
            range,
            code,
            severity: Severity::Error,
            hint: None,
            related: Vec::new(),
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    pub fn with_related(mut self, info: RelatedInfo) -> Self {
        self.related.push(info);
        self
    }

    /// Typing further may still make the order valid.
    pub fn is_incomplete(&self) -> bool {
        self.code.is_incomplete()
    }
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)?;
        if let Some(hint) = &self.hint {
            write!(f, " ({hint})")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use text_size::TextSize;

    use super::*;

    fn range(start: u32, end: u32) -> TextRange {
        TextRange::new(TextSize::new(start), TextSize::new(end))
    }

    #[test]
    fn test_new_error_defaults() {
        let err = SyntaxError::new("expected unit id", range(4, 8), ErrorCode::E0201);
        assert_eq!(err.severity, Severity::Error);
        assert!(err.hint.is_none());
        assert!(err.related.is_empty());
        assert!(!err.is_incomplete());
    }

    #[test]
    fn test_unterminated_string_points_at_quote() {
        let err = SyntaxError::new("unterminated string", range(11, 14), ErrorCode::E0101)
            .with_related(RelatedInfo::new("string opened here", range(10, 11)));
        assert_eq!(err.related[0].range, range(10, 11));
        assert!(err.is_incomplete());
    }

    #[test]
    fn test_display_includes_code_and_hint() {
        let err = SyntaxError::new("\"S\" matches more than one item", range(10, 11), ErrorCode::E0502)
            .with_hint("type more of the name");
        assert_eq!(err.to_string(), "E0502: \"S\" matches more than one item (type more of the name)");
    }
}
