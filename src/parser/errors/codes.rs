//! Diagnostic codes
//!
//! Codes are grouped by the stage that finds the problem:
//! - E01xx: quoting
//! - E02xx: missing or surplus tokens
//! - E03xx: the verb
//! - E04xx: numbers and ids
//! - E05xx: names of rule objects (items, skills, buildings, ...)
//! - E06xx: string content

use std::fmt;

/// Code of a [`SyntaxError`](super::SyntaxError)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // E01xx: Quoting
    // =========================================================================
    /// Quoted string without closing quote
    E0101,

    // =========================================================================
    // E02xx: Structure
    // =========================================================================
    /// Token that does not fit the grammar position
    E0201,
    /// Order ends where an argument is required
    E0202,
    /// Tokens after a complete order
    E0203,

    // =========================================================================
    // E03xx: Verbs
    // =========================================================================
    /// First word is not a verb in the order locale
    E0301,
    /// Abbreviation matches more than one verb
    E0302,

    // =========================================================================
    // E04xx: Numbers and ids
    // =========================================================================
    /// Number overflows or is outside the allowed range
    E0401,
    /// Id has foreign digits or is out of range
    E0402,

    // =========================================================================
    // E05xx: Rule data
    // =========================================================================
    /// Name does not match any rule object accepted here
    E0501,
    /// Name matches more than one rule object
    E0502,

    // =========================================================================
    // E06xx: String content
    // =========================================================================
    /// String content rejected (e.g. malformed email address)
    E0601,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::E0101 => "E0101",
            Self::E0201 => "E0201",
            Self::E0202 => "E0202",
            Self::E0203 => "E0203",
            Self::E0301 => "E0301",
            Self::E0302 => "E0302",
            Self::E0401 => "E0401",
            Self::E0402 => "E0402",
            Self::E0501 => "E0501",
            Self::E0502 => "E0502",
            Self::E0601 => "E0601",
        }
    }

    /// Errors that can go away by typing further
    pub fn is_incomplete(&self) -> bool {
        matches!(self, Self::E0101 | Self::E0202)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
