//! Token classification tags.
//!
//! The tokenizer assigns the lexical tags (quotes, comment, persist marker,
//! end of command). Word tokens start out as `UNDEFINED` and receive their
//! syntactic role from the grammar as it recognizes them. Every token carries
//! exactly one tag when a parse returns, which is what syntax highlighting
//! consumes.

/// Classification of an order token
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(u8)]
#[allow(non_camel_case_types)]
pub enum SyntaxKind {
    /// Not (yet) recognized, or the token where recognition broke down
    #[default]
    UNDEFINED = 0,
    /// Verb or sub-keyword
    KEYWORD,
    /// Unit, container or faction id
    ID,
    /// Decimal amount, level or coordinate
    NUMBER,
    /// Free text or a rule-object name
    STRING,
    OPENING_QUOTE,
    CLOSING_QUOTE,
    /// Leading `@`: keep the order for the next turn
    PERSIST,
    /// `;` or `//` comment, folded to one token
    COMMENT,
    /// Synthetic marker at the end of the order
    END_OF_COMMAND,
}

impl SyntaxKind {
    /// Tokens the grammar never matches against
    pub fn is_trivia(self) -> bool {
        matches!(self, SyntaxKind::COMMENT)
    }

    pub fn is_quote(self) -> bool {
        matches!(self, SyntaxKind::OPENING_QUOTE | SyntaxKind::CLOSING_QUOTE)
    }

    /// Human-readable name for diagnostics
    pub fn display_name(self) -> &'static str {
        match self {
            SyntaxKind::UNDEFINED => "unrecognized text",
            SyntaxKind::KEYWORD => "keyword",
            SyntaxKind::ID => "id",
            SyntaxKind::NUMBER => "number",
            SyntaxKind::STRING => "text",
            SyntaxKind::OPENING_QUOTE => "opening quote",
            SyntaxKind::CLOSING_QUOTE => "closing quote",
            SyntaxKind::PERSIST => "'@'",
            SyntaxKind::COMMENT => "comment",
            SyntaxKind::END_OF_COMMAND => "end of order",
        }
    }
}
