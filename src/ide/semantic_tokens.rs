//! Semantic tokens: syntax highlighting from the parser's token tags.
//!
//! Every token leaves the parse with exactly one [`SyntaxKind`]; this module
//! only maps those tags to highlight classes.

use crate::base::TextRange;
use crate::parser::{ParseResult, SyntaxKind};

/// Token type for semantic highlighting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenType {
    Keyword,
    /// Unit, faction and container ids
    Variable,
    Number,
    String,
    Operator,
    Comment,
}

impl TokenType {
    /// Convert to LSP token type index.
    pub fn to_lsp_index(self) -> u32 {
        match self {
            TokenType::Keyword => 0,
            TokenType::Variable => 1,
            TokenType::Number => 2,
            TokenType::String => 3,
            TokenType::Operator => 4,
            TokenType::Comment => 5,
        }
    }

    /// The highlight class for a token tag; `None` for unrecognized text and
    /// the end marker.
    pub fn from_kind(kind: SyntaxKind) -> Option<Self> {
        match kind {
            SyntaxKind::KEYWORD => Some(TokenType::Keyword),
            SyntaxKind::ID => Some(TokenType::Variable),
            SyntaxKind::NUMBER => Some(TokenType::Number),
            SyntaxKind::STRING | SyntaxKind::OPENING_QUOTE | SyntaxKind::CLOSING_QUOTE => Some(TokenType::String),
            SyntaxKind::PERSIST => Some(TokenType::Operator),
            SyntaxKind::COMMENT => Some(TokenType::Comment),
            SyntaxKind::UNDEFINED | SyntaxKind::END_OF_COMMAND => None,
        }
    }
}

/// A semantic token for syntax highlighting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SemanticToken {
    /// Byte range in the order line
    pub range: TextRange,
    pub token_type: TokenType,
}

/// Highlight classes for a parsed line, in source order.
pub fn semantic_tokens(result: &ParseResult) -> Vec<SemanticToken> {
    result
        .tokens()
        .iter()
        .filter(|t| !t.range.is_empty())
        .filter_map(|t| {
            TokenType::from_kind(t.kind).map(|token_type| SemanticToken {
                range: t.range,
                token_type,
            })
        })
        .collect()
}
