use thiserror::Error;

use crate::base::Locale;

/// Defects in parser setup.
///
/// These never result from order text. They surface from
/// [`OrderParser::new`](crate::parser::OrderParser::new) and the locale and
/// ruleset setters, which rebuild the command table.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OrderParserError {
    #[error("verb {keyword} has no translation for locale {locale}")]
    MissingTranslation { keyword: &'static str, locale: Locale },

    #[error("verbs {first} and {second} share the surface \"{surface}\" in locale {locale}")]
    DuplicateVerb {
        first: &'static str,
        second: &'static str,
        surface: String,
        locale: Locale,
    },

    #[error("invalid id base {0}, expected 2..=36")]
    InvalidIdBase(u32),

    #[error("no quote characters configured")]
    NoQuotes,

    #[error("quote character {0:?} cannot delimit strings")]
    InvalidQuote(char),
}
