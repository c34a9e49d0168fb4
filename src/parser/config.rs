use crate::base::{IdFormat, Locale};

use super::errors::OrderParserError;

/// Parser configuration
///
/// ```
/// use eressea::{Locale, ParserConfig};
///
/// let config = ParserConfig::default()
///     .with_order_locale(Locale::English)
///     .with_gui_locale(Locale::German);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserConfig {
    /// Language orders are typed in
    pub order_locale: Locale,
    /// Language of completion display text
    pub gui_locale: Locale,
    /// Characters that delimit strings
    pub quotes: Vec<char>,
    /// Keep comments as COMMENT tokens (otherwise they are dropped)
    pub keep_comments: bool,
    /// Id base overriding the ruleset's
    pub id_base: Option<u32>,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            order_locale: Locale::German,
            gui_locale: Locale::German,
            quotes: vec!['"', '\''],
            keep_comments: true,
            id_base: None,
        }
    }
}

impl ParserConfig {
    pub fn with_order_locale(mut self, locale: Locale) -> Self {
        self.order_locale = locale;
        self
    }

    pub fn with_gui_locale(mut self, locale: Locale) -> Self {
        self.gui_locale = locale;
        self
    }

    pub fn with_quotes(mut self, quotes: &[char]) -> Self {
        self.quotes = quotes.to_vec();
        self
    }

    pub fn with_keep_comments(mut self, keep: bool) -> Self {
        self.keep_comments = keep;
        self
    }

    pub fn with_id_base(mut self, base: u32) -> Self {
        self.id_base = Some(base);
        self
    }

    pub fn validate(&self) -> Result<(), OrderParserError> {
        if self.quotes.is_empty() {
            return Err(OrderParserError::NoQuotes);
        }
        if let Some(&quote) = self.quotes.iter().find(|&&q| q != '"' && q != '\'') {
            return Err(OrderParserError::InvalidQuote(quote));
        }
        if let Some(base) = self.id_base {
            if IdFormat::new(base).is_none() {
                return Err(OrderParserError::InvalidIdBase(base));
            }
        }
        Ok(())
    }

    /// Id format: the override if set, otherwise `ruleset`.
    pub(crate) fn id_format(&self, ruleset: IdFormat) -> IdFormat {
        self.id_base.and_then(IdFormat::new).unwrap_or(ruleset)
    }
}
