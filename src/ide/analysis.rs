//! Parser sharing and batch validation for editors.
//!
//! An [`OrderParser`] is immutable once built, so editor sessions can share
//! one behind an [`ArcSwap`]. Switching the locale or ruleset builds a fresh
//! parser and swaps it in; parses already running keep the snapshot they
//! loaded.
//!
//! ```ignore
//! let shared = SharedOrderParser::new(parser);
//! let result = shared.parse("GIB 1 5 Silber");
//! shared.set_locale(Locale::English)?;
//! ```

use std::sync::Arc;

use arc_swap::ArcSwap;
use rayon::prelude::*;
use tracing::debug;

use crate::base::Locale;
use crate::parser::{OrderParser, OrderParserError, ParseResult};
use crate::rules::Rules;

/// The current parser of an editing session, replaceable while in use.
///
/// `set_*` calls update the parser read-copy-update style: concurrent calls
/// are retried against each other's result, so none of them is lost.
pub struct SharedOrderParser {
    current: ArcSwap<OrderParser>,
}

impl SharedOrderParser {
    pub fn new(parser: OrderParser) -> Self {
        Self {
            current: ArcSwap::from_pointee(parser),
        }
    }

    /// Snapshot of the current parser.
    pub fn load(&self) -> Arc<OrderParser> {
        self.current.load_full()
    }

    pub fn parse(&self, line: &str) -> ParseResult {
        self.current.load().parse(line)
    }

    pub fn validate(&self, lines: &[impl AsRef<str> + Sync]) -> Vec<ParseResult> {
        validate_orders(&self.current.load(), lines)
    }

    /// Switch the order locale. On error the current parser stays in place.
    pub fn set_locale(&self, locale: Locale) -> Result<(), OrderParserError> {
        self.update(|parser| parser.set_locale(locale))?;
        debug!(%locale, "order locale switched");
        Ok(())
    }

    /// Switch the ruleset. On error the current parser stays in place.
    pub fn set_rules(&self, rules: Arc<dyn Rules>) -> Result<(), OrderParserError> {
        self.update(|parser| parser.set_rules(Arc::clone(&rules)))?;
        debug!("ruleset switched");
        Ok(())
    }

    /// Apply `change` to a copy of the current parser and swap the copy in.
    ///
    /// `change` runs again if another update won the race.
    fn update(
        &self,
        mut change: impl FnMut(&mut OrderParser) -> Result<(), OrderParserError>,
    ) -> Result<(), OrderParserError> {
        let mut outcome = Ok(());
        self.current.rcu(|current| {
            let mut next = OrderParser::clone(current);
            outcome = change(&mut next);
            if outcome.is_ok() { Arc::new(next) } else { Arc::clone(current) }
        });
        outcome
    }

    /// Replace the parser outright.
    pub fn replace(&self, parser: OrderParser) {
        self.current.store(Arc::new(parser));
    }
}

impl std::fmt::Debug for SharedOrderParser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharedOrderParser")
            .field("current", &*self.current.load_full())
            .finish()
    }
}

/// Parse every line in parallel; results are in line order.
pub fn validate_orders(parser: &OrderParser, lines: &[impl AsRef<str> + Sync]) -> Vec<ParseResult> {
    let results: Vec<ParseResult> = lines.par_iter().map(|line| parser.parse(line.as_ref())).collect();
    let invalid = results.iter().filter(|r| !r.valid()).count();
    debug!(lines = results.len(), invalid, "validated orders");
    results
}
