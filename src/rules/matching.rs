use crate::base::{Locale, normalize};

use super::Named;

/// Outcome of matching typed text against rule-object names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameMatch<'a, T> {
    Unique(&'a T),
    Ambiguous,
    NotFound,
}

impl<'a, T> NameMatch<'a, T> {
    /// The match, if exactly one candidate was found.
    pub fn unique(self) -> Option<&'a T> {
        match self {
            NameMatch::Unique(t) => Some(t),
            _ => None,
        }
    }
}

/// Match `typed` against the `locale` names of `candidates`.
///
/// A folded exact match wins. Without one, a folded prefix match is accepted
/// only if it is the single candidate with that prefix. Two or more candidates
/// at the deciding stage yield [`NameMatch::Ambiguous`]; callers treat that
/// like [`NameMatch::NotFound`] and never pick one.
pub fn resolve_name<'a, T: Named>(candidates: &'a [T], typed: &str, locale: Locale) -> NameMatch<'a, T> {
    let key = normalize(typed);
    if key.is_empty() {
        return NameMatch::NotFound;
    }

    let folded: Vec<(&'a T, String)> = candidates
        .iter()
        .filter_map(|c| c.name(locale).map(|n| (c, normalize(n))))
        .collect();

    let exact: Vec<&'a T> = folded
        .iter()
        .filter(|(_, n)| *n == key)
        .map(|(c, _)| *c)
        .collect();
    match exact.as_slice() {
        [one] => return NameMatch::Unique(*one),
        [] => {}
        _ => return NameMatch::Ambiguous,
    }

    let mut prefixed = folded.iter().filter(|(_, n)| n.starts_with(&key)).map(|(c, _)| *c);
    match (prefixed.next(), prefixed.next()) {
        (Some(one), None) => NameMatch::Unique(one),
        (Some(_), Some(_)) => NameMatch::Ambiguous,
        _ => NameMatch::NotFound,
    }
}
