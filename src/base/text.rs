//! Text utilities for keyword and name matching.

/// Fold a word for locale-aware matching.
///
/// Matching is case-insensitive and umlauts fold to their two-letter
/// spelling, so a player typing `KAEMPFE` or `kaempfe` still hits `KÄMPFE`;
/// `KAMPFE` does not. Order files write
/// spaces inside names as `~` or `_`; both fold to a plain space.
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.trim().chars() {
        match c {
            'ä' | 'Ä' => out.push_str("AE"),
            'ö' | 'Ö' => out.push_str("OE"),
            'ü' | 'Ü' => out.push_str("UE"),
            'ß' | 'ẞ' => out.push_str("SS"),
            'á' | 'à' | 'â' | 'Á' | 'À' | 'Â' => out.push('A'),
            'é' | 'è' | 'ê' | 'É' | 'È' | 'Ê' => out.push('E'),
            'í' | 'ì' | 'î' | 'Í' | 'Ì' | 'Î' => out.push('I'),
            'ó' | 'ò' | 'ô' | 'Ó' | 'Ò' | 'Ô' => out.push('O'),
            'ú' | 'ù' | 'û' | 'Ú' | 'Ù' | 'Û' => out.push('U'),
            '~' | '_' => out.push(' '),
            c => out.extend(c.to_uppercase()),
        }
    }
    out
}

/// `true` if `prefix` folds to a prefix of `full`.
///
/// An empty prefix matches everything.
pub fn is_prefix_normalized(prefix: &str, full: &str) -> bool {
    normalize(full).starts_with(&normalize(prefix))
}
