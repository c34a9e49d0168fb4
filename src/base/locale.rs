use std::fmt;

/// A language in which orders are typed or the GUI is displayed.
///
/// The order locale selects which keyword surfaces the grammar matches.
/// The GUI locale only affects display text of completions; the two are
/// configured independently and never substituted for each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Locale {
    #[default]
    German,
    English,
}

impl Locale {
    /// All supported locales, in table order.
    pub const ALL: [Locale; 2] = [Locale::German, Locale::English];

    /// ISO-639 language tag (`de`, `en`).
    pub fn tag(self) -> &'static str {
        match self {
            Locale::German => "de",
            Locale::English => "en",
        }
    }

    /// Parse a language tag, accepting region suffixes (`de_DE`, `en-GB`).
    pub fn from_tag(tag: &str) -> Option<Self> {
        let lang = tag
            .split(['_', '-'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match lang.as_str() {
            "de" => Some(Locale::German),
            "en" => Some(Locale::English),
            _ => None,
        }
    }

    /// Index into per-locale tables.
    pub(crate) fn index(self) -> usize {
        match self {
            Locale::German => 0,
            Locale::English => 1,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_tag_accepts_region_suffix() {
        assert_eq!(Locale::from_tag("de_DE"), Some(Locale::German));
        assert_eq!(Locale::from_tag("en-GB"), Some(Locale::English));
        assert_eq!(Locale::from_tag("EN"), Some(Locale::English));
        assert_eq!(Locale::from_tag("fr"), None);
    }

    #[test]
    fn test_tag_roundtrip() {
        for locale in Locale::ALL {
            assert_eq!(Locale::from_tag(locale.tag()), Some(locale));
        }
    }
}
