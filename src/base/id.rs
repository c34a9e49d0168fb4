//! Id parsing and formatting for a ruleset's numeric base.
//!
//! Eressea writes unit, building, ship and faction ids in base 36; other
//! variants use decimal ids. All grammar positions that read an id go through
//! one [`IdFormat`] so the base is decided in a single place.

/// Numeric base used for entity ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IdFormat {
    base: u32,
}

impl Default for IdFormat {
    fn default() -> Self {
        Self { base: 36 }
    }
}

impl IdFormat {
    /// Highest id a ruleset may use (`zzzzzz` in base 36).
    pub const MAX_ID: u32 = 2_176_782_335;

    /// Create a format for `base`; `None` unless `2 <= base <= 36`.
    pub fn new(base: u32) -> Option<Self> {
        (2..=36).contains(&base).then_some(Self { base })
    }

    pub fn base(&self) -> u32 {
        self.base
    }

    /// Check that every character is a digit in this base.
    ///
    /// This does not check the value range; see [`IdFormat::parse`].
    pub fn is_id_shaped(&self, text: &str) -> bool {
        !text.is_empty() && text.chars().all(|c| c.to_digit(self.base).is_some())
    }

    /// Parse an id, failing on foreign digits and on values above [`Self::MAX_ID`].
    pub fn parse(&self, text: &str) -> Option<u32> {
        if !self.is_id_shaped(text) {
            return None;
        }
        let mut value: u32 = 0;
        for c in text.chars() {
            let digit = c.to_digit(self.base)?;
            value = value.checked_mul(self.base)?.checked_add(digit)?;
        }
        (value <= Self::MAX_ID).then_some(value)
    }

    /// Format an id in this base using lowercase digits.
    pub fn format(&self, id: u32) -> String {
        if id == 0 {
            return "0".to_string();
        }
        let mut digits: Vec<char> = Vec::new();
        let mut rest = id;
        while rest > 0 {
            digits.extend(char::from_digit(rest % self.base, self.base));
            rest /= self.base;
        }
        digits.into_iter().rev().collect()
    }
}
