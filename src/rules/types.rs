use smol_str::SmolStr;

use crate::base::Locale;

/// Translated names of a rule object, one per locale.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocalizedNames {
    names: [Option<SmolStr>; 2],
}

impl LocalizedNames {
    pub fn new(german: impl Into<SmolStr>, english: impl Into<SmolStr>) -> Self {
        Self {
            names: [Some(german.into()), Some(english.into())],
        }
    }

    pub fn with(mut self, locale: Locale, name: impl Into<SmolStr>) -> Self {
        self.names[locale.index()] = Some(name.into());
        self
    }

    pub fn get(&self, locale: Locale) -> Option<&str> {
        self.names[locale.index()].as_deref()
    }
}

/// Common access to rule objects addressed by translated name.
pub trait Named {
    /// Locale-independent identifier (e.g. `silver`).
    fn id(&self) -> &str;

    fn names(&self) -> &LocalizedNames;

    fn name(&self, locale: Locale) -> Option<&str> {
        self.names().get(locale)
    }
}

macro_rules! impl_named {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Named for $ty {
                fn id(&self) -> &str {
                    &self.id
                }

                fn names(&self) -> &LocalizedNames {
                    &self.names
                }
            }
        )*
    };
}

/// Coarse item classification, used to narrow completions per verb.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemCategory {
    Silver,
    Luxury,
    Herb,
    Potion,
    Resource,
    Weapon,
    Armour,
    Animal,
    Other,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ItemType {
    pub id: SmolStr,
    pub names: LocalizedNames,
    pub weight: f32,
    pub category: ItemCategory,
    pub icon: SmolStr,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillType {
    pub id: SmolStr,
    pub names: LocalizedNames,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildingType {
    pub id: SmolStr,
    pub names: LocalizedNames,
    /// Castles are entered and named through the CASTLE keyword.
    pub castle: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShipType {
    pub id: SmolStr,
    pub names: LocalizedNames,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Race {
    pub id: SmolStr,
    pub names: LocalizedNames,
    /// Whether units of this race can be recruited by players.
    pub playable: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spell {
    pub id: SmolStr,
    pub names: LocalizedNames,
    pub level: u32,
    /// Combat spells are set with COMBATSPELL rather than cast.
    pub combat: bool,
}

impl_named!(ItemType, SkillType, BuildingType, ShipType, Race, Spell);
