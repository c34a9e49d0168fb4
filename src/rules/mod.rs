//! Rule data oracle.
//!
//! The parser validates arguments against live rule data (item types, skills,
//! buildings, ships, races, spells) but never owns it. Callers provide an
//! implementation of [`Rules`]; [`RuleSet`] is a plain in-memory one.
//!
//! The oracle only enumerates objects and finds them by id. Names are matched
//! by [`resolve_name`] over those enumerations; it owns locale folding and the
//! ambiguity policy.

mod matching;
mod ruleset;
mod types;

pub use matching::{NameMatch, resolve_name};
pub use ruleset::{RuleSet, RuleSetBuilder};
#[doc(hidden)]
pub use ruleset::fixtures;
pub use types::{
    BuildingType, ItemCategory, ItemType, LocalizedNames, Named, Race, ShipType, SkillType, Spell,
};

use crate::base::IdFormat;

/// Read-only view of a ruleset, queried while parsing and completing.
pub trait Rules: Send + Sync {
    /// Numeric base in effect for ids in this ruleset.
    fn id_format(&self) -> IdFormat;

    fn item_types(&self) -> &[ItemType];
    fn skill_types(&self) -> &[SkillType];
    fn building_types(&self) -> &[BuildingType];
    fn ship_types(&self) -> &[ShipType];
    fn races(&self) -> &[Race];
    fn spells(&self) -> &[Spell];

    fn item_type(&self, id: &str) -> Option<&ItemType> {
        self.item_types().iter().find(|t| t.id == id)
    }

    fn skill_type(&self, id: &str) -> Option<&SkillType> {
        self.skill_types().iter().find(|t| t.id == id)
    }

    fn building_type(&self, id: &str) -> Option<&BuildingType> {
        self.building_types().iter().find(|t| t.id == id)
    }

    fn ship_type(&self, id: &str) -> Option<&ShipType> {
        self.ship_types().iter().find(|t| t.id == id)
    }

    fn race(&self, id: &str) -> Option<&Race> {
        self.races().iter().find(|t| t.id == id)
    }

    fn spell(&self, id: &str) -> Option<&Spell> {
        self.spells().iter().find(|t| t.id == id)
    }
}
