use crate::base::IdFormat;

use super::{
    BuildingType, ItemCategory, ItemType, LocalizedNames, Race, Rules, ShipType, SkillType, Spell,
};

/// In-memory ruleset.
///
/// Built once from report data (or test fixtures) and shared behind an `Arc`.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    id_format: IdFormat,
    items: Vec<ItemType>,
    skills: Vec<SkillType>,
    buildings: Vec<BuildingType>,
    ships: Vec<ShipType>,
    races: Vec<Race>,
    spells: Vec<Spell>,
}

impl RuleSet {
    /// An empty base-36 ruleset.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn builder() -> RuleSetBuilder {
        RuleSetBuilder::default()
    }
}

impl Rules for RuleSet {
    fn id_format(&self) -> IdFormat {
        self.id_format
    }

    fn item_types(&self) -> &[ItemType] {
        &self.items
    }

    fn skill_types(&self) -> &[SkillType] {
        &self.skills
    }

    fn building_types(&self) -> &[BuildingType] {
        &self.buildings
    }

    fn ship_types(&self) -> &[ShipType] {
        &self.ships
    }

    fn races(&self) -> &[Race] {
        &self.races
    }

    fn spells(&self) -> &[Spell] {
        &self.spells
    }
}

/// Builder for [`RuleSet`]. Names are given as `(german, english)`.
#[derive(Debug, Default)]
pub struct RuleSetBuilder {
    rules: RuleSet,
}

impl RuleSetBuilder {
    /// Use a non-default id format (base 36 otherwise).
    pub fn id_format(mut self, format: IdFormat) -> Self {
        self.rules.id_format = format;
        self
    }

    pub fn item(mut self, id: &str, de: &str, en: &str, category: ItemCategory) -> Self {
        self.rules.items.push(ItemType {
            id: id.into(),
            names: LocalizedNames::new(de, en),
            weight: 0.0,
            category,
            icon: id.into(),
        });
        self
    }

    pub fn weighted_item(mut self, id: &str, de: &str, en: &str, category: ItemCategory, weight: f32) -> Self {
        self = self.item(id, de, en, category);
        if let Some(item) = self.rules.items.last_mut() {
            item.weight = weight;
        }
        self
    }

    pub fn skill(mut self, id: &str, de: &str, en: &str) -> Self {
        self.rules.skills.push(SkillType {
            id: id.into(),
            names: LocalizedNames::new(de, en),
        });
        self
    }

    pub fn building(mut self, id: &str, de: &str, en: &str) -> Self {
        self.rules.buildings.push(BuildingType {
            id: id.into(),
            names: LocalizedNames::new(de, en),
            castle: false,
        });
        self
    }

    pub fn castle(mut self, id: &str, de: &str, en: &str) -> Self {
        self.rules.buildings.push(BuildingType {
            id: id.into(),
            names: LocalizedNames::new(de, en),
            castle: true,
        });
        self
    }

    pub fn ship(mut self, id: &str, de: &str, en: &str) -> Self {
        self.rules.ships.push(ShipType {
            id: id.into(),
            names: LocalizedNames::new(de, en),
        });
        self
    }

    pub fn race(mut self, id: &str, de: &str, en: &str) -> Self {
        self.rules.races.push(Race {
            id: id.into(),
            names: LocalizedNames::new(de, en),
            playable: true,
        });
        self
    }

    pub fn monster_race(mut self, id: &str, de: &str, en: &str) -> Self {
        self.rules.races.push(Race {
            id: id.into(),
            names: LocalizedNames::new(de, en),
            playable: false,
        });
        self
    }

    pub fn spell(mut self, id: &str, de: &str, en: &str, level: u32) -> Self {
        self.rules.spells.push(Spell {
            id: id.into(),
            names: LocalizedNames::new(de, en),
            level,
            combat: false,
        });
        self
    }

    pub fn combat_spell(mut self, id: &str, de: &str, en: &str, level: u32) -> Self {
        self.rules.spells.push(Spell {
            id: id.into(),
            names: LocalizedNames::new(de, en),
            level,
            combat: true,
        });
        self
    }

    pub fn build(self) -> RuleSet {
        self.rules
    }
}

/// A compact Eressea-like ruleset with German and English names, shared by
/// unit and integration tests.
pub mod fixtures {
    use super::*;

    pub fn eressea() -> RuleSet {
        RuleSet::builder()
            .weighted_item("silver", "Silber", "Silver", ItemCategory::Silver, 0.01)
            .weighted_item("sword", "Schwert", "Sword", ItemCategory::Weapon, 1.0)
            .weighted_item("iron", "Eisen", "Iron", ItemCategory::Resource, 5.0)
            .weighted_item("wood", "Holz", "Wood", ItemCategory::Resource, 5.0)
            .weighted_item("stone", "Stein", "Stone", ItemCategory::Resource, 60.0)
            .weighted_item("horse", "Pferd", "Horse", ItemCategory::Animal, 50.0)
            .item("balm", "Balsam", "Balm", ItemCategory::Luxury)
            .item("spice", "Gewürz", "Spice", ItemCategory::Luxury)
            .item("silk", "Seide", "Silk", ItemCategory::Luxury)
            .item("healing", "Heiltrank", "Healing Potion", ItemCategory::Potion)
            .item("elvenfloss", "Elfenlieb", "Elvendear", ItemCategory::Herb)
            .skill("sword", "Hiebwaffen", "Melee")
            .skill("bow", "Bogenschießen", "Bow")
            .skill("magic", "Magie", "Magic")
            .skill("trade", "Handeln", "Trade")
            .skill("tactics", "Taktik", "Tactics")
            .castle("castle", "Burg", "Castle")
            .building("lighthouse", "Leuchtturm", "Lighthouse")
            .building("harbour", "Hafen", "Harbour")
            .building("mine", "Bergwerk", "Mine")
            .ship("boat", "Boot", "Boat")
            .ship("longboat", "Langboot", "Longboat")
            .race("human", "Menschen", "Humans")
            .race("elf", "Elfen", "Elves")
            .race("dwarf", "Zwerge", "Dwarves")
            .monster_race("dragon", "Drachen", "Dragons")
            .spell("fireball", "Feuerball", "Fireball", 4)
            .spell("blessedharvest", "Segen der Ernte", "Blessed Harvest", 2)
            .combat_spell("shockwave", "Schockwelle", "Shockwave", 3)
            .build()
    }
}
