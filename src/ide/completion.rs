//! Completion proposals for a partially typed order.
//!
//! [`OrderCompleter`] is a [`CompletionHook`]: the grammar tells it which
//! position the cursor sits at, and it enumerates what may be typed there from
//! the ruleset and from caller-supplied [`CompletionScope`] data. Inserted text
//! uses the order locale; display details use the GUI locale.

use smol_str::SmolStr;

use crate::base::{Locale, is_prefix_normalized};
use crate::orders::{EntityKind, UnitRef};
use crate::parser::{CompletionHook, CompletionPoint, CompletionRequest, OrderKeyword, OrderParser};
use crate::rules::{ItemCategory, Named, Spell};

/// Kind of completion item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CompletionKind {
    Keyword,
    Unit,
    Faction,
    Container,
    Item,
    Skill,
    Spell,
    Race,
    Number,
    Text,
}

impl CompletionKind {
    /// Convert to LSP completion item kind number.
    pub fn to_lsp(&self) -> u32 {
        match self {
            CompletionKind::Keyword => 14,   // Keyword
            CompletionKind::Unit => 6,       // Variable
            CompletionKind::Faction => 9,    // Module
            CompletionKind::Container => 7,  // Class
            CompletionKind::Item => 13,      // Enum
            CompletionKind::Skill => 10,     // Property
            CompletionKind::Spell => 3,      // Function
            CompletionKind::Race => 22,      // Struct
            CompletionKind::Number => 12,    // Value
            CompletionKind::Text => 15,      // Snippet
        }
    }
}

/// A completion suggestion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Completion {
    /// Shown in the list
    pub display: String,
    /// Shown after the display text
    pub detail: Option<String>,
    /// Text to insert
    pub replacement: String,
    /// Bytes before the cursor that `replacement` replaces
    pub replaces: usize,
    /// Inserted after the replacement
    pub suffix: String,
    /// Sort priority (lower = higher priority)
    pub priority: u32,
    /// Characters to move the cursor back after inserting
    pub cursor_offset: usize,
    pub kind: CompletionKind,
}

impl Completion {
    pub fn new(text: impl Into<String>, kind: CompletionKind) -> Self {
        let text = text.into();
        Self {
            display: text.clone(),
            detail: None,
            replacement: text,
            replaces: 0,
            suffix: String::new(),
            priority: 100,
            cursor_offset: 0,
            kind,
        }
    }

    pub fn with_display(mut self, display: impl Into<String>) -> Self {
        self.display = display.into();
        self
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    pub fn with_priority(mut self, priority: u32) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_cursor_offset(mut self, offset: usize) -> Self {
        self.cursor_offset = offset;
        self
    }
}

/// A unit the editing unit can address
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScopeUnit {
    pub unit: UnitRef,
    pub name: SmolStr,
}

/// A faction, building or ship the editing unit can address
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScopeEntity {
    pub id: u32,
    pub name: SmolStr,
}

/// An item the editing unit carries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScopeItem {
    /// Item type id
    pub item: SmolStr,
    pub amount: u32,
}

/// Game state visible from the unit whose orders are edited.
///
/// Everything is optional; with an empty scope only ruleset data and
/// keywords are proposed.
#[derive(Debug, Clone, Default)]
pub struct CompletionScope {
    /// Units in the region, including TEMP units of the own faction
    pub units: Vec<ScopeUnit>,
    pub factions: Vec<ScopeEntity>,
    pub buildings: Vec<ScopeEntity>,
    pub ships: Vec<ScopeEntity>,
    pub items: Vec<ScopeItem>,
    /// Spell ids the unit knows; empty means every spell of the ruleset
    pub spells: Vec<SmolStr>,
}

impl CompletionScope {
    pub fn with_unit(mut self, unit: UnitRef, name: impl Into<SmolStr>) -> Self {
        self.units.push(ScopeUnit { unit, name: name.into() });
        self
    }

    pub fn with_faction(mut self, id: u32, name: impl Into<SmolStr>) -> Self {
        self.factions.push(ScopeEntity { id, name: name.into() });
        self
    }

    pub fn with_building(mut self, id: u32, name: impl Into<SmolStr>) -> Self {
        self.buildings.push(ScopeEntity { id, name: name.into() });
        self
    }

    pub fn with_ship(mut self, id: u32, name: impl Into<SmolStr>) -> Self {
        self.ships.push(ScopeEntity { id, name: name.into() });
        self
    }

    pub fn with_item(mut self, item: impl Into<SmolStr>, amount: u32) -> Self {
        self.items.push(ScopeItem { item: item.into(), amount });
        self
    }

    pub fn with_spell(mut self, spell: impl Into<SmolStr>) -> Self {
        self.spells.push(spell.into());
        self
    }
}

/// Collects completions while a line is parsed.
pub struct OrderCompleter<'s> {
    scope: &'s CompletionScope,
    gui_locale: Locale,
    completions: Vec<Completion>,
}

impl<'s> OrderCompleter<'s> {
    pub fn new(scope: &'s CompletionScope, gui_locale: Locale) -> Self {
        Self {
            scope,
            gui_locale,
            completions: Vec::new(),
        }
    }

    pub fn completions(&self) -> &[Completion] {
        &self.completions
    }

    /// Completions sorted by priority, duplicates removed.
    pub fn into_completions(self) -> Vec<Completion> {
        let mut items = self.completions;
        items.sort_by_key(|c| c.priority);
        let mut seen = Vec::<String>::new();
        items.retain(|c| {
            if seen.contains(&c.replacement) {
                false
            } else {
                seen.push(c.replacement.clone());
                true
            }
        });
        items
    }
}

/// Get completions for `line`, which ends at the cursor.
pub fn completions(parser: &OrderParser, line: &str, scope: &CompletionScope) -> Vec<Completion> {
    let mut completer = OrderCompleter::new(scope, parser.gui_locale());
    parser.parse_with_completion(line, &mut completer);
    completer.into_completions()
}

impl CompletionHook for OrderCompleter<'_> {
    fn complete(&mut self, point: &CompletionPoint, request: &CompletionRequest<'_>) {
        let mut out = Proposals {
            request,
            gui_locale: self.gui_locale,
            items: Vec::new(),
        };
        out.point(self.scope, point);
        self.completions.extend(out.items);
    }

    fn clear(&mut self) {
        self.completions.clear();
    }

    fn anchor(&mut self, typed: &str) {
        for c in &mut self.completions {
            let keep = typed.len().saturating_sub(c.replaces);
            let prefix = typed.get(..keep).unwrap_or_default();
            c.replacement = format!("{prefix}{}", c.replacement);
            c.replaces = typed.len();
        }
    }
}

/// Proposals for one completion point
struct Proposals<'r, 'a> {
    request: &'r CompletionRequest<'a>,
    gui_locale: Locale,
    items: Vec<Completion>,
}

impl Proposals<'_, '_> {
    fn point(&mut self, scope: &CompletionScope, point: &CompletionPoint) {
        let rules = self.request.rules;
        match *point {
            CompletionPoint::Verb => {
                let verbs: Vec<OrderKeyword> = self.request.commands.verbs().collect();
                for verb in verbs {
                    self.keyword(verb, 10);
                }
            }
            CompletionPoint::UnitTarget { .. } => {
                self.units(scope, 10);
                self.keyword(OrderKeyword::Temp, 60);
            }
            CompletionPoint::TempUnit { .. } => {
                let next = scope
                    .units
                    .iter()
                    .filter(|u| u.unit.is_temp())
                    .map(|u| u.unit.id())
                    .max()
                    .map_or(1, |id| id + 1);
                let text = self.request.id_format.format(next);
                self.push(text, CompletionKind::Number, 10, None);
            }
            CompletionPoint::GiveTarget => {
                self.units(scope, 10);
                self.keyword(OrderKeyword::Peasants, 20);
                self.keyword(OrderKeyword::Temp, 60);
            }
            CompletionPoint::GiveQuantity { .. } => {
                for item in &scope.items {
                    let detail = rules.item_type(&item.item).and_then(|t| t.name(self.gui_locale)).map(str::to_string);
                    self.push(item.amount.to_string(), CompletionKind::Number, 10, detail);
                }
                for keyword in [
                    OrderKeyword::All,
                    OrderKeyword::Each,
                    OrderKeyword::Unit,
                    OrderKeyword::Control,
                    OrderKeyword::Herbs,
                ] {
                    self.keyword(keyword, 30);
                }
            }
            CompletionPoint::GiveItem { .. } => {
                self.own_items(scope, 10);
                self.items(|_| true, 50);
            }
            CompletionPoint::Amount { verb } => match verb {
                OrderKeyword::Reserve => {
                    self.keyword(OrderKeyword::All, 20);
                    self.keyword(OrderKeyword::Each, 20);
                }
                OrderKeyword::Sell => self.keyword(OrderKeyword::All, 20),
                _ => {}
            },
            CompletionPoint::Coordinate { .. } => {}
            CompletionPoint::Direction { .. } => {
                for &direction in OrderKeyword::DIRECTIONS {
                    self.keyword(direction, 10);
                }
            }
            CompletionPoint::Item { verb } => match verb {
                OrderKeyword::Buy | OrderKeyword::Sell => {
                    self.items(|category| category == ItemCategory::Luxury, 10);
                }
                _ => {
                    self.own_items(scope, 10);
                    self.items(|_| true, 50);
                }
            },
            CompletionPoint::Skill { .. } => {
                for skill in rules.skill_types() {
                    self.named(skill, CompletionKind::Skill, 10);
                }
            }
            CompletionPoint::Spell { combat, options, .. } => {
                self.spells(scope, |spell| spell.combat == combat);
                for &option in options {
                    self.keyword(option, 30);
                }
            }
            CompletionPoint::Shown => {
                self.keyword(OrderKeyword::All, 30);
                self.spells(scope, |_| true);
                self.items(|category| category == ItemCategory::Potion, 20);
                self.items(|category| category != ItemCategory::Potion, 50);
            }
            CompletionPoint::ContactTarget => {
                self.units(scope, 10);
                for keyword in [OrderKeyword::Unit, OrderKeyword::Faction, OrderKeyword::Temp] {
                    self.keyword(keyword, 60);
                }
            }
            CompletionPoint::Race { verb } => {
                for race in rules.races().iter().filter(|r| r.playable) {
                    self.named(race, CompletionKind::Race, 10);
                }
                if verb == OrderKeyword::Hide {
                    self.keyword(OrderKeyword::Faction, 30);
                }
            }
            CompletionPoint::MakeTarget { amount } => {
                if amount.is_none() {
                    self.keyword(OrderKeyword::Temp, 40);
                }
                self.items(
                    |category| {
                        matches!(
                            category,
                            ItemCategory::Resource | ItemCategory::Weapon | ItemCategory::Armour | ItemCategory::Potion
                        )
                    },
                    10,
                );
                let mut castle = false;
                for building in rules.building_types() {
                    if building.castle {
                        castle = true;
                    } else {
                        self.named(building, CompletionKind::Container, 20);
                    }
                }
                if castle {
                    self.keyword(OrderKeyword::Castle, 20);
                }
                for ship in rules.ship_types() {
                    self.named(ship, CompletionKind::Container, 20);
                }
                for keyword in [OrderKeyword::Road, OrderKeyword::Building, OrderKeyword::Ship] {
                    self.keyword(keyword, 30);
                }
            }
            CompletionPoint::Container { kind, .. } => match kind {
                EntityKind::Building | EntityKind::Castle => self.entities(&scope.buildings, CompletionKind::Container),
                EntityKind::Ship => self.entities(&scope.ships, CompletionKind::Container),
                EntityKind::Faction => self.entities(&scope.factions, CompletionKind::Faction),
                EntityKind::Unit => self.units(scope, 10),
                EntityKind::Region => {}
            },
            CompletionPoint::Faction { .. } => self.entities(&scope.factions, CompletionKind::Faction),
            CompletionPoint::Keywords { options, .. } => {
                for &option in options {
                    self.keyword(option, 10);
                }
            }
            CompletionPoint::QuotedText { .. } => {
                let quote = self.request.quote;
                let item = Completion::new(format!("{quote}{quote}"), CompletionKind::Text)
                    .with_priority(10)
                    .with_cursor_offset(1);
                self.add(item);
            }
            CompletionPoint::Language => {
                for locale in Locale::ALL {
                    self.push(locale.tag().to_string(), CompletionKind::Text, 10, None);
                }
            }
        }
    }

    // ========================================================================
    // Sources
    // ========================================================================

    fn keyword(&mut self, keyword: OrderKeyword, priority: u32) {
        let request = self.request;
        if !request.keywords.is_prefix_of(request.partial, keyword, request.locale) {
            return;
        }
        let text = request.keywords.translate(keyword, request.locale);
        let mut item = Completion::new(text, CompletionKind::Keyword)
            .with_display(text)
            .with_suffix(" ")
            .with_priority(priority);
        let gui = request.keywords.translate(keyword, self.gui_locale);
        if gui != text {
            item = item.with_detail(gui);
        }
        self.add(item);
    }

    fn units(&mut self, scope: &CompletionScope, priority: u32) {
        let request = self.request;
        let temp = request.keywords.translate(OrderKeyword::Temp, request.locale);
        for unit in &scope.units {
            let id = request.id_format.format(unit.unit.id());
            let text = if unit.unit.is_temp() { format!("{temp} {id}") } else { id };
            let detail = Some(unit.name.to_string());
            self.push(text, CompletionKind::Unit, priority, detail);
        }
    }

    fn entities(&mut self, entities: &[ScopeEntity], kind: CompletionKind) {
        for entity in entities {
            let text = self.request.id_format.format(entity.id);
            self.push(text, kind, 10, Some(entity.name.to_string()));
        }
    }

    fn own_items(&mut self, scope: &CompletionScope, priority: u32) {
        let rules = self.request.rules;
        for item in &scope.items {
            if let Some(ty) = rules.item_type(&item.item) {
                self.named(ty, CompletionKind::Item, priority);
            }
        }
    }

    fn spells(&mut self, scope: &CompletionScope, filter: impl Fn(&Spell) -> bool) {
        let rules = self.request.rules;
        for spell in rules.spells().iter().filter(|s| filter(s)) {
            let known = scope.spells.is_empty() || scope.spells.contains(&spell.id);
            if known {
                self.named(spell, CompletionKind::Spell, 10);
            }
        }
    }

    fn items(&mut self, filter: impl Fn(ItemCategory) -> bool, priority: u32) {
        let rules = self.request.rules;
        for item in rules.item_types().iter().filter(|t| filter(t.category)) {
            self.named(item, CompletionKind::Item, priority);
        }
    }

    fn named<T: Named>(&mut self, object: &T, kind: CompletionKind, priority: u32) {
        let Some(name) = object.name(self.request.locale) else {
            return;
        };
        if !is_prefix_normalized(self.request.partial, name) {
            return;
        }
        let inserted = if name.chars().any(char::is_whitespace) {
            let quote = self.request.quote;
            format!("{quote}{name}{quote}")
        } else {
            name.to_string()
        };
        let mut item = Completion::new(inserted, kind)
            .with_display(name)
            .with_suffix(" ")
            .with_priority(priority);
        if let Some(gui) = object.name(self.gui_locale) {
            if gui != name {
                item = item.with_detail(gui);
            }
        }
        self.add(item);
    }

    /// Free text: ids and numbers, matched on the typed prefix
    fn push(&mut self, text: String, kind: CompletionKind, priority: u32, detail: Option<String>) {
        if !is_prefix_normalized(self.request.partial, &text) {
            return;
        }
        let mut item = Completion::new(text.clone(), kind)
            .with_display(text)
            .with_suffix(" ")
            .with_priority(priority);
        if let Some(detail) = detail {
            item = item.with_detail(detail);
        }
        self.add(item);
    }

    /// A leading space is inserted when the cursor sits directly after the verb.
    fn add(&mut self, mut item: Completion) {
        if self.request.needs_separator {
            item.replacement.insert(0, ' ');
        }
        item.replaces = self.request.partial.len();
        self.items.push(item);
    }
}
