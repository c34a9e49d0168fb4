//! Canonical surface text for typed orders.
//!
//! Rendering uses the parser's order locale, so an order parsed in one
//! language renders in another by rendering with a parser for that language.
//! The rendered text parses back to an equal [`Order`].

use smol_str::SmolStr;
use thiserror::Error;

use crate::base::{IdFormat, Locale};
use crate::parser::OrderParser;
use crate::parser::keywords::{Keywords, OrderKeyword};
use crate::parser::strings;
use crate::rules::{Named, Rules};

use super::{
    Amount, CastArgument, CombatStatus, ContactTarget, EntityKind, FollowTarget, GiveTarget,
    GiveWhat, HideOrder, MakeTarget, MessageTarget, MovementStep, NameTarget, Order, OrderKind,
    ShowSubject, UnitRef,
};

/// Why an order cannot be rendered
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("invalid orders have no canonical form")]
    Invalid,
    #[error("no {kind} with id \"{id}\" in the ruleset")]
    UnknownRuleObject { kind: &'static str, id: SmolStr },
    #[error("{kind} \"{id}\" has no name in {locale}")]
    MissingName {
        kind: &'static str,
        id: SmolStr,
        locale: Locale,
    },
}

impl Order {
    /// Render the order in the order locale of `parser`.
    pub fn render(&self, parser: &OrderParser) -> Result<String, RenderError> {
        let quote = parser.config().quotes.first().copied().unwrap_or('"');
        let writer = Writer {
            keywords: parser.keywords(),
            rules: parser.rules(),
            locale: parser.locale(),
            id_format: parser.id_format(),
            quote,
            words: Vec::new(),
        };
        writer.order(self)
    }
}

struct Writer<'a> {
    keywords: &'a Keywords,
    rules: &'a dyn Rules,
    locale: Locale,
    id_format: IdFormat,
    quote: char,
    words: Vec<String>,
}

impl<'a> Writer<'a> {
    fn nested(&self) -> Writer<'a> {
        Writer {
            keywords: self.keywords,
            rules: self.rules,
            locale: self.locale,
            id_format: self.id_format,
            quote: strings::nested_quote(self.quote),
            words: Vec::new(),
        }
    }

    fn order(mut self, order: &Order) -> Result<String, RenderError> {
        if !order.valid {
            return Err(RenderError::Invalid);
        }
        match &order.kind {
            OrderKind::Empty => return Ok(String::new()),
            OrderKind::Comment { text, persistent: true } => return Ok(format!("//{text}")),
            OrderKind::Comment { text, persistent: false } => {
                let marker = if order.persistent { "@;" } else { ";" };
                return Ok(format!("{marker}{text}"));
            }
            _ => {}
        }
        let Some(verb) = order.verb else {
            return Err(RenderError::Invalid);
        };
        self.keyword(verb);
        self.arguments(verb, &order.kind)?;

        let text = self.words.join(" ");
        Ok(if order.persistent { format!("@{text}") } else { text })
    }

    fn arguments(&mut self, verb: OrderKeyword, kind: &OrderKind) -> Result<(), RenderError> {
        match kind {
            OrderKind::Empty | OrderKind::Comment { .. } => {}
            OrderKind::Simple => {
                if verb == OrderKeyword::Sabotage {
                    self.keyword(OrderKeyword::Ship);
                }
            }
            OrderKind::Guard { not } => self.not(*not),
            OrderKind::UnitArgument { target } => self.unit(*target),
            OrderKind::ContainerArgument { container } => {
                if verb != OrderKeyword::Siege {
                    self.keyword(container.kind.keyword());
                }
                self.id(container.id);
            }
            OrderKind::Give(give) => {
                match give.target {
                    GiveTarget::Peasants => self.keyword(OrderKeyword::Peasants),
                    GiveTarget::Unit(unit) => self.unit(unit),
                }
                match &give.what {
                    GiveWhat::Unit => self.keyword(OrderKeyword::Unit),
                    GiveWhat::Control => self.keyword(OrderKeyword::Control),
                    GiveWhat::Herbs => self.keyword(OrderKeyword::Herbs),
                    GiveWhat::Items { each, amount, item } => {
                        if *each {
                            self.keyword(OrderKeyword::Each);
                        }
                        self.amount(*amount);
                        if let Some(item) = item {
                            self.item(item)?;
                        }
                    }
                }
            }
            OrderKind::Reserve { each, amount, item } => {
                if *each {
                    self.keyword(OrderKeyword::Each);
                }
                self.amount(*amount);
                self.item(item)?;
            }
            OrderKind::Trade { amount, item } => {
                self.amount(*amount);
                self.item(item)?;
            }
            OrderKind::Movement(movement) => {
                for step in &movement.steps {
                    match step {
                        MovementStep::Go(direction) => self.keyword(direction.keyword()),
                        MovementStep::Pause => self.keyword(OrderKeyword::Pause),
                    }
                }
            }
            OrderKind::Teach { targets } => {
                for &target in targets {
                    self.unit(target);
                }
            }
            OrderKind::Learn { skill, max_level } => {
                self.skill(skill)?;
                self.optional_number(*max_level);
            }
            OrderKind::Forget { skill } => self.skill(skill)?,
            OrderKind::Recruit { amount, race } => {
                self.number(*amount);
                if let Some(race) = race {
                    self.race(race)?;
                }
            }
            OrderKind::Make(make) => {
                self.optional_number(make.amount);
                self.make_target(&make.target)?;
            }
            OrderKind::MakeTemp { id, name } => {
                self.keyword(OrderKeyword::Temp);
                self.id(*id);
                if let Some(name) = name {
                    self.quoted(name);
                }
            }
            OrderKind::Cast(cast) => {
                if let Some((x, y)) = cast.region {
                    self.keyword(OrderKeyword::Region);
                    self.word(x.to_string());
                    self.word(y.to_string());
                }
                self.level(cast.level);
                self.spell(&cast.spell)?;
                for arg in &cast.args {
                    match arg {
                        CastArgument::Word(word) => self.word(word.to_string()),
                        CastArgument::Quoted(text) => self.quoted(text),
                    }
                }
            }
            OrderKind::CombatSpell { level, spell, not } => {
                self.level(*level);
                self.spell(spell)?;
                self.not(*not);
            }
            OrderKind::Combat(status) => match status {
                CombatStatus::Aggressive => self.keyword(OrderKeyword::Aggressive),
                CombatStatus::Front => self.keyword(OrderKeyword::Front),
                CombatStatus::Rear => self.keyword(OrderKeyword::Rear),
                CombatStatus::Defensive => self.keyword(OrderKeyword::Defensive),
                CombatStatus::NotFighting => self.keyword(OrderKeyword::Not),
                CombatStatus::Flee => self.keyword(OrderKeyword::Flee),
                CombatStatus::Helping => self.keyword(OrderKeyword::Help),
                CombatStatus::NotHelping => {
                    self.keyword(OrderKeyword::Help);
                    self.keyword(OrderKeyword::Not);
                }
            },
            OrderKind::Help { faction, category, not } => {
                self.id(*faction);
                self.keyword(category.keyword());
                self.not(*not);
            }
            OrderKind::Named { target, text } => {
                match target {
                    NameTarget::Own(kind) => self.keyword(kind.keyword()),
                    NameTarget::Private => self.keyword(OrderKeyword::Private),
                    NameTarget::Foreign(kind, id) => {
                        self.keyword(OrderKeyword::Foreign);
                        self.keyword(kind.keyword());
                        self.id(*id);
                    }
                }
                self.quoted(text);
            }
            OrderKind::Text { text } => {
                if let Some(text) = text {
                    self.quoted(text);
                }
            }
            OrderKind::Message { target, text } => {
                match target {
                    MessageTarget::Unit(unit) => {
                        self.keyword(OrderKeyword::Unit);
                        self.unit(*unit);
                    }
                    MessageTarget::Faction(id) => self.entity(EntityKind::Faction, *id),
                    MessageTarget::Region => self.keyword(OrderKeyword::Region),
                    MessageTarget::Building(id) => self.entity(EntityKind::Building, *id),
                    MessageTarget::Ship(id) => self.entity(EntityKind::Ship, *id),
                }
                self.quoted(text);
            }
            OrderKind::Default { inner } => {
                let text = self.nested().order(inner)?;
                self.quoted(&text);
            }
            OrderKind::Number { kind, id } => {
                self.keyword(kind.keyword());
                if let Some(id) = id {
                    self.id(*id);
                }
            }
            OrderKind::Option { option, not } => {
                self.keyword(*option);
                self.not(*not);
            }
            OrderKind::Sort { before, target } => {
                self.keyword(if *before { OrderKeyword::Before } else { OrderKeyword::Behind });
                self.unit(*target);
            }
            OrderKind::Show(subject) => match subject {
                ShowSubject::All(what) => {
                    self.keyword(OrderKeyword::All);
                    self.keyword(*what);
                }
                ShowSubject::Name(id) => match self.rules.spell(id) {
                    Some(spell) => self.named(spell, "spell")?,
                    None => self.item(id)?,
                },
            },
            OrderKind::Hide(hide) => match hide {
                HideOrder::Level(level) => self.optional_number(*level),
                HideOrder::Race(race) => self.race(race)?,
                HideOrder::Faction { not } => {
                    self.keyword(OrderKeyword::Faction);
                    self.not(*not);
                }
                HideOrder::FactionNumber(id) => {
                    self.keyword(OrderKeyword::Faction);
                    self.keyword(OrderKeyword::Number);
                    self.id(*id);
                }
            },
            OrderKind::Contact(target) => match target {
                ContactTarget::Unit(unit) => {
                    self.keyword(OrderKeyword::Unit);
                    self.unit(*unit);
                }
                ContactTarget::Faction(id) => self.entity(EntityKind::Faction, *id),
            },
            OrderKind::Follow(target) => match target {
                FollowTarget::Unit(unit) => {
                    self.keyword(OrderKeyword::Unit);
                    self.unit(*unit);
                }
                FollowTarget::Ship(id) => self.entity(EntityKind::Ship, *id),
            },
            OrderKind::Research { herbs } => {
                if *herbs {
                    self.keyword(OrderKeyword::Herbs);
                }
            }
            OrderKind::Claim { amount, item } | OrderKind::Use { amount, item } => {
                self.optional_number(*amount);
                self.item(item)?;
            }
            OrderKind::Plant { amount, what } => {
                self.optional_number(*amount);
                self.keyword(*what);
            }
            OrderKind::Grow { what } => self.keyword(*what),
            OrderKind::Destroy { amount, road } => {
                self.optional_number(*amount);
                if let Some(direction) = road {
                    self.keyword(OrderKeyword::Road);
                    self.keyword(direction.keyword());
                }
            }
            OrderKind::Produce { amount } => self.optional_number(*amount),
            OrderKind::Piracy { factions } => {
                for &faction in factions {
                    self.id(faction);
                }
            }
            OrderKind::Origin { x, y } => {
                self.word(x.to_string());
                self.word(y.to_string());
            }
        }
        Ok(())
    }

    fn make_target(&mut self, target: &MakeTarget) -> Result<(), RenderError> {
        match target {
            MakeTarget::Item(item) => self.item(item)?,
            MakeTarget::Road(direction) => {
                self.keyword(OrderKeyword::Road);
                self.keyword(direction.keyword());
            }
            MakeTarget::Building { building_type, id } => {
                match building_type {
                    Some(ty) => {
                        let building = self.rules.building_type(ty).ok_or_else(|| unknown("building type", ty))?;
                        if building.castle {
                            self.keyword(OrderKeyword::Castle);
                        } else {
                            self.named(building, "building type")?;
                        }
                    }
                    None => self.keyword(OrderKeyword::Building),
                }
                if let Some(id) = id {
                    self.id(*id);
                }
            }
            MakeTarget::Ship { ship_type, id } => {
                match ship_type {
                    Some(ty) => {
                        let ship = self.rules.ship_type(ty).ok_or_else(|| unknown("ship type", ty))?;
                        self.named(ship, "ship type")?;
                    }
                    None => self.keyword(OrderKeyword::Ship),
                }
                if let Some(id) = id {
                    self.id(*id);
                }
            }
        }
        Ok(())
    }

    // ========================================================================
    // Words
    // ========================================================================

    fn word(&mut self, word: String) {
        self.words.push(word);
    }

    fn keyword(&mut self, keyword: OrderKeyword) {
        let surface = self.keywords.translate(keyword, self.locale).to_string();
        self.word(surface);
    }

    fn not(&mut self, not: bool) {
        if not {
            self.keyword(OrderKeyword::Not);
        }
    }

    fn number(&mut self, n: u32) {
        self.word(n.to_string());
    }

    fn optional_number(&mut self, n: Option<u32>) {
        if let Some(n) = n {
            self.number(n);
        }
    }

    fn level(&mut self, level: Option<u32>) {
        if let Some(level) = level {
            self.keyword(OrderKeyword::Level);
            self.number(level);
        }
    }

    fn amount(&mut self, amount: Amount) {
        match amount {
            Amount::All => self.keyword(OrderKeyword::All),
            Amount::Count(n) => self.number(n),
        }
    }

    fn id(&mut self, id: u32) {
        let text = self.id_format.format(id);
        self.word(text);
    }

    fn entity(&mut self, kind: EntityKind, id: u32) {
        self.keyword(kind.keyword());
        self.id(id);
    }

    fn unit(&mut self, unit: UnitRef) {
        if unit.is_temp() {
            self.keyword(OrderKeyword::Temp);
        }
        self.id(unit.id());
    }

    /// Always quoted
    fn quoted(&mut self, text: &str) {
        let mut out = String::with_capacity(text.len() + 2);
        out.push(self.quote);
        for c in text.chars() {
            if c == self.quote || c == '\\' {
                out.push('\\');
            }
            out.push(c);
        }
        out.push(self.quote);
        self.word(out);
    }

    /// Quoted only if it would not be read as one word
    fn name(&mut self, name: &str) {
        let bare = !name.is_empty() && !name.chars().any(|c| c.is_whitespace() || c == '"' || c == '\'' || c == ';');
        if bare {
            self.word(name.to_string());
        } else {
            self.quoted(name);
        }
    }

    fn named<T: Named>(&mut self, object: &T, kind: &'static str) -> Result<(), RenderError> {
        let name = object.name(self.locale).ok_or_else(|| RenderError::MissingName {
            kind,
            id: SmolStr::new(object.id()),
            locale: self.locale,
        })?;
        self.name(name);
        Ok(())
    }

    fn item(&mut self, id: &str) -> Result<(), RenderError> {
        let item = self.rules.item_type(id).ok_or_else(|| unknown("item", id))?;
        self.named(item, "item")
    }

    fn skill(&mut self, id: &str) -> Result<(), RenderError> {
        let skill = self.rules.skill_type(id).ok_or_else(|| unknown("skill", id))?;
        self.named(skill, "skill")
    }

    fn race(&mut self, id: &str) -> Result<(), RenderError> {
        let race = self.rules.race(id).ok_or_else(|| unknown("race", id))?;
        self.named(race, "race")
    }

    fn spell(&mut self, id: &str) -> Result<(), RenderError> {
        let spell = self.rules.spell(id).ok_or_else(|| unknown("spell", id))?;
        self.named(spell, "spell")
    }
}

fn unknown(kind: &'static str, id: &str) -> RenderError {
    RenderError::UnknownRuleObject {
        kind,
        id: SmolStr::new(id),
    }
}
