//! Typed orders.
//!
//! The grammar builds one [`Order`] per line. Rule objects (items, skills,
//! buildings, ...) are stored by their locale-independent id and keywords by
//! [`OrderKeyword`], so the German and English forms of the same order compare
//! equal. [`Order::render`] turns an order back into surface text.

mod render;

use smol_str::SmolStr;

use crate::parser::keywords::OrderKeyword;
use crate::parser::lexer::Token;

pub use render::RenderError;

/// A parsed order line
#[derive(Debug, Clone, Default)]
pub struct Order {
    /// Verb keyword; `None` for empty lines, comments and unknown verbs
    pub verb: Option<OrderKeyword>,
    pub kind: OrderKind,
    /// Consumes the unit's whole turn
    pub long: bool,
    /// Marked with a leading `@`
    pub persistent: bool,
    pub valid: bool,
    /// The line as typed
    pub text: String,
    /// Tokens with their final classification
    pub tokens: Vec<Token>,
}

/// Orders compare by meaning; the typed text and tokens are ignored.
impl PartialEq for Order {
    fn eq(&self, other: &Self) -> bool {
        self.verb == other.verb
            && self.kind == other.kind
            && self.long == other.long
            && self.persistent == other.persistent
            && self.valid == other.valid
    }
}

impl Eq for Order {}

impl Order {
    pub fn is_empty(&self) -> bool {
        matches!(self.kind, OrderKind::Empty)
    }

    pub fn is_comment(&self) -> bool {
        matches!(self.kind, OrderKind::Comment { .. })
    }
}

/// A unit addressed by id or by the TEMP number given in `MAKE TEMP`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitRef {
    Id(u32),
    Temp(u32),
}

impl UnitRef {
    pub fn id(self) -> u32 {
        match self {
            UnitRef::Id(id) | UnitRef::Temp(id) => id,
        }
    }

    pub fn is_temp(self) -> bool {
        matches!(self, UnitRef::Temp(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Amount {
    Count(u32),
    All,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Northwest,
    Northeast,
    East,
    Southeast,
    Southwest,
    West,
}

impl Direction {
    pub const ALL: [Direction; 6] = [
        Direction::Northwest,
        Direction::Northeast,
        Direction::East,
        Direction::Southeast,
        Direction::Southwest,
        Direction::West,
    ];

    pub fn keyword(self) -> OrderKeyword {
        match self {
            Direction::Northwest => OrderKeyword::Northwest,
            Direction::Northeast => OrderKeyword::Northeast,
            Direction::East => OrderKeyword::East,
            Direction::Southeast => OrderKeyword::Southeast,
            Direction::Southwest => OrderKeyword::Southwest,
            Direction::West => OrderKeyword::West,
        }
    }

    pub fn from_keyword(keyword: OrderKeyword) -> Option<Self> {
        Direction::ALL.into_iter().find(|d| d.keyword() == keyword)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovementStep {
    Go(Direction),
    Pause,
}

/// Kinds of game entities an order can address
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Unit,
    Faction,
    Region,
    Building,
    Castle,
    Ship,
}

impl EntityKind {
    pub fn keyword(self) -> OrderKeyword {
        match self {
            EntityKind::Unit => OrderKeyword::Unit,
            EntityKind::Faction => OrderKeyword::Faction,
            EntityKind::Region => OrderKeyword::Region,
            EntityKind::Building => OrderKeyword::Building,
            EntityKind::Castle => OrderKeyword::Castle,
            EntityKind::Ship => OrderKeyword::Ship,
        }
    }
}

/// A building or ship addressed by id
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContainerRef {
    pub kind: EntityKind,
    pub id: u32,
}

/// What a NAME / DESCRIBE order renames
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameTarget {
    /// The own unit, faction, region or current building / ship
    Own(EntityKind),
    /// DESCRIBE PRIVATE
    Private,
    /// NAME FOREIGN kind id
    Foreign(EntityKind, u32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageTarget {
    Unit(UnitRef),
    Faction(u32),
    Region,
    Building(u32),
    Ship(u32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GiveTarget {
    Unit(UnitRef),
    Peasants,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GiveWhat {
    /// Items; without an item, ALL gives everything
    Items {
        each: bool,
        amount: Amount,
        item: Option<SmolStr>,
    },
    /// The whole unit joins the target
    Unit,
    /// Command of the building or ship
    Control,
    Herbs,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GiveOrder {
    pub target: GiveTarget,
    pub what: GiveWhat,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovementOrder {
    pub steps: Vec<MovementStep>,
}

impl MovementOrder {
    pub fn directions(&self) -> impl Iterator<Item = Direction> + '_ {
        self.steps.iter().filter_map(|step| match step {
            MovementStep::Go(d) => Some(*d),
            MovementStep::Pause => None,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MakeTarget {
    Item(SmolStr),
    /// A building type, or BUILDING/CASTLE followed by the id of a building
    /// under construction
    Building {
        building_type: Option<SmolStr>,
        id: Option<u32>,
    },
    Ship {
        ship_type: Option<SmolStr>,
        id: Option<u32>,
    },
    Road(Direction),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MakeOrder {
    pub amount: Option<u32>,
    pub target: MakeTarget,
}

/// An argument after the spell name
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CastArgument {
    Word(SmolStr),
    Quoted(SmolStr),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CastOrder {
    /// Target region for far spells
    pub region: Option<(i32, i32)>,
    pub level: Option<u32>,
    pub spell: SmolStr,
    pub args: Vec<CastArgument>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombatStatus {
    Aggressive,
    Front,
    Rear,
    Defensive,
    NotFighting,
    Flee,
    Helping,
    NotHelping,
}

/// Alliance status granted by HELP
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HelpCategory {
    All,
    Give,
    Combat,
    Guard,
    Silver,
    FactionStealth,
}

impl HelpCategory {
    pub const ALL: [HelpCategory; 6] = [
        HelpCategory::All,
        HelpCategory::Give,
        HelpCategory::Combat,
        HelpCategory::Guard,
        HelpCategory::Silver,
        HelpCategory::FactionStealth,
    ];

    pub fn keyword(self) -> OrderKeyword {
        match self {
            HelpCategory::All => OrderKeyword::All,
            HelpCategory::Give => OrderKeyword::Give,
            HelpCategory::Combat => OrderKeyword::Combat,
            HelpCategory::Guard => OrderKeyword::Guard,
            HelpCategory::Silver => OrderKeyword::Silver,
            HelpCategory::FactionStealth => OrderKeyword::FactionStealth,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactTarget {
    Unit(UnitRef),
    Faction(u32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FollowTarget {
    Unit(UnitRef),
    Ship(u32),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HideOrder {
    /// Stealth level; `None` hides as well as possible
    Level(Option<u32>),
    Race(SmolStr),
    Faction { not: bool },
    FactionNumber(u32),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShowSubject {
    /// SHOW ALL POTIONS / SHOW ALL SPELLS
    All(OrderKeyword),
    Name(SmolStr),
}

/// Verb-specific content of an order
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum OrderKind {
    /// Blank line
    #[default]
    Empty,
    /// `;` comment, or `//` comment which is kept for the next turn
    Comment { text: String, persistent: bool },
    /// Verb without arguments (WORK, END, LEAVE, PROMOTE, SABOTAGE SHIP)
    Simple,
    Guard { not: bool },
    /// Verbs taking a single unit (ATTACK, STEAL, RIDE, SPY, CARRY)
    UnitArgument { target: UnitRef },
    /// Verbs taking a building or ship (ENTER, SIEGE)
    ContainerArgument { container: ContainerRef },
    Give(GiveOrder),
    Reserve { each: bool, amount: Amount, item: SmolStr },
    /// BUY / SELL
    Trade { amount: Amount, item: SmolStr },
    Movement(MovementOrder),
    Teach { targets: Vec<UnitRef> },
    Learn { skill: SmolStr, max_level: Option<u32> },
    Forget { skill: SmolStr },
    Recruit { amount: u32, race: Option<SmolStr> },
    Make(MakeOrder),
    MakeTemp { id: u32, name: Option<SmolStr> },
    Cast(CastOrder),
    CombatSpell { level: Option<u32>, spell: SmolStr, not: bool },
    Combat(CombatStatus),
    Help { faction: u32, category: HelpCategory, not: bool },
    Named { target: NameTarget, text: SmolStr },
    /// Verbs with a single optional text argument
    Text { text: Option<SmolStr> },
    Message { target: MessageTarget, text: SmolStr },
    Default { inner: Box<Order> },
    Number { kind: EntityKind, id: Option<u32> },
    Option { option: OrderKeyword, not: bool },
    Sort { before: bool, target: UnitRef },
    Show(ShowSubject),
    Hide(HideOrder),
    Contact(ContactTarget),
    Follow(FollowTarget),
    Research { herbs: bool },
    Claim { amount: Option<u32>, item: SmolStr },
    Use { amount: Option<u32>, item: SmolStr },
    Plant { amount: Option<u32>, what: OrderKeyword },
    Grow { what: OrderKeyword },
    Destroy { amount: Option<u32>, road: Option<Direction> },
    /// TAX / ENTERTAIN with an optional maximum
    Produce { amount: Option<u32> },
    Piracy { factions: Vec<u32> },
    Origin { x: i32, y: i32 },
}
