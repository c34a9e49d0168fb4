//! Order keywords and their locale surfaces.
//!
//! [`OrderKeyword`] names every verb and sub-keyword independent of language.
//! [`Keywords`] is the only place that translates between the symbolic form
//! and what a player types. It is built once per parser from a
//! [`KeywordSource`] and then only read.
//!
//! Matching folds case and German special characters (see
//! [`normalize`](crate::base::normalize)), so `KAEMPFE` matches `KÄMPFE`.

use rustc_hash::FxHashMap;
use smol_str::SmolStr;

use crate::base::{Locale, normalize};

macro_rules! order_keywords {
    ($( $(#[$meta:meta])* $variant:ident => $id:literal, [$($de:literal),+], [$($en:literal),+]; )*) => {
        /// Locale-independent keyword identifier
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum OrderKeyword {
            $( $(#[$meta])* $variant, )*
        }

        impl OrderKeyword {
            /// Every keyword, in declaration order
            pub const ALL: &'static [OrderKeyword] = &[$(OrderKeyword::$variant),*];

            /// Stable identifier, also the fallback surface
            pub fn id(self) -> &'static str {
                match self {
                    $( OrderKeyword::$variant => $id, )*
                }
            }

            /// Built-in surfaces, canonical form first
            fn builtin(self, locale: Locale) -> &'static [&'static str] {
                match (self, locale) {
                    $(
                        (OrderKeyword::$variant, Locale::German) => &[$($de),+],
                        (OrderKeyword::$variant, Locale::English) => &[$($en),+],
                    )*
                }
            }
        }
    };
}

order_keywords! {
    // ========================================================================
    // Verbs
    // ========================================================================
    Work => "WORK", ["ARBEITE"], ["WORK"];
    Attack => "ATTACK", ["ATTACKIERE"], ["ATTACK"];
    Banner => "BANNER", ["BANNER"], ["BANNER"];
    Claim => "CLAIM", ["BEANSPRUCHE"], ["CLAIM"];
    Promote => "PROMOTE", ["BEFÖRDERUNG"], ["PROMOTE"];
    Steal => "STEAL", ["BEKLAUE"], ["STEAL"];
    Siege => "SIEGE", ["BELAGERE"], ["SIEGE"];
    Name => "NAME", ["BENENNE"], ["NAME"];
    Use => "USE", ["BENUTZE"], ["USE"];
    Describe => "DESCRIBE", ["BESCHREIBE"], ["DESCRIBE"];
    Enter => "ENTER", ["BETRETE"], ["ENTER"];
    Guard => "GUARD", ["BEWACHE"], ["GUARD"];
    Message => "MESSAGE", ["BOTSCHAFT"], ["MESSAGE"];
    Default => "DEFAULT", ["DEFAULT"], ["DEFAULT"];
    Email => "EMAIL", ["EMAIL"], ["EMAIL"];
    End => "END", ["ENDE"], ["END"];
    Ride => "RIDE", ["FAHRE"], ["RIDE"];
    Follow => "FOLLOW", ["FOLGE"], ["FOLLOW"];
    Research => "RESEARCH", ["FORSCHE"], ["RESEARCH"];
    Give => "GIVE", ["GIB"], ["GIVE"];
    Group => "GROUP", ["GRUPPE"], ["GROUP"];
    Help => "HELP", ["HELFE"], ["HELP"];
    Combat => "COMBAT", ["KÄMPFE"], ["COMBAT"];
    CombatSpell => "COMBATSPELL", ["KAMPFZAUBER"], ["COMBATSPELL"];
    Buy => "BUY", ["KAUFE"], ["BUY"];
    Contact => "CONTACT", ["KONTAKTIERE"], ["CONTACT"];
    Teach => "TEACH", ["LEHRE"], ["TEACH"];
    Learn => "LEARN", ["LERNE"], ["LEARN"];
    Locale => "LOCALE", ["LOCALE"], ["LOCALE"];
    Make => "MAKE", ["MACHE"], ["MAKE"];
    Move => "MOVE", ["NACH"], ["MOVE"];
    Number => "NUMBER", ["NUMMER"], ["NUMBER"];
    Option => "OPTION", ["OPTION"], ["OPTION"];
    Password => "PASSWORD", ["PASSWORT"], ["PASSWORD"];
    Plant => "PLANT", ["PFLANZE"], ["PLANT"];
    Piracy => "PIRACY", ["PIRATERIE"], ["PIRACY"];
    Prefix => "PREFIX", ["PRÄFIX"], ["PREFIX"];
    Recruit => "RECRUIT", ["REKRUTIERE"], ["RECRUIT"];
    Reserve => "RESERVE", ["RESERVIERE"], ["RESERVE"];
    Route => "ROUTE", ["ROUTE"], ["ROUTE"];
    Sabotage => "SABOTAGE", ["SABOTIERE"], ["SABOTAGE"];
    Sort => "SORT", ["SORTIERE"], ["SORT"];
    Spy => "SPY", ["SPIONIERE"], ["SPY"];
    Language => "LANGUAGE", ["SPRACHE"], ["LANGUAGE"];
    Quit => "QUIT", ["STIRB"], ["QUIT"];
    Hide => "HIDE", ["TARNE"], ["HIDE"];
    Carry => "CARRY", ["TRANSPORTIERE"], ["CARRY"];
    Tax => "TAX", ["TREIBE"], ["TAX"];
    Entertain => "ENTERTAIN", ["UNTERHALTE"], ["ENTERTAIN"];
    Origin => "ORIGIN", ["URSPRUNG"], ["ORIGIN"];
    Forget => "FORGET", ["VERGISS"], ["FORGET"];
    Sell => "SELL", ["VERKAUFE"], ["SELL"];
    Leave => "LEAVE", ["VERLASSE"], ["LEAVE"];
    Cast => "CAST", ["ZAUBERE"], ["CAST"];
    Show => "SHOW", ["ZEIGE"], ["SHOW"];
    Destroy => "DESTROY", ["ZERSTÖRE"], ["DESTROY"];
    Grow => "GROW", ["ZÜCHTE"], ["GROW"];

    // ========================================================================
    // Sub-keywords
    // ========================================================================
    All => "ALL", ["ALLES", "ALLE"], ["ALL"];
    Each => "EACH", ["JE"], ["EACH", "JE"];
    Unit => "UNIT", ["EINHEIT"], ["UNIT"];
    Castle => "CASTLE", ["BURG"], ["CASTLE"];
    Building => "BUILDING", ["GEBÄUDE"], ["BUILDING"];
    Ship => "SHIP", ["SCHIFF"], ["SHIP"];
    Faction => "FACTION", ["PARTEI"], ["FACTION"];
    Region => "REGION", ["REGION"], ["REGION"];
    Temp => "TEMP", ["TEMP"], ["TEMP"];
    Peasants => "PEASANTS", ["BAUERN"], ["PEASANTS"];
    Herbs => "HERBS", ["KRÄUTER"], ["HERBS"];
    Control => "CONTROL", ["KOMMANDO"], ["CONTROL"];
    Level => "LEVEL", ["STUFE"], ["LEVEL"];
    Not => "NOT", ["NICHT"], ["NOT"];
    Pause => "PAUSE", ["PAUSE"], ["PAUSE"];
    Road => "ROAD", ["STRASSE"], ["ROAD"];
    Aggressive => "AGGRESSIVE", ["AGGRESSIV"], ["AGGRESSIVE"];
    Front => "FRONT", ["VORNE"], ["FRONT"];
    Rear => "REAR", ["HINTEN"], ["REAR"];
    Defensive => "DEFENSIVE", ["DEFENSIV"], ["DEFENSIVE"];
    Flee => "FLEE", ["FLIEHE"], ["FLEE"];
    Silver => "SILVER", ["SILBER"], ["SILVER"];
    FactionStealth => "FACTIONSTEALTH", ["PARTEITARNUNG"], ["FACTIONSTEALTH"];
    Foreign => "FOREIGN", ["FREMDE", "FREMDES", "FREMDEM"], ["FOREIGN"];
    Private => "PRIVATE", ["PRIVAT"], ["PRIVATE"];
    Before => "BEFORE", ["VOR"], ["BEFORE"];
    Behind => "BEHIND", ["HINTER"], ["BEHIND"];
    Potions => "POTIONS", ["TRÄNKE"], ["POTIONS"];
    Spells => "SPELLS", ["ZAUBER"], ["SPELLS"];
    Horses => "HORSES", ["PFERDE"], ["HORSES"];
    Trees => "TREES", ["BÄUME"], ["TREES"];
    Seeds => "SEEDS", ["SAMEN"], ["SEEDS"];
    MallornSeeds => "MALLORNSEEDS", ["MALLORNSAMEN"], ["MALLORNSEEDS"];

    // ========================================================================
    // Options
    // ========================================================================
    Report => "REPORT", ["AUSWERTUNG"], ["REPORT"];
    Computer => "COMPUTER", ["COMPUTER"], ["COMPUTER"];
    Template => "TEMPLATE", ["ZUGVORLAGE"], ["TEMPLATE"];
    SilverPool => "SILVERPOOL", ["SILBERPOOL"], ["SILVERPOOL"];
    Statistics => "STATISTICS", ["STATISTIK"], ["STATISTICS"];
    Zipped => "ZIPPED", ["ZIPPED"], ["ZIPPED"];
    Score => "SCORE", ["PUNKTE"], ["SCORE"];
    Addresses => "ADDRESSES", ["ADRESSEN"], ["ADDRESSES"];
    ItemPool => "ITEMPOOL", ["MATERIALPOOL"], ["ITEMPOOL"];

    // ========================================================================
    // Directions
    // ========================================================================
    Northwest => "NW", ["NW", "NORDWESTEN"], ["NW", "NORTHWEST"];
    Northeast => "NE", ["NO", "NORDOSTEN"], ["NE", "NORTHEAST"];
    East => "E", ["O", "OSTEN"], ["E", "EAST"];
    Southeast => "SE", ["SO", "SÜDOSTEN"], ["SE", "SOUTHEAST"];
    Southwest => "SW", ["SW", "SÜDWESTEN"], ["SW", "SOUTHWEST"];
    West => "W", ["W", "WESTEN"], ["W", "WEST"];
}

impl OrderKeyword {
    /// Options accepted by the OPTION verb
    pub const OPTIONS: &'static [OrderKeyword] = &[
        OrderKeyword::Report,
        OrderKeyword::Computer,
        OrderKeyword::Template,
        OrderKeyword::SilverPool,
        OrderKeyword::Statistics,
        OrderKeyword::Zipped,
        OrderKeyword::Score,
        OrderKeyword::Addresses,
        OrderKeyword::ItemPool,
    ];

    pub const DIRECTIONS: &'static [OrderKeyword] = &[
        OrderKeyword::Northwest,
        OrderKeyword::Northeast,
        OrderKeyword::East,
        OrderKeyword::Southeast,
        OrderKeyword::Southwest,
        OrderKeyword::West,
    ];
}

/// Supplies keyword surfaces per locale.
///
/// The first surface is canonical (used for rendering and completion); the
/// rest are accepted aliases. An empty list means the keyword is not
/// translated for that locale.
pub trait KeywordSource {
    fn surfaces(&self, keyword: OrderKeyword, locale: Locale) -> Vec<SmolStr>;
}

/// The keyword surfaces shipped with the crate
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinKeywords;

impl KeywordSource for BuiltinKeywords {
    fn surfaces(&self, keyword: OrderKeyword, locale: Locale) -> Vec<SmolStr> {
        keyword.builtin(locale).iter().map(|s| SmolStr::new(s)).collect()
    }
}

/// Precomputed keyword translation table
#[derive(Debug, Clone, Default)]
pub struct Keywords {
    surfaces: FxHashMap<(Locale, OrderKeyword), SmolStr>,
    folded: FxHashMap<(Locale, OrderKeyword), Vec<String>>,
}

impl Keywords {
    /// Table for the built-in German and English surfaces.
    pub fn builtin() -> Self {
        Self::from_source(&BuiltinKeywords)
    }

    pub fn from_source(source: &dyn KeywordSource) -> Self {
        let mut keywords = Self::default();
        for &locale in &Locale::ALL {
            for &keyword in OrderKeyword::ALL {
                let surfaces = source.surfaces(keyword, locale);
                let Some(canonical) = surfaces.first() else {
                    continue;
                };
                keywords.surfaces.insert((locale, keyword), canonical.clone());
                keywords
                    .folded
                    .insert((locale, keyword), surfaces.iter().map(|s| normalize(s)).collect());
            }
        }
        keywords
    }

    /// Canonical surface of `keyword`, if translated for `locale`.
    pub fn surface(&self, keyword: OrderKeyword, locale: Locale) -> Option<&str> {
        self.surfaces.get(&(locale, keyword)).map(SmolStr::as_str)
    }

    /// Canonical surface, falling back to the keyword id.
    pub fn translate(&self, keyword: OrderKeyword, locale: Locale) -> &str {
        self.surface(keyword, locale).unwrap_or(keyword.id())
    }

    /// All accepted surfaces in folded form (canonical first).
    pub fn folded_surfaces(&self, keyword: OrderKeyword, locale: Locale) -> &[String] {
        self.folded
            .get(&(locale, keyword))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// `true` if `text` is a surface (or alias) of `keyword` in `locale`.
    pub fn matches(&self, text: &str, keyword: OrderKeyword, locale: Locale) -> bool {
        let key = normalize(text);
        !key.is_empty() && self.folded_surfaces(keyword, locale).iter().any(|s| *s == key)
    }

    /// First of `candidates` that `text` matches.
    pub fn find(&self, text: &str, locale: Locale, candidates: &[OrderKeyword]) -> Option<OrderKeyword> {
        let key = normalize(text);
        if key.is_empty() {
            return None;
        }
        candidates
            .iter()
            .copied()
            .find(|&kw| self.folded_surfaces(kw, locale).iter().any(|s| *s == key))
    }

    /// `true` if any surface of `keyword` starts with `partial` (folded).
    pub fn is_prefix_of(&self, partial: &str, keyword: OrderKeyword, locale: Locale) -> bool {
        let key = normalize(partial);
        self.folded_surfaces(keyword, locale).iter().any(|s| s.starts_with(&key))
    }
}
