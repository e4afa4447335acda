//! A single critter and its capabilities.

use std::fmt;
use std::sync::Arc;

use cw_core::{CardinalDirection, Position, SimRng, SpeciesId};
use cw_mind::{Action, DEFAULT_STARTING_MANA, Mind, Stimulus};

// ── Diet ──────────────────────────────────────────────────────────────────────

/// What a critter may eat, i.e. whose tile it may take over.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Diet {
    /// Never eats another critter.
    #[default]
    Grazer,
    /// Eats any critter of a different species.
    Predator,
}

// ── Critter ───────────────────────────────────────────────────────────────────

/// A grid-resident agent.
///
/// The public fields are plain state that the world mutates while resolving
/// actions.  `location` is private: it is only meaningful while the critter
/// lives in a world, and the world is the one that keeps it in sync with the
/// grid.
#[derive(Clone)]
pub struct Critter {
    /// Current heading.  `North` on creation.
    pub facing: CardinalDirection,

    /// Remaining mana.  The tick loop despawns the critter once this drops
    /// to zero or below.
    pub mana: i32,

    /// General-purpose counter driven by the counter actions.  Unbounded.
    pub counter: i64,

    /// Critters eaten so far.
    pub meals: u32,

    pub species: SpeciesId,
    pub diet:    Diet,

    location: Option<Position>,
    mind:     Option<Arc<dyn Mind>>,
}

impl Default for Critter {
    fn default() -> Self {
        Self {
            facing:   CardinalDirection::North,
            mana:     DEFAULT_STARTING_MANA,
            counter:  0,
            meals:    0,
            species:  SpeciesId::default(),
            diet:     Diet::default(),
            location: None,
            mind:     None,
        }
    }
}

impl Critter {
    /// A detached critter with default state driven by `mind`.
    pub fn new(mind: Arc<dyn Mind>) -> Self {
        Self { mind: Some(mind), ..Self::default() }
    }

    // ── Placement ─────────────────────────────────────────────────────────

    /// Tile this critter occupies, or `None` while detached.
    #[inline]
    pub fn location(&self) -> Option<Position> {
        self.location
    }

    #[inline]
    pub fn is_placed(&self) -> bool {
        self.location.is_some()
    }

    /// Overwrite the stored location.
    ///
    /// Worlds call this while keeping their grid in step; calling it on a
    /// critter that lives in a world is not possible from outside, since
    /// worlds only lend out shared references.
    #[inline]
    pub fn set_location(&mut self, location: Option<Position>) {
        self.location = location;
    }

    // ── Mind ──────────────────────────────────────────────────────────────

    pub fn mind(&self) -> Option<&Arc<dyn Mind>> {
        self.mind.as_ref()
    }

    pub fn set_mind(&mut self, mind: Option<Arc<dyn Mind>>) {
        self.mind = mind;
    }

    /// `true` if both critters are driven by the very same mind instance.
    pub fn shares_mind_with(&self, other: &Critter) -> bool {
        match (&self.mind, &other.mind) {
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            _                  => false,
        }
    }

    /// Ask the mind what to do, normalized to an ordered list.
    ///
    /// A critter without a mind never acts.
    pub fn request_actions(&self, stimulus: &Stimulus, rng: &mut SimRng) -> Vec<Action> {
        match &self.mind {
            Some(mind) => mind.decide(stimulus, rng).into_actions(),
            None       => vec![],
        }
    }

    // ── Mana ──────────────────────────────────────────────────────────────

    /// Spend `cost` mana.  No floor: exhaustion is the tick loop's call.
    #[inline]
    pub fn consume(&mut self, cost: i32) {
        self.mana -= cost;
    }

    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.mana <= 0
    }

    // ── Eating ────────────────────────────────────────────────────────────

    /// Whether this critter may take over a tile held by `other`.
    pub fn can_eat(&self, other: &Critter) -> bool {
        match self.diet {
            Diet::Grazer   => false,
            Diet::Predator => other.species != self.species,
        }
    }

    /// Hook run after this critter took over a tile.  `prey` is whatever
    /// held the tile before, if anything.
    pub fn eat(&mut self, prey: Option<&Critter>) {
        if prey.is_some() {
            self.meals += 1;
        }
    }

    // ── Reproduction ──────────────────────────────────────────────────────

    /// A detached child: same mind instance, species and diet; fresh mana,
    /// counter and facing.
    pub fn spawn_offspring(&self) -> Critter {
        Critter {
            species: self.species,
            diet:    self.diet,
            mind:    self.mind.clone(),
            ..Critter::default()
        }
    }
}

impl fmt::Debug for Critter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Critter")
            .field("facing", &self.facing)
            .field("mana", &self.mana)
            .field("counter", &self.counter)
            .field("meals", &self.meals)
            .field("species", &self.species)
            .field("diet", &self.diet)
            .field("location", &self.location)
            .field("mind", &self.mind.as_ref().map(|m| m.name()))
            .finish()
    }
}
