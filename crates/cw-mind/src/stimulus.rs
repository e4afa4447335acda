//! The perception payload handed to every mind.

use cw_core::{CardinalDirection, RelativeDirection, SpeciesId, Tick};

/// What a critter sees on one neighbouring tile.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Percept {
    /// The tile lies outside the world.
    Edge,
    /// In bounds and unoccupied.
    #[default]
    Empty,
    /// Occupied.  `edible` is the perceiver's own `can_eat` verdict.
    Critter { species: SpeciesId, edible: bool },
}

impl Percept {
    /// `true` if a move onto this tile would succeed.
    #[inline]
    pub fn is_passable(self) -> bool {
        match self {
            Percept::Edge                  => false,
            Percept::Empty                 => true,
            Percept::Critter { edible, .. } => edible,
        }
    }
}

/// A read-only snapshot of one critter's situation, built once per critter
/// per tick by a `StimulusPackager` in cw-sim.
///
/// Minds only ever see this value; they never touch the world.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stimulus {
    /// Tick being resolved.
    pub tick: Tick,

    pub facing: CardinalDirection,
    pub mana:   i32,
    pub counter: i64,

    pub ahead:  Percept,
    pub left:   Percept,
    pub right:  Percept,
    pub behind: Percept,
}

impl Stimulus {
    /// A stimulus carrying only the critter's own state.
    pub fn blind(tick: Tick, facing: CardinalDirection, mana: i32, counter: i64) -> Self {
        Self { tick, facing, mana, counter, ..Self::default() }
    }

    /// The percept for the tile in `direction`.
    pub fn percept(&self, direction: RelativeDirection) -> Percept {
        match direction {
            RelativeDirection::Forward  => self.ahead,
            RelativeDirection::Left     => self.left,
            RelativeDirection::Right    => self.right,
            RelativeDirection::Backward => self.behind,
        }
    }

    /// Mutable slot for the tile in `direction`; used by packagers.
    pub fn percept_mut(&mut self, direction: RelativeDirection) -> &mut Percept {
        match direction {
            RelativeDirection::Forward  => &mut self.ahead,
            RelativeDirection::Left     => &mut self.left,
            RelativeDirection::Right    => &mut self.right,
            RelativeDirection::Backward => &mut self.behind,
        }
    }
}
