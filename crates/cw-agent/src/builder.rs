//! Fluent builder for detached critters.
//!
//! # Usage
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use cw_agent::{CritterBuilder, Diet};
//! use cw_core::{CardinalDirection, SpeciesId};
//! use cw_mind::{Action, FixedMind};
//!
//! let wolf = CritterBuilder::new()
//!     .mind(Arc::new(FixedMind(Action::MoveForward)))
//!     .mana(25)
//!     .facing(CardinalDirection::East)
//!     .species(SpeciesId(1))
//!     .diet(Diet::Predator)
//!     .build();
//!
//! assert_eq!(wolf.mana, 25);
//! assert!(!wolf.is_placed());
//! ```

use std::sync::Arc;

use cw_core::{CardinalDirection, SpeciesId};
use cw_mind::Mind;

use crate::{Critter, Diet};

/// Fluent builder for [`Critter`].  Unset fields keep `Critter::default()`.
#[derive(Default)]
pub struct CritterBuilder {
    critter: Critter,
}

impl CritterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mind(mut self, mind: Arc<dyn Mind>) -> Self {
        self.critter.set_mind(Some(mind));
        self
    }

    pub fn mana(mut self, mana: i32) -> Self {
        self.critter.mana = mana;
        self
    }

    pub fn facing(mut self, facing: CardinalDirection) -> Self {
        self.critter.facing = facing;
        self
    }

    pub fn counter(mut self, counter: i64) -> Self {
        self.critter.counter = counter;
        self
    }

    pub fn species(mut self, species: SpeciesId) -> Self {
        self.critter.species = species;
        self
    }

    pub fn diet(mut self, diet: Diet) -> Self {
        self.critter.diet = diet;
        self
    }

    pub fn build(self) -> Critter {
        self.critter
    }
}
