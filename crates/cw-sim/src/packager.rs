//! Perception: turning world state into a [`Stimulus`] for one critter.

use cw_core::{CritterId, RelativeDirection, Tick};
use cw_mind::{Percept, Stimulus};
use cw_world::{World, WorldError, WorldResult};

/// Builds the stimulus a critter's mind decides on.
///
/// Called once per acting critter per tick, before the mind runs.  The
/// result is passed to the mind unmodified.
pub trait StimulusPackager: Send + Sync + 'static {
    fn package(&self, world: &World, id: CritterId, tick: Tick) -> WorldResult<Stimulus>;
}

/// The default packager: own state plus a [`Percept`] for each of the four
/// neighbouring tiles.
#[derive(Copy, Clone, Debug, Default)]
pub struct SurroundingsPackager;

impl StimulusPackager for SurroundingsPackager {
    fn package(&self, world: &World, id: CritterId, tick: Tick) -> WorldResult<Stimulus> {
        let mut stimulus = BlindPackager.package(world, id, tick)?;

        for direction in RelativeDirection::ALL {
            let tile = world.tile_in_direction(direction, id)?;
            let percept = if !world.is_inside(tile) {
                Percept::Edge
            } else {
                match world.critter_at(tile) {
                    None => Percept::Empty,
                    Some(other) => Percept::Critter {
                        species: world.critter(other).map(|c| c.species).unwrap_or_default(),
                        edible:  world.can_eat(id, other)?,
                    },
                }
            };
            *stimulus.percept_mut(direction) = percept;
        }
        Ok(stimulus)
    }
}

/// Own state only; every percept is [`Percept::Empty`].
#[derive(Copy, Clone, Debug, Default)]
pub struct BlindPackager;

impl StimulusPackager for BlindPackager {
    fn package(&self, world: &World, id: CritterId, tick: Tick) -> WorldResult<Stimulus> {
        let critter = world.critter(id).ok_or(WorldError::UnknownCritter(id))?;
        Ok(Stimulus::blind(tick, critter.facing, critter.mana, critter.counter))
    }
}
