//! Fluent builder for constructing a [`Sim`].

use cw_agent::Critter;
use cw_core::{Position, SimConfig};
use cw_world::World;

use crate::{Sim, SimError, SimResult, StimulusPackager, SurroundingsPackager};

/// Fluent builder for [`Sim<P>`].
///
/// # Inputs
///
/// | Method              | Default                        |
/// |---------------------|--------------------------------|
/// | `new(config)`       | required                       |
/// | `.packager(p)`      | [`SurroundingsPackager`]       |
/// | `.critter(c, pos)`  | no critters                    |
/// | `.population(iter)` | no critters                    |
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
///
/// use cw_agent::Critter;
/// use cw_core::{Position, SimConfig};
/// use cw_mind::{Action, FixedMind};
/// use cw_sim::{NoopObserver, SimBuilder};
///
/// let walker = Critter::new(Arc::new(FixedMind(Action::MoveForward)));
/// let mut sim = SimBuilder::new(SimConfig::default())
///     .critter(walker, Position::new(1, 1))
///     .build()
///     .unwrap();
/// sim.run(&mut NoopObserver).unwrap();
/// assert_eq!(sim.world.live_count(), 0);
/// ```
pub struct SimBuilder<P: StimulusPackager = SurroundingsPackager> {
    config:     SimConfig,
    packager:   P,
    population: Vec<(Critter, Position)>,
}

impl SimBuilder {
    pub fn new(config: SimConfig) -> Self {
        Self {
            config,
            packager:   SurroundingsPackager,
            population: Vec::new(),
        }
    }
}

impl<P: StimulusPackager> SimBuilder<P> {
    /// Replace the stimulus packager.
    pub fn packager<Q: StimulusPackager>(self, packager: Q) -> SimBuilder<Q> {
        SimBuilder {
            config:     self.config,
            packager,
            population: self.population,
        }
    }

    /// Add one critter to the initial population.
    pub fn critter(mut self, critter: Critter, at: Position) -> Self {
        self.population.push((critter, at));
        self
    }

    /// Add many critters to the initial population.
    pub fn population<I>(mut self, critters: I) -> Self
    where
        I: IntoIterator<Item = (Critter, Position)>,
    {
        self.population.extend(critters);
        self
    }

    /// Validate the config, build the world and place the population.
    ///
    /// Fails if the config is invalid, if a critter starts outside the grid,
    /// or if two critters start on the same tile.
    pub fn build(self) -> SimResult<Sim<P>> {
        self.config.validate()?;
        let mut world = World::new(self.config.width, self.config.height)?;

        for (critter, at) in self.population {
            if world.critter_at(at).is_some() {
                return Err(SimError::Config(format!("two critters start on tile {at}")));
            }
            world.spawn(critter, at)?;
        }

        Ok(Sim::new(self.config, world, self.packager))
    }
}
