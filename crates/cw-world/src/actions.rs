//! Action resolution: how each [`Action`] changes the world.
//!
//! Every action charges its cost whenever it is attempted.  Blocked moves
//! and births are outcomes, not errors; errors are reserved for caller
//! mistakes such as acting with a detached critter.

use tracing::debug;

use cw_core::{CardinalDirection, CritterId, Position, RelativeDirection, SimRng};
use cw_mind::Action;

use crate::{World, WorldResult};

/// Result of a [`World::move_forward`] attempt.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Stepped onto an empty tile.
    Moved,
    /// Stepped onto the tile of the given critter and ate it.
    Ate(CritterId),
    /// Stayed put: the tile ahead holds a critter the mover cannot eat.
    Blocked(CritterId),
    /// Stayed put: the tile ahead is outside the world.
    AtEdge,
}

impl MoveOutcome {
    #[inline]
    pub fn moved(self) -> bool {
        matches!(self, MoveOutcome::Moved | MoveOutcome::Ate(_))
    }
}

/// What [`World::apply`] did with one action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ActionOutcome {
    Move(MoveOutcome),
    /// New facing after a turn.
    Turned(CardinalDirection),
    /// Offspring created, possibly none.
    Reproduced(Vec<CritterId>),
    /// Counter value after the adjustment.
    Counted(i64),
    Idle,
}

impl World {
    /// Resolve one action for critter `id`.
    pub fn apply(
        &mut self,
        id:     CritterId,
        action: Action,
        rng:    &mut SimRng,
    ) -> WorldResult<ActionOutcome> {
        let outcome = match action {
            Action::MoveForward       => ActionOutcome::Move(self.move_forward(id)?),
            Action::TurnLeft          => ActionOutcome::Turned(self.turn_left(id)?),
            Action::TurnRight         => ActionOutcome::Turned(self.turn_right(id)?),
            Action::Reproduce         => ActionOutcome::Reproduced(self.reproduce(id, rng)?),
            Action::IncrementCounter  => ActionOutcome::Counted(self.increment_counter(id)?),
            Action::DecrementCounter  => ActionOutcome::Counted(self.decrement_counter(id)?),
            Action::StareOffIntoSpace => {
                self.critter_mut(id)?.consume(action.cost());
                ActionOutcome::Idle
            }
        };
        Ok(outcome)
    }

    // ── Movement ──────────────────────────────────────────────────────────

    /// Step one tile forward if the tile is free or edible.
    ///
    /// Costs [`Action::MoveForward`]'s mana whether or not the step happens.
    pub fn move_forward(&mut self, id: CritterId) -> WorldResult<MoveOutcome> {
        let dest = self.tile_in_direction(RelativeDirection::Forward, id)?;

        let outcome = if !self.is_inside(dest) {
            MoveOutcome::AtEdge
        } else {
            match self.critter_at(dest) {
                None => {
                    self.place(id, dest)?;
                    self.critter_mut(id)?.eat(None);
                    MoveOutcome::Moved
                }
                Some(occupant) => {
                    if self.can_eat(id, occupant)? {
                        self.take_tile_and_eat(id, dest)?;
                        MoveOutcome::Ate(occupant)
                    } else {
                        MoveOutcome::Blocked(occupant)
                    }
                }
            }
        };

        if !outcome.moved() {
            debug!(%id, %dest, ?outcome, "move rejected");
        }
        self.critter_mut(id)?.consume(Action::MoveForward.cost());
        Ok(outcome)
    }

    // ── Turning ───────────────────────────────────────────────────────────

    /// Rotate the critter by `relative` and charge `action`'s cost.
    pub fn turn(
        &mut self,
        id:       CritterId,
        relative: RelativeDirection,
        action:   Action,
    ) -> WorldResult<CardinalDirection> {
        let critter = self.critter_mut(id)?;
        critter.facing = critter.facing.rotate(relative);
        critter.consume(action.cost());
        Ok(critter.facing)
    }

    pub fn turn_left(&mut self, id: CritterId) -> WorldResult<CardinalDirection> {
        self.turn(id, RelativeDirection::Left, Action::TurnLeft)
    }

    pub fn turn_right(&mut self, id: CritterId) -> WorldResult<CardinalDirection> {
        self.turn(id, RelativeDirection::Right, Action::TurnRight)
    }

    // ── Reproduction ──────────────────────────────────────────────────────

    /// Try to bud one offspring on each side of the parent.
    ///
    /// Only parents holding at least [`Action::Reproduce`]'s cost try at all.
    /// Left and right are tried in an order drawn from `rng`, which matters
    /// when an offspring evicts a neighbour.  A side gets an offspring only
    /// if its tile is inside the world and empty or edible to the offspring.
    /// The parent pays the cost once per call, whatever the result.
    pub fn reproduce(
        &mut self,
        id:  CritterId,
        rng: &mut SimRng,
    ) -> WorldResult<Vec<CritterId>> {
        let cost = Action::Reproduce.cost();
        let mut born = Vec::with_capacity(2);

        if self.critter_ref(id)?.mana >= cost {
            let sides = if rng.coin_flip() {
                [RelativeDirection::Left, RelativeDirection::Right]
            } else {
                [RelativeDirection::Right, RelativeDirection::Left]
            };
            for side in sides {
                if let Some(child) = self.bud_offspring(id, side)? {
                    born.push(child);
                }
            }
        }

        debug!(%id, offspring = born.len(), "reproduced");
        self.critter_mut(id)?.consume(cost);
        Ok(born)
    }

    /// One side of [`reproduce`][Self::reproduce].  Never touches the grid
    /// when the side is unusable.
    fn bud_offspring(
        &mut self,
        parent_id: CritterId,
        side:      RelativeDirection,
    ) -> WorldResult<Option<CritterId>> {
        let tile = self.tile_in_direction(side, parent_id)?;
        if !self.is_inside(tile) {
            return Ok(None);
        }

        let parent = self.critter_ref(parent_id)?;
        let mut child = parent.spawn_offspring();
        if let Some(occupant) = self.critter_at(tile)
            && !child.can_eat(self.critter_ref(occupant)?)
        {
            return Ok(None);
        }
        child.facing = parent.facing.rotate(side);

        let child_id = self.create(child)?;
        self.take_tile_and_eat(child_id, tile)?;
        Ok(Some(child_id))
    }

    // ── Counter ───────────────────────────────────────────────────────────

    pub fn increment_counter(&mut self, id: CritterId) -> WorldResult<i64> {
        let critter = self.critter_mut(id)?;
        critter.counter += 1;
        critter.consume(Action::IncrementCounter.cost());
        Ok(critter.counter)
    }

    pub fn decrement_counter(&mut self, id: CritterId) -> WorldResult<i64> {
        let critter = self.critter_mut(id)?;
        critter.counter -= 1;
        critter.consume(Action::DecrementCounter.cost());
        Ok(critter.counter)
    }

    // ── Helpers ───────────────────────────────────────────────────────────

    /// `eater`'s diet verdict on `prey`.
    pub fn can_eat(&self, eater: CritterId, prey: CritterId) -> WorldResult<bool> {
        Ok(self.critter_ref(eater)?.can_eat(self.critter_ref(prey)?))
    }

    /// Place `id` on `pos`, then feed it whatever was evicted.  The eaten
    /// critter is despawned.
    fn take_tile_and_eat(&mut self, id: CritterId, pos: Position) -> WorldResult<()> {
        let evicted = self.place_evicting(id, pos)?;
        let prey = evicted.and_then(|e| self.despawn(e));
        if let Some(e) = evicted {
            debug!(eater = %id, prey = %e, %pos, "critter eaten");
        }
        self.critter_mut(id)?.eat(prey.as_ref());
        Ok(())
    }
}
