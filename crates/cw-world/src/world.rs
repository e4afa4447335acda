//! The `World`: grid, critter arena, and live registry.
//!
//! # Invariants
//!
//! After every public operation:
//!
//! 1. every critter with a location `p` is the occupant of `grid[p]`;
//! 2. every occupied tile names a critter whose location is that tile;
//! 3. the registry holds each live critter exactly once;
//! 4. no location lies outside `[0, width) × [0, height)`.
//!
//! A critter is live (in the registry) exactly when it has a location.
//! [`World::check_invariants`] verifies all of the above.

use std::collections::BTreeSet;

use tracing::debug;

use cw_agent::{Critter, CritterStore};
use cw_core::{CritterId, Position, RelativeDirection, SimConfig, tile_in_direction, validate_grid};

use crate::{Grid, WorldError, WorldResult};

/// A bounded 2-D world of critters.
///
/// The world is the only owner of placement state.  Hosts get shared
/// references to critters through [`critter`][Self::critter]; every mutation
/// goes through a `World` method so the grid and the critters cannot drift
/// apart.
pub struct World {
    grid:     Grid,
    critters: CritterStore,
    /// Live critters.  Ordered so that snapshots are reproducible.
    live:     BTreeSet<CritterId>,
}

impl World {
    /// An empty `width` × `height` world.
    ///
    /// Fails for a zero dimension or one beyond `i32::MAX`.
    pub fn new(width: u32, height: u32) -> WorldResult<Self> {
        validate_grid(width, height)?;
        Ok(Self {
            grid:     Grid::new(width, height),
            critters: CritterStore::new(),
            live:     BTreeSet::new(),
        })
    }

    /// An empty world sized by `config`.
    pub fn from_config(config: &SimConfig) -> WorldResult<Self> {
        config.validate()?;
        Self::new(config.width, config.height)
    }

    // ── Queries ───────────────────────────────────────────────────────────

    #[inline]
    pub fn width(&self) -> u32 {
        self.grid.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.grid.height()
    }

    #[inline]
    pub fn is_inside(&self, pos: Position) -> bool {
        self.grid.is_inside(pos)
    }

    /// Occupant of `pos`.  Empty and out-of-bounds tiles both yield `None`.
    #[inline]
    pub fn critter_at(&self, pos: Position) -> Option<CritterId> {
        self.grid.get(pos)
    }

    /// Registry membership.
    #[inline]
    pub fn contains(&self, id: CritterId) -> bool {
        self.live.contains(&id)
    }

    /// Any critter still held by this world, live or detached.
    #[inline]
    pub fn critter(&self, id: CritterId) -> Option<&Critter> {
        self.critters.get(id)
    }

    #[inline]
    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    /// Live critters in ascending id order.
    pub fn live_ids(&self) -> impl Iterator<Item = CritterId> + '_ {
        self.live.iter().copied()
    }

    /// Live critters with their state, in ascending id order.
    pub fn live_critters(&self) -> impl Iterator<Item = (CritterId, &Critter)> + '_ {
        self.live
            .iter()
            .filter_map(|&id| self.critters.get(id).map(|c| (id, c)))
    }

    /// Critters held by the arena, including detached ones.
    #[inline]
    pub fn critter_count(&self) -> usize {
        self.critters.len()
    }

    /// The tile in `relative` of the critter's facing.
    ///
    /// Fails with [`WorldError::NotPlaced`] for a detached critter.  The
    /// returned tile may be outside the world.
    pub fn tile_in_direction(
        &self,
        relative: RelativeDirection,
        id:       CritterId,
    ) -> WorldResult<Position> {
        let critter = self.critter_ref(id)?;
        let here = critter.location().ok_or(WorldError::NotPlaced(id))?;
        Ok(tile_in_direction(here, critter.facing, relative))
    }

    // ── Lifecycle ─────────────────────────────────────────────────────────

    /// Move a detached critter into the world's arena.
    ///
    /// Any location the value carried is discarded; it becomes live only once
    /// [`place`][Self::place]d.
    pub fn create(&mut self, mut critter: Critter) -> WorldResult<CritterId> {
        critter.set_location(None);
        self.critters.insert(critter).ok_or(WorldError::ArenaFull)
    }

    /// [`create`][Self::create] then [`place`][Self::place].
    ///
    /// An out-of-bounds `pos` fails without leaving anything in the arena.
    pub fn spawn(&mut self, critter: Critter, pos: Position) -> WorldResult<CritterId> {
        if !self.is_inside(pos) {
            return Err(self.out_of_bounds(pos));
        }
        let id = self.create(critter)?;
        self.place(id, pos)?;
        Ok(id)
    }

    /// Put critter `id` on `pos`.
    ///
    /// - Out of bounds: an error for a critter without a location, a silent
    ///   no-op for one that already stands somewhere.
    /// - In bounds: whoever holds `pos` is removed from the world first (the
    ///   occupant is evicted, not swapped).  The critter's old tile is
    ///   cleared and it joins the registry if it was not live yet.
    pub fn place(&mut self, id: CritterId, pos: Position) -> WorldResult<()> {
        self.place_evicting(id, pos).map(|_| ())
    }

    /// [`place`][Self::place], returning the evicted occupant (now detached).
    pub fn place_evicting(
        &mut self,
        id:  CritterId,
        pos: Position,
    ) -> WorldResult<Option<CritterId>> {
        let current = self.critter_ref(id)?.location();

        if !self.is_inside(pos) {
            return match current {
                None    => Err(self.out_of_bounds(pos)),
                Some(_) => Ok(None),
            };
        }
        if current == Some(pos) {
            return Ok(None);
        }

        let evicted = self.grid.get(pos);
        if let Some(occupant) = evicted {
            debug!(%id, %occupant, %pos, "evicting occupant");
            self.remove(occupant);
        }
        if let Some(old) = current {
            self.grid.clear_if(old, id);
        }

        self.grid.set(pos, id);
        self.critter_mut(id)?.set_location(Some(pos));
        self.live.insert(id);
        Ok(evicted)
    }

    /// Take critter `id` out of the registry and off the grid.  It stays in
    /// the arena, detached, and may be placed again.  Unknown ids are
    /// ignored.
    pub fn remove(&mut self, id: CritterId) {
        self.live.remove(&id);
        if let Some(critter) = self.critters.get_mut(id) {
            if let Some(pos) = critter.location() {
                self.grid.clear_if(pos, id);
            }
            critter.set_location(None);
        }
    }

    /// [`remove`][Self::remove] and drop the critter from the arena.
    pub fn despawn(&mut self, id: CritterId) -> Option<Critter> {
        self.remove(id);
        self.critters.take(id)
    }

    // ── Consistency ───────────────────────────────────────────────────────

    /// Verify the four placement invariants listed in the module docs.
    pub fn check_invariants(&self) -> WorldResult<()> {
        for (id, critter) in self.critters.iter() {
            match critter.location() {
                Some(pos) => {
                    if !self.is_inside(pos) {
                        return Err(WorldError::Inconsistent(format!("{id} stands outside at {pos}")));
                    }
                    if self.grid.get(pos) != Some(id) {
                        return Err(WorldError::Inconsistent(format!("{id} at {pos} not on the grid")));
                    }
                    if !self.live.contains(&id) {
                        return Err(WorldError::Inconsistent(format!("{id} placed but not live")));
                    }
                }
                None if self.live.contains(&id) => {
                    return Err(WorldError::Inconsistent(format!("{id} live without a location")));
                }
                None => {}
            }
        }
        for (pos, id) in self.grid.occupied() {
            let at = self.critters.get(id).and_then(Critter::location);
            if at != Some(pos) {
                return Err(WorldError::Inconsistent(format!("tile {pos} names {id}, located at {at:?}")));
            }
        }
        if let Some(ghost) = self.live.iter().find(|&&id| !self.critters.contains(id)) {
            return Err(WorldError::Inconsistent(format!("{ghost} live but despawned")));
        }
        Ok(())
    }

    // ── Crate-private helpers ─────────────────────────────────────────────

    pub(crate) fn critter_ref(&self, id: CritterId) -> WorldResult<&Critter> {
        self.critters.get(id).ok_or(WorldError::UnknownCritter(id))
    }

    pub(crate) fn critter_mut(&mut self, id: CritterId) -> WorldResult<&mut Critter> {
        self.critters.get_mut(id).ok_or(WorldError::UnknownCritter(id))
    }

    fn out_of_bounds(&self, position: Position) -> WorldError {
        WorldError::OutOfBounds {
            position,
            width:  self.width(),
            height: self.height(),
        }
    }
}
