//! Arena storage for critters.
//!
//! # Why an arena?
//!
//! The grid needs to name its occupants and critters need to know where they
//! stand.  Storing critters in a slot vector and letting the grid hold
//! [`CritterId`]s avoids any reference cycle between the two: both sides
//! hold plain indices and the world keeps them consistent.
//!
//! Slots are never reused.  A despawned critter leaves a `None` behind so
//! that a stale id held by a host resolves to "gone" instead of silently
//! pointing at a newer critter.

use cw_core::CritterId;

use crate::Critter;

pub struct CritterStore {
    slots:    Vec<Option<Critter>>,
    occupied: usize,
}

impl Default for CritterStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CritterStore {
    pub fn new() -> Self {
        Self { slots: Vec::new(), occupied: 0 }
    }

    /// Move `critter` into the arena and return its id.
    ///
    /// Returns `None` only if the id space (`u32`) is exhausted.
    pub fn insert(&mut self, critter: Critter) -> Option<CritterId> {
        let id = CritterId::try_from(self.slots.len()).ok()?;
        self.slots.push(Some(critter));
        self.occupied += 1;
        Some(id)
    }

    #[inline]
    pub fn get(&self, id: CritterId) -> Option<&Critter> {
        self.slots.get(id.index()).and_then(Option::as_ref)
    }

    #[inline]
    pub fn get_mut(&mut self, id: CritterId) -> Option<&mut Critter> {
        self.slots.get_mut(id.index()).and_then(Option::as_mut)
    }

    /// Remove the critter from the arena for good.
    pub fn take(&mut self, id: CritterId) -> Option<Critter> {
        let taken = self.slots.get_mut(id.index()).and_then(Option::take);
        if taken.is_some() {
            self.occupied -= 1;
        }
        taken
    }

    #[inline]
    pub fn contains(&self, id: CritterId) -> bool {
        self.get(id).is_some()
    }

    /// Number of critters currently held (placed or detached).
    #[inline]
    pub fn len(&self) -> usize {
        self.occupied
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.occupied == 0
    }

    /// Occupied slots in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = (CritterId, &Critter)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|c| (CritterId(i as u32), c)))
    }
}
