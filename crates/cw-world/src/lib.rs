//! `cw-world` — the bounded grid world and its action rules.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                       |
//! |-------------|----------------------------------------------------------------|
//! | [`grid`]    | `Grid`: dense `Option<CritterId>` occupancy                    |
//! | [`world`]   | `World`: arena, live registry, placement and removal           |
//! | [`actions`] | Move, turn, reproduce and counter rules; `MoveOutcome`, `ActionOutcome` |
//! | [`error`]   | `WorldError`, `WorldResult<T>`                                 |
//!
//! # Placement policy in one paragraph
//!
//! Placing onto an occupied tile evicts the occupant.  Placing an unplaced
//! critter outside the grid is an error; placing an already-placed one
//! outside the grid does nothing.  Moves and births check edibility *before*
//! placing, so only edible occupants ever get evicted by the action rules.

pub mod actions;
pub mod error;
pub mod grid;
pub mod world;

#[cfg(test)]
mod tests;

pub use actions::{ActionOutcome, MoveOutcome};
pub use error::{WorldError, WorldResult};
pub use grid::Grid;
pub use world::World;
