//! `cw-core` — foundational types for the `critter_world` simulation.
//!
//! This crate is a dependency of every other `cw-*` crate.  It has no `cw-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`direction`]   | `CardinalDirection`, `RelativeDirection`, rotation    |
//! | [`position`]    | `Position`, `tile_in_direction`                       |
//! | [`ids`]         | `CritterId`, `SpeciesId`                              |
//! | [`rng`]         | `SimRng`                                              |
//! | [`config`]      | `Tick`, `SimConfig`                                   |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public value types.  |

pub mod config;
pub mod direction;
pub mod error;
pub mod ids;
pub mod position;
pub mod rng;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{SimConfig, Tick, validate_grid};
pub use direction::{CardinalDirection, RelativeDirection};
pub use error::{CoreError, CoreResult};
pub use ids::{CritterId, SpeciesId};
pub use position::{Position, tile_in_direction};
pub use rng::SimRng;
