//! `cw-agent` — critter state and arena storage for `critter_world`.
//!
//! # Crate layout
//!
//! | Module        | Contents                                           |
//! |---------------|----------------------------------------------------|
//! | [`critter`]   | `Critter`, `Diet`                                  |
//! | [`store`]     | `CritterStore` (slot arena indexed by `CritterId`) |
//! | [`builder`]   | `CritterBuilder` (fluent construction)             |
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                  |
//! |------------|---------------------------------------------------------|
//! | `serde`    | Derives `Serialize`/`Deserialize` on `Diet`.            |

pub mod builder;
pub mod critter;
pub mod store;


pub use builder::CritterBuilder;
pub use critter::{Critter, Diet};
pub use store::CritterStore;
