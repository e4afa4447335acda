//! `cw-sim` — tick resolver for the critter_world simulation.
//!
//! # Tick loop
//!
//! ```text
//! for tick in 0..config.total_ticks (or until the world is empty):
//!   ① Snapshot: copy the live registry, shuffle it with the SimRng.
//!   ② Perceive: StimulusPackager::package for each critter still live.
//!   ③ Decide: Mind::decide, normalized to a list of actions.
//!   ④ Act: World::apply per action; mark the critter once mana <= 0.
//!   ⑤ Cleanup: despawn every marked critter.
//! ```
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use cw_core::SimConfig;
//! use cw_sim::{NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::new(SimConfig::default())
//!     .population(critters)
//!     .build()?;
//! sim.run(&mut NoopObserver)?;
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod packager;
pub mod sim;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use packager::{BlindPackager, StimulusPackager, SurroundingsPackager};
pub use sim::{Sim, TickReport};
