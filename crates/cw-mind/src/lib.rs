//! `cw-mind` — critter decision strategies and the action vocabulary.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                      |
//! |----------------|---------------------------------------------------------------|
//! | [`action`]     | `Action` enum with costs and keys, `Decision`                 |
//! | [`stimulus`]   | `Stimulus`, `Percept`: what a critter perceives each tick     |
//! | [`model`]      | `Mind` trait                                                  |
//! | [`noop`]       | `EmptyMind`, never acts                                       |
//! | [`reference`]  | `FixedMind`, `SequenceMind`, `RandomMind`, `CautiousMind`     |
//! | [`error`]      | `MindError`, `MindResult<T>`                                  |
//!
//! # Design notes
//!
//! A tick in cw-sim calls `Mind::decide` once per live critter with a
//! stimulus built just before the call, then hands the returned actions to
//! the world one by one.  Minds never see the world itself, which keeps them
//! trivially shareable between a parent and its offspring.

pub mod action;
pub mod error;
pub mod model;
pub mod noop;
pub mod reference;
pub mod stimulus;


pub use action::{Action, DEFAULT_STARTING_MANA, Decision};
pub use error::{MindError, MindResult};
pub use model::Mind;
pub use noop::EmptyMind;
pub use reference::{CautiousMind, FixedMind, RandomMind, SequenceMind};
pub use stimulus::{Percept, Stimulus};
