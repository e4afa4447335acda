//! Critter actions: the closed vocabulary a mind can request.

use std::fmt;
use std::str::FromStr;

use crate::MindError;

/// Mana every critter starts with unless its builder says otherwise.
pub const DEFAULT_STARTING_MANA: i32 = 10;

/// An action that a critter wants to perform during the current tick.
///
/// Actions are produced by [`Mind::decide`][crate::Mind::decide] and resolved
/// by the world.  Each carries a fixed mana [`cost`][Action::cost] that is
/// charged whenever the action is attempted, whether or not the world lets it
/// succeed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Action {
    /// Step onto the tile ahead if it is free or holds something edible.
    MoveForward,

    /// Quarter turn counter-clockwise.
    TurnLeft,

    /// Quarter turn clockwise.
    TurnRight,

    /// Spawn up to two offspring on the tiles to the left and right.
    Reproduce,

    /// Add one to the critter's counter.
    IncrementCounter,

    /// Subtract one from the critter's counter.
    DecrementCounter,

    /// Do nothing this step.
    StareOffIntoSpace,
}

impl Action {
    pub const ALL: [Action; 7] = [
        Action::MoveForward,
        Action::TurnLeft,
        Action::TurnRight,
        Action::Reproduce,
        Action::IncrementCounter,
        Action::DecrementCounter,
        Action::StareOffIntoSpace,
    ];

    /// Mana deducted each time the action is attempted.
    pub fn cost(self) -> i32 {
        match self {
            Action::MoveForward       => 1,
            Action::TurnLeft          => 1,
            Action::TurnRight         => 1,
            Action::Reproduce         => 10,
            Action::IncrementCounter  => 0,
            Action::DecrementCounter  => 0,
            Action::StareOffIntoSpace => 0,
        }
    }

    /// Stable lower-case key, e.g. for logs and config files.
    pub fn key(self) -> &'static str {
        match self {
            Action::MoveForward       => "move_forward",
            Action::TurnLeft          => "turn_left",
            Action::TurnRight         => "turn_right",
            Action::Reproduce         => "reproduce",
            Action::IncrementCounter  => "increment_counter",
            Action::DecrementCounter  => "decrement_counter",
            Action::StareOffIntoSpace => "noop",
        }
    }

    /// Inverse of [`key`][Self::key].
    pub fn from_key(key: &str) -> Option<Action> {
        Action::ALL.into_iter().find(|a| a.key() == key)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Action {
    type Err = MindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Action::from_key(s).ok_or_else(|| MindError::UnknownAction(s.to_owned()))
    }
}

// ── Decision ──────────────────────────────────────────────────────────────────

/// What a mind returns: nothing, one action, or an ordered batch.
///
/// The tick loop only ever consumes [`into_actions`][Self::into_actions], so
/// a mind answering `One(a)` is treated exactly like one answering
/// `Many(vec![a])`.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum Decision {
    #[default]
    Idle,
    One(Action),
    Many(Vec<Action>),
}

impl Decision {
    /// Normalize to an ordered action list.
    pub fn into_actions(self) -> Vec<Action> {
        match self {
            Decision::Idle     => vec![],
            Decision::One(a)   => vec![a],
            Decision::Many(v)  => v,
        }
    }
}

impl From<Action> for Decision {
    fn from(action: Action) -> Self {
        Decision::One(action)
    }
}

impl From<Vec<Action>> for Decision {
    fn from(actions: Vec<Action>) -> Self {
        Decision::Many(actions)
    }
}
