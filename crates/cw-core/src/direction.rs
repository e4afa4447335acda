//! Cardinal and relative directions, and the rotation algebra between them.
//!
//! Cardinals form the cycle `North → East → South → West → North`.  A
//! [`RelativeDirection`] is a number of clockwise quarter turns along that
//! cycle:
//!
//! | Relative   | Quarter turns |
//! |------------|---------------|
//! | `Forward`  | 0             |
//! | `Right`    | 1             |
//! | `Backward` | 2             |
//! | `Left`     | 3             |
//!
//! The grid's y axis grows southwards, so `North` is `(0, -1)`.

use std::fmt;

// ── CardinalDirection ─────────────────────────────────────────────────────────

/// A compass heading on the grid.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CardinalDirection {
    /// Facing every critter gets when it is created.
    #[default]
    North,
    East,
    South,
    West,
}

impl CardinalDirection {
    /// All four headings in clockwise order, starting at `North`.
    pub const ALL: [CardinalDirection; 4] = [
        CardinalDirection::North,
        CardinalDirection::East,
        CardinalDirection::South,
        CardinalDirection::West,
    ];

    /// Position of `self` in the clockwise cycle.
    #[inline]
    fn ordinal(self) -> u8 {
        match self {
            CardinalDirection::North => 0,
            CardinalDirection::East  => 1,
            CardinalDirection::South => 2,
            CardinalDirection::West  => 3,
        }
    }

    /// Unit step `(dx, dy)` one tile in this heading.
    #[inline]
    pub fn offset(self) -> (i32, i32) {
        match self {
            CardinalDirection::North => (0, -1),
            CardinalDirection::East  => (1, 0),
            CardinalDirection::South => (0, 1),
            CardinalDirection::West  => (-1, 0),
        }
    }

    /// The heading reached by turning `relative` from `self`.
    #[inline]
    pub fn rotate(self, relative: RelativeDirection) -> CardinalDirection {
        let turned = (self.ordinal() + relative.quarter_turns()) % 4;
        CardinalDirection::ALL[turned as usize]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CardinalDirection::North => "north",
            CardinalDirection::East  => "east",
            CardinalDirection::South => "south",
            CardinalDirection::West  => "west",
        }
    }
}

impl fmt::Display for CardinalDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── RelativeDirection ─────────────────────────────────────────────────────────

/// A direction expressed relative to a critter's current facing.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RelativeDirection {
    Forward,
    Right,
    Backward,
    /// Counter-clockwise quarter turn.
    Left,
}

impl RelativeDirection {
    pub const ALL: [RelativeDirection; 4] = [
        RelativeDirection::Forward,
        RelativeDirection::Right,
        RelativeDirection::Backward,
        RelativeDirection::Left,
    ];

    /// Clockwise quarter turns this direction stands for.
    #[inline]
    pub fn quarter_turns(self) -> u8 {
        match self {
            RelativeDirection::Forward  => 0,
            RelativeDirection::Right    => 1,
            RelativeDirection::Backward => 2,
            RelativeDirection::Left     => 3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RelativeDirection::Forward  => "forward",
            RelativeDirection::Right    => "right",
            RelativeDirection::Backward => "backward",
            RelativeDirection::Left     => "left",
        }
    }
}

impl fmt::Display for RelativeDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
