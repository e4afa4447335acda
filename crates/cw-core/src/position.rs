//! Grid coordinates and the directional tile lookup.
//!
//! `Position` is signed so that the tile one step past an edge is still
//! representable; bounds are the world's business, not this module's.

use std::fmt;

use crate::{CardinalDirection, RelativeDirection};

/// A tile coordinate.  `(0, 0)` is the north-west corner.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// `self` shifted by `(dx, dy)`.
    #[inline]
    pub fn offset_by(self, dx: i32, dy: i32) -> Position {
        Position::new(self.x + dx, self.y + dy)
    }

    /// The neighbouring tile in `heading`.
    #[inline]
    pub fn step(self, heading: CardinalDirection) -> Position {
        let (dx, dy) = heading.offset();
        self.offset_by(dx, dy)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// The tile adjacent to `position` in direction `relative` of `facing`.
///
/// Every "what is in front / to the left / to the right" query goes through
/// here.  No bounds check is made.
#[inline]
pub fn tile_in_direction(
    position: Position,
    facing:   CardinalDirection,
    relative: RelativeDirection,
) -> Position {
    position.step(facing.rotate(relative))
}
