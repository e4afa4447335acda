//! Dense occupancy grid.
//!
//! # Data layout
//!
//! One `Option<CritterId>` per tile, row-major:
//!
//! ```text
//! cells[ y * width + x ]
//! ```
//!
//! The grid knows nothing about critters beyond their ids; keeping it in step
//! with each critter's stored location is [`World`][crate::World]'s job.

use cw_core::{CritterId, Position};

pub struct Grid {
    width:  u32,
    height: u32,
    cells:  Vec<Option<CritterId>>,
}

impl Grid {
    /// An empty `width` × `height` grid.
    pub fn new(width: u32, height: u32) -> Self {
        let len = width as usize * height as usize;
        Self { width, height, cells: vec![None; len] }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// `0 <= x < width && 0 <= y < height`.
    #[inline]
    pub fn is_inside(&self, pos: Position) -> bool {
        pos.x >= 0
            && pos.y >= 0
            && (pos.x as i64) < self.width as i64
            && (pos.y as i64) < self.height as i64
    }

    /// Cell index of an in-bounds position.
    #[inline]
    fn index(&self, pos: Position) -> Option<usize> {
        self.is_inside(pos)
            .then(|| pos.y as usize * self.width as usize + pos.x as usize)
    }

    /// Occupant of `pos`; `None` for empty or out-of-bounds tiles.
    #[inline]
    pub fn get(&self, pos: Position) -> Option<CritterId> {
        self.index(pos).and_then(|i| self.cells[i])
    }

    /// Put `id` on `pos`, returning the previous occupant.  Out-of-bounds
    /// writes are ignored.
    pub fn set(&mut self, pos: Position, id: CritterId) -> Option<CritterId> {
        let i = self.index(pos)?;
        self.cells[i].replace(id)
    }

    /// Empty `pos` if (and only if) `id` is standing there.
    pub fn clear_if(&mut self, pos: Position, id: CritterId) -> bool {
        match self.index(pos) {
            Some(i) if self.cells[i] == Some(id) => {
                self.cells[i] = None;
                true
            }
            _ => false,
        }
    }

    /// Every occupied tile as `(position, occupant)`, row by row.
    pub fn occupied(&self) -> impl Iterator<Item = (Position, CritterId)> + '_ {
        let width = self.width as usize;
        self.cells.iter().enumerate().filter_map(move |(i, cell)| {
            cell.map(|id| (Position::new((i % width) as i32, (i / width) as i32), id))
        })
    }
}
