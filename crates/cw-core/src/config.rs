//! Simulation configuration and the tick counter.

use std::fmt;

use crate::{CoreError, CoreResult};

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// The tick after `self`.
    #[inline]
    pub fn next(self) -> Tick {
        Tick(self.0 + 1)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── Grid size ─────────────────────────────────────────────────────────────────

/// Both dimensions must be non-zero and fit in an `i32` coordinate, so that
/// one step past any edge is still representable.
pub fn validate_grid(width: u32, height: u32) -> CoreResult<()> {
    if width == 0 || height == 0 {
        return Err(CoreError::Config(format!(
            "grid must be at least 1x1, got {width}x{height}"
        )));
    }
    if width > i32::MAX as u32 || height > i32::MAX as u32 {
        return Err(CoreError::Config(format!(
            "grid {width}x{height} exceeds the coordinate range"
        )));
    }
    Ok(())
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level simulation configuration.
///
/// Typically deserialized by the host (with the `serde` feature) and passed
/// to `SimBuilder`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Grid width in tiles.
    pub width: u32,

    /// Grid height in tiles.
    pub height: u32,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Ticks simulated by `Sim::run`.
    pub total_ticks: u64,

    /// Call the observer's snapshot hook every N ticks.  0 disables snapshots.
    pub snapshot_interval_ticks: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            width:                   10,
            height:                  10,
            seed:                    0,
            total_ticks:             100,
            snapshot_interval_ticks: 0,
        }
    }
}

impl SimConfig {
    /// The tick at which `Sim::run` stops (exclusive upper bound).
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.total_ticks)
    }

    /// Reject grids a world cannot be built on.  See [`validate_grid`].
    pub fn validate(&self) -> CoreResult<()> {
        validate_grid(self.width, self.height)
    }

    /// `true` if a snapshot is due at `tick`.
    #[inline]
    pub fn snapshot_due(&self, tick: Tick) -> bool {
        self.snapshot_interval_ticks > 0 && tick.0.is_multiple_of(self.snapshot_interval_ticks)
    }
}
