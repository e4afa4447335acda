//! Simulation observer trait for progress reporting and data collection.

use cw_core::Tick;
use cw_world::World;

use crate::TickReport;

/// Callbacks invoked by [`Sim::step`][crate::Sim::step] and
/// [`Sim::run`][crate::Sim::run] at key points in the tick loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: population printer
///
/// ```rust
/// use cw_sim::{SimObserver, TickReport};
///
/// struct PopulationPrinter;
///
/// impl SimObserver for PopulationPrinter {
///     fn on_tick_end(&mut self, report: &TickReport) {
///         println!("{}: {} acted, {} born, {} died",
///             report.tick, report.acted, report.births, report.deaths);
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before the traversal order is
    /// drawn.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called once the tick is fully resolved, exhausted critters included.
    fn on_tick_end(&mut self, _report: &TickReport) {}

    /// Called every `config.snapshot_interval_ticks` ticks, after
    /// `on_tick_end`.
    ///
    /// Read-only access to the whole world, so output writers can record
    /// positions without the sim knowing about any format.
    fn on_snapshot(&mut self, _tick: Tick, _world: &World) {}

    /// Called once when [`Sim::run`][crate::Sim::run] stops.  `next_tick` is
    /// the first tick that was not resolved.
    fn on_sim_end(&mut self, _next_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
