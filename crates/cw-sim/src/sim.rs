//! The `Sim` struct and its tick loop.

use tracing::{debug, trace};

use cw_agent::Critter;
use cw_core::{CritterId, SimConfig, SimRng, Tick};
use cw_mind::Action;
use cw_world::{ActionOutcome, MoveOutcome, World};

use crate::{SimObserver, SimResult, StimulusPackager, SurroundingsPackager};

// ── TickReport ────────────────────────────────────────────────────────────────

/// Summary of one resolved tick, handed to
/// [`SimObserver::on_tick_end`][crate::SimObserver::on_tick_end].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TickReport {
    pub tick: Tick,

    /// Critters whose mind was consulted this tick.
    pub acted: usize,

    /// Actions dispatched, over all critters.
    pub actions: usize,

    /// Offspring placed this tick.
    pub births: usize,

    /// Critters eaten by a mover this tick.
    pub eaten: usize,

    /// Critters despawned at the end of the tick for running out of mana.
    pub deaths: usize,
}

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The simulation runner.
///
/// Each tick resolves sequentially:
///
/// 1. **Snapshot**: copy the live registry and shuffle it with [`SimRng`].
/// 2. **Per critter**, in that order, skipping critters that left the world
///    earlier in the tick and critters without a mind:
///    - build a stimulus with the packager,
///    - ask the mind for actions,
///    - apply each action in order, marking the critter once its mana
///      reaches zero.
/// 3. **Cleanup**: despawn every marked critter.
///
/// Offspring born during a tick are not in the snapshot, so they first act
/// on the following tick.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<P: StimulusPackager = SurroundingsPackager> {
    /// Grid size, seed, run length and snapshot cadence.
    pub config: SimConfig,

    pub world: World,

    /// Drives the traversal shuffle, the reproduction side order and every
    /// mind.  Seeded from `config.seed`.
    pub rng: SimRng,

    pub packager: P,

    /// The next tick to resolve.
    tick: Tick,
}

impl<P: StimulusPackager> Sim<P> {
    pub(crate) fn new(config: SimConfig, world: World, packager: P) -> Self {
        Self {
            rng: SimRng::new(config.seed),
            config,
            world,
            packager,
            tick: Tick::ZERO,
        }
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// The next tick [`step`][Self::step] will resolve.
    #[inline]
    pub fn current_tick(&self) -> Tick {
        self.tick
    }

    /// Run until `config.end_tick()` or until no critter is left alive.
    ///
    /// Calls observer hooks at every tick boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        while self.tick < self.config.end_tick() && self.world.live_count() > 0 {
            self.step(observer)?;
        }
        observer.on_sim_end(self.tick);
        Ok(())
    }

    /// Run exactly `n` ticks from the current position (ignores `end_tick`
    /// and an empty world).
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            self.step(observer)?;
        }
        Ok(())
    }

    /// Resolve one tick.
    pub fn step<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<TickReport> {
        let now = self.tick;

        observer.on_tick_start(now);
        let report = self.resolve_tick(now)?;
        observer.on_tick_end(&report);
        if self.config.snapshot_due(now) {
            observer.on_snapshot(now, &self.world);
        }

        debug!(
            tick   = %now,
            acted  = report.acted,
            births = report.births,
            eaten  = report.eaten,
            deaths = report.deaths,
            live   = self.world.live_count(),
            "tick resolved"
        );
        self.tick = now.next();
        Ok(report)
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn resolve_tick(&mut self, now: Tick) -> SimResult<TickReport> {
        let mut report = TickReport { tick: now, ..TickReport::default() };

        let mut order: Vec<CritterId> = self.world.live_ids().collect();
        self.rng.shuffle(&mut order);

        let mut exhausted = Vec::new();
        for id in order {
            // Eaten earlier this tick.
            if !self.world.contains(id) {
                continue;
            }
            let Some(actions) = self.decide(id, now)? else {
                continue;
            };
            report.acted += 1;

            let mut marked = false;
            for action in actions {
                let outcome = self.world.apply(id, action, &mut self.rng)?;
                trace!(%id, %action, ?outcome, "action applied");

                report.actions += 1;
                match outcome {
                    ActionOutcome::Reproduced(born)          => report.births += born.len(),
                    ActionOutcome::Move(MoveOutcome::Ate(_)) => report.eaten += 1,
                    _ => {}
                }

                if !marked && self.world.critter(id).is_some_and(Critter::is_exhausted) {
                    exhausted.push(id);
                    marked = true;
                }
            }
        }

        for id in exhausted {
            if let Some(dead) = self.world.despawn(id) {
                debug!(%id, mana = dead.mana, "critter exhausted");
                report.deaths += 1;
            }
        }
        Ok(report)
    }

    /// Package the stimulus and consult the mind.  `None` for a critter
    /// without a mind.
    fn decide(&mut self, id: CritterId, now: Tick) -> SimResult<Option<Vec<Action>>> {
        let Some(critter) = self.world.critter(id) else {
            return Ok(None);
        };
        if critter.mind().is_none() {
            return Ok(None);
        }
        let stimulus = self.packager.package(&self.world, id, now)?;
        Ok(Some(critter.request_actions(&stimulus, &mut self.rng)))
    }
}
