//! The `Mind` trait, the main extension point for user code.

use cw_core::SimRng;

use crate::{Decision, Stimulus};

/// Pluggable critter decision strategy.
///
/// Implement this trait to define what critters do each tick.  A mind sees
/// only the [`Stimulus`] its critter was handed; every effect on the world
/// flows back through the returned [`Decision`].
///
/// # Sharing
///
/// Minds are held as `Arc<dyn Mind>` and shared between a parent and all of
/// its offspring, so implementations must be `Send + Sync` and must not keep
/// per-critter state.  Anything that varies per critter belongs in the
/// critter (mana, counter) and reaches the mind through the stimulus.
///
/// # Randomness
///
/// `rng` is the world's seeded stream.  Drawing from it keeps runs
/// reproducible; do not reach for `thread_rng`.
///
/// # Example
///
/// ```rust
/// use cw_core::SimRng;
/// use cw_mind::{Action, Decision, Mind, Stimulus};
///
/// struct Wanderer;
///
/// impl Mind for Wanderer {
///     fn decide(&self, stimulus: &Stimulus, _rng: &mut SimRng) -> Decision {
///         if stimulus.ahead.is_passable() {
///             Action::MoveForward.into()
///         } else {
///             Action::TurnLeft.into()
///         }
///     }
/// }
/// ```
pub trait Mind: Send + Sync + 'static {
    /// Called once per live critter per tick.
    ///
    /// Return [`Decision::Idle`] to do nothing.
    fn decide(&self, stimulus: &Stimulus, rng: &mut SimRng) -> Decision;

    /// Short label for logs.
    fn name(&self) -> &'static str {
        "mind"
    }
}
