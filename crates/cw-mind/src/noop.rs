//! A mind that never acts.

use cw_core::SimRng;

use crate::{Decision, Mind, Stimulus};

/// A [`Mind`] that is always idle.
///
/// Useful as a placeholder in tests or for "passive" critters that simply
/// occupy space.  Critters built without a mind behave the same way.
pub struct EmptyMind;

impl Mind for EmptyMind {
    fn decide(&self, _stimulus: &Stimulus, _rng: &mut SimRng) -> Decision {
        Decision::Idle
    }

    fn name(&self) -> &'static str {
        "empty"
    }
}
