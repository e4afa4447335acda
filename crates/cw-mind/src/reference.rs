//! Reference minds shipped with the engine.

use cw_core::{RelativeDirection, SimRng};

use crate::{Action, Decision, Mind, Stimulus};

/// Always requests the same single action.
#[derive(Clone, Debug)]
pub struct FixedMind(pub Action);

impl Mind for FixedMind {
    fn decide(&self, _stimulus: &Stimulus, _rng: &mut SimRng) -> Decision {
        Decision::One(self.0)
    }

    fn name(&self) -> &'static str {
        "fixed"
    }
}

/// Requests the same ordered batch of actions every tick.
#[derive(Clone, Debug)]
pub struct SequenceMind(pub Vec<Action>);

impl Mind for SequenceMind {
    fn decide(&self, _stimulus: &Stimulus, _rng: &mut SimRng) -> Decision {
        Decision::Many(self.0.clone())
    }

    fn name(&self) -> &'static str {
        "sequence"
    }
}

/// Picks one action uniformly from its repertoire each tick.
#[derive(Clone, Debug)]
pub struct RandomMind {
    repertoire: Vec<Action>,
}

impl RandomMind {
    pub fn new(repertoire: Vec<Action>) -> Self {
        Self { repertoire }
    }

    /// Every action in the vocabulary.
    pub fn any_action() -> Self {
        Self::new(Action::ALL.to_vec())
    }
}

impl Mind for RandomMind {
    fn decide(&self, _stimulus: &Stimulus, rng: &mut SimRng) -> Decision {
        match rng.choose(&self.repertoire) {
            Some(&action) => Decision::One(action),
            None          => Decision::Idle,
        }
    }

    fn name(&self) -> &'static str {
        "random"
    }
}

/// Walks until blocked, turns right when it is, and reproduces whenever it
/// can afford to and still survive.
#[derive(Clone, Debug, Default)]
pub struct CautiousMind;

impl Mind for CautiousMind {
    fn decide(&self, stimulus: &Stimulus, _rng: &mut SimRng) -> Decision {
        let room_to_breed = stimulus.percept(RelativeDirection::Left).is_passable()
            || stimulus.percept(RelativeDirection::Right).is_passable();
        if room_to_breed && stimulus.mana > Action::Reproduce.cost() {
            return Decision::One(Action::Reproduce);
        }
        if stimulus.ahead.is_passable() {
            Decision::One(Action::MoveForward)
        } else {
            Decision::One(Action::TurnRight)
        }
    }

    fn name(&self) -> &'static str {
        "cautious"
    }
}
