//! Unit tests for cw-world.
//!
//! All tests use a 10×10 world unless stated otherwise.

use std::sync::Arc;

use cw_agent::{Critter, CritterBuilder, Diet};
use cw_core::{CardinalDirection, CritterId, Position, RelativeDirection, SimRng, SpeciesId};
use cw_mind::{Action, FixedMind, Mind};

use crate::{World, WorldError};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn world() -> World {
    World::new(10, 10).unwrap()
}

fn pos(x: i32, y: i32) -> Position {
    Position::new(x, y)
}

fn acting(action: Action) -> Critter {
    Critter::new(Arc::new(FixedMind(action)))
}

fn grazer(species: u16) -> Critter {
    CritterBuilder::new().species(SpeciesId(species)).build()
}

fn predator(species: u16) -> Critter {
    CritterBuilder::new()
        .species(SpeciesId(species))
        .diet(Diet::Predator)
        .build()
}

fn spawn_facing(world: &mut World, critter: Critter, at: Position, facing: CardinalDirection) -> CritterId {
    let mut critter = critter;
    critter.facing = facing;
    world.spawn(critter, at).unwrap()
}

fn location(world: &World, id: CritterId) -> Option<Position> {
    world.critter(id).and_then(Critter::location)
}

fn mana(world: &World, id: CritterId) -> i32 {
    world.critter(id).unwrap().mana
}

fn facing(world: &World, id: CritterId) -> CardinalDirection {
    world.critter(id).unwrap().facing
}

// ── Placement ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod place {
    use super::*;

    #[test]
    fn first_placement_registers_and_occupies() {
        let mut w = world();
        let id = w.create(grazer(0)).unwrap();
        assert!(!w.contains(id));

        w.place(id, pos(2, 3)).unwrap();
        assert!(w.contains(id));
        assert_eq!(w.critter_at(pos(2, 3)), Some(id));
        assert_eq!(location(&w, id), Some(pos(2, 3)));
        assert_eq!(facing(&w, id), CardinalDirection::North);
        w.check_invariants().unwrap();
    }

    #[test]
    fn relocation_clears_old_tile_without_duplicating_registry() {
        let mut w = world();
        let id = w.spawn(grazer(0), pos(1, 1)).unwrap();
        w.place(id, pos(5, 5)).unwrap();
        w.place(id, pos(6, 5)).unwrap();

        assert_eq!(w.live_count(), 1);
        assert_eq!(w.live_ids().collect::<Vec<_>>(), vec![id]);
        assert_eq!(w.critter_at(pos(1, 1)), None);
        assert_eq!(w.critter_at(pos(5, 5)), None);
        assert_eq!(w.critter_at(pos(6, 5)), Some(id));
        w.check_invariants().unwrap();
    }

    #[test]
    fn placing_on_own_tile_is_a_noop() {
        let mut w = world();
        let id = w.spawn(grazer(0), pos(4, 4)).unwrap();
        assert_eq!(w.place_evicting(id, pos(4, 4)).unwrap(), None);
        assert!(w.contains(id));
        assert_eq!(w.critter_at(pos(4, 4)), Some(id));
    }

    #[test]
    fn fresh_critter_outside_is_an_error() {
        let mut w = world();
        let id = w.create(grazer(0)).unwrap();
        let err = w.place(id, pos(-1, 5)).unwrap_err();
        assert!(matches!(err, WorldError::OutOfBounds { position, .. } if position == pos(-1, 5)));
        assert!(!w.contains(id));
        assert_eq!(location(&w, id), None);
    }

    #[test]
    fn spawn_outside_leaves_nothing_behind() {
        let mut w = world();
        assert!(w.spawn(grazer(0), pos(10, 0)).is_err());
        assert_eq!(w.critter_count(), 0);
        assert_eq!(w.live_count(), 0);
    }

    #[test]
    fn placed_critter_outside_stays_put() {
        let mut w = world();
        let id = w.spawn(grazer(0), pos(3, 0)).unwrap();
        w.place(id, pos(3, -1)).unwrap();
        w.place(id, pos(10, 10)).unwrap();
        assert_eq!(location(&w, id), Some(pos(3, 0)));
        w.check_invariants().unwrap();
    }

    /// Eviction is destructive by design: the previous occupant leaves the
    /// world instead of swapping places.
    #[test]
    fn placing_onto_occupied_tile_evicts_the_occupant() {
        let mut w = world();
        let a = w.spawn(grazer(0), pos(2, 2)).unwrap();
        let b = w.spawn(grazer(0), pos(7, 7)).unwrap();

        let evicted = w.place_evicting(b, pos(2, 2)).unwrap();
        assert_eq!(evicted, Some(a));
        assert!(!w.contains(a));
        assert_eq!(location(&w, a), None);
        assert_eq!(w.critter_at(pos(2, 2)), Some(b));
        assert_eq!(w.critter_at(pos(7, 7)), None);
        w.check_invariants().unwrap();
    }

    #[test]
    fn evicted_critter_can_be_placed_again() {
        let mut w = world();
        let a = w.spawn(grazer(0), pos(2, 2)).unwrap();
        w.spawn(grazer(0), pos(2, 2)).unwrap();
        w.place(a, pos(0, 0)).unwrap();
        assert!(w.contains(a));
        assert_eq!(w.live_count(), 2);
        w.check_invariants().unwrap();
    }

    #[test]
    fn create_discards_a_stale_location() {
        let mut w = world();
        let mut c = grazer(0);
        c.set_location(Some(pos(1, 1)));
        let id = w.create(c).unwrap();
        assert_eq!(location(&w, id), None);
        w.check_invariants().unwrap();
    }

    #[test]
    fn unknown_ids_are_rejected() {
        let mut w = world();
        let ghost = CritterId(99);
        assert!(matches!(w.place(ghost, pos(0, 0)), Err(WorldError::UnknownCritter(_))));
        assert!(matches!(w.move_forward(ghost), Err(WorldError::UnknownCritter(_))));
    }
}

// ── Removal ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod remove {
    use super::*;

    #[test]
    fn remove_clears_tile_registry_and_location() {
        let mut w = world();
        let id = w.spawn(grazer(0), pos(5, 5)).unwrap();
        w.remove(id);
        assert!(!w.contains(id));
        assert_eq!(w.critter_at(pos(5, 5)), None);
        assert_eq!(location(&w, id), None);
        assert!(w.critter(id).is_some(), "remove detaches, it does not destroy");
        w.check_invariants().unwrap();
    }

    #[test]
    fn removing_twice_or_unknown_is_harmless() {
        let mut w = world();
        let id = w.spawn(grazer(0), pos(5, 5)).unwrap();
        w.remove(id);
        w.remove(id);
        w.remove(CritterId(1234));
        w.check_invariants().unwrap();
    }

    #[test]
    fn despawn_drops_from_arena() {
        let mut w = world();
        let id = w.spawn(grazer(0), pos(5, 5)).unwrap();
        let gone = w.despawn(id).unwrap();
        assert_eq!(gone.location(), None);
        assert!(w.critter(id).is_none());
        assert!(w.despawn(id).is_none());
        assert_eq!(w.critter_count(), 0);
    }
}

// ── Queries ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod queries {
    use super::*;

    #[test]
    fn is_inside_edges() {
        let w = world();
        for y in [0, 4, 9] {
            assert!(!w.is_inside(pos(-1, y)));
            assert!(w.is_inside(pos(0, y)));
            assert!(w.is_inside(pos(9, y)));
            assert!(!w.is_inside(pos(10, y)));
        }
        for x in [0, 4, 9] {
            assert!(!w.is_inside(pos(x, -1)));
            assert!(w.is_inside(pos(x, 9)));
            assert!(!w.is_inside(pos(x, 10)));
        }
    }

    #[test]
    fn critter_at_outside_is_none() {
        let w = world();
        assert_eq!(w.critter_at(pos(-3, 40)), None);
        assert_eq!(w.critter_at(pos(0, 0)), None);
    }

    #[test]
    fn tile_in_direction_forward() {
        let mut w = world();
        let id = w.spawn(grazer(0), pos(1, 1)).unwrap();
        let cases = [
            (CardinalDirection::West, pos(0, 1)),
            (CardinalDirection::East, pos(2, 1)),
            (CardinalDirection::North, pos(1, 0)),
            (CardinalDirection::South, pos(1, 2)),
        ];
        for (heading, expected) in cases {
            w.critter_mut(id).unwrap().facing = heading;
            assert_eq!(w.tile_in_direction(RelativeDirection::Forward, id).unwrap(), expected);
        }
    }

    #[test]
    fn tile_in_direction_left() {
        let mut w = world();
        let id = w.spawn(grazer(0), pos(1, 1)).unwrap();
        let cases = [
            (CardinalDirection::West, pos(1, 2)),
            (CardinalDirection::East, pos(1, 0)),
            (CardinalDirection::North, pos(0, 1)),
            (CardinalDirection::South, pos(2, 1)),
        ];
        for (heading, expected) in cases {
            w.critter_mut(id).unwrap().facing = heading;
            assert_eq!(w.tile_in_direction(RelativeDirection::Left, id).unwrap(), expected);
        }
    }

    #[test]
    fn tile_in_direction_needs_a_location() {
        let mut w = world();
        let id = w.create(grazer(0)).unwrap();
        assert!(matches!(
            w.tile_in_direction(RelativeDirection::Forward, id),
            Err(WorldError::NotPlaced(_))
        ));
    }

    #[test]
    fn from_config_validates() {
        let cfg = cw_core::SimConfig { width: 0, ..Default::default() };
        assert!(World::from_config(&cfg).is_err());
        let w = World::from_config(&cw_core::SimConfig::default()).unwrap();
        assert_eq!((w.width(), w.height()), (10, 10));
    }

    #[test]
    fn new_rejects_sizes_past_the_coordinate_range() {
        assert!(matches!(World::new(0, 4), Err(WorldError::Core(_))));
        assert!(matches!(World::new(i32::MAX as u32 + 1, 1), Err(WorldError::Core(_))));
        assert!(matches!(World::new(1, u32::MAX), Err(WorldError::Core(_))));
    }
}

// ── Movement ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod movement {
    use crate::MoveOutcome;

    use super::*;

    #[test]
    fn moves_into_empty_tile() {
        let mut w = world();
        let id = w.spawn(acting(Action::MoveForward), pos(4, 1)).unwrap();
        assert_eq!(w.move_forward(id).unwrap(), MoveOutcome::Moved);
        assert_eq!(w.critter_at(pos(4, 1)), None);
        assert_eq!(w.critter_at(pos(4, 0)), Some(id));
        assert_eq!(location(&w, id), Some(pos(4, 0)));
        assert_eq!(mana(&w, id), 9);
        w.check_invariants().unwrap();
    }

    #[test]
    fn blocked_by_inedible_neighbour() {
        let mut w = world();
        let rob = w.spawn(grazer(0), pos(4, 1)).unwrap();
        let zoe = w.spawn(grazer(0), pos(4, 0)).unwrap();
        assert_eq!(w.move_forward(rob).unwrap(), MoveOutcome::Blocked(zoe));
        assert_eq!(location(&w, rob), Some(pos(4, 1)));
        assert_eq!(location(&w, zoe), Some(pos(4, 0)));
        assert_eq!(mana(&w, rob), 9, "a rejected move still costs mana");
        w.check_invariants().unwrap();
    }

    #[test]
    fn blocked_by_the_edge() {
        let mut w = world();
        let id = w.spawn(grazer(0), pos(4, 0)).unwrap();
        assert_eq!(w.move_forward(id).unwrap(), MoveOutcome::AtEdge);
        assert_eq!(location(&w, id), Some(pos(4, 0)));
        assert_eq!(mana(&w, id), 9);
    }

    #[test]
    fn predator_eats_what_stands_ahead() {
        let mut w = world();
        let wolf = spawn_facing(&mut w, predator(1), pos(3, 3), CardinalDirection::East);
        let sheep = w.spawn(grazer(0), pos(4, 3)).unwrap();

        assert_eq!(w.move_forward(wolf).unwrap(), MoveOutcome::Ate(sheep));
        assert_eq!(location(&w, wolf), Some(pos(4, 3)));
        assert!(w.critter(sheep).is_none(), "eaten critters are despawned");
        assert_eq!(w.critter(wolf).unwrap().meals, 1);
        w.check_invariants().unwrap();
    }

    #[test]
    fn predator_spares_its_own_species() {
        let mut w = world();
        let a = spawn_facing(&mut w, predator(1), pos(3, 3), CardinalDirection::East);
        let b = w.spawn(predator(1), pos(4, 3)).unwrap();
        assert_eq!(w.move_forward(a).unwrap(), MoveOutcome::Blocked(b));
        assert!(w.contains(b));
    }

    #[test]
    fn detached_mover_is_an_error() {
        let mut w = world();
        let id = w.create(grazer(0)).unwrap();
        assert!(matches!(w.move_forward(id), Err(WorldError::NotPlaced(_))));
        assert_eq!(w.critter(id).unwrap().mana, 10, "failed precondition charges nothing");
    }
}

// ── Turning ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod turning {
    use super::*;

    #[test]
    fn four_left_turns_go_all_the_way_round() {
        let mut w = world();
        let zoe = w.spawn(acting(Action::TurnLeft), pos(4, 4)).unwrap();
        assert_eq!(facing(&w, zoe), CardinalDirection::North);
        assert_eq!(w.turn_left(zoe).unwrap(), CardinalDirection::West);
        assert_eq!(w.turn_left(zoe).unwrap(), CardinalDirection::South);
        assert_eq!(w.turn_left(zoe).unwrap(), CardinalDirection::East);
        assert_eq!(w.turn_left(zoe).unwrap(), CardinalDirection::North);
        assert_eq!(mana(&w, zoe), 6);
    }

    #[test]
    fn turning_does_not_move() {
        let mut w = world();
        let zoe = w.spawn(grazer(0), pos(4, 4)).unwrap();
        w.turn_right(zoe).unwrap();
        assert_eq!(facing(&w, zoe), CardinalDirection::East);
        assert_eq!(location(&w, zoe), Some(pos(4, 4)));
        assert_eq!(w.critter_at(pos(4, 4)), Some(zoe));
    }

    #[test]
    fn detached_critters_may_turn() {
        let mut w = world();
        let id = w.create(grazer(0)).unwrap();
        assert_eq!(w.turn_right(id).unwrap(), CardinalDirection::East);
    }
}

// ── Reproduction ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod reproduction {
    use super::*;

    fn kim_mind() -> Arc<dyn Mind> {
        Arc::new(FixedMind(Action::Reproduce))
    }

    #[test]
    fn open_ground_yields_two_offspring() {
        for heading in CardinalDirection::ALL {
            let mut w = world();
            let kim = spawn_facing(&mut w, Critter::new(kim_mind()), pos(7, 7), heading);
            let left_tile = w.tile_in_direction(RelativeDirection::Left, kim).unwrap();
            let right_tile = w.tile_in_direction(RelativeDirection::Right, kim).unwrap();

            let born = w.reproduce(kim, &mut SimRng::new(1)).unwrap();
            assert_eq!(born.len(), 2);
            assert_eq!(mana(&w, kim), 0);

            let left = w.critter_at(left_tile).expect("left child");
            let right = w.critter_at(right_tile).expect("right child");
            let parent = w.critter(kim).unwrap();
            assert!(w.critter(left).unwrap().shares_mind_with(parent));
            assert!(w.critter(right).unwrap().shares_mind_with(parent));
            assert_eq!(facing(&w, left), heading.rotate(RelativeDirection::Left));
            assert_eq!(facing(&w, right), heading.rotate(RelativeDirection::Right));
            w.check_invariants().unwrap();
        }
    }

    #[test]
    fn occupied_side_is_left_alone() {
        let mut w = world();
        let kim = w.spawn(Critter::new(kim_mind()), pos(7, 7)).unwrap();
        let rob_tile = w.tile_in_direction(RelativeDirection::Left, kim).unwrap();
        let rob = w.spawn(grazer(0), rob_tile).unwrap();

        let born = w.reproduce(kim, &mut SimRng::new(0)).unwrap();
        assert_eq!(born.len(), 1);
        assert_eq!(w.critter_at(rob_tile), Some(rob));
        w.check_invariants().unwrap();
    }

    #[test]
    fn edge_side_gets_no_offspring() {
        let mut w = world();
        let kim = w.spawn(Critter::new(kim_mind()), pos(0, 4)).unwrap();
        let before = w.critter_count();

        let born = w.reproduce(kim, &mut SimRng::new(0)).unwrap();
        assert_eq!(born.len(), 1);
        assert_eq!(w.critter_count(), before + 1, "no offspring is even created for the edge side");
        assert_eq!(w.critter_at(pos(1, 4)), Some(born[0]));
        w.check_invariants().unwrap();
    }

    #[test]
    fn cost_is_paid_even_without_offspring() {
        // A one-tile-wide corridor: both sides of a north-facing critter
        // lie outside the world.
        let mut w = World::new(1, 3).unwrap();
        let kim = w.spawn(Critter::new(kim_mind()), pos(0, 1)).unwrap();
        let born = w.reproduce(kim, &mut SimRng::new(0)).unwrap();
        assert!(born.is_empty());
        assert_eq!(mana(&w, kim), 0);
        assert_eq!(w.live_count(), 1);
    }

    #[test]
    fn poor_parents_do_not_try_but_still_pay() {
        let mut w = world();
        let kim = w.spawn(CritterBuilder::new().mind(kim_mind()).mana(9).build(), pos(5, 5)).unwrap();
        let born = w.reproduce(kim, &mut SimRng::new(0)).unwrap();
        assert!(born.is_empty());
        assert_eq!(w.live_count(), 1);
        assert_eq!(mana(&w, kim), -1);
    }

    #[test]
    fn predator_offspring_eat_other_species() {
        let mut w = world();
        let wolf = w.spawn(predator(1), pos(5, 5)).unwrap();
        let sheep = w.spawn(grazer(0), pos(4, 5)).unwrap();
        let cousin = w.spawn(predator(1), pos(6, 5)).unwrap();

        let born = w.reproduce(wolf, &mut SimRng::new(3)).unwrap();
        assert_eq!(born.len(), 1);
        let pup = born[0];
        assert_eq!(w.critter_at(pos(4, 5)), Some(pup));
        assert!(w.critter(sheep).is_none());
        assert_eq!(w.critter(pup).unwrap().meals, 1);
        assert_eq!(w.critter_at(pos(6, 5)), Some(cousin));
        w.check_invariants().unwrap();
    }

    #[test]
    fn side_order_is_randomized() {
        let mut left_first = 0;
        let mut right_first = 0;
        for seed in 0..64 {
            let mut w = world();
            let kim = w.spawn(Critter::new(kim_mind()), pos(5, 5)).unwrap();
            let born = w.reproduce(kim, &mut SimRng::new(seed)).unwrap();
            // Lower id means created first.
            let first_tile = location(&w, born[0]).unwrap();
            if first_tile == pos(4, 5) {
                left_first += 1;
            } else {
                right_first += 1;
            }
        }
        assert!(left_first > 0 && right_first > 0, "{left_first} / {right_first}");
    }

    #[test]
    fn same_seed_same_order() {
        let run = |seed| {
            let mut w = world();
            let kim = w.spawn(Critter::new(kim_mind()), pos(5, 5)).unwrap();
            let born = w.reproduce(kim, &mut SimRng::new(seed)).unwrap();
            born.iter().map(|&c| location(&w, c)).collect::<Vec<_>>()
        };
        assert_eq!(run(11), run(11));
    }
}

// ── Counter and dispatch ──────────────────────────────────────────────────────

#[cfg(test)]
mod dispatch {
    use crate::{ActionOutcome, MoveOutcome};

    use super::*;

    #[test]
    fn counter_moves_both_ways_for_free() {
        let mut w = world();
        let id = w.spawn(grazer(0), pos(0, 0)).unwrap();
        assert_eq!(w.increment_counter(id).unwrap(), 1);
        assert_eq!(w.increment_counter(id).unwrap(), 2);
        assert_eq!(w.decrement_counter(id).unwrap(), 1);
        assert_eq!(w.decrement_counter(id).unwrap(), 0);
        assert_eq!(w.decrement_counter(id).unwrap(), -1);
        assert_eq!(mana(&w, id), 10);
    }

    #[test]
    fn apply_routes_every_action() {
        let mut w = world();
        let mut rng = SimRng::new(0);
        let id = w.spawn(CritterBuilder::new().mana(100).build(), pos(5, 5)).unwrap();

        assert_eq!(w.apply(id, Action::MoveForward, &mut rng).unwrap(), ActionOutcome::Move(MoveOutcome::Moved));
        assert_eq!(w.apply(id, Action::TurnLeft, &mut rng).unwrap(), ActionOutcome::Turned(CardinalDirection::West));
        assert_eq!(w.apply(id, Action::TurnRight, &mut rng).unwrap(), ActionOutcome::Turned(CardinalDirection::North));
        assert_eq!(w.apply(id, Action::IncrementCounter, &mut rng).unwrap(), ActionOutcome::Counted(1));
        assert_eq!(w.apply(id, Action::DecrementCounter, &mut rng).unwrap(), ActionOutcome::Counted(0));
        assert_eq!(w.apply(id, Action::StareOffIntoSpace, &mut rng).unwrap(), ActionOutcome::Idle);
        match w.apply(id, Action::Reproduce, &mut rng).unwrap() {
            ActionOutcome::Reproduced(born) => assert_eq!(born.len(), 2),
            other => panic!("unexpected outcome {other:?}"),
        }
        assert_eq!(mana(&w, id), 100 - 1 - 1 - 1 - 10);
    }

    #[test]
    fn invariants_survive_random_churn() {
        let mut w = world();
        let mut rng = SimRng::new(2024);
        let mut ids = Vec::new();
        for i in 0..20 {
            let c = if i % 3 == 0 { predator(1) } else { grazer(0) };
            let at = pos(rng.gen_range(0..10), rng.gen_range(0..10));
            ids.push(w.spawn(c, at).unwrap());
        }
        for _ in 0..500 {
            let id = *rng.choose(&ids).unwrap();
            if !w.contains(id) {
                continue;
            }
            let action = *rng.choose(&Action::ALL).unwrap();
            let outcome = w.apply(id, action, &mut rng).unwrap();
            if let ActionOutcome::Reproduced(born) = outcome {
                ids.extend(born);
            }
            if rng.gen_bool(0.05) {
                let target = pos(rng.gen_range(-1..11), rng.gen_range(-1..11));
                w.place(id, target).unwrap();
            }
            w.check_invariants().unwrap();
        }
    }
}
