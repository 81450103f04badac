//! Shared fixtures for the simulation tests.

use super::*;
use crate::state::BehaviorState;
use crate::world;

/// A running game with every spawn table emptied, so movement and
/// lifecycle tests never take incidental damage. Startup audio is drained.
pub(super) fn monster_free_game() -> Game {
    let mut game = Game::new(42, WorldMap::build_default());
    game.start_run("Tester");
    for monsters in &mut game.state.monsters {
        monsters.clear();
    }
    game.take_audio_events();
    game
}

/// Like `monster_free_game`, placed in the park for its obstacle layout.
pub(super) fn game_in_park() -> Game {
    let mut game = monster_free_game();
    game.state.location = world::PARK;
    game.state.visited.insert(world::PARK);
    game
}

pub(super) fn held_right() -> InputState {
    InputState { right: true, ..InputState::default() }
}

pub(super) fn held_left() -> InputState {
    InputState { left: true, ..InputState::default() }
}

pub(super) fn interact_pulse() -> InputState {
    InputState { interact: true, ..InputState::default() }
}

pub(super) fn test_monster(behavior: Behavior, pos: Vec2) -> Monster {
    Monster {
        pos,
        size: 40.0,
        speed: 2.0,
        direction: 1.0,
        kind: MonsterKind::Wolf,
        behavior,
        state: BehaviorState::None,
    }
}

/// A monster that never moves; collision tests park the player on it.
pub(super) fn stationary_monster(pos: Vec2) -> Monster {
    Monster { speed: 0.0, ..test_monster(Behavior::Drift, pos) }
}
