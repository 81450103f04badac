//! Run lifecycle and the location graph walk: starting, checkpoint
//! restarts, map jumps, and the interact pulse that drives transitions and
//! doors. These are the entry points UI collaborators call between frames.

use super::*;
use crate::state::{Checkpoint, GameState, Monster};
use crate::world::TransitionEdge;

/// Interacting this close (per axis) to a transition edge takes it.
const TRANSITION_REACH: f32 = 80.0;

impl Game {
    /// Begin a fresh run. Reseeds the RNG so a given seed always produces
    /// the same run regardless of what happened before.
    pub fn start_run(&mut self, player_name: &str) {
        self.rng = ChaCha8Rng::seed_from_u64(self.seed);
        self.tick = 0;
        self.state = GameState::new_run(player_name, &self.world);
        self.state.phase = RunPhase::Running;
        self.chase.reset();
        self.audio_events.clear();
        self.emit(AudioEvent::Ambient(self.world.locations()[0].ambient));
    }

    /// Respawn at the last checkpoint with full hearts. Monsters respawn
    /// too; only the checkpoint and the visited set survive.
    pub fn restart_from_checkpoint(&mut self) {
        self.state.hearts = MAX_HEARTS;
        self.state.location = self.state.checkpoint.location;
        self.state.player = self.state.checkpoint.pos;
        self.state.invincible = false;
        self.state.invincibility_timer = 0;
        self.state.phase = RunPhase::Running;
        for (index, location) in self.world.locations().iter().enumerate() {
            self.state.monsters[index] = location.spawns.iter().map(Monster::from_spawn).collect();
        }
        if let Some(event) = self.chase.reset() {
            self.emit(event);
        }
        self.emit(AudioEvent::Ambient(self.world.locations()[self.state.location].ambient));
    }

    /// Map-screen travel. Only previously visited locations are valid
    /// targets.
    pub fn jump_to_location(&mut self, index: usize) -> Result<(), GameError> {
        if index >= self.world.len() {
            return Err(GameError::NoSuchLocation);
        }
        if !self.state.visited.contains(&index) {
            return Err(GameError::LocationNotVisited);
        }
        self.state.location = index;
        self.state.player = Vec2::new(400.0, 300.0);
        self.state.phase = RunPhase::Running;
        self.emit(AudioEvent::Ambient(self.world.locations()[index].ambient));
        Ok(())
    }

    /// Teleport for the headless runner: marks the destination visited
    /// first, then travels there like a map jump.
    pub fn enter_location(&mut self, index: usize) -> Result<(), GameError> {
        if index >= self.world.len() {
            return Err(GameError::NoSuchLocation);
        }
        self.state.visited.insert(index);
        self.jump_to_location(index)
    }

    /// Drop an extra monster into a location at runtime. Regular content
    /// comes from the world's spawn tables; this is for the headless tools.
    pub fn spawn_monster(&mut self, location: usize, monster: Monster) -> Result<(), GameError> {
        if location >= self.world.len() {
            return Err(GameError::NoSuchLocation);
        }
        self.state.monsters[location].push(monster);
        Ok(())
    }

    /// Resolve the discrete interact pulse: door hotspots win over
    /// transition edges; at most one thing happens per pulse.
    pub(super) fn interact(&mut self) {
        let player = self.state.player;
        let location = &self.world.locations()[self.state.location];
        let door =
            location.doors.iter().find(|door| door.overlaps_box(player, PLAYER_PROBE)).copied();
        let next = location.next;
        let previous = location.previous;

        if let Some(door) = door {
            self.state.location = door.to;
            self.state.visited.insert(door.to);
            self.state.player = door.spawn;
            self.emit(AudioEvent::Interaction);
            self.emit(AudioEvent::Ambient(self.world.locations()[door.to].ambient));
            return;
        }

        let near = |edge: &TransitionEdge| {
            (player.x - edge.at.x).abs() < TRANSITION_REACH
                && (player.y - edge.at.y).abs() < TRANSITION_REACH
        };
        if let Some(edge) = next.filter(near) {
            self.change_location(edge.to);
        } else if let Some(edge) = previous.filter(near) {
            self.change_location(edge.to);
        }
    }

    fn change_location(&mut self, to: usize) {
        let destination = &self.world.locations()[to];
        let ambient = destination.ambient;
        let has_previous = destination.previous.is_some();
        let has_next = destination.next.is_some();
        let is_checkpoint = destination.is_checkpoint;

        self.state.location = to;
        self.emit(AudioEvent::LocationChange);
        self.emit(AudioEvent::Ambient(ambient));
        self.state.visited.insert(to);

        // Arrivals snap to the side they came in from.
        if has_previous && self.state.player.x > 400.0 {
            self.state.player.x = 100.0;
        } else if has_next && self.state.player.x < 400.0 {
            self.state.player.x = 700.0;
        }

        if is_checkpoint {
            self.state.checkpoint = Checkpoint { pos: self.state.player, location: to };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;
    use crate::world;

    #[test]
    fn start_run_resets_state_and_announces_ambient() {
        let mut game = Game::new(99, WorldMap::build_default());
        game.start_run("  ");
        assert_eq!(game.state().player_name, "Hero");
        assert_eq!(game.state().hearts, MAX_HEARTS);
        assert_eq!(game.state().location, world::HOME);
        assert_eq!(game.state().phase, RunPhase::Running);
        assert_eq!(game.take_audio_events(), vec![AudioEvent::Ambient(AmbientKey::Home)]);
    }

    #[test]
    fn identical_seeds_replay_identically() {
        let run = |seed: u64| {
            let mut game = Game::new(seed, WorldMap::build_default());
            game.start_run("Hero");
            game.state.location = world::PARK;
            for _ in 0..240 {
                game.tick(held_right());
            }
            game.snapshot_hash()
        };
        assert_eq!(run(12345), run(12345));
        assert_ne!(run(12345), run(54321));
    }

    #[test]
    fn interacting_near_the_forward_edge_changes_location() {
        let mut game = monster_free_game();
        game.state.player = Vec2::new(700.0, 300.0);
        game.tick(interact_pulse());
        assert_eq!(game.state().location, world::PARK);
        assert!(game.state().visited.contains(&world::PARK));

        let events = game.take_audio_events();
        assert!(events.contains(&AudioEvent::LocationChange));
        assert!(events.contains(&AudioEvent::Ambient(AmbientKey::Park)));
    }

    #[test]
    fn interacting_far_from_any_edge_does_nothing() {
        let mut game = monster_free_game();
        game.state.player = Vec2::new(400.0, 300.0);
        game.tick(interact_pulse());
        assert_eq!(game.state().location, world::HOME);
    }

    #[test]
    fn arrival_snaps_to_the_entry_side() {
        let mut game = monster_free_game();
        game.state.player = Vec2::new(700.0, 300.0);
        game.tick(interact_pulse());
        // Entering the park from the west: snapped to x=100.
        assert_eq!(game.state().location, world::PARK);
        assert_eq!(game.state().player.x, 100.0);
    }

    #[test]
    fn entering_a_checkpoint_location_updates_the_checkpoint() {
        let mut game = monster_free_game();
        game.state.location = world::PARK;
        game.state.player = Vec2::new(700.0, 300.0);
        game.tick(interact_pulse());
        assert_eq!(game.state().location, world::FRIEND_HOUSE);
        assert_eq!(game.state().checkpoint.location, world::FRIEND_HOUSE);
        assert_eq!(game.state().checkpoint.pos, game.state().player);
    }

    #[test]
    fn restart_returns_to_the_checkpoint_with_full_hearts_and_fresh_monsters() {
        let mut game = monster_free_game();
        game.state.checkpoint = Checkpoint { pos: Vec2::new(123.0, 234.0), location: world::LAKE };
        game.state.hearts = 1;
        game.state.location = world::WORLD_END;
        game.state.monsters[world::WORLD_END].clear();

        game.restart_from_checkpoint();
        assert_eq!(game.state().hearts, MAX_HEARTS);
        assert_eq!(game.state().location, world::LAKE);
        assert_eq!(game.state().player, Vec2::new(123.0, 234.0));
        assert_eq!(
            game.state().monsters[world::WORLD_END].len(),
            game.world().locations()[world::WORLD_END].spawns.len()
        );
        assert!(game.take_audio_events().contains(&AudioEvent::Ambient(AmbientKey::Lake)));
    }

    #[test]
    fn map_jump_requires_a_visited_destination() {
        let mut game = monster_free_game();
        assert_eq!(game.jump_to_location(world::LAKE), Err(GameError::LocationNotVisited));
        assert_eq!(game.jump_to_location(42), Err(GameError::NoSuchLocation));

        game.state.visited.insert(world::LAKE);
        assert_eq!(game.jump_to_location(world::LAKE), Ok(()));
        assert_eq!(game.state().location, world::LAKE);
        assert_eq!(game.state().player, Vec2::new(400.0, 300.0));
    }

    #[test]
    fn enter_location_marks_the_destination_visited() {
        let mut game = monster_free_game();
        assert!(!game.state().visited.contains(&world::FOREST));
        assert_eq!(game.enter_location(world::FOREST), Ok(()));
        assert_eq!(game.state().location, world::FOREST);
        assert!(game.state().visited.contains(&world::FOREST));
        assert_eq!(game.enter_location(99), Err(GameError::NoSuchLocation));
    }

    #[test]
    fn spawned_monsters_join_the_location_roster() {
        let mut game = monster_free_game();
        let monster = test_monster(Behavior::Chase, Vec2::new(600.0, 300.0));
        assert_eq!(game.spawn_monster(world::HOME, monster), Ok(()));
        assert_eq!(game.active_monsters().len(), 1);
        assert_eq!(game.spawn_monster(99, test_monster(Behavior::Drift, Vec2::ZERO)), Err(GameError::NoSuchLocation));
    }

    #[test]
    fn door_hotspot_enters_the_interior_and_back_out() {
        let mut game = monster_free_game();
        // Stand on Home's front door.
        game.state.player = Vec2::new(150.0, 360.0);
        game.tick(interact_pulse());
        assert_eq!(game.state().location, world::HOME_INTERIOR);
        assert_eq!(game.state().player, Vec2::new(400.0, 450.0));
        assert!(game.state().visited.contains(&world::HOME_INTERIOR));
        let events = game.take_audio_events();
        assert!(events.contains(&AudioEvent::Interaction));

        // Stand on the interior exit door.
        game.state.player = Vec2::new(380.0, 530.0);
        game.tick(interact_pulse());
        assert_eq!(game.state().location, world::HOME);
        assert_eq!(game.state().player, Vec2::new(170.0, 350.0));
    }
}
