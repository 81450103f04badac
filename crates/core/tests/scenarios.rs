use core::{AudioEvent, Game, InputState, MAX_HEARTS, RunPhase, WorldMap};

fn running_game(seed: u64) -> Game {
    let mut game = Game::new(seed, WorldMap::build_default());
    game.start_run("Scenario");
    game.take_audio_events();
    game
}

fn walk_into_park(game: &mut Game) {
    let right = InputState { right: true, ..InputState::default() };
    for _ in 0..120 {
        game.tick(right);
    }
    game.tick(InputState { interact: true, ..InputState::default() });
    assert_eq!(game.active_location().name, "Neighborhood Park");
}

#[test]
fn home_is_monster_free_and_harmless() {
    let mut game = running_game(7);
    assert!(game.active_monsters().is_empty());

    for t in 0..400u64 {
        let input = match (t / 40) % 4 {
            0 => InputState { right: true, ..InputState::default() },
            1 => InputState { down: true, ..InputState::default() },
            2 => InputState { left: true, ..InputState::default() },
            _ => InputState { up: true, ..InputState::default() },
        };
        game.tick(input);
    }
    assert_eq!(game.state().hearts, MAX_HEARTS);
    assert!(!game.take_audio_events().contains(&AudioEvent::Damage));
}

#[test]
fn holding_left_pins_the_player_at_the_west_edge() {
    let mut game = running_game(7);
    let left = InputState { left: true, ..InputState::default() };
    for _ in 0..140 {
        game.tick(left);
    }
    assert_eq!(game.state().player.x, 10.0);

    game.tick(left);
    assert_eq!(game.state().player.x, 10.0);
}

/// Standing in the park among pursuit monsters: hearts only ever drop one
/// at a time, and never faster than the invincibility window allows.
#[test]
fn damage_cadence_respects_the_invincibility_window() {
    let mut game = running_game(42);
    walk_into_park(&mut game);

    let mut hearts = game.state().hearts;
    let mut last_drop: Option<u64> = None;
    for t in 0..1200u64 {
        game.tick(InputState::default());
        let now = game.state().hearts;
        if now < hearts {
            assert_eq!(now, hearts - 1, "hearts must drop one at a time");
            if let Some(previous) = last_drop {
                assert!(
                    t - previous >= 120,
                    "two hits {} ticks apart, inside the invincibility window",
                    t - previous
                );
            }
            last_drop = Some(t);
            hearts = now;
        }
        if game.state().phase == RunPhase::GameOver {
            assert_eq!(game.state().hearts, 0);
            break;
        }
    }
}

#[test]
fn checkpoint_restart_is_reachable_from_a_game_over() {
    let mut game = running_game(42);
    walk_into_park(&mut game);

    // Idle among the park monsters until the run ends, then respawn.
    for _ in 0..100_000u64 {
        game.tick(InputState::default());
        if game.state().phase == RunPhase::GameOver {
            break;
        }
    }
    if game.state().phase == RunPhase::GameOver {
        game.restart_from_checkpoint();
        assert_eq!(game.state().phase, RunPhase::Running);
        assert_eq!(game.state().hearts, MAX_HEARTS);
        assert_eq!(game.state().location, game.state().checkpoint.location);
    }
}
