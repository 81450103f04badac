//! Input-soak harness: hammer seeded runs with random held-key patterns
//! and abort if a simulation invariant breaks. Complements the proptest
//! suite with much longer runs.

use clap::Parser;
use game_core::{Game, InputState, MAX_HEARTS, WorldMap};
use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::{Rng, SeedableRng};

#[derive(Parser)]
#[command(about = "Random-input soak runs against the simulation invariants")]
struct Args {
    /// Number of runs; run i uses seed base + i
    #[arg(long, default_value_t = 50)]
    runs: u64,

    /// Ticks per run
    #[arg(long, default_value_t = 5000)]
    ticks: u64,

    /// Base seed
    #[arg(long, default_value_t = 1)]
    seed: u64,
}

fn main() {
    let args = Args::parse();

    for run in 0..args.runs {
        let seed = args.seed.wrapping_add(run);
        let mut rng = ChaCha8Rng::seed_from_u64(seed ^ 0x5eed_f00d);
        let mut game = Game::new(seed, WorldMap::build_default());
        game.start_run("Soak");

        for _ in 0..args.ticks {
            let bits = rng.next_u32();
            let input = InputState {
                up: bits & 0x01 != 0,
                down: bits & 0x02 != 0,
                left: bits & 0x04 != 0,
                right: bits & 0x08 != 0,
                // Interact pulses are rare, like a human tapping space.
                interact: bits & 0xF0 == 0xF0,
            };
            game.tick(input);
            check_invariants(&game);
        }

        println!(
            "run {run}: seed={seed} tick={} phase={:?} hash=0x{:016x}",
            game.current_tick(),
            game.state().phase,
            game.snapshot_hash()
        );
    }
}

fn check_invariants(game: &Game) {
    let player = game.state().player;
    assert!(
        (10.0..=770.0).contains(&player.x) && (10.0..=570.0).contains(&player.y),
        "player escaped the playfield at {player:?} on tick {}",
        game.current_tick()
    );
    assert!(game.state().hearts <= MAX_HEARTS);
    for monster in game.active_monsters() {
        assert!(
            (0.0..=800.0 - monster.size).contains(&monster.pos.x)
                && (0.0..=600.0 - monster.size).contains(&monster.pos.y),
            "{:?} monster escaped at {:?} on tick {}",
            monster.behavior,
            monster.pos,
            game.current_tick()
        );
    }
}
