//! Simulation orchestrator: owns the game state, the seeded RNG, and the
//! fixed per-tick component ordering. This file wires focused submodules
//! together; the per-frame work lives in `tick`.

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::SeedableRng;

use crate::state::{GameState, Monster};
use crate::types::*;
use crate::world::{Location, WorldMap};

mod ai;
mod chase;
mod collision;
mod lifecycle;
mod player;
mod tick;

#[cfg(test)]
mod test_support;

use chase::ChaseTrigger;

pub struct Game {
    seed: u64,
    tick: u64,
    rng: ChaCha8Rng,
    world: WorldMap,
    state: GameState,
    chase: ChaseTrigger,
    /// Audio signals produced this frame; drained by the frontend. Never
    /// read back by the simulation.
    audio_events: Vec<AudioEvent>,
}

impl Game {
    pub fn new(seed: u64, world: WorldMap) -> Self {
        let state = GameState::new_run("Hero", &world);
        Self {
            seed,
            tick: 0,
            rng: ChaCha8Rng::seed_from_u64(seed),
            world,
            state,
            chase: ChaseTrigger::default(),
            audio_events: Vec::new(),
        }
    }

    pub fn current_tick(&self) -> u64 {
        self.tick
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn world(&self) -> &WorldMap {
        &self.world
    }

    pub fn active_location(&self) -> &Location {
        &self.world.locations()[self.state.location]
    }

    pub fn active_monsters(&self) -> &[Monster] {
        &self.state.monsters[self.state.location]
    }

    /// True while the proximity policy considers the player chased; the
    /// matching start/stop transitions arrive as audio events.
    pub fn is_being_chased(&self) -> bool {
        self.chase.is_chasing()
    }

    /// Hand the frame's audio signals to the caller. Dropping the result is
    /// a valid headless-audio configuration.
    pub fn take_audio_events(&mut self) -> Vec<AudioEvent> {
        std::mem::take(&mut self.audio_events)
    }

    pub fn snapshot_hash(&self) -> u64 {
        use std::hash::Hasher;
        use xxhash_rust::xxh3::Xxh3;

        let mut hasher = Xxh3::new();
        hasher.write_u64(self.seed);
        hasher.write_u64(self.tick);
        hasher.write_u32(self.state.player.x.to_bits());
        hasher.write_u32(self.state.player.y.to_bits());
        hasher.write_u8(self.state.hearts);
        hasher.write_u8(self.state.phase as u8);
        hasher.write_u64(self.state.location as u64);
        hasher.write_u32(self.state.invincibility_timer);
        for monsters in &self.state.monsters {
            for monster in monsters {
                hasher.write_u32(monster.pos.x.to_bits());
                hasher.write_u32(monster.pos.y.to_bits());
            }
        }
        hasher.finish()
    }

    fn emit(&mut self, event: AudioEvent) {
        self.audio_events.push(event);
    }
}
