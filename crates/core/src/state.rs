use std::collections::BTreeSet;

use crate::types::*;
use crate::world::{MonsterSpawn, WorldMap};

/// Behavior-private scratch data. Carried as a per-variant payload and
/// lazily (re)initialized the first tick a behavior runs, so switching a
/// monster's behavior can never leak stale fields across strategies.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum BehaviorState {
    #[default]
    None,
    Jump {
        charge: u32,
        impulse: Option<Vec2>,
    },
    Crazy {
        timer: u32,
        flip_at: u32,
        dir: Vec2,
    },
    StreetPatrol {
        waypoint: usize,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub struct Monster {
    pub pos: Vec2,
    pub size: f32,
    pub speed: f32,
    pub direction: f32,
    pub kind: MonsterKind,
    pub behavior: Behavior,
    pub state: BehaviorState,
}

impl Monster {
    pub fn from_spawn(spawn: &MonsterSpawn) -> Self {
        Self {
            pos: spawn.pos,
            size: spawn.size,
            speed: spawn.speed,
            direction: spawn.direction,
            kind: spawn.kind,
            behavior: spawn.behavior,
            state: BehaviorState::None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Checkpoint {
    pub pos: Vec2,
    pub location: usize,
}

/// The single mutable world state. Owned by `Game`, mutated only inside a
/// tick or a lifecycle call, read by the renderer between ticks.
pub struct GameState {
    pub player_name: String,
    pub player: Vec2,
    pub hearts: u8,
    pub location: usize,
    pub checkpoint: Checkpoint,
    pub invincible: bool,
    pub invincibility_timer: u32,
    pub phase: RunPhase,
    pub visited: BTreeSet<usize>,
    /// Runtime monster state, one list per location index. Spawned once per
    /// run; monsters keep their positions and timers across location
    /// re-entry by explicit policy.
    pub monsters: Vec<Vec<Monster>>,
}

impl GameState {
    pub fn new_run(player_name: &str, world: &WorldMap) -> Self {
        let name = player_name.trim();
        Self {
            player_name: if name.is_empty() { "Hero".to_string() } else { name.to_string() },
            player: Vec2::new(400.0, 300.0),
            hearts: MAX_HEARTS,
            location: 0,
            checkpoint: Checkpoint { pos: Vec2::new(100.0, 300.0), location: 0 },
            invincible: false,
            invincibility_timer: 0,
            phase: RunPhase::NotRunning,
            visited: BTreeSet::from([0]),
            monsters: world
                .locations()
                .iter()
                .map(|location| location.spawns.iter().map(Monster::from_spawn).collect())
                .collect(),
        }
    }

    pub fn is_running(&self) -> bool {
        self.phase == RunPhase::Running
    }
}
