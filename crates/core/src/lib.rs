pub mod game;
pub mod state;
pub mod types;
pub mod world;

pub use game::Game;
pub use state::{BehaviorState, Checkpoint, GameState, Monster};
pub use types::*;
pub use world::{
    DoorHotspot, Location, MonsterSpawn, Obstacle, TransitionEdge, WorldMap, patrol_route,
};
