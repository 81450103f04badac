use std::ops::{Add, AddAssign, Mul, Sub};

use serde::{Deserialize, Serialize};

/// Playfield the whole simulation lives in, in canvas units.
pub const PLAYFIELD_WIDTH: f32 = 800.0;
pub const PLAYFIELD_HEIGHT: f32 = 600.0;

/// Player movement is clamped to this inset rectangle.
pub const PLAYER_MIN_X: f32 = 10.0;
pub const PLAYER_MAX_X: f32 = 770.0;
pub const PLAYER_MIN_Y: f32 = 10.0;
pub const PLAYER_MAX_Y: f32 = 570.0;

/// Collision probe box edge. Smaller than the 25px render box; both sizes are
/// load-bearing for existing layouts, so they stay distinct.
pub const PLAYER_PROBE: f32 = 20.0;
pub const PLAYER_RENDER_SIZE: f32 = 25.0;

/// Displacement per held direction key per tick. Diagonals compose additively
/// and are therefore faster; kept as-is.
pub const PLAYER_MOVE_SPEED: f32 = 3.0;

pub const MAX_HEARTS: u8 = 3;
pub const INVINCIBILITY_TICKS: u32 = 120;
pub const KNOCKBACK_DISTANCE: f32 = 80.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn length(self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    pub fn distance_to(self, other: Vec2) -> f32 {
        (other - self).length()
    }

    /// Unit vector pointing at `target`, or zero when already there.
    pub fn toward(self, target: Vec2) -> Vec2 {
        let delta = target - self;
        let len = delta.length();
        if len > 0.0 { Vec2::new(delta.x / len, delta.y / len) } else { Vec2::ZERO }
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Vec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;
    fn mul(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

/// AI strategy selector for a monster. `Drift` is the fallback bounce patrol
/// used for any tag the content doesn't recognize.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Behavior {
    Chase,
    Hunt,
    Guard,
    GuardTreasure,
    Patrol,
    Swarm,
    Jump,
    Pack,
    Crazy,
    StreetPatrol,
    Drift,
}

impl Behavior {
    pub fn from_tag(tag: &str) -> Behavior {
        match tag {
            "chase" => Behavior::Chase,
            "hunt" => Behavior::Hunt,
            "guard" => Behavior::Guard,
            "guard_treasure" => Behavior::GuardTreasure,
            "patrol" => Behavior::Patrol,
            "swarm" => Behavior::Swarm,
            "jump" => Behavior::Jump,
            "pack" => Behavior::Pack,
            "crazy" => Behavior::Crazy,
            "street_patrol" => Behavior::StreetPatrol,
            _ => Behavior::Drift,
        }
    }

    /// Behaviors that count as actively pursuing the player for the
    /// chase-audio policy.
    pub fn is_pursuit(self) -> bool {
        matches!(self, Behavior::Crazy | Behavior::Chase | Behavior::Hunt)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MonsterKind {
    Squirrel,
    Ghost,
    Bee,
    Wolf,
    Frog,
    Dragon,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObstacleKind {
    Tree,
    Bench,
    Flower,
    Counter,
    Water,
}

/// Simulation lifecycle. `Running` is the only state in which ticks do work.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunPhase {
    #[default]
    NotRunning,
    Running,
    GameOver,
    Victory,
}

/// Which looping ambient track a location asks for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AmbientKey {
    Home,
    Park,
    Friend,
    Theater,
    Garden,
    Forest,
    Lake,
    End,
}

/// Fire-and-forget audio signals emitted by the core and drained by the
/// frontend once per frame. A caller that drops them gets a correct
/// headless simulation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AudioEvent {
    Ambient(AmbientKey),
    ChaseStarted,
    ChaseStopped,
    Damage,
    Interaction,
    LocationChange,
}

/// Snapshot of the movement keys held this frame plus the discrete
/// interact pulse.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputState {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub interact: bool,
}

impl InputState {
    pub fn any_direction(self) -> bool {
        self.up || self.down || self.left || self.right
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameError {
    NoSuchLocation,
    LocationNotVisited,
}

impl std::fmt::Display for GameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameError::NoSuchLocation => write!(f, "no such location"),
            GameError::LocationNotVisited => write!(f, "location not visited yet"),
        }
    }
}

impl std::error::Error for GameError {}
