//! Static world content: the location graph, its obstacles, monster spawn
//! tables, transition edges and patrol routes. Built once per process and
//! never mutated; runtime monster state lives in `GameState`.

use crate::types::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Obstacle {
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    pub kind: ObstacleKind,
}

impl Obstacle {
    pub const fn new(x: f32, y: f32, width: f32, height: f32, kind: ObstacleKind) -> Self {
        Self { pos: Vec2::new(x, y), width, height, kind }
    }

    /// Axis-aligned overlap test against a square probe box anchored at its
    /// top-left corner.
    pub fn overlaps_box(&self, corner: Vec2, size: f32) -> bool {
        corner.x < self.pos.x + self.width
            && corner.x + size > self.pos.x
            && corner.y < self.pos.y + self.height
            && corner.y + size > self.pos.y
    }
}

/// An edge of the location graph: interacting near `at` moves the player to
/// location `to`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransitionEdge {
    pub at: Vec2,
    pub to: usize,
}

/// A door rectangle the interact pulse can trigger while the player probe
/// box overlaps it; used to enter and model interior rooms.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DoorHotspot {
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    pub to: usize,
    pub spawn: Vec2,
}

impl DoorHotspot {
    pub fn overlaps_box(&self, corner: Vec2, size: f32) -> bool {
        corner.x < self.pos.x + self.width
            && corner.x + size > self.pos.x
            && corner.y < self.pos.y + self.height
            && corner.y + size > self.pos.y
    }
}

/// Initial monster state as authored in the world tables. Monsters are
/// square; `size` is the box edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MonsterSpawn {
    pub pos: Vec2,
    pub size: f32,
    pub speed: f32,
    pub direction: f32,
    pub kind: MonsterKind,
    pub behavior: Behavior,
}

impl MonsterSpawn {
    const fn new(
        x: f32,
        y: f32,
        size: f32,
        speed: f32,
        direction: f32,
        kind: MonsterKind,
        behavior: Behavior,
    ) -> Self {
        Self { pos: Vec2::new(x, y), size, speed, direction, kind, behavior }
    }
}

pub struct Location {
    pub name: &'static str,
    pub theme: &'static str,
    pub description: &'static str,
    pub ambient: AmbientKey,
    pub obstacles: Vec<Obstacle>,
    pub spawns: Vec<MonsterSpawn>,
    pub next: Option<TransitionEdge>,
    pub previous: Option<TransitionEdge>,
    pub doors: Vec<DoorHotspot>,
    pub is_checkpoint: bool,
    pub is_final: bool,
    /// Set for interior rooms; the index of the outdoor location they sit in.
    pub interior_of: Option<usize>,
}

impl Location {
    fn new(name: &'static str, theme: &'static str, description: &'static str) -> Self {
        Self {
            name,
            theme,
            description,
            ambient: AmbientKey::Home,
            obstacles: Vec::new(),
            spawns: Vec::new(),
            next: None,
            previous: None,
            doors: Vec::new(),
            is_checkpoint: false,
            is_final: false,
            interior_of: None,
        }
    }
}

pub const HOME: usize = 0;
pub const PARK: usize = 1;
pub const FRIEND_HOUSE: usize = 2;
pub const THEATER: usize = 3;
pub const GARDEN: usize = 4;
pub const FOREST: usize = 5;
pub const LAKE: usize = 6;
pub const WORLD_END: usize = 7;
pub const HOME_INTERIOR: usize = 8;
pub const FRIEND_INTERIOR: usize = 9;

pub struct WorldMap {
    locations: Vec<Location>,
}

impl WorldMap {
    pub fn build_default() -> Self {
        let mut home = Location::new("Home", "\u{1f3e0}", "Your cozy home with a pool outside");
        home.ambient = AmbientKey::Home;
        home.next = Some(TransitionEdge { at: Vec2::new(750.0, 300.0), to: PARK });
        home.doors.push(DoorHotspot {
            pos: Vec2::new(140.0, 340.0),
            width: 35.0,
            height: 80.0,
            to: HOME_INTERIOR,
            spawn: Vec2::new(400.0, 450.0),
        });

        let mut park = Location::new(
            "Neighborhood Park",
            "\u{1f333}",
            "A beautiful park with trees and flowers",
        );
        park.ambient = AmbientKey::Park;
        park.next = Some(TransitionEdge { at: Vec2::new(750.0, 300.0), to: FRIEND_HOUSE });
        park.previous = Some(TransitionEdge { at: Vec2::new(50.0, 300.0), to: HOME });
        park.obstacles = vec![
            Obstacle::new(200.0, 200.0, 60.0, 60.0, ObstacleKind::Tree),
            Obstacle::new(400.0, 150.0, 80.0, 40.0, ObstacleKind::Bench),
        ];
        park.spawns = vec![
            MonsterSpawn::new(200.0, 350.0, 45.0, 2.0, 1.0, MonsterKind::Squirrel, Behavior::Crazy),
            MonsterSpawn::new(
                100.0,
                400.0,
                40.0,
                1.4,
                1.0,
                MonsterKind::Squirrel,
                Behavior::StreetPatrol,
            ),
            MonsterSpawn::new(
                600.0,
                400.0,
                40.0,
                1.4,
                1.0,
                MonsterKind::Squirrel,
                Behavior::StreetPatrol,
            ),
        ];

        let mut friend = Location::new(
            "Friend's House",
            "\u{1f3e1}",
            "Your friend's house - safe checkpoint",
        );
        friend.ambient = AmbientKey::Friend;
        friend.next = Some(TransitionEdge { at: Vec2::new(750.0, 300.0), to: THEATER });
        friend.previous = Some(TransitionEdge { at: Vec2::new(50.0, 300.0), to: PARK });
        friend.is_checkpoint = true;
        friend.doors.push(DoorHotspot {
            pos: Vec2::new(140.0, 340.0),
            width: 35.0,
            height: 80.0,
            to: FRIEND_INTERIOR,
            spawn: Vec2::new(400.0, 450.0),
        });

        let mut theater = Location::new("Movie Theater", "\u{1f3ac}", "The local movie theater");
        theater.ambient = AmbientKey::Theater;
        theater.next = Some(TransitionEdge { at: Vec2::new(750.0, 300.0), to: GARDEN });
        theater.previous = Some(TransitionEdge { at: Vec2::new(50.0, 300.0), to: FRIEND_HOUSE });
        theater.obstacles = vec![Obstacle::new(150.0, 250.0, 100.0, 50.0, ObstacleKind::Counter)];
        theater.spawns = vec![
            MonsterSpawn::new(400.0, 200.0, 50.0, 2.5, 1.0, MonsterKind::Ghost, Behavior::Crazy),
            MonsterSpawn::new(
                200.0,
                350.0,
                40.0,
                1.3,
                1.0,
                MonsterKind::Ghost,
                Behavior::StreetPatrol,
            ),
            MonsterSpawn::new(
                550.0,
                350.0,
                40.0,
                1.3,
                -1.0,
                MonsterKind::Ghost,
                Behavior::StreetPatrol,
            ),
        ];

        let mut garden =
            Location::new("Garden Center", "\u{1f33a}", "Beautiful gardens with flowers");
        garden.ambient = AmbientKey::Garden;
        garden.next = Some(TransitionEdge { at: Vec2::new(750.0, 300.0), to: FOREST });
        garden.previous = Some(TransitionEdge { at: Vec2::new(50.0, 300.0), to: THEATER });
        garden.obstacles = vec![
            Obstacle::new(200.0, 300.0, 40.0, 40.0, ObstacleKind::Flower),
            Obstacle::new(350.0, 200.0, 40.0, 40.0, ObstacleKind::Flower),
        ];
        garden.spawns = vec![
            MonsterSpawn::new(400.0, 350.0, 35.0, 2.0, 1.0, MonsterKind::Bee, Behavior::Crazy),
            MonsterSpawn::new(
                150.0,
                450.0,
                30.0,
                1.5,
                1.0,
                MonsterKind::Bee,
                Behavior::StreetPatrol,
            ),
            MonsterSpawn::new(
                600.0,
                400.0,
                30.0,
                1.5,
                -1.0,
                MonsterKind::Bee,
                Behavior::StreetPatrol,
            ),
        ];

        let mut forest = Location::new("Forest Path", "\u{1f332}", "Deep forest with tall trees");
        forest.ambient = AmbientKey::Forest;
        forest.next = Some(TransitionEdge { at: Vec2::new(750.0, 300.0), to: LAKE });
        forest.previous = Some(TransitionEdge { at: Vec2::new(50.0, 300.0), to: GARDEN });
        forest.obstacles = vec![
            Obstacle::new(100.0, 150.0, 50.0, 80.0, ObstacleKind::Tree),
            Obstacle::new(450.0, 100.0, 55.0, 90.0, ObstacleKind::Tree),
        ];
        forest.spawns = vec![
            MonsterSpawn::new(300.0, 350.0, 55.0, 2.5, 1.0, MonsterKind::Wolf, Behavior::Crazy),
            MonsterSpawn::new(
                150.0,
                400.0,
                45.0,
                1.8,
                1.0,
                MonsterKind::Wolf,
                Behavior::StreetPatrol,
            ),
            MonsterSpawn::new(
                650.0,
                400.0,
                45.0,
                1.8,
                -1.0,
                MonsterKind::Wolf,
                Behavior::StreetPatrol,
            ),
        ];

        let mut lake = Location::new("Crystal Lake", "\u{1f30a}", "A serene lake - checkpoint");
        lake.ambient = AmbientKey::Lake;
        lake.next = Some(TransitionEdge { at: Vec2::new(750.0, 300.0), to: WORLD_END });
        lake.previous = Some(TransitionEdge { at: Vec2::new(50.0, 300.0), to: FOREST });
        lake.is_checkpoint = true;
        lake.obstacles = vec![Obstacle::new(300.0, 300.0, 200.0, 150.0, ObstacleKind::Water)];
        lake.spawns = vec![
            MonsterSpawn::new(300.0, 450.0, 40.0, 2.0, 1.0, MonsterKind::Frog, Behavior::Crazy),
            MonsterSpawn::new(
                150.0,
                380.0,
                35.0,
                1.6,
                1.0,
                MonsterKind::Frog,
                Behavior::StreetPatrol,
            ),
            MonsterSpawn::new(
                600.0,
                400.0,
                35.0,
                1.6,
                -1.0,
                MonsterKind::Frog,
                Behavior::StreetPatrol,
            ),
        ];

        let mut world_end = Location::new("End of the Earth", "\u{1f3c6}", "The final destination!");
        world_end.ambient = AmbientKey::End;
        world_end.previous = Some(TransitionEdge { at: Vec2::new(50.0, 300.0), to: LAKE });
        world_end.is_final = true;
        world_end.spawns = vec![
            MonsterSpawn::new(400.0, 100.0, 70.0, 3.2, 1.0, MonsterKind::Dragon, Behavior::Crazy),
            MonsterSpawn::new(
                200.0,
                200.0,
                65.0,
                2.8,
                1.0,
                MonsterKind::Dragon,
                Behavior::GuardTreasure,
            ),
            MonsterSpawn::new(
                600.0,
                350.0,
                60.0,
                2.5,
                -1.0,
                MonsterKind::Dragon,
                Behavior::StreetPatrol,
            ),
        ];

        let mut home_interior =
            Location::new("Player's House Interior", "\u{1f3e0}", "Inside your cozy home");
        home_interior.ambient = AmbientKey::Home;
        home_interior.previous = Some(TransitionEdge { at: Vec2::new(400.0, 550.0), to: HOME });
        home_interior.interior_of = Some(HOME);
        home_interior.doors.push(DoorHotspot {
            pos: Vec2::new(375.0, 520.0),
            width: 50.0,
            height: 80.0,
            to: HOME,
            spawn: Vec2::new(170.0, 350.0),
        });

        let mut friend_interior = Location::new(
            "Friend's House Interior",
            "\u{1f3e1}",
            "Inside your friend's house",
        );
        friend_interior.ambient = AmbientKey::Friend;
        friend_interior.previous =
            Some(TransitionEdge { at: Vec2::new(400.0, 550.0), to: FRIEND_HOUSE });
        friend_interior.interior_of = Some(FRIEND_HOUSE);
        friend_interior.doors.push(DoorHotspot {
            pos: Vec2::new(375.0, 520.0),
            width: 50.0,
            height: 80.0,
            to: FRIEND_HOUSE,
            spawn: Vec2::new(170.0, 350.0),
        });

        Self {
            locations: vec![
                home,
                park,
                friend,
                theater,
                garden,
                forest,
                lake,
                world_end,
                home_interior,
                friend_interior,
            ],
        }
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    pub fn location(&self, index: usize) -> Option<&Location> {
        self.locations.get(index)
    }

    pub fn locations(&self) -> &[Location] {
        &self.locations
    }
}

impl Default for WorldMap {
    fn default() -> Self {
        Self::build_default()
    }
}

/// Ordered waypoint list for `StreetPatrol` monsters, keyed by location
/// name. Unknown locations get a flat two-point sweep.
pub fn patrol_route(location_name: &str) -> &'static [Vec2] {
    const PARK_ROUTE: [Vec2; 4] = [
        Vec2::new(100.0, 400.0),
        Vec2::new(300.0, 400.0),
        Vec2::new(500.0, 400.0),
        Vec2::new(700.0, 400.0),
    ];
    const THEATER_ROUTE: [Vec2; 3] =
        [Vec2::new(150.0, 350.0), Vec2::new(400.0, 350.0), Vec2::new(650.0, 350.0)];
    const FOREST_ROUTE: [Vec2; 4] = [
        Vec2::new(150.0, 400.0),
        Vec2::new(350.0, 300.0),
        Vec2::new(550.0, 400.0),
        Vec2::new(650.0, 350.0),
    ];
    const WORLD_END_ROUTE: [Vec2; 4] = [
        Vec2::new(150.0, 200.0),
        Vec2::new(400.0, 150.0),
        Vec2::new(650.0, 200.0),
        Vec2::new(400.0, 250.0),
    ];
    const DEFAULT_ROUTE: [Vec2; 2] = [Vec2::new(100.0, 350.0), Vec2::new(700.0, 350.0)];

    match location_name {
        "Neighborhood Park" => &PARK_ROUTE,
        "Movie Theater" => &THEATER_ROUTE,
        "Forest Path" => &FOREST_ROUTE,
        "End of the Earth" => &WORLD_END_ROUTE,
        _ => &DEFAULT_ROUTE,
    }
}
