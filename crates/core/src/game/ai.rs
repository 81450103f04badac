//! MonsterAI: one strategy per behavior variant, dispatched exhaustively.
//! Each step mutates the monster in place from a read-only view of the
//! frame; after dispatch every monster is clamped into the playfield no
//! matter what its strategy did.

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::Rng;

use super::*;
use crate::state::BehaviorState;
use crate::world::patrol_route;

/// Anchor and radii for the guard behaviors.
const GUARD_ANCHOR: Vec2 = Vec2::new(400.0, 300.0);
const GUARD_CHASE_RADIUS: f32 = 150.0;
const GUARD_LEASH_RADIUS: f32 = 100.0;

/// Hunt extrapolates the player by this much per held movement key.
const HUNT_LOOKAHEAD: f32 = 30.0;

const JUMP_CHARGE_TICKS: u32 = 60;
const JUMP_TRIGGER_RADIUS: f32 = 200.0;
const JUMP_IMPULSE_FACTOR: f32 = 15.0;
const JUMP_DECAY: f32 = 0.9;
const JUMP_REST_THRESHOLD: f32 = 0.5;

const PACK_SURROUND_DISTANCE: f32 = 100.0;

const STREET_WAYPOINT_RADIUS: f32 = 15.0;
const STREET_AGGRO_RADIUS: f32 = 100.0;

/// Read-only view of the frame a monster steps against.
pub(super) struct AiContext<'a> {
    pub player: Vec2,
    pub held: InputState,
    pub tick: u64,
    /// Positions of same-kind monsters in the active location, this one
    /// excluded, sampled at the start of the monster pass.
    pub siblings: &'a [Vec2],
    /// This monster's index among same-kind monsters, and their total count.
    pub slot: usize,
    pub slot_count: usize,
    pub route: &'static [Vec2],
}

impl Game {
    pub(super) fn step_monsters(&mut self, input: InputState) {
        let location_index = self.state.location;
        let player = self.state.player;
        let tick = self.tick;
        let route = patrol_route(self.world.locations()[location_index].name);

        // Sibling positions are sampled before anyone moves so the pass is
        // order-independent for the flocking behaviors.
        let roster: Vec<(MonsterKind, Vec2)> =
            self.state.monsters[location_index].iter().map(|m| (m.kind, m.pos)).collect();

        for index in 0..roster.len() {
            let kind = roster[index].0;
            let siblings: Vec<Vec2> = roster
                .iter()
                .enumerate()
                .filter(|(other, (k, _))| *other != index && *k == kind)
                .map(|(_, (_, pos))| *pos)
                .collect();
            let slot = roster[..index].iter().filter(|(k, _)| *k == kind).count();
            let slot_count = roster.iter().filter(|(k, _)| *k == kind).count();

            let ctx = AiContext {
                player,
                held: input,
                tick,
                siblings: &siblings,
                slot,
                slot_count,
                route,
            };
            step(&mut self.state.monsters[location_index][index], &ctx, &mut self.rng);
        }
    }
}

/// Advance one monster by one frame.
pub(super) fn step(monster: &mut Monster, ctx: &AiContext<'_>, rng: &mut ChaCha8Rng) {
    match monster.behavior {
        Behavior::Chase => chase(monster, ctx),
        Behavior::Hunt => hunt(monster, ctx),
        Behavior::Guard | Behavior::GuardTreasure => guard(monster, ctx, rng),
        Behavior::Patrol => patrol(monster, rng),
        Behavior::Swarm => swarm(monster, ctx),
        Behavior::Jump => jump(monster, ctx),
        Behavior::Pack => pack(monster, ctx),
        Behavior::Crazy => crazy(monster, ctx, rng),
        Behavior::StreetPatrol => street_patrol(monster, ctx),
        Behavior::Drift => drift(monster),
    }

    monster.pos.x = monster.pos.x.clamp(0.0, PLAYFIELD_WIDTH - monster.size);
    monster.pos.y = monster.pos.y.clamp(0.0, PLAYFIELD_HEIGHT - monster.size);
}

fn chase(monster: &mut Monster, ctx: &AiContext<'_>) {
    let dir = monster.pos.toward(ctx.player);
    monster.pos += dir * monster.speed;
}

fn hunt(monster: &mut Monster, ctx: &AiContext<'_>) {
    let mut aim = ctx.player;
    if ctx.held.up {
        aim.y -= HUNT_LOOKAHEAD;
    }
    if ctx.held.down {
        aim.y += HUNT_LOOKAHEAD;
    }
    if ctx.held.left {
        aim.x -= HUNT_LOOKAHEAD;
    }
    if ctx.held.right {
        aim.x += HUNT_LOOKAHEAD;
    }
    let dir = monster.pos.toward(aim);
    monster.pos += dir * (monster.speed * 1.2);
}

fn guard(monster: &mut Monster, ctx: &AiContext<'_>, rng: &mut ChaCha8Rng) {
    if ctx.player.distance_to(GUARD_ANCHOR) < GUARD_CHASE_RADIUS {
        chase(monster, ctx);
        return;
    }
    let leash = monster.pos.distance_to(GUARD_ANCHOR);
    if leash > GUARD_LEASH_RADIUS {
        let dir = monster.pos.toward(GUARD_ANCHOR);
        monster.pos += dir * (monster.speed * 0.5);
    } else {
        monster.pos.x += monster.speed * monster.direction;
        if unit(rng) < 0.02 {
            monster.direction = -monster.direction;
        }
    }
}

fn patrol(monster: &mut Monster, rng: &mut ChaCha8Rng) {
    monster.pos.x += monster.speed * monster.direction;
    if monster.pos.x <= 50.0 || monster.pos.x >= 750.0 - monster.size {
        monster.direction = -monster.direction;
    }
    if unit(rng) < 0.01 {
        monster.direction = -monster.direction;
    }
}

fn swarm(monster: &mut Monster, ctx: &AiContext<'_>) {
    let centroid = if ctx.siblings.is_empty() {
        monster.pos
    } else {
        let sum = ctx.siblings.iter().fold(Vec2::ZERO, |acc, p| acc + *p);
        sum * (1.0 / ctx.siblings.len() as f32)
    };

    let pull = (ctx.player - monster.pos) * 0.7 + (centroid - monster.pos) * 0.3;
    let len = pull.length();
    if len > 0.0 {
        monster.pos += pull * (monster.speed / len);
    }

    // Sinusoidal buzz keyed on the tick counter and the monster's own
    // position, so the offset stays deterministic per run.
    let t = ctx.tick as f32 * 0.167;
    monster.pos.x += (t + monster.pos.x * 0.1).sin() * 2.0;
    monster.pos.y += (t + monster.pos.y * 0.1).cos() * 2.0;
}

fn jump(monster: &mut Monster, ctx: &AiContext<'_>) {
    let (mut charge, mut impulse) = match monster.state {
        BehaviorState::Jump { charge, impulse } => (charge, impulse),
        _ => (0, None),
    };

    charge += 1;
    if charge > JUMP_CHARGE_TICKS && impulse.is_none() {
        let distance = monster.pos.distance_to(ctx.player);
        if distance > 0.0 && distance < JUMP_TRIGGER_RADIUS {
            impulse = Some(monster.pos.toward(ctx.player) * (monster.speed * JUMP_IMPULSE_FACTOR));
            charge = 0;
        }
    }

    if let Some(mut velocity) = impulse {
        monster.pos += velocity;
        velocity = velocity * JUMP_DECAY;
        impulse = if velocity.x.abs() < JUMP_REST_THRESHOLD
            && velocity.y.abs() < JUMP_REST_THRESHOLD
        {
            None
        } else {
            Some(velocity)
        };
    }

    monster.state = BehaviorState::Jump { charge, impulse };
}

fn pack(monster: &mut Monster, ctx: &AiContext<'_>) {
    // Same-kind members divide the circle around the player into equal
    // angular slots; each steers toward its own slot.
    let slot_count = ctx.slot_count.max(1);
    let angle = std::f32::consts::TAU / slot_count as f32 * ctx.slot as f32;
    let target = Vec2::new(
        ctx.player.x + angle.cos() * PACK_SURROUND_DISTANCE,
        ctx.player.y + angle.sin() * PACK_SURROUND_DISTANCE,
    );
    let dir = monster.pos.toward(target);
    monster.pos += dir * monster.speed;
}

fn crazy(monster: &mut Monster, ctx: &AiContext<'_>, rng: &mut ChaCha8Rng) {
    let (mut timer, mut flip_at, mut dir) = match monster.state {
        BehaviorState::Crazy { timer, flip_at, dir } => (timer, flip_at, dir),
        _ => (0, 0, Vec2::ZERO),
    };

    timer += 1;
    if timer > flip_at {
        // 70% toward the player, the rest random chaos, per axis.
        let toward = monster.pos.toward(ctx.player);
        if toward != Vec2::ZERO {
            dir = Vec2::new(toward.x * 0.7 + signed(rng), toward.y * 0.7 + signed(rng));
        }
        timer = 0;
        flip_at = 20 + (unit(rng) * 20.0) as u32;
    }

    let speed_multiplier = 0.8 + unit(rng) * 0.8;
    monster.pos += dir * (monster.speed * speed_multiplier);

    // Per-frame twitch.
    monster.pos.x += signed(rng) * 4.0;
    monster.pos.y += signed(rng) * 4.0;

    // Occasional burst dash straight at the player.
    if unit(rng) < 0.05 {
        let dash = monster.pos.toward(ctx.player);
        monster.pos += dash * (monster.speed * 3.0);
    }

    monster.state = BehaviorState::Crazy { timer, flip_at, dir };
}

fn street_patrol(monster: &mut Monster, ctx: &AiContext<'_>) {
    let mut waypoint = match monster.state {
        BehaviorState::StreetPatrol { waypoint } => waypoint,
        _ => 0,
    };

    let target = ctx.route[waypoint % ctx.route.len()];
    if monster.pos.distance_to(target) > STREET_WAYPOINT_RADIUS {
        let dir = monster.pos.toward(target);
        monster.pos += dir * monster.speed;
    } else {
        waypoint = (waypoint + 1) % ctx.route.len();
    }

    // A nearby player overrides the route for this frame only; the patrol
    // resumes from the same waypoint once they back off.
    if monster.pos.distance_to(ctx.player) < STREET_AGGRO_RADIUS {
        let dir = monster.pos.toward(ctx.player);
        monster.pos += dir * (monster.speed * 1.5);
    }

    monster.state = BehaviorState::StreetPatrol { waypoint };
}

/// Fallback for unrecognized behavior tags: oscillate across the full
/// playfield width.
fn drift(monster: &mut Monster) {
    monster.pos.x += monster.speed * monster.direction;
    if monster.pos.x <= 0.0 || monster.pos.x >= PLAYFIELD_WIDTH - monster.size {
        monster.direction = -monster.direction;
    }
}

fn unit(rng: &mut ChaCha8Rng) -> f32 {
    // 24 high bits give a uniform float in [0, 1).
    (rng.next_u32() >> 8) as f32 * (1.0 / 16_777_216.0)
}

fn signed(rng: &mut ChaCha8Rng) -> f32 {
    unit(rng) * 2.0 - 1.0
}
