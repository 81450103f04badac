//! CollisionResolver: player-vs-monster overlap, damage, invincibility and
//! knockback, run after the whole monster pass.

use super::*;

impl Game {
    /// Test every monster in the active location against the player probe
    /// box. The loop never short-circuits, but damage is gated on
    /// `!invincible` and the first hit flips that flag, so at most one hit
    /// lands per frame; later overlaps in the same frame are geometry-only.
    pub(super) fn resolve_collisions(&mut self) {
        let location_index = self.state.location;
        for index in 0..self.state.monsters[location_index].len() {
            let monster = &self.state.monsters[location_index][index];
            let (monster_pos, monster_size) = (monster.pos, monster.size);
            let player = self.state.player;

            let overlaps = player.x < monster_pos.x + monster_size
                && player.x + PLAYER_PROBE > monster_pos.x
                && player.y < monster_pos.y + monster_size
                && player.y + PLAYER_PROBE > monster_pos.y;
            if !overlaps || self.state.invincible {
                continue;
            }

            self.state.hearts = self.state.hearts.saturating_sub(1);
            self.emit(AudioEvent::Damage);
            self.state.invincible = true;
            self.state.invincibility_timer = INVINCIBILITY_TICKS;

            if self.state.hearts == 0 {
                self.state.phase = RunPhase::GameOver;
            } else {
                self.knock_back_from(monster_pos);
            }
        }
    }

    fn knock_back_from(&mut self, monster_pos: Vec2) {
        let delta = self.state.player - monster_pos;
        let distance = delta.length();
        if distance <= 0.0 {
            return;
        }
        self.state.player += delta * (KNOCKBACK_DISTANCE / distance);
        self.state.player.x = self.state.player.x.clamp(PLAYER_MIN_X, PLAYER_MAX_X);
        self.state.player.y = self.state.player.y.clamp(PLAYER_MIN_Y, PLAYER_MAX_Y);
    }
}
