//! PlayerController: turns the held-key snapshot into one validated,
//! all-or-nothing displacement per tick.

use super::*;

impl Game {
    /// Compose a candidate displacement from the held keys and apply it only
    /// if the whole move is legal. No per-axis sliding: a candidate that
    /// clips an obstacle or leaves the playfield is dropped entirely.
    pub(super) fn move_player(&mut self, input: InputState) {
        let mut candidate = self.state.player;
        if input.up {
            candidate.y -= PLAYER_MOVE_SPEED;
        }
        if input.down {
            candidate.y += PLAYER_MOVE_SPEED;
        }
        if input.left {
            candidate.x -= PLAYER_MOVE_SPEED;
        }
        if input.right {
            candidate.x += PLAYER_MOVE_SPEED;
        }
        if candidate == self.state.player {
            return;
        }

        if candidate.x < PLAYER_MIN_X
            || candidate.x > PLAYER_MAX_X
            || candidate.y < PLAYER_MIN_Y
            || candidate.y > PLAYER_MAX_Y
        {
            return;
        }

        let location = &self.world.locations()[self.state.location];
        if location.obstacles.iter().any(|o| o.overlaps_box(candidate, PLAYER_PROBE)) {
            return;
        }

        self.state.player = candidate;
    }
}
