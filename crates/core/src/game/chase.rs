//! ChaseAudioTrigger: edge-triggered two-state policy deciding when the
//! chase track should replace the ambient one.

use crate::state::Monster;
use crate::types::*;

/// Pursuit monsters closer than this keep the chase track running.
const CHASE_RADIUS: f32 = 150.0;

/// Policy evaluations are rate-limited; 6 ticks is 100ms at the nominal
/// 60Hz frame rate.
const CHECK_INTERVAL_TICKS: u64 = 6;

#[derive(Debug, Default)]
pub(super) struct ChaseTrigger {
    chasing: bool,
    last_check: Option<u64>,
}

impl ChaseTrigger {
    pub(super) fn is_chasing(&self) -> bool {
        self.chasing
    }

    /// Forget any chase in progress; returns the stop event to emit if one
    /// was active (used when a run restarts).
    pub(super) fn reset(&mut self) -> Option<AudioEvent> {
        self.last_check = None;
        if std::mem::take(&mut self.chasing) { Some(AudioEvent::ChaseStopped) } else { None }
    }

    /// Re-evaluate proximity, at most once per rate-limit window. Only the
    /// state transitions produce events, so repeated evaluations while
    /// chased stay silent.
    pub(super) fn evaluate(
        &mut self,
        tick: u64,
        player: Vec2,
        monsters: &[Monster],
    ) -> Option<AudioEvent> {
        if self.last_check.is_some_and(|last| tick.saturating_sub(last) < CHECK_INTERVAL_TICKS) {
            return None;
        }
        self.last_check = Some(tick);

        let pursued = monsters
            .iter()
            .any(|m| m.behavior.is_pursuit() && m.pos.distance_to(player) < CHASE_RADIUS);

        match (pursued, self.chasing) {
            (true, false) => {
                self.chasing = true;
                Some(AudioEvent::ChaseStarted)
            }
            (false, true) => {
                self.chasing = false;
                Some(AudioEvent::ChaseStopped)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;

    #[test]
    fn pursuit_monster_inside_the_radius_starts_a_chase() {
        let mut trigger = ChaseTrigger::default();
        let player = Vec2::new(400.0, 300.0);
        let monster = test_monster(Behavior::Crazy, Vec2::new(500.0, 300.0)); // distance 100

        assert_eq!(trigger.evaluate(1, player, &[monster]), Some(AudioEvent::ChaseStarted));
        assert!(trigger.is_chasing());
    }

    #[test]
    fn chase_ends_once_the_monster_backs_off() {
        let mut trigger = ChaseTrigger::default();
        let player = Vec2::new(400.0, 300.0);
        let mut monster = test_monster(Behavior::Crazy, Vec2::new(500.0, 300.0));

        assert_eq!(trigger.evaluate(1, player, &[monster.clone()]), Some(AudioEvent::ChaseStarted));

        monster.pos = Vec2::new(700.0, 300.0); // distance 300
        assert_eq!(trigger.evaluate(7, player, &[monster]), Some(AudioEvent::ChaseStopped));
        assert!(!trigger.is_chasing());
    }

    #[test]
    fn evaluations_inside_the_rate_limit_window_are_skipped() {
        let mut trigger = ChaseTrigger::default();
        let player = Vec2::new(400.0, 300.0);
        let monster = test_monster(Behavior::Chase, Vec2::new(450.0, 300.0));

        assert_eq!(
            trigger.evaluate(1, player, &[monster.clone()]),
            Some(AudioEvent::ChaseStarted)
        );

        // Monster leaves, but the re-check lands inside the 6-tick window.
        assert_eq!(trigger.evaluate(4, player, &[]), None);
        assert!(trigger.is_chasing());

        assert_eq!(trigger.evaluate(7, player, &[]), Some(AudioEvent::ChaseStopped));
    }

    #[test]
    fn non_pursuit_behaviors_never_trigger_the_chase_track() {
        let mut trigger = ChaseTrigger::default();
        let player = Vec2::new(400.0, 300.0);
        let patroller = test_monster(Behavior::StreetPatrol, Vec2::new(410.0, 300.0));
        let guard = test_monster(Behavior::GuardTreasure, Vec2::new(420.0, 300.0));

        assert_eq!(trigger.evaluate(1, player, &[patroller, guard]), None);
        assert!(!trigger.is_chasing());
    }

    #[test]
    fn repeated_chasing_evaluations_stay_silent() {
        let mut trigger = ChaseTrigger::default();
        let player = Vec2::new(400.0, 300.0);
        let monster = test_monster(Behavior::Hunt, Vec2::new(450.0, 300.0));

        assert_eq!(
            trigger.evaluate(1, player, &[monster.clone()]),
            Some(AudioEvent::ChaseStarted)
        );
        assert_eq!(trigger.evaluate(10, player, &[monster.clone()]), None);
        assert_eq!(trigger.evaluate(20, player, &[monster]), None);
    }

    #[test]
    fn reset_emits_stop_only_when_a_chase_was_active() {
        let mut trigger = ChaseTrigger::default();
        assert_eq!(trigger.reset(), None);

        let player = Vec2::new(400.0, 300.0);
        let monster = test_monster(Behavior::Crazy, Vec2::new(450.0, 300.0));
        trigger.evaluate(1, player, &[monster]);
        assert_eq!(trigger.reset(), Some(AudioEvent::ChaseStopped));
    }
}
