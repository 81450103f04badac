//! Screen state machine driving the simulation from per-frame keyboard
//! snapshots. Kept free of direct input calls so tests can feed synthetic
//! frames.

use core::{Game, GameError, InputState, RunPhase};

pub const MAX_NAME_LEN: usize = 16;

/// Everything the state machine wants to know about one frame's keyboard.
#[derive(Debug, Default, Clone)]
pub struct FrameKeys {
    /// Held movement keys plus the interact pulse, handed to `Game::tick`.
    pub held: InputState,
    /// Printable characters typed this frame (name entry).
    pub typed: Vec<char>,
    pub backspace: bool,
    pub confirm: bool,
    pub back: bool,
    pub map: bool,
    pub help: bool,
    pub restart: bool,
    /// Digit key pressed this frame, as a location index.
    pub digit: Option<usize>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AppScreen {
    #[default]
    Start,
    HowToPlay,
    Playing,
    MapOverlay,
    GameOver,
    Victory,
}

#[derive(Default)]
pub struct AppState {
    pub screen: AppScreen,
    pub name_entry: String,
    pub map_notice: Option<&'static str>,
    pub quit_requested: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process one frame of input against the current screen. Only the
    /// `Playing` screen advances the simulation; overlays freeze it.
    pub fn frame(&mut self, game: &mut Game, keys: &FrameKeys) {
        match self.screen {
            AppScreen::Start => {
                for ch in &keys.typed {
                    if self.name_entry.chars().count() < MAX_NAME_LEN {
                        self.name_entry.push(*ch);
                    }
                }
                if keys.backspace {
                    self.name_entry.pop();
                }

                if keys.help {
                    self.screen = AppScreen::HowToPlay;
                } else if keys.confirm {
                    game.start_run(&self.name_entry);
                    self.screen = AppScreen::Playing;
                } else if keys.back {
                    self.quit_requested = true;
                }
            }
            AppScreen::HowToPlay => {
                if keys.confirm || keys.back || keys.help {
                    self.screen = AppScreen::Start;
                }
            }
            AppScreen::Playing => {
                if keys.map {
                    self.screen = AppScreen::MapOverlay;
                    return;
                }
                game.tick(keys.held);
                match game.state().phase {
                    RunPhase::GameOver => self.screen = AppScreen::GameOver,
                    RunPhase::Victory => self.screen = AppScreen::Victory,
                    _ => {}
                }
            }
            AppScreen::MapOverlay => {
                if keys.map || keys.back {
                    self.map_notice = None;
                    self.screen = AppScreen::Playing;
                } else if let Some(index) = keys.digit {
                    match game.jump_to_location(index) {
                        Ok(()) => {
                            self.map_notice = None;
                            self.screen = AppScreen::Playing;
                        }
                        Err(error) => self.map_notice = Some(jump_notice(error)),
                    }
                }
            }
            AppScreen::GameOver => {
                if keys.restart {
                    game.restart_from_checkpoint();
                    self.screen = AppScreen::Playing;
                } else if keys.confirm {
                    self.screen = AppScreen::Start;
                }
            }
            AppScreen::Victory => {
                if keys.confirm {
                    self.screen = AppScreen::Start;
                }
            }
        }
    }
}

fn jump_notice(error: GameError) -> &'static str {
    match error {
        GameError::NoSuchLocation => "There is no such place.",
        GameError::LocationNotVisited => "You haven't been there yet.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::WorldMap;

    fn game() -> Game {
        Game::new(42, WorldMap::build_default())
    }

    fn typed(chars: &str) -> FrameKeys {
        FrameKeys { typed: chars.chars().collect(), ..FrameKeys::default() }
    }

    fn pressed(set: impl Fn(&mut FrameKeys)) -> FrameKeys {
        let mut keys = FrameKeys::default();
        set(&mut keys);
        keys
    }

    #[test]
    fn typing_a_name_and_confirming_starts_a_run() {
        let mut game = game();
        let mut app = AppState::new();

        app.frame(&mut game, &typed("Ana"));
        assert_eq!(app.name_entry, "Ana");

        app.frame(&mut game, &pressed(|k| k.confirm = true));
        assert_eq!(app.screen, AppScreen::Playing);
        assert_eq!(game.state().player_name, "Ana");
        assert_eq!(game.state().phase, RunPhase::Running);
    }

    #[test]
    fn blank_name_defaults_to_hero() {
        let mut game = game();
        let mut app = AppState::new();
        app.frame(&mut game, &pressed(|k| k.confirm = true));
        assert_eq!(game.state().player_name, "Hero");
    }

    #[test]
    fn backspace_edits_the_name_entry() {
        let mut game = game();
        let mut app = AppState::new();
        app.frame(&mut game, &typed("Anna"));
        app.frame(&mut game, &pressed(|k| k.backspace = true));
        assert_eq!(app.name_entry, "Ann");
    }

    #[test]
    fn name_entry_is_length_capped() {
        let mut game = game();
        let mut app = AppState::new();
        app.frame(&mut game, &typed("abcdefghijklmnopqrstuvwxyz"));
        assert_eq!(app.name_entry.chars().count(), MAX_NAME_LEN);
    }

    #[test]
    fn help_screen_round_trips_back_to_start() {
        let mut game = game();
        let mut app = AppState::new();
        app.frame(&mut game, &pressed(|k| k.help = true));
        assert_eq!(app.screen, AppScreen::HowToPlay);
        app.frame(&mut game, &pressed(|k| k.back = true));
        assert_eq!(app.screen, AppScreen::Start);
    }

    #[test]
    fn escape_on_the_start_screen_requests_quit() {
        let mut game = game();
        let mut app = AppState::new();
        app.frame(&mut game, &pressed(|k| k.back = true));
        assert!(app.quit_requested);
    }

    #[test]
    fn playing_frames_advance_the_simulation_and_overlays_freeze_it() {
        let mut game = game();
        let mut app = AppState::new();
        app.frame(&mut game, &pressed(|k| k.confirm = true));

        app.frame(&mut game, &FrameKeys::default());
        assert_eq!(game.current_tick(), 1);

        app.frame(&mut game, &pressed(|k| k.map = true));
        assert_eq!(app.screen, AppScreen::MapOverlay);
        app.frame(&mut game, &FrameKeys::default());
        assert_eq!(game.current_tick(), 1, "overlay frames must not tick");
    }

    #[test]
    fn map_overlay_rejects_unvisited_destinations() {
        let mut game = game();
        let mut app = AppState::new();
        app.frame(&mut game, &pressed(|k| k.confirm = true));
        app.frame(&mut game, &pressed(|k| k.map = true));

        app.frame(&mut game, &pressed(|k| k.digit = Some(6)));
        assert_eq!(app.screen, AppScreen::MapOverlay);
        assert!(app.map_notice.is_some());

        // Home is always visited.
        app.frame(&mut game, &pressed(|k| k.digit = Some(0)));
        assert_eq!(app.screen, AppScreen::Playing);
        assert!(app.map_notice.is_none());
    }

    #[test]
    fn game_over_offers_checkpoint_restart() {
        let mut game = game();
        let mut app = AppState::new();
        app.frame(&mut game, &pressed(|k| k.confirm = true));
        app.screen = AppScreen::GameOver;

        app.frame(&mut game, &pressed(|k| k.restart = true));
        assert_eq!(app.screen, AppScreen::Playing);
        assert_eq!(game.state().phase, RunPhase::Running);
        assert_eq!(game.state().hearts, core::MAX_HEARTS);
    }
}
