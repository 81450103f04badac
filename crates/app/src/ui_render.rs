//! Rendering for every screen. The simulation is drawn as flat colored
//! boxes on the 800x600 playfield with a small HUD on top.

use core::{
    Game, MAX_HEARTS, MonsterKind, ObstacleKind, PLAYER_RENDER_SIZE, PLAYFIELD_HEIGHT,
    PLAYFIELD_WIDTH,
};
use macroquad::prelude::*;

use crate::app_loop::{AppScreen, AppState};
use crate::{APP_NAME, format_seed};

const HUD_FONT_SIZE: f32 = 20.0;
const TITLE_FONT_SIZE: f32 = 40.0;
const OVERLAY_LINE_STEP: f32 = 26.0;

pub fn draw_frame(game: &Game, app: &AppState, run_seed: u64) {
    match app.screen {
        AppScreen::Start => draw_start_screen(app),
        AppScreen::HowToPlay => draw_help_screen(),
        AppScreen::Playing => draw_playfield(game, run_seed),
        AppScreen::MapOverlay => {
            draw_playfield(game, run_seed);
            draw_map_overlay(game, app);
        }
        AppScreen::GameOver => {
            draw_playfield(game, run_seed);
            draw_end_banner("GAME OVER", &["R - restart from checkpoint", "Enter - back to start"]);
        }
        AppScreen::Victory => {
            draw_playfield(game, run_seed);
            draw_end_banner("YOU MADE IT TO THE END OF THE EARTH!", &["Enter - play again"]);
        }
    }
}

fn draw_start_screen(app: &AppState) {
    draw_text(APP_NAME, 120.0, 180.0, TITLE_FONT_SIZE, GOLD);
    draw_text("What is your name?", 120.0, 260.0, HUD_FONT_SIZE, WHITE);
    let entry = format!("{}_", app.name_entry);
    draw_text(&entry, 120.0, 300.0, 30.0, SKYBLUE);
    draw_text("Enter - start    Tab - how to play    Esc - quit", 120.0, 380.0, HUD_FONT_SIZE, GRAY);
}

fn draw_help_screen() {
    draw_text("HOW TO PLAY", 120.0, 120.0, TITLE_FONT_SIZE, GOLD);
    let mut y = 200.0;
    for line in help_lines() {
        draw_text(line, 120.0, y, HUD_FONT_SIZE, WHITE);
        y += OVERLAY_LINE_STEP;
    }
}

fn draw_playfield(game: &Game, run_seed: u64) {
    let location = game.active_location();

    for obstacle in &location.obstacles {
        draw_rectangle(
            obstacle.pos.x,
            obstacle.pos.y,
            obstacle.width,
            obstacle.height,
            obstacle_color(obstacle.kind),
        );
    }

    for monster in game.active_monsters() {
        draw_rectangle(
            monster.pos.x,
            monster.pos.y,
            monster.size,
            monster.size,
            monster_color(monster.kind),
        );
    }

    let state = game.state();
    if player_blink_visible(state.invincible, state.invincibility_timer) {
        draw_rectangle(
            state.player.x,
            state.player.y,
            PLAYER_RENDER_SIZE,
            PLAYER_RENDER_SIZE,
            YELLOW,
        );
    }

    // HUD
    draw_text(&hearts_line(state.hearts), 10.0, 25.0, HUD_FONT_SIZE, RED);
    let header = format!("{} {}", location.theme, location.name);
    draw_text(&header, 300.0, 25.0, HUD_FONT_SIZE, WHITE);
    draw_text(&state.player_name, 10.0, PLAYFIELD_HEIGHT - 10.0, HUD_FONT_SIZE, WHITE);
    let seed_label = format!("seed {}", format_seed(run_seed));
    draw_text(&seed_label, PLAYFIELD_WIDTH - 160.0, PLAYFIELD_HEIGHT - 10.0, 16.0, GRAY);
}

fn draw_map_overlay(game: &Game, app: &AppState) {
    draw_rectangle(0.0, 0.0, PLAYFIELD_WIDTH, PLAYFIELD_HEIGHT, Color::new(0.0, 0.0, 0.0, 0.7));
    draw_text("WORLD MAP", 120.0, 100.0, TITLE_FONT_SIZE, GOLD);
    let mut y = 160.0;
    for line in map_lines(game) {
        draw_text(&line, 120.0, y, HUD_FONT_SIZE, WHITE);
        y += OVERLAY_LINE_STEP;
    }
    if let Some(notice) = app.map_notice {
        draw_text(notice, 120.0, y + OVERLAY_LINE_STEP, HUD_FONT_SIZE, ORANGE);
    }
    draw_text("press a number to travel, M to close", 120.0, 560.0, HUD_FONT_SIZE, GRAY);
}

fn draw_end_banner(title: &str, options: &[&str]) {
    draw_rectangle(0.0, 0.0, PLAYFIELD_WIDTH, PLAYFIELD_HEIGHT, Color::new(0.0, 0.0, 0.0, 0.7));
    draw_text(title, 120.0, 260.0, TITLE_FONT_SIZE, GOLD);
    let mut y = 330.0;
    for option in options {
        draw_text(option, 120.0, y, HUD_FONT_SIZE, WHITE);
        y += OVERLAY_LINE_STEP;
    }
}

/// Filled hearts for remaining health, hollow for the rest.
pub fn hearts_line(hearts: u8) -> String {
    let mut line = String::new();
    for slot in 0..MAX_HEARTS {
        line.push(if slot < hearts { '\u{2665}' } else { '\u{2661}' });
    }
    line
}

/// During invincibility the player flashes on a 10-frame cadence.
pub fn player_blink_visible(invincible: bool, timer: u32) -> bool {
    !invincible || (timer / 10) % 2 == 0
}

/// One selectable line per location: its travel digit, theme, name, and
/// whether it has been visited.
pub fn map_lines(game: &Game) -> Vec<String> {
    game.world()
        .locations()
        .iter()
        .enumerate()
        .map(|(index, location)| {
            let marker = if index == game.state().location {
                '@'
            } else if game.state().visited.contains(&index) {
                '*'
            } else {
                '?'
            };
            let name = if game.state().visited.contains(&index) { location.name } else { "???" };
            format!("[{index}] {marker} {name}")
        })
        .collect()
}

pub fn help_lines() -> &'static [&'static str] {
    &[
        "WASD / arrows - move",
        "Space - interact (doors and path signs)",
        "M - world map (travel to visited places)",
        "Touching a monster costs a heart; at zero the run ends.",
        "Friend's House and Crystal Lake are checkpoints.",
        "Reach the center of the End of the Earth to win.",
    ]
}

fn obstacle_color(kind: ObstacleKind) -> Color {
    match kind {
        ObstacleKind::Tree => DARKGREEN,
        ObstacleKind::Bench => BROWN,
        ObstacleKind::Flower => PINK,
        ObstacleKind::Counter => DARKGRAY,
        ObstacleKind::Water => SKYBLUE,
    }
}

fn monster_color(kind: MonsterKind) -> Color {
    match kind {
        MonsterKind::Squirrel => BROWN,
        MonsterKind::Ghost => LIGHTGRAY,
        MonsterKind::Bee => GOLD,
        MonsterKind::Wolf => GRAY,
        MonsterKind::Frog => GREEN,
        MonsterKind::Dragon => MAROON,
    }
}
