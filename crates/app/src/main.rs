use std::path::Path;

use app::app_loop::AppState;
use app::frame_input::capture_frame_input;
use app::run_summary::write_run_summary;
use app::seed::{generate_runtime_seed, resolve_seed_from_args};
use app::sound_bank::SoundBank;
use app::ui_render::draw_frame;
use app::window_config::build_window_conf;
use core::{Game, WorldMap};
use macroquad::prelude::*;

#[macroquad::main(build_window_conf)]
async fn main() {
    let args: Vec<String> = std::env::args().collect();
    let seed = match resolve_seed_from_args(&args, generate_runtime_seed()) {
        Ok(choice) => choice.value(),
        Err(message) => {
            eprintln!("{message}");
            std::process::exit(2);
        }
    };

    let mut game = Game::new(seed, WorldMap::build_default());
    let mut app = AppState::new();
    let mut sounds = SoundBank::load().await;

    loop {
        let keys = capture_frame_input();
        app.frame(&mut game, &keys);

        for event in game.take_audio_events() {
            sounds.handle(event);
        }

        clear_background(BLACK);
        draw_frame(&game, &app, seed);

        if app.quit_requested {
            break;
        }
        next_frame().await;
    }

    if let Err(error) = write_run_summary(&game, Path::new("last_run.json")) {
        eprintln!("could not write run summary: {error}");
    }
}
