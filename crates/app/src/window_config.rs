//! Window configuration for the desktop app.

use crate::APP_NAME;
use core::{PLAYFIELD_HEIGHT, PLAYFIELD_WIDTH};
use macroquad::window::Conf;

pub fn build_window_conf() -> Conf {
    Conf {
        window_title: APP_NAME.to_owned(),
        window_width: PLAYFIELD_WIDTH as i32,
        window_height: PLAYFIELD_HEIGHT as i32,
        window_resizable: false,
        high_dpi: true,
        ..Default::default()
    }
}
