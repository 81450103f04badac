//! Keyboard input collection for one rendered frame.

use core::InputState;
use macroquad::prelude::{KeyCode, get_char_pressed, is_key_down, is_key_pressed};

use crate::app_loop::FrameKeys;

const DIGIT_KEYS: [KeyCode; 10] = [
    KeyCode::Key0,
    KeyCode::Key1,
    KeyCode::Key2,
    KeyCode::Key3,
    KeyCode::Key4,
    KeyCode::Key5,
    KeyCode::Key6,
    KeyCode::Key7,
    KeyCode::Key8,
    KeyCode::Key9,
];

pub fn capture_frame_input() -> FrameKeys {
    let held = InputState {
        up: is_key_down(KeyCode::W) || is_key_down(KeyCode::Up),
        down: is_key_down(KeyCode::S) || is_key_down(KeyCode::Down),
        left: is_key_down(KeyCode::A) || is_key_down(KeyCode::Left),
        right: is_key_down(KeyCode::D) || is_key_down(KeyCode::Right),
        interact: is_key_pressed(KeyCode::Space),
    };

    let mut typed = Vec::new();
    while let Some(ch) = get_char_pressed() {
        if !ch.is_control() {
            typed.push(ch);
        }
    }

    FrameKeys {
        held,
        typed,
        backspace: is_key_pressed(KeyCode::Backspace),
        confirm: is_key_pressed(KeyCode::Enter),
        back: is_key_pressed(KeyCode::Escape),
        map: is_key_pressed(KeyCode::M),
        help: is_key_pressed(KeyCode::Tab),
        restart: is_key_pressed(KeyCode::R),
        digit: DIGIT_KEYS.iter().position(|key| is_key_pressed(*key)),
    }
}
