pub mod app_loop;
pub mod frame_input;
pub mod run_summary;
pub mod seed;
pub mod sound_bank;
pub mod ui_render;
pub mod window_config;

pub const APP_NAME: &str = "Journey to the End of the Earth";

/// Format a seed as an exact decimal string with no prefix or suffix.
pub fn format_seed(seed: u64) -> String {
    seed.to_string()
}

/// Format a snapshot hash as `0x` followed by exactly 16 lowercase hex digits.
pub fn format_snapshot_hash(hash: u64) -> String {
    format!("0x{hash:016x}")
}
