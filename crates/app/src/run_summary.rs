//! Last-run recap, written as JSON when the app exits so a run can be
//! reported or replayed by seed later.

use std::fs;
use std::path::Path;

use core::Game;
use serde::{Deserialize, Serialize};

use crate::format_snapshot_hash;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    pub seed: u64,
    pub player_name: String,
    pub ticks: u64,
    pub hearts: u8,
    pub location: String,
    pub phase: String,
    pub snapshot_hash: String,
}

impl RunSummary {
    pub fn capture(game: &Game) -> Self {
        Self {
            seed: game.seed(),
            player_name: game.state().player_name.clone(),
            ticks: game.current_tick(),
            hearts: game.state().hearts,
            location: game.active_location().name.to_string(),
            phase: format!("{:?}", game.state().phase),
            snapshot_hash: format_snapshot_hash(game.snapshot_hash()),
        }
    }
}

pub fn write_run_summary(game: &Game, path: &Path) -> std::io::Result<()> {
    let summary = RunSummary::capture(game);
    let json = serde_json::to_string_pretty(&summary).map_err(std::io::Error::other)?;
    fs::write(path, json)
}
