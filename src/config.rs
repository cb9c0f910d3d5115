//! Game configuration
//!
//! Persisted separately from scores. Unreadable or malformed files fall
//! back to defaults; bad values are a programmer error and fail fast.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts;

/// Rule-level knobs for a game session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Grid height in cells
    pub rows: usize,
    /// Grid width in cells
    pub cols: usize,
    /// Tiles placed when a board is seeded
    pub initial_tiles: usize,
    /// Level whose first attainment raises the milestone flag
    pub milestone_level: u8,
    /// Probability that a new tile starts at level 2 instead of 1
    pub level_two_chance: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: consts::GRID_ROWS,
            cols: consts::GRID_COLS,
            initial_tiles: consts::INITIAL_TILES,
            milestone_level: consts::MILESTONE_LEVEL,
            level_two_chance: consts::LEVEL_TWO_CHANCE,
        }
    }
}

impl GameConfig {
    /// Config file, relative to the working directory
    pub const STORAGE_FILE: &'static str = "gridmerge_config.json";

    /// Panics on values the engine cannot run with
    pub fn validate(&self) {
        assert!(
            self.rows >= 2 && self.cols >= 2,
            "grid must be at least 2x2, got {}x{}",
            self.rows,
            self.cols
        );
        assert!(
            self.initial_tiles >= 1 && self.initial_tiles <= self.rows * self.cols,
            "initial tile count {} does not fit a {}x{} grid",
            self.initial_tiles,
            self.rows,
            self.cols
        );
        assert!(self.milestone_level >= 1, "milestone level must be at least 1");
        assert!(
            (0.0..=1.0).contains(&self.level_two_chance),
            "level-two chance {} is not a probability",
            self.level_two_chance
        );
    }

    /// Load from `STORAGE_FILE`, defaulting when absent or malformed
    pub fn load() -> Self {
        Self::load_from(Path::new(Self::STORAGE_FILE))
    }

    pub fn load_from(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(config) => {
                    log::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    log::warn!("Ignoring malformed config {}: {e}", path.display());
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Using default config");
                Self::default()
            }
        }
    }

    pub fn save(&self) {
        self.save_to(Path::new(Self::STORAGE_FILE));
    }

    pub fn save_to(&self, path: &Path) {
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = fs::write(path, json) {
                    log::warn!("Could not save config to {}: {e}", path.display());
                } else {
                    log::info!("Config saved");
                }
            }
            Err(e) => log::warn!("Could not serialize config: {e}"),
        }
    }
}
