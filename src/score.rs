//! Score tracking and the persisted top score
//!
//! Fed by `MoveOutcome`; the engine itself never touches scores. The top
//! score survives sessions through a small JSON file.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Session score plus the all-time top score and its banner latches
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoreBoard {
    pub score: u64,
    pub top_score: u64,
    /// Latched the first time this session beats the stored top score
    pub new_top_score: bool,
    /// Latched when a merge reaches the milestone level
    pub reached_milestone: bool,
}

impl ScoreBoard {
    /// Score file, relative to the working directory
    pub const STORAGE_FILE: &'static str = "gridmerge_scores.json";

    pub fn new(top_score: u64) -> Self {
        Self {
            top_score,
            ..Self::default()
        }
    }

    /// Fold a move's score delta into the session score
    pub fn add_points(&mut self, points: u64) {
        self.score += points;
        if self.score > self.top_score {
            self.top_score = self.score;
            self.new_top_score = true;
        }
    }

    pub fn mark_milestone(&mut self) {
        self.reached_milestone = true;
    }

    /// Start a fresh session, keeping the top score
    pub fn reset(&mut self) {
        self.score = 0;
        self.new_top_score = false;
        self.reached_milestone = false;
    }

    /// Load the stored top score, starting the session at zero
    pub fn load() -> Self {
        Self::load_from(Path::new(Self::STORAGE_FILE))
    }

    pub fn load_from(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str::<ScoreBoard>(&json) {
                Ok(saved) => {
                    log::info!("Loaded top score {}", saved.top_score);
                    Self::new(saved.top_score)
                }
                Err(e) => {
                    log::warn!("Ignoring malformed score file {}: {e}", path.display());
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("No score file found, starting fresh");
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
                    log::warn!("Could not save scores to {}: {e}", path.display());
                } else {
                    log::info!("Top score {} saved", self.top_score);
                }
            }
            Err(e) => log::warn!("Could not serialize scores: {e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_points_accumulate_and_latch_top_score() {
        let mut scores = ScoreBoard::new(10);
        scores.add_points(4);
        assert_eq!(scores.score, 4);
        assert!(!scores.new_top_score);

        scores.add_points(8);
        assert_eq!(scores.score, 12);
        assert_eq!(scores.top_score, 12);
        assert!(scores.new_top_score);
    }

    #[test]
    fn test_reset_keeps_top_score() {
        let mut scores = ScoreBoard::new(0);
        scores.add_points(16);
        scores.mark_milestone();
        scores.reset();
        assert_eq!(scores.score, 0);
        assert_eq!(scores.top_score, 16);
        assert!(!scores.new_top_score);
        assert!(!scores.reached_milestone);
    }

    #[test]
    fn test_file_round_trip_restores_top_score_only() {
        let path = std::env::temp_dir().join("gridmerge_test_scores.json");
        let mut scores = ScoreBoard::new(0);
        scores.add_points(32);
        scores.mark_milestone();
        scores.save_to(&path);

        let loaded = ScoreBoard::load_from(&path);
        assert_eq!(loaded.top_score, 32);
        assert_eq!(loaded.score, 0);
        assert!(!loaded.reached_milestone);
        let _ = std::fs::remove_file(&path);
    }
}
