//! Deterministic grid engine
//!
//! All game rules live here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - A move builds a fresh board; the previous board is never mutated
//! - No rendering, timing, or platform dependencies
//!
//! Invariant violations (out-of-range access, spawning into a full board)
//! panic; a move that changes nothing is a normal `changed: false` outcome,
//! not an error.

pub mod board;
pub mod endgame;
pub mod resolve;
pub mod spawn;
pub mod tick;

pub use board::{Board, Tile, TileId, levels_equal};
pub use endgame::is_terminal;
pub use resolve::{Direction, resolve};

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::GameConfig;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Moves are accepted
    Playing,
    /// The board is terminal; only `reset` leaves this phase
    GameOver,
}

/// Everything a move reports back to the caller.
///
/// `board` is a snapshot of the post-move state (after any spawn); callers
/// must not feed a mutated copy back in. `changed: false` means the swipe
/// was a no-op: no spawn happened and no turn was consumed.
#[derive(Debug, Clone)]
pub struct MoveOutcome {
    pub board: Board,
    pub changed: bool,
    /// Sum of 2^level over every merge result this move
    pub score_delta: u64,
    /// True when any merge reached the configured milestone level
    pub reached_milestone: bool,
    pub game_over: bool,
}

impl MoveOutcome {
    fn rejected(board: Board, game_over: bool) -> Self {
        Self {
            board,
            changed: false,
            score_delta: 0,
            reached_milestone: false,
            game_over,
        }
    }
}

/// A single game session: the board plus the state that must persist
/// between moves (seeded RNG, identity counter, phase).
#[derive(Debug, Clone)]
pub struct Game {
    config: GameConfig,
    seed: u64,
    rng: Pcg32,
    next_id: u32,
    phase: GamePhase,
    board: Board,
}

impl Game {
    /// Seed a fresh board with `config.initial_tiles` random tiles
    pub fn new(config: GameConfig, seed: u64) -> Self {
        config.validate();
        let board = Board::new(config.rows, config.cols);
        let mut game = Self {
            config,
            seed,
            rng: Pcg32::seed_from_u64(seed),
            next_id: 1,
            phase: GamePhase::Playing,
            board,
        };
        game.seed_board();
        game
    }

    /// Start from a fixed layout instead of random seeding.
    ///
    /// This is the deterministic-testing entry point; identity allocation
    /// resumes above the highest id already on the board.
    pub fn with_board(config: GameConfig, board: Board, seed: u64) -> Self {
        config.validate();
        assert!(
            board.rows() == config.rows && board.cols() == config.cols,
            "board is {}x{} but config wants {}x{}",
            board.rows(),
            board.cols(),
            config.rows,
            config.cols
        );
        let next_id = board.tiles().map(|tile| tile.id.0).max().unwrap_or(0) + 1;
        Self {
            config,
            seed,
            rng: Pcg32::seed_from_u64(seed),
            next_id,
            phase: GamePhase::Playing,
            board,
        }
    }

    fn seed_board(&mut self) {
        for _ in 0..self.config.initial_tiles {
            let id = self.next_tile_id();
            let level = spawn::roll_level(&mut self.rng, self.config.level_two_chance);
            spawn::spawn_random_tile(&mut self.board, id, level, &mut self.rng);
        }
    }

    fn next_tile_id(&mut self) -> TileId {
        let id = TileId(self.next_id);
        self.next_id += 1;
        id
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// True when no tile is still sliding toward its cell
    pub fn is_settled(&self) -> bool {
        tick::settled(&self.board)
    }

    /// Advance display positions; purely cosmetic
    pub fn tick_animation(&mut self, elapsed_ms: f32) {
        tick::advance(&mut self.board, elapsed_ms);
    }

    /// Apply one swipe: resolve, spawn on change, detect the endgame.
    ///
    /// Rejected (a `changed: false` outcome) while the previous move is
    /// still animating or after the session has ended; callers treat that
    /// as ignored input, not as an error.
    pub fn apply_move(&mut self, direction: Direction) -> MoveOutcome {
        if self.phase == GamePhase::GameOver || !self.is_settled() {
            return MoveOutcome::rejected(self.board.clone(), self.phase == GamePhase::GameOver);
        }

        let mut board = resolve(&self.board, direction);
        let changed = !board.same_levels(&self.board);

        let mut score_delta = 0;
        let mut reached_milestone = false;
        for tile in board.tiles().filter(|tile| tile.merging) {
            score_delta += tile.value();
            if tile.level == self.config.milestone_level {
                reached_milestone = true;
            }
        }

        if changed {
            let id = self.next_tile_id();
            let level = spawn::roll_level(&mut self.rng, self.config.level_two_chance);
            spawn::spawn_random_tile(&mut board, id, level, &mut self.rng);
            if is_terminal(&board) {
                self.phase = GamePhase::GameOver;
            }
        }

        self.board = board.clone();
        MoveOutcome {
            board,
            changed,
            score_delta,
            reached_milestone,
            game_over: self.phase == GamePhase::GameOver,
        }
    }

    /// Re-seed for a new session; the only exit from `GameOver`
    pub fn reset(&mut self, seed: u64) {
        self.seed = seed;
        self.rng = Pcg32::seed_from_u64(seed);
        self.next_id = 1;
        self.phase = GamePhase::Playing;
        self.board = Board::new(self.config.rows, self.config.cols);
        self.seed_board();
    }
}
