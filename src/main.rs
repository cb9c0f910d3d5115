//! Gridmerge entry point
//!
//! A thin stdin driver around the engine: decoded directions in, board
//! snapshots and banners out. Gesture recognition and graphics are external
//! concerns; single letters already are the direction enum the engine
//! consumes.

use std::io::{self, BufRead};
use std::time::{SystemTime, UNIX_EPOCH};

use gridmerge::consts::TICK_MS;
use gridmerge::engine::{Direction, Game, GamePhase};
use gridmerge::{GameConfig, ScoreBoard};

fn main() {
    env_logger::init();

    let config = GameConfig::load();
    let mut scores = ScoreBoard::load();
    let seed = time_seed();
    let mut game = Game::new(config, seed);
    log::info!("New game with seed {seed}");

    println!("gridmerge: w/a/s/d to move, r to restart, q to quit");
    print_state(&game, &scores);

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let Ok(line) = line else { break };
        match line.trim().chars().next() {
            None => continue,
            Some('q') => break,
            Some('r') => {
                scores.save();
                scores.reset();
                let seed = time_seed();
                game.reset(seed);
                log::info!("Restarted with seed {seed}");
            }
            Some(key) => {
                let Some(direction) = decode(key) else {
                    println!("unknown command: {key}");
                    continue;
                };
                let outcome = game.apply_move(direction);
                settle(&mut game);
                if outcome.changed {
                    scores.add_points(outcome.score_delta);
                    if outcome.reached_milestone {
                        scores.mark_milestone();
                    }
                }
                if outcome.game_over {
                    scores.save();
                }
            }
        }
        print_state(&game, &scores);
        if game.phase() == GamePhase::GameOver {
            println!("game over: r to restart, q to quit");
        }
    }

    scores.save();
}

/// Run the slide animation to completion at a fixed cadence
fn settle(game: &mut Game) {
    while !game.is_settled() {
        game.tick_animation(TICK_MS);
    }
}

fn decode(key: char) -> Option<Direction> {
    match key {
        'w' => Some(Direction::Up),
        's' => Some(Direction::Down),
        'a' => Some(Direction::Left),
        'd' => Some(Direction::Right),
        _ => None,
    }
}

fn print_state(game: &Game, scores: &ScoreBoard) {
    println!("{}", game.board());
    let mut line = format!("score {}   top {}", scores.score, scores.top_score);
    if scores.new_top_score {
        line.push_str("   new top score!");
    }
    if scores.reached_milestone {
        let value = 1u64 << game.config().milestone_level;
        line.push_str(&format!("   reached {value}!"));
    }
    println!("{line}");
}

fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
