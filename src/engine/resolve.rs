//! Directional move resolution
//!
//! A move slides every tile toward one edge and merges equal-level pairs.
//! The resolver is a pure function: it reads the input board and builds a
//! fresh output board, never mutating the previous one.

use serde::{Deserialize, Serialize};

use super::board::{Board, Tile};

/// A swipe direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions, for exhaustive scans
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];
}

/// Slide and merge every tile toward the `direction` edge.
///
/// Each line perpendicular to the edge is compacted independently: tiles
/// nearest the destination edge are placed first, a tile merges at most once
/// per move, and a merged cell keeps the moving tile's identity with its
/// level raised by one and `merging` set. Display positions are carried over
/// unchanged so tiles animate from where they last were.
pub fn resolve(board: &Board, direction: Direction) -> Board {
    let mut out = Board::new(board.rows(), board.cols());
    match direction {
        Direction::Left | Direction::Right => {
            for row in 0..board.rows() {
                let line = collect_row(board, row, direction);
                for (slot, tile) in pack_line(line).into_iter().enumerate() {
                    let col = match direction {
                        Direction::Left => slot,
                        Direction::Right => board.cols() - 1 - slot,
                        Direction::Up | Direction::Down => unreachable!(),
                    };
                    place(&mut out, row, col, tile);
                }
            }
        }
        Direction::Up | Direction::Down => {
            for col in 0..board.cols() {
                let line = collect_col(board, col, direction);
                for (slot, tile) in pack_line(line).into_iter().enumerate() {
                    let row = match direction {
                        Direction::Up => slot,
                        Direction::Down => board.rows() - 1 - slot,
                        Direction::Left | Direction::Right => unreachable!(),
                    };
                    place(&mut out, row, col, tile);
                }
            }
        }
    }
    out
}

/// Tiles of one row, ordered from the destination edge inward
fn collect_row(board: &Board, row: usize, direction: Direction) -> Vec<Tile> {
    let cols = 0..board.cols();
    match direction {
        Direction::Left => cols.filter_map(|col| lift(board, row, col)).collect(),
        Direction::Right => cols.rev().filter_map(|col| lift(board, row, col)).collect(),
        Direction::Up | Direction::Down => unreachable!(),
    }
}

/// Tiles of one column, ordered from the destination edge inward
fn collect_col(board: &Board, col: usize, direction: Direction) -> Vec<Tile> {
    let rows = 0..board.rows();
    match direction {
        Direction::Up => rows.filter_map(|row| lift(board, row, col)).collect(),
        Direction::Down => rows.rev().filter_map(|row| lift(board, row, col)).collect(),
        Direction::Left | Direction::Right => unreachable!(),
    }
}

/// Copy a tile out of the input board with its merge flag reset; the flag
/// belongs to a single resolution pass
fn lift(board: &Board, row: usize, col: usize) -> Option<Tile> {
    board.get(row, col).map(|tile| Tile {
        merging: false,
        ..tile.clone()
    })
}

/// Compact one line of tiles toward its front.
///
/// `tiles` is ordered from the destination edge inward. A tile merges into
/// the previously placed tile when the levels match and that tile has not
/// already merged this move; otherwise it stacks behind it. A merge places
/// the moving tile's identity in the target slot with `level + 1`.
fn pack_line(tiles: Vec<Tile>) -> Vec<Tile> {
    let mut packed: Vec<Tile> = Vec::with_capacity(tiles.len());
    for tile in tiles {
        match packed.last() {
            Some(last) if last.level == tile.level && !last.merging => {
                let slot = packed.len() - 1;
                packed[slot] = Tile {
                    level: tile.level + 1,
                    merging: true,
                    ..tile
                };
            }
            _ => packed.push(tile),
        }
    }
    packed
}

/// Drop a tile into its resolved cell, stamping the grid position but
/// leaving the display position where the move started
fn place(out: &mut Board, row: usize, col: usize, mut tile: Tile) {
    tile.row = row;
    tile.col = col;
    out.set(row, col, Some(tile));
}
