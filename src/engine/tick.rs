//! Display-position animation
//!
//! Rule state never depends on anything here: `advance` only walks each
//! tile's displayed position toward its grid cell, and `settled` is the
//! query callers use to gate input while tiles are in flight.

use crate::{cell_pos, consts::SLIDE_SPEED};

use super::board::{Board, Tile};

/// Advance every in-flight tile by `elapsed_ms` of linear motion.
///
/// Each axis steps independently and clamps at the destination. A tile that
/// lands has its `merging` flag cleared, which ends the merge animation
/// cycle begun by the resolver.
pub fn advance(board: &mut Board, elapsed_ms: f32) {
    let step = SLIDE_SPEED * elapsed_ms / 1000.0;
    for tile in board.tiles_mut() {
        let dest = cell_pos(tile.row, tile.col);
        tile.pos.x = step_toward(tile.pos.x, dest.x, step);
        tile.pos.y = step_toward(tile.pos.y, dest.y, step);
        if tile.merging && tile.pos == dest {
            tile.merging = false;
        }
    }
}

/// True when every tile's displayed position matches its grid cell
pub fn settled(board: &Board) -> bool {
    board.tiles().all(Tile::landed)
}

fn step_toward(current: f32, destination: f32, step: f32) -> f32 {
    if current < destination {
        (current + step).min(destination)
    } else if current > destination {
        (current - step).max(destination)
    } else {
        destination
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::resolve::{Direction, resolve};

    #[test]
    fn test_advance_moves_linearly_and_settles() {
        let board = Board::from_levels(&[
            &[0, 0, 0, 1],
            &[0, 0, 0, 0],
            &[0, 0, 0, 0],
            &[0, 0, 0, 0],
        ]);
        let mut board = resolve(&board, Direction::Left);
        assert!(!settled(&board));

        // 10 ms at 50 cells/s moves half a cell.
        advance(&mut board, 10.0);
        let tile = board.get(0, 0).expect("tile");
        assert!((tile.pos.x - 2.5).abs() < 1e-5);
        assert!(!settled(&board));

        advance(&mut board, 1000.0);
        let tile = board.get(0, 0).expect("tile");
        assert_eq!(tile.pos, cell_pos(0, 0));
        assert!(settled(&board));
    }

    #[test]
    fn test_merging_flag_clears_on_landing() {
        let board = Board::from_levels(&[
            &[1, 1, 0, 0],
            &[0, 0, 0, 0],
            &[0, 0, 0, 0],
            &[0, 0, 0, 0],
        ]);
        let mut board = resolve(&board, Direction::Left);
        assert!(board.get(0, 0).expect("merged").merging);

        advance(&mut board, 5.0);
        assert!(board.get(0, 0).expect("merged").merging);

        advance(&mut board, 1000.0);
        assert!(!board.get(0, 0).expect("merged").merging);
        assert!(settled(&board));
    }
}
