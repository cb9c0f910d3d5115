//! Terminal-state detection

use super::board::{Board, levels_equal};

/// True when no legal move remains: every cell is occupied and no two
/// orthogonal neighbors share a level.
///
/// Adjacency takes precedence over fullness: a full board with one equal
/// pair anywhere is still playable.
pub fn is_terminal(board: &Board) -> bool {
    if !board.is_full() {
        return false;
    }
    for row in 0..board.rows() {
        for col in 0..board.cols() {
            let cell = board.get(row, col);
            if col + 1 < board.cols() && levels_equal(cell, board.get(row, col + 1)) {
                return false;
            }
            if row + 1 < board.rows() && levels_equal(cell, board.get(row + 1, col)) {
                return false;
            }
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_with_empty_cell_is_not_terminal() {
        let board = Board::from_levels(&[
            &[1, 2, 1, 2],
            &[3, 4, 3, 4],
            &[1, 2, 0, 2],
            &[3, 4, 3, 4],
        ]);
        assert!(!is_terminal(&board));
    }

    #[test]
    fn test_full_board_without_adjacent_pairs_is_terminal() {
        let board = Board::from_levels(&[
            &[1, 2, 1, 2],
            &[3, 4, 3, 4],
            &[1, 2, 1, 2],
            &[3, 4, 3, 4],
        ]);
        assert!(is_terminal(&board));
    }

    #[test]
    fn test_adjacency_beats_fullness() {
        // Full board, but one horizontal pair keeps it alive...
        let board = Board::from_levels(&[
            &[1, 2, 1, 2],
            &[3, 4, 3, 4],
            &[1, 2, 2, 2],
            &[3, 4, 3, 5],
        ]);
        assert!(!is_terminal(&board));

        // ...and so does a vertical pair.
        let board = Board::from_levels(&[
            &[1, 2, 1, 2],
            &[3, 4, 3, 4],
            &[1, 4, 1, 2],
            &[3, 5, 3, 4],
        ]);
        assert!(!is_terminal(&board));
    }
}
