//! Tile spawning
//!
//! After every move that changed the board, exactly one new tile appears in
//! a uniformly chosen empty cell.

use rand::Rng;

use super::board::{Board, Tile, TileId};

/// Roll the level of a freshly created tile: 1, or 2 at `level_two_chance`
pub fn roll_level<R: Rng + ?Sized>(rng: &mut R, level_two_chance: f64) -> u8 {
    if rng.random_bool(level_two_chance) { 2 } else { 1 }
}

/// Place a new tile in a uniformly chosen empty cell, returning where it
/// landed.
///
/// Panics when the board has no empty cell: the engine only spawns after a
/// changed move, so a full board here means the endgame detector missed a
/// terminal state on the previous move.
pub fn spawn_random_tile<R: Rng + ?Sized>(
    board: &mut Board,
    id: TileId,
    level: u8,
    rng: &mut R,
) -> (usize, usize) {
    let empty = board.count_empty();
    assert!(empty > 0, "spawn requested on a full board");

    let target = rng.random_range(0..empty);
    let mut seen = 0;
    for row in 0..board.rows() {
        for col in 0..board.cols() {
            if board.get(row, col).is_none() {
                if seen == target {
                    board.set(row, col, Some(Tile::new(id, level, row, col)));
                    return (row, col);
                }
                seen += 1;
            }
        }
    }
    unreachable!("empty-cell count disagreed with the scan");
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_spawn_fills_the_only_empty_cell() {
        let mut board = Board::from_levels(&[
            &[1, 2, 3, 4],
            &[5, 6, 7, 8],
            &[1, 2, 0, 4],
            &[5, 6, 7, 8],
        ]);
        let mut rng = Pcg32::seed_from_u64(7);
        let (row, col) = spawn_random_tile(&mut board, TileId(100), 1, &mut rng);
        assert_eq!((row, col), (2, 2));
        assert!(board.is_full());
        assert_eq!(board.get(2, 2).expect("spawned").id, TileId(100));
    }

    #[test]
    #[should_panic(expected = "full board")]
    fn test_spawn_on_full_board_panics() {
        let mut board = Board::from_levels(&[&[1, 2], &[3, 4]]);
        let mut rng = Pcg32::seed_from_u64(7);
        spawn_random_tile(&mut board, TileId(100), 1, &mut rng);
    }

    #[test]
    fn test_level_roll_distribution() {
        let mut rng = Pcg32::seed_from_u64(42);
        let trials = 2000;
        let twos = (0..trials)
            .filter(|_| roll_level(&mut rng, 0.1) == 2)
            .count();
        // Expected 200; allow a generous band around it.
        assert!((120..=280).contains(&twos), "got {twos} level-2 rolls");
    }

    #[test]
    fn test_spawn_reaches_every_cell() {
        let mut rng = Pcg32::seed_from_u64(9);
        let mut hits = vec![0u32; 16];
        for _ in 0..2000 {
            let mut board = Board::new(4, 4);
            let (row, col) = spawn_random_tile(&mut board, TileId(1), 1, &mut rng);
            hits[row * 4 + col] += 1;
        }
        assert!(hits.iter().all(|&n| n > 50), "cell counts {hits:?}");
    }
}
