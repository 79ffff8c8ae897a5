use rand::Rng;

use crate::game::Board;

/// Uniformly random playable column, or `None` on a full board.
pub fn random_column<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<usize> {
    let playable = board.playable_columns();
    if playable.is_empty() {
        return None;
    }
    let idx = rng.random_range(0..playable.len());
    Some(playable[idx])
}
