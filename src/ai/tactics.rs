//! Tiered move selection. Every tier is shallow on purpose: the strongest
//! looks two plies ahead and nothing deeper.

use log::debug;
use rand::Rng;

use super::random::random_column;
use super::Difficulty;
use crate::game::{find_line, Board, Player, COLS};

/// Column ordering for the Hard tier: center first.
pub const PREFERENCE_ORDER: [usize; COLS] = [3, 2, 4, 1, 5, 0, 6];

/// Why a column was picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reason {
    /// Completes four for the computer.
    Win,
    /// Stops the opponent completing four.
    Block,
    /// Safe from an immediate reply and leaves two winning threats.
    Favorable,
    Random,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    pub column: usize,
    pub reason: Reason,
}

/// Pick a column for `ai` on a non-terminal board.
///
/// Returns `None` only when no column is playable.
pub fn choose_move<R: Rng + ?Sized>(
    board: &Board,
    ai: Player,
    opponent: Player,
    difficulty: Difficulty,
    rng: &mut R,
) -> Option<usize> {
    decide(board, ai, opponent, difficulty, rng).map(|d| d.column)
}

/// Like [`choose_move`] but also reports which rule produced the column.
pub fn decide<R: Rng + ?Sized>(
    board: &Board,
    ai: Player,
    opponent: Player,
    difficulty: Difficulty,
    rng: &mut R,
) -> Option<Decision> {
    let tactical = match difficulty {
        Difficulty::Easy => None,
        Difficulty::Medium => win_or_block(board, ai, opponent),
        Difficulty::Hard => win_or_block(board, ai, opponent)
            .or_else(|| first_favorable(board, ai, opponent)),
    };

    let decision = tactical.or_else(|| {
        random_column(board, rng).map(|column| Decision {
            column,
            reason: Reason::Random,
        })
    });
    if let Some(d) = decision {
        debug!(
            "{} ({}) picks column {} ({:?})",
            ai.name(),
            difficulty.name(),
            d.column,
            d.reason
        );
    }
    decision
}

/// Playable columns where dropping `player` completes four, ascending.
pub fn winning_columns(board: &Board, player: Player) -> Vec<usize> {
    (0..COLS)
        .filter(|&col| wins_by_dropping(board, col, player))
        .collect()
}

/// Whether dropping `player` into `col` gives `player` four in a row.
pub fn wins_by_dropping(board: &Board, col: usize, player: Player) -> bool {
    board
        .with_drop(col, player)
        .and_then(|next| find_line(&next))
        .is_some_and(|win| win.winner == player)
}

/// Two-ply check of the board reached after the computer's move.
///
/// Rejected when the opponent could complete four on the reply. Accepted
/// only when the computer then holds at least two winning columns, which
/// one reply cannot both block.
pub fn is_favorable(after_move: &Board, ai: Player, opponent: Player) -> bool {
    if !winning_columns(after_move, opponent).is_empty() {
        return false;
    }
    winning_columns(after_move, ai).len() >= 2
}

fn win_or_block(board: &Board, ai: Player, opponent: Player) -> Option<Decision> {
    let first_win = |player| (0..COLS).find(|&col| wins_by_dropping(board, col, player));

    if let Some(column) = first_win(ai) {
        return Some(Decision {
            column,
            reason: Reason::Win,
        });
    }
    first_win(opponent).map(|column| Decision {
        column,
        reason: Reason::Block,
    })
}

fn first_favorable(board: &Board, ai: Player, opponent: Player) -> Option<Decision> {
    PREFERENCE_ORDER
        .iter()
        .copied()
        .find(|&col| {
            board
                .with_drop(col, ai)
                .is_some_and(|after| is_favorable(&after, ai, opponent))
        })
        .map(|column| Decision {
            column,
            reason: Reason::Favorable,
        })
}
