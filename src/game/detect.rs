use super::board::{Board, Coord, COLS, ROWS};
use super::Player;

const RUN: usize = 4;

/// A completed four-in-a-row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinResult {
    pub winner: Player,
    pub line: [Coord; RUN],
}

/// Classification of a board after a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    Win(WinResult),
    Draw,
}

impl Outcome {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Win(win) => Some(win.winner),
            _ => None,
        }
    }

    pub fn winning_line(&self) -> Option<&[Coord; RUN]> {
        match self {
            Outcome::Win(win) => Some(&win.line),
            _ => None,
        }
    }
}

/// Classify a board: the first four-in-a-row in scan order, else draw if
/// the grid is full, else still in progress.
pub fn detect(board: &Board) -> Outcome {
    if let Some(win) = find_line(board) {
        return Outcome::Win(win);
    }
    if board.is_full() {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}

/// First four-in-a-row found, scanning horizontal, vertical, then both
/// diagonals.
pub fn find_line(board: &Board) -> Option<WinResult> {
    horizontal_starts()
        .chain(vertical_starts())
        .chain(diagonal_down_starts())
        .chain(diagonal_up_starts())
        .find_map(|(start, step)| check_run(board, start, step))
}

type Step = (isize, isize);

// Rows top to bottom, columns left to right, line read left to right.
fn horizontal_starts() -> impl Iterator<Item = (Coord, Step)> {
    (0..ROWS).flat_map(|row| (0..=COLS - RUN).map(move |col| (Coord::new(row, col), (0, 1))))
}

// Columns left to right, starting at the bottom and reading upward.
fn vertical_starts() -> impl Iterator<Item = (Coord, Step)> {
    (0..COLS).flat_map(|col| {
        (RUN - 1..ROWS)
            .rev()
            .map(move |row| (Coord::new(row, col), (-1, 0)))
    })
}

// Top-left to bottom-right (\).
fn diagonal_down_starts() -> impl Iterator<Item = (Coord, Step)> {
    (0..=ROWS - RUN).flat_map(|row| (0..=COLS - RUN).map(move |col| (Coord::new(row, col), (1, 1))))
}

// Top-right to bottom-left (/).
fn diagonal_up_starts() -> impl Iterator<Item = (Coord, Step)> {
    (0..=ROWS - RUN).flat_map(|row| (RUN - 1..COLS).map(move |col| (Coord::new(row, col), (1, -1))))
}

fn check_run(board: &Board, start: Coord, (dr, dc): Step) -> Option<WinResult> {
    let owner = board.at(start).player()?;
    let mut line = [start; RUN];
    for (i, slot) in line.iter_mut().enumerate().skip(1) {
        let coord = Coord::new(
            (start.row as isize + dr * i as isize) as usize,
            (start.col as isize + dc * i as isize) as usize,
        );
        if board.at(coord).player() != Some(owner) {
            return None;
        }
        *slot = coord;
    }
    Some(WinResult {
        winner: owner,
        line,
    })
}
