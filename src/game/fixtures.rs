//! Shared positions for tests.

/// A legal move sequence, Red first, that fills the board without any
/// four-in-a-row. Yellow makes the final move.
pub(crate) const DRAW_SEQUENCE: [usize; 42] = [
    3, 4, 4, 6, 0, 3, 5, 2, 6, 5, 0, 6, 5, 0, 3, 6, 5, 6, 1, 3, 1, 3, 6, 5, 2, 0, 5, 3, 4, 4, 0,
    1, 1, 1, 0, 1, 4, 2, 4, 2, 2, 2,
];

/// The board `DRAW_SEQUENCE` ends on.
pub(crate) const DRAW_ROWS: [&str; 6] = [
    "RYYYRRR",
    "RYRYRYY",
    "YRYYYRY",
    "YYYRRRY",
    "RRRYRYR",
    "RRYRYRY",
];
