use std::fmt;

use super::Player;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Red,
    Yellow,
}

impl Cell {
    /// The player owning this cell, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Red => Some(Player::Red),
            Cell::Yellow => Some(Player::Yellow),
        }
    }

    fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Red => 'R',
            Cell::Yellow => 'Y',
        }
    }
}

/// A grid position. Row 0 is the top, column 0 the leftmost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Coord { row, col }
    }
}

/// Immutable 6x7 grid. Every drop yields a new board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; COLS]; ROWS],
        }
    }

    /// Parse a picture of six rows, top first, using `.`, `R` and `Y`.
    ///
    /// Gravity is not checked, so floating pieces are accepted. Returns
    /// `None` when a row has the wrong width or an unknown symbol.
    pub fn from_rows(rows: [&str; ROWS]) -> Option<Self> {
        let mut board = Board::new();
        for (row, line) in rows.iter().enumerate() {
            let symbols: Vec<char> = line.chars().filter(|c| !c.is_whitespace()).collect();
            if symbols.len() != COLS {
                return None;
            }
            for (col, symbol) in symbols.into_iter().enumerate() {
                board.cells[row][col] = match symbol {
                    '.' => Cell::Empty,
                    'R' => Cell::Red,
                    'Y' => Cell::Yellow,
                    _ => return None,
                };
            }
        }
        Some(board)
    }

    /// Get the cell at a specific position.
    ///
    /// Panics if the coordinate lies outside the grid; callers must only
    /// pass coordinates they derived from `ROWS` and `COLS`.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        assert!(
            row < ROWS && col < COLS,
            "cell ({row}, {col}) is outside the {ROWS}x{COLS} board"
        );
        self.cells[row][col]
    }

    pub fn at(&self, coord: Coord) -> Cell {
        self.get(coord.row, coord.col)
    }

    /// Check if a column is full
    pub fn is_column_full(&self, col: usize) -> bool {
        self.get(0, col) != Cell::Empty
    }

    /// Row a token dropped into `col` would land on, or `None` if the column is full.
    pub fn landing_row(&self, col: usize) -> Option<usize> {
        (0..ROWS).rev().find(|&row| self.get(row, col) == Cell::Empty)
    }

    /// Columns that still accept a token, in ascending order.
    pub fn playable_columns(&self) -> Vec<usize> {
        (0..COLS).filter(|&col| !self.is_column_full(col)).collect()
    }

    /// Board with `player`'s token dropped into `col`, or `None` if the
    /// column is full. `self` is left untouched.
    pub fn with_drop(&self, col: usize, player: Player) -> Option<Board> {
        let row = self.landing_row(col)?;
        let mut next = *self;
        next.cells[row][col] = player.to_cell();
        Some(next)
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..COLS).all(|col| self.is_column_full(col))
    }

    /// Number of tokens on the board.
    pub fn token_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell != Cell::Empty)
            .count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{}", cell.symbol())?;
            }
        }
        Ok(())
    }
}
