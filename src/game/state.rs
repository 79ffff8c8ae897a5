use log::{debug, info, trace};

use super::board::{Board, Coord, COLS};
use super::detect::{detect, Outcome};
use super::Player;

/// Reasons a move is refused. The state is left unchanged in both cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("the game is already over")]
    GameAlreadyOver,

    #[error("column {} is full", .0 + 1)]
    ColumnFull(usize),
}

/// Win counters for a session. Draws are not counted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub red: u32,
    pub yellow: u32,
}

impl Score {
    pub fn get(&self, player: Player) -> u32 {
        match player {
            Player::Red => self.red,
            Player::Yellow => self.yellow,
        }
    }

    fn record_win(mut self, player: Player) -> Self {
        match player {
            Player::Red => self.red += 1,
            Player::Yellow => self.yellow += 1,
        }
        self
    }
}

/// Authoritative state of a session: board, mover, outcome and scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    current_player: Player,
    outcome: Outcome,
    score: Score,
    starter: Player,
}

impl GameState {
    /// Create initial game state
    pub fn initial() -> Self {
        Self::round(Player::Red, Score::default())
    }

    fn round(starter: Player, score: Score) -> Self {
        GameState {
            board: Board::new(),
            current_player: starter,
            outcome: Outcome::InProgress,
            score,
            starter,
        }
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    pub fn score(&self) -> Score {
        self.score
    }

    /// Player who opened the current round.
    pub fn starter(&self) -> Player {
        self.starter
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_terminal()
    }

    pub fn winning_line(&self) -> Option<&[Coord; 4]> {
        self.outcome.winning_line()
    }

    /// Get list of legal columns (not full)
    pub fn legal_actions(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }
        self.board.playable_columns()
    }

    /// Apply a move and return the new state.
    ///
    /// The mover only changes when the game continues. Panics if `column`
    /// is not below `COLS`.
    pub fn apply_move(&self, column: usize) -> Result<GameState, MoveError> {
        assert!(column < COLS, "column {column} is outside the board");

        if self.is_terminal() {
            return Err(MoveError::GameAlreadyOver);
        }

        let mover = self.current_player;
        let board = self
            .board
            .with_drop(column, mover)
            .ok_or(MoveError::ColumnFull(column))?;
        trace!("{} drops into column {}:\n{}", mover.name(), column, board);

        let outcome = detect(&board);
        let (current_player, score) = match &outcome {
            Outcome::InProgress => (mover.other(), self.score),
            Outcome::Win(win) => {
                info!("{} wins with {:?}", win.winner.name(), win.line);
                (mover, self.score.record_win(win.winner))
            }
            Outcome::Draw => {
                info!("round ends in a draw");
                (mover, self.score)
            }
        };

        Ok(GameState {
            board,
            current_player,
            outcome,
            score,
            starter: self.starter,
        })
    }

    /// Fresh round keeping the scores.
    ///
    /// The loser of a won round starts. After a draw the player who moved
    /// second starts; an unfinished round restarts with the same starter.
    pub fn next_round(&self) -> GameState {
        let starter = match &self.outcome {
            Outcome::Win(win) => win.winner.other(),
            Outcome::Draw => self.starter.other(),
            Outcome::InProgress => self.starter,
        };
        debug!("new round, {} moves first", starter.name());
        Self::round(starter, self.score)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial()
    }
}
