//! Core Connect Four game logic: board representation, players, win/draw
//! detection and the move engine with immutable transitions.

mod board;
mod detect;
mod player;
mod state;

#[cfg(test)]
pub(crate) mod fixtures;

pub use board::{Board, Cell, Coord, COLS, ROWS};
pub use detect::{detect, find_line, Outcome, WinResult};
pub use player::Player;
pub use state::{GameState, MoveError, Score};
