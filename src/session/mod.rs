//! Game session controller: the single owner of game state, plus the
//! cancelable deferred computer move.

mod controller;
mod schedule;

pub use controller::{GameMode, GameSession};
pub use schedule::AiTicket;
