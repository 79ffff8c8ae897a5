//! Computer opponents: difficulty tiers, the shallow tactical move
//! selector, and the `Agent` trait the session and arena drive.

mod agent;
mod difficulty;
mod random;
pub mod tactics;

pub use agent::{Agent, ComputerPlayer};
pub use difficulty::Difficulty;
pub use random::random_column;
pub use tactics::{choose_move, decide, Decision, Reason};
