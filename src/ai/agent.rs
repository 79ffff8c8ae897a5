use rand::rngs::StdRng;
use rand::SeedableRng;

use super::{choose_move, Difficulty};
use crate::game::{Board, Player};

/// Anything that can pick a column for a side.
pub trait Agent {
    /// Select a playable column for `me`, or `None` if the board is full.
    fn select_action(&mut self, board: &Board, me: Player) -> Option<usize>;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}

/// Computer opponent: a difficulty tier plus its own random source.
pub struct ComputerPlayer {
    difficulty: Difficulty,
    rng: StdRng,
}

impl ComputerPlayer {
    pub fn new(difficulty: Difficulty) -> Self {
        ComputerPlayer {
            difficulty,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Reproducible player for tests and benchmark runs.
    pub fn seeded(difficulty: Difficulty, seed: u64) -> Self {
        ComputerPlayer {
            difficulty,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn with_seed(difficulty: Difficulty, seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(difficulty, seed),
            None => Self::new(difficulty),
        }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
    }
}

impl Agent for ComputerPlayer {
    fn select_action(&mut self, board: &Board, me: Player) -> Option<usize> {
        choose_move(board, me, me.other(), self.difficulty, &mut self.rng)
    }

    fn name(&self) -> &str {
        self.difficulty.name()
    }
}
