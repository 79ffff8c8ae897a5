use crate::game::Player;

/// Result of a single round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundRecord {
    pub winner: Option<Player>,
    pub starter: Player,
    pub moves: usize,
}

/// Running tallies over an arena run.
#[derive(Debug, Clone, Default)]
pub struct ArenaMetrics {
    rounds: Vec<RoundRecord>,
}

impl ArenaMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, record: RoundRecord) {
        self.rounds.push(record);
    }

    pub fn total_rounds(&self) -> usize {
        self.rounds.len()
    }

    pub fn wins(&self, player: Player) -> usize {
        self.rounds
            .iter()
            .filter(|r| r.winner == Some(player))
            .count()
    }

    pub fn draws(&self) -> usize {
        self.rounds.iter().filter(|r| r.winner.is_none()).count()
    }

    /// Share of rounds won by `player`.
    pub fn win_rate(&self, player: Player) -> f32 {
        self.rate(self.wins(player))
    }

    pub fn draw_rate(&self) -> f32 {
        self.rate(self.draws())
    }

    /// Share of rounds won by whoever moved first.
    pub fn starter_win_rate(&self) -> f32 {
        let n = self
            .rounds
            .iter()
            .filter(|r| r.winner == Some(r.starter))
            .count();
        self.rate(n)
    }

    pub fn average_round_length(&self) -> f32 {
        if self.rounds.is_empty() {
            return 0.0;
        }
        let total: usize = self.rounds.iter().map(|r| r.moves).sum();
        total as f32 / self.rounds.len() as f32
    }

    fn rate(&self, count: usize) -> f32 {
        if self.rounds.is_empty() {
            return 0.0;
        }
        count as f32 / self.rounds.len() as f32
    }
}
