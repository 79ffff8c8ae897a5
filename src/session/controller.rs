use std::time::{Duration, Instant};

use log::{debug, info, warn};

use super::AiTicket;
use crate::ai::{Agent, ComputerPlayer, Difficulty};
use crate::config::{GameConfig, Opponent};
use crate::game::{GameState, MoveError, Player};

/// Who sits on each side of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    HumanVsHuman,
    HumanVsComputer { computer: Player },
}

impl GameMode {
    /// The side the computer plays, if any.
    pub fn computer(self) -> Option<Player> {
        match self {
            GameMode::HumanVsHuman => None,
            GameMode::HumanVsComputer { computer } => Some(computer),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            GameMode::HumanVsHuman => "Human vs Human",
            GameMode::HumanVsComputer { .. } => "Human vs Computer",
        }
    }
}

/// Owns the single authoritative game state of a session.
///
/// Every accepted transition (a move from either side or a reset) bumps a
/// generation counter. When the computer is to move, an [`AiTicket`] for
/// the current generation is scheduled; a ticket from an older generation
/// is discarded instead of being played onto a board it was not chosen for.
pub struct GameSession {
    state: GameState,
    mode: GameMode,
    computer: ComputerPlayer,
    ai_delay: Duration,
    generation: u64,
    pending: Option<AiTicket>,
}

impl GameSession {
    pub fn new(mode: GameMode, computer: ComputerPlayer, ai_delay: Duration) -> Self {
        let mut session = GameSession {
            state: GameState::initial(),
            mode,
            computer,
            ai_delay,
            generation: 0,
            pending: None,
        };
        session.schedule_if_computer_turn(Instant::now());
        session
    }

    pub fn from_config(config: &GameConfig) -> Self {
        let mode = match config.opponent {
            Opponent::Human => GameMode::HumanVsHuman,
            Opponent::Computer => GameMode::HumanVsComputer {
                computer: config.computer_player,
            },
        };
        let computer = ComputerPlayer::with_seed(config.difficulty, config.seed);
        Self::new(mode, computer, Duration::from_millis(config.ai_delay_ms))
    }

    /// Read-only snapshot of the current state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn difficulty(&self) -> Difficulty {
        self.computer.difficulty()
    }

    /// Change the computer's tier. Applies from the next computer move on,
    /// including one already scheduled.
    pub fn configure_difficulty(&mut self, difficulty: Difficulty) {
        debug!("difficulty set to {}", difficulty.name());
        self.computer.set_difficulty(difficulty);
    }

    pub fn is_computer_turn(&self) -> bool {
        !self.state.is_terminal() && self.mode.computer() == Some(self.state.current_player())
    }

    /// The computer move waiting to be played, if any.
    pub fn pending_ai_turn(&self) -> Option<AiTicket> {
        self.pending
    }

    /// Drop the current player's token into `column`.
    ///
    /// A rejected move leaves the state and any pending computer move as
    /// they were. An accepted one cancels a pending computer move.
    pub fn request_move(&mut self, column: usize) -> Result<GameState, MoveError> {
        self.request_move_at(column, Instant::now())
    }

    pub fn request_move_at(&mut self, column: usize, now: Instant) -> Result<GameState, MoveError> {
        let next = self.state.apply_move(column)?;
        self.commit(next, now);
        Ok(next)
    }

    /// Start a new round: empty board, loser of the last round to move,
    /// scores kept.
    pub fn reset(&mut self) -> GameState {
        self.reset_at(Instant::now())
    }

    pub fn reset_at(&mut self, now: Instant) -> GameState {
        let next = self.state.next_round();
        info!(
            "new round: {} moves first (score Red {} - Yellow {})",
            next.current_player().name(),
            next.score().red,
            next.score().yellow
        );
        self.commit(next, now);
        next
    }

    /// Play the pending computer move if it is due at `now`.
    pub fn poll_ai(&mut self, now: Instant) -> Option<GameState> {
        let ticket = self.pending?;
        if !ticket.is_due(now) {
            return None;
        }
        self.play_ticket(ticket, now)
    }

    /// Play the computer move for `ticket`, typically from an external
    /// timer. Returns `None` without touching the state if the ticket has
    /// been superseded.
    pub fn run_ai_turn(&mut self, ticket: AiTicket) -> Option<GameState> {
        self.play_ticket(ticket, Instant::now())
    }

    fn play_ticket(&mut self, ticket: AiTicket, now: Instant) -> Option<GameState> {
        if self.pending != Some(ticket) {
            debug!(
                "discarding stale computer move from generation {} (now {})",
                ticket.generation(),
                self.generation
            );
            return None;
        }
        self.pending = None;

        if !self.is_computer_turn() {
            return None;
        }
        let me = self.state.current_player();
        let column = self.computer.select_action(self.state.board(), me)?;
        match self.state.apply_move(column) {
            Ok(next) => {
                self.commit(next, now);
                Some(next)
            }
            Err(err) => {
                warn!("computer move into column {} rejected: {}", column, err);
                None
            }
        }
    }

    fn commit(&mut self, next: GameState, now: Instant) {
        self.state = next;
        self.generation += 1;
        self.pending = None;
        self.schedule_if_computer_turn(now);
    }

    fn schedule_if_computer_turn(&mut self, now: Instant) {
        if self.is_computer_turn() {
            let ticket = AiTicket::new(self.generation, now, self.ai_delay);
            debug!(
                "computer move scheduled for generation {} in {:?}",
                self.generation, self.ai_delay
            );
            self.pending = Some(ticket);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::fixtures::DRAW_SEQUENCE;
    use crate::game::{Cell, Coord, Outcome, Score, ROWS};

    const DELAY: Duration = Duration::from_millis(500);

    fn human_vs_human() -> GameSession {
        GameSession::new(
            GameMode::HumanVsHuman,
            ComputerPlayer::seeded(Difficulty::Easy, 0),
            DELAY,
        )
    }

    fn against_computer(difficulty: Difficulty, seed: u64) -> GameSession {
        GameSession::new(
            GameMode::HumanVsComputer {
                computer: Player::Yellow,
            },
            ComputerPlayer::seeded(difficulty, seed),
            DELAY,
        )
    }

    #[test]
    fn test_human_vs_human_never_schedules() {
        let mut session = human_vs_human();
        session.request_move(3).unwrap();
        session.request_move(3).unwrap();
        assert!(session.pending_ai_turn().is_none());
        assert_eq!(session.state().current_player(), Player::Red);
    }

    #[test]
    fn test_computer_moves_after_delay() {
        let mut session = against_computer(Difficulty::Medium, 1);
        let now = Instant::now();
        session.request_move_at(3, now).unwrap();

        assert!(session.is_computer_turn());
        let ticket = session.pending_ai_turn().expect("computer move scheduled");
        assert_eq!(ticket.due(), now + DELAY);

        assert!(session.poll_ai(now).is_none());
        assert_eq!(session.state().board().token_count(), 1);

        let state = session.poll_ai(now + DELAY).expect("computer moved");
        assert_eq!(state.board().token_count(), 2);
        assert_eq!(state.current_player(), Player::Red);
        assert!(session.pending_ai_turn().is_none());
    }

    #[test]
    fn test_reset_discards_pending_computer_move() {
        let mut session = against_computer(Difficulty::Easy, 2);
        session.request_move(0).unwrap();
        let ticket = session.pending_ai_turn().unwrap();

        let fresh = session.reset();
        assert_eq!(fresh.board().token_count(), 0);
        assert!(session.run_ai_turn(ticket).is_none());
        assert_eq!(session.state().board().token_count(), 0);
        assert_eq!(session.state().current_player(), Player::Red);
    }

    #[test]
    fn test_accepted_human_move_supersedes_ticket() {
        let mut session = against_computer(Difficulty::Easy, 3);
        session.request_move(0).unwrap();
        let stale = session.pending_ai_turn().unwrap();

        // A move for the waiting side arrives before the timer fires.
        session.request_move(6).unwrap();
        assert!(session.run_ai_turn(stale).is_none());
        assert_eq!(session.state().board().token_count(), 2);
        assert!(session.pending_ai_turn().is_none());
    }

    #[test]
    fn test_ticket_plays_only_once() {
        let mut session = against_computer(Difficulty::Easy, 4);
        session.request_move(2).unwrap();
        let ticket = session.pending_ai_turn().unwrap();

        assert!(session.run_ai_turn(ticket).is_some());
        assert!(session.run_ai_turn(ticket).is_none());
        assert_eq!(session.state().board().token_count(), 2);
    }

    #[test]
    fn test_column_full_keeps_state_and_ticket() {
        let mut session = against_computer(Difficulty::Easy, 5);
        // Fill column 1 by playing both sides.
        for _ in 0..ROWS {
            session.request_move(1).unwrap();
        }
        session.request_move(0).unwrap();
        let before = *session.state();
        let ticket = session.pending_ai_turn().unwrap();

        session.configure_difficulty(Difficulty::Medium);
        assert_eq!(session.request_move(1), Err(MoveError::ColumnFull(1)));
        assert_eq!(session.state(), &before);
        assert_eq!(session.pending_ai_turn(), Some(ticket));
    }

    #[test]
    fn test_draw_rejects_further_moves() {
        let mut session = human_vs_human();
        for &col in &DRAW_SEQUENCE {
            session.request_move(col).unwrap();
        }
        assert_eq!(session.state().outcome(), &Outcome::Draw);

        let before = *session.state();
        assert_eq!(session.request_move(3), Err(MoveError::GameAlreadyOver));
        assert_eq!(session.state(), &before);
    }

    #[test]
    fn test_reset_after_win_loser_first_scores_kept() {
        let mut session = human_vs_human();
        for col in [0, 0, 1, 1, 2, 2] {
            session.request_move(col).unwrap();
        }
        let won = session.request_move(3).unwrap();
        assert_eq!(won.outcome().winner(), Some(Player::Red));
        assert_eq!(won.score(), Score { red: 1, yellow: 0 });

        let next = session.reset();
        assert_eq!(next.current_player(), Player::Yellow);
        assert_eq!(next.score(), Score { red: 1, yellow: 0 });
        assert_eq!(next.outcome(), &Outcome::InProgress);
    }

    #[test]
    fn test_losing_computer_opens_next_round() {
        let mut session = against_computer(Difficulty::Easy, 6);
        for col in [0, 0, 1, 1, 2, 2, 3] {
            session.request_move(col).unwrap();
        }
        assert!(session.state().is_terminal());
        assert!(session.pending_ai_turn().is_none());

        let now = Instant::now();
        session.reset_at(now);
        assert!(session.is_computer_turn());
        let state = session.poll_ai(now + DELAY).expect("computer opens");
        assert_eq!(state.board().token_count(), 1);
        assert_eq!(state.current_player(), Player::Red);
    }

    #[test]
    fn test_medium_computer_blocks_through_session() {
        let mut session = against_computer(Difficulty::Medium, 7);
        // Red builds three on the bottom row. Yellow's replies are entered by
        // hand in column 6, so the computer only acts on the last turn.
        for col in [1, 6, 2, 6, 3] {
            session.request_move(col).unwrap();
        }
        let ticket = session.pending_ai_turn().unwrap();
        let state = session.run_ai_turn(ticket).unwrap();
        assert_eq!(state.board().get(5, 0), Cell::Yellow);
    }

    #[test]
    fn test_vertical_win_against_easy_computer() {
        // Find a seed where the random computer stays out of column 3.
        for seed in 0..64 {
            let mut session = against_computer(Difficulty::Easy, seed);
            let mut now = Instant::now();
            let mut blocked = false;

            for _ in 0..3 {
                session.request_move_at(3, now).unwrap();
                now += DELAY;
                session.poll_ai(now).unwrap();
                if (0..ROWS).any(|r| session.state().board().get(r, 3) == Cell::Yellow) {
                    blocked = true;
                    break;
                }
            }
            if blocked {
                continue;
            }

            let won = session.request_move_at(3, now).unwrap();
            assert_eq!(
                won.winning_line(),
                Some(&[
                    Coord::new(5, 3),
                    Coord::new(4, 3),
                    Coord::new(3, 3),
                    Coord::new(2, 3)
                ])
            );
            assert!(session.pending_ai_turn().is_none());
            return;
        }
        panic!("no seed kept the computer out of column 3");
    }

    #[test]
    fn test_configure_difficulty() {
        let mut session = against_computer(Difficulty::Easy, 8);
        session.configure_difficulty(Difficulty::Hard);
        assert_eq!(session.difficulty(), Difficulty::Hard);
    }

    #[test]
    fn test_from_config_builds_mode() {
        let config = GameConfig {
            opponent: Opponent::Computer,
            computer_player: Player::Red,
            difficulty: Difficulty::Hard,
            ai_delay_ms: 0,
            seed: Some(9),
        };
        let mut session = GameSession::from_config(&config);
        assert_eq!(
            session.mode(),
            GameMode::HumanVsComputer {
                computer: Player::Red
            }
        );
        // Red opens the first round, so the computer is already scheduled.
        assert!(session.poll_ai(Instant::now()).is_some());
        assert_eq!(session.difficulty(), Difficulty::Hard);
    }
}
