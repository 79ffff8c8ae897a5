use log::trace;

use super::RoundRecord;
use crate::ai::Agent;
use crate::error::ArenaError;
use crate::game::{GameState, Player};

/// Play `state`'s round to the end with one agent per side.
///
/// Returns the terminal state, which still carries the updated scores.
pub fn play_round(
    mut state: GameState,
    red: &mut dyn Agent,
    yellow: &mut dyn Agent,
) -> Result<(GameState, RoundRecord), ArenaError> {
    let starter = state.current_player();
    let mut moves = 0;

    while !state.is_terminal() {
        let player = state.current_player();
        state = match player {
            Player::Red => take_turn(red, &state, player)?,
            Player::Yellow => take_turn(yellow, &state, player)?,
        };
        moves += 1;
    }
    trace!("final board:\n{}", state.board());

    let record = RoundRecord {
        winner: state.outcome().winner(),
        starter,
        moves,
    };
    Ok((state, record))
}

fn take_turn(
    agent: &mut dyn Agent,
    state: &GameState,
    player: Player,
) -> Result<GameState, ArenaError> {
    let column = agent
        .select_action(state.board(), player)
        .ok_or(ArenaError::NoMove { player })?;
    state
        .apply_move(column)
        .map_err(|source| ArenaError::IllegalMove {
            agent: agent.name().to_string(),
            column,
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::{ComputerPlayer, Difficulty};
    use crate::game::{Board, Outcome};

    /// Plays a fixed list of columns, then gives up.
    struct Scripted {
        columns: Vec<usize>,
    }

    impl Agent for Scripted {
        fn select_action(&mut self, _board: &Board, _me: Player) -> Option<usize> {
            if self.columns.is_empty() {
                None
            } else {
                Some(self.columns.remove(0))
            }
        }

        fn name(&self) -> &str {
            "Scripted"
        }
    }

    #[test]
    fn test_round_with_scripted_agents() {
        let mut red = Scripted {
            columns: vec![0, 1, 2, 3],
        };
        let mut yellow = Scripted {
            columns: vec![0, 1, 2],
        };
        let (state, record) = play_round(GameState::initial(), &mut red, &mut yellow).unwrap();

        assert_eq!(record.winner, Some(Player::Red));
        assert_eq!(record.starter, Player::Red);
        assert_eq!(record.moves, 7);
        assert_eq!(state.score().red, 1);
    }

    #[test]
    fn test_round_reports_illegal_move() {
        let mut red = Scripted {
            columns: vec![0, 0, 0, 0],
        };
        let mut yellow = Scripted {
            columns: vec![0, 0, 0],
        };
        let err = play_round(GameState::initial(), &mut red, &mut yellow).unwrap_err();
        assert!(matches!(
            err,
            ArenaError::IllegalMove { column: 0, .. }
        ));
    }

    #[test]
    fn test_round_between_computers_terminates() {
        let mut red = ComputerPlayer::seeded(Difficulty::Medium, 1);
        let mut yellow = ComputerPlayer::seeded(Difficulty::Easy, 2);
        let (state, record) = play_round(GameState::initial(), &mut red, &mut yellow).unwrap();

        assert!(state.is_terminal());
        assert_eq!(record.moves, state.board().token_count());
        if record.winner.is_none() {
            assert_eq!(state.outcome(), &Outcome::Draw);
        }
    }
}
