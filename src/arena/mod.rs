//! Headless computer-vs-computer play for comparing difficulty tiers.

mod metrics;
mod round;

pub use metrics::{ArenaMetrics, RoundRecord};
pub use round::play_round;

use log::info;

use crate::ai::{Agent, ComputerPlayer};
use crate::config::ArenaConfig;
use crate::error::ArenaError;
use crate::game::{GameState, Player};

/// Play `config.games` consecutive rounds. Each new round follows the
/// session reset rule, so the loser of one round opens the next.
pub fn run_arena(
    config: &ArenaConfig,
    red: &mut dyn Agent,
    yellow: &mut dyn Agent,
) -> Result<ArenaMetrics, ArenaError> {
    let mut metrics = ArenaMetrics::new();
    let mut state = GameState::initial();

    info!(
        "arena: {} (Red) vs {} (Yellow), {} rounds",
        red.name(),
        yellow.name(),
        config.games
    );

    for round in 1..=config.games {
        let (finished, record) = play_round(state, red, yellow)?;
        metrics.record(record);
        state = finished.next_round();

        if round % config.log_interval == 0 {
            info!(
                "round {}/{}: Red {:.1}%  Yellow {:.1}%  draws {:.1}%  avg length {:.1}",
                round,
                config.games,
                metrics.win_rate(Player::Red) * 100.0,
                metrics.win_rate(Player::Yellow) * 100.0,
                metrics.draw_rate() * 100.0,
                metrics.average_round_length()
            );
        }
    }

    Ok(metrics)
}

/// Pit the two configured tiers against each other.
pub fn run_tier_match(config: &ArenaConfig) -> Result<ArenaMetrics, ArenaError> {
    let mut red = ComputerPlayer::with_seed(config.red, config.seed);
    let mut yellow = ComputerPlayer::with_seed(config.yellow, config.seed.map(|s| s ^ 1));
    run_arena(config, &mut red, &mut yellow)
}
