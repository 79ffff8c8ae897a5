use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::LevelFilter;

use connect_four_engine::ai::Difficulty;
use connect_four_engine::arena::run_tier_match;
use connect_four_engine::config::AppConfig;
use connect_four_engine::game::Player;

/// Pit two computer difficulty tiers against each other.
#[derive(Parser)]
#[command(name = "arena", about = "Play computer tiers against each other")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect-four.toml")]
    config: PathBuf,

    /// Number of rounds to play
    #[arg(long)]
    games: Option<usize>,

    /// Tier playing Red
    #[arg(long, value_enum)]
    red: Option<Difficulty>,

    /// Tier playing Yellow
    #[arg(long, value_enum)]
    yellow: Option<Difficulty>,

    /// Seed for reproducible runs
    #[arg(long)]
    seed: Option<u64>,

    /// Log level: error, warn, info, debug or trace
    #[arg(long, default_value = "info")]
    log_level: LevelFilter,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    simple_logger::SimpleLogger::new()
        .with_level(cli.log_level)
        .init()
        .context("setting up logging")?;

    let mut app_config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    let arena = &mut app_config.arena;
    if let Some(games) = cli.games {
        arena.games = games;
    }
    if let Some(red) = cli.red {
        arena.red = red;
    }
    if let Some(yellow) = cli.yellow {
        arena.yellow = yellow;
    }
    if cli.seed.is_some() {
        arena.seed = cli.seed;
    }
    app_config.validate().context("invalid settings")?;

    let arena = &app_config.arena;
    let metrics = run_tier_match(arena).context("arena run failed")?;

    println!("-------------------------------------------");
    println!(
        "{} rounds: {} (Red) vs {} (Yellow)",
        metrics.total_rounds(),
        arena.red.name(),
        arena.yellow.name()
    );
    println!(
        "  Red wins:    {:>4} ({:.1}%)",
        metrics.wins(Player::Red),
        metrics.win_rate(Player::Red) * 100.0
    );
    println!(
        "  Yellow wins: {:>4} ({:.1}%)",
        metrics.wins(Player::Yellow),
        metrics.win_rate(Player::Yellow) * 100.0
    );
    println!(
        "  Draws:       {:>4} ({:.1}%)",
        metrics.draws(),
        metrics.draw_rate() * 100.0
    );
    println!(
        "  Starter won {:.1}% of rounds, average length {:.1} moves",
        metrics.starter_win_rate() * 100.0,
        metrics.average_round_length()
    );
    Ok(())
}
