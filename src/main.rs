use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use connect_four_engine::ai::Difficulty;
use connect_four_engine::config::{AppConfig, Opponent};
use connect_four_engine::game::Player;
use connect_four_engine::session::GameSession;
use connect_four_engine::ui::App;

/// Play Connect Four in the terminal.
#[derive(Parser)]
#[command(name = "connect-four", about = "Play Connect Four in the terminal")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect-four.toml")]
    config: PathBuf,

    /// Play against another human or the computer
    #[arg(long, value_enum)]
    opponent: Option<Opponent>,

    /// Side the computer plays
    #[arg(long, value_enum)]
    computer_plays: Option<Player>,

    /// Computer difficulty
    #[arg(long, value_enum)]
    difficulty: Option<Difficulty>,

    /// Pause in milliseconds before the computer moves
    #[arg(long)]
    ai_delay_ms: Option<u64>,

    /// Seed for reproducible computer play
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut app_config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    let game = &mut app_config.game;
    if let Some(opponent) = cli.opponent {
        game.opponent = opponent;
    }
    if let Some(player) = cli.computer_plays {
        game.computer_player = player;
    }
    if let Some(difficulty) = cli.difficulty {
        game.difficulty = difficulty;
    }
    if let Some(delay) = cli.ai_delay_ms {
        game.ai_delay_ms = delay;
    }
    if cli.seed.is_some() {
        game.seed = cli.seed;
    }
    app_config.validate().context("invalid settings")?;

    let session = GameSession::from_config(&app_config.game);
    run_tui(App::new(session)).context("terminal UI failed")
}

fn run_tui(mut app: App) -> std::io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);

    // Restore terminal even if the app loop failed
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res
}
