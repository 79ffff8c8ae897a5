use std::path::Path;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::ai::Difficulty;
use crate::error::ConfigError;
use crate::game::Player;

/// Longest allowed pause before the computer moves.
pub const MAX_AI_DELAY_MS: u64 = 10_000;

/// Who plays against the human at the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Opponent {
    Human,
    Computer,
}

/// Interactive game settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub opponent: Opponent,
    /// Side the computer takes when `opponent` is `computer`.
    pub computer_player: Player,
    pub difficulty: Difficulty,
    /// Pause before a scheduled computer move is played.
    pub ai_delay_ms: u64,
    /// Fixed RNG seed for reproducible computer play.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            opponent: Opponent::Computer,
            computer_player: Player::Yellow,
            difficulty: Difficulty::Medium,
            ai_delay_ms: 500,
            seed: None,
        }
    }
}

/// Headless computer-vs-computer evaluation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    pub games: usize,
    pub red: Difficulty,
    pub yellow: Difficulty,
    pub seed: Option<u64>,
    pub log_interval: usize,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        ArenaConfig {
            games: 100,
            red: Difficulty::Hard,
            yellow: Difficulty::Medium,
            seed: None,
            log_interval: 10,
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub game: GameConfig,
    pub arena: ArenaConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.game.ai_delay_ms > MAX_AI_DELAY_MS {
            return Err(ConfigError::Validation(format!(
                "game.ai_delay_ms must be <= {MAX_AI_DELAY_MS}"
            )));
        }
        if self.arena.games == 0 {
            return Err(ConfigError::Validation("arena.games must be > 0".into()));
        }
        if self.arena.log_interval == 0 {
            return Err(ConfigError::Validation(
                "arena.log_interval must be > 0".into(),
            ));
        }
        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        config.validate().expect("default config should be valid");
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let toml_str = r#"
[game]
difficulty = "hard"
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.game.difficulty, Difficulty::Hard);
        // Other fields should be defaults
        assert_eq!(config.game.opponent, Opponent::Computer);
        assert_eq!(config.game.computer_player, Player::Yellow);
        assert_eq!(config.game.ai_delay_ms, 500);
        assert_eq!(config.arena.games, 100);
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        let default = AppConfig::default();
        assert_eq!(config.game.difficulty, default.game.difficulty);
        assert_eq!(config.arena.red, default.arena.red);
        assert_eq!(config.game.seed, None);
    }

    #[test]
    fn test_unknown_difficulty_is_parse_error() {
        let result: Result<AppConfig, _> = toml::from_str("[game]\ndifficulty = \"expert\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_validation_rejects_long_delay() {
        let mut config = AppConfig::default();
        config.game.ai_delay_ms = MAX_AI_DELAY_MS + 1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_zero_games() {
        let mut config = AppConfig::default();
        config.arena.games = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_zero_log_interval() {
        let mut config = AppConfig::default();
        config.arena.log_interval = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = AppConfig::load_or_default(Path::new("nonexistent_config.toml")).unwrap();
        assert_eq!(config.arena.games, 100);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test_config.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            r#"
[game]
opponent = "human"
seed = 12

[arena]
games = 20
"#
        )
        .unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.game.opponent, Opponent::Human);
        assert_eq!(config.game.seed, Some(12));
        assert_eq!(config.arena.games, 20);
        // Others are defaults
        assert_eq!(config.arena.yellow, Difficulty::Medium);
    }

    #[test]
    fn test_load_rejects_invalid_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[arena]\ngames = 0\n").unwrap();
        assert!(matches!(
            AppConfig::load(&path),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_default_toml_roundtrips() {
        let toml_str = AppConfig::default_toml();
        let config: AppConfig = toml::from_str(&toml_str).unwrap();
        config.validate().expect("roundtripped config should be valid");
    }
}
