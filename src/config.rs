use std::path::{Path, PathBuf};

use tracing_subscriber::EnvFilter;

use crate::error::ConfigError;
use crate::game::{Player, PlayerNames, COLS};

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub players: PlayersConfig,
    pub ui: UiConfig,
    pub logging: LoggingConfig,
}

/// Display names used when a session starts.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PlayersConfig {
    pub one: String,
    pub two: String,
}

impl Default for PlayersConfig {
    fn default() -> Self {
        PlayersConfig {
            one: Player::One.default_name().to_string(),
            two: Player::Two.default_name().to_string(),
        }
    }
}

impl PlayersConfig {
    pub fn names(&self) -> PlayerNames {
        let mut names = PlayerNames::new();
        names.set(Player::One, &self.one);
        names.set(Player::Two, &self.two);
        names
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Column (0-based) the cursor starts on
    pub start_column: usize,
    /// How long the terminal UI waits for a key before redrawing
    pub poll_interval_ms: u64,
    /// Longest display name accepted from the name editor
    pub max_name_len: usize,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            start_column: COLS / 2,
            poll_interval_ms: 100,
            max_name_len: 24,
        }
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive; `RUST_LOG` takes precedence when set
    pub filter: String,
    /// Append log lines to this file instead of stderr
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            filter: "info".to_string(),
            file: None,
        }
    }
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
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ui.start_column >= COLS {
            return Err(ConfigError::Validation(format!(
                "ui.start_column must be < {COLS}"
            )));
        }
        if self.ui.poll_interval_ms == 0 {
            return Err(ConfigError::Validation(
                "ui.poll_interval_ms must be > 0".into(),
            ));
        }
        // Blank names fall back to the default labels, so those must fit too.
        let min_name_len = [Player::One, Player::Two]
            .iter()
            .map(|player| player.default_name().chars().count())
            .max()
            .unwrap_or(1);
        if self.ui.max_name_len < min_name_len {
            return Err(ConfigError::Validation(format!(
                "ui.max_name_len must be at least {min_name_len}"
            )));
        }

        for (key, name) in [("players.one", &self.players.one), ("players.two", &self.players.two)] {
            if name.trim().chars().count() > self.ui.max_name_len {
                return Err(ConfigError::Validation(format!(
                    "{key} must be at most {} characters",
                    self.ui.max_name_len
                )));
            }
        }

        if let Err(e) = EnvFilter::try_new(&self.logging.filter) {
            return Err(ConfigError::Validation(format!(
                "logging.filter is not a valid filter: {e}"
            )));
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
[players]
one = "Ada"
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.players.one, "Ada");
        // Other fields should be defaults
        assert_eq!(config.players.two, "Player Two");
        assert_eq!(config.ui.start_column, 3);
        assert_eq!(config.logging.filter, "info");
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_players_config_names() {
        let players = PlayersConfig {
            one: "  Ada ".into(),
            two: "".into(),
        };
        let names = players.names();
        assert_eq!(names.get(Player::One), "Ada");
        assert_eq!(names.get(Player::Two), "Player Two");
    }

    #[test]
    fn test_validation_rejects_start_column_off_board() {
        let mut config = AppConfig::default();
        config.ui.start_column = COLS;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_zero_poll_interval() {
        let mut config = AppConfig::default();
        config.ui.poll_interval_ms = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_zero_max_name_len() {
        let mut config = AppConfig::default();
        config.ui.max_name_len = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_long_name() {
        let mut config = AppConfig::default();
        config.ui.max_name_len = 12;
        config.players.one = "Ada".into();
        config.players.two = "Grace Hopper Smith".into();
        let err = config.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "config validation error: players.two must be at most 12 characters"
        );
    }

    #[test]
    fn test_validation_rejects_max_name_len_below_default_names() {
        let mut config = AppConfig::default();
        config.ui.max_name_len = 8;
        let err = config.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "config validation error: ui.max_name_len must be at least 10"
        );
    }

    #[test]
    fn test_load_with_only_max_name_len() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("names.toml");
        std::fs::write(&path, "[ui]\nmax_name_len = 10\n").unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.ui.max_name_len, 10);
        assert_eq!(config.players, PlayersConfig::default());

        std::fs::write(&path, "[ui]\nmax_name_len = 8\n").unwrap();
        assert!(AppConfig::load(&path).is_err());
    }

    #[test]
    fn test_validation_rejects_bad_filter() {
        let mut config = AppConfig::default();
        config.logging.filter = "connect_four=loud".into();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = AppConfig::load_or_default(Path::new("nonexistent_config.toml")).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test_config.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            r#"
[ui]
start_column = 0

[logging]
file = "game.log"
"#
        )
        .unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.ui.start_column, 0);
        assert_eq!(config.logging.file, Some(PathBuf::from("game.log")));
        // Others are defaults
        assert_eq!(config.ui.poll_interval_ms, 100);
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[ui]\npoll_interval_ms = 0\n").unwrap();
        assert!(matches!(
            AppConfig::load(&path),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_load_rejects_malformed_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        std::fs::write(&path, "[ui\n").unwrap();
        assert!(matches!(AppConfig::load(&path), Err(ConfigError::TomlParse(_))));
    }

    #[test]
    fn test_default_toml_roundtrips() {
        let toml_str = AppConfig::default_toml();
        let config: AppConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(config, AppConfig::default());
    }
}
