//! Game setup configuration.
//!
//! A game is described by a YAML file (by convention `entente-game.yaml`)
//! listing the players, which alliances they join, and optional
//! alliance victory-city requirements. Every section has defaults so that
//! partial files parse.
//!
//! ```yaml
//! game:
//!   name: "World War II"
//! players:
//!   - Germans
//!   - Russians
//! alliances:
//!   - player: Germans
//!     alliance: Axis
//!   - player: Russians
//!     alliance: Allies
//! victory:
//!   cities:
//!     Axis: 13
//! logging:
//!   level: info
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level game setup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct GameConfig {
    /// Game-level settings.
    #[serde(default)]
    pub game: GameSection,

    /// Player display names, in turn order.
    #[serde(default)]
    pub players: Vec<String>,

    /// Alliance memberships, one entry per (player, alliance) pair.
    #[serde(default)]
    pub alliances: Vec<AllianceEntry>,

    /// Alliance victory conditions.
    #[serde(default)]
    pub victory: VictoryConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl GameConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if the content is not valid YAML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse configuration from a YAML string.
    ///
    /// An empty document yields the default configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yml::from_str(yaml)?)
    }
}

/// Game-level settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GameSection {
    /// Human-readable game name.
    #[serde(default = "default_game_name")]
    pub name: String,
}

impl Default for GameSection {
    fn default() -> Self {
        Self {
            name: default_game_name(),
        }
    }
}

/// One membership: `player` joins `alliance`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AllianceEntry {
    /// Display name of a player listed under `players`.
    pub player: String,
    /// Alliance name, used verbatim.
    pub alliance: String,
}

/// Alliance victory-city requirements.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct VictoryConfig {
    /// Required victory cities keyed by alliance name.
    #[serde(default)]
    pub cities: BTreeMap<String, u32>,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error), used when `RUST_LOG` is
    /// not set.
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Emit JSON log lines instead of human-readable text.
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

fn default_game_name() -> String {
    "Untitled Game".to_owned()
}

fn default_log_level() -> String {
    "info".to_owned()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_empty_game() {
        let config = GameConfig::default();
        assert_eq!(config.game.name, "Untitled Game");
        assert!(config.players.is_empty());
        assert!(config.alliances.is_empty());
        assert!(config.victory.cities.is_empty());
        assert_eq!(config.logging.level, "info");
        assert!(!config.logging.json);
    }

    #[test]
    fn parse_full_yaml() {
        let yaml = r#"
game:
  name: "World War II"
players:
  - Germans
  - Japanese
  - Russians
alliances:
  - player: Germans
    alliance: Axis
  - player: Japanese
    alliance: Axis
  - player: Russians
    alliance: Allies
victory:
  cities:
    Axis: 13
    Allies: 15
logging:
  level: debug
  json: true
"#;

        let config = GameConfig::parse(yaml).unwrap();

        assert_eq!(config.game.name, "World War II");
        assert_eq!(config.players, vec!["Germans", "Japanese", "Russians"]);
        assert_eq!(config.alliances.len(), 3);
        assert_eq!(
            config.alliances.first(),
            Some(&AllianceEntry {
                player: "Germans".to_owned(),
                alliance: "Axis".to_owned(),
            })
        );
        assert_eq!(config.victory.cities.get("Allies"), Some(&15));
        assert_eq!(config.logging.level, "debug");
        assert!(config.logging.json);
    }

    #[test]
    fn parse_minimal_yaml() {
        let config = GameConfig::parse("players:\n  - Germans\n").unwrap();

        assert_eq!(config.players, vec!["Germans"]);
        assert_eq!(config.game.name, "Untitled Game");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn parse_empty_yaml() {
        let config = GameConfig::parse("");
        assert_eq!(config.ok(), Some(GameConfig::default()));
    }

    #[test]
    fn alliance_entry_requires_both_fields() {
        let yaml = "alliances:\n  - player: Germans\n";
        assert!(matches!(
            GameConfig::parse(yaml),
            Err(ConfigError::Yaml { .. })
        ));
    }

    #[test]
    fn missing_file_is_io_error() {
        let result = GameConfig::from_file(Path::new("does-not-exist.yaml"));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }
}
