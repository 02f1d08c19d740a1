use std::path::Path;

use crate::error::ConfigError;
use crate::game::{GlyphSet, Player, DEFAULT_SEPARATOR};

/// Config file looked up when none is given on the command line.
pub const DEFAULT_CONFIG_PATH: &str = "connect_four.toml";

const LOG_LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub game: GameConfig,
    pub display: DisplayConfig,
    pub log: LogConfig,
}

/// How a game starts.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Seed for first-player selection; OS entropy when absent.
    pub seed: Option<u64>,
    /// Skip the coin toss and let this player open.
    pub first_player: Option<Player>,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub glyphs: GlyphSet,
    pub separator: String,
    /// Clear the terminal after every accepted move.
    pub clear_screen: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            glyphs: GlyphSet::Emoji,
            separator: DEFAULT_SEPARATOR.to_string(),
            clear_screen: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Filter used when `RUST_LOG` is unset.
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig {
            level: "warn".to_string(),
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

    /// Load an explicitly chosen file, which must exist, or else
    /// [`DEFAULT_CONFIG_PATH`] when present. Falls back to defaults only when
    /// no path was given and the default file is missing; the flag reports
    /// whether a file was read.
    pub fn resolve(explicit: Option<&Path>) -> Result<(Self, bool), ConfigError> {
        match explicit {
            Some(path) => Self::load(path).map(|config| (config, true)),
            None => {
                let path = Path::new(DEFAULT_CONFIG_PATH);
                if path.exists() {
                    Self::load(path).map(|config| (config, true))
                } else {
                    Ok((Self::default(), false))
                }
            }
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.display.separator.is_empty() {
            return Err(ConfigError::Validation(
                "display.separator must not be empty".into(),
            ));
        }
        if self.display.separator.contains(['\n', '\r']) {
            return Err(ConfigError::Validation(
                "display.separator must not contain line breaks".into(),
            ));
        }
        if !LOG_LEVELS.contains(&self.log.level.to_ascii_lowercase().as_str()) {
            return Err(ConfigError::Validation(format!(
                "log.level must be one of {}",
                LOG_LEVELS.join(", ")
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
