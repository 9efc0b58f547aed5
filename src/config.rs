use std::path::Path;

use crate::error::ConfigError;
use crate::game::{GameEngine, SizeError, DEFAULT_HEIGHT, DEFAULT_WIDTH};

/// Largest width or height accepted from configuration.
pub const MAX_DIMENSION: usize = 16;

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub board: BoardConfig,
    pub ui: UiConfig,
}

/// Grid dimensions.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub width: usize,
    pub height: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

impl BoardConfig {
    /// Start a new game with these dimensions
    pub fn new_game(&self) -> Result<GameEngine, SizeError> {
        GameEngine::with_size(self.width, self.height)
    }
}

/// Terminal front end settings.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Input poll interval in milliseconds
    pub tick_rate_ms: u64,
    /// Column the selector starts on (0-based); the middle column when unset
    pub start_column: Option<usize>,
    pub show_column_numbers: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            tick_rate_ms: 100,
            start_column: None,
            show_column_numbers: true,
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
            tracing::warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_DIMENSION).contains(&self.board.width) {
            return Err(ConfigError::Validation(format!(
                "board.width must be in [1, {MAX_DIMENSION}]"
            )));
        }
        if !(1..=MAX_DIMENSION).contains(&self.board.height) {
            return Err(ConfigError::Validation(format!(
                "board.height must be in [1, {MAX_DIMENSION}]"
            )));
        }
        if self.ui.tick_rate_ms == 0 {
            return Err(ConfigError::Validation(
                "ui.tick_rate_ms must be > 0".into(),
            ));
        }
        if let Some(col) = self.ui.start_column {
            if col >= self.board.width {
                return Err(ConfigError::Validation(
                    "ui.start_column must be < board.width".into(),
                ));
            }
        }

        Ok(())
    }

    /// Column the UI selector starts on
    pub fn start_column(&self) -> usize {
        self.ui.start_column.unwrap_or(self.board.width / 2)
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).unwrap_or_default()
    }
}
