use std::path::Path;

use crate::error::ConfigError;
use crate::search::DEFAULT_LOOK_AHEAD;

/// Board dimensions and win-length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub rows: u8,
    pub cols: u8,
    pub win_length: u8,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            rows: 3,
            cols: 3,
            win_length: 3,
        }
    }
}

/// Search agent settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    /// Search depth in plies
    pub look_ahead: u32,
}

impl Default for AgentConfig {
    fn default() -> Self {
        AgentConfig {
            look_ahead: DEFAULT_LOOK_AHEAD,
        }
    }
}

/// Textual interface settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Failed attempts tolerated per prompt
    pub retries: u32,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        ConsoleConfig { retries: 3 }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub board: BoardConfig,
    pub agent: AgentConfig,
    pub console: ConsoleConfig,
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
            log::info!("loading config from '{}'", path.display());
            Self::load(path)
        } else {
            log::warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let BoardConfig {
            rows,
            cols,
            win_length,
        } = self.board;

        if rows == 0 || cols == 0 {
            return Err(ConfigError::Validation(
                "board.rows and board.cols must be > 0".into(),
            ));
        }
        if win_length == 0 {
            return Err(ConfigError::Validation(
                "board.win_length must be > 0".into(),
            ));
        }
        if win_length > rows.min(cols) {
            return Err(ConfigError::Validation(format!(
                "board.win_length must be <= min(rows, cols) = {}",
                rows.min(cols)
            )));
        }
        if self.agent.look_ahead == 0 {
            return Err(ConfigError::Validation(
                "agent.look_ahead must be > 0".into(),
            ));
        }
        Ok(())
    }
}
