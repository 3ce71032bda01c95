//! Immutable game configuration handed to the level loader and session.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub const DEFAULT_HEIGHT: usize = 20;
pub const DEFAULT_WIDTH: usize = 30;
pub const DEFAULT_LEVEL_COUNT: usize = 20;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub height: usize,
    pub width: usize,
    pub level_count: usize,
    pub levels_dir: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            height: DEFAULT_HEIGHT,
            width: DEFAULT_WIDTH,
            level_count: DEFAULT_LEVEL_COUNT,
            levels_dir: PathBuf::from("levels"),
        }
    }
}

impl GameConfig {
    /// Load config from a TOML file. Missing keys fall back to the defaults.
    pub fn load(path: &Path) -> Result<GameConfig, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml(&content)?;
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<GameConfig, ConfigError> {
        let config: GameConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.height == 0 || self.width == 0 {
            return Err(ConfigError::Invalid(format!(
                "grid dimensions must be non-zero, got {}x{}",
                self.height, self.width
            )));
        }
        if self.level_count == 0 {
            return Err(ConfigError::Invalid("level_count must be at least 1".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn empty_toml_gives_defaults() {
        let config = GameConfig::from_toml("").unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn partial_toml_overrides_only_given_keys() {
        let config = GameConfig::from_toml("level_count = 3\nlevels_dir = \"custom\"\n").unwrap();
        assert_eq!(config.level_count, 3);
        assert_eq!(config.levels_dir, PathBuf::from("custom"));
        assert_eq!(config.height, DEFAULT_HEIGHT);
        assert_eq!(config.width, DEFAULT_WIDTH);
    }

    #[test]
    fn zero_width_is_rejected() {
        let err = GameConfig::from_toml("width = 0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = GameConfig::from_toml("height = \"tall\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
