//! Configuration management for toolbelt
//!
//! Provides TOML-based configuration with defaults and validation.
//! Location: ~/.toolbelt/config.toml

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use crate::errors::{Result, ToolError};

/// Upper bound on dice per roll
pub const MAX_DICE_LIMIT: usize = 10;

/// Complete configuration for toolbelt
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub todo: TodoConfig,
    pub email: EmailConfig,
    pub password: PasswordConfig,
    pub arcade: ArcadeConfig,
    pub display: DisplayConfig,
    pub paths: PathsConfig,
}

/// To-do list storage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TodoConfig {
    pub file: String,
}

/// Email template locations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmailConfig {
    pub templates_dir: String,
    pub output_dir: String,
}

/// Password checker rules
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PasswordConfig {
    pub min_length: usize,
}

/// Game arcade settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArcadeConfig {
    pub max_dice: usize,
    pub roll_delay_ms: u64,
}

/// Terminal output settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub color: bool,
}

/// File system paths configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    pub state_dir: String,
}

impl Default for TodoConfig {
    fn default() -> Self {
        Self {
            file: "tasks.txt".to_string(),
        }
    }
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            templates_dir: "templates".to_string(),
            output_dir: "output".to_string(),
        }
    }
}

impl Default for PasswordConfig {
    fn default() -> Self {
        Self { min_length: 8 }
    }
}

impl Default for ArcadeConfig {
    fn default() -> Self {
        Self {
            max_dice: MAX_DICE_LIMIT,
            roll_delay_ms: 1000,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { color: true }
    }
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            state_dir: "~/.toolbelt".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from file or use defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(config_path) = path {
            Self::load_from_file(config_path)
        } else {
            Self::load_default()
        }
    }

    /// Load configuration from specific file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ToolError::Config(format!("Failed to read config: {}", e)))?;

        let config: Config = toml::from_str(&contents)
            .map_err(|e| ToolError::Config(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Load default configuration from standard location or use built-in defaults
    pub fn load_default() -> Result<Self> {
        if let Some(config_path) = Self::default_path() {
            if config_path.exists() {
                return Self::load_from_file(&config_path);
            }
        }

        Ok(Config::default())
    }

    /// Standard config location, if a home directory is known
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".toolbelt").join("config.toml"))
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.password.min_length == 0 {
            return Err(ToolError::Config(
                "password.min_length must be greater than 0".to_string()
            ));
        }

        if self.arcade.max_dice == 0 || self.arcade.max_dice > MAX_DICE_LIMIT {
            return Err(ToolError::Config(format!(
                "arcade.max_dice must be between 1 and {}",
                MAX_DICE_LIMIT
            )));
        }

        if self.todo.file.trim().is_empty() {
            return Err(ToolError::Config("todo.file must not be empty".to_string()));
        }

        Ok(())
    }

    /// Serialize the effective configuration
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| ToolError::Config(format!("Failed to serialize config: {}", e)))
    }

    /// Expand tilde in paths
    pub fn expand_path(path: &str) -> PathBuf {
        if let Some(rest) = path.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(rest);
            }
        }
        PathBuf::from(path)
    }

    /// Get state directory path
    pub fn state_dir(&self) -> PathBuf {
        Self::expand_path(&self.paths.state_dir)
    }

    /// Line editor history file
    pub fn history_file(&self) -> PathBuf {
        self.state_dir().join("history")
    }

    pub fn todo_file(&self) -> PathBuf {
        Self::expand_path(&self.todo.file)
    }

    pub fn templates_dir(&self) -> PathBuf {
        Self::expand_path(&self.email.templates_dir)
    }

    pub fn output_dir(&self) -> PathBuf {
        Self::expand_path(&self.email.output_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.todo.file, "tasks.txt");
        assert_eq!(config.email.templates_dir, "templates");
        assert_eq!(config.email.output_dir, "output");
        assert_eq!(config.password.min_length, 8);
        assert_eq!(config.arcade.max_dice, 10);
    }

    #[test]
    fn test_config_validation_success() {
        let config = Config::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation_zero_min_length() {
        let mut config = Config::default();
        config.password.min_length = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_dice_bounds() {
        let mut config = Config::default();
        config.arcade.max_dice = 0;
        assert!(config.validate().is_err());

        config.arcade.max_dice = 11;
        assert!(config.validate().is_err());

        config.arcade.max_dice = 3;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config: Config = toml::from_str("[password]\nmin_length = 12\n").unwrap();
        assert_eq!(config.password.min_length, 12);
        assert_eq!(config.todo.file, "tasks.txt");
        assert!(config.display.color);
    }

    #[test]
    fn test_written_config_loads_back() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");

        let mut config = Config::default();
        config.todo.file = "chores.txt".to_string();
        config.arcade.roll_delay_ms = 0;
        std::fs::write(&path, config.to_toml().unwrap()).unwrap();

        let loaded = Config::load(Some(&path)).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "[arcade]\nmax_dice = 50\n").unwrap();

        assert!(matches!(Config::load(Some(&path)), Err(ToolError::Config(_))));
    }

    #[test]
    fn test_load_missing_file_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("absent.toml");
        assert!(Config::load(Some(&path)).is_err());
    }

    #[test]
    fn test_expand_path_with_tilde() {
        let expanded = Config::expand_path("~/.toolbelt");
        assert!(!expanded.to_string_lossy().contains('~'));
    }

    #[test]
    fn test_expand_path_without_tilde() {
        let path = "/absolute/path";
        let expanded = Config::expand_path(path);
        assert_eq!(expanded.to_string_lossy(), path);
    }

    #[test]
    fn test_history_file_under_state_dir() {
        let mut config = Config::default();
        config.paths.state_dir = "/tmp/toolbelt-state".to_string();
        assert_eq!(config.history_file(), PathBuf::from("/tmp/toolbelt-state/history"));
    }
}
