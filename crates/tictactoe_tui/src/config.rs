//! Match configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Name used for player 1 when none is configured.
pub const DEFAULT_PLAYER1_NAME: &str = "Player 1";

/// Name used for player 2 when none is configured.
pub const DEFAULT_PLAYER2_NAME: &str = "Player 2";

/// Who is playing.
///
/// ```toml
/// player1_name = "Alice"
/// player2_name = "Bob"
/// ```
///
/// Missing or blank names fall back to "Player 1" and "Player 2".
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Name of the player holding X.
    player1_name: String,

    /// Name of the player holding O.
    player2_name: String,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            player1_name: DEFAULT_PLAYER1_NAME.to_string(),
            player2_name: DEFAULT_PLAYER2_NAME.to_string(),
        }
    }
}

impl MatchConfig {
    /// Creates a configuration, substituting defaults for blank names.
    #[instrument(skip_all)]
    pub fn new(player1_name: impl Into<String>, player2_name: impl Into<String>) -> Self {
        Self {
            player1_name: player1_name.into(),
            player2_name: player2_name.into(),
        }
        .normalized()
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        let config = Self::from_toml_str(&content)?;
        info!(
            player1 = %config.player1_name,
            player2 = %config.player2_name,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        Ok(config.normalized())
    }

    /// Loads from `path` if given, otherwise returns the defaults.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                debug!("No config file given, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Replaces names with command-line values where provided.
    #[instrument(skip(self))]
    pub fn with_overrides(self, player1: Option<String>, player2: Option<String>) -> Self {
        Self {
            player1_name: player1.unwrap_or(self.player1_name),
            player2_name: player2.unwrap_or(self.player2_name),
        }
        .normalized()
    }

    fn normalized(self) -> Self {
        Self {
            player1_name: name_or(self.player1_name, DEFAULT_PLAYER1_NAME),
            player2_name: name_or(self.player2_name, DEFAULT_PLAYER2_NAME),
        }
    }
}

fn name_or(name: String, fallback: &str) -> String {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        fallback.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = MatchConfig::default();
        assert_eq!(config.player1_name(), "Player 1");
        assert_eq!(config.player2_name(), "Player 2");
    }

    #[test]
    fn test_blank_names_fall_back() {
        let config = MatchConfig::new("  ", "Bob");
        assert_eq!(config.player1_name(), "Player 1");
        assert_eq!(config.player2_name(), "Bob");
    }

    #[test]
    fn test_partial_toml() {
        let config = MatchConfig::from_toml_str("player2_name = \"Bob\"\n").unwrap();
        assert_eq!(config, MatchConfig::new("Player 1", "Bob"));
    }

    #[test]
    fn test_invalid_toml() {
        let err = MatchConfig::from_toml_str("player1_name = ").unwrap_err();
        assert!(err.message.contains("Failed to parse config"));
    }

    #[test]
    fn test_overrides() {
        let config = MatchConfig::new("Alice", "Bob").with_overrides(None, Some("Carol".into()));
        assert_eq!(config, MatchConfig::new("Alice", "Carol"));
    }
}
