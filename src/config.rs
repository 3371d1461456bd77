// Configuration module for reading Snake.toml
// Loaded once at startup and shared read-only by every request

use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Config {
    pub appearance: AppearanceConfig,
    pub server: ServerConfig,
    pub timing: TimingConfig,
    pub debug: DebugConfig,
}

/// Metadata and looks reported to the game engine
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppearanceConfig {
    pub apiversion: String,
    pub author: String,
    pub color: String,
    pub head: String,
    pub tail: String,
    pub version: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ServerConfig {
    /// Used when the `PORT` environment variable is not set
    pub port: u16,
}

/// Timing constants
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct TimingConfig {
    pub response_time_budget_ms: u64,
    pub network_overhead_ms: u64,
}

impl TimingConfig {
    /// Computes the effective computation budget, never below 1ms
    pub fn effective_budget_ms(&self) -> u64 {
        self.response_time_budget_ms
            .saturating_sub(self.network_overhead_ms)
            .max(1)
    }

    /// Budget for a turn of a game with the given engine timeout.
    /// A timeout of 0 means the engine did not send one.
    pub fn budget_for_timeout_ms(&self, game_timeout_ms: u64) -> u64 {
        if game_timeout_ms == 0 || game_timeout_ms >= self.response_time_budget_ms {
            return self.effective_budget_ms();
        }
        game_timeout_ms
            .saturating_sub(self.network_overhead_ms)
            .max(1)
    }
}

/// Debug configuration
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct DebugConfig {
    pub enabled: bool,
    pub log_file_path: String,
}

impl Config {
    /// Loads configuration from a TOML file
    ///
    /// # Arguments
    /// * `path` - Path to the Snake.toml configuration file
    ///
    /// # Returns
    /// * `Result<Config, String>` - Parsed configuration or error message
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let contents = fs::read_to_string(path.as_ref())
            .map_err(|e| format!("Failed to read config file: {}", e))?;

        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, String> {
        toml::from_str(contents).map_err(|e| format!("Failed to parse config file: {}", e))
    }

    /// Loads default configuration from Snake.toml in the project root
    pub fn load_default() -> Result<Self, String> {
        Self::from_file("Snake.toml")
    }

    /// Creates a configuration with hardcoded default values as fallback
    /// This should match the constants defined in Snake.toml
    pub fn default_hardcoded() -> Self {
        Config {
            appearance: AppearanceConfig {
                apiversion: "1".to_string(),
                author: "sandworm".to_string(),
                color: "#FFB366".to_string(),
                head: "sand-worm".to_string(),
                tail: "round-bum".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            server: ServerConfig { port: 9001 },
            timing: TimingConfig {
                response_time_budget_ms: 500,
                network_overhead_ms: 100,
            },
            debug: DebugConfig {
                enabled: false,
                log_file_path: "battlesnake_debug.jsonl".to_string(),
            },
        }
    }

    /// Attempts to load from file, falls back to hardcoded defaults on error
    pub fn load_or_default() -> Self {
        Self::load_default().unwrap_or_else(|e| {
            log::warn!("Could not load Snake.toml ({}), using hardcoded defaults", e);
            Self::default_hardcoded()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effective_budget_calculation() {
        let config = Config::default_hardcoded();
        assert_eq!(config.timing.effective_budget_ms(), 400);
    }

    #[test]
    fn test_budget_respects_game_timeout() {
        let timing = Config::default_hardcoded().timing;
        assert_eq!(timing.budget_for_timeout_ms(0), timing.effective_budget_ms());
        assert_eq!(timing.budget_for_timeout_ms(300), 200);
        assert_eq!(timing.budget_for_timeout_ms(2000), 400);
        // Never drops to a zero budget
        assert_eq!(timing.budget_for_timeout_ms(50), 1);
    }

    #[test]
    fn test_snake_toml_can_be_parsed() {
        let result = Config::from_file("Snake.toml");
        assert!(
            result.is_ok(),
            "Failed to parse Snake.toml: {:?}",
            result.err()
        );
    }

    #[test]
    fn test_snake_toml_matches_hardcoded_defaults() {
        let file_config = Config::from_file("Snake.toml").expect("Snake.toml should be parseable");
        assert_eq!(file_config, Config::default_hardcoded());
    }

    #[test]
    fn test_missing_section_is_an_error() {
        let result = Config::from_toml("[server]\nport = 8000\n");
        assert!(result.is_err());
        assert!(result.unwrap_err().starts_with("Failed to parse config file"));
    }

    #[test]
    fn test_invalid_toml_returns_error() {
        let result = Config::from_file("nonexistent.toml");
        assert!(result.is_err());
    }
}
