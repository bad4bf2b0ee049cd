//! Configuration management for the procedure search TUI.
//!
//! Handles loading and saving configuration from JSONC files. All settings
//! have defaults, so the application runs without any config file present.

use anyhow::{Context, Result};
use dirs::config_dir;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Application configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Simulated backend latency for the mock search, in milliseconds
    pub search_delay_ms: u64,
    /// Number of records returned by each mock search
    pub result_batch_size: usize,
    /// Results view shown on startup ("table" or "cards")
    pub default_view: String,
    /// Width of the detail side panel, in terminal columns
    pub detail_panel_width: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            search_delay_ms: 800,
            result_batch_size: 80,
            default_view: "table".to_string(),
            detail_panel_width: 42,
        }
    }
}

impl Config {
    /// Load configuration from file.
    ///
    /// # Arguments
    /// * `path` - Optional path to config file. If None, uses default location.
    ///
    /// # Returns
    /// * `Result<Config>` - Loaded configuration or error
    ///
    /// # Details
    /// Returns the default configuration when no config file exists.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = if let Some(p) = path {
            p.to_path_buf()
        } else {
            Self::default_config_path()?
        };

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;

        let config: Config = serde_json::from_str(&strip_jsonc_comments(&content))
            .with_context(|| "Failed to deserialize config")?;

        Ok(config)
    }

    /// Save configuration to file.
    ///
    /// # Arguments
    /// * `path` - Optional path to config file. If None, uses default location.
    ///
    /// # Returns
    /// * `Result<()>` - Success or error
    ///
    /// # Details
    /// Creates the config directory if it doesn't exist.
    #[allow(dead_code)] // Useful for saving config changes from within the app
    pub fn save(&self, path: Option<&Path>) -> Result<()> {
        let config_path = if let Some(p) = path {
            p.to_path_buf()
        } else {
            Self::default_config_path()?
        };

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let json = serde_json::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(&config_path, json)
            .with_context(|| format!("Failed to write config file: {}", config_path.display()))?;

        Ok(())
    }

    /// Get default configuration file path.
    ///
    /// # Returns
    /// * `Result<PathBuf>` - Path to config file or error
    ///
    /// # Details
    /// Returns `$XDG_CONFIG_HOME/proc-tui/config.jsonc` or
    /// `~/.config/proc-tui/config.jsonc`.
    pub fn default_config_path() -> Result<PathBuf> {
        let config_dir =
            config_dir().ok_or_else(|| anyhow::anyhow!("Failed to determine config directory"))?;
        Ok(config_dir.join("proc-tui").join("config.jsonc"))
    }
}

/// Strip `//` comments from JSONC content, preserving `//` inside strings.
fn strip_jsonc_comments(content: &str) -> String {
    content
        .lines()
        .map(|line| {
            if let Some(comment_pos) = line.find("//") {
                // An even quote count before the marker means we are outside
                // a string (escaped quotes are not handled).
                let before_comment = &line[..comment_pos];
                if before_comment.matches('"').count() % 2 == 0 {
                    line[..comment_pos].trim_end()
                } else {
                    line
                }
            } else {
                line
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.search_delay_ms, 800);
        assert_eq!(config.result_batch_size, 80);
        assert_eq!(config.default_view, "table");
        assert_eq!(config.detail_panel_width, 42);
    }

    #[test]
    fn test_config_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.jsonc");

        let config = Config {
            search_delay_ms: 50,
            default_view: "cards".to_string(),
            ..Config::default()
        };

        config.save(Some(&config_path)).unwrap();
        assert!(config_path.exists());

        let loaded = Config::load(Some(&config_path)).unwrap();
        assert_eq!(loaded.search_delay_ms, 50);
        assert_eq!(loaded.default_view, "cards");
        assert_eq!(loaded.result_batch_size, 80);
    }

    #[test]
    fn test_config_missing_file_falls_back_to_default() {
        let temp_dir = TempDir::new().unwrap();
        let loaded = Config::load(Some(&temp_dir.path().join("absent.jsonc"))).unwrap();
        assert_eq!(loaded.result_batch_size, 80);
    }

    #[test]
    fn test_config_jsonc_with_comments() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.jsonc");

        let jsonc_content = r#"{
            // Keep the mock search snappy
            "search_delay_ms": 100,
            "result_batch_size": 40
        }"#;

        fs::write(&config_path, jsonc_content).unwrap();

        let loaded = Config::load(Some(&config_path)).unwrap();
        assert_eq!(loaded.search_delay_ms, 100);
        assert_eq!(loaded.result_batch_size, 40);
    }

    #[test]
    fn test_strip_preserves_slashes_in_strings() {
        let stripped = strip_jsonc_comments(r#"{"default_view": "table//cards"}"#);
        assert_eq!(stripped, r#"{"default_view": "table//cards"}"#);
    }
}
