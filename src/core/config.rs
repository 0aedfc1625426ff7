//! Application configuration management

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Log filter used when `RUST_LOG` is unset
    pub log_level: String,
    /// UI settings
    pub ui: UiConfig,
    /// Import settings
    pub import: ImportConfig,
}

/// UI settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Theme (light/dark)
    pub theme: String,
    /// Initial window width
    pub window_width: f32,
    /// Initial window height
    pub window_height: f32,
}

/// Import settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportConfig {
    /// Directory the file dialog opens in
    pub start_dir: Option<PathBuf>,
    /// Update `start_dir` after each successful selection
    pub remember_last_dir: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            ui: UiConfig::default(),
            import: ImportConfig::default(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: "dark".to_string(),
            window_width: 960.0,
            window_height: 720.0,
        }
    }
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            start_dir: None,
            remember_last_dir: true,
        }
    }
}

impl AppConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "docreader", "DocReader")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from disk
    pub fn load() -> Result<Self> {
        let path = Self::config_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        Self::load_from(&path)
    }

    /// Load configuration from a specific file, defaulting when it is missing
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("Invalid config: {}", path.display()))?;
        Ok(config)
    }

    /// Save configuration to disk
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        self.save_to(&path)?;
        tracing::info!("Saved config to: {}", path.display());
        Ok(())
    }

    /// Save configuration to a specific file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure config directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config: {}", path.display()))?;
        Ok(())
    }

    /// Remember the directory of the last picked file. Returns true when
    /// the setting changed.
    pub fn remember_import_dir(&mut self, picked: &Path) -> bool {
        if !self.import.remember_last_dir {
            return false;
        }
        let Some(dir) = picked.parent() else {
            return false;
        };
        if dir.as_os_str().is_empty() || self.import.start_dir.as_deref() == Some(dir) {
            return false;
        }
        self.import.start_dir = Some(dir.to_path_buf());
        true
    }

    pub fn is_dark(&self) -> bool {
        self.ui.theme != "light"
    }
}
