//! Configuration management for hello-button

mod keys;

pub use keys::{Action, KeyBindings, key_to_string};

use crate::paths;
use crate::ui::Variant;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Trigger label; the demo page's own label is used when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// Presentation variant
    #[serde(default)]
    pub variant: Variant,

    /// Poll interval in milliseconds for terminal events
    #[serde(default = "default_poll_interval")]
    pub poll_interval_ms: u64,

    /// Keybindings configuration
    #[serde(default)]
    pub keys: KeyBindings,
}

const fn default_poll_interval() -> u64 {
    100
}

impl Default for Config {
    fn default() -> Self {
        Self {
            label: None,
            variant: Variant::default(),
            poll_interval_ms: default_poll_interval(),
            keys: KeyBindings::default(),
        }
    }
}

impl Config {
    /// Load configuration from the default location
    ///
    /// # Errors
    ///
    /// Returns an error if reading or parsing the config file fails
    pub fn load() -> Result<Self> {
        Self::load_or_default(&Self::default_path())
    }

    /// Load configuration from `path`, or the defaults if there is no file
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load_from(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        let mut config: Self = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;
        // Ensure any new default keybindings are available
        config.keys.merge_defaults();
        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn default_path() -> PathBuf {
        paths::config_path()
    }

    /// Event poll interval as a [`Duration`]
    #[must_use]
    pub const fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    /// Apply command line overrides on top of file values
    #[must_use]
    pub fn with_overrides(mut self, label: Option<String>, variant: Option<Variant>) -> Self {
        if label.is_some() {
            self.label = label;
        }
        if let Some(variant) = variant {
            self.variant = variant;
        }
        self
    }
}
