// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Application settings loaded from TOML.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::Level;

/// Settings for the `scales` binary
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Settings {
    /// Reference data to load instead of the built-in tables
    #[serde(default)]
    pub reference: Option<PathBuf>,
    /// Clear the terminal before each answer in the interactive session
    #[serde(default = "default_clear_screen")]
    pub clear_screen: bool,
    /// Log level: error, warn, info, debug or trace
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_clear_screen() -> bool {
    true
}
fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            reference: None,
            clear_screen: default_clear_screen(),
            log_level: default_log_level(),
        }
    }
}

impl Settings {
    /// Load settings from a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read settings file: {:?}", path.as_ref()))?;
        let mut settings = Self::from_toml(&contents)?;

        // Relative reference paths are relative to the settings file
        if let Some(dir) = path.as_ref().parent() {
            settings.reference = settings
                .reference
                .map(|reference| if reference.is_relative() { dir.join(reference) } else { reference });
        }
        Ok(settings)
    }

    /// Parse settings from a TOML string
    pub fn from_toml(source: &str) -> Result<Self> {
        toml::from_str(source).context("Failed to parse TOML settings")
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string(self).context("Failed to serialize settings to TOML")
    }

    /// Parsed log level, if `log_level` names one
    pub fn level(&self) -> Option<Level> {
        self.log_level.trim().parse().ok()
    }
}
