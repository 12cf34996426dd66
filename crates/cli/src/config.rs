// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! User configuration.
//!
//! Configuration is read from `config.toml` inside the storcom config
//! directory, which is the first of:
//! - `$STORCOM_HOME`
//! - `$XDG_CONFIG_HOME/storcom`
//! - `~/.config/storcom`
//!
//! A missing file means defaults. Unknown keys are ignored so the same file
//! can carry settings for other storcom commands.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::cli::OutputFormat;
use crate::env;
use crate::error::{Error, Result};

const APP_DIR_NAME: &str = "storcom";
const CONFIG_FILE_NAME: &str = "config.toml";

/// User configuration stored in `config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Default output format when `-o` is not given.
    #[serde(default)]
    pub output: OutputFormat,
}

impl Config {
    /// Load the configuration from `dir/config.toml`.
    pub fn load(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE_NAME);
        if !path.is_file() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path)
            .map_err(|e| Error::Config(format!("unable to read {}: {e}", path.display())))?;
        toml::from_str(&content)
            .map_err(|e| Error::Config(format!("unable to decode {}: {e}", path.display())))
    }

    /// Load the configuration from the default config directory.
    pub fn load_default() -> Result<Self> {
        Self::load(&config_dir())
    }
}

/// Returns the storcom config directory for the current environment.
pub fn config_dir() -> PathBuf {
    resolve_config_dir(env::storcom_home(), env::xdg_config_home(), dirs::home_dir())
}

/// Pick the config directory from the candidate locations, in priority order.
pub fn resolve_config_dir(
    storcom_home: Option<PathBuf>,
    xdg_config_home: Option<PathBuf>,
    home: Option<PathBuf>,
) -> PathBuf {
    if let Some(dir) = storcom_home {
        return dir;
    }
    let base = xdg_config_home
        .or_else(|| home.map(|h| h.join(".config")))
        .unwrap_or_else(|| PathBuf::from(".config"));
    base.join(APP_DIR_NAME)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
