//! Optional `vixen.toml` configuration for the command-line driver.
//!
//! None of this affects scanning, classification, or parsing semantics.
//! it only tunes the driver's own presentation defaults (color, verbosity).
//! The language front end itself has no persisted state.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{DriverError, Result};

pub const CONFIG_FILE_NAME: &str = "vixen.toml";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Default verbosity, overridden by `--verbose` / `VIXEN_VERBOSE`.
    #[serde(default)]
    pub verbose: bool,

    /// Default color setting, overridden by `--no-color` / `VIXEN_NO_COLOR`.
    #[serde(default)]
    pub no_color: bool,

    /// Prompt string printed before each REPL read.
    #[serde(default = "default_prompt")]
    pub prompt: String,
}

fn default_prompt() -> String {
    "> ".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            verbose: false,
            no_color: false,
            prompt: default_prompt(),
        }
    }
}

impl Config {
    /// Load from the default search path (cwd, then `$HOME/.config`, then
    /// the system config directory), falling back to defaults if absent.
    pub fn load() -> Result<Self> {
        match Self::find_config_file() {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(DriverError::Config(format!(
                "configuration file not found: {}",
                path.display()
            )));
        }
        let content = std::fs::read_to_string(path).map_err(|source| DriverError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|e| DriverError::Config(e.to_string()))
    }

    fn check_current_dir_config() -> Option<PathBuf> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }

    fn check_home_config() -> Option<PathBuf> {
        dirs::home_dir()
            .map(|dir| dir.join(".config").join("vixen").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    fn check_system_config() -> Option<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join("vixen").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    fn find_config_file() -> Option<PathBuf> {
        Self::check_current_dir_config()
            .or_else(Self::check_home_config)
            .or_else(Self::check_system_config)
    }
}
