//! Application configuration loaded from a TOML file.
//!
//! Every field has a default, so fbrowse works without a config file.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::fs::entry::DEFAULT_DATE_FORMAT;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub clipboard: ClipboardConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

impl Config {
    /// Loads configuration from a TOML file at `path`.
    ///
    /// # Errors
    ///
    /// - [`CoreError::PathNotFound`] if the file does not exist.
    /// - [`CoreError::AccessDenied`] if the file is not readable.
    /// - [`CoreError::ConfigParse`] if the TOML is malformed.
    pub fn load(path: &Path) -> CoreResult<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|e| CoreError::from_io(path, e))?;
        toml::from_str(&content).map_err(|e| CoreError::ConfigParse(e.to_string()))
    }

    /// Loads `path` if given and present, otherwise returns the defaults.
    ///
    /// A file that exists but cannot be read or parsed is still an error.
    pub fn load_or_default(path: Option<&Path>) -> CoreResult<Self> {
        match path {
            Some(p) => match Self::load(p) {
                Err(CoreError::PathNotFound(_)) => {
                    tracing::debug!("no config at {}, using defaults", p.display());
                    Ok(Self::default())
                }
                other => other,
            },
            None => Ok(Self::default()),
        }
    }
}

/// General browsing preferences.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    #[serde(default)]
    pub show_hidden: bool,
    #[serde(default = "default_true")]
    pub sort_dir_first: bool,
    /// Directory to open at startup; the working directory when unset.
    #[serde(default)]
    pub start_dir: Option<PathBuf>,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            show_hidden: false,
            sort_dir_first: true,
            start_dir: None,
        }
    }
}

/// Clipboard behaviour.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClipboardConfig {
    /// Keep a pending copy staged after pasting it, so it can be pasted again.
    #[serde(default = "default_true")]
    pub keep_copy_after_paste: bool,
}

impl Default for ClipboardConfig {
    fn default() -> Self {
        Self {
            keep_copy_after_paste: true,
        }
    }
}

/// Display preferences.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            date_format: default_date_format(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.to_string()
}
