// SPDX-License-Identifier: MPL-2.0
//! Remote-fetch preferences, loaded from and saved to a `settings.toml`
//! file.
//!
//! Only the network side of the crate is configurable: the user agent the
//! HTTP client presents and how many redirects it will follow. Everything
//! else (decoding, presentation, panel behavior) is fixed by contract.
//!
//! # Examples
//!
//! ```no_run
//! use metadata_lens::config::{self, Config};
//!
//! let mut config = config::load().unwrap_or_default();
//! config.user_agent = Some("MyViewer/2.1".to_string());
//! config::save(&config).expect("Failed to save config");
//! ```

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "MetadataLens";

pub const DEFAULT_USER_AGENT: &str = concat!("MetadataLens/", env!("CARGO_PKG_VERSION"));
pub const DEFAULT_REDIRECT_LIMIT: usize = 10;

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    /// User agent sent with remote image requests.
    pub user_agent: Option<String>,
    /// Maximum number of HTTP redirects followed per request.
    #[serde(default)]
    pub redirect_limit: Option<usize>,
}

impl Config {
    /// Effective user agent, falling back to the crate default.
    pub fn user_agent(&self) -> &str {
        self.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT)
    }

    /// Effective redirect limit, falling back to the crate default.
    pub fn redirect_limit(&self) -> usize {
        self.redirect_limit.unwrap_or(DEFAULT_REDIRECT_LIMIT)
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(|e| Error::Config(e.to_string()))?;
    fs::write(path, content)?;
    Ok(())
}
