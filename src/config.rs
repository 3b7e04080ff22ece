use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// File name searched for in the working directory and the user config directory
pub const CONFIG_FILE_NAME: &str = "autotag.toml";

/// Represents the complete configuration for auto-tag.
///
/// Values come from an optional TOML file; environment variables and flags
/// are layered on top with [Config::with_overrides].
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    /// Remote the created tag is pushed to
    #[serde(default = "default_remote")]
    pub remote: String,

    /// Whether to push right after tagging
    #[serde(default = "default_auto_push")]
    pub auto_push: bool,

    #[serde(default)]
    pub identity: IdentityConfig,
}

fn default_remote() -> String {
    "origin".to_string()
}

fn default_auto_push() -> bool {
    true
}

/// Placeholder committer identity, written to the repository config when
/// none is configured so the annotated tag has a tagger.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct IdentityConfig {
    #[serde(default = "default_identity_name")]
    pub name: String,

    #[serde(default = "default_identity_email")]
    pub email: String,
}

fn default_identity_name() -> String {
    "auto-tagger".to_string()
}

fn default_identity_email() -> String {
    "auto-tagger@local".to_string()
}

impl Default for IdentityConfig {
    fn default() -> Self {
        IdentityConfig {
            name: default_identity_name(),
            email: default_identity_email(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            remote: default_remote(),
            auto_push: default_auto_push(),
            identity: IdentityConfig::default(),
        }
    }
}

impl Config {
    /// Layer environment or command-line values over the loaded config.
    ///
    /// Empty values are ignored. `auto_push` is enabled only by a
    /// case-insensitive `"true"`; anything else disables it.
    pub fn with_overrides(mut self, remote: Option<&str>, auto_push: Option<&str>) -> Self {
        if let Some(remote) = remote.filter(|r| !r.is_empty()) {
            self.remote = remote.to_string();
        }
        if let Some(value) = auto_push.filter(|v| !v.is_empty()) {
            self.auto_push = parse_auto_push(value);
        }
        self
    }
}

/// Interpret an `AUTO_PUSH` value
pub fn parse_auto_push(value: &str) -> bool {
    value.to_lowercase() == "true"
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter (must exist)
/// 2. `autotag.toml` in current directory
/// 3. `autotag.toml` in the user config directory
/// 4. Default configuration if no file found
pub fn load_config(config_path: Option<&Path>) -> Result<Config> {
    let path = match config_path {
        Some(path) => Some(path.to_path_buf()),
        None => find_config_file(),
    };

    let Some(path) = path else {
        debug!("no config file found, using defaults");
        return Ok(Config::default());
    };

    debug!(path = %path.display(), "loading config file");
    let config_str = fs::read_to_string(&path)?;
    let config: Config = toml::from_str(&config_str)?;
    Ok(config)
}

fn find_config_file() -> Option<PathBuf> {
    let local = PathBuf::from(CONFIG_FILE_NAME);
    if local.is_file() {
        return Some(local);
    }

    dirs::config_dir()
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .filter(|path| path.is_file())
}
