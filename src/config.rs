//! Configuration management
//!
//! Settings come from a TOML file. Lookup order:
//!
//! 1. the path given with `--config`
//! 2. `qa-verify.toml` in the current directory
//! 3. `~/.config/qa-verify/config.toml` (XDG standard)
//!
//! A missing file means defaults; a file that exists but does not parse is an
//! error.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::ports::ReviewPolicy;
use crate::core::services::{Classifier, CommandSyntax, DEFAULT_LINK_HOST};

/// File name looked up in the current directory
pub const LOCAL_CONFIG_FILE: &str = "qa-verify.toml";

/// Errors that can occur while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read
    #[error("failed to read config {path}: {source}")]
    Read {
        /// File that was read
        path: PathBuf,
        /// I/O failure
        source: std::io::Error,
    },

    /// The file is not valid TOML for this schema
    #[error("failed to parse config {path}: {source}")]
    Parse {
        /// File that was parsed
        path: PathBuf,
        /// TOML failure
        source: toml::de::Error,
    },

    /// The command syntax does not compile to a pattern
    #[error("invalid command syntax: {0}")]
    Syntax(#[from] regex::Error),
}

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Whether formal reviews count as approval
    #[serde(default)]
    pub reviews: ReviewsConfig,
    /// Which ticket links point at review threads
    #[serde(default)]
    pub links: LinksConfig,
    /// What to do with approved tickets
    #[serde(default)]
    pub transition: TransitionConfig,
    /// Command and announcement syntax
    #[serde(default)]
    pub commands: CommandSyntax,
}

/// Review policy, resolved repo first, then org, then the global default
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewsConfig {
    /// Global default
    #[serde(default)]
    pub acts_as_approval: bool,
    /// Per-organization overrides
    #[serde(default)]
    pub orgs: HashMap<String, bool>,
    /// Per-repository overrides, keyed `org/repo`
    #[serde(default)]
    pub repos: HashMap<String, bool>,
}

/// Link recognition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinksConfig {
    /// Tracker URL of links that point at review threads
    #[serde(default = "default_link_host")]
    pub host: String,
}

fn default_link_host() -> String {
    DEFAULT_LINK_HOST.to_string()
}

impl Default for LinksConfig {
    fn default() -> Self {
        Self {
            host: default_link_host(),
        }
    }
}

/// Status transition for approved tickets
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionConfig {
    /// Whether approved tickets are actually moved
    #[serde(default)]
    pub enabled: bool,
    /// Status approved tickets move to
    #[serde(default = "default_status")]
    pub status: String,
}

fn default_status() -> String {
    "VERIFIED".to_string()
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            status: default_status(),
        }
    }
}

impl ReviewPolicy for ReviewsConfig {
    fn reviews_act_as_approval(&self, org: &str, repo: &str) -> bool {
        self.repos
            .get(&format!("{org}/{repo}"))
            .or_else(|| self.orgs.get(org))
            .copied()
            .unwrap_or(self.acts_as_approval)
    }
}

impl Config {
    /// Per-user config file path
    #[must_use]
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("qa-verify").join("config.toml"))
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load a specific file; a missing file is an error
    pub fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content, path)
    }

    /// Load configuration following the lookup order
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load_file(path);
        }

        let candidates = std::iter::once(PathBuf::from(LOCAL_CONFIG_FILE))
            .chain(Self::user_config_path());
        for path in candidates {
            if path.exists() {
                log::debug!("Using config {}", path.display());
                return Self::load_file(&path);
            }
        }

        log::debug!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// Compile the configured command syntax
    pub fn classifier(&self) -> Result<Classifier, ConfigError> {
        Ok(Classifier::new(&self.commands)?)
    }
}

impl ReviewPolicy for Config {
    fn reviews_act_as_approval(&self, org: &str, repo: &str) -> bool {
        self.reviews.reviews_act_as_approval(org, repo)
    }
}
