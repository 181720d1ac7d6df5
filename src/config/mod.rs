//! Configuration system
//!
//! Handles TOML config file parsing and CLI argument merging.

pub mod builder;
pub mod file;

pub use builder::ConfigBuilder;
pub use file::ConfigFile;

use crate::services::{DisplayOptions, Limits, DEFAULT_IGNORE, DEFAULT_MAX_DEPTH};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// General settings
    pub general: GeneralConfig,
    /// Where the collection comes from
    pub source: SourceConfig,
    /// Output of `show`
    pub display: DisplayConfig,
    /// Output of `list`
    pub listing: ListingConfig,
    /// Default variables, overridden by `--variables`
    pub variables: Map<String, Value>,
}

/// General configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GeneralConfig {
    /// Enable verbose logging
    pub verbose: bool,
}

/// Collection source configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// Path to a collection file
    pub collection: Option<String>,
    /// URL of a remote collection
    pub url: Option<String>,
    /// API key sent with remote requests
    pub api_key: Option<String>,
    /// Remote request timeout in seconds
    pub timeout_seconds: u64,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            collection: None,
            url: None,
            api_key: None,
            timeout_seconds: 30,
        }
    }
}

/// Display configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Detail fields never printed
    pub ignore: Vec<String>,
    /// Colorize terminal output
    pub color: bool,
    /// Value truncation limits
    pub limits: Limits,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            ignore: DEFAULT_IGNORE.iter().map(|s| s.to_string()).collect(),
            color: true,
            limits: Limits::default(),
        }
    }
}

impl DisplayConfig {
    /// Convert to composer options
    pub fn to_options(&self) -> DisplayOptions {
        DisplayOptions {
            ignore: self.ignore.clone(),
            limits: self.limits,
        }
    }
}

/// Listing configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ListingConfig {
    /// Nesting ceiling for listings
    pub max_depth: usize,
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}
