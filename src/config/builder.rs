//! Configuration builder
//!
//! Merges configuration from files and CLI arguments.

use crate::config::{Config, ConfigFile};
use crate::error::ConfigError;

/// Builder for merging configuration sources
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Create a new builder with default configuration
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// Load configuration from a file.
    ///
    /// An explicitly given file must load; without one the default locations
    /// are searched and missing files are fine.
    pub fn with_file(mut self, path: Option<&str>) -> Result<Self, ConfigError> {
        let file_config = match path {
            Some(path) => Some(ConfigFile::load(path)?),
            None => ConfigFile::load_default(),
        };

        if let Some(cfg) = file_config {
            self.config = cfg;
        }

        Ok(self)
    }

    /// Override with CLI verbose flag
    pub fn with_verbose(mut self, verbose: Option<bool>) -> Self {
        if let Some(v) = verbose {
            self.config.general.verbose = v;
        }
        self
    }

    /// Override with CLI collection path
    pub fn with_collection(mut self, path: Option<String>) -> Self {
        if let Some(p) = path {
            self.config.source.collection = Some(p);
        }
        self
    }

    /// Override with CLI collection URL
    pub fn with_url(mut self, url: Option<String>) -> Self {
        if let Some(u) = url {
            self.config.source.url = Some(u);
        }
        self
    }

    /// Override with CLI API key
    pub fn with_api_key(mut self, api_key: Option<String>) -> Self {
        if let Some(k) = api_key {
            self.config.source.api_key = Some(k);
        }
        self
    }

    /// Override with CLI ignore list
    pub fn with_ignore(mut self, ignore: Option<Vec<String>>) -> Self {
        if let Some(i) = ignore {
            self.config.display.ignore = i;
        }
        self
    }

    /// Turn color off when requested
    pub fn with_no_color(mut self, no_color: bool) -> Self {
        if no_color {
            self.config.display.color = false;
        }
        self
    }

    /// Build the final configuration
    pub fn build(self) -> Config {
        self.config
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
