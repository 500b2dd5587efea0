//! Sitefl Config
//!
//! This crate handles configuration loading and management
//! for sitefl, supporting TOML configuration files.
//!
//! # Overview
//!
//! Configuration is loaded from platform-specific locations:
//! - Linux: `~/.config/sitefl/config.toml`
//! - macOS: `~/Library/Application Support/sitefl/config.toml`
//! - Windows: `%APPDATA%\sitefl\config.toml`
//!
//! # Example
//!
//! ```no_run
//! use sitefl_config::Config;
//!
//! // Load config with defaults
//! let config = Config::load().unwrap();
//!
//! // Or load with an override file
//! let config = Config::load_with_override(Some("./site.toml")).unwrap();
//! ```

mod compile;
mod page;

pub use compile::CompileConfig;
pub use page::PageConfig;

use serde::{Deserialize, Serialize};
use sitefl_compiler::CompileOptions;
use sitefl_core::{Result, SiteflError};
use std::path::{Path, PathBuf};

/// Default TOML configuration string.
const DEFAULT_TOML: &str = r#"[compile]
PreserveNewlines = false

[page]
Wrap = false
# Template   = "template.html"
# Stylesheet = "style.css"
"#;

/// Main configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Compiler settings
    #[serde(default)]
    pub compile: CompileConfig,

    /// Page assembly settings
    #[serde(default)]
    pub page: PageConfig,
}

impl Config {
    /// Returns the default TOML configuration string.
    ///
    /// # Example
    ///
    /// ```
    /// use sitefl_config::Config;
    /// let toml = Config::default_toml();
    /// assert!(toml.contains("[compile]"));
    /// assert!(toml.contains("[page]"));
    /// ```
    pub fn default_toml() -> &'static str {
        DEFAULT_TOML
    }

    /// Returns the platform-specific configuration file path.
    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.toml"))
    }

    /// Returns the platform-specific configuration directory.
    pub fn config_dir() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "sitefl")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Load configuration from the default platform-specific path.
    ///
    /// If no config file exists, returns the default configuration.
    pub fn load() -> Result<Self> {
        if let Some(config_path) = Self::config_path() {
            if config_path.exists() {
                return Self::load_from(&config_path);
            }
        }

        Ok(Self::default())
    }

    /// Load configuration from a specific path.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the TOML configuration file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| SiteflError::Config(format!("Parse error in {}: {}", path.display(), e)))
    }

    /// Load configuration with an optional override file or string.
    ///
    /// 1. Load the base config from the default location
    /// 2. If `override_config` is provided:
    ///    - If it's a path to an existing file, load and merge it
    ///    - Otherwise, treat it as a TOML string and parse it
    pub fn load_with_override(override_config: Option<&str>) -> Result<Self> {
        let mut config = Self::load()?;

        if let Some(override_str) = override_config {
            config.merge(&Self::parse_override(override_str)?);
        }

        Ok(config)
    }

    /// Parse an override given either as a file path or as inline TOML.
    pub fn parse_override(override_str: &str) -> Result<Self> {
        let override_path = Path::new(override_str);

        let override_toml = if override_path.is_file() {
            std::fs::read_to_string(override_path)?
        } else {
            override_str.to_string()
        };

        toml::from_str(&override_toml)
            .map_err(|e| SiteflError::Config(format!("Override parse error: {}", e)))
    }

    /// Merge another config into this one.
    ///
    /// Values from `other` take precedence over values in `self`.
    ///
    /// # Example
    ///
    /// ```
    /// use sitefl_config::Config;
    ///
    /// let mut base = Config::default();
    /// let override_config: Config = toml::from_str(r#"
    ///     [compile]
    ///     PreserveNewlines = true
    /// "#).unwrap();
    ///
    /// base.merge(&override_config);
    /// assert!(base.compile.preserve_newlines);
    /// ```
    pub fn merge(&mut self, other: &Config) {
        self.compile.merge(&other.compile);
        self.page.merge(&other.page);
    }

    /// Save configuration to a file.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| SiteflError::Config(format!("Serialization error: {}", e)))?;
        std::fs::write(path, toml_string)?;
        Ok(())
    }

    /// The options handed to the compiler.
    pub fn compile_options(&self) -> CompileOptions {
        self.compile.options()
    }
}
