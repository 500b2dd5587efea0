//! Compile settings.
//!
//! This module contains the `CompileConfig` struct which holds the
//! settings passed to the markup compiler.

use serde::{Deserialize, Serialize};
use sitefl_compiler::CompileOptions;

/// Compile configuration.
///
/// Controls how the markup compiler treats the source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CompileConfig {
    /// Turn every newline that does not close a heading into `<br>`.
    /// Default: false
    #[serde(default)]
    pub preserve_newlines: bool,
}

impl CompileConfig {
    /// Merge another CompileConfig into this one.
    ///
    /// TOML cannot tell "not set" from "set to the default", so every
    /// value is copied from `other`.
    pub fn merge(&mut self, other: &CompileConfig) {
        self.preserve_newlines = other.preserve_newlines;
    }

    /// The options handed to the compiler.
    pub fn options(&self) -> CompileOptions {
        CompileOptions {
            preserve_newlines: self.preserve_newlines,
        }
    }
}
