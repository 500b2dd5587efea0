//! Page configuration.
//!
//! This module contains the `PageConfig` struct which controls how a
//! compiled fragment is turned into a page: the wrapper div, the HTML
//! template and the stylesheet link.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Page configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PageConfig {
    /// Wrap the fragment in `<div id='unit'>`.
    /// Default: false
    #[serde(default)]
    pub wrap: bool,

    /// HTML template the fragment is spliced into.
    /// Default: none
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<PathBuf>,

    /// Stylesheet linked from the page.
    /// Default: none
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stylesheet: Option<String>,
}

impl PageConfig {
    /// Merge another PageConfig into this one.
    ///
    /// `wrap` is always copied; paths only when `other` sets them.
    pub fn merge(&mut self, other: &PageConfig) {
        self.wrap = other.wrap;
        if other.template.is_some() {
            self.template.clone_from(&other.template);
        }
        if other.stylesheet.is_some() {
            self.stylesheet.clone_from(&other.stylesheet);
        }
    }
}
