//! Error types for sitefl

use thiserror::Error;

use crate::enums::Construct;
use crate::types::Position;

/// Main error type for sitefl operations
#[derive(Error, Debug)]
pub enum SiteflError {
    /// A link or image whose bracketed alt text is not followed by `(`
    #[error("Improperly formatted {construct} at {position}: expected '(' but found {}", describe(.found))]
    Malformed {
        /// Which construct was being scanned
        construct: Construct,
        /// The offending character, or `None` at end of input
        found: Option<char>,
        /// Where the offending character sits in the source
        position: Position,
    },

    /// IO error during file operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Page template error
    #[error("Template error: {0}")]
    Template(String),
}

fn describe(found: &Option<char>) -> String {
    match found {
        Some(c) => format!("{:?}", c),
        None => "end of input".to_string(),
    }
}

/// Result type alias for sitefl operations
pub type Result<T> = std::result::Result<T, SiteflError>;
