//! Core enums for sitefl compilation.
//!
//! These enums name the markup constructs the compiler recognizes and
//! the inline states it can hold open while scanning.

use serde::{Deserialize, Serialize};

/// A markup marker and the single trigger byte that starts it.
///
/// The marker set is closed: the compiler dispatches on
/// [`Marker::from_trigger`] and never consults a runtime table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Marker {
    /// Copies the next byte verbatim (`\`)
    Escape,
    /// Opens a verbatim block (`{`)
    EscapeBegin,
    /// Closes a verbatim block (`}`)
    EscapeEnd,
    /// Toggles bold (`*`)
    Bold,
    /// Toggles italic (`/`)
    Italic,
    /// Toggles underline (`_`)
    Underline,
    /// Horizontal rule when tripled (`---`)
    Rule,
    /// Hard line break when doubled (`;;`)
    LineBreak,
    /// Link (`@[alt](url)`)
    Link,
    /// Image (`![alt](url)`)
    Image,
    /// Code block (`` ` ``)
    Code,
    /// Heading (`#`, up to six)
    Heading,
    /// List item (`+`)
    ListItem,
}

impl Marker {
    /// Every marker, in dispatch order.
    pub const ALL: [Marker; 13] = [
        Marker::Escape,
        Marker::EscapeBegin,
        Marker::EscapeEnd,
        Marker::Bold,
        Marker::Italic,
        Marker::Underline,
        Marker::Rule,
        Marker::LineBreak,
        Marker::Link,
        Marker::Image,
        Marker::Code,
        Marker::Heading,
        Marker::ListItem,
    ];

    /// The byte that triggers this marker.
    pub const fn trigger(self) -> u8 {
        match self {
            Marker::Escape => b'\\',
            Marker::EscapeBegin => b'{',
            Marker::EscapeEnd => b'}',
            Marker::Bold => b'*',
            Marker::Italic => b'/',
            Marker::Underline => b'_',
            Marker::Rule => b'-',
            Marker::LineBreak => b';',
            Marker::Link => b'@',
            Marker::Image => b'!',
            Marker::Code => b'`',
            Marker::Heading => b'#',
            Marker::ListItem => b'+',
        }
    }

    /// Look up the marker started by `byte`, if any.
    ///
    /// # Example
    ///
    /// ```
    /// use sitefl_core::Marker;
    /// assert_eq!(Marker::from_trigger(b'*'), Some(Marker::Bold));
    /// assert_eq!(Marker::from_trigger(b'a'), None);
    /// ```
    pub const fn from_trigger(byte: u8) -> Option<Marker> {
        match byte {
            b'\\' => Some(Marker::Escape),
            b'{' => Some(Marker::EscapeBegin),
            b'}' => Some(Marker::EscapeEnd),
            b'*' => Some(Marker::Bold),
            b'/' => Some(Marker::Italic),
            b'_' => Some(Marker::Underline),
            b'-' => Some(Marker::Rule),
            b';' => Some(Marker::LineBreak),
            b'@' => Some(Marker::Link),
            b'!' => Some(Marker::Image),
            b'`' => Some(Marker::Code),
            b'#' => Some(Marker::Heading),
            b'+' => Some(Marker::ListItem),
            _ => None,
        }
    }

    /// Check whether `byte` starts any marker.
    pub const fn is_trigger(byte: u8) -> bool {
        Marker::from_trigger(byte).is_some()
    }
}

impl std::fmt::Display for Marker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Marker::Escape => write!(f, "escape"),
            Marker::EscapeBegin => write!(f, "escape-begin"),
            Marker::EscapeEnd => write!(f, "escape-end"),
            Marker::Bold => write!(f, "bold"),
            Marker::Italic => write!(f, "italic"),
            Marker::Underline => write!(f, "underline"),
            Marker::Rule => write!(f, "rule"),
            Marker::LineBreak => write!(f, "linebreak"),
            Marker::Link => write!(f, "link"),
            Marker::Image => write!(f, "image"),
            Marker::Code => write!(f, "code"),
            Marker::Heading => write!(f, "heading"),
            Marker::ListItem => write!(f, "list-item"),
        }
    }
}

/// An inline state held open on the compiler's stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OpenState {
    /// Inside `<strong>`
    Bold,
    /// Inside `<em>`
    Italic,
    /// Inside `<u>`
    Underline,
    /// Inside `<hN>`; the level is 1 through 6
    Heading(u8),
}

impl OpenState {
    /// The HTML tag name this state opens.
    pub fn tag(&self) -> String {
        match self {
            OpenState::Bold => "strong".to_string(),
            OpenState::Italic => "em".to_string(),
            OpenState::Underline => "u".to_string(),
            OpenState::Heading(level) => format!("h{}", level),
        }
    }

    /// The opening tag, e.g. `<strong>`.
    pub fn open_tag(&self) -> String {
        format!("<{}>", self.tag())
    }

    /// The closing tag, e.g. `</strong>`.
    pub fn close_tag(&self) -> String {
        format!("</{}>", self.tag())
    }
}

impl std::fmt::Display for OpenState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OpenState::Bold => write!(f, "bold"),
            OpenState::Italic => write!(f, "italic"),
            OpenState::Underline => write!(f, "underline"),
            OpenState::Heading(level) => write!(f, "heading{}", level),
        }
    }
}

/// A construct that can be reported as malformed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Construct {
    /// `@[alt](url)`
    Link,
    /// `![alt](url)`
    Image,
}

impl std::fmt::Display for Construct {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Construct::Link => write!(f, "link"),
            Construct::Image => write!(f, "image-link"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trigger_roundtrip() {
        for marker in Marker::ALL {
            assert_eq!(Marker::from_trigger(marker.trigger()), Some(marker));
        }
    }

    #[test]
    fn test_non_triggers() {
        for byte in [b'a', b'Z', b'0', b' ', b'\n', b'[', b']', b'(', b')', b':'] {
            assert!(!Marker::is_trigger(byte), "{:?} is not a trigger", byte as char);
        }
    }

    #[test]
    fn test_marker_display() {
        assert_eq!(Marker::Bold.to_string(), "bold");
        assert_eq!(Marker::LineBreak.to_string(), "linebreak");
        assert_eq!(Marker::ListItem.to_string(), "list-item");
    }

    #[test]
    fn test_open_state_tags() {
        assert_eq!(OpenState::Bold.open_tag(), "<strong>");
        assert_eq!(OpenState::Italic.close_tag(), "</em>");
        assert_eq!(OpenState::Underline.open_tag(), "<u>");
        assert_eq!(OpenState::Heading(3).open_tag(), "<h3>");
        assert_eq!(OpenState::Heading(6).close_tag(), "</h6>");
    }

    #[test]
    fn test_construct_display() {
        assert_eq!(Construct::Link.to_string(), "link");
        assert_eq!(Construct::Image.to_string(), "image-link");
    }
}
