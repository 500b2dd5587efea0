//! Open-state stack for sitefl compilation.
//!
//! The [`CompileState`] struct records which inline spans are currently
//! open. Toggle markers only ever look at the top of the stack, so spans
//! opened in one order and closed in another produce overlapping HTML.

use crate::enums::OpenState;

/// Highest heading level the markup can express.
pub const MAX_HEADING_LEVEL: u8 = 6;

/// Stack of open inline states.
///
/// # Example
///
/// ```
/// use sitefl_core::{CompileState, OpenState};
///
/// let mut state = CompileState::new();
/// assert_eq!(state.toggle(OpenState::Bold), "<strong>");
/// assert!(state.is_top(OpenState::Bold));
/// assert_eq!(state.toggle(OpenState::Bold), "</strong>");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompileState {
    open: Vec<OpenState>,
}

impl CompileState {
    /// Create an empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recently opened state.
    pub fn top(&self) -> Option<OpenState> {
        self.open.last().copied()
    }

    /// Check whether `state` is on top of the stack.
    pub fn is_top(&self, state: OpenState) -> bool {
        self.top() == Some(state)
    }

    /// Check whether nothing is open.
    pub fn is_empty(&self) -> bool {
        self.open.is_empty()
    }

    /// Number of open states.
    pub fn depth(&self) -> usize {
        self.open.len()
    }

    /// Open a state.
    pub fn push(&mut self, state: OpenState) {
        self.open.push(state);
    }

    /// Close the most recently opened state.
    pub fn pop(&mut self) -> Option<OpenState> {
        self.open.pop()
    }

    /// Toggle `state` and return the tag to emit.
    ///
    /// Closes `state` if it is on top of the stack, otherwise opens it.
    pub fn toggle(&mut self, state: OpenState) -> String {
        if self.is_top(state) {
            self.open.pop();
            state.close_tag()
        } else {
            self.open.push(state);
            state.open_tag()
        }
    }

    /// Close a heading if one is on top, returning its level.
    pub fn close_heading(&mut self) -> Option<u8> {
        match self.top() {
            Some(OpenState::Heading(level)) => {
                self.open.pop();
                Some(level)
            }
            _ => None,
        }
    }

    /// The open states, oldest first.
    pub fn open_states(&self) -> &[OpenState] {
        &self.open
    }
}
