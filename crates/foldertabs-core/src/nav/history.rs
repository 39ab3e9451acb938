//! Per-tab back navigation.

use std::path::PathBuf;

/// Immutable stack of previously visited folders within one tab.
///
/// Every mutation returns a **new** `History`. There is no forward stack:
/// going back discards the popped entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History {
    back_stack: Vec<PathBuf>,
}

impl History {
    /// Creates an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pushes `path` onto the back stack. Returns a new `History`.
    pub fn push(&self, path: PathBuf) -> Self {
        let mut back_stack = self.back_stack.clone();
        back_stack.push(path);
        Self { back_stack }
    }

    /// Go back one step. Returns the new History and the path to navigate to,
    /// or `None` if the back stack is empty.
    pub fn go_back(&self) -> Option<(Self, PathBuf)> {
        let mut back_stack = self.back_stack.clone();
        let path = back_stack.pop()?;
        Some((Self { back_stack }, path))
    }

    /// Returns an empty history.
    pub fn clear(&self) -> Self {
        Self::new()
    }

    /// Returns `true` if there is at least one entry on the back stack.
    pub fn can_go_back(&self) -> bool {
        !self.back_stack.is_empty()
    }

    /// Number of entries on the back stack.
    pub fn len(&self) -> usize {
        self.back_stack.len()
    }

    /// Whether the back stack is empty.
    pub fn is_empty(&self) -> bool {
        self.back_stack.is_empty()
    }

    /// Entries from oldest to most recent.
    pub fn entries(&self) -> &[PathBuf] {
        &self.back_stack
    }
}
