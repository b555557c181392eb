//! Enum types for the hillfort editor

use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction of sibling navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Next,
    Previous,
}

impl Direction {
    /// Apply this direction to a position. `None` means the step leaves
    /// the range `[0, len)`.
    pub fn step(&self, position: usize, len: usize) -> Option<usize> {
        let target = match self {
            Self::Next => position.checked_add(1)?,
            Self::Previous => position.checked_sub(1)?,
        };
        (target < len).then_some(target)
    }

    /// Capitalized label for user-facing notices.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Next => "Next",
            Self::Previous => "Previous",
        }
    }
}

/// Whether an editor session creates a new record or edits an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionMode {
    New,
    Editing,
}

/// Lifecycle state of an editor session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionState {
    Open,
    Committed,
    Discarded,
    Deleted,
}

impl SessionState {
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open)
    }
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open => f.write_str("open"),
            Self::Committed => f.write_str("committed"),
            Self::Discarded => f.write_str("discarded"),
            Self::Deleted => f.write_str("deleted"),
        }
    }
}
