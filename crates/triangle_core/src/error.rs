use thiserror::Error;

use crate::domain::Attribute;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// Selecting `attempted` would exceed the cap; nothing was changed.
    #[error("cannot select {attempted}: at most {max} attributes can be selected at once")]
    SelectionLimitExceeded { attempted: Attribute, max: usize },
    #[error("invalid attribute '{input}': expected one of good, fast, cheap")]
    InvalidAttribute { input: String },
}

impl SelectionError {
    /// The limit is hit during normal use; an invalid attribute is an
    /// integration bug.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, SelectionError::SelectionLimitExceeded { .. })
    }
}
