//! One-line outcome messages shown above a command's main output.
//!
//! The CLI prints an [`OperationStatus`] after a `reset`, after `validate`
//! and when a navigation or lookup error was recovered from, in which case
//! the progress overview follows it.

use std::{error::Error as _, fmt};

use crate::error::TutorialError;

/// Outcome of a learner command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationStatus {
    pub message: String,
    pub success: bool,
}

impl OperationStatus {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: true,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: false,
        }
    }

    /// Failure line for an error the front end fell back from.
    ///
    /// The registry lookup behind a rejected transition is appended in
    /// parentheses, e.g. `Invalid transition: cannot advance to step 1 of
    /// module 'x' (Module 'x' not found)`.
    pub fn recovered(err: &TutorialError) -> Self {
        match err.source() {
            Some(cause) => Self::failure(format!("{err} ({cause})")),
            None => Self::failure(err.to_string()),
        }
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = if self.success { "Success:" } else { "Error:" };
        writeln!(f, "{label} {}", self.message)
    }
}
