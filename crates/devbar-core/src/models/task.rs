//! Checklist entries.

use serde::{Deserialize, Serialize};

/// A checklist entry as authored in the catalog.
///
/// The description uses inline markdown for emphasis. Completion is
/// learner-scoped and therefore lives in [`TaskItem`], not here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct Task {
    pub description: String,
}

impl From<&str> for Task {
    fn from(description: &str) -> Self {
        Self {
            description: description.to_string(),
        }
    }
}

/// A task as seen by one learner.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TaskItem {
    /// 1-based position in the module's checklist
    pub index: u32,
    pub description: String,
    pub completed: bool,
}
