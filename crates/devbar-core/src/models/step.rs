//! Step model definition.

use serde::{Deserialize, Serialize};

use super::CodeExample;

/// One instructional unit within a module.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Step {
    /// Position within the module (1-based, contiguous)
    pub index: u32,

    /// Heading shown above the explanation
    pub title: String,

    /// Prose content, may reference identifiers and file paths inline
    pub explanation: String,

    /// Code shown with this step
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snippet: Option<CodeExample>,
}

impl Step {
    /// Highlighted lines of the snippet, in ascending order.
    ///
    /// Empty when the step has no snippet.
    pub fn highlighted_lines(&self) -> Vec<u32> {
        self.snippet
            .as_ref()
            .map(|snippet| snippet.highlighted_lines.iter().copied().collect())
            .unwrap_or_default()
    }
}
