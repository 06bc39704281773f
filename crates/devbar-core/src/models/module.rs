//! Module model definition and related functionality.

use serde::{Deserialize, Serialize};

use super::{Step, Task};

/// Content shown once every step of a module has been acknowledged.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Completion {
    /// Closing summary of what the module covered
    pub summary: String,

    /// Module the learner should select next, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_module: Option<String>,
}

/// One lesson unit: intro, ordered steps, task checklist and completion view.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Module {
    /// Stable ordered identifier, e.g. `1-react-basics`
    pub id: String,

    /// Display name
    pub title: String,

    /// Introductory text
    pub intro: String,

    /// Steps in teaching order
    pub steps: Vec<Step>,

    /// Checklist of the units of work taught across the steps
    #[serde(default)]
    pub tasks: Vec<Task>,

    /// Completion view
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completion: Option<Completion>,
}

impl Module {
    /// Number of steps in the module.
    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    /// Index of the final step, the sole completion signal.
    pub fn final_step_index(&self) -> u32 {
        self.steps.len() as u32
    }

    /// Look up a step by its 1-based index.
    pub fn step(&self, index: u32) -> Option<&Step> {
        let position = (index as usize).checked_sub(1)?;
        self.steps.get(position)
    }
}
