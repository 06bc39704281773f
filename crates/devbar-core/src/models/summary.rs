//! Module summary types.

use serde::{Deserialize, Serialize};

use super::Module;

/// Summary information about a module for listings and module switchers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ModuleSummary {
    pub id: String,
    pub title: String,
    pub total_steps: u32,
    pub total_tasks: u32,
}

impl From<&Module> for ModuleSummary {
    fn from(module: &Module) -> Self {
        Self {
            id: module.id.clone(),
            title: module.title.clone(),
            total_steps: module.steps.len() as u32,
            total_tasks: module.tasks.len() as u32,
        }
    }
}
