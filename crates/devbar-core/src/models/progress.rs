//! Runtime progress record of one learner session.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use super::ModuleStatus;
use crate::error::Result;

/// Learner position and per-module completion.
///
/// Modules absent from `module_statuses` are [`ModuleStatus::NotStarted`].
/// Ordered maps keep the JSON form stable, so two equal states always
/// serialize identically.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProgressState {
    /// Module the learner is currently on
    #[serde(default)]
    pub current_module_id: Option<String>,

    /// 1-based step within the current module
    #[serde(default)]
    pub current_step_index: Option<u32>,

    #[serde(default)]
    pub module_statuses: BTreeMap<String, ModuleStatus>,

    /// Completed task indices (1-based) per module
    #[serde(default)]
    pub completed_tasks_by_module: BTreeMap<String, BTreeSet<u32>>,
}

impl ProgressState {
    /// Status of a module, `NotStarted` if it was never touched.
    pub fn status_of(&self, module_id: &str) -> ModuleStatus {
        self.module_statuses
            .get(module_id)
            .copied()
            .unwrap_or_default()
    }

    /// Current position as `(module_id, step_index)`.
    pub fn position(&self) -> Option<(&str, u32)> {
        match (&self.current_module_id, self.current_step_index) {
            (Some(module_id), Some(index)) => Some((module_id.as_str(), index)),
            _ => None,
        }
    }

    /// Ids of every completed module.
    pub fn completed_modules(&self) -> BTreeSet<&str> {
        self.module_statuses
            .iter()
            .filter(|(_, status)| **status == ModuleStatus::Completed)
            .map(|(id, _)| id.as_str())
            .collect()
    }

    pub(crate) fn clear_position(&mut self) {
        self.current_module_id = None;
        self.current_step_index = None;
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Deserialize from JSON produced by [`ProgressState::to_json`].
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
