//! Per-module progress states.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of module progress states.
///
/// The only forward transitions are `NotStarted -> InProgress -> Completed`
/// (a jump straight to the final step goes to `Completed` directly). Nothing
/// moves a module back except an explicit reset.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum ModuleStatus {
    /// No step of the module has been viewed
    #[default]
    NotStarted,

    /// At least one step has been viewed
    InProgress,

    /// The final step has been reached
    Completed,
}

impl FromStr for ModuleStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "not_started" | "notstarted" => Ok(ModuleStatus::NotStarted),
            "in_progress" | "inprogress" => Ok(ModuleStatus::InProgress),
            "completed" => Ok(ModuleStatus::Completed),
            _ => Err(format!("Invalid module status: {s}")),
        }
    }
}

impl ModuleStatus {
    /// Serialized string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            ModuleStatus::NotStarted => "not_started",
            ModuleStatus::InProgress => "in_progress",
            ModuleStatus::Completed => "completed",
        }
    }

    /// Get status with consistent icon formatting for display.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use devbar_core::models::ModuleStatus;
    ///
    /// assert_eq!(ModuleStatus::Completed.with_icon(), "✓ Completed");
    /// assert_eq!(ModuleStatus::InProgress.with_icon(), "➤ In Progress");
    /// assert_eq!(ModuleStatus::NotStarted.with_icon(), "○ Not Started");
    /// ```
    pub fn with_icon(&self) -> &'static str {
        match self {
            ModuleStatus::Completed => "✓ Completed",
            ModuleStatus::InProgress => "➤ In Progress",
            ModuleStatus::NotStarted => "○ Not Started",
        }
    }

    /// State after the learner views `step_index` of a module with
    /// `final_step` steps.
    pub fn after_viewing(self, step_index: u32, final_step: u32) -> Self {
        match self {
            ModuleStatus::Completed => ModuleStatus::Completed,
            _ if step_index == final_step => ModuleStatus::Completed,
            _ => ModuleStatus::InProgress,
        }
    }
}
