//! Learner position and module completion.
//!
//! A [`ProgressTracker`] borrows the read-only [`ContentRegistry`] and owns
//! one [`ProgressState`]. Every mutation is validated against the registry
//! first, so a failed call leaves the state exactly as it was.
//!
//! Each module moves through `NotStarted -> InProgress -> Completed`.
//! Viewing any step starts a module; reaching its final step completes it.
//! Once completed, revisiting earlier steps never moves it back. Only
//! [`ProgressTracker::reset_module`] returns a module to `NotStarted`.
//!
//! # Examples
//!
//! ```rust
//! use devbar_core::{ContentRegistry, ModuleStatus, ProgressTracker};
//!
//! # fn main() -> devbar_core::Result<()> {
//! let registry = ContentRegistry::builtin()?;
//! let mut tracker = ProgressTracker::new(&registry);
//!
//! assert_eq!(tracker.advance_to("1-react-basics", 1)?, ModuleStatus::InProgress);
//! assert_eq!(tracker.advance_to("1-react-basics", 6)?, ModuleStatus::Completed);
//! assert!(tracker.is_module_complete("1-react-basics"));
//!
//! // Unknown targets are rejected and leave the state untouched
//! let before = tracker.state().clone();
//! assert!(tracker.advance_to("does-not-exist", 1).is_err());
//! assert_eq!(tracker.state(), &before);
//! # Ok(())
//! # }
//! ```

use log::{debug, warn};

#[cfg(test)]
mod tests;

use crate::{
    display::{Checklist, ModuleOverview, ModuleProgress},
    error::{Result, TutorialError},
    models::{Module, ModuleStatus, ProgressState, Step, TaskItem},
    registry::ContentRegistry,
};

/// Progress of one learner session over a registry.
#[derive(Debug, Clone)]
pub struct ProgressTracker<'r> {
    registry: &'r ContentRegistry,
    state: ProgressState,
}

impl<'r> ProgressTracker<'r> {
    /// Creates a tracker with every module `NotStarted` and no position.
    pub fn new(registry: &'r ContentRegistry) -> Self {
        Self {
            registry,
            state: ProgressState::default(),
        }
    }

    /// Rebuilds a tracker from a previously saved state.
    ///
    /// Entries for modules the registry no longer knows are dropped, and a
    /// position that does not resolve is cleared. Task ticks are rebuilt from
    /// the module statuses: every task of a completed module is done, and no
    /// task of any other module is.
    pub fn resume(registry: &'r ContentRegistry, mut state: ProgressState) -> Self {
        state.module_statuses.retain(|id, _| {
            let known = registry.get_module(id).is_ok();
            if !known {
                warn!("Discarding progress for unknown module '{id}'");
            }
            known
        });

        state.completed_tasks_by_module = registry
            .modules()
            .iter()
            .filter(|module| state.status_of(&module.id) == ModuleStatus::Completed)
            .map(|module| (module.id.clone(), (1..=module.tasks.len() as u32).collect()))
            .collect();

        let position_resolves = match state.position() {
            Some((module_id, index)) => registry.get_step(module_id, index).is_ok(),
            None => state.current_module_id.is_none() && state.current_step_index.is_none(),
        };
        if !position_resolves {
            warn!("Discarding saved position that no longer resolves");
            state.clear_position();
        }

        Self { registry, state }
    }

    /// The registry this tracker validates against.
    pub fn registry(&self) -> &'r ContentRegistry {
        self.registry
    }

    /// Current progress record.
    pub fn state(&self) -> &ProgressState {
        &self.state
    }

    /// Consumes the tracker, returning its progress record.
    pub fn into_state(self) -> ProgressState {
        self.state
    }

    /// Moves the learner to a step and applies the module transition.
    ///
    /// Calling it twice with the same arguments has the same effect as
    /// calling it once.
    ///
    /// # Errors
    ///
    /// Returns `TutorialError::InvalidTransition`, caused by the failed
    /// registry lookup, if the module or step does not exist. The state is
    /// left unchanged.
    pub fn advance_to(&mut self, module_id: &str, step_index: u32) -> Result<ModuleStatus> {
        let unresolved = |e| {
            TutorialError::transition(format!(
                "cannot advance to step {step_index} of module '{module_id}'"
            ))
            .caused_by(e)
        };
        let module = self.registry.get_module(module_id).map_err(unresolved)?;
        self.registry
            .get_step(module_id, step_index)
            .map_err(unresolved)?;

        let previous = self.state.status_of(module_id);
        let status = previous.after_viewing(step_index, module.final_step_index());

        self.state.current_module_id = Some(module.id.clone());
        self.state.current_step_index = Some(step_index);
        self.state.module_statuses.insert(module.id.clone(), status);

        if status == ModuleStatus::Completed {
            self.state
                .completed_tasks_by_module
                .insert(module.id.clone(), (1..=module.tasks.len() as u32).collect());
        }

        if status != previous {
            debug!("Module '{}' moved from {previous} to {status}", module.id);
        }

        Ok(status)
    }

    /// Moves to the step after the current one.
    ///
    /// Without a position this starts at the registry's default position.
    /// From a final step it moves on to the first step of the next module.
    ///
    /// # Errors
    ///
    /// Returns `TutorialError::InvalidTransition` at the final step of the
    /// final module, or if the registry is empty.
    pub fn advance_next(&mut self) -> Result<ModuleStatus> {
        let Some((module_id, index)) = self.state.position() else {
            let (module_id, index) = self
                .registry
                .default_position()
                .ok_or_else(|| TutorialError::transition("the catalog has no modules").build())?;
            return self.advance_to(module_id, index);
        };

        let module = self.registry.get_module(module_id)?;
        if index < module.final_step_index() {
            return self.advance_to(&module.id, index + 1);
        }

        match self.registry.module_after(&module.id) {
            Some(next) => self.advance_to(&next.id, 1),
            None => Err(TutorialError::transition(format!(
                "'{}' is the final module and step {index} is its final step",
                module.id
            ))
            .build()),
        }
    }

    /// Moves to the step before the current one within the same module.
    ///
    /// # Errors
    ///
    /// Returns `TutorialError::InvalidTransition` when there is no current
    /// position or the learner is already on the first step.
    pub fn advance_back(&mut self) -> Result<ModuleStatus> {
        let Some((module_id, index)) = self.state.position() else {
            return Err(TutorialError::transition("no step has been opened yet").build());
        };
        if index <= 1 {
            return Err(TutorialError::transition(format!(
                "already at the first step of module '{module_id}'"
            ))
            .build());
        }

        let module_id = module_id.to_string();
        self.advance_to(&module_id, index - 1)
    }

    /// Whether the module reached its final step. Unknown modules are never
    /// complete.
    pub fn is_module_complete(&self, module_id: &str) -> bool {
        self.state.status_of(module_id) == ModuleStatus::Completed
    }

    /// Current state of a module.
    pub fn module_status(&self, module_id: &str) -> ModuleStatus {
        self.state.status_of(module_id)
    }

    /// Clears all progress of a module back to `NotStarted`.
    ///
    /// If the learner is positioned inside the module the position is
    /// cleared as well.
    ///
    /// # Errors
    ///
    /// Returns `TutorialError::ModuleNotFound` for an unknown module.
    pub fn reset_module(&mut self, module_id: &str) -> Result<()> {
        let module = self.registry.get_module(module_id)?;

        self.state.module_statuses.remove(&module.id);
        self.state.completed_tasks_by_module.remove(&module.id);
        if self.state.current_module_id.as_deref() == Some(module.id.as_str()) {
            self.state.clear_position();
        }

        debug!("Module '{}' reset", module.id);
        Ok(())
    }

    /// The module and step the learner is on.
    pub fn current_step(&self) -> Option<(&'r Module, &'r Step)> {
        let (module_id, index) = self.state.position()?;
        let module = self.registry.get_module(module_id).ok()?;
        let step = module.step(index)?;
        Some((module, step))
    }

    /// A module's task checklist with this learner's completion flags.
    pub fn checklist(&self, module_id: &str) -> Result<Checklist> {
        let module = self.registry.get_module(module_id)?;
        let completed = self.state.completed_tasks_by_module.get(&module.id);

        let items = module
            .tasks
            .iter()
            .zip(1u32..)
            .map(|(task, index)| TaskItem {
                index,
                description: task.description.clone(),
                completed: completed.is_some_and(|done| done.contains(&index)),
            })
            .collect();

        Ok(Checklist(items))
    }

    /// Every module with its status, in teaching order.
    pub fn overview(&self) -> ModuleOverview {
        let current = self.state.current_module_id.as_deref();
        ModuleOverview(
            self.registry
                .modules()
                .iter()
                .map(|module| ModuleProgress {
                    summary: module.into(),
                    status: self.state.status_of(&module.id),
                    is_current: current == Some(module.id.as_str()),
                })
                .collect(),
        )
    }
}
