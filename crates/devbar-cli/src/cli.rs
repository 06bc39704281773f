//! Command handlers for the terminal front end.
//!
//! The [`Cli`] sits at the boundary between the core and the terminal. It
//! applies the error propagation policy: recoverable lookup and navigation
//! failures are shown as an error line followed by the progress overview,
//! everything else is handed back to `main` and ends the process.

use std::fmt::Display;

use anyhow::{Context, Result};
use devbar_core::{
    CompletionView, ModuleStatus, OperationStatus, ProgressTracker, SessionFile, StepView,
    TutorialError,
};
use log::debug;

use crate::renderer::TerminalRenderer;

/// One invocation against a learner session.
pub struct Cli<'r> {
    tracker: ProgressTracker<'r>,
    session: SessionFile,
    renderer: TerminalRenderer,
}

impl<'r> Cli<'r> {
    pub fn new(
        tracker: ProgressTracker<'r>,
        session: SessionFile,
        renderer: TerminalRenderer,
    ) -> Self {
        Self {
            tracker,
            session,
            renderer,
        }
    }

    /// Progress overview followed by the current position, if any.
    pub fn status(&self) -> Result<()> {
        self.render(self.tracker.overview())?;

        if let Some((module, step)) = self.tracker.current_step() {
            self.render(format!(
                "\nCurrent step: **{}** (step {} of {} in `{}`)\n",
                step.title,
                step.index,
                module.step_count(),
                module.id
            ))?;
        }
        Ok(())
    }

    pub fn list_modules(&self) -> Result<()> {
        self.render(self.tracker.registry().list_modules())
    }

    pub fn intro(&self, module_id: &str) -> Result<()> {
        match self.tracker.registry().get_module(module_id) {
            Ok(module) => self.render(module),
            Err(e) => self.recover(e),
        }
    }

    pub fn step(&mut self, module_id: &str, index: u32) -> Result<()> {
        let outcome = self.tracker.advance_to(module_id, index);
        self.after_navigation(outcome)
    }

    pub fn next(&mut self) -> Result<()> {
        let outcome = self.tracker.advance_next();
        self.after_navigation(outcome)
    }

    pub fn prev(&mut self) -> Result<()> {
        let outcome = self.tracker.advance_back();
        self.after_navigation(outcome)
    }

    pub fn reset(&mut self, module_id: &str) -> Result<()> {
        if let Err(e) = self.tracker.reset_module(module_id) {
            return self.recover(e);
        }
        self.save()?;
        self.render(OperationStatus::success(format!(
            "Progress for module '{module_id}' has been reset"
        )))
    }

    fn after_navigation(&mut self, outcome: devbar_core::Result<ModuleStatus>) -> Result<()> {
        let status = match outcome {
            Ok(status) => status,
            Err(e) => return self.recover(e),
        };
        self.save()?;

        let Some((module, step)) = self.tracker.current_step() else {
            return Ok(());
        };
        self.render(StepView::new(module, step, status))?;

        if status == ModuleStatus::Completed && step.index == module.final_step_index() {
            let registry = self.tracker.registry();
            let next = match module
                .completion
                .as_ref()
                .and_then(|c| c.next_module.as_deref())
            {
                Some(id) => registry.get_module(id).ok(),
                None => registry.module_after(&module.id),
            };
            let checklist = self
                .tracker
                .checklist(&module.id)
                .context("Failed to build checklist")?;

            self.render("\n")?;
            self.render(CompletionView {
                module,
                checklist: &checklist,
                next,
            })?;
        }
        Ok(())
    }

    /// Recoverable errors become an error line plus the overview; anything
    /// else is returned to the caller.
    fn recover(&self, err: TutorialError) -> Result<()> {
        if !err.is_recoverable() {
            return Err(err.into());
        }
        debug!("Recovering from: {err}");

        self.render(OperationStatus::recovered(&err))?;
        self.render("\n")?;
        self.render(self.tracker.overview())
    }

    fn save(&self) -> Result<()> {
        self.session.save(self.tracker.state()).with_context(|| {
            format!("Failed to save session to {}", self.session.path().display())
        })
    }

    fn render(&self, view: impl Display) -> Result<()> {
        self.renderer.render(&view.to_string())
    }
}
