//! Composed screens built from several models.

use std::fmt;

use super::Checklist;
use crate::models::{Module, ModuleStatus, Step};

/// A single step in the context of its module.
pub struct StepView<'a> {
    pub module: &'a Module,
    pub step: &'a Step,
    pub status: ModuleStatus,
}

impl<'a> StepView<'a> {
    pub fn new(module: &'a Module, step: &'a Step, status: ModuleStatus) -> Self {
        Self {
            module,
            step,
            status,
        }
    }
}

impl fmt::Display for StepView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.module.title)?;
        writeln!(f)?;
        writeln!(
            f,
            "Step {} of {} ({})",
            self.step.index,
            self.module.step_count(),
            self.status.with_icon()
        )?;
        writeln!(f)?;
        write!(f, "{}", self.step)
    }
}

/// The screen shown once a module is complete: its summary, the finished
/// checklist and where to go next.
pub struct CompletionView<'a> {
    pub module: &'a Module,
    pub checklist: &'a Checklist,
    pub next: Option<&'a Module>,
}

impl fmt::Display for CompletionView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {} complete", self.module.title)?;
        writeln!(f)?;

        if let Some(completion) = &self.module.completion {
            writeln!(f, "{}", completion.summary)?;
            writeln!(f)?;
        }

        if !self.checklist.is_empty() {
            writeln!(f, "## Tasks")?;
            writeln!(f)?;
            write!(f, "{}", self.checklist)?;
            writeln!(f)?;
        }

        match self.next {
            Some(next) => writeln!(f, "Next up: **{}** (`{}`)", next.title, next.id),
            None => writeln!(f, "You have reached the end of the tutorial."),
        }
    }
}
