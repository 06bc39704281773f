//! Display implementations for domain models.
//!
//! Kept apart from the model definitions so the data contract does not
//! depend on presentation.

use std::fmt;

use crate::models::{CodeExample, Module, ModuleStatus, ModuleSummary, Step};

/// Gutter marker for an emphasized snippet line.
pub const HIGHLIGHT_MARKER: char = '▶';

impl fmt::Display for ModuleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The module intro screen: title, intro text and what will be built.
impl fmt::Display for Module {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.title)?;
        writeln!(f)?;
        writeln!(f, "- Module: {}", self.id)?;
        writeln!(f, "- Steps: {}", self.step_count())?;
        writeln!(f)?;
        writeln!(f, "{}", self.intro)?;

        if !self.tasks.is_empty() {
            writeln!(f, "\n## What you will build")?;
            writeln!(f)?;
            for (index, task) in self.tasks.iter().enumerate() {
                writeln!(f, "{}. {}", index + 1, task.description)?;
            }
        }

        Ok(())
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {}. {}", self.index, self.title)?;
        writeln!(f)?;
        writeln!(f, "{}", self.explanation)?;

        if let Some(snippet) = &self.snippet {
            writeln!(f)?;
            write!(f, "{snippet}")?;
        }

        Ok(())
    }
}

/// Renders a fenced block with a line-number gutter. Highlighted lines carry
/// [`HIGHLIGHT_MARKER`] in the gutter so they survive plain-text output.
impl fmt::Display for CodeExample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "**{}**", self.title)?;
        writeln!(f)?;
        writeln!(f, "```")?;

        let width = self.line_count().max(1).to_string().len();
        for line in self.annotated_lines() {
            let marker = if line.highlighted { HIGHLIGHT_MARKER } else { ' ' };
            writeln!(f, "{marker}{:>width$} │ {}", line.number, line.text)?;
        }

        writeln!(f, "```")
    }
}

impl fmt::Display for ModuleSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {} (ID: {})", self.title, self.id)?;
        writeln!(f)?;
        writeln!(f, "- **Steps**: {}", self.total_steps)?;
        writeln!(f, "- **Tasks**: {}", self.total_tasks)?;
        writeln!(f)
    }
}
