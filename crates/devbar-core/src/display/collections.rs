//! Collection wrapper types for display formatting.
//!
//! Newtype wrappers that give collections of domain models a markdown
//! [`fmt::Display`] implementation while keeping slice-like access.

use std::{fmt, ops::Index};

use crate::models::{ModuleStatus, ModuleSummary, TaskItem};

/// Ordered module listing, as returned by
/// [`ContentRegistry::list_modules`](crate::registry::ContentRegistry::list_modules).
///
/// # Examples
///
/// ```rust
/// use devbar_core::{display::ModuleSummaries, models::ModuleSummary};
///
/// let summaries = ModuleSummaries(vec![ModuleSummary {
///     id: "1-react-basics".to_string(),
///     title: "React Basics".to_string(),
///     total_steps: 6,
///     total_tasks: 6,
/// }]);
/// assert!(summaries.to_string().contains("## React Basics (ID: 1-react-basics)"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleSummaries(pub Vec<ModuleSummary>);

impl ModuleSummaries {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, index: usize) -> Option<&ModuleSummary> {
        self.0.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ModuleSummary> {
        self.0.iter()
    }
}

impl Index<usize> for ModuleSummaries {
    type Output = ModuleSummary;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for ModuleSummaries {
    type Item = ModuleSummary;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ModuleSummaries {
    type Item = &'a ModuleSummary;
    type IntoIter = std::slice::Iter<'a, ModuleSummary>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for ModuleSummaries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No modules found.")
        } else {
            for summary in &self.0 {
                write!(f, "{summary}")?;
            }
            Ok(())
        }
    }
}

/// A module's checklist with one learner's completion flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Checklist(pub Vec<TaskItem>);

impl Checklist {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Number of tasks marked done.
    pub fn completed_count(&self) -> usize {
        self.0.iter().filter(|item| item.completed).count()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TaskItem> {
        self.0.iter()
    }
}

impl Index<usize> for Checklist {
    type Output = TaskItem;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<'a> IntoIterator for &'a Checklist {
    type Item = &'a TaskItem;
    type IntoIter = std::slice::Iter<'a, TaskItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Checklist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No tasks in this module.");
        }
        for item in &self.0 {
            let mark = if item.completed { 'x' } else { ' ' };
            writeln!(f, "- [{mark}] {}", item.description)?;
        }
        Ok(())
    }
}

/// One row of the progress overview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleProgress {
    pub summary: ModuleSummary,
    pub status: ModuleStatus,
    /// The learner's current position is inside this module
    pub is_current: bool,
}

/// Every module with its status, in teaching order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleOverview(pub Vec<ModuleProgress>);

impl ModuleOverview {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Number of modules in the `Completed` state.
    pub fn completed_count(&self) -> usize {
        self.0
            .iter()
            .filter(|row| row.status == ModuleStatus::Completed)
            .count()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ModuleProgress> {
        self.0.iter()
    }
}

impl Index<usize> for ModuleOverview {
    type Output = ModuleProgress;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl fmt::Display for ModuleOverview {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No modules found.");
        }

        writeln!(
            f,
            "# Progress ({}/{} modules completed)",
            self.completed_count(),
            self.0.len()
        )?;
        writeln!(f)?;
        for row in &self.0 {
            let current = if row.is_current { " ← you are here" } else { "" };
            writeln!(
                f,
                "- **{}** `{}` ({}){current}",
                row.summary.title,
                row.summary.id,
                row.status.with_icon()
            )?;
        }
        Ok(())
    }
}
