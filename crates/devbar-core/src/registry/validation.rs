//! Load-time integrity checks for the lesson catalog.
//!
//! Validation runs once, when a [`ContentRegistry`](super::ContentRegistry)
//! is constructed. Any failure is an authoring defect and is reported as
//! [`TutorialError::ContentIntegrity`] naming the offending module and step.

use std::collections::HashSet;

use crate::{
    error::{Result, TutorialError},
    models::Module,
};

/// Validate a whole catalog, stopping at the first defect.
pub fn validate_catalog(modules: &[Module]) -> Result<()> {
    let mut seen = HashSet::new();
    for module in modules {
        if !seen.insert(module.id.as_str()) {
            return Err(TutorialError::integrity(&module.id).with_reason("duplicate module id"));
        }
        validate_module(module)?;
    }

    for module in modules {
        let Some(next) = module
            .completion
            .as_ref()
            .and_then(|completion| completion.next_module.as_deref())
        else {
            continue;
        };
        if next == module.id {
            return Err(TutorialError::integrity(&module.id)
                .with_reason("completion points to the module itself as next module"));
        }
        if !seen.contains(next) {
            return Err(TutorialError::integrity(&module.id)
                .with_reason(format!("next module '{next}' does not exist")));
        }
    }

    Ok(())
}

/// Validate a single module in isolation.
pub fn validate_module(module: &Module) -> Result<()> {
    if module.id.trim().is_empty() {
        return Err(TutorialError::integrity(&module.id).with_reason("module id is empty"));
    }
    if module.steps.is_empty() {
        return Err(TutorialError::integrity(&module.id).with_reason("module has no steps"));
    }

    for (expected, step) in (1u32..).zip(&module.steps) {
        if step.index != expected {
            return Err(TutorialError::integrity(&module.id)
                .at_step(step.index)
                .with_reason(format!(
                    "step indices must be contiguous from 1, expected {expected} but found {}",
                    step.index
                )));
        }

        let out_of_range = step
            .snippet
            .as_ref()
            .and_then(|snippet| snippet.out_of_range_lines().next().map(|line| (snippet, line)));
        if let Some((snippet, line)) = out_of_range {
            return Err(TutorialError::integrity(&module.id)
                .at_step(step.index)
                .with_reason(format!(
                    "highlighted line {line} is outside snippet '{}' ({} lines)",
                    snippet.title,
                    snippet.line_count()
                )));
        }
    }

    if module.completion.is_some() && module.tasks.is_empty() {
        return Err(TutorialError::integrity(&module.id)
            .with_reason("module has a completion view but no tasks"));
    }

    Ok(())
}
