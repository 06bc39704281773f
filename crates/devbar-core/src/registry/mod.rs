//! Read-only catalog of lesson modules.
//!
//! The [`ContentRegistry`] owns the ordered modules of the tutorial. Content
//! is authored once and validated when the registry is built; afterwards no
//! mutation API exists, so every lookup works against known-good data.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Lesson files   │    │   Validation    │    │ ContentRegistry │
//! │ (catalog/*.yaml)│───▶│  (load time)    │───▶│   (read-only)   │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: Factory for creating [`ContentRegistry`] instances
//! - [`catalog`]: Compiled-in lessons and catalog directories
//! - [`validation`]: Integrity checks run at construction
//!
//! # Examples
//!
//! ```rust
//! use devbar_core::{ContentRegistry, TutorialError};
//!
//! let registry = ContentRegistry::builtin()?;
//! let modules = registry.list_modules();
//! assert_eq!(modules[0].id, "1-react-basics");
//!
//! let step = registry.get_step("1-react-basics", 2)?;
//! assert_eq!(step.highlighted_lines(), vec![2, 11]);
//!
//! assert!(matches!(
//!     registry.get_step("1-react-basics", 7),
//!     Err(TutorialError::StepOutOfRange { .. })
//! ));
//! # Ok::<(), TutorialError>(())
//! ```

use log::info;

pub mod builder;
pub mod catalog;
pub mod validation;


pub use builder::ContentRegistryBuilder;

use crate::{
    display::ModuleSummaries,
    error::{Result, TutorialError},
    models::{Module, ModuleSummary, Step},
};

/// Ordered, validated collection of lesson modules.
#[derive(Debug, Clone)]
pub struct ContentRegistry {
    modules: Vec<Module>,
}

impl ContentRegistry {
    /// Build a registry from modules in teaching order.
    ///
    /// # Errors
    ///
    /// Returns `TutorialError::ContentIntegrity` naming the first offending
    /// module and step if the content is malformed.
    pub fn from_modules(modules: Vec<Module>) -> Result<Self> {
        validation::validate_catalog(&modules)?;
        info!(
            "Loaded {} modules with {} steps",
            modules.len(),
            modules.iter().map(Module::step_count).sum::<usize>()
        );
        Ok(Self { modules })
    }

    /// Build a registry from the compiled-in lessons.
    pub fn builtin() -> Result<Self> {
        ContentRegistryBuilder::new().build()
    }

    /// Ordered module summaries.
    pub fn list_modules(&self) -> ModuleSummaries {
        ModuleSummaries(self.modules.iter().map(ModuleSummary::from).collect())
    }

    /// Look up a module by id.
    pub fn get_module(&self, id: &str) -> Result<&Module> {
        self.modules
            .iter()
            .find(|module| module.id == id)
            .ok_or_else(|| TutorialError::ModuleNotFound { id: id.to_string() })
    }

    /// Look up a step by module id and 1-based index.
    pub fn get_step(&self, module_id: &str, index: u32) -> Result<&Step> {
        let module = self.get_module(module_id)?;
        module.step(index).ok_or_else(|| TutorialError::StepOutOfRange {
            module_id: module_id.to_string(),
            index,
            len: module.step_count(),
        })
    }

    /// All modules in teaching order.
    pub fn modules(&self) -> &[Module] {
        &self.modules
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// Total number of steps across all modules.
    pub fn total_steps(&self) -> usize {
        self.modules.iter().map(Module::step_count).sum()
    }

    /// The module following `id` in teaching order.
    pub fn module_after(&self, id: &str) -> Option<&Module> {
        let position = self.modules.iter().position(|module| module.id == id)?;
        self.modules.get(position + 1)
    }

    /// Where a front end lands after a recoverable lookup failure: the first
    /// step of the first module. `None` only for an empty registry.
    pub fn default_position(&self) -> Option<(&str, u32)> {
        self.modules.first().map(|module| (module.id.as_str(), 1))
    }
}
