//! Builder for creating and configuring ContentRegistry instances.

use std::path::{Path, PathBuf};

use super::{catalog, ContentRegistry};

use crate::error::Result;

/// Builder for creating and configuring ContentRegistry instances.
#[derive(Debug, Clone, Default)]
pub struct ContentRegistryBuilder {
    catalog_dir: Option<PathBuf>,
}

impl ContentRegistryBuilder {
    /// Creates a new builder that loads the compiled-in catalog.
    pub fn new() -> Self {
        Self { catalog_dir: None }
    }

    /// Sets a directory of lesson files to load instead of the compiled-in
    /// catalog.
    pub fn with_catalog_dir<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.catalog_dir = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Loads and validates the catalog.
    ///
    /// # Errors
    ///
    /// Returns `TutorialError::FileSystem` if the catalog directory cannot be
    /// read, `TutorialError::CatalogParse` if a lesson file is malformed and
    /// `TutorialError::ContentIntegrity` if the content violates an
    /// authoring invariant.
    pub fn build(self) -> Result<ContentRegistry> {
        let modules = match &self.catalog_dir {
            Some(dir) => catalog::load_dir(dir)?,
            None => catalog::builtin_modules()?,
        };
        ContentRegistry::from_modules(modules)
    }
}
