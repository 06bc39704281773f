//! Error types for the tutorial library.

use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all catalog and progress operations.
#[derive(Error, Debug)]
pub enum TutorialError {
    /// The lesson catalog violates an authoring invariant
    #[error("Content integrity error in {}: {reason}", location(.module_id, .step))]
    ContentIntegrity {
        module_id: String,
        step: Option<u32>,
        reason: String,
    },
    /// Module not found for the given ID
    #[error("Module '{id}' not found")]
    ModuleNotFound { id: String },
    /// Step index outside `1..=len` for the module
    #[error("Step {index} is out of range for module '{module_id}' (expected 1..={len})")]
    StepOutOfRange {
        module_id: String,
        index: u32,
        len: usize,
    },
    /// The tracker refused to move to the requested position
    #[error("Invalid transition: {reason}")]
    InvalidTransition {
        reason: String,
        #[source]
        source: Option<Box<TutorialError>>,
    },
    /// A lesson file could not be parsed
    #[error("Failed to parse lesson file '{name}': {source}")]
    CatalogParse {
        name: String,
        #[source]
        source: serde_yaml::Error,
    },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
}

fn location(module_id: &str, step: &Option<u32>) -> String {
    match step {
        Some(index) => format!("module '{module_id}', step {index}"),
        None => format!("module '{module_id}'"),
    }
}

/// Builder for content integrity errors.
pub struct IntegrityErrorBuilder {
    module_id: String,
    step: Option<u32>,
}

impl IntegrityErrorBuilder {
    /// Create a new integrity error builder for a module.
    pub fn new(module_id: impl Into<String>) -> Self {
        Self {
            module_id: module_id.into(),
            step: None,
        }
    }

    /// Narrow the error down to a single step of the module.
    pub fn at_step(mut self, index: u32) -> Self {
        self.step = Some(index);
        self
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> TutorialError {
        TutorialError::ContentIntegrity {
            module_id: self.module_id,
            step: self.step,
            reason: reason.into(),
        }
    }
}

/// Builder for invalid transition errors.
pub struct TransitionErrorBuilder {
    reason: String,
}

impl TransitionErrorBuilder {
    /// Create a new transition error builder with a reason.
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    /// Build the error caused by a failed registry lookup.
    pub fn caused_by(self, source: TutorialError) -> TutorialError {
        TutorialError::InvalidTransition {
            reason: self.reason,
            source: Some(Box::new(source)),
        }
    }

    /// Build the error without an underlying cause.
    pub fn build(self) -> TutorialError {
        TutorialError::InvalidTransition {
            reason: self.reason,
            source: None,
        }
    }
}

impl TutorialError {
    /// Creates a builder for content integrity errors.
    pub fn integrity(module_id: impl Into<String>) -> IntegrityErrorBuilder {
        IntegrityErrorBuilder::new(module_id)
    }

    /// Creates a builder for invalid transition errors.
    pub fn transition(reason: impl Into<String>) -> TransitionErrorBuilder {
        TransitionErrorBuilder::new(reason)
    }

    /// Whether a front end should fall back to a default view instead of
    /// aborting.
    ///
    /// Lookup and navigation failures are caused by user input. Integrity,
    /// parse and I/O failures mean the installation itself is broken.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            TutorialError::ModuleNotFound { .. }
                | TutorialError::StepOutOfRange { .. }
                | TutorialError::InvalidTransition { .. }
        )
    }
}

/// Result type alias for tutorial operations
pub type Result<T> = std::result::Result<T, TutorialError>;
