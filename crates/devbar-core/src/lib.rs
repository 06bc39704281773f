//! Core library for the devbar React tutorial.
//!
//! This crate owns the lesson content and the rules for moving a learner
//! through it. It has no terminal or filesystem side effects of its own
//! beyond loading a catalog directory or a session file on request.
//!
//! - [`ContentRegistry`]: the read-only, validated catalog of modules
//! - [`ProgressTracker`]: one learner's position and module completion
//! - [`SessionFile`]: optional JSON persistence of that progress
//!
//! # Display Architecture
//!
//! Domain models implement [`std::fmt::Display`] and render to markdown;
//! collections and composed screens are wrapped by the types in
//! [`display`]. The CLI's terminal renderer styles that markdown further.
//!
//! # Quick Start
//!
//! ```rust
//! use devbar_core::{ContentRegistry, ModuleStatus, ProgressTracker};
//!
//! # fn main() -> devbar_core::Result<()> {
//! let registry = ContentRegistry::builtin()?;
//! for module in &registry.list_modules() {
//!     println!("{} ({} steps)", module.title, module.total_steps);
//! }
//!
//! let mut tracker = ProgressTracker::new(&registry);
//! let status = tracker.advance_to("1-react-basics", 1)?;
//! assert_eq!(status, ModuleStatus::InProgress);
//! println!("{}", tracker.overview());
//! # Ok(())
//! # }
//! ```

pub mod display;
pub mod error;
pub mod models;
pub mod registry;
pub mod session;
pub mod tracker;

// Re-export commonly used types
pub use display::{
    Checklist, CompletionView, ModuleOverview, ModuleProgress, ModuleSummaries, OperationStatus,
    StepView,
};
pub use error::{Result, TutorialError};
pub use models::{
    CodeExample, Completion, Module, ModuleStatus, ModuleSummary, ProgressState, Step, Task,
    TaskItem,
};
pub use registry::{ContentRegistry, ContentRegistryBuilder};
pub use session::SessionFile;
pub use tracker::ProgressTracker;
