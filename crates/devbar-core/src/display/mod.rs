//! Display formatting for lesson content and learner progress.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]),
//! while collections and composed screens use newtype wrappers and view
//! structs. Everything renders to markdown, which a front end is free to
//! style further.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Wrappers & Views│    │    Markdown     │
//! │ (Module, Step)  │───▶│ (Checklist, ..) │───▶│     Output      │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`collections`]: Collection wrapper types (ModuleSummaries, Checklist, ModuleOverview)
//! - [`views`]: Composed screens (StepView, CompletionView)
//! - [`status`]: Outcome lines for reset, validate and recovered errors (OperationStatus)
//! - [`models`]: Display implementations for domain models
//!
//! ## Usage Examples
//!
//! ```rust
//! use devbar_core::{ContentRegistry, ProgressTracker, display::StepView};
//!
//! # fn main() -> devbar_core::Result<()> {
//! let registry = ContentRegistry::builtin()?;
//! let mut tracker = ProgressTracker::new(&registry);
//! let status = tracker.advance_to("1-react-basics", 2)?;
//!
//! let module = registry.get_module("1-react-basics")?;
//! let step = registry.get_step("1-react-basics", 2)?;
//! let output = StepView::new(module, step, status).to_string();
//! assert!(output.contains("Step 2 of 6"));
//! # Ok(())
//! # }
//! ```

pub mod collections;
pub mod models;
pub mod status;
pub mod views;

pub use collections::{Checklist, ModuleOverview, ModuleProgress, ModuleSummaries};
pub use status::OperationStatus;
pub use views::{CompletionView, StepView};
