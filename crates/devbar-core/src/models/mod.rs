//! Data models for lesson content and learner progress.
//!
//! Content models ([`Module`], [`Step`], [`CodeExample`], [`Task`]) are plain
//! data loaded once from the lesson catalog and never mutated afterwards.
//! [`ProgressState`] is the only runtime record; it belongs to a single
//! learner session and is owned by a
//! [`ProgressTracker`](crate::tracker::ProgressTracker).
//!
//! Display implementations for these models live in
//! [`crate::display::models`] so that the data contract stays independent of
//! how a front end renders it.
//!
//! # Examples
//!
//! ```rust
//! use devbar_core::models::CodeExample;
//!
//! let snippet = CodeExample {
//!     title: "src/App.jsx".to_string(),
//!     body: "import HomePage from '@/pages/HomePage';\n\nconst App = () => <HomePage />;".to_string(),
//!     highlighted_lines: [1].into(),
//! };
//! assert_eq!(snippet.line_count(), 3);
//! assert!(snippet.is_highlighted(1));
//! assert!(!snippet.is_highlighted(3));
//! ```

pub mod code;
pub mod module;
pub mod progress;
pub mod status;
pub mod step;
pub mod summary;
pub mod task;


pub use code::{AnnotatedLine, CodeExample};
pub use module::{Completion, Module};
pub use progress::ProgressState;
pub use status::ModuleStatus;
pub use step::Step;
pub use summary::ModuleSummary;
pub use task::{Task, TaskItem};
