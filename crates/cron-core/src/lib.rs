//! # cron-core - Core Domain Types
//!
//! Foundation crate for the CRON assistant. Provides the domain records shown
//! in the UI, the static mock data that stands in for an analysis backend,
//! error handling and logging setup.
//!
//! This crate has **zero internal dependencies**.
//!
//! ## Public API
//!
//! ### Project Tree (`file_tree`)
//! - [`FileNode`] - A file or folder in a mock project tree
//! - [`NodeKind`], [`IssueAnnotation`], [`IssueKind`]
//!
//! ### Suggestions (`suggestion`)
//! - [`Suggestion`] - A proposed code change (never applied to real code)
//! - [`SuggestionCategory`], [`Severity`], [`CategoryFilter`]
//!
//! ### Dashboard Records (`project`)
//! - [`Project`], [`ProjectStatus`], [`Activity`], [`DashboardStats`]
//!
//! ### Mock Data (`mock`)
//! - Seed providers for every view: file tree, suggestions, projects,
//!   activity, sample source and FAQ entries
//!
//! ### Error Handling (`error`)
//! - [`Error`], [`Result`], [`ResultExt`]

pub mod error;
pub mod file_tree;
pub mod logging;
pub mod mock;
pub mod project;
pub mod suggestion;

/// Prelude for common imports used throughout all CRON crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

pub use error::{Error, Result, ResultExt};
pub use file_tree::{FileNode, IssueAnnotation, IssueKind, NodeKind};
pub use mock::Faq;
pub use project::{Activity, ActivityKind, DashboardStats, Impact, Project, ProjectStatus};
pub use suggestion::{CategoryFilter, Severity, Suggestion, SuggestionCategory};
