//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers for UI modes and routes
//! - `analysis`: Analysis view, file tree and suggestion handlers
//! - `project`: New project dialog handlers
//! - `settings_handlers`: Settings page handlers

pub(crate) mod analysis;
pub(crate) mod keys;
pub(crate) mod project;
pub(crate) mod settings_handlers;
pub(crate) mod update;

#[cfg(test)]
mod tests;

use std::path::PathBuf;
use std::time::Duration;

use crate::config::Settings;
use crate::message::Message;
use crate::new_project::ProjectDraft;

// Re-export main entry points
pub use keys::handle_key;
pub use update::update;

/// Simulated latency of project creation
pub const PROJECT_CREATION_DELAY: Duration = Duration::from_millis(1000);

/// Actions that the event loop should perform after update
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateAction {
    /// Wait `delay`, then report `AnalysisCompleted` for the view mount
    SimulateAnalysis { mount_id: u64, delay: Duration },

    /// Wait `delay`, then build the project and report `ProjectCreated`
    CreateProject { draft: ProjectDraft, delay: Duration },

    /// Write settings to `<config_dir>/config.toml` and report `SettingsSaved`
    SaveSettings {
        config_dir: PathBuf,
        settings: Box<Settings>,
    },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
