//! cron-app - Application state and orchestration for the CRON assistant
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management: one [`AppState`] model, a closed [`Message`] enum, and a pure
//! [`handler::update`] function that funnels every mutation through named
//! operations on the view-state managers. Simulated background work is
//! described by [`UpdateAction`] and dispatched by [`actions::handle_action`].

pub mod actions;
pub mod analysis;
pub mod config;
pub mod confirm_dialog;
pub mod dashboard;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod new_project;
pub mod notifications;
pub mod route;
pub mod selection;
pub mod settings_items;
pub mod signals;
pub mod state;
pub mod suggestions;

// Re-export primary types
pub use handler::{UpdateAction, UpdateResult};
pub use message::Message;
pub use route::Route;
pub use state::AppState;
