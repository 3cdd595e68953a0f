//! Configuration for the CRON assistant
//!
//! A single `config.toml` under the user's config directory, every field
//! defaulted so partial or missing files are fine.

pub mod settings;
pub mod types;

pub use settings::{config_path, default_config_dir, load_settings, save_settings};
pub use types::*;
