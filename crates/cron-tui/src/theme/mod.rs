//! Centralized theme system.
//!
//! - `palette` - Raw color constants, plus the accent pair per [`Theme`]
//! - `styles` - Semantic style builder functions
//!
//! [`Theme`]: cron_app::config::Theme

pub mod palette;
pub mod styles;
