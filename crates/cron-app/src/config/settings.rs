//! Settings loader and writer for config.toml

use super::types::Settings;
use cron_core::prelude::*;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.toml";
const APP_DIR: &str = "cron";

/// Default configuration directory (`<config_dir>/cron`).
pub fn default_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
}

pub fn config_path(config_dir: &Path) -> PathBuf {
    config_dir.join(CONFIG_FILENAME)
}

/// Load settings from `<config_dir>/config.toml`.
///
/// Never fails: a missing file yields defaults, an unreadable or invalid file
/// is logged and also yields defaults.
pub fn load_settings(config_dir: &Path) -> Settings {
    let path = config_path(config_dir);

    if !path.exists() {
        debug!("No config file at {:?}, using defaults", path);
        return Settings::default();
    }

    match std::fs::read_to_string(&path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", path);
                settings
            }
            Err(e) => {
                warn!("{}", Error::config_invalid(&path, e.to_string()));
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", path, e);
            Settings::default()
        }
    }
}

/// Save settings atomically (temp file + rename).
pub fn save_settings(config_dir: &Path, settings: &Settings) -> Result<()> {
    if !config_dir.exists() {
        std::fs::create_dir_all(config_dir)
            .map_err(|e| Error::config(format!("Failed to create config dir: {}", e)))?;
    }

    let path = config_path(config_dir);
    let temp_path = config_dir.join(".config.toml.tmp");

    let content = toml::to_string_pretty(settings)
        .map_err(|e| Error::config(format!("Failed to serialize settings: {}", e)))?;
    let full_content = format!("{}{}", CONFIG_HEADER, content);

    std::fs::write(&temp_path, &full_content)
        .map_err(|e| Error::config(format!("Failed to write temp file: {}", e)))?;

    std::fs::rename(&temp_path, &path)
        .map_err(|e| Error::config(format!("Failed to rename temp file: {}", e)))?;

    info!("Saved settings to {:?}", path);
    Ok(())
}

const CONFIG_HEADER: &str = "# CRON Configuration\n# Generated by the cron settings page\n\n";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::types::Theme;
    use tempfile::tempdir;

    #[test]
    fn test_load_missing_file_returns_defaults() {
        let dir = tempdir().unwrap();
        assert_eq!(load_settings(dir.path()), Settings::default());
    }

    #[test]
    fn test_load_invalid_file_returns_defaults() {
        let dir = tempdir().unwrap();
        std::fs::write(config_path(dir.path()), "appearance = [[[").unwrap();
        assert_eq!(load_settings(dir.path()), Settings::default());
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("nested").join("cron");

        let mut settings = Settings::default();
        settings.appearance.theme = Theme::DarkMatter;
        settings.privacy.anonymous_usage_data = true;
        settings.analysis.delay_ms = 250;

        save_settings(&nested, &settings).unwrap();

        let content = std::fs::read_to_string(config_path(&nested)).unwrap();
        assert!(content.starts_with("# CRON Configuration"));
        assert!(content.contains("theme = \"dark_matter\""));
        assert!(!nested.join(".config.toml.tmp").exists());

        assert_eq!(load_settings(&nested), settings);
    }

    #[test]
    fn test_default_config_dir_is_namespaced() {
        assert!(default_config_dir().ends_with("cron"));
    }
}
