//! Configuration types for config.toml

use serde::{Deserialize, Serialize};

/// Application settings (`<config_dir>/config.toml`)
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub appearance: AppearanceSettings,

    #[serde(default)]
    pub notifications: NotificationSettings,

    #[serde(default)]
    pub analysis: AnalysisSettings,

    #[serde(default)]
    pub integrations: IntegrationSettings,

    #[serde(default)]
    pub performance: PerformanceSettings,

    #[serde(default)]
    pub privacy: PrivacySettings,

    #[serde(default)]
    pub behavior: BehaviorSettings,
}

// ─────────────────────────────────────────────────────────────────────────────
// Appearance
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    #[default]
    SolarFlare,
    DarkMatter,
}

impl Theme {
    pub fn display_name(&self) -> &'static str {
        match self {
            Theme::SolarFlare => "Solar Flare",
            Theme::DarkMatter => "Dark Matter",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::SolarFlare => Theme::DarkMatter,
            Theme::DarkMatter => Theme::SolarFlare,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct AppearanceSettings {
    #[serde(default)]
    pub theme: Theme,

    /// Match system preferences
    #[serde(default)]
    pub auto_switch_theme: bool,
}

// ─────────────────────────────────────────────────────────────────────────────
// Notifications
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct NotificationSettings {
    /// Show a toast when the simulated analysis finishes
    #[serde(default = "default_true")]
    pub analysis_complete: bool,

    #[serde(default = "default_true")]
    pub critical_issues: bool,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            analysis_complete: true,
            critical_issues: true,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Analysis
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct AnalysisSettings {
    #[serde(default = "default_true")]
    pub auto_analyze_on_save: bool,

    #[serde(default = "default_true")]
    pub performance_suggestions: bool,

    #[serde(default = "default_true")]
    pub code_style_checking: bool,

    /// Simulated analysis latency
    #[serde(default = "default_analysis_delay_ms")]
    pub delay_ms: u64,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            auto_analyze_on_save: true,
            performance_suggestions: true,
            code_style_checking: true,
            delay_ms: default_analysis_delay_ms(),
        }
    }
}

fn default_analysis_delay_ms() -> u64 {
    2000
}

// ─────────────────────────────────────────────────────────────────────────────
// Integrations / Performance / Privacy / Behavior
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct IntegrationSettings {
    /// Auto-commit applied fixes
    #[serde(default)]
    pub git_auto_commit: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PerformanceSettings {
    #[serde(default = "default_cpu_limit")]
    pub cpu_limit_percent: u8,

    #[serde(default = "default_memory_limit")]
    pub memory_limit_mb: u32,
}

impl Default for PerformanceSettings {
    fn default() -> Self {
        Self {
            cpu_limit_percent: default_cpu_limit(),
            memory_limit_mb: default_memory_limit(),
        }
    }
}

impl PerformanceSettings {
    /// "2GB" for whole gigabytes, otherwise "<n>MB".
    pub fn memory_display(&self) -> String {
        if self.memory_limit_mb >= 1024 && self.memory_limit_mb % 1024 == 0 {
            format!("{}GB", self.memory_limit_mb / 1024)
        } else {
            format!("{}MB", self.memory_limit_mb)
        }
    }
}

fn default_cpu_limit() -> u8 {
    50
}

fn default_memory_limit() -> u32 {
    2048
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PrivacySettings {
    /// Never send code to external servers
    #[serde(default = "default_true")]
    pub local_processing_only: bool,

    #[serde(default)]
    pub anonymous_usage_data: bool,
}

impl Default for PrivacySettings {
    fn default() -> Self {
        Self {
            local_processing_only: true,
            anonymous_usage_data: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct BehaviorSettings {
    /// Ask before quitting while simulated work is in flight
    #[serde(default = "default_true")]
    pub confirm_quit: bool,
}

impl Default for BehaviorSettings {
    fn default() -> Self {
        Self { confirm_quit: true }
    }
}

fn default_true() -> bool {
    true
}

// ─────────────────────────────────────────────────────────────────────────────
// Settings Panel Types
// ─────────────────────────────────────────────────────────────────────────────

/// Tabs of the settings page
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SettingsTab {
    #[default]
    General,
    Analysis,
    Integrations,
    Performance,
    Privacy,
}

impl SettingsTab {
    pub const ALL: [SettingsTab; 5] = [
        SettingsTab::General,
        SettingsTab::Analysis,
        SettingsTab::Integrations,
        SettingsTab::Performance,
        SettingsTab::Privacy,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SettingsTab::General => "General",
            SettingsTab::Analysis => "Analysis",
            SettingsTab::Integrations => "Integrations",
            SettingsTab::Performance => "Performance",
            SettingsTab::Privacy => "Privacy",
        }
    }

    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|t| t == self).unwrap_or(0)
    }

    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> Self {
        let len = Self::ALL.len();
        Self::ALL[(self.index() + len - 1) % len]
    }
}

/// Value of one settings row
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingValue {
    Bool(bool),
    Choice {
        value: String,
        options: Vec<String>,
    },
    /// Display-only text such as "Connected" or "50%"
    Text(String),
}

impl SettingValue {
    pub fn display(&self) -> String {
        match self {
            Self::Bool(true) => "On".to_string(),
            Self::Bool(false) => "Off".to_string(),
            Self::Choice { value, .. } => value.clone(),
            Self::Text(text) => text.clone(),
        }
    }
}

/// A single row on the settings page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingItem {
    /// Unique identifier (e.g., "notifications.analysis_complete")
    pub id: String,
    pub label: String,
    pub description: String,
    pub value: SettingValue,
    pub readonly: bool,
    /// Card heading the row is grouped under
    pub section: String,
}

impl SettingItem {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            description: String::new(),
            value: SettingValue::Bool(false),
            readonly: false,
            section: String::new(),
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn value(mut self, value: SettingValue) -> Self {
        self.value = value;
        self
    }

    pub fn readonly(mut self) -> Self {
        self.readonly = true;
        self
    }

    pub fn section(mut self, section: impl Into<String>) -> Self {
        self.section = section.into();
        self
    }
}
