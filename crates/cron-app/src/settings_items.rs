//! Settings item enumeration.
//!
//! Builds the list of setting rows per tab, used by both the settings handler
//! (for toggling) and the settings page widget (for rendering).

use crate::config::{SettingItem, SettingValue, Settings, SettingsTab, Theme};

fn toggle(id: &str, label: &str, description: &str, value: bool, section: &str) -> SettingItem {
    SettingItem::new(id, label)
        .description(description)
        .value(SettingValue::Bool(value))
        .section(section)
}

fn info_row(id: &str, label: &str, description: &str, text: String, section: &str) -> SettingItem {
    SettingItem::new(id, label)
        .description(description)
        .value(SettingValue::Text(text))
        .section(section)
        .readonly()
}

/// Rows for one tab, in display order.
pub fn items_for_tab(settings: &Settings, tab: SettingsTab) -> Vec<SettingItem> {
    match tab {
        SettingsTab::General => vec![
            SettingItem::new("appearance.theme", "Theme")
                .description("Choose your preferred theme")
                .value(SettingValue::Choice {
                    value: settings.appearance.theme.display_name().to_string(),
                    options: vec![
                        Theme::SolarFlare.display_name().to_string(),
                        Theme::DarkMatter.display_name().to_string(),
                    ],
                })
                .section("Appearance"),
            toggle(
                "appearance.auto_switch_theme",
                "Auto-switch themes",
                "Match system preferences",
                settings.appearance.auto_switch_theme,
                "Appearance",
            ),
            toggle(
                "notifications.analysis_complete",
                "Analysis complete",
                "Notify when code analysis finishes",
                settings.notifications.analysis_complete,
                "Notifications",
            ),
            toggle(
                "notifications.critical_issues",
                "Critical issues",
                "Alert for high-priority problems",
                settings.notifications.critical_issues,
                "Notifications",
            ),
            toggle(
                "behavior.confirm_quit",
                "Confirm quit",
                "Ask before quitting while work is in progress",
                settings.behavior.confirm_quit,
                "Behavior",
            ),
        ],
        SettingsTab::Analysis => vec![
            toggle(
                "analysis.auto_analyze_on_save",
                "Auto-analyze on save",
                "Run analysis when files are saved",
                settings.analysis.auto_analyze_on_save,
                "Code Analysis",
            ),
            toggle(
                "analysis.performance_suggestions",
                "Performance suggestions",
                "Include performance optimization hints",
                settings.analysis.performance_suggestions,
                "Code Analysis",
            ),
            toggle(
                "analysis.code_style_checking",
                "Code style checking",
                "Check for style and best practice violations",
                settings.analysis.code_style_checking,
                "Code Analysis",
            ),
            info_row(
                "analysis.delay_ms",
                "Analysis duration",
                "Simulated time an analysis takes",
                format!("{} ms", settings.analysis.delay_ms),
                "Code Analysis",
            ),
        ],
        SettingsTab::Integrations => vec![
            info_row(
                "integrations.vscode",
                "VS Code",
                "Connected",
                "Connected".to_string(),
                "IDE Integrations",
            ),
            info_row(
                "integrations.intellij",
                "IntelliJ IDEA",
                "Not connected",
                "Connect".to_string(),
                "IDE Integrations",
            ),
            toggle(
                "integrations.git_auto_commit",
                "Git integration",
                "Auto-commit applied fixes",
                settings.integrations.git_auto_commit,
                "Version Control",
            ),
        ],
        SettingsTab::Performance => vec![
            info_row(
                "performance.cpu_limit_percent",
                "CPU Usage Limit",
                "Maximum CPU usage for analysis",
                format!("{}%", settings.performance.cpu_limit_percent),
                "Performance",
            ),
            info_row(
                "performance.memory_limit_mb",
                "Memory Limit",
                "Maximum memory usage",
                settings.performance.memory_display(),
                "Performance",
            ),
        ],
        SettingsTab::Privacy => vec![
            toggle(
                "privacy.local_processing_only",
                "Local processing only",
                "Never send code to external servers",
                settings.privacy.local_processing_only,
                "Privacy & Security",
            ),
            toggle(
                "privacy.anonymous_usage_data",
                "Anonymous usage data",
                "Help improve CRON with anonymous data",
                settings.privacy.anonymous_usage_data,
                "Privacy & Security",
            ),
        ],
    }
}

/// Flip a boolean setting or advance a choice. Returns false for read-only or
/// unknown ids.
pub fn toggle_item(settings: &mut Settings, id: &str) -> bool {
    let flag = match id {
        "appearance.theme" => {
            settings.appearance.theme = settings.appearance.theme.toggled();
            return true;
        }
        "appearance.auto_switch_theme" => &mut settings.appearance.auto_switch_theme,
        "notifications.analysis_complete" => &mut settings.notifications.analysis_complete,
        "notifications.critical_issues" => &mut settings.notifications.critical_issues,
        "behavior.confirm_quit" => &mut settings.behavior.confirm_quit,
        "analysis.auto_analyze_on_save" => &mut settings.analysis.auto_analyze_on_save,
        "analysis.performance_suggestions" => &mut settings.analysis.performance_suggestions,
        "analysis.code_style_checking" => &mut settings.analysis.code_style_checking,
        "integrations.git_auto_commit" => &mut settings.integrations.git_auto_commit,
        "privacy.local_processing_only" => &mut settings.privacy.local_processing_only,
        "privacy.anonymous_usage_data" => &mut settings.privacy.anonymous_usage_data,
        _ => return false,
    };
    *flag = !*flag;
    true
}
