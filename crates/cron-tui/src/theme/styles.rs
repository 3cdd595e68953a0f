//! Semantic style builders.

use cron_app::config::Theme;
use cron_core::{Impact, IssueKind, ProjectStatus, Severity, SuggestionCategory};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use super::palette;

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

pub fn text_bright() -> Style {
    Style::default()
        .fg(palette::TEXT_BRIGHT)
        .add_modifier(Modifier::BOLD)
}

// --- Accent styles ---
pub fn accent(theme: Theme) -> Style {
    Style::default().fg(palette::accent(theme))
}

pub fn accent_bold(theme: Theme) -> Style {
    accent(theme).add_modifier(Modifier::BOLD)
}

/// Key hints such as `[r]` in status bars and dialogs
pub fn keybinding(theme: Theme) -> Style {
    Style::default().fg(palette::accent_secondary(theme))
}

/// Focused + selected row: contrast text on the accent
pub fn focused_selected(theme: Theme) -> Style {
    Style::default()
        .fg(palette::CONTRAST_FG)
        .bg(palette::accent(theme))
        .add_modifier(Modifier::BOLD)
}

/// Selected row in a pane that does not have focus
pub fn unfocused_selected() -> Style {
    Style::default()
        .fg(palette::TEXT_BRIGHT)
        .bg(palette::POPUP_BG)
}

// --- Status styles ---
pub fn status_green() -> Style {
    Style::default().fg(palette::STATUS_GREEN)
}

pub fn status_red() -> Style {
    Style::default().fg(palette::STATUS_RED)
}

pub fn status_yellow() -> Style {
    Style::default().fg(palette::STATUS_YELLOW)
}

pub fn status_blue() -> Style {
    Style::default().fg(palette::STATUS_BLUE)
}

// --- Block builders ---
pub fn glass_block(focused: bool, theme: Theme) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            accent(theme)
        } else {
            Style::default().fg(palette::BORDER_DIM)
        })
        .style(Style::default().bg(palette::CARD_BG))
}

pub fn modal_block(title: &str, theme: Theme) -> Block<'_> {
    Block::default()
        .title(format!(" {} ", title))
        .title_style(accent_bold(theme))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(accent(theme))
        .style(Style::default().bg(palette::POPUP_BG))
}

// --- Domain mappings ---

pub fn issue_color(kind: IssueKind) -> Color {
    match kind {
        IssueKind::Error => palette::STATUS_RED,
        IssueKind::Warning => palette::STATUS_YELLOW,
        IssueKind::Suggestion => palette::STATUS_BLUE,
    }
}

pub fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Critical => palette::STATUS_RED,
        Severity::Moderate => palette::STATUS_YELLOW,
        Severity::Minor => palette::STATUS_BLUE,
    }
}

/// `(icon, color)` for a suggestion category badge
pub fn category_indicator(category: SuggestionCategory) -> (&'static str, Color) {
    match category {
        SuggestionCategory::Performance => ("⚡", palette::STATUS_YELLOW),
        SuggestionCategory::Refactoring => ("⟲", palette::STATUS_BLUE),
        SuggestionCategory::BestPractice => ("✔", palette::STATUS_GREEN),
        SuggestionCategory::Security => ("⛨", palette::STATUS_RED),
    }
}

/// `(icon, Style)` for a project status
pub fn project_status_indicator(status: ProjectStatus) -> (&'static str, Style) {
    match status {
        ProjectStatus::Completed => ("●", status_green()),
        ProjectStatus::Analyzing => ("↻", status_yellow().add_modifier(Modifier::BOLD)),
        ProjectStatus::Error => ("✗", status_red()),
        ProjectStatus::Pending => ("○", text_muted()),
    }
}

pub fn impact_style(impact: Impact) -> Style {
    match impact {
        Impact::High => status_red(),
        Impact::Medium => status_yellow(),
        Impact::Low => status_blue(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_styles_have_correct_colors() {
        assert_eq!(text_primary().fg, Some(palette::TEXT_PRIMARY));
        assert_eq!(text_secondary().fg, Some(palette::TEXT_SECONDARY));
        assert_eq!(text_muted().fg, Some(palette::TEXT_MUTED));
        assert!(text_bright().add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn test_accent_follows_theme() {
        assert_eq!(
            accent(Theme::SolarFlare).fg,
            Some(palette::SOLAR_FLARE_PRIMARY)
        );
        assert_eq!(
            accent(Theme::DarkMatter).fg,
            Some(palette::DARK_MATTER_PRIMARY)
        );
    }

    #[test]
    fn test_focused_selected_uses_accent_background() {
        let style = focused_selected(Theme::DarkMatter);
        assert_eq!(style.fg, Some(palette::CONTRAST_FG));
        assert_eq!(style.bg, Some(palette::DARK_MATTER_PRIMARY));
    }

    #[test]
    fn test_issue_colors() {
        assert_eq!(issue_color(IssueKind::Error), palette::STATUS_RED);
        assert_eq!(issue_color(IssueKind::Warning), palette::STATUS_YELLOW);
        assert_eq!(issue_color(IssueKind::Suggestion), palette::STATUS_BLUE);
    }

    #[test]
    fn test_every_category_has_indicator() {
        for category in SuggestionCategory::ALL {
            let (icon, _) = category_indicator(category);
            assert!(!icon.is_empty());
        }
    }

    #[test]
    fn test_project_status_indicator() {
        let (icon, style) = project_status_indicator(ProjectStatus::Completed);
        assert_eq!(icon, "●");
        assert_eq!(style.fg, Some(palette::STATUS_GREEN));
        let (icon, _) = project_status_indicator(ProjectStatus::Pending);
        assert_eq!(icon, "○");
    }
}
