//! Settings page widget
//!
//! Tab bar across the top, the selected tab's rows grouped under their
//! section headings, and a footer with the save state and config file path.

use std::path::Path;

use cron_app::config::{config_path, SettingItem, SettingValue, Settings, SettingsTab, Theme};
use cron_app::settings_items::items_for_tab;
use cron_app::state::SettingsViewState;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::truncate_with_ellipsis;
use crate::theme::{palette, styles};

const LABEL_WIDTH: usize = 26;
const VALUE_WIDTH: usize = 16;

pub struct SettingsPage<'a> {
    settings: &'a Settings,
    view: &'a SettingsViewState,
    config_dir: &'a Path,
    theme: Theme,
}

impl<'a> SettingsPage<'a> {
    pub fn new(
        settings: &'a Settings,
        view: &'a SettingsViewState,
        config_dir: &'a Path,
    ) -> Self {
        Self {
            settings,
            view,
            config_dir,
            theme: settings.appearance.theme,
        }
    }

    fn tabs_line(&self) -> Line<'static> {
        let mut spans = vec![Span::raw(" ")];
        for (i, tab) in SettingsTab::ALL.iter().enumerate() {
            let label = format!(" {}. {} ", i + 1, tab.label());
            if *tab == self.view.active_tab {
                spans.push(Span::styled(label, styles::focused_selected(self.theme)));
            } else {
                spans.push(Span::styled(label, styles::text_secondary()));
            }
            spans.push(Span::raw(" "));
        }
        Line::from(spans)
    }

    fn value_span(item: &SettingItem, theme: Theme) -> Span<'static> {
        let text = format!("{:<width$}", item.value.display(), width = VALUE_WIDTH);
        let style = if item.readonly {
            styles::text_muted()
        } else {
            match &item.value {
                SettingValue::Bool(true) => styles::status_green(),
                SettingValue::Bool(false) => styles::text_secondary(),
                SettingValue::Choice { .. } => styles::accent(theme),
                SettingValue::Text(_) => styles::text_primary(),
            }
        };
        Span::styled(text, style)
    }

    fn item_line(&self, item: &SettingItem, selected: bool, width: usize) -> Line<'static> {
        let indicator = if selected { "▶ " } else { "  " };
        let label = format!(
            "{:<width$}",
            truncate_with_ellipsis(&item.label, LABEL_WIDTH),
            width = LABEL_WIDTH
        );
        let label_style = match (selected, item.readonly) {
            (true, _) => styles::accent_bold(self.theme),
            (false, true) => styles::text_muted(),
            (false, false) => styles::text_primary(),
        };

        let used = 2 + LABEL_WIDTH + 1 + VALUE_WIDTH + 1;
        let description = truncate_with_ellipsis(&item.description, width.saturating_sub(used));

        let line = Line::from(vec![
            Span::styled(indicator, styles::accent(self.theme)),
            Span::styled(label, label_style),
            Span::raw(" "),
            Self::value_span(item, self.theme),
            Span::raw(" "),
            Span::styled(description, styles::text_muted()),
        ]);
        if selected {
            line.style(Style::default().bg(palette::POPUP_BG))
        } else {
            line
        }
    }

    fn content_lines(&self, width: usize) -> Vec<Line<'static>> {
        let items = items_for_tab(self.settings, self.view.active_tab);
        let mut lines = Vec::new();
        let mut section: Option<&str> = None;

        for (i, item) in items.iter().enumerate() {
            if section != Some(item.section.as_str()) {
                if section.is_some() {
                    lines.push(Line::default());
                }
                section = Some(item.section.as_str());
                lines.push(Line::from(Span::styled(
                    format!(" {}", item.section),
                    styles::text_bright().add_modifier(Modifier::UNDERLINED),
                )));
            }
            lines.push(self.item_line(item, i == self.view.selected_index, width));
        }
        lines
    }

    fn footer_line(&self) -> Line<'static> {
        let state = if self.view.saving {
            Span::styled("Saving...", styles::status_yellow())
        } else if self.view.dirty {
            Span::styled("● Unsaved changes", styles::status_yellow())
        } else {
            Span::styled("✔ Saved", styles::status_green())
        };
        let path = config_path(self.config_dir).display().to_string();

        Line::from(vec![
            Span::raw(" "),
            Span::styled("[s]", styles::keybinding(self.theme)),
            Span::styled(" Save Changes  ", styles::text_secondary()),
            state,
            Span::styled(format!("   {}", path), styles::text_muted()),
        ])
    }
}

impl Widget for SettingsPage<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(true, self.theme)
            .title(Span::styled(" Settings ", styles::text_bright()));
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.height < 4 {
            return;
        }

        let [subtitle, tabs, _, content, footer] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        Paragraph::new(Span::styled(
            " Customize your CRON experience and preferences",
            styles::text_secondary(),
        ))
        .render(subtitle, buf);
        Paragraph::new(self.tabs_line()).render(tabs, buf);
        Paragraph::new(self.content_lines(content.width as usize)).render(content, buf);

        let footer_line = self.footer_line();
        let footer_line = if footer_line.width() > footer.width as usize {
            Line::from(footer_line.spans.into_iter().take(4).collect::<Vec<_>>())
        } else {
            footer_line
        };
        Paragraph::new(footer_line).render(footer, buf);
    }
}
