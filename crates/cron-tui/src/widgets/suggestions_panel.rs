//! AI suggestions pane: category tabs and the suggestion list
//!
//! Entries are pre-wrapped to the pane width so every produced line is one
//! screen row, which keeps scrolling to the cursor exact.

use cron_app::analysis::AnalysisView;
use cron_app::config::Theme;
use cron_app::suggestions::{filter_by_category, SuggestionPanelState};
use cron_core::{CategoryFilter, Suggestion};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::{truncate_with_ellipsis, wrap_words};
use crate::theme::{palette, styles};

pub struct SuggestionsPanel<'a> {
    panel: &'a SuggestionPanelState,
    theme: Theme,
    focused: bool,
}

impl<'a> SuggestionsPanel<'a> {
    pub fn new(view: &'a AnalysisView, theme: Theme, focused: bool) -> Self {
        Self {
            panel: &view.suggestions,
            theme,
            focused,
        }
    }

    fn tabs_line(&self) -> Line<'static> {
        let mut spans = vec![Span::raw(" ")];
        for tab in CategoryFilter::TABS {
            let count = filter_by_category(self.panel.items(), tab).len();
            let label = match tab {
                CategoryFilter::All => format!("All {}", count),
                CategoryFilter::Only(category) => {
                    format!("{} {}", styles::category_indicator(category).0, count)
                }
            };
            let style = if tab == self.panel.filter {
                styles::accent_bold(self.theme).add_modifier(Modifier::UNDERLINED)
            } else {
                styles::text_secondary()
            };
            spans.push(Span::styled(label, style));
            spans.push(Span::raw("  "));
        }
        Line::from(spans)
    }

    fn entry_lines(&self, item: &Suggestion, is_cursor: bool, width: usize) -> Vec<Line<'static>> {
        let (icon, color) = styles::category_indicator(item.category);
        let text_width = width.saturating_sub(3);

        let title_style = match (is_cursor, self.focused) {
            (true, true) => styles::focused_selected(self.theme),
            (true, false) => styles::unfocused_selected(),
            _ => styles::text_bright(),
        };
        let mut lines = vec![
            Line::from(vec![
                Span::styled(format!(" {} ", icon), Style::default().fg(color)),
                Span::styled(truncate_with_ellipsis(&item.title, text_width), title_style),
            ]),
            Line::from(vec![
                Span::raw("   "),
                Span::styled(
                    item.severity.label(),
                    Style::default().fg(styles::severity_color(item.severity)),
                ),
                Span::styled(
                    format!(" · {} · Line {}", item.category.label(), item.line_number),
                    styles::text_muted(),
                ),
            ]),
        ];

        if !item.expanded {
            return lines;
        }

        let indented = |text: String, style: Style| {
            Line::from(vec![Span::raw("   "), Span::styled(text, style)])
        };

        lines.extend(
            wrap_words(&item.description, text_width)
                .into_iter()
                .map(|l| indented(l, styles::text_secondary())),
        );

        lines.push(indented("Original:".to_string(), styles::text_muted()));
        for code in item.original_code.lines() {
            lines.push(indented(
                truncate_with_ellipsis(&format!("- {}", code), text_width),
                styles::status_red(),
            ));
        }
        lines.push(indented("Suggested:".to_string(), styles::text_muted()));
        for code in item.suggested_code.lines() {
            lines.push(indented(
                truncate_with_ellipsis(&format!("+ {}", code), text_width),
                styles::status_green(),
            ));
        }

        lines.extend(
            wrap_words(&format!("Impact: {}", item.impact), text_width)
                .into_iter()
                .map(|l| indented(l, styles::status_yellow())),
        );
        lines.extend(
            wrap_words(&item.reasoning, text_width)
                .into_iter()
                .map(|l| indented(l, styles::text_muted())),
        );

        lines.push(Line::from(vec![
            Span::raw("   "),
            Span::styled("[a]", styles::keybinding(self.theme)),
            Span::styled(" Apply  ", styles::text_secondary()),
            Span::styled("[x]", styles::keybinding(self.theme)),
            Span::styled(" Dismiss", styles::text_secondary()),
        ]));
        lines
    }

    fn render_list(&self, area: Rect, buf: &mut Buffer) {
        let visible = self.panel.visible();
        if visible.is_empty() {
            let [_, message] =
                Layout::vertical([Constraint::Length(area.height / 3), Constraint::Min(1)])
                    .areas(area);
            let lines: Vec<Line> = wrap_words(
                &self.panel.filter.empty_message(),
                area.width.saturating_sub(2) as usize,
            )
            .into_iter()
            .map(|l| Line::from(Span::styled(l, styles::text_secondary())))
            .collect();
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .render(message, buf);
            return;
        }

        let mut lines = Vec::new();
        let mut cursor_span = (0, 0);
        for (i, item) in visible.iter().enumerate() {
            let start = lines.len();
            lines.extend(self.entry_lines(item, i == self.panel.cursor, area.width as usize));
            if i == self.panel.cursor {
                cursor_span = (start, lines.len());
            }
            lines.push(Line::default());
        }

        let height = area.height as usize;
        let (start, end) = cursor_span;
        let offset = end.saturating_sub(height).min(start);

        Paragraph::new(lines)
            .scroll((offset as u16, 0))
            .render(area, buf);
    }
}

impl Widget for SuggestionsPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.focused, self.theme)
            .title(Span::styled(" ⚡ AI Suggestions ", styles::text_secondary()))
            .title(
                Line::from(Span::styled(
                    format!(" {} ", self.panel.total()),
                    styles::accent_bold(self.theme),
                ))
                .right_aligned(),
            );
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.height < 3 || inner.width == 0 {
            return;
        }

        let [tabs, separator, list] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(1),
        ])
        .areas(inner);

        Paragraph::new(self.tabs_line()).render(tabs, buf);
        Paragraph::new("─".repeat(separator.width as usize))
            .style(Style::default().fg(palette::BORDER_DIM))
            .render(separator, buf);
        self.render_list(list, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use cron_core::SuggestionCategory;

    fn render(view: &AnalysisView) -> TestTerminal {
        let mut term = TestTerminal::with_size(46, 30);
        term.render_widget(SuggestionsPanel::new(view, Theme::SolarFlare, true), term.area());
        term
    }

    #[test]
    fn test_lists_all_suggestions_with_total() {
        let view = AnalysisView::new(1, "1", None);
        let term = render(&view);

        assert!(term.line_contains(0, "AI Suggestions"));
        assert!(term.line_contains(0, " 3 "));
        assert!(term.line_contains(1, "All 3"));
        assert!(term.buffer_contains("Remove infinite useEffect loop"));
        assert!(term.buffer_contains("critical · performance · Line 11"));
        assert!(term.buffer_contains("Consolidate early returns"));
    }

    #[test]
    fn test_expanded_entry_shows_code_comparison() {
        let mut view = AnalysisView::new(1, "1", None);
        view.suggestions.toggle_expanded("1");
        let term = render(&view);

        assert!(term.buffer_contains("Original:"));
        assert!(term.buffer_contains("- });"));
        assert!(term.buffer_contains("+ }, [userId]);"));
        assert!(term.buffer_contains("Impact: High"));
        assert!(term.buffer_contains("[a] Apply"));
    }

    #[test]
    fn test_filtered_tab_hides_other_categories() {
        let mut view = AnalysisView::new(1, "1", None);
        view.suggestions
            .set_filter(CategoryFilter::Only(SuggestionCategory::Refactoring));
        let term = render(&view);

        assert!(term.buffer_contains("Consolidate early returns"));
        assert!(!term.buffer_contains("Remove infinite useEffect loop"));
    }

    #[test]
    fn test_empty_category_message() {
        let mut view = AnalysisView::new(1, "1", None);
        view.suggestions
            .set_filter(CategoryFilter::Only(SuggestionCategory::Security));
        let term = render(&view);
        assert!(term.buffer_contains("No security suggestions available."));
    }

    #[test]
    fn test_empty_list_message() {
        let mut view = AnalysisView::new(1, "1", None);
        for id in ["1", "2", "3"] {
            view.suggestions.apply(id);
        }
        let term = render(&view);

        assert!(term.line_contains(0, " 0 "));
        assert!(term.buffer_contains("Your code looks great!"));
    }

    #[test]
    fn test_cursor_entry_scrolled_into_view() {
        let mut view = AnalysisView::new(1, "1", None);
        for id in ["1", "2", "3"] {
            view.suggestions.toggle_expanded(id);
        }
        view.suggestions.cursor = 2;
        let mut term = TestTerminal::with_size(46, 14);
        term.render_widget(SuggestionsPanel::new(&view, Theme::SolarFlare, true), term.area());

        assert!(term.buffer_contains("Add PropTypes or TypeScript interface"));
    }
}
