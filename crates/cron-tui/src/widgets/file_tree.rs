//! Project file tree pane of the analysis page

use cron_app::analysis::AnalysisView;
use cron_app::config::Theme;
use cron_app::selection::TreeRow;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use super::truncate_with_ellipsis;
use crate::theme::styles;

pub struct FileTree<'a> {
    view: &'a AnalysisView,
    theme: Theme,
    focused: bool,
}

impl<'a> FileTree<'a> {
    pub fn new(view: &'a AnalysisView, theme: Theme, focused: bool) -> Self {
        Self {
            view,
            theme,
            focused,
        }
    }

    fn row_line(&self, row: &TreeRow<'_>, is_cursor: bool, width: usize) -> Line<'static> {
        let node = row.node;
        let selected = self.view.selection.is_selected(&node.id);

        let icon = if node.is_folder() {
            if row.expanded {
                "▾ "
            } else {
                "▸ "
            }
        } else if node.is_source() {
            "◆ "
        } else {
            "· "
        };

        let badge = node.issues.map(|issues| format!(" {} ", issues.count));
        let indent = "  ".repeat(row.depth);
        let badge_width = badge.as_deref().map_or(0, UnicodeWidthStr::width);
        let name_width = width
            .saturating_sub(indent.width() + icon.width() + badge_width + 1)
            .max(1);
        let name = truncate_with_ellipsis(&node.name, name_width);
        let pad = width.saturating_sub(indent.width() + icon.width() + name.width() + badge_width);

        let name_style = if selected {
            styles::accent_bold(self.theme)
        } else if node.is_folder() {
            styles::text_secondary()
        } else {
            styles::text_primary()
        };

        let mut spans = vec![
            Span::raw(indent),
            Span::styled(icon, styles::text_muted()),
            Span::styled(name, name_style),
            Span::raw(" ".repeat(pad)),
        ];
        if let (Some(badge), Some(issues)) = (badge, node.issues) {
            spans.push(Span::styled(
                badge,
                Style::default()
                    .fg(styles::issue_color(issues.kind))
                    .add_modifier(Modifier::BOLD),
            ));
        }

        let line = Line::from(spans);
        match (is_cursor, self.focused) {
            (true, true) => line.style(styles::focused_selected(self.theme)),
            (true, false) => line.style(styles::unfocused_selected()),
            _ => line,
        }
    }
}

impl Widget for FileTree<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.focused, self.theme)
            .title(Span::styled(" Project Files ", styles::text_secondary()));
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let rows = self.view.selection.visible_rows(&self.view.tree);
        let height = inner.height as usize;
        let cursor = self.view.selection.cursor;
        // keep the cursor row on screen
        let offset = (cursor + 1).saturating_sub(height);

        let lines: Vec<Line> = rows
            .iter()
            .enumerate()
            .skip(offset)
            .take(height)
            .map(|(i, row)| self.row_line(row, i == cursor, inner.width as usize))
            .collect();

        Paragraph::new(lines).render(inner, buf);
    }
}
