//! Read-only code editor pane
//!
//! Header with the selected file and its issue summary, a line-numbered view
//! of the sample source with suggestion lines highlighted, and a footer with
//! file metadata and the last analysis result.

use cron_app::analysis::AnalysisView;
use cron_app::config::Theme;
use cron_core::mock::{SAMPLE_ENCODING, SAMPLE_LANGUAGE};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::{palette, styles};

pub struct CodeEditor<'a> {
    view: &'a AnalysisView,
    theme: Theme,
    focused: bool,
}

impl<'a> CodeEditor<'a> {
    pub fn new(view: &'a AnalysisView, theme: Theme, focused: bool) -> Self {
        Self {
            view,
            theme,
            focused,
        }
    }

    fn render_header(&self, area: Rect, buf: &mut Buffer) {
        let summary = match self.view.selected_issues() {
            Some(issues) => Span::styled(
                format!("   ⚠ {}", issues.summary()),
                Style::default().fg(styles::issue_color(issues.kind)),
            ),
            None => Span::styled("   ✔ No issues detected", styles::status_green()),
        };
        let title = Line::from(vec![
            Span::styled(" ◆ ", styles::accent(self.theme)),
            Span::styled(self.view.editor_title().to_string(), styles::text_bright()),
        ]);
        Paragraph::new(vec![title, Line::from(summary)]).render(area, buf);

        let action = if self.view.editor.analyzing {
            Line::from(Span::styled(
                "⟳ Analyzing... ",
                styles::status_yellow().add_modifier(Modifier::BOLD),
            ))
        } else {
            Line::from(vec![
                Span::styled("[r]", styles::keybinding(self.theme)),
                Span::styled(" Analyze Code ", styles::text_secondary()),
            ])
        };
        Paragraph::new(action)
            .alignment(Alignment::Right)
            .render(Rect { height: 1, ..area }, buf);
    }

    fn render_code(&self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(palette::EDITOR_BG));

        let editor = &self.view.editor;
        let highlighted = self.view.suggestions.referenced_lines();
        let gutter = editor.line_count().to_string().len();

        let lines: Vec<Line> = editor
            .source()
            .lines()
            .enumerate()
            .skip(editor.scroll)
            .take(area.height as usize)
            .map(|(i, text)| {
                let number = i + 1;
                let marked = highlighted.contains(&number);
                let marker = if marked {
                    Span::styled("●", styles::status_yellow())
                } else {
                    Span::raw(" ")
                };
                Line::from(vec![
                    marker,
                    Span::styled(
                        format!("{:>width$} │ ", number, width = gutter),
                        Style::default().fg(palette::LINE_NUMBER),
                    ),
                    Span::styled(text.to_string(), styles::text_primary()),
                ])
            })
            .collect();

        // full-width background for suggestion lines, text goes on top
        for (row, number) in (editor.scroll + 1..).take(area.height as usize).enumerate() {
            if highlighted.contains(&number) {
                let row_area = Rect::new(area.x, area.y + row as u16, area.width, 1);
                buf.set_style(row_area, Style::default().bg(palette::LINE_HIGHLIGHT_BG));
            }
        }

        Paragraph::new(lines).render(area, buf);
    }

    fn render_footer(&self, area: Rect, buf: &mut Buffer) {
        let editor = &self.view.editor;
        let meta = Line::from(vec![
            Span::styled(format!(" {} lines", editor.line_count()), styles::text_muted()),
            Span::styled(" · ", styles::text_muted()),
            Span::styled(SAMPLE_LANGUAGE, styles::text_muted()),
            Span::styled(" · ", styles::text_muted()),
            Span::styled(SAMPLE_ENCODING, styles::text_muted()),
        ]);
        Paragraph::new(meta).render(area, buf);

        if let Some(result) = editor.last_result.as_deref() {
            Paragraph::new(Line::from(Span::styled(
                format!("{} ", result),
                styles::status_green(),
            )))
            .alignment(Alignment::Right)
            .render(area, buf);
        }
    }
}

impl Widget for CodeEditor<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.focused, self.theme);
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.height < 5 || inner.width == 0 {
            return;
        }

        let [header, separator, code, footer] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        self.render_header(header, buf);
        Paragraph::new("─".repeat(separator.width as usize))
            .style(Style::default().fg(palette::BORDER_DIM))
            .render(separator, buf);
        self.render_code(code, buf);
        self.render_footer(footer, buf);
    }
}
