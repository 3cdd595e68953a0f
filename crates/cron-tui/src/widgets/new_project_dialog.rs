//! "Create New Project" modal

use cron_app::config::Theme;
use cron_app::new_project::{FormField, NewProjectForm};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::{modal_overlay, truncate_with_ellipsis};
use crate::theme::{palette, styles};

const DIALOG_WIDTH: u16 = 64;
/// Title, description, five label/input pairs with spacers, footer and borders
const DIALOG_HEIGHT: u16 = 22;

/// Longest suffix of `text` that fits in `max_width` columns.
fn tail_to_width(text: &str, max_width: usize) -> &str {
    let mut width = 0;
    let mut start = text.len();
    for (i, c) in text.char_indices().rev() {
        width += c.width().unwrap_or(0);
        if width > max_width {
            break;
        }
        start = i;
    }
    &text[start..]
}

pub struct NewProjectDialog<'a> {
    form: &'a NewProjectForm,
    theme: Theme,
}

impl<'a> NewProjectDialog<'a> {
    pub fn new(form: &'a NewProjectForm, theme: Theme) -> Self {
        Self { form, theme }
    }

    fn label_line(&self, field: FormField, focused: bool) -> Line<'static> {
        let label = field.label();
        let (text, required) = match label.strip_suffix(" *") {
            Some(text) => (text, true),
            None => (label, false),
        };
        let style = if focused {
            styles::accent_bold(self.theme)
        } else {
            styles::text_secondary()
        };

        let mut spans = vec![Span::styled(format!(" {}", text), style)];
        if required {
            spans.push(Span::styled(" *", styles::status_red()));
        }
        if field == FormField::Path {
            spans.push(Span::styled("   [^O]", styles::keybinding(self.theme)));
            spans.push(Span::styled(" Browse", styles::text_muted()));
        }
        Line::from(spans)
    }

    fn input_line(&self, field: FormField, focused: bool, width: usize) -> Line<'static> {
        let value = self.form.value(field);
        let inner_width = width.saturating_sub(4);

        let (text, style) = if value.is_empty() {
            (field.placeholder().to_string(), styles::text_muted())
        } else if field == FormField::Language {
            (format!("◂ {} ▸", value), styles::text_primary())
        } else {
            // keep the end of long input visible while typing
            let shown = tail_to_width(value, inner_width.saturating_sub(1));
            (shown.to_string(), styles::text_primary())
        };

        let cursor = if focused && !self.form.submitting && field != FormField::Language {
            "▏"
        } else {
            ""
        };
        let text = truncate_with_ellipsis(&text, inner_width);
        let pad = inner_width.saturating_sub(text.width() + cursor.width());

        let bg = if focused {
            palette::EDITOR_BG
        } else {
            palette::CARD_BG
        };
        let edge = if focused {
            styles::accent(self.theme)
        } else {
            Style::default().fg(palette::BORDER_DIM)
        };

        Line::from(vec![
            Span::styled(" ▕", edge),
            Span::styled(text, style.bg(bg)),
            Span::styled(cursor, styles::accent(self.theme).bg(bg)),
            Span::styled(" ".repeat(pad), Style::default().bg(bg)),
            Span::styled("▏", edge),
        ])
    }

    fn footer_line(&self) -> Line<'static> {
        if self.form.submitting {
            return Line::from(Span::styled(
                "⟳ Creating... ",
                styles::status_yellow(),
            ));
        }
        Line::from(vec![
            Span::styled("[Esc]", styles::keybinding(self.theme)),
            Span::styled(" Cancel   ", styles::text_secondary()),
            Span::styled(" Create Project ", styles::focused_selected(self.theme)),
            Span::styled(" [Enter] ", styles::keybinding(self.theme)),
        ])
    }
}

impl Widget for NewProjectDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let modal = modal_overlay::open_modal(buf, area, DIALOG_WIDTH, DIALOG_HEIGHT);
        let block = styles::modal_block("Create New Project", self.theme);
        let inner = block.inner(modal);
        block.render(modal, buf);

        let width = inner.width as usize;
        let focus = self.form.focused();
        let mut lines = vec![
            Line::from(Span::styled(
                " Add a new project to start analyzing and optimizing your code.",
                styles::text_muted(),
            )),
            Line::default(),
        ];
        for field in FormField::ORDER {
            let focused = field == focus;
            lines.push(self.label_line(field, focused));
            lines.push(self.input_line(field, focused, width));
            lines.push(Line::default());
        }

        let footer_y = inner.bottom().saturating_sub(1);
        let body = Rect::new(inner.x, inner.y, inner.width, footer_y - inner.y);
        Paragraph::new(lines).render(body, buf);
        Paragraph::new(self.footer_line())
            .alignment(Alignment::Right)
            .render(Rect::new(inner.x, footer_y, inner.width, 1), buf);
    }
}
