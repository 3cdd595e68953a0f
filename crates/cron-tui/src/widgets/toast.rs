//! Toast stack in the top-right corner, newest first

use cron_app::config::Theme;
use cron_app::notifications::{Notifications, Toast, ToastVariant};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

use super::{truncate_with_ellipsis, wrap_words};
use crate::theme::{palette, styles};

const TOAST_WIDTH: u16 = 44;
const MAX_DESCRIPTION_LINES: usize = 2;

pub struct ToastStack<'a> {
    toasts: &'a Notifications,
    theme: Theme,
}

impl<'a> ToastStack<'a> {
    pub fn new(toasts: &'a Notifications, theme: Theme) -> Self {
        Self { toasts, theme }
    }

    fn toast_lines(toast: &Toast, width: usize) -> Vec<Line<'static>> {
        let title_style = match toast.variant {
            ToastVariant::Default => styles::text_bright(),
            ToastVariant::Destructive => styles::status_red().add_modifier(Modifier::BOLD),
        };
        let mut lines = vec![Line::from(Span::styled(
            truncate_with_ellipsis(&toast.title, width),
            title_style,
        ))];
        lines.extend(
            wrap_words(&toast.description, width)
                .into_iter()
                .take(MAX_DESCRIPTION_LINES)
                .map(|l| Line::from(Span::styled(l, styles::text_secondary()))),
        );
        lines
    }
}

impl Widget for ToastStack<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let width = TOAST_WIDTH.min(area.width);
        let x = area.right().saturating_sub(width + 1).max(area.x);
        let mut y = area.y + 1;

        for toast in self.toasts.iter().rev() {
            let lines = Self::toast_lines(toast, width.saturating_sub(4) as usize);
            let height = lines.len() as u16 + 2;
            if y + height > area.bottom() {
                break;
            }

            let border = match toast.variant {
                ToastVariant::Default => styles::accent(self.theme),
                ToastVariant::Destructive => styles::status_red(),
            };
            let rect = Rect::new(x, y, width, height);
            Clear.render(rect, buf);
            let block = Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(border)
                .style(Style::default().bg(palette::POPUP_BG));
            let inner = block.inner(rect);
            block.render(rect, buf);
            Paragraph::new(lines).render(
                Rect::new(inner.x + 1, inner.y, inner.width.saturating_sub(2), inner.height),
                buf,
            );

            y += height;
        }
    }
}
